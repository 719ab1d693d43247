//! Pythagorean letter values and vowel/consonant classification

use crate::types::{LetterEntry, LetterKind};

/// Pythagorean values for `A..=Z` (period 9: A=1 .. I=9, J=1 ..)
const PYTHAGOREAN_VALUES: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A-I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J-R
    1, 2, 3, 4, 5, 6, 7, 8, // S-Z
];

/// Fixed vowel set. Y is classified by context.
const VOWELS: &[char] = &['A', 'E', 'I', 'O', 'U'];

pub(crate) fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// Pythagorean value of an uppercase ASCII letter, 0 for anything else
pub fn letter_value(c: char) -> u32 {
    if c.is_ascii_uppercase() {
        PYTHAGOREAN_VALUES[(c as u8 - b'A') as usize]
    } else {
        0
    }
}

/// Classify the `Y` at `pos` within `word` (a single normalized word).
///
/// Rules, first match wins:
/// - no other A/E/I/O/U in the word: vowel (VY, MY)
/// - Y starts the word: consonant (YEN)
/// - Y follows a vowel: consonant (MAY, NGUYEN)
/// - Y sits between two consonants: vowel (KYLE)
/// - otherwise consonant
pub fn classify_y(word: &[char], pos: usize) -> LetterKind {
    let has_other_vowel = word
        .iter()
        .enumerate()
        .any(|(i, &c)| i != pos && is_vowel(c));
    if !has_other_vowel {
        return LetterKind::Vowel;
    }

    if pos == 0 {
        return LetterKind::Consonant;
    }

    let prev = word[pos - 1];
    if is_vowel(prev) {
        return LetterKind::Consonant;
    }

    match word.get(pos + 1) {
        Some(&next) if !is_vowel(next) => LetterKind::Vowel,
        _ => LetterKind::Consonant,
    }
}

/// Classify every letter of a normalized name, in order
pub fn classify_letters(normalized: &str) -> Vec<LetterEntry> {
    let mut entries = Vec::with_capacity(normalized.len());

    for word in normalized.split_whitespace() {
        let chars: Vec<char> = word.chars().filter(|c| c.is_ascii_uppercase()).collect();
        for (pos, &letter) in chars.iter().enumerate() {
            let kind = if letter == 'Y' {
                classify_y(&chars, pos)
            } else if is_vowel(letter) {
                LetterKind::Vowel
            } else {
                LetterKind::Consonant
            };

            entries.push(LetterEntry {
                letter,
                value: letter_value(letter),
                kind,
            });
        }
    }

    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn y_kind(word: &str) -> LetterKind {
        let chars: Vec<char> = word.chars().collect();
        let pos = chars.iter().position(|&c| c == 'Y').unwrap();
        classify_y(&chars, pos)
    }

    #[test]
    fn test_letter_values_cycle() {
        assert_eq!(letter_value('A'), 1);
        assert_eq!(letter_value('I'), 9);
        assert_eq!(letter_value('J'), letter_value('A'));
        assert_eq!(letter_value('R'), 9);
        assert_eq!(letter_value('S'), 1);
        assert_eq!(letter_value('Y'), 7);
        assert_eq!(letter_value('Z'), 8);
        assert_eq!(letter_value(' '), 0);
    }

    #[test]
    fn test_y_alone_is_vowel() {
        assert_eq!(y_kind("VY"), LetterKind::Vowel);
        assert_eq!(y_kind("Y"), LetterKind::Vowel);
        assert_eq!(y_kind("LY"), LetterKind::Vowel);
    }

    #[test]
    fn test_y_initial_is_consonant() {
        assert_eq!(y_kind("YEN"), LetterKind::Consonant);
    }

    #[test]
    fn test_y_after_vowel_is_consonant() {
        assert_eq!(y_kind("MAY"), LetterKind::Consonant);
        assert_eq!(y_kind("NGUYEN"), LetterKind::Consonant);
    }

    #[test]
    fn test_y_between_consonants_is_vowel() {
        assert_eq!(y_kind("KYLE"), LetterKind::Vowel);
        assert_eq!(y_kind("TYSON"), LetterKind::Vowel);
    }

    #[test]
    fn test_y_before_vowel_defaults_to_consonant() {
        assert_eq!(y_kind("TYA"), LetterKind::Consonant);
    }

    #[test]
    fn test_classify_letters_order_and_kinds() {
        let entries = classify_letters("VAN AN");
        let letters: String = entries.iter().map(|e| e.letter).collect();
        assert_eq!(letters, "VANAN");
        assert_eq!(entries[0].kind, LetterKind::Consonant);
        assert_eq!(entries[1].kind, LetterKind::Vowel);
        assert_eq!(entries[1].value, 1);
    }

    #[test]
    fn test_classify_letters_empty() {
        assert!(classify_letters("").is_empty());
        assert!(classify_letters("   ").is_empty());
    }
}
