//! Digit reduction and the six core indices

use super::date::{birth_day, parse_birth_date};
use super::letters::classify_letters;
use crate::types::{CoreIndices, LetterEntry, LetterKind};

/// Master numbers are kept unreduced by [`reduce_keeping_master`]
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

pub fn is_master(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Digit-sum until a single digit, stopping early at 11, 22 or 33
pub fn reduce_keeping_master(mut n: u32) -> u32 {
    while n > 9 && !is_master(n) {
        n = digit_sum(n);
    }
    n
}

/// Digit-sum until a single digit, with no master-number exception
pub fn reduce_to_single_digit(mut n: u32) -> u32 {
    while n > 9 {
        n = digit_sum(n);
    }
    n
}

/// Life Path from a `DD/MM/YYYY` date; 0 when the date is unreadable
pub fn life_path(birth_date: &str) -> u32 {
    let Some(parts) = parse_birth_date(birth_date) else {
        return 0;
    };

    let day = reduce_keeping_master(parts.day);
    let month = reduce_keeping_master(parts.month);
    let year_sum: u32 = parts.year_digits.chars().filter_map(|c| c.to_digit(10)).sum();
    let year = reduce_keeping_master(year_sum);

    reduce_keeping_master(day + month + year)
}

pub fn birthday(birth_date: &str) -> u32 {
    reduce_keeping_master(birth_day(birth_date))
}

/// Un-reduced letter sums: (all, vowels, consonants)
pub fn letter_sums(letters: &[LetterEntry]) -> (u32, u32, u32) {
    letters.iter().fold((0, 0, 0), |(all, vowels, consonants), entry| match entry.kind {
        LetterKind::Vowel => (all + entry.value, vowels + entry.value, consonants),
        LetterKind::Consonant => (all + entry.value, vowels, consonants + entry.value),
    })
}

pub fn expression(letters: &[LetterEntry]) -> u32 {
    reduce_keeping_master(letter_sums(letters).0)
}

pub fn soul_urge(letters: &[LetterEntry]) -> u32 {
    reduce_keeping_master(letter_sums(letters).1)
}

pub fn personality(letters: &[LetterEntry]) -> u32 {
    reduce_keeping_master(letter_sums(letters).2)
}

/// Master numbers in either input collapse before adding; the sum may
/// become a master number again.
pub fn maturity(life_path: u32, expression: u32) -> u32 {
    reduce_keeping_master(reduce_to_single_digit(life_path) + reduce_to_single_digit(expression))
}

/// All six indices of a normalized name and a `DD/MM/YYYY` date
pub fn compute_indices(normalized: &str, birth_date: &str) -> (CoreIndices, Vec<LetterEntry>) {
    let letters = classify_letters(normalized);
    let life_path = life_path(birth_date);
    let expression = expression(&letters);

    let indices = CoreIndices {
        life_path,
        expression,
        soul_urge: soul_urge(&letters),
        personality: personality(&letters),
        maturity: maturity(life_path, expression),
        birthday: birthday(birth_date),
    };
    (indices, letters)
}
