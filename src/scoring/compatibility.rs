//! Pairwise number compatibility and level classification

use crate::numerology::{is_master, reduce_to_single_digit};
use crate::types::{CompatibilityLevel, CompatibilityResult, CoreIndices, ScoringConfig};

/// Symmetric pair scores for single digits 1..9 (row/column = digit - 1)
const PAIR_MATRIX: [[u32; 9]; 9] = [
    [70, 60, 85, 55, 90, 65, 80, 75, 80],
    [60, 75, 70, 85, 55, 90, 60, 80, 75],
    [85, 70, 70, 55, 85, 90, 65, 60, 90],
    [55, 85, 55, 70, 55, 75, 65, 90, 60],
    [90, 55, 85, 55, 65, 55, 85, 60, 80],
    [65, 90, 90, 75, 55, 75, 55, 70, 90],
    [80, 60, 65, 65, 85, 55, 65, 55, 75],
    [75, 80, 60, 90, 60, 70, 55, 70, 65],
    [80, 75, 90, 60, 80, 90, 75, 65, 75],
];

/// Mutually compatible digit triples
pub const HARMONY_GROUPS: [[u32; 3]; 3] = [[1, 5, 7], [2, 4, 8], [3, 6, 9]];

/// Weights (percent) of the full-name pairs:
/// LP/Exp, LP/SU, Exp/Pers, LP/Bday, LP/Mat
const FULL_NAME_WEIGHTS: [u32; 5] = [30, 25, 20, 15, 10];

const FULL_NAME_DESCRIPTIONS: [&str; 4] = [
    "Tên và ngày sinh rất hài hòa! Tất cả 6 chỉ số bổ trợ lẫn nhau, tạo nền tảng vững chắc cho sự phát triển toàn diện.",
    "Tên và ngày sinh tương hợp tốt. Đa số các chỉ số cân bằng, phù hợp cho sự phát triển.",
    "Tên và ngày sinh ở mức trung bình. Một số chỉ số hài hòa, một số cần bổ trợ thêm từ môi trường và giáo dục.",
    "Tên và ngày sinh có sự khác biệt giữa các chỉ số. Tuy nhiên đây có thể là động lực giúp bé vượt qua thử thách và trưởng thành.",
];

fn harmony_group(n: u32) -> Option<usize> {
    let digit = reduce_to_single_digit(n);
    HARMONY_GROUPS.iter().position(|group| group.contains(&digit))
}

/// True when both numbers reduce into the same harmony triple
pub fn is_same_harmony_group(a: u32, b: u32) -> bool {
    match (harmony_group(a), harmony_group(b)) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}

/// Base compatibility of two indices.
///
/// Master numbers are looked up by their single-digit reduction and earn
/// `master_pair_bonus` (capped at 100). Operands outside the matrix, such
/// as the 0 of an empty name, score `default_pair_score`.
pub fn pair_score(a: u32, b: u32, config: &ScoringConfig) -> u32 {
    let (x, y) = (reduce_to_single_digit(a), reduce_to_single_digit(b));
    let base = if (1..=9).contains(&x) && (1..=9).contains(&y) {
        PAIR_MATRIX[(x - 1) as usize][(y - 1) as usize]
    } else {
        config.default_pair_score
    };

    if is_master(a) || is_master(b) {
        (base + config.master_pair_bonus).min(100)
    } else {
        base
    }
}

/// Round a sum of `score * percent` terms back to a 0..100 score
pub(crate) fn round_weighted(weighted_sum: u32) -> u32 {
    (weighted_sum + 50) / 100
}

pub fn compatibility_level(score: u32, config: &ScoringConfig) -> CompatibilityLevel {
    if score >= config.excellent_threshold {
        CompatibilityLevel::Excellent
    } else if score >= config.good_threshold {
        CompatibilityLevel::Good
    } else if score >= config.neutral_threshold {
        CompatibilityLevel::Neutral
    } else {
        CompatibilityLevel::Challenging
    }
}

/// Pick the sentence for `level` out of an excellent/good/neutral/challenging table
pub(crate) fn describe(level: CompatibilityLevel, table: &[&'static str; 4]) -> &'static str {
    match level {
        CompatibilityLevel::Excellent => table[0],
        CompatibilityLevel::Good => table[1],
        CompatibilityLevel::Neutral => table[2],
        CompatibilityLevel::Challenging => table[3],
    }
}

/// Full-name score from the six indices, before any Five-Element adjustment
pub fn name_compatibility_score(indices: &CoreIndices, config: &ScoringConfig) -> u32 {
    let lp = indices.life_path;
    let pairs = [
        (lp, indices.expression),
        (lp, indices.soul_urge),
        (indices.expression, indices.personality),
        (lp, indices.birthday),
        (lp, indices.maturity),
    ];

    let weighted: u32 = pairs
        .iter()
        .zip(FULL_NAME_WEIGHTS)
        .map(|(&(a, b), weight)| pair_score(a, b, config) * weight)
        .sum();

    let mut score = round_weighted(weighted);
    if is_same_harmony_group(indices.expression, indices.soul_urge) {
        score += config.full_harmony_bonus;
    }
    score.min(100)
}

/// Level and description of a final full-name score
pub fn full_name_result(score: u32, config: &ScoringConfig) -> CompatibilityResult {
    let level = compatibility_level(score, config);
    CompatibilityResult {
        score,
        level,
        description: describe(level, &FULL_NAME_DESCRIPTIONS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_score_is_symmetric() {
        let config = ScoringConfig::default();
        let numbers = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 11, 22, 33];
        for a in numbers {
            for b in numbers {
                assert_eq!(pair_score(a, b, &config), pair_score(b, a, &config), "{} / {}", a, b);
            }
        }
    }

    #[test]
    fn test_pair_score_values() {
        let config = ScoringConfig::default();
        assert_eq!(pair_score(1, 5, &config), 90);
        assert_eq!(pair_score(8, 3, &config), 60);
        // 11 -> 2, then +5
        assert_eq!(pair_score(3, 11, &config), 75);
        assert_eq!(pair_score(0, 4, &config), 65);
    }

    #[test]
    fn test_master_bonus_is_capped() {
        let config = ScoringConfig {
            master_pair_bonus: 50,
            ..Default::default()
        };
        // 22 -> 4, 4/8 = 90
        assert_eq!(pair_score(22, 8, &config), 100);
    }

    #[test]
    fn test_harmony_groups_partition_digits() {
        let mut seen = Vec::new();
        for group in HARMONY_GROUPS {
            seen.extend_from_slice(&group);
        }
        seen.sort_unstable();
        assert_eq!(seen, (1..=9).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_harmony_group_relation() {
        for a in 1..=9 {
            assert!(is_same_harmony_group(a, a));
            for b in 1..=9 {
                assert_eq!(is_same_harmony_group(a, b), is_same_harmony_group(b, a));
            }
        }
        assert!(is_same_harmony_group(11, 4));
        assert!(is_same_harmony_group(33, 9));
        assert!(!is_same_harmony_group(1, 2));
        assert!(!is_same_harmony_group(0, 0));
    }

    #[test]
    fn test_levels() {
        let config = ScoringConfig::default();
        assert_eq!(compatibility_level(100, &config), CompatibilityLevel::Excellent);
        assert_eq!(compatibility_level(82, &config), CompatibilityLevel::Excellent);
        assert_eq!(compatibility_level(81, &config), CompatibilityLevel::Good);
        assert_eq!(compatibility_level(65, &config), CompatibilityLevel::Good);
        assert_eq!(compatibility_level(45, &config), CompatibilityLevel::Neutral);
        assert_eq!(compatibility_level(44, &config), CompatibilityLevel::Challenging);
        assert_eq!(compatibility_level(0, &config), CompatibilityLevel::Challenging);
    }

    #[test]
    fn test_name_compatibility_score() {
        let config = ScoringConfig::default();
        let indices = CoreIndices {
            life_path: 8,
            expression: 3,
            soul_urge: 1,
            personality: 11,
            maturity: 11,
            birthday: 6,
        };
        // 60*30 + 75*25 + 75*20 + 70*15 + 85*10 = 7075
        assert_eq!(name_compatibility_score(&indices, &config), 71);
    }

    #[test]
    fn test_harmony_bonus_applies() {
        let config = ScoringConfig::default();
        let indices = CoreIndices {
            life_path: 1,
            expression: 5,
            soul_urge: 7,
            personality: 7,
            maturity: 6,
            birthday: 1,
        };
        // 90*30 + 80*25 + 85*20 + 70*15 + 65*10 = 8100 -> 81, +3
        assert_eq!(name_compatibility_score(&indices, &config), 84);
        assert_eq!(
            full_name_result(84, &config).level,
            CompatibilityLevel::Excellent
        );
    }
}
