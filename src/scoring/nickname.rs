//! Nickname (minor index) analysis

use super::compatibility::{
    compatibility_level, describe, is_same_harmony_group, pair_score, round_weighted,
};
use crate::numerology::{classify_letters, expression, normalize_vietnamese, personality, soul_urge};
use crate::types::{NicknameComparison, NicknameResult, NumerologyResult, ScoringConfig};

/// Weights (percent) of minor Expression, Soul Urge and Personality
const NICKNAME_WEIGHTS: [u32; 3] = [40, 35, 25];

const NICKNAME_DESCRIPTIONS: [&str; 4] = [
    "Biệt danh rất hài hòa với tên khai sinh! Năng lượng hàng ngày bổ trợ tuyệt vời cho bản chất bên trong.",
    "Biệt danh hợp với tên khai sinh. Năng lượng tương đồng, hỗ trợ tốt cho sự phát triển.",
    "Biệt danh ở mức trung bình so với tên khai sinh. Không xung đột nhưng chưa thật sự nổi bật.",
    "Biệt danh có năng lượng khác biệt so với tên khai sinh. Có thể tạo sự mâu thuẫn nhẹ trong tính cách thể hiện.",
];

/// Compare minor indices against a full-name analysis
pub fn compare_with_full_name(
    minor: [u32; 3],
    full: &NumerologyResult,
    config: &ScoringConfig,
) -> NicknameComparison {
    let major = [full.expression, full.soul_urge, full.personality];

    let weighted: u32 = minor
        .iter()
        .zip(major.iter())
        .zip(NICKNAME_WEIGHTS)
        .map(|((&m, &f), weight)| pair_score(m, f, config) * weight)
        .sum();

    let matches: Vec<bool> = minor
        .iter()
        .zip(major.iter())
        .map(|(&m, &f)| is_same_harmony_group(m, f))
        .collect();

    let mut harmony_score = round_weighted(weighted);
    if matches.iter().all(|&m| m) {
        harmony_score += config.nickname_harmony_bonus;
    }
    let harmony_score = harmony_score.min(100);
    let level = compatibility_level(harmony_score, config);

    NicknameComparison {
        full_name: full.original_name.clone(),
        expression_match: matches[0],
        soul_urge_match: matches[1],
        personality_match: matches[2],
        harmony_score,
        level,
        description: describe(level, &NICKNAME_DESCRIPTIONS),
    }
}

/// Analyze a nickname on its own, optionally compared with a full-name analysis
pub fn analyze_nickname(
    nickname: &str,
    full: Option<&NumerologyResult>,
    config: &ScoringConfig,
) -> NicknameResult {
    let normalized_nickname = normalize_vietnamese(nickname);
    let letters = classify_letters(&normalized_nickname);
    let minor = [expression(&letters), soul_urge(&letters), personality(&letters)];

    NicknameResult {
        nickname: nickname.to_string(),
        normalized_nickname,
        minor_expression: minor[0],
        minor_soul_urge: minor[1],
        minor_personality: minor[2],
        letters,
        comparison: full.map(|f| compare_with_full_name(minor, f, config)),
    }
}
