//! Parent-child compatibility and the name/parent score blend

use super::analyze::analyze_full_name;
use super::compatibility::{
    compatibility_level, describe, is_same_harmony_group, pair_score, round_weighted,
};
use crate::types::{
    BlendedScore, NumerologyResult, PairBreakdown, ParentCompatibilityResult, ScoringConfig,
};

const PARENT_DESCRIPTIONS: [&str; 4] = [
    "Mối liên kết rất sâu sắc! Các chỉ số cốt lõi hài hòa cao, tạo nền tảng thấu hiểu và đồng hành lâu dài.",
    "Tương hợp tốt. Đa số các chỉ số cân bằng, cuộc sống gia đình hài hòa và dễ giao tiếp.",
    "Ở mức trung bình, một số chỉ số đồng điệu, một số cần thêm sự thấu hiểu và kiên nhẫn từ cả hai phía.",
    "Có sự khác biệt về năng lượng. Đây là cơ hội để cả hai học hỏi và bổ trợ lẫn nhau, cùng trưởng thành.",
];

/// Score a child analysis against an already-computed parent analysis
pub fn parent_compatibility_from_results(
    child: &NumerologyResult,
    parent: &NumerologyResult,
    config: &ScoringConfig,
) -> ParentCompatibilityResult {
    let pairs: [(&'static str, u32, u32, u32); 4] = [
        ("Sứ mệnh con ↔ Đường đời bố/mẹ", child.expression, parent.life_path, 35),
        ("Đường đời con ↔ Sứ mệnh bố/mẹ", child.life_path, parent.expression, 25),
        ("Linh hồn con ↔ Linh hồn bố/mẹ", child.soul_urge, parent.soul_urge, 20),
        ("Nhân cách con ↔ Nhân cách bố/mẹ", child.personality, parent.personality, 20),
    ];

    let breakdown: Vec<PairBreakdown> = pairs
        .iter()
        .map(|&(label, child_value, parent_value, weight)| PairBreakdown {
            label,
            child_value,
            parent_value,
            pair_score: pair_score(child_value, parent_value, config),
            weight,
        })
        .collect();

    let weighted: u32 = breakdown.iter().map(|p| p.pair_score * p.weight).sum();
    let mut score = round_weighted(weighted);
    if is_same_harmony_group(child.expression, parent.expression) {
        score += config.parent_harmony_bonus;
    }
    let score = score.min(100);
    let level = compatibility_level(score, config);

    ParentCompatibilityResult {
        parent_name: parent.original_name.clone(),
        parent_birth_date: parent.birth_date.clone(),
        score,
        level,
        description: describe(level, &PARENT_DESCRIPTIONS),
        breakdown,
    }
}

/// Analyze the parent, then score the child against them
pub fn parent_child_compatibility(
    child: &NumerologyResult,
    parent_name: &str,
    parent_birth_date: &str,
    config: &ScoringConfig,
) -> ParentCompatibilityResult {
    let parent = analyze_full_name(parent_name, parent_birth_date, config);
    parent_compatibility_from_results(child, &parent, config)
}

/// Blend a name score with the average of whichever parent scores exist.
///
/// Returns `None` when neither parent was scored.
pub fn blend_scores(
    name_score: u32,
    father_score: Option<u32>,
    mother_score: Option<u32>,
    config: &ScoringConfig,
) -> Option<BlendedScore> {
    let scores: Vec<u32> = [father_score, mother_score].into_iter().flatten().collect();
    if scores.is_empty() {
        return None;
    }

    let n = scores.len() as u32;
    let sum: u32 = scores.iter().sum();
    // Integer half-up rounding of the weighted mean
    let numerator = name_score * config.name_weight * n + sum * config.parent_weight;
    let denominator = 100 * n;
    let final_score = (2 * numerator + denominator) / (2 * denominator);

    Some(BlendedScore {
        final_score: final_score.min(100),
        name_score,
        parent_score: (2 * sum + n) / (2 * n),
        father_score,
        mother_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CompatibilityLevel;

    #[test]
    fn test_parent_same_as_child() {
        let config = ScoringConfig::default();
        let child = analyze_full_name("Nguyễn Văn An", "15/03/2024", &config);
        let result = parent_child_compatibility(&child, "Nguyễn Văn An", "2024-03-15", &config);

        assert_eq!(result.parent_birth_date, "15/03/2024");
        assert_eq!(result.breakdown.len(), 4);
        assert_eq!(result.breakdown.iter().map(|p| p.weight).sum::<u32>(), 100);
        assert_eq!(result.breakdown[0].pair_score, 60);
        assert_eq!(result.breakdown[3].pair_score, 80);
        // 6600 -> 66, +2 same group
        assert_eq!(result.score, 68);
        assert_eq!(result.level, CompatibilityLevel::Good);
    }

    #[test]
    fn test_blend_single_parent() {
        let config = ScoringConfig::default();
        let blended = blend_scores(81, Some(68), None, &config).unwrap();
        // 81 * 0.7 + 68 * 0.3 = 77.1
        assert_eq!(blended.final_score, 77);
        assert_eq!(blended.parent_score, 68);
        assert_eq!(blended.mother_score, None);
    }

    #[test]
    fn test_blend_two_parents_rounds_half_up() {
        let config = ScoringConfig::default();
        let blended = blend_scores(80, Some(70), Some(75), &config).unwrap();
        // 80 * 0.7 + 72.5 * 0.3 = 77.75
        assert_eq!(blended.final_score, 78);
        assert_eq!(blended.parent_score, 73);
    }

    #[test]
    fn test_blend_without_parents() {
        assert!(blend_scores(80, None, None, &ScoringConfig::default()).is_none());
    }
}
