//! Full-name analysis: indices, compatibility and the Five-Element overlay

use super::compatibility::{full_name_result, name_compatibility_score};
use crate::numerology::{
    birth_year, calc_can_chi, compute_indices, element_relation, normalize_vietnamese,
    number_to_element, to_numerology_date,
};
use crate::types::{FiveElementResult, NumerologyResult, ScoringConfig};

/// Five-Element overlay for an Expression number and a `DD/MM/YYYY` date.
/// Absent when the date carries no positive year.
pub fn five_element_for(expression: u32, birth_date: &str) -> Option<FiveElementResult> {
    let year = birth_year(birth_date)?;
    let can_chi = calc_can_chi(year);
    let name_element = number_to_element(expression);
    let year_element = can_chi.stem_element;

    Some(FiveElementResult {
        can_chi,
        name_element,
        year_element,
        relation: element_relation(name_element, year_element),
    })
}

/// Analyze a display name with a birth date in `DD/MM/YYYY` or `YYYY-MM-DD`.
///
/// Never fails: unreadable names and dates degrade to zero indices.
pub fn analyze_full_name(name: &str, birth_date: &str, config: &ScoringConfig) -> NumerologyResult {
    let birth_date = to_numerology_date(birth_date);
    let normalized_name = normalize_vietnamese(name);
    let (indices, letters) = compute_indices(&normalized_name, &birth_date);

    let five_element = five_element_for(indices.expression, &birth_date);
    let base = name_compatibility_score(&indices, config) as i32;
    let adjustment = five_element
        .as_ref()
        .map(|fe| fe.relation.score_adjustment)
        .unwrap_or(0);
    let score = (base + adjustment).clamp(0, 100) as u32;

    NumerologyResult {
        original_name: name.to_string(),
        normalized_name,
        birth_date,
        life_path: indices.life_path,
        expression: indices.expression,
        soul_urge: indices.soul_urge,
        personality: indices.personality,
        maturity: indices.maturity,
        birthday: indices.birthday,
        letters,
        compatibility: full_name_result(score, config),
        five_element,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CompatibilityLevel, Element, RelationKind};

    #[test]
    fn test_analyze_known_name() {
        let result = analyze_full_name("Nguyễn Văn An", "15/03/2024", &ScoringConfig::default());
        assert_eq!(result.normalized_name, "NGUYEN VAN AN");
        assert_eq!(result.life_path, 8);
        assert_eq!(result.expression, 3);
        assert_eq!(result.soul_urge, 1);
        assert_eq!(result.personality, 11);
        assert_eq!(result.birthday, 6);
        assert_eq!(result.maturity, 11);

        let fe = result.five_element.as_ref().unwrap();
        assert_eq!((fe.can_chi.stem, fe.can_chi.branch), ("Giáp", "Thìn"));
        assert_eq!(fe.name_element, Element::Fire);
        assert_eq!(fe.year_element, Element::Wood);
        assert_eq!(fe.relation.kind, RelationKind::Nurtured);

        // 71 base + 10 nurtured
        assert_eq!(result.compatibility.score, 81);
        assert_eq!(result.compatibility.level, CompatibilityLevel::Good);
    }

    #[test]
    fn test_iso_date_is_accepted() {
        let config = ScoringConfig::default();
        let iso = analyze_full_name("Nguyễn Văn An", "2024-03-15", &config);
        let dmy = analyze_full_name("Nguyễn Văn An", "15/03/2024", &config);
        assert_eq!(iso.birth_date, "15/03/2024");
        assert_eq!(iso.indices(), dmy.indices());
        assert_eq!(iso.compatibility, dmy.compatibility);
    }

    #[test]
    fn test_score_is_clamped_at_100() {
        let config = ScoringConfig::default();
        let result = analyze_full_name("Nguyễn Văn Huy", "03/05/2026", &config);

        // Earth name in a Bính (Fire) year
        let fe = result.five_element.as_ref().unwrap();
        assert_eq!(fe.relation.kind, RelationKind::Nurtured);
        assert_eq!(fe.relation.score_adjustment, 10);

        // 90 weighted + 3 harmony, then +10 overflows
        assert_eq!(name_compatibility_score(&result.indices(), &config), 93);
        assert_eq!(result.compatibility.score, 100);
        assert_eq!(result.compatibility.level, CompatibilityLevel::Excellent);
    }

    #[test]
    fn test_year_zero_has_no_element_overlay() {
        let result = analyze_full_name("AB", "01/01/0000", &ScoringConfig::default());
        assert!(result.five_element.is_none());
        assert_eq!(result.life_path, 2);
    }

    #[test]
    fn test_empty_name_degrades() {
        let result = analyze_full_name("!!!", "garbage", &ScoringConfig::default());
        assert_eq!(result.normalized_name, "");
        assert!(result.letters.is_empty());
        assert_eq!(result.life_path, 0);
        assert_eq!(result.expression, 0);
        assert!(result.five_element.is_none());
        assert!(result.compatibility.score <= 100);
    }
}
