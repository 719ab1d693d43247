//! Five Elements (Ngũ Hành) and the Can-Chi year cycle
//!
//! ## Stem / branch indices
//!
//! - Stems: Giáp(0) Ất(1) Bính(2) Đinh(3) Mậu(4) Kỷ(5) Canh(6) Tân(7) Nhâm(8) Quý(9)
//! - Branches: Tý(0) Sửu(1) Dần(2) Mão(3) Thìn(4) Tỵ(5) Ngọ(6) Mùi(7) Thân(8) Dậu(9) Tuất(10) Hợi(11)
//!
//! Year 4 is Giáp Tý, so both cycles are anchored at `year - 4`.

use super::indices::reduce_to_single_digit;
use crate::types::{CanChi, Element, ElementRelation, Polarity, RelationKind};

/// Year whose stem and branch both have index 0
const CYCLE_ANCHOR_YEAR: i64 = 4;

const STEMS: [(&str, Element, Polarity); 10] = [
    ("Giáp", Element::Wood, Polarity::Yang),
    ("Ất", Element::Wood, Polarity::Yin),
    ("Bính", Element::Fire, Polarity::Yang),
    ("Đinh", Element::Fire, Polarity::Yin),
    ("Mậu", Element::Earth, Polarity::Yang),
    ("Kỷ", Element::Earth, Polarity::Yin),
    ("Canh", Element::Metal, Polarity::Yang),
    ("Tân", Element::Metal, Polarity::Yin),
    ("Nhâm", Element::Water, Polarity::Yang),
    ("Quý", Element::Water, Polarity::Yin),
];

const BRANCHES: [(&str, Element); 12] = [
    ("Tý", Element::Water),
    ("Sửu", Element::Earth),
    ("Dần", Element::Wood),
    ("Mão", Element::Wood),
    ("Thìn", Element::Earth),
    ("Tỵ", Element::Fire),
    ("Ngọ", Element::Fire),
    ("Mùi", Element::Earth),
    ("Thân", Element::Metal),
    ("Dậu", Element::Metal),
    ("Tuất", Element::Earth),
    ("Hợi", Element::Water),
];

/// Stem and branch of a solar year
pub fn calc_can_chi(year: i64) -> CanChi {
    let offset = year.rem_euclid(60) - CYCLE_ANCHOR_YEAR;
    let stem_index = offset.rem_euclid(10) as usize;
    let branch_index = offset.rem_euclid(12) as usize;

    let (stem, stem_element, polarity) = STEMS[stem_index];
    let (branch, branch_element) = BRANCHES[branch_index];

    CanChi {
        stem,
        branch,
        stem_element,
        branch_element,
        polarity,
    }
}

/// Element of a name from its Expression number
pub fn number_to_element(n: u32) -> Element {
    match reduce_to_single_digit(n) {
        1 | 2 => Element::Wood,
        3 | 4 => Element::Fire,
        5 | 6 => Element::Earth,
        7 | 8 => Element::Metal,
        9 => Element::Water,
        _ => Element::Earth,
    }
}

/// Generating cycle: Metal → Water → Wood → Fire → Earth → Metal
pub fn generates(from: Element, to: Element) -> bool {
    matches!(
        (from, to),
        (Element::Metal, Element::Water)
            | (Element::Water, Element::Wood)
            | (Element::Wood, Element::Fire)
            | (Element::Fire, Element::Earth)
            | (Element::Earth, Element::Metal)
    )
}

/// Overcoming cycle: Metal → Wood → Earth → Water → Fire → Metal
pub fn overcomes(from: Element, to: Element) -> bool {
    matches!(
        (from, to),
        (Element::Metal, Element::Wood)
            | (Element::Wood, Element::Earth)
            | (Element::Earth, Element::Water)
            | (Element::Water, Element::Fire)
            | (Element::Fire, Element::Metal)
    )
}

/// Classify the name element against the birth-year element
pub fn element_relation(name: Element, year: Element) -> ElementRelation {
    let (n, y) = (name.vi_name(), year.vi_name());

    let (kind, description, score_adjustment) = if name == year {
        (
            RelationKind::Neutral,
            format!("{} và {}: Bình hòa, đồng hành", n, y),
            5,
        )
    } else if generates(year, name) {
        (
            RelationKind::Nurtured,
            format!("{} sinh {}: Được sinh, thuận lợi phát triển", y, n),
            10,
        )
    } else if generates(name, year) {
        (
            RelationKind::Generating,
            format!("{} sinh {}: Tương sinh, hao tổn nhẹ nhưng tốt lành", n, y),
            3,
        )
    } else if overcomes(year, name) {
        (
            RelationKind::Weakened,
            format!("{} khắc {}: Bị khắc, gặp trở ngại", y, n),
            -8,
        )
    } else if overcomes(name, year) {
        (
            RelationKind::Weakening,
            format!("{} khắc {}: Tương khắc nhẹ, cần cân bằng", n, y),
            -3,
        )
    } else {
        (RelationKind::Neutral, format!("{} và {}: Bình hòa", n, y), 0)
    };

    ElementRelation {
        kind,
        description,
        score_adjustment,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_chi_2026() {
        let cc = calc_can_chi(2026);
        assert_eq!(cc.stem, "Bính");
        assert_eq!(cc.branch, "Ngọ");
        assert_eq!(cc.stem_element, Element::Fire);
        assert_eq!(cc.branch_element, Element::Fire);
        assert_eq!(cc.polarity, Polarity::Yang);
    }

    #[test]
    fn test_can_chi_known_years() {
        let cc = calc_can_chi(2024);
        assert_eq!((cc.stem, cc.branch), ("Giáp", "Thìn"));
        let cc = calc_can_chi(1990);
        assert_eq!((cc.stem, cc.branch), ("Canh", "Ngọ"));
        assert_eq!(cc.stem_element, Element::Metal);
    }

    #[test]
    fn test_can_chi_extreme_years() {
        assert_eq!(calc_can_chi(i64::MIN), calc_can_chi(i64::MIN.rem_euclid(60)));
        assert_eq!(calc_can_chi(i64::MAX), calc_can_chi(i64::MAX.rem_euclid(60)));
        let cc = calc_can_chi(-56);
        assert_eq!((cc.stem, cc.branch), ("Giáp", "Tý"));
    }

    #[test]
    fn test_can_chi_period_60() {
        for year in 1..400 {
            assert_eq!(calc_can_chi(year), calc_can_chi(year + 60));
        }
    }

    #[test]
    fn test_can_chi_before_anchor() {
        // 3 is one year before Giáp Tý: Quý Hợi
        let cc = calc_can_chi(3);
        assert_eq!((cc.stem, cc.branch), ("Quý", "Hợi"));
    }

    #[test]
    fn test_number_to_element() {
        assert_eq!(number_to_element(1), Element::Wood);
        assert_eq!(number_to_element(4), Element::Fire);
        assert_eq!(number_to_element(6), Element::Earth);
        assert_eq!(number_to_element(7), Element::Metal);
        assert_eq!(number_to_element(9), Element::Water);
        assert_eq!(number_to_element(11), Element::Wood);
        assert_eq!(number_to_element(22), Element::Fire);
        assert_eq!(number_to_element(33), Element::Earth);
        assert_eq!(number_to_element(0), Element::Earth);
    }

    #[test]
    fn test_element_relation_priority() {
        let rel = element_relation(Element::Fire, Element::Fire);
        assert_eq!((rel.kind, rel.score_adjustment), (RelationKind::Neutral, 5));

        let rel = element_relation(Element::Fire, Element::Wood);
        assert_eq!((rel.kind, rel.score_adjustment), (RelationKind::Nurtured, 10));

        let rel = element_relation(Element::Wood, Element::Fire);
        assert_eq!((rel.kind, rel.score_adjustment), (RelationKind::Generating, 3));

        let rel = element_relation(Element::Wood, Element::Metal);
        assert_eq!((rel.kind, rel.score_adjustment), (RelationKind::Weakened, -8));

        let rel = element_relation(Element::Metal, Element::Wood);
        assert_eq!((rel.kind, rel.score_adjustment), (RelationKind::Weakening, -3));
        assert!(rel.description.contains("Kim khắc Mộc"));
    }

    #[test]
    fn test_every_distinct_pair_has_a_cycle_relation() {
        for a in Element::ALL {
            for b in Element::ALL {
                if a != b {
                    let related = generates(a, b) || generates(b, a) || overcomes(a, b) || overcomes(b, a);
                    assert!(related, "{} / {}", a, b);
                }
            }
        }
    }
}
