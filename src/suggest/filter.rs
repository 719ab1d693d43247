//! Post-search filtering and re-sorting of name candidates

use crate::types::{Element, NameCandidate, SortKey};

/// Filter applied to a finished candidate batch
#[derive(Debug, Clone, Default)]
pub struct CandidateFilter {
    min_score: Option<u32>,
    element: Option<Element>,
    sort_by: SortKey,
}

impl CandidateFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep candidates whose effective score is at least `score`
    pub fn with_min_score(mut self, score: u32) -> Self {
        self.min_score = Some(score);
        self
    }

    /// Keep candidates whose name element is `element`
    pub fn with_element(mut self, element: Element) -> Self {
        self.element = Some(element);
        self
    }

    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// Check a single candidate against the filter
    pub fn matches(&self, candidate: &NameCandidate) -> bool {
        if let Some(min) = self.min_score {
            if candidate.effective_score() < min {
                return false;
            }
        }

        if let Some(element) = self.element {
            let name_element = candidate
                .analysis
                .five_element
                .as_ref()
                .map(|fe| fe.name_element);
            if name_element != Some(element) {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, candidates: Vec<NameCandidate>) -> Vec<NameCandidate> {
        let mut kept: Vec<NameCandidate> = candidates.into_iter().filter(|c| self.matches(c)).collect();

        match self.sort_by {
            SortKey::Score => kept.sort_by(|a, b| b.effective_score().cmp(&a.effective_score())),
            SortKey::Name => kept.sort_by(|a, b| {
                a.analysis
                    .normalized_name
                    .cmp(&b.analysis.normalized_name)
                    .then_with(|| a.full_name.cmp(&b.full_name))
            }),
            SortKey::Expression => kept.sort_by_key(|c| c.analysis.expression),
        }

        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{analyze_full_name, blend_scores};
    use crate::types::ScoringConfig;

    fn candidate(given: &str) -> NameCandidate {
        let full_name = format!("Lê Văn {}", given);
        NameCandidate {
            surname: "Lê".to_string(),
            middle_part: "Văn".to_string(),
            given_name: given.to_string(),
            analysis: analyze_full_name(&full_name, "2024-03-15", &ScoringConfig::default()),
            full_name,
            meaning: String::new(),
            blended_score: None,
        }
    }

    fn batch() -> Vec<NameCandidate> {
        ["Đạt", "An", "Huy", "Ân", "Khang", "Bảo"]
            .into_iter()
            .map(candidate)
            .collect()
    }

    #[test]
    fn test_min_score() {
        let all = batch();
        let threshold = all.iter().map(|c| c.effective_score()).max().unwrap();
        let kept = CandidateFilter::new().with_min_score(threshold).apply(all);
        assert!(!kept.is_empty());
        assert!(kept.iter().all(|c| c.effective_score() == threshold));
    }

    #[test]
    fn test_min_score_uses_blended_score() {
        let mut c = candidate("An");
        c.blended_score = blend_scores(c.analysis.compatibility.score, Some(0), None, &ScoringConfig::default());
        let blended = c.effective_score();
        assert!(blended < c.analysis.compatibility.score);

        let filter = CandidateFilter::new().with_min_score(blended + 1);
        assert!(!filter.matches(&c));
    }

    #[test]
    fn test_element_filter() {
        let all = batch();
        let first_element = all[0].analysis.five_element.as_ref().unwrap().name_element;
        let kept = CandidateFilter::new().with_element(first_element).apply(all);
        assert!(kept
            .iter()
            .all(|c| c.analysis.five_element.as_ref().unwrap().name_element == first_element));
        assert!(kept.iter().any(|c| c.given_name == "Đạt"));
    }

    #[test]
    fn test_sort_by_name_orders_folded_then_display() {
        let kept = CandidateFilter::new().with_sort(SortKey::Name).apply(batch());
        let names: Vec<&str> = kept.iter().map(|c| c.given_name.as_str()).collect();
        // An and Ân fold to the same key; the display form breaks the tie
        assert_eq!(names, vec!["An", "Ân", "Bảo", "Đạt", "Huy", "Khang"]);
    }

    #[test]
    fn test_sort_by_expression() {
        let kept = CandidateFilter::new().with_sort(SortKey::Expression).apply(batch());
        assert!(kept
            .windows(2)
            .all(|w| w[0].analysis.expression <= w[1].analysis.expression));
    }
}
