//! Nickname suggestions ranked against a full name

use serde::{Deserialize, Serialize};

use super::dictionary::NameDictionary;
use crate::error::Result;
use crate::scoring::{analyze_full_name, analyze_nickname};
use crate::types::{GenderFilter, NicknameCandidate, NumerologyResult, ScoringConfig};
use crate::validation_error;

pub const DEFAULT_NICKNAME_LIMIT: usize = 20;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NicknameOptions {
    pub full_name: String,
    pub birth_date: String,
    #[serde(default)]
    pub gender: GenderFilter,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl NicknameOptions {
    pub fn new(full_name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            full_name: full_name.into(),
            birth_date: birth_date.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: GenderFilter) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.full_name.trim().is_empty() {
            return Err(validation_error!("full name is required"));
        }
        if self.birth_date.trim().is_empty() {
            return Err(validation_error!("birth date is required"));
        }
        Ok(())
    }
}

/// Suggest nicknames, analyzing the full name once
pub fn suggest_nicknames(
    dictionary: &NameDictionary,
    options: &NicknameOptions,
    config: &ScoringConfig,
) -> Result<Vec<NicknameCandidate>> {
    options.validate()?;
    let full = analyze_full_name(options.full_name.trim(), &options.birth_date, config);
    Ok(suggest_nicknames_for(dictionary, &full, options, config))
}

/// Rank every gender-matching nickname against an existing analysis
pub fn suggest_nicknames_for(
    dictionary: &NameDictionary,
    full: &NumerologyResult,
    options: &NicknameOptions,
    config: &ScoringConfig,
) -> Vec<NicknameCandidate> {
    let pool = dictionary.nicknames_for(options.gender);
    tracing::debug!(
        full_name = %full.original_name,
        pool = %pool.len(),
        "Ranking nicknames"
    );

    let mut candidates: Vec<NicknameCandidate> = pool
        .into_iter()
        .map(|entry| NicknameCandidate {
            nickname: entry.name.clone(),
            meaning: entry.meaning.clone(),
            category: entry.category.clone(),
            analysis: analyze_nickname(&entry.name, Some(full), config),
        })
        .collect();

    candidates.sort_by(|a, b| b.harmony_score().cmp(&a.harmony_score()));
    candidates.truncate(options.limit.unwrap_or(DEFAULT_NICKNAME_LIMIT));
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NameForgeError;
    use crate::types::Gender;

    #[test]
    fn test_requires_full_name() {
        let err = suggest_nicknames(
            &NameDictionary::builtin(),
            &NicknameOptions::new("", "2024-03-15"),
            &ScoringConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, NameForgeError::Validation { .. }));
    }

    #[test]
    fn test_ranked_and_limited() {
        let dict = NameDictionary::builtin();
        let options = NicknameOptions::new("Nguyễn Văn An", "2024-03-15").with_limit(5);
        let results = suggest_nicknames(&dict, &options, &ScoringConfig::default()).unwrap();

        assert_eq!(results.len(), 5);
        assert!(results.iter().all(|c| c.analysis.comparison.is_some()));
        assert!(results.windows(2).all(|w| w[0].harmony_score() >= w[1].harmony_score()));
    }

    #[test]
    fn test_gender_filter_keeps_unisex() {
        let dict = NameDictionary::builtin();
        let options = NicknameOptions::new("Trần Thị Lan", "2020-10-10")
            .with_gender(GenderFilter::Female)
            .with_limit(100);
        let results = suggest_nicknames(&dict, &options, &ScoringConfig::default()).unwrap();

        let expected = dict
            .nicknames
            .iter()
            .filter(|n| n.gender != Gender::Male)
            .count();
        assert_eq!(results.len(), expected);
    }
}
