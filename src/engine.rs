//! Engine facade holding configuration, dictionaries and an analysis cache

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::error::Result;
use crate::numerology::{calc_can_chi, to_numerology_date};
use crate::scoring::{analyze_full_name, analyze_nickname, parent_compatibility_from_results};
use crate::suggest::{
    suggest_names_with_parents, suggest_nicknames_for, NameDictionary, NicknameOptions,
    ParentInput, SuggestOptions,
};
use crate::types::{
    CanChi, EngineConfig, NameCandidate, NicknameCandidate, NicknameResult, NumerologyResult,
    ParentCompatibilityResult,
};

type CacheKey = (String, String);

/// Entry point for every numerology operation.
///
/// Full-name analyses requested through [`NumerologyEngine::analyze_cached`]
/// are memoized by `(name, DD/MM/YYYY)`. The cache is cleared once it holds
/// `cache_capacity` entries.
pub struct NumerologyEngine {
    config: EngineConfig,
    dictionary: NameDictionary,
    cache: Arc<RwLock<HashMap<CacheKey, Arc<NumerologyResult>>>>,
}

impl NumerologyEngine {
    /// Engine with default configuration and the built-in dictionary
    pub fn new() -> Self {
        Self::with_dictionary(EngineConfig::default(), NameDictionary::builtin())
    }

    /// Engine with `config`, loading `config.dictionary_path` when set
    pub fn with_config(config: EngineConfig) -> Result<Self> {
        config.scoring.validate()?;

        let dictionary = match &config.dictionary_path {
            Some(path) => {
                let dictionary = NameDictionary::from_file(path)?;
                tracing::info!(
                    path = %path.display(),
                    given_names = %dictionary.given_names.len(),
                    middle_names = %dictionary.middle_names.len(),
                    nicknames = %dictionary.nicknames.len(),
                    "Loaded name dictionary"
                );
                if dictionary.given_names.is_empty() {
                    tracing::warn!(path = %path.display(), "Dictionary has no given names, name searches will be empty");
                }
                dictionary
            }
            None => NameDictionary::builtin(),
        };

        Ok(Self::with_dictionary(config, dictionary))
    }

    pub fn with_dictionary(config: EngineConfig, dictionary: NameDictionary) -> Self {
        Self {
            config,
            dictionary,
            cache: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn dictionary(&self) -> &NameDictionary {
        &self.dictionary
    }

    /// Uncached full-name analysis
    pub fn analyze(&self, name: &str, birth_date: &str) -> NumerologyResult {
        analyze_full_name(name, birth_date, &self.config.scoring)
    }

    /// Full-name analysis through the memoization cache
    pub fn analyze_cached(&self, name: &str, birth_date: &str) -> Arc<NumerologyResult> {
        let key = (name.trim().to_string(), to_numerology_date(birth_date));

        if let Some(hit) = self.cache.read().get(&key) {
            return Arc::clone(hit);
        }

        let result = Arc::new(analyze_full_name(&key.0, &key.1, &self.config.scoring));

        let mut cache = self.cache.write();
        if cache.len() >= self.config.cache_capacity {
            tracing::debug!(entries = %cache.len(), "Analysis cache full, clearing");
            cache.clear();
        }
        if self.config.cache_capacity > 0 {
            cache.insert(key, Arc::clone(&result));
        }
        result
    }

    pub fn cache_len(&self) -> usize {
        self.cache.read().len()
    }

    pub fn clear_cache(&self) {
        self.cache.write().clear();
    }

    /// Nickname analysis, compared with the full name when both name and date are given
    pub fn analyze_nickname(
        &self,
        nickname: &str,
        full_name: Option<&str>,
        birth_date: Option<&str>,
    ) -> NicknameResult {
        let full = match (full_name, birth_date) {
            (Some(name), Some(date)) if !name.trim().is_empty() && !date.trim().is_empty() => {
                Some(self.analyze_cached(name, date))
            }
            _ => None,
        };
        analyze_nickname(nickname, full.as_deref(), &self.config.scoring)
    }

    /// Score a child's name against one parent
    pub fn parent_compatibility(
        &self,
        child_name: &str,
        child_birth_date: &str,
        parent: &ParentInput,
    ) -> ParentCompatibilityResult {
        let child = self.analyze_cached(child_name, child_birth_date);
        let parent = self.analyze_cached(&parent.name, &parent.birth_date);
        parent_compatibility_from_results(&child, &parent, &self.config.scoring)
    }

    /// Exhaustive name search; parents are analyzed once through the cache
    pub fn suggest(&self, options: &SuggestOptions) -> Result<Vec<NameCandidate>> {
        options.validate()?;

        let mut options = options.clone();
        options.limit = Some(options.limit.unwrap_or(self.config.default_limit));

        let resolve = |parent: &Option<ParentInput>| {
            parent
                .as_ref()
                .filter(|p| p.is_complete())
                .map(|p| self.analyze_cached(&p.name, &p.birth_date))
        };
        let father = resolve(&options.parents.father);
        let mother = resolve(&options.parents.mother);

        suggest_names_with_parents(
            &self.dictionary,
            &options,
            father.as_deref(),
            mother.as_deref(),
            &self.config.scoring,
        )
    }

    /// Nicknames ranked against a full name
    pub fn suggest_nicknames(&self, options: &NicknameOptions) -> Result<Vec<NicknameCandidate>> {
        options.validate()?;

        let mut options = options.clone();
        options.limit = Some(options.limit.unwrap_or(self.config.nickname_limit));

        let full = self.analyze_cached(&options.full_name, &options.birth_date);
        Ok(suggest_nicknames_for(
            &self.dictionary,
            &full,
            &options,
            &self.config.scoring,
        ))
    }

    pub fn can_chi(&self, year: i64) -> CanChi {
        calc_can_chi(year)
    }
}

impl Default for NumerologyEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GenderFilter;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_cache_hits_share_results() {
        let engine = NumerologyEngine::new();
        let first = engine.analyze_cached("Nguyễn Văn An", "2024-03-15");
        let second = engine.analyze_cached("Nguyễn Văn An ", "15/03/2024");

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(engine.cache_len(), 1);
        assert_eq!(first.compatibility.score, engine.analyze("Nguyễn Văn An", "15/03/2024").compatibility.score);
    }

    #[test]
    fn test_cache_clears_at_capacity() {
        let config = EngineConfig {
            cache_capacity: 2,
            ..Default::default()
        };
        let engine = NumerologyEngine::with_config(config).unwrap();
        engine.analyze_cached("An", "01/01/2020");
        engine.analyze_cached("Bình", "01/01/2020");
        assert_eq!(engine.cache_len(), 2);

        engine.analyze_cached("Chi", "01/01/2020");
        assert_eq!(engine.cache_len(), 1);
    }

    #[test]
    fn test_zero_capacity_disables_cache() {
        let config = EngineConfig {
            cache_capacity: 0,
            ..Default::default()
        };
        let engine = NumerologyEngine::with_config(config).unwrap();
        engine.analyze_cached("An", "01/01/2020");
        assert_eq!(engine.cache_len(), 0);
    }

    #[test]
    fn test_suggest_uses_default_limit() {
        let config = EngineConfig {
            default_limit: 3,
            ..Default::default()
        };
        let engine = NumerologyEngine::with_config(config).unwrap();
        let results = engine
            .suggest(&SuggestOptions::new("Nguyễn", "2024-03-15").with_gender(GenderFilter::Female))
            .unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_suggest_caches_parent_analysis() {
        let engine = NumerologyEngine::new();
        let options = SuggestOptions::new("Nguyễn", "2024-03-15")
            .with_father(ParentInput::new("Nguyễn Văn Hùng", "1990-05-20"))
            .with_mother(ParentInput::new("Trần Thị Mai", "1992-08-12"));
        let results = engine.suggest(&options).unwrap();

        assert!(!results.is_empty());
        assert_eq!(engine.cache_len(), 2);
        assert!(results.iter().all(|c| c.blended_score.is_some()));
    }

    #[test]
    fn test_nickname_with_and_without_full_name() {
        let engine = NumerologyEngine::new();
        assert!(engine.analyze_nickname("Bin", None, None).comparison.is_none());

        let result = engine.analyze_nickname("An", Some("Nguyễn Văn An"), Some("2024-03-15"));
        assert_eq!(result.comparison.unwrap().harmony_score, 76);
    }

    #[test]
    fn test_dictionary_from_config_path() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"middle_names": [{{"name": "Gia", "gender": "male"}}],
                "given_names": [{{"name": "Bảo", "gender": "male"}}, {{"name": "Huy", "gender": "male"}}]}}"#
        )
        .unwrap();

        let config = EngineConfig {
            dictionary_path: Some(file.path().to_path_buf()),
            ..Default::default()
        };
        let engine = NumerologyEngine::with_config(config).unwrap();
        let results = engine.suggest(&SuggestOptions::new("Lê", "2021-06-01")).unwrap();

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|c| c.full_name.starts_with("Lê Gia ")));
    }

    #[test]
    fn test_invalid_scoring_config_is_rejected() {
        let mut config = EngineConfig::default();
        config.scoring.name_weight = 90;
        assert!(NumerologyEngine::with_config(config).is_err());
    }
}
