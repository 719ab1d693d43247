//! Full-name suggestion search
//!
//! The search is exhaustive: every middle × given combination is scored
//! before the batch is sorted and truncated.

use serde::{Deserialize, Serialize};
use std::time::Instant;

use super::dictionary::{NameDictionary, NameEntry};
use crate::error::Result;
use crate::scoring::{analyze_full_name, blend_scores, parent_compatibility_from_results};
use crate::types::{Gender, GenderFilter, NameCandidate, NumerologyResult, ScoringConfig};
use crate::validation_error;

/// Result count when the caller gives none
pub const DEFAULT_LIMIT: usize = 30;

/// A parent's name and birth date (`YYYY-MM-DD` or `DD/MM/YYYY`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentInput {
    pub name: String,
    pub birth_date: String,
}

impl ParentInput {
    pub fn new(name: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            birth_date: birth_date.into(),
        }
    }

    /// Both fields are required for the parent to take part in scoring
    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.birth_date.trim().is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentInfo {
    pub father: Option<ParentInput>,
    pub mother: Option<ParentInput>,
}

/// Options of one name search
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestOptions {
    pub surname: String,
    pub birth_date: String,
    #[serde(default)]
    pub gender: GenderFilter,
    /// Replaces the middle-name pool with this single name
    #[serde(default)]
    pub middle_name: Option<String>,
    /// Second middle name, placed after the first one
    #[serde(default)]
    pub middle_name2: Option<String>,
    /// Names that may not appear as any middle or given token
    #[serde(default)]
    pub exclude: Vec<String>,
    #[serde(default)]
    pub limit: Option<usize>,
    #[serde(default)]
    pub parents: ParentInfo,
}

impl SuggestOptions {
    pub fn new(surname: impl Into<String>, birth_date: impl Into<String>) -> Self {
        Self {
            surname: surname.into(),
            birth_date: birth_date.into(),
            ..Default::default()
        }
    }

    pub fn with_gender(mut self, gender: GenderFilter) -> Self {
        self.gender = gender;
        self
    }

    pub fn with_middle_name(mut self, middle: impl Into<String>) -> Self {
        self.middle_name = Some(middle.into());
        self
    }

    pub fn with_middle_name2(mut self, middle: impl Into<String>) -> Self {
        self.middle_name2 = Some(middle.into());
        self
    }

    pub fn with_exclude(mut self, names: Vec<String>) -> Self {
        self.exclude = names;
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn with_father(mut self, parent: ParentInput) -> Self {
        self.parents.father = Some(parent);
        self
    }

    pub fn with_mother(mut self, parent: ParentInput) -> Self {
        self.parents.mother = Some(parent);
        self
    }

    /// Reject a search missing its surname or birth date
    pub fn validate(&self) -> Result<()> {
        if self.surname.trim().is_empty() {
            return Err(validation_error!("surname is required"));
        }
        if self.birth_date.trim().is_empty() {
            return Err(validation_error!("birth date is required"));
        }
        Ok(())
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Walks the middle × given product by index
pub struct CombinationGenerator<'a> {
    middles: Vec<&'a NameEntry>,
    givens: Vec<&'a NameEntry>,
    current_index: usize,
    total: usize,
}

impl<'a> CombinationGenerator<'a> {
    pub fn new(middles: Vec<&'a NameEntry>, givens: Vec<&'a NameEntry>) -> Self {
        let total = middles.len() * givens.len();
        Self {
            middles,
            givens,
            current_index: 0,
            total,
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Combination at a specific index, middle-major
    pub fn combination_at(&self, index: usize) -> Option<(&'a NameEntry, &'a NameEntry)> {
        if index >= self.total {
            return None;
        }
        let per_middle = self.givens.len();
        Some((self.middles[index / per_middle], self.givens[index % per_middle]))
    }
}

impl<'a> Iterator for CombinationGenerator<'a> {
    type Item = (&'a NameEntry, &'a NameEntry);

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.combination_at(self.current_index)?;
        self.current_index += 1;
        Some(item)
    }
}

/// Case-insensitive exclusion over whitespace-separated name tokens
struct ExclusionList {
    names: Vec<String>,
}

impl ExclusionList {
    fn new(raw: &[String]) -> Self {
        Self {
            names: raw
                .iter()
                .map(|n| n.trim().to_lowercase())
                .filter(|n| !n.is_empty())
                .collect(),
        }
    }

    fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    fn blocks(&self, parts: &[&str]) -> bool {
        parts
            .iter()
            .flat_map(|p| p.split_whitespace())
            .any(|token| self.names.contains(&token.to_lowercase()))
    }
}

/// Run a name search, analyzing any parents first
pub fn suggest_names(
    dictionary: &NameDictionary,
    options: &SuggestOptions,
    config: &ScoringConfig,
) -> Result<Vec<NameCandidate>> {
    options.validate()?;

    let analyze_parent = |parent: &Option<ParentInput>| {
        parent
            .as_ref()
            .filter(|p| p.is_complete())
            .map(|p| analyze_full_name(p.name.trim(), &p.birth_date, config))
    };
    let father = analyze_parent(&options.parents.father);
    let mother = analyze_parent(&options.parents.mother);

    suggest_names_with_parents(dictionary, options, father.as_ref(), mother.as_ref(), config)
}

/// Run a name search against pre-computed parent analyses.
///
/// `options.parents` is ignored here; the caller has already resolved it.
pub fn suggest_names_with_parents(
    dictionary: &NameDictionary,
    options: &SuggestOptions,
    father: Option<&NumerologyResult>,
    mother: Option<&NumerologyResult>,
    config: &ScoringConfig,
) -> Result<Vec<NameCandidate>> {
    options.validate()?;
    let start_time = Instant::now();

    let surname = options.surname.trim();
    let middle2 = non_empty(&options.middle_name2);
    let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
    let excluded = ExclusionList::new(&options.exclude);

    let override_entry;
    let middles: Vec<&NameEntry> = match non_empty(&options.middle_name) {
        Some(name) => {
            override_entry = NameEntry {
                name: name.to_string(),
                gender: Gender::Unisex,
                meaning: String::new(),
            };
            vec![&override_entry]
        }
        None => dictionary.middle_names_for(options.gender),
    };
    let givens = dictionary.given_names_for(options.gender);

    let combinations = CombinationGenerator::new(middles, givens);
    tracing::debug!(
        surname = %surname,
        gender = ?options.gender,
        combinations = %combinations.total(),
        parents = %(father.is_some() as u8 + mother.is_some() as u8),
        "Starting name search"
    );

    if combinations.total() == 0 {
        tracing::warn!(gender = ?options.gender, "No middle/given name combinations for this search");
    }

    let mut skipped = 0usize;
    let mut candidates = Vec::with_capacity(combinations.total());

    for (middle, given) in combinations {
        let middle_part = match middle2 {
            Some(second) => format!("{} {}", middle.name, second),
            None => middle.name.clone(),
        };

        if !excluded.is_empty() {
            let mut parts = vec![middle.name.as_str(), given.name.as_str()];
            parts.extend(middle2);
            if excluded.blocks(&parts) {
                skipped += 1;
                continue;
            }
        }

        let full_name = format!("{} {} {}", surname, middle_part, given.name);
        let analysis = analyze_full_name(&full_name, &options.birth_date, config);

        let father_score = father.map(|p| parent_compatibility_from_results(&analysis, p, config).score);
        let mother_score = mother.map(|p| parent_compatibility_from_results(&analysis, p, config).score);
        let blended_score = blend_scores(
            analysis.compatibility.score,
            father_score,
            mother_score,
            config,
        );

        candidates.push(NameCandidate {
            surname: surname.to_string(),
            middle_part,
            given_name: given.name.clone(),
            full_name,
            meaning: given.meaning.clone(),
            analysis,
            blended_score,
        });
    }

    let scored = candidates.len();
    candidates.sort_by(|a, b| b.effective_score().cmp(&a.effective_score()));
    candidates.truncate(limit);

    tracing::info!(
        scored = %scored,
        excluded = %skipped,
        returned = %candidates.len(),
        duration_ms = %start_time.elapsed().as_millis(),
        "Name search completed"
    );

    Ok(candidates)
}
