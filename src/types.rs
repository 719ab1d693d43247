//! Core types and structures for name-forge

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::str::FromStr;

use crate::config_error;
use crate::error::{NameForgeError, Result};
use crate::numerology::normalize_vietnamese;

/// Role a letter plays in a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LetterKind {
    Vowel,
    Consonant,
}

impl std::fmt::Display for LetterKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LetterKind::Vowel => write!(f, "vowel"),
            LetterKind::Consonant => write!(f, "consonant"),
        }
    }
}

/// Qualitative compatibility level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompatibilityLevel {
    Excellent,
    Good,
    Neutral,
    Challenging,
}

impl std::fmt::Display for CompatibilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompatibilityLevel::Excellent => write!(f, "excellent"),
            CompatibilityLevel::Good => write!(f, "good"),
            CompatibilityLevel::Neutral => write!(f, "neutral"),
            CompatibilityLevel::Challenging => write!(f, "challenging"),
        }
    }
}

/// One of the Five Elements (Ngũ Hành)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Element {
    Metal,
    Wood,
    Water,
    Fire,
    Earth,
}

impl Element {
    pub const ALL: [Element; 5] = [
        Element::Metal,
        Element::Wood,
        Element::Water,
        Element::Fire,
        Element::Earth,
    ];

    /// Vietnamese name of the element
    pub fn vi_name(&self) -> &'static str {
        match self {
            Element::Metal => "Kim",
            Element::Wood => "Mộc",
            Element::Water => "Thủy",
            Element::Fire => "Hỏa",
            Element::Earth => "Thổ",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Element::Metal => "Kim loại, sắc bén, quyết đoán",
            Element::Wood => "Cây cối, sinh trưởng, nhân từ",
            Element::Water => "Nước, linh hoạt, trí tuệ",
            Element::Fire => "Lửa, nhiệt huyết, lễ nghĩa",
            Element::Earth => "Đất, ổn định, trung tín",
        }
    }
}

impl std::fmt::Display for Element {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Element::Metal => write!(f, "metal"),
            Element::Wood => write!(f, "wood"),
            Element::Water => write!(f, "water"),
            Element::Fire => write!(f, "fire"),
            Element::Earth => write!(f, "earth"),
        }
    }
}

impl FromStr for Element {
    type Err = NameForgeError;

    /// Accepts English or Vietnamese names, with or without diacritics
    fn from_str(s: &str) -> Result<Self> {
        match normalize_vietnamese(s).as_str() {
            "METAL" | "KIM" => Ok(Element::Metal),
            "WOOD" | "MOC" => Ok(Element::Wood),
            "WATER" | "THUY" => Ok(Element::Water),
            "FIRE" | "HOA" => Ok(Element::Fire),
            "EARTH" | "THO" => Ok(Element::Earth),
            _ => Err(NameForgeError::validation(format!("Unknown element: {}", s))),
        }
    }
}

/// Yin/yang polarity of a Heavenly Stem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    Yin,
    Yang,
}

impl Polarity {
    pub fn vi_name(&self) -> &'static str {
        match self {
            Polarity::Yin => "Âm",
            Polarity::Yang => "Dương",
        }
    }
}

/// Relation between the name element and the birth-year element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RelationKind {
    /// Same element, or no cycle relation
    Neutral,
    /// The year element generates the name element
    Nurtured,
    /// The name element generates the year element
    Generating,
    /// The year element overcomes the name element
    Weakened,
    /// The name element overcomes the year element
    Weakening,
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RelationKind::Neutral => write!(f, "neutral"),
            RelationKind::Nurtured => write!(f, "nurtured"),
            RelationKind::Generating => write!(f, "generating"),
            RelationKind::Weakened => write!(f, "weakened"),
            RelationKind::Weakening => write!(f, "weakening"),
        }
    }
}

/// Gender tag of a dictionary entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Unisex,
}

/// Gender filter applied to dictionary pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GenderFilter {
    Male,
    Female,
    #[default]
    All,
}

impl GenderFilter {
    /// Given names and nicknames: unisex entries pass every filter
    pub fn accepts(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => matches!(gender, Gender::Male | Gender::Unisex),
            GenderFilter::Female => matches!(gender, Gender::Female | Gender::Unisex),
        }
    }

    /// Middle names: only an exact match passes a gendered filter
    pub fn accepts_strict(&self, gender: Gender) -> bool {
        match self {
            GenderFilter::All => true,
            GenderFilter::Male => gender == Gender::Male,
            GenderFilter::Female => gender == Gender::Female,
        }
    }
}

impl FromStr for GenderFilter {
    type Err = NameForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" | "nam" => Ok(GenderFilter::Male),
            "female" | "f" | "nu" | "nữ" => Ok(GenderFilter::Female),
            "all" | "" => Ok(GenderFilter::All),
            other => Err(NameForgeError::validation(format!("Unknown gender: {}", other))),
        }
    }
}

/// Ordering applied when filtering a finished candidate batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Score,
    Name,
    Expression,
}

impl FromStr for SortKey {
    type Err = NameForgeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "score" => Ok(SortKey::Score),
            "name" => Ok(SortKey::Name),
            "expression" => Ok(SortKey::Expression),
            other => Err(NameForgeError::validation(format!("Unknown sort key: {}", other))),
        }
    }
}

/// A single classified letter of a normalized name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterEntry {
    pub letter: char,
    pub value: u32,
    #[serde(rename = "type")]
    pub kind: LetterKind,
}

/// Heavenly-Stem / Earthly-Branch pair of a solar year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanChi {
    pub stem: &'static str,
    pub branch: &'static str,
    pub stem_element: Element,
    pub branch_element: Element,
    pub polarity: Polarity,
}

impl std::fmt::Display for CanChi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.stem, self.branch)
    }
}

/// Classified relation between two elements
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementRelation {
    pub kind: RelationKind,
    pub description: String,
    pub score_adjustment: i32,
}

/// Five-Element overlay of a full-name analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiveElementResult {
    pub can_chi: CanChi,
    pub name_element: Element,
    pub year_element: Element,
    pub relation: ElementRelation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompatibilityResult {
    pub score: u32,
    pub level: CompatibilityLevel,
    pub description: &'static str,
}

/// The six numerology indices of a name and birth date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CoreIndices {
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub maturity: u32,
    pub birthday: u32,
}

/// Full analysis of one (name, birth date) pair
#[derive(Debug, Clone, Serialize)]
pub struct NumerologyResult {
    pub original_name: String,
    pub normalized_name: String,
    /// Always `DD/MM/YYYY` (or the caller's text if it was in neither format)
    pub birth_date: String,
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
    pub maturity: u32,
    pub birthday: u32,
    pub letters: Vec<LetterEntry>,
    pub compatibility: CompatibilityResult,
    pub five_element: Option<FiveElementResult>,
}

impl NumerologyResult {
    pub fn indices(&self) -> CoreIndices {
        CoreIndices {
            life_path: self.life_path,
            expression: self.expression,
            soul_urge: self.soul_urge,
            personality: self.personality,
            maturity: self.maturity,
            birthday: self.birthday,
        }
    }
}

/// Nickname vs. full-name comparison
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NicknameComparison {
    pub full_name: String,
    pub expression_match: bool,
    pub soul_urge_match: bool,
    pub personality_match: bool,
    pub harmony_score: u32,
    pub level: CompatibilityLevel,
    pub description: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct NicknameResult {
    pub nickname: String,
    pub normalized_nickname: String,
    pub minor_expression: u32,
    pub minor_soul_urge: u32,
    pub minor_personality: u32,
    pub letters: Vec<LetterEntry>,
    pub comparison: Option<NicknameComparison>,
}

/// One contributing pair of a parent-child score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PairBreakdown {
    pub label: &'static str,
    pub child_value: u32,
    pub parent_value: u32,
    pub pair_score: u32,
    /// Whole percent
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParentCompatibilityResult {
    pub parent_name: String,
    pub parent_birth_date: String,
    pub score: u32,
    pub level: CompatibilityLevel,
    pub description: &'static str,
    pub breakdown: Vec<PairBreakdown>,
}

/// Name score blended with parent compatibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BlendedScore {
    pub final_score: u32,
    pub name_score: u32,
    pub parent_score: u32,
    pub father_score: Option<u32>,
    pub mother_score: Option<u32>,
}

/// A generated full-name suggestion
#[derive(Debug, Clone, Serialize)]
pub struct NameCandidate {
    pub surname: String,
    pub middle_part: String,
    pub given_name: String,
    pub full_name: String,
    pub meaning: String,
    pub analysis: NumerologyResult,
    pub blended_score: Option<BlendedScore>,
}

impl NameCandidate {
    /// Blended score when parents were supplied, otherwise the name score
    pub fn effective_score(&self) -> u32 {
        self.blended_score
            .map(|b| b.final_score)
            .unwrap_or(self.analysis.compatibility.score)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NicknameCandidate {
    pub nickname: String,
    pub meaning: String,
    pub category: String,
    pub analysis: NicknameResult,
}

impl NicknameCandidate {
    pub fn harmony_score(&self) -> u32 {
        self.analysis
            .comparison
            .as_ref()
            .map(|c| c.harmony_score)
            .unwrap_or(0)
    }
}

/// Tunable scoring constants. Weights are whole percentages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// Full-name score bonus when Expression and Soul Urge share a harmony group
    pub full_harmony_bonus: u32,
    /// Parent score bonus when child and parent Expression share a group
    pub parent_harmony_bonus: u32,
    /// Nickname bonus when all three minor indices match their group
    pub nickname_harmony_bonus: u32,
    /// Pair score bonus when either operand is a master number
    pub master_pair_bonus: u32,
    /// Pair score for operands outside the 1..9 matrix
    pub default_pair_score: u32,
    pub excellent_threshold: u32,
    pub good_threshold: u32,
    pub neutral_threshold: u32,
    pub name_weight: u32,
    pub parent_weight: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            full_harmony_bonus: 3,
            parent_harmony_bonus: 2,
            nickname_harmony_bonus: 5,
            master_pair_bonus: 5,
            default_pair_score: 65,
            excellent_threshold: 82,
            good_threshold: 65,
            neutral_threshold: 45,
            name_weight: 70,
            parent_weight: 30,
        }
    }
}

impl ScoringConfig {
    pub fn validate(&self) -> Result<()> {
        if self.name_weight + self.parent_weight != 100 {
            return Err(config_error!(
                "name weight ({}) and parent weight ({}) must sum to 100",
                self.name_weight,
                self.parent_weight
            ));
        }
        if !(self.excellent_threshold >= self.good_threshold
            && self.good_threshold >= self.neutral_threshold)
        {
            return Err(config_error!("level thresholds must be descending"));
        }
        Ok(())
    }
}

/// Engine-wide configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub scoring: ScoringConfig,
    pub default_limit: usize,
    pub nickname_limit: usize,
    pub cache_capacity: usize,
    pub dictionary_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            default_limit: 30,
            nickname_limit: 20,
            cache_capacity: 256,
            dictionary_path: None,
        }
    }
}

impl EngineConfig {
    /// Build configuration from `NAME_FORGE_*` environment variables
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();

        let mut config = Self::default();
        if let Some(limit) = env_value::<usize>("NAME_FORGE_LIMIT")? {
            config.default_limit = limit;
        }
        if let Some(limit) = env_value::<usize>("NAME_FORGE_NICKNAME_LIMIT")? {
            config.nickname_limit = limit;
        }
        if let Some(capacity) = env_value::<usize>("NAME_FORGE_CACHE_CAPACITY")? {
            config.cache_capacity = capacity;
        }
        if let Some(path) = env_value::<PathBuf>("NAME_FORGE_DICTIONARY")? {
            config.dictionary_path = Some(path);
        }
        if let Some(weight) = env_value::<u32>("NAME_FORGE_PARENT_WEIGHT")? {
            if weight > 100 {
                return Err(config_error!(
                    "NAME_FORGE_PARENT_WEIGHT must be within 0..=100, got {}",
                    weight
                ));
            }
            config.scoring.parent_weight = weight;
            config.scoring.name_weight = 100 - weight;
        }

        config.scoring.validate()?;
        Ok(config)
    }
}

fn env_value<T: FromStr>(key: &str) -> Result<Option<T>> {
    match std::env::var(key) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
            config_error!("{} has an invalid value: {}", key, raw)
        }),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_from_str() {
        assert_eq!("Hỏa".parse::<Element>().unwrap(), Element::Fire);
        assert_eq!("thuy".parse::<Element>().unwrap(), Element::Water);
        assert_eq!("Metal".parse::<Element>().unwrap(), Element::Metal);
        assert!("plasma".parse::<Element>().is_err());
    }

    #[test]
    fn test_gender_filter() {
        assert!(GenderFilter::Male.accepts(Gender::Unisex));
        assert!(!GenderFilter::Male.accepts(Gender::Female));
        assert!(!GenderFilter::Female.accepts_strict(Gender::Unisex));
        assert!(GenderFilter::All.accepts_strict(Gender::Male));
        assert_eq!("nữ".parse::<GenderFilter>().unwrap(), GenderFilter::Female);
    }

    #[test]
    fn test_scoring_config_validation() {
        assert!(ScoringConfig::default().validate().is_ok());

        let config = ScoringConfig {
            parent_weight: 40,
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, NameForgeError::Config { .. }));
        assert!(err.to_string().contains("must sum to 100"));
    }

    #[test]
    fn test_enum_serialization() {
        assert_eq!(serde_json::to_string(&RelationKind::Nurtured).unwrap(), "\"nurtured\"");
        assert_eq!(serde_json::to_string(&CompatibilityLevel::Good).unwrap(), "\"good\"");
        assert_eq!(format!("{}", Element::Earth), "earth");
    }
}
