//! Name Forge - Vietnamese name numerology and name suggestions
//!
//! Pythagorean numerology over Vietnamese names: six core indices, a
//! Five-Element (Ngũ Hành) overlay from the Can-Chi birth year,
//! compatibility scoring for full names, nicknames and parents, and an
//! exhaustive name suggestion search over static dictionaries.
//!
//! ```
//! use name_forge::NumerologyEngine;
//!
//! let engine = NumerologyEngine::new();
//! let result = engine.analyze("Nguyễn Văn An", "2024-03-15");
//! assert_eq!(result.normalized_name, "NGUYEN VAN AN");
//! assert_eq!(result.life_path, 8);
//! ```

pub mod engine;
pub mod error;
pub mod numerology;
pub mod scoring;
pub mod suggest;
pub mod types;

// Re-export commonly used types
pub use error::{NameForgeError, Result};
pub use types::{
    BlendedScore, CanChi, CompatibilityLevel, CompatibilityResult, CoreIndices, Element,
    EngineConfig, FiveElementResult, Gender, GenderFilter, LetterEntry, LetterKind, NameCandidate,
    NicknameCandidate, NicknameResult, NumerologyResult, ParentCompatibilityResult, Polarity,
    RelationKind, ScoringConfig, SortKey,
};

// Re-export main functionality
pub use engine::NumerologyEngine;
pub use suggest::{CandidateFilter, NameDictionary, NicknameOptions, ParentInput, SuggestOptions};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
