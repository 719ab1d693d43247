//! Name and nickname suggestions over static dictionaries

mod compare;
mod dictionary;
mod engine;
mod filter;
mod nickname;

pub use compare::{compare_candidates, ComparisonRow, ComparisonTable};
pub use dictionary::{NameDictionary, NameEntry, NicknameEntry};
pub use engine::{
    suggest_names, suggest_names_with_parents, CombinationGenerator, ParentInfo, ParentInput,
    SuggestOptions, DEFAULT_LIMIT,
};
pub use filter::CandidateFilter;
pub use nickname::{suggest_nicknames, suggest_nicknames_for, NicknameOptions, DEFAULT_NICKNAME_LIMIT};
