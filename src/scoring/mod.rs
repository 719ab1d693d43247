//! Compatibility scoring over computed indices

mod analyze;
mod compatibility;
mod nickname;
mod parent;

pub use analyze::{analyze_full_name, five_element_for};
pub use compatibility::{
    compatibility_level, full_name_result, is_same_harmony_group, name_compatibility_score,
    pair_score, HARMONY_GROUPS,
};
pub use nickname::{analyze_nickname, compare_with_full_name};
pub use parent::{blend_scores, parent_child_compatibility, parent_compatibility_from_results};
