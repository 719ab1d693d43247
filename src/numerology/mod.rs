//! Numerology core: normalization, letter values, indices and elements
//!
//! Everything here is a pure function of its inputs plus fixed tables.

mod date;
mod elements;
mod indices;
mod letters;
mod meanings;
mod normalize;

pub use date::{birth_day, birth_year, parse_birth_date, to_numerology_date, DateParts};
pub use elements::{calc_can_chi, element_relation, generates, number_to_element, overcomes};
pub use indices::{
    birthday, compute_indices, expression, is_master, letter_sums, life_path, maturity,
    personality, reduce_keeping_master, reduce_to_single_digit, soul_urge, MASTER_NUMBERS,
};
pub use letters::{classify_letters, classify_y, letter_value};
pub use meanings::{get_meaning, NumberMeaning};
pub use normalize::normalize_vietnamese;
