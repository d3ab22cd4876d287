//! Premium arithmetic and age derivation

mod age;
mod calculator;

pub use age::{age_from_dob, parse_as_of, parse_dob, DOB_FORMAT};
pub use calculator::{calculate_premium, parse_leading_int, raw_premium, CalculationResult};
