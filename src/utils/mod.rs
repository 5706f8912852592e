//! Decimal helpers for big integers

mod digits;

pub use digits::{concatenate, decimal_digit_count};
