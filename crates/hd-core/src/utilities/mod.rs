//! Miscellaneous utilities.

pub mod data_parsers;

pub use data_parsers::{normalize_key, parse_clock_time, parse_iso_date};
