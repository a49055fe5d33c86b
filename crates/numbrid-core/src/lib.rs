//! numbrid-core — Pure types and Estonian numeral formatting.
//!
//! No async runtime, no I/O, no platform dependencies.

pub mod numerals;
pub mod random;
pub mod types;
