//! Interval and factor scheduling

pub mod algorithm;

pub use algorithm::{next_factor, next_interval, MIN_FACTOR};
