//! # Structured Error Handling
//!
//! Crate-wide error type for the monitoring engine. Configuration mistakes
//! (malformed column headers, impossible holiday dates) are rejected up front,
//! before any aggregation begins.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MonitorError {
    /// A column header was configured with `lower > upper`.
    #[error("invalid column header: lower limit {lower} exceeds upper limit {upper}")]
    InvalidColumnHeader { lower: i32, upper: i32 },

    /// A custom holiday names a month/day combination that exists in no year.
    #[error("invalid custom holiday: month {month}, day {day}")]
    InvalidHoliday { month: u32, day: u32 },
}

pub type Result<T> = std::result::Result<T, MonitorError>;
