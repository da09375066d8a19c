#![allow(clippy::missing_errors_doc)] // Allow public functions without # Errors sections
#![allow(clippy::must_use_candidate)] // Allow methods without must_use when context is clear

//! # Taskmon
//!
//! Reporting and aggregation core for human-task workflow monitoring.
//!
//! ## Overview
//!
//! Taskmon is the computational heart of a task-inbox monitoring layer: a
//! generic cross-tab (pivot-table) builder that groups task counts into
//! configurable age-based column buckets and arbitrarily deep nested row
//! groupings, combined with a business-calendar converter that translates
//! between calendar-day and working-day offsets (skipping weekends and
//! configurable holidays).
//!
//! The surrounding concerns (SQL generation, REST shaping, persistence
//! mapping, task lifecycle) are external collaborators. Their whole contract
//! with this crate is: supply a sequence of `(key, age-in-days, value)` query
//! items, and accept a finished [`monitor::Report`] for rendering.
//!
//! ## Module Organization
//!
//! - [`monitor`] - Report engine: column headers, rows, folding, aggregation
//! - [`calendar`] - Business calendar and working-day/calendar-day conversion
//! - [`error`] - Structured error handling
//! - [`logging`] - Opt-in tracing initialization
//!
//! ## Quick Start
//!
//! ```rust
//! use taskmon::monitor::{Report, TaskQueryItem, TimeIntervalColumnHeader};
//!
//! # fn example() -> taskmon::error::Result<()> {
//! let headers = vec![
//!     TimeIntervalColumnHeader::new(i32::MIN, -1)?,
//!     TimeIntervalColumnHeader::new(0, 0)?,
//!     TimeIntervalColumnHeader::new(1, i32::MAX)?,
//! ];
//! let mut report = Report::with_single_rows(headers, vec!["WORKBASKET".into()]);
//! report.add_item(&TaskQueryItem::new("WB-1", -3, 2));
//! report.add_item(&TaskQueryItem::new("WB-1", 4, 1));
//! assert_eq!(report.sum_row().total(), 3);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod calendar;
pub mod error;
pub mod logging;
pub mod monitor;

pub use error::{MonitorError, Result};
