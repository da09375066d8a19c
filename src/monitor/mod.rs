//! # Report Engine
//!
//! Generic cross-tab report construction: column headers classify an item's
//! age into buckets, rows aggregate per-bucket counts keyed by a domain value,
//! and foldable rows nest further grouping levels below each row.
//!
//! The engine is purely computational. A [`Report`] is built by a single
//! logical request from start to finish; once populated it is read-only and
//! safe to share across readers.

mod headers;
mod item;
mod report;
mod reports;
mod row;

pub use headers::{ColumnHeader, PriorityColumnHeader, TimeIntervalColumnHeader};
pub use item::{OrgLevelQueryItem, QueryItem, TaskQueryItem};
pub use report::{Report, SUM_ROW_KEY};
pub use reports::{org_level_report, workbasket_report};
pub use row::{FoldableRow, KeyExtractor, ReportRow, RowFactory, SingleRow};
