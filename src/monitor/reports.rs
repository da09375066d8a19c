//! # Concrete Report Shapes
//!
//! Thin constructors over the generic [`Report`] engine for the report
//! shapes the surrounding monitor service exposes: a flat per-workbasket
//! report, and a nested report folding the organisational hierarchy of each
//! workbasket down to the workbasket itself.

use std::sync::Arc;

use super::headers::TimeIntervalColumnHeader;
use super::item::{OrgLevelQueryItem, TaskQueryItem};
use super::report::Report;
use super::row::{FoldableRow, KeyExtractor, ReportRow, RowFactory, SingleRow};

/// Flat report: one row per workbasket key.
pub fn workbasket_report(
    headers: Vec<TimeIntervalColumnHeader>,
) -> Report<TaskQueryItem, TimeIntervalColumnHeader> {
    Report::with_single_rows(headers, vec!["WORKBASKET".to_string()])
}

/// Nested report over the workbasket organisational hierarchy: rows keyed by
/// org level 1, folding level 2 -> 3 -> 4 -> workbasket leaf.
///
/// Each folding level is produced by composing row factories; no level knows
/// how deep the chain below it goes.
pub fn org_level_report(
    headers: Vec<TimeIntervalColumnHeader>,
) -> Report<OrgLevelQueryItem, TimeIntervalColumnHeader> {
    Report::new(
        headers,
        vec![
            "ORG LEVEL 1".to_string(),
            "ORG LEVEL 2".to_string(),
            "ORG LEVEL 3".to_string(),
            "ORG LEVEL 4".to_string(),
            "WORKBASKET".to_string(),
        ],
        org_row_factory(1),
    )
}

/// Factory for rows at the given org depth. Depths 1 through 4 produce
/// foldable rows extracting the next level's key; below that, plain leaves.
fn org_row_factory(depth: u8) -> RowFactory<OrgLevelQueryItem> {
    Arc::new(move |key, columns| {
        if depth > 4 {
            return ReportRow::Single(SingleRow::new(key, columns));
        }
        let extractor: KeyExtractor<OrgLevelQueryItem> = Arc::new(move |item| match depth {
            1 => item.org_level_2.clone(),
            2 => item.org_level_3.clone(),
            3 => item.org_level_4.clone(),
            _ => item.workbasket_key.clone(),
        });
        ReportRow::Foldable(FoldableRow::new(
            key,
            columns,
            extractor,
            org_row_factory(depth + 1),
        ))
    })
}
