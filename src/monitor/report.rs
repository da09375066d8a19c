//! # Report
//!
//! Top-level cross-tab container: a fixed ordered list of column headers, an
//! insertion-ordered collection of rows keyed by a domain value, and an
//! implicit sum row aggregating everything. Rows are created lazily through
//! an injected factory on the first item carrying an unseen key.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::headers::ColumnHeader;
use super::item::QueryItem;
use super::row::{OrderedRowMap, ReportRow, RowFactory, SingleRow};

/// Key under which the report-wide total row is created.
pub const SUM_ROW_KEY: &str = "Total";

/// Generic cross-tab report over items of type `I` classified by headers of
/// type `H`.
///
/// Built by a single logical request from start to finish; read-only and
/// safely shareable once populated.
pub struct Report<I, H> {
    headers: Vec<H>,
    row_desc: Vec<String>,
    rows: OrderedRowMap<I>,
    sum_row: ReportRow<I>,
    row_factory: RowFactory<I>,
}

impl<I: QueryItem, H: ColumnHeader> Report<I, H> {
    /// New empty report.
    ///
    /// `row_desc` labels the grouping hierarchy levels for rendering; it is
    /// purely descriptive and never consulted by the aggregation itself.
    /// `row_factory` decides the row shape per key and is also used for the
    /// sum row, so foldable reports fold their grand totals identically.
    pub fn new(headers: Vec<H>, row_desc: Vec<String>, row_factory: RowFactory<I>) -> Self {
        let sum_row = row_factory(SUM_ROW_KEY, headers.len());
        Self {
            headers,
            row_desc,
            rows: OrderedRowMap::new(),
            sum_row,
            row_factory,
        }
    }

    /// Report with plain single-level rows.
    pub fn with_single_rows(headers: Vec<H>, row_desc: Vec<String>) -> Self {
        Self::new(
            headers,
            row_desc,
            Arc::new(|key, columns| ReportRow::Single(SingleRow::new(key, columns))),
        )
    }

    /// Insert one query item.
    ///
    /// The item's value is added to every header bucket that fits its age,
    /// in the item's row and in the sum row alike. With no headers
    /// configured, the item is inserted once into the total only. With
    /// headers configured but none fitting, the item is dropped entirely:
    /// no row is created and the sum row stays untouched.
    pub fn add_item(&mut self, item: &I) {
        self.insert(item);
    }

    /// Insertion worker; reports whether the item landed anywhere.
    fn insert(&mut self, item: &I) -> bool {
        if self.headers.is_empty() {
            let factory = Arc::clone(&self.row_factory);
            let row = self
                .rows
                .get_or_insert_with(item.key(), || factory(item.key(), 0));
            row.update_total(item);
            self.sum_row.update_total(item);
            return true;
        }

        let matching: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .filter(|(_, header)| header.fits(item.age_in_days()))
            .map(|(column, _)| column)
            .collect();
        if matching.is_empty() {
            return false;
        }

        let columns = self.headers.len();
        let factory = Arc::clone(&self.row_factory);
        let row = self
            .rows
            .get_or_insert_with(item.key(), || factory(item.key(), columns));
        for &column in &matching {
            row.add_item(item, column);
        }
        for &column in &matching {
            self.sum_row.add_item(item, column);
        }
        true
    }

    /// Insert one item after running it through `preprocessor`, which may
    /// return a transformed item (e.g. overriding the value). Preprocessors
    /// are total functions.
    pub fn add_item_with(&mut self, item: I, preprocessor: impl FnOnce(I) -> I) {
        let item = preprocessor(item);
        self.add_item(&item);
    }

    /// Bulk insert; equivalent to sequential single inserts.
    pub fn add_items<'a>(&mut self, items: impl IntoIterator<Item = &'a I>)
    where
        I: 'a,
    {
        let mut processed = 0usize;
        let mut inserted = 0usize;
        for item in items {
            processed += 1;
            inserted += usize::from(self.insert(item));
        }
        debug!(
            processed,
            inserted,
            rows = self.rows.len(),
            "report populated"
        );
    }

    /// Bulk insert through a preprocessor.
    pub fn add_items_with(
        &mut self,
        items: impl IntoIterator<Item = I>,
        preprocessor: impl Fn(I) -> I,
    ) {
        for item in items {
            self.add_item_with(item, &preprocessor);
        }
    }

    /// Row for `key`, if any inserted item produced it.
    pub fn row(&self, key: &str) -> Option<&ReportRow<I>> {
        self.rows.get(key)
    }

    /// Report-wide total row.
    pub fn sum_row(&self) -> &ReportRow<I> {
        &self.sum_row
    }

    /// Row keys in insertion order.
    pub fn row_titles(&self) -> Vec<&str> {
        self.rows.keys().collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = &ReportRow<I>> {
        self.rows.iter()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn headers(&self) -> &[H] {
        &self.headers
    }

    /// Labels of the grouping hierarchy levels (rendering metadata).
    pub fn row_desc(&self) -> &[String] {
        &self.row_desc
    }

    /// Set display names on the sum row and every row, recursing into
    /// foldable children. Keys absent from the mapping fall back to the
    /// row's own key.
    pub fn augment_display_names(&mut self, names: &HashMap<String, String>) {
        self.sum_row.augment_display_names(names);
        for row in self.rows.iter_mut() {
            row.augment_display_names(names);
        }
    }
}
