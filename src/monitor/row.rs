//! # Report Rows
//!
//! One row aggregates per-bucket counts plus a running total for a single
//! key. A [`SingleRow`] is a leaf; a [`FoldableRow`] additionally owns an
//! insertion-ordered collection of child rows, keyed by a secondary dimension
//! extracted from each item, enabling arbitrarily deep grouping hierarchies.
//!
//! Grouping depth is built by composition, not inheritance: a foldable row
//! carries an injected child-row factory, and that factory may itself produce
//! further foldable rows configured with the next extractor in the chain.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::item::QueryItem;

/// Strategy producing the row for a freshly seen key, given the key and the
/// number of report columns. The single extension point that decides whether
/// a report (or a folding level) uses plain or foldable rows.
pub type RowFactory<I> = Arc<dyn Fn(&str, usize) -> ReportRow<I> + Send + Sync>;

/// Strategy extracting the child-row key of the next grouping level from an
/// item.
pub type KeyExtractor<I> = Arc<dyn Fn(&I) -> String + Send + Sync>;

/// Leaf aggregation row: per-bucket cells plus a running total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleRow {
    key: String,
    display_name: String,
    cells: Vec<i64>,
    total: i64,
}

impl SingleRow {
    /// New zeroed row. `columns` is the report's header count and fixes the
    /// cell array length for the row's whole life (zero when the report has
    /// no headers).
    pub fn new(key: &str, columns: usize) -> Self {
        Self {
            key: key.to_string(),
            display_name: key.to_string(),
            cells: vec![0; columns],
            total: 0,
        }
    }

    /// Add `value` to the cell at `column` and to the running total.
    pub fn add_value(&mut self, column: usize, value: i64) {
        self.cells[column] += value;
        self.total += value;
    }

    /// Add `value` to the running total only (zero-header insertion path).
    pub fn update_total(&mut self, value: i64) {
        self.total += value;
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Human-readable label; equals the key until explicitly overridden.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn set_display_name(&mut self, display_name: impl Into<String>) {
        self.display_name = display_name.into();
    }

    pub fn cells(&self) -> &[i64] {
        &self.cells
    }

    pub fn total(&self) -> i64 {
        self.total
    }

    fn apply_display_name(&mut self, names: &HashMap<String, String>) {
        self.display_name = names
            .get(&self.key)
            .cloned()
            .unwrap_or_else(|| self.key.clone());
    }
}

/// Row owning a nested, keyed collection of child rows.
///
/// Every insertion first updates this row's own cells and total, then routes
/// the same insertion into the lazily created child for
/// `extractor(item)`. Children are created through the injected factory, so
/// they may themselves be foldable, chaining grouping levels.
pub struct FoldableRow<I> {
    base: SingleRow,
    extractor: KeyExtractor<I>,
    child_factory: RowFactory<I>,
    children: OrderedRowMap<I>,
}

impl<I: QueryItem> FoldableRow<I> {
    pub fn new(
        key: &str,
        columns: usize,
        extractor: KeyExtractor<I>,
        child_factory: RowFactory<I>,
    ) -> Self {
        Self {
            base: SingleRow::new(key, columns),
            extractor,
            child_factory,
            children: OrderedRowMap::new(),
        }
    }

    pub fn add_item(&mut self, item: &I, column: usize) {
        self.base.add_value(column, item.value());
        self.route(item).add_item(item, column);
    }

    pub fn update_total(&mut self, item: &I) {
        self.base.update_total(item.value());
        self.route(item).update_total(item);
    }

    fn route(&mut self, item: &I) -> &mut ReportRow<I> {
        let sub_key = (self.extractor)(item);
        let columns = self.base.cells().len();
        let factory = Arc::clone(&self.child_factory);
        self.children
            .get_or_insert_with(&sub_key, || factory(&sub_key, columns))
    }

    pub fn base(&self) -> &SingleRow {
        &self.base
    }

    /// Child row for `sub_key`, if any item produced it.
    pub fn child(&self, sub_key: &str) -> Option<&ReportRow<I>> {
        self.children.get(sub_key)
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child keys in insertion order.
    pub fn child_keys(&self) -> impl Iterator<Item = &str> {
        self.children.keys()
    }

    pub fn children(&self) -> impl Iterator<Item = &ReportRow<I>> {
        self.children.iter()
    }
}

impl<I> fmt::Debug for FoldableRow<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FoldableRow")
            .field("base", &self.base)
            .field("children", &self.children.len())
            .finish()
    }
}

/// A report row: either a plain leaf or a foldable row with children.
#[derive(Debug)]
pub enum ReportRow<I> {
    Single(SingleRow),
    Foldable(FoldableRow<I>),
}

impl<I: QueryItem> ReportRow<I> {
    pub fn add_item(&mut self, item: &I, column: usize) {
        match self {
            ReportRow::Single(row) => row.add_value(column, item.value()),
            ReportRow::Foldable(row) => row.add_item(item, column),
        }
    }

    pub fn update_total(&mut self, item: &I) {
        match self {
            ReportRow::Single(row) => row.update_total(item.value()),
            ReportRow::Foldable(row) => row.update_total(item),
        }
    }

    /// Set display names from the mapping, recursing into all descendants.
    /// Keys absent from the mapping fall back to the row's own key.
    pub fn augment_display_names(&mut self, names: &HashMap<String, String>) {
        match self {
            ReportRow::Single(row) => row.apply_display_name(names),
            ReportRow::Foldable(row) => {
                row.base.apply_display_name(names);
                for child in row.children.iter_mut() {
                    child.augment_display_names(names);
                }
            }
        }
    }

    fn as_single(&self) -> &SingleRow {
        match self {
            ReportRow::Single(row) => row,
            ReportRow::Foldable(row) => &row.base,
        }
    }

    pub fn key(&self) -> &str {
        self.as_single().key()
    }

    pub fn display_name(&self) -> &str {
        self.as_single().display_name()
    }

    pub fn cells(&self) -> &[i64] {
        self.as_single().cells()
    }

    pub fn total(&self) -> i64 {
        self.as_single().total()
    }

    /// Capability check: the foldable view of this row, if it has one.
    pub fn as_foldable(&self) -> Option<&FoldableRow<I>> {
        match self {
            ReportRow::Single(_) => None,
            ReportRow::Foldable(row) => Some(row),
        }
    }
}

/// Insertion-order-preserving keyed row collection.
///
/// Row ordering is an observable contract of the report (row titles render in
/// first-seen order), so a plain `HashMap` will not do: entries live in a
/// vector, with a key index alongside for O(1) lookup.
pub(crate) struct OrderedRowMap<I> {
    index: HashMap<String, usize>,
    entries: Vec<ReportRow<I>>,
}

impl<I: QueryItem> OrderedRowMap<I> {
    pub(crate) fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    pub(crate) fn get(&self, key: &str) -> Option<&ReportRow<I>> {
        self.index.get(key).map(|&pos| &self.entries[pos])
    }

    pub(crate) fn get_or_insert_with(
        &mut self,
        key: &str,
        create: impl FnOnce() -> ReportRow<I>,
    ) -> &mut ReportRow<I> {
        let pos = match self.index.get(key) {
            Some(&pos) => pos,
            None => {
                self.entries.push(create());
                self.index.insert(key.to_string(), self.entries.len() - 1);
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos]
    }

    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|row| row.key())
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = &ReportRow<I>> {
        self.entries.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut ReportRow<I>> {
        self.entries.iter_mut()
    }
}

impl<I> OrderedRowMap<I> {
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}
