//! Sortable, paginated usage table

mod percent;
mod render;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use clover_protocol::WinUsage;
use thiserror::Error;

pub use percent::{Percent, format_percentage, percentage};
pub use render::PageDisplay;

/// Page sizes a table accepts
pub const ROWS_PER_PAGE_OPTIONS: [usize; 5] = [20, 40, 60, 80, 100];

pub const DEFAULT_ROWS_PER_PAGE: usize = 20;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("Unsupported page size: {0}")]
    UnsupportedPageSize(usize),
}

/// What the ids of a table refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum EntityKind {
    Species,
    Item,
    Ability,
    Nature,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum SortKey {
    /// Entity id, lexicographic
    Id,
    /// Raw usage count
    Usage,
    /// Wins divided by usage
    WinRate,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Id => "Name",
            SortKey::Usage => "Usage",
            SortKey::WinRate => "Winrate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Order {
    Asc,
    Desc,
}

/// One entity's counts
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Row {
    pub id: String,
    pub usage: u64,
    pub win: u64,
}

impl Row {
    pub fn new(id: impl Into<String>, usage: u64, win: u64) -> Self {
        Self {
            id: id.into(),
            usage,
            win,
        }
    }

    pub fn win_rate(&self) -> Option<f64> {
        WinUsage::new(self.usage, self.win).win_rate()
    }

    /// Share of `total` games this entity appeared in
    pub fn usage_percentage(&self, total: u64) -> f64 {
        percentage(self.usage, total)
    }

    /// Share of its own games this entity won
    pub fn win_percentage(&self) -> f64 {
        percentage(self.win, self.usage)
    }

    /// `"{usage} games out of {total}"`
    pub fn usage_tooltip(&self, total: u64) -> String {
        format!("{} games out of {}", self.usage, total)
    }

    /// `"{win} games out of {usage}"`
    pub fn win_tooltip(&self) -> String {
        format!("{} games out of {}", self.win, self.usage)
    }
}

fn compare(a: &Row, b: &Row, key: SortKey) -> Ordering {
    match key {
        SortKey::Id => a.id.cmp(&b.id),
        SortKey::Usage => a.usage.cmp(&b.usage),
        // never-used rows have no rate and rank below every rate
        SortKey::WinRate => match (a.win_rate(), b.win_rate()) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (a, b) => a.is_some().cmp(&b.is_some()),
        },
    }
}

/// Usage table over one mapping of entity id to counts.
///
/// Sorted by usage, highest first, 20 rows per page until told otherwise.
/// Ties keep the input order.
#[derive(Debug, Clone)]
pub struct StatsTable {
    kind: EntityKind,
    total: u64,
    rows: Vec<Row>,
    sort_key: SortKey,
    order: Order,
    page: usize,
    rows_per_page: usize,
}

impl StatsTable {
    /// Build a table from rows in their input order
    pub fn new(kind: EntityKind, total: u64, rows: impl IntoIterator<Item = Row>) -> Self {
        Self {
            kind,
            total,
            rows: rows.into_iter().collect(),
            sort_key: SortKey::Usage,
            order: Order::Desc,
            page: 0,
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }

    /// Build a table from a stats mapping
    pub fn from_stats(kind: EntityKind, total: u64, stats: &BTreeMap<String, WinUsage>) -> Self {
        Self::new(
            kind,
            total,
            stats
                .iter()
                .map(|(id, counts)| Row::new(id.clone(), counts.usage, counts.win)),
        )
    }

    pub fn kind(&self) -> EntityKind {
        self.kind
    }

    /// Denominator of the usage column
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn sort_key(&self) -> SortKey {
        self.sort_key
    }

    pub fn order(&self) -> Order {
        self.order
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn page_count(&self) -> usize {
        self.rows.len().div_ceil(self.rows_per_page)
    }

    /// Header click: an active ascending column flips to descending,
    /// anything else sorts ascending. The page index is kept.
    pub fn request_sort(&mut self, key: SortKey) {
        let is_asc = self.sort_key == key && self.order == Order::Asc;
        self.order = if is_asc { Order::Desc } else { Order::Asc };
        self.sort_key = key;
    }

    pub fn set_sort(&mut self, key: SortKey, order: Order) {
        self.sort_key = key;
        self.order = order;
    }

    /// Move to `page`, clamped to the last page
    pub fn set_page(&mut self, page: usize) {
        self.page = page.min(self.page_count().saturating_sub(1));
    }

    /// Change the page size and return to the first page
    pub fn set_rows_per_page(&mut self, rows_per_page: usize) -> Result<(), TableError> {
        if !ROWS_PER_PAGE_OPTIONS.contains(&rows_per_page) {
            return Err(TableError::UnsupportedPageSize(rows_per_page));
        }
        self.rows_per_page = rows_per_page;
        self.page = 0;
        Ok(())
    }

    /// Every row in the current sort order
    pub fn sorted_rows(&self) -> Vec<&Row> {
        let mut rows: Vec<&Row> = self.rows.iter().collect();
        let key = self.sort_key;
        match self.order {
            Order::Desc => rows.sort_by(|a, b| compare(b, a, key)),
            Order::Asc => rows.sort_by(|a, b| compare(a, b, key)),
        }
        rows
    }

    /// Rows of the current page
    pub fn page(&self) -> TablePage<'_> {
        let start = self.page * self.rows_per_page;
        let rows: Vec<&Row> = self
            .sorted_rows()
            .into_iter()
            .skip(start)
            .take(self.rows_per_page)
            .collect();

        let empty_rows = if self.page > 0 {
            ((1 + self.page) * self.rows_per_page).saturating_sub(self.rows.len())
        } else {
            0
        };

        TablePage {
            kind: self.kind,
            total: self.total,
            page: self.page,
            rows_per_page: self.rows_per_page,
            row_count: self.rows.len(),
            sort_key: self.sort_key,
            order: self.order,
            first_row: start,
            rows,
            empty_rows,
        }
    }
}

/// One page of a [`StatsTable`], ready to render
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TablePage<'a> {
    pub kind: EntityKind,
    pub total: u64,
    pub page: usize,
    pub rows_per_page: usize,
    pub row_count: usize,
    pub sort_key: SortKey,
    pub order: Order,
    /// Position of the first row of this page in the sorted table
    pub first_row: usize,
    pub rows: Vec<&'a Row>,
    /// Filler rows that keep a short last page at full height
    pub empty_rows: usize,
}

impl TablePage<'_> {
    pub fn ids(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.id.as_str()).collect()
    }

    pub fn page_count(&self) -> usize {
        self.row_count.div_ceil(self.rows_per_page)
    }
}
