//! Usage tables and entity presentation for Clover usage statistics.
//!
//! This crate turns the snapshots decoded by `clover-protocol` into what a
//! viewer shows: sortable, paginated tables with percentages, per-species
//! breakdowns, and labelled chips with tooltips and sprite positions.
//!
//! # Overview
//!
//! ```text
//! clover-protocol (resource schemas)
//!        │
//!        ▼
//! clover-client (fetching, caching, selection)
//!        │
//!        ▼
//! clover-stats (tables + chips) ← THIS CRATE
//! ```
//!
//! # Main Types
//!
//! ## Tables
//! - [`StatsTable`] - Rows of one stats mapping with sort and page state
//! - [`TablePage`] - The visible slice of a table, see [`TablePage::display`]
//! - [`SpeciesBreakdown`] - Allies/Foes/Items/Abilities/Natures/Moves tabs
//! - [`overview_table`] - Every species of a day
//!
//! ## Presentation
//! - [`Chip`] - Display label plus optional icon and tooltip
//! - [`Nature`] - The fixed nature table
//! - [`Percent`] - Two-decimal percentage that renders `—` when undefined
//!
//! # Example Usage
//!
//! ```ignore
//! use clover_stats::{SortKey, SpeciesBreakdown, Tab};
//!
//! let mut breakdown = SpeciesBreakdown::new(&stats);
//! breakdown.select_tab(Tab::Moves);
//! breakdown.active_table_mut().request_sort(SortKey::WinRate);
//!
//! println!("{}", breakdown.active_table().page().display(&reference));
//! ```

mod breakdown;
pub mod chip;
pub mod icon;
mod nature;
mod table;

pub use breakdown::{SpeciesBreakdown, Tab, overview_table};
pub use chip::{Chip, Tooltip, entity_chip};
pub use icon::{ImageIcon, SpriteIcon};
pub use nature::{Nature, Stat};
pub use table::{
    DEFAULT_ROWS_PER_PAGE, EntityKind, Order, PageDisplay, Percent, ROWS_PER_PAGE_OPTIONS, Row,
    SortKey, StatsTable, TableError, TablePage, format_percentage, percentage,
};
