use std::fmt;

use clover_protocol::ReferenceData;

use super::{Order, Percent, SortKey, TablePage};
use crate::chip::entity_chip;

/// Plain-text rendering of a [`TablePage`] with display names resolved
pub struct PageDisplay<'a> {
    page: &'a TablePage<'a>,
    data: &'a ReferenceData,
}

impl<'a> TablePage<'a> {
    pub fn display(&'a self, data: &'a ReferenceData) -> PageDisplay<'a> {
        PageDisplay { page: self, data }
    }
}

fn header(key: SortKey, page: &TablePage<'_>) -> String {
    if page.sort_key != key {
        return key.label().to_string();
    }
    let arrow = match page.order {
        Order::Asc => '▲',
        Order::Desc => '▼',
    };
    format!("{} {}", key.label(), arrow)
}

impl fmt::Display for PageDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.page;
        let names: Vec<String> = page
            .rows
            .iter()
            .map(|row| entity_chip(page.kind, &row.id, self.data).label)
            .collect();
        let width = names
            .iter()
            .map(|name| name.chars().count())
            .chain([header(SortKey::Id, page).chars().count()])
            .max()
            .unwrap_or(0);

        writeln!(
            f,
            "{:<width$}  {:>10}  {:>10}",
            header(SortKey::Id, page),
            header(SortKey::Usage, page),
            header(SortKey::WinRate, page),
        )?;

        for (row, name) in page.rows.iter().zip(&names) {
            writeln!(
                f,
                "{:<width$}  {:>10}  {:>10}",
                name,
                Percent(row.usage_percentage(page.total)).to_string(),
                Percent(row.win_percentage()).to_string(),
            )?;
        }

        if page.row_count == 0 {
            return write!(f, "No rows");
        }
        write!(
            f,
            "{}-{} of {}",
            page.first_row + 1,
            page.first_row + page.rows.len(),
            page.row_count
        )
    }
}
