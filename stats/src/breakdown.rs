//! Per-species tabs and the all-species overview

use std::collections::BTreeMap;

use clover_protocol::{SpeciesStats, WinUsage};

use crate::{EntityKind, StatsTable};

/// Tabs of a species breakdown, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Tab {
    Allies,
    Foes,
    Items,
    Abilities,
    Natures,
    Moves,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Allies,
        Tab::Foes,
        Tab::Items,
        Tab::Abilities,
        Tab::Natures,
        Tab::Moves,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Allies => "Allies",
            Tab::Foes => "Foes",
            Tab::Items => "Items",
            Tab::Abilities => "Abilities",
            Tab::Natures => "Natures",
            Tab::Moves => "Moves",
        }
    }

    /// What the rows of this tab are
    pub fn kind(&self) -> EntityKind {
        match self {
            Tab::Allies | Tab::Foes => EntityKind::Species,
            Tab::Items => EntityKind::Item,
            Tab::Abilities => EntityKind::Ability,
            Tab::Natures => EntityKind::Nature,
            Tab::Moves => EntityKind::Move,
        }
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Everything observed alongside one species, one table per tab.
///
/// Every tab's usage column is relative to the species' own usage. Each
/// table keeps its own sort and page state.
#[derive(Debug, Clone)]
pub struct SpeciesBreakdown {
    tables: [StatsTable; 6],
    active: Tab,
}

impl SpeciesBreakdown {
    pub fn new(stats: &SpeciesStats) -> Self {
        let total = stats.usage;
        let table = |tab: Tab| {
            let source = match tab {
                Tab::Allies => &stats.partner,
                Tab::Foes => &stats.against,
                Tab::Items => &stats.item,
                Tab::Abilities => &stats.ability,
                Tab::Natures => &stats.nature,
                Tab::Moves => &stats.moves,
            };
            StatsTable::from_stats(tab.kind(), total, source)
        };

        Self {
            tables: Tab::ALL.map(table),
            active: Tab::Allies,
        }
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.active = tab;
    }

    pub fn table(&self, tab: Tab) -> &StatsTable {
        &self.tables[tab.index()]
    }

    pub fn table_mut(&mut self, tab: Tab) -> &mut StatsTable {
        &mut self.tables[tab.index()]
    }

    pub fn active_table(&self) -> &StatsTable {
        self.table(self.active)
    }

    pub fn active_table_mut(&mut self) -> &mut StatsTable {
        self.table_mut(self.active)
    }
}

/// Species table over a whole day, relative to the number of teams
pub fn overview_table(total_teams: u64, species: &BTreeMap<String, SpeciesStats>) -> StatsTable {
    let counts: BTreeMap<String, WinUsage> = species
        .iter()
        .map(|(id, stats)| (id.clone(), stats.totals()))
        .collect();
    StatsTable::from_stats(EntityKind::Species, total_teams, &counts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Order, SortKey};

    fn counts(entries: &[(&str, u64, u64)]) -> BTreeMap<String, WinUsage> {
        entries
            .iter()
            .map(|(id, usage, win)| (id.to_string(), WinUsage::new(*usage, *win)))
            .collect()
    }

    fn garchomp() -> SpeciesStats {
        SpeciesStats {
            usage: 40,
            win: 22,
            partner: counts(&[("clefable", 12, 7), ("heatran", 20, 9)]),
            against: counts(&[("landorustherian", 8, 3)]),
            item: counts(&[("choicescarf", 10, 6), ("rockyhelmet", 30, 16)]),
            ability: counts(&[("roughskin", 40, 22)]),
            nature: counts(&[("jolly", 30, 18), ("adamant", 10, 4)]),
            moves: counts(&[("earthquake", 40, 22), ("swordsdance", 15, 9)]),
        }
    }

    #[test]
    fn test_tabs_follow_species_stats() {
        let breakdown = SpeciesBreakdown::new(&garchomp());

        assert_eq!(breakdown.active(), Tab::Allies);
        assert_eq!(
            breakdown.active_table().page().ids(),
            vec!["heatran", "clefable"]
        );
        assert_eq!(
            breakdown.table(Tab::Foes).page().ids(),
            vec!["landorustherian"]
        );
        assert_eq!(
            breakdown.table(Tab::Items).page().ids(),
            vec!["rockyhelmet", "choicescarf"]
        );
        assert_eq!(
            breakdown.table(Tab::Natures).page().ids(),
            vec!["jolly", "adamant"]
        );

        for tab in Tab::ALL {
            let table = breakdown.table(tab);
            assert_eq!(table.kind(), tab.kind());
            assert_eq!(table.total(), 40);
        }
    }

    #[test]
    fn test_tables_keep_their_own_state() {
        let mut breakdown = SpeciesBreakdown::new(&garchomp());
        breakdown.select_tab(Tab::Moves);
        breakdown
            .active_table_mut()
            .set_sort(SortKey::WinRate, Order::Asc);

        assert_eq!(breakdown.active(), Tab::Moves);
        assert_eq!(
            breakdown.table(Tab::Moves).page().ids(),
            vec!["earthquake", "swordsdance"]
        );
        assert_eq!(breakdown.table(Tab::Items).sort_key(), SortKey::Usage);
    }

    #[test]
    fn test_overview_uses_total_teams() {
        let mut species = BTreeMap::new();
        species.insert("garchomp".to_string(), garchomp());
        species.insert(
            "heatran".to_string(),
            SpeciesStats {
                usage: 55,
                win: 25,
                ..SpeciesStats::default()
            },
        );

        let table = overview_table(200, &species);
        assert_eq!(table.kind(), EntityKind::Species);
        assert_eq!(table.total(), 200);

        let page = table.page();
        assert_eq!(page.ids(), vec!["heatran", "garchomp"]);
        assert_eq!(page.rows[0].usage_percentage(200), 27.5);
    }
}
