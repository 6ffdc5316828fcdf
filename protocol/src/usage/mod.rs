//! Usage statistics snapshots served under `/usage/`

mod path;
mod tests;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DecodeError;

pub use path::UsagePath;

/// Games played and games won for one entity in one context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinUsage {
    pub usage: u64,
    pub win: u64,
}

impl WinUsage {
    pub fn new(usage: u64, win: u64) -> Self {
        Self { usage, win }
    }

    /// Fraction of games won, `None` when the entity was never used
    pub fn win_rate(&self) -> Option<f64> {
        if self.usage == 0 {
            None
        } else {
            Some(self.win as f64 / self.usage as f64)
        }
    }
}

/// Per-species aggregate with everything observed alongside that species
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesStats {
    pub usage: u64,
    pub win: u64,
    /// Species on the same team
    pub partner: BTreeMap<String, WinUsage>,
    /// Species on the opposing team
    pub against: BTreeMap<String, WinUsage>,
    pub item: BTreeMap<String, WinUsage>,
    pub ability: BTreeMap<String, WinUsage>,
    pub nature: BTreeMap<String, WinUsage>,
    #[serde(rename = "move")]
    pub moves: BTreeMap<String, WinUsage>,
}

impl SpeciesStats {
    pub fn totals(&self) -> WinUsage {
        WinUsage::new(self.usage, self.win)
    }
}

/// One node of the usage tree.
///
/// Format, year and month nodes only list their children. Day nodes also
/// carry the per-species aggregates.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsSnapshot {
    Browsable {
        subsections: Vec<String>,
    },
    Terminal {
        subsections: Vec<String>,
        total_teams: u64,
        species_stats: BTreeMap<String, SpeciesStats>,
    },
}

impl StatsSnapshot {
    pub fn subsections(&self) -> &[String] {
        match self {
            Self::Browsable { subsections } | Self::Terminal { subsections, .. } => subsections,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminal { .. })
    }

    pub fn total_teams(&self) -> Option<u64> {
        match self {
            Self::Terminal { total_teams, .. } => Some(*total_teams),
            Self::Browsable { .. } => None,
        }
    }

    pub fn species_stats(&self) -> Option<&BTreeMap<String, SpeciesStats>> {
        match self {
            Self::Terminal { species_stats, .. } => Some(species_stats),
            Self::Browsable { .. } => None,
        }
    }

    /// Stats for a single species of a terminal snapshot
    pub fn species(&self, id: &str) -> Option<&SpeciesStats> {
        self.species_stats()?.get(id)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawSnapshot {
    subsections: Vec<String>,
    total_teams: Option<u64>,
    pokemon_stats: Option<BTreeMap<String, SpeciesStats>>,
}

impl TryFrom<RawSnapshot> for StatsSnapshot {
    type Error = DecodeError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        match (raw.total_teams, raw.pokemon_stats) {
            (None, None) => Ok(Self::Browsable {
                subsections: raw.subsections,
            }),
            (Some(total_teams), Some(species_stats)) => Ok(Self::Terminal {
                subsections: raw.subsections,
                total_teams,
                species_stats,
            }),
            (Some(_), None) => Err(DecodeError::MissingField("pokemonStats".to_string())),
            (None, Some(_)) => Err(DecodeError::MissingField("totalTeams".to_string())),
        }
    }
}

impl<'de> Deserialize<'de> for StatsSnapshot {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawSnapshot::deserialize(deserializer)?;
        StatsSnapshot::try_from(raw).map_err(serde::de::Error::custom)
    }
}
