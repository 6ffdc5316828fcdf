//! Cascading format → year → month → day → species selection.
//!
//! Every change synchronously clears the slots below it, then asks for the
//! snapshot that lists the next level. A request is keyed by the
//! selections it was issued for; a result whose key no longer matches the
//! current selections is discarded instead of overwriting the current state.
//! Clearing a lower level leaves the key of a pending upper fetch intact.

use std::collections::BTreeMap;
use std::fmt;

use clover_protocol::{SpeciesStats, StatsSnapshot, UsagePath};
use tracing::{debug, warn};

use crate::{ResourceError, SelectionError, Transport, UsageClient};

/// The four browsable levels of the usage tree
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Level {
    Format,
    Year,
    Month,
    Day,
}

impl Level {
    pub const ALL: [Level; 4] = [Level::Format, Level::Year, Level::Month, Level::Day];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Level whose options a snapshot at this level lists
    pub fn next(&self) -> Option<Level> {
        Self::ALL.get(self.index() + 1).copied()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Format => "format",
            Level::Year => "year",
            Level::Month => "month",
            Level::Day => "day",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anything that can produce usage snapshots
pub trait SnapshotSource {
    async fn fetch_snapshot(&self, path: &UsagePath) -> Result<StatsSnapshot, ResourceError>;
}

impl<T: Transport> SnapshotSource for UsageClient<T> {
    async fn fetch_snapshot(&self, path: &UsagePath) -> Result<StatsSnapshot, ResourceError> {
        self.stats(path).await
    }
}

/// A snapshot fetch issued by the controller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotRequest {
    path: UsagePath,
}

impl SnapshotRequest {
    pub fn path(&self) -> &UsagePath {
        &self.path
    }

    /// Level whose options the response fills, `None` for a day snapshot
    pub fn fills(&self) -> Option<Level> {
        Level::ALL.get(self.path.depth()).copied()
    }
}

/// What happened to a finished request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Applied,
    /// The selections the request was keyed by have changed
    Stale,
    Failed,
}

/// What the current selection displays
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View<'a> {
    /// No day-level snapshot loaded
    Empty,
    Overview {
        total_teams: u64,
        species: &'a BTreeMap<String, SpeciesStats>,
    },
    Species {
        id: &'a str,
        stats: &'a SpeciesStats,
    },
}

#[derive(Debug, Clone, Default)]
struct Slot {
    options: Vec<String>,
    selection: Option<String>,
}

/// State of the five selectors and the snapshot they currently show
#[derive(Debug, Default)]
pub struct SelectionController {
    slots: [Slot; 4],
    species: Option<String>,
    snapshot: Option<StatsSnapshot>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset everything and request the root listing of formats
    pub fn start(&mut self) -> SnapshotRequest {
        *self = Self::default();
        SnapshotRequest {
            path: UsagePath::root(),
        }
    }

    /// Change the selection at `level`.
    ///
    /// Clears every later selection and option list. An empty value only
    /// clears; any other value must be one of the level's options and
    /// yields the request for the snapshot under it.
    pub fn select(
        &mut self,
        level: Level,
        value: &str,
    ) -> Result<Option<SnapshotRequest>, SelectionError> {
        if !value.is_empty() && !self.options(level).iter().any(|option| option == value) {
            return Err(SelectionError::UnknownOption {
                level,
                value: value.to_string(),
            });
        }

        self.clear_below(level);

        let slot = &mut self.slots[level.index()];
        if value.is_empty() {
            slot.selection = None;
            return Ok(None);
        }
        slot.selection = Some(value.to_string());

        Ok(Some(SnapshotRequest {
            path: self.path_through(level),
        }))
    }

    /// Apply the result of a request issued by [`start`](Self::start) or
    /// [`select`](Self::select).
    ///
    /// The result applies only while the current selections still lead to
    /// exactly the request's path.
    pub fn complete(
        &mut self,
        request: &SnapshotRequest,
        result: Result<StatsSnapshot, ResourceError>,
    ) -> Completion {
        let current = self.path();
        if request.path != current {
            debug!(
                path = %request.path,
                current = %current,
                "Discarding superseded snapshot"
            );
            return Completion::Stale;
        }

        let snapshot = match result {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(path = %request.path, error = %e, "Selection left without options");
                return Completion::Failed;
            }
        };

        if let Some(level) = request.fills() {
            self.slots[level.index()].options = snapshot.subsections().to_vec();
        }
        self.snapshot = Some(snapshot);
        Completion::Applied
    }

    /// [`start`](Self::start) and wait for the result
    pub async fn load_formats<S: SnapshotSource>(&mut self, source: &S) -> Completion {
        let request = self.start();
        let result = source.fetch_snapshot(request.path()).await;
        self.complete(&request, result)
    }

    /// [`select`](Self::select) and wait for the result, if a fetch is needed
    pub async fn choose<S: SnapshotSource>(
        &mut self,
        source: &S,
        level: Level,
        value: &str,
    ) -> Result<Option<Completion>, SelectionError> {
        let Some(request) = self.select(level, value)? else {
            return Ok(None);
        };
        let result = source.fetch_snapshot(request.path()).await;
        Ok(Some(self.complete(&request, result)))
    }

    /// Pick a species from the loaded day snapshot, or clear with `""`
    pub fn select_species(&mut self, id: &str) -> Result<(), SelectionError> {
        if id.is_empty() {
            self.species = None;
            return Ok(());
        }

        let known = self
            .snapshot
            .as_ref()
            .and_then(StatsSnapshot::species_stats)
            .is_some_and(|species| species.contains_key(id));
        if !known {
            return Err(SelectionError::UnknownSpecies(id.to_string()));
        }

        self.species = Some(id.to_string());
        Ok(())
    }

    pub fn options(&self, level: Level) -> &[String] {
        &self.slots[level.index()].options
    }

    pub fn selection(&self, level: Level) -> Option<&str> {
        self.slots[level.index()].selection.as_deref()
    }

    pub fn species(&self) -> Option<&str> {
        self.species.as_deref()
    }

    /// Species of the loaded day snapshot, sorted by id
    pub fn species_options(&self) -> Vec<String> {
        self.snapshot
            .as_ref()
            .and_then(StatsSnapshot::species_stats)
            .map(|species| species.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Most recently applied snapshot
    pub fn snapshot(&self) -> Option<&StatsSnapshot> {
        self.snapshot.as_ref()
    }

    /// Path of the current selections
    pub fn path(&self) -> UsagePath {
        self.path_through(Level::Day)
    }

    pub fn view(&self) -> View<'_> {
        let Some(StatsSnapshot::Terminal {
            total_teams,
            species_stats,
            ..
        }) = &self.snapshot
        else {
            return View::Empty;
        };

        if let Some((id, stats)) = self
            .species
            .as_deref()
            .and_then(|id| species_stats.get_key_value(id))
        {
            return View::Species {
                id: id.as_str(),
                stats,
            };
        }

        View::Overview {
            total_teams: *total_teams,
            species: species_stats,
        }
    }

    fn clear_below(&mut self, level: Level) {
        for slot in &mut self.slots[level.index() + 1..] {
            *slot = Slot::default();
        }
        self.species = None;
        self.snapshot = None;
    }

    fn path_through(&self, level: Level) -> UsagePath {
        self.slots[..=level.index()]
            .iter()
            .map_while(|slot| slot.selection.as_deref())
            .fold(UsagePath::root(), |path, segment| {
                path.child(segment).unwrap_or(path)
            })
    }
}
