use std::fmt;

use clover_protocol::UsagePath;
use thiserror::Error;

use crate::selector::Level;

/// Reference datasets served under `/data/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dataset {
    Pokedex,
    Moves,
    Items,
    Abilities,
    BattleIcons,
    Formats,
}

impl Dataset {
    pub const ALL: [Dataset; 6] = [
        Dataset::Pokedex,
        Dataset::Moves,
        Dataset::Items,
        Dataset::Abilities,
        Dataset::BattleIcons,
        Dataset::Formats,
    ];

    /// Location relative to the host root
    pub fn path(&self) -> &'static str {
        match self {
            Dataset::Pokedex => "data/pokedex.json",
            Dataset::Moves => "data/moves.json",
            Dataset::Items => "data/items.json",
            Dataset::Abilities => "data/abilities.json",
            Dataset::BattleIcons => "data/battle-icons.json",
            Dataset::Formats => "data/formats.json",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Dataset::Pokedex => "pokedex",
            Dataset::Moves => "moves",
            Dataset::Items => "items",
            Dataset::Abilities => "abilities",
            Dataset::BattleIcons => "battle icons",
            Dataset::Formats => "formats",
        }
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Anything the client can fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resource {
    Dataset(Dataset),
    Stats(UsagePath),
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Dataset(dataset) => write!(f, "{}", dataset),
            Resource::Stats(path) => write!(f, "usage stats {}", path),
        }
    }
}

/// Failure to produce a resource.
///
/// Network errors, bad status codes, malformed JSON and schema mismatches
/// all collapse into this one kind. The cause is logged, not returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    #[error("{0} unavailable")]
    Unavailable(Resource),
}

impl ResourceError {
    pub fn resource(&self) -> &Resource {
        match self {
            ResourceError::Unavailable(resource) => resource,
        }
    }
}

/// Rejected selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    #[error("{value:?} is not an available {level} option")]
    UnknownOption { level: Level, value: String },

    #[error("{0:?} is not in the loaded usage stats")]
    UnknownSpecies(String),
}
