//! Resource schemas for the Clover usage statistics host.
//!
//! Every JSON document the viewer consumes is described here as a plain
//! serde type. Decoding a document is the validation step: a body that
//! deserializes is structurally valid, anything else is rejected.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod dex;
pub mod format;
mod id;
pub mod reference;
pub mod usage;

pub use dex::{
    Ability, AbilityCatalog, AbilitySlots, Accuracy, BaseStats, BattleIconIndexes, Item,
    ItemCatalog, Move, MoveCategory, MoveCatalog, Pokedex, Species,
};
pub use format::{Format, FormatCatalog, RawFormat, build_format_catalog, parse_format_catalog};
pub use id::to_id;
pub use reference::ReferenceData;
pub use usage::{SpeciesStats, StatsSnapshot, UsagePath, WinUsage};

/// Document that is valid JSON but not a valid resource
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Decode and validate a JSON document into one of the resource types
pub fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).context("Failed to decode resource body")
}
