//! Reference data served under `/data/`: species, moves, items, abilities
//! and battle icon indexes.


use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub type Pokedex = HashMap<String, Species>;
pub type MoveCatalog = HashMap<String, Move>;
pub type ItemCatalog = HashMap<String, Item>;
pub type AbilityCatalog = HashMap<String, Ability>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Species {
    pub name: String,
    /// Dex number, also the default sprite sheet index
    pub num: i64,
    pub types: Vec<String>,
    pub abilities: AbilitySlots,
    pub base_stats: BaseStats,
    #[serde(default)]
    pub forme: Option<String>,
    #[serde(default)]
    pub cosmetic_formes: Option<Vec<String>>,
}

/// Ability slots: two standard, hidden, and special-event
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlots {
    #[serde(rename = "0", default)]
    pub primary: Option<String>,
    #[serde(rename = "1", default)]
    pub secondary: Option<String>,
    #[serde(rename = "H", default)]
    pub hidden: Option<String>,
    #[serde(rename = "S", default)]
    pub special: Option<String>,
}

impl AbilitySlots {
    /// Filled slots in display order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        [&self.primary, &self.secondary, &self.hidden, &self.special]
            .into_iter()
            .filter_map(|slot| slot.as_deref())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseStats {
    pub hp: u32,
    pub atk: u32,
    pub def: u32,
    pub spa: u32,
    pub spd: u32,
    pub spe: u32,
}

impl BaseStats {
    /// Stats in hp/atk/def/spa/spd/spe order
    pub fn to_array(&self) -> [u32; 6] {
        [self.hp, self.atk, self.def, self.spa, self.spd, self.spe]
    }

    pub fn total(&self) -> u32 {
        self.to_array().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveCategory {
    Physical,
    Special,
    Status,
}

impl MoveCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            MoveCategory::Physical => "Physical",
            MoveCategory::Special => "Special",
            MoveCategory::Status => "Status",
        }
    }
}

impl std::fmt::Display for MoveCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Move accuracy. The data encodes "never misses" as the literal `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAccuracy", into = "RawAccuracy")]
pub enum Accuracy {
    Percent(u32),
    AlwaysHits,
}

#[derive(Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
enum RawAccuracy {
    Percent(u32),
    Flag(bool),
}

impl TryFrom<RawAccuracy> for Accuracy {
    type Error = String;

    fn try_from(raw: RawAccuracy) -> Result<Self, Self::Error> {
        match raw {
            RawAccuracy::Percent(value) => Ok(Accuracy::Percent(value)),
            RawAccuracy::Flag(true) => Ok(Accuracy::AlwaysHits),
            RawAccuracy::Flag(false) => Err("accuracy must be a number or true".to_string()),
        }
    }
}

impl From<Accuracy> for RawAccuracy {
    fn from(accuracy: Accuracy) -> Self {
        match accuracy {
            Accuracy::Percent(value) => RawAccuracy::Percent(value),
            Accuracy::AlwaysHits => RawAccuracy::Flag(true),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    pub name: String,
    #[serde(rename = "type")]
    pub move_type: String,
    pub category: MoveCategory,
    #[serde(default)]
    pub base_power: Option<u32>,
    #[serde(default)]
    pub accuracy: Option<Accuracy>,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Move {
    /// Short description, falling back to the long one
    pub fn description(&self) -> Option<&str> {
        description(&self.short_desc, &self.desc)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub name: String,
    #[serde(rename = "spritenum")]
    pub sprite_num: u32,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Item {
    /// Short description, falling back to the long one
    pub fn description(&self) -> Option<&str> {
        description(&self.short_desc, &self.desc)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ability {
    pub name: String,
    #[serde(default)]
    pub short_desc: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl Ability {
    /// Short description, falling back to the long one
    pub fn description(&self) -> Option<&str> {
        description(&self.short_desc, &self.desc)
    }
}

fn description<'a>(short: &'a Option<String>, long: &'a Option<String>) -> Option<&'a str> {
    [short, long]
        .into_iter()
        .filter_map(|desc| desc.as_deref())
        .find(|desc| !desc.is_empty())
}

/// Sprite sheet positions that override the dex number, per facing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BattleIconIndexes {
    pub indexes: HashMap<String, i64>,
    pub indexes_left: HashMap<String, i64>,
}
