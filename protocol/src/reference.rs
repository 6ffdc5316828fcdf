use std::sync::Arc;

use crate::{
    AbilityCatalog, BattleIconIndexes, FormatCatalog, ItemCatalog, MoveCatalog, Pokedex, to_id,
};

/// The reference datasets shared by every view.
///
/// Each dataset sits behind an `Arc`, so cloning the bundle never copies
/// the catalogs. A dataset that has not loaded is simply empty.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    pub abilities: Arc<AbilityCatalog>,
    pub battle_icon_indexes: Arc<BattleIconIndexes>,
    pub formats: Arc<FormatCatalog>,
    pub items: Arc<ItemCatalog>,
    pub moves: Arc<MoveCatalog>,
    pub pokedex: Arc<Pokedex>,
}

impl ReferenceData {
    /// Display name of a format, or the id itself
    pub fn format_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.formats.get(id).map_or(id, |format| format.name.as_str())
    }

    /// Display name of a species, or the id itself
    pub fn species_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.pokedex.get(id).map_or(id, |species| species.name.as_str())
    }

    /// Look a species up by display name instead of id
    pub fn species_by_name(&self, name: &str) -> Option<&crate::Species> {
        self.pokedex.get(&to_id(name))
    }
}
