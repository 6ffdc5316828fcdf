//! Sprite sheet positions and image urls for entity icons.
//!
//! Icons are addressed, never fetched: a [`SpriteIcon`] names a cell of one
//! of the sheets below, an [`ImageIcon`] a standalone image.

use clover_protocol::{BattleIconIndexes, ItemCatalog, Pokedex};

pub const SPRITE_BASE_URL: &str = "https://clover.weedl.es/sprites";

pub const ITEM_SHEET_URL: &str = "https://clover.weedl.es/sprites/itemicons-sheet.png?g8";

pub const SPECIES_SHEET_URL: &str = "https://clover.weedl.es/sprites/pokemonicons-sheet.png?v4";

const ITEM_CELL: (i64, i64) = (24, 24);
const ITEM_COLUMNS: i64 = 16;

const SPECIES_CELL: (i64, i64) = (40, 30);
const SPECIES_COLUMNS: i64 = 12;

/// Highest dex number with a regular sprite
const LAST_DEX_SPRITE: i64 = 1010;

/// One cell of a sprite sheet, as pixel offsets into the sheet
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SpriteIcon {
    pub sheet: &'static str,
    pub left: i64,
    pub top: i64,
}

impl SpriteIcon {
    fn cell(sheet: &'static str, index: i64, (width, height): (i64, i64), columns: i64) -> Self {
        Self {
            sheet,
            left: (index % columns) * width,
            top: (index / columns) * height,
        }
    }

    /// CSS `background` shorthand for the cell
    pub fn background(&self) -> String {
        format!(
            "transparent url({}) no-repeat scroll -{}px -{}px",
            self.sheet, self.left, self.top
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageIcon {
    pub url: String,
    pub alt: String,
}

/// Item sprite. Unknown items sit at cell 0.
pub fn item_icon(id: &str, items: &ItemCatalog) -> SpriteIcon {
    let index = items.get(id).map_or(0, |item| i64::from(item.sprite_num));
    SpriteIcon::cell(ITEM_SHEET_URL, index, ITEM_CELL, ITEM_COLUMNS)
}

/// Position of a species in the species sprite sheet.
///
/// Starts from the dex number and remaps the bands used by alternate
/// formes and fakemon. A non-zero entry in the right-facing index table
/// wins over the computed value.
pub fn species_icon_index(id: &str, pokedex: &Pokedex, indexes: &BattleIconIndexes) -> i64 {
    let mut num = pokedex.get(id).map_or(0, |species| species.num);

    if num > 69000 && num <= 69386 {
        num = 1379 + 144 + num % 69000;
    } else if (-42012..-42000).contains(&num) {
        num = 1379 + 576 + (num % 42000).abs();
    } else if num > 42000 && num <= 42999 {
        num = 1379 + 588 + num % 42000;
    } else if num > LAST_DEX_SPRITE {
        num = 0;
    }
    if num < 0 {
        num = 0;
    }

    match indexes.indexes.get(id) {
        Some(&index) if index != 0 => index,
        _ => num,
    }
}

pub fn species_icon(id: &str, pokedex: &Pokedex, indexes: &BattleIconIndexes) -> SpriteIcon {
    let index = species_icon_index(id, pokedex, indexes);
    SpriteIcon::cell(SPECIES_SHEET_URL, index, SPECIES_CELL, SPECIES_COLUMNS)
}

fn image_name(name: &str) -> String {
    let mut chars = name.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
        None => String::new(),
    };
    capitalized.replace('?', "%3f")
}

/// Type badge, e.g. `Dragon` or the unknown type `???`
pub fn type_icon(name: &str) -> ImageIcon {
    ImageIcon {
        url: format!("{}/types/{}.png", SPRITE_BASE_URL, image_name(name)),
        alt: name.to_string(),
    }
}

/// Move category badge
pub fn category_icon(name: &str) -> ImageIcon {
    ImageIcon {
        url: format!("{}/categories/{}.png", SPRITE_BASE_URL, image_name(name)),
        alt: name.to_string(),
    }
}
