//! Labelled chips for the entities listed in a stats table.
//!
//! Each chip resolves its display name against the [`ReferenceData`] and,
//! when there is something to say, carries a tooltip. Unknown ids still get
//! a chip, labelled with the id itself.

use std::fmt;

use clover_protocol::{Accuracy, ReferenceData};

use crate::icon::{ImageIcon, SpriteIcon, category_icon, item_icon, species_icon, type_icon};
use crate::{EntityKind, Nature};

const MISSING: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Chip {
    pub label: String,
    pub icon: Option<SpriteIcon>,
    pub tooltip: Option<Tooltip>,
}

/// Tooltip text lines plus the badges shown next to them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tooltip {
    pub lines: Vec<String>,
    pub images: Vec<ImageIcon>,
}

impl Tooltip {
    fn text(text: &str) -> Self {
        Self {
            lines: vec![text.to_string()],
            images: Vec::new(),
        }
    }
}

impl fmt::Display for Tooltip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.join("\n"))
    }
}

impl fmt::Display for Chip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Chip for any table entity
pub fn entity_chip(kind: EntityKind, id: &str, data: &ReferenceData) -> Chip {
    match kind {
        EntityKind::Species => species_chip(id, data),
        EntityKind::Item => item_chip(id, data),
        EntityKind::Ability => ability_chip(id, data),
        EntityKind::Nature => nature_chip(id),
        EntityKind::Move => move_chip(id, data),
    }
}

/// Label for ids where the empty id means "nothing held"
fn label_or_none(name: Option<&str>, id: &str) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ if !id.is_empty() => id.to_string(),
        _ => "None".to_string(),
    }
}

pub fn species_chip(id: &str, data: &ReferenceData) -> Chip {
    let icon = species_icon(id, &data.pokedex, &data.battle_icon_indexes);
    let Some(species) = data.pokedex.get(id) else {
        return Chip {
            label: id.to_string(),
            icon: Some(icon),
            tooltip: None,
        };
    };

    let abilities: Vec<&str> = species.abilities.iter().collect();
    let stats = species.base_stats.to_array().map(|stat| stat.to_string());
    let tooltip = Tooltip {
        lines: vec![
            format!("Types: {}", species.types.join("/")),
            format!("Abilities: {}", abilities.join("/")),
            format!(
                "Stats: {} ({})",
                stats.join("/"),
                species.base_stats.total()
            ),
        ],
        images: species.types.iter().map(|name| type_icon(name)).collect(),
    };

    Chip {
        label: data.species_name(id).to_string(),
        icon: Some(icon),
        tooltip: Some(tooltip),
    }
}

pub fn item_chip(id: &str, data: &ReferenceData) -> Chip {
    let item = data.items.get(id);
    Chip {
        label: label_or_none(item.map(|item| item.name.as_str()), id),
        icon: Some(item_icon(id, &data.items)),
        tooltip: item.and_then(|item| item.description()).map(Tooltip::text),
    }
}

pub fn ability_chip(id: &str, data: &ReferenceData) -> Chip {
    let ability = data.abilities.get(id);
    Chip {
        label: ability.map_or(id, |ability| ability.name.as_str()).to_string(),
        icon: None,
        tooltip: ability
            .and_then(|ability| ability.description())
            .map(Tooltip::text),
    }
}

pub fn nature_chip(id: &str) -> Chip {
    let nature = Nature::from_id(id);
    Chip {
        label: label_or_none(nature.map(|nature| nature.name()), id),
        icon: None,
        tooltip: nature
            .and_then(|nature| nature.summary())
            .map(|summary| Tooltip::text(&summary)),
    }
}

pub fn move_chip(id: &str, data: &ReferenceData) -> Chip {
    let Some(known) = data.moves.get(id) else {
        return Chip {
            label: id.to_string(),
            icon: None,
            tooltip: None,
        };
    };

    let base_power = match known.base_power {
        Some(power) if power > 0 => power.to_string(),
        _ => MISSING.to_string(),
    };
    let accuracy = match known.accuracy {
        Some(Accuracy::Percent(value)) => value.to_string(),
        Some(Accuracy::AlwaysHits) | None => MISSING.to_string(),
    };

    let mut lines = vec![
        format!("Type: {}", known.move_type),
        format!("Category: {}", known.category),
        format!("BP: {}", base_power),
        format!("Acc: {}", accuracy),
    ];
    if let Some(desc) = known.description() {
        lines.push(desc.to_string());
    }

    Chip {
        label: known.name.clone(),
        icon: None,
        tooltip: Some(Tooltip {
            lines,
            images: vec![
                type_icon(&known.move_type),
                category_icon(known.category.as_str()),
            ],
        }),
    }
}
