//! Natures and the stats they raise and lower

/// Stats a nature can modify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Stat {
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

impl Stat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::SpA => "SpA",
            Stat::SpD => "SpD",
            Stat::Spe => "Spe",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Nature {
    Adamant,
    Bashful,
    Bold,
    Brave,
    Calm,
    Careful,
    Docile,
    Gentle,
    Hardy,
    Hasty,
    Impish,
    Jolly,
    Lax,
    Lonely,
    Mild,
    Modest,
    Naive,
    Naughty,
    Quiet,
    Quirky,
    Rash,
    Relaxed,
    Sassy,
    Serious,
    Timid,
}

impl Nature {
    pub const ALL: [Nature; 25] = [
        Nature::Adamant,
        Nature::Bashful,
        Nature::Bold,
        Nature::Brave,
        Nature::Calm,
        Nature::Careful,
        Nature::Docile,
        Nature::Gentle,
        Nature::Hardy,
        Nature::Hasty,
        Nature::Impish,
        Nature::Jolly,
        Nature::Lax,
        Nature::Lonely,
        Nature::Mild,
        Nature::Modest,
        Nature::Naive,
        Nature::Naughty,
        Nature::Quiet,
        Nature::Quirky,
        Nature::Rash,
        Nature::Relaxed,
        Nature::Sassy,
        Nature::Serious,
        Nature::Timid,
    ];

    /// Look a nature up by id (`"naive"`, `"jolly"`, ...)
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|nature| nature.id() == id)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Nature::Adamant => "adamant",
            Nature::Bashful => "bashful",
            Nature::Bold => "bold",
            Nature::Brave => "brave",
            Nature::Calm => "calm",
            Nature::Careful => "careful",
            Nature::Docile => "docile",
            Nature::Gentle => "gentle",
            Nature::Hardy => "hardy",
            Nature::Hasty => "hasty",
            Nature::Impish => "impish",
            Nature::Jolly => "jolly",
            Nature::Lax => "lax",
            Nature::Lonely => "lonely",
            Nature::Mild => "mild",
            Nature::Modest => "modest",
            Nature::Naive => "naive",
            Nature::Naughty => "naughty",
            Nature::Quiet => "quiet",
            Nature::Quirky => "quirky",
            Nature::Rash => "rash",
            Nature::Relaxed => "relaxed",
            Nature::Sassy => "sassy",
            Nature::Serious => "serious",
            Nature::Timid => "timid",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Nature::Naive => "Naïve",
            Nature::Adamant => "Adamant",
            Nature::Bashful => "Bashful",
            Nature::Bold => "Bold",
            Nature::Brave => "Brave",
            Nature::Calm => "Calm",
            Nature::Careful => "Careful",
            Nature::Docile => "Docile",
            Nature::Gentle => "Gentle",
            Nature::Hardy => "Hardy",
            Nature::Hasty => "Hasty",
            Nature::Impish => "Impish",
            Nature::Jolly => "Jolly",
            Nature::Lax => "Lax",
            Nature::Lonely => "Lonely",
            Nature::Mild => "Mild",
            Nature::Modest => "Modest",
            Nature::Naughty => "Naughty",
            Nature::Quiet => "Quiet",
            Nature::Quirky => "Quirky",
            Nature::Rash => "Rash",
            Nature::Relaxed => "Relaxed",
            Nature::Sassy => "Sassy",
            Nature::Serious => "Serious",
            Nature::Timid => "Timid",
        }
    }

    /// Raised and lowered stat, `None` for the five neutral natures
    pub fn modifiers(&self) -> Option<(Stat, Stat)> {
        use Stat::*;

        match self {
            Nature::Adamant => Some((Atk, SpA)),
            Nature::Bold => Some((Def, Atk)),
            Nature::Brave => Some((Atk, Spe)),
            Nature::Calm => Some((SpD, Atk)),
            Nature::Careful => Some((SpD, SpA)),
            Nature::Gentle => Some((SpD, Def)),
            Nature::Hasty => Some((Spe, Def)),
            Nature::Impish => Some((Def, SpA)),
            Nature::Jolly => Some((Spe, SpA)),
            Nature::Lax => Some((Def, SpD)),
            Nature::Lonely => Some((Atk, Def)),
            Nature::Mild => Some((SpA, Def)),
            Nature::Modest => Some((SpA, Atk)),
            Nature::Naive => Some((Spe, SpD)),
            Nature::Naughty => Some((Atk, SpD)),
            Nature::Quiet => Some((SpA, Spe)),
            Nature::Rash => Some((SpA, SpD)),
            Nature::Relaxed => Some((Def, Spe)),
            Nature::Sassy => Some((SpD, Spe)),
            Nature::Timid => Some((Spe, Atk)),
            Nature::Bashful | Nature::Docile | Nature::Hardy | Nature::Quirky | Nature::Serious => {
                None
            }
        }
    }

    /// `"+Spe, -SpA"` style summary of the modifiers
    pub fn summary(&self) -> Option<String> {
        self.modifiers()
            .map(|(plus, minus)| format!("+{}, -{}", plus, minus))
    }
}

impl std::fmt::Display for Nature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
