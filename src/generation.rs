use serde::{Deserialize, Serialize};
use std::fmt;

/// Pokemon generations, each covering a contiguous Pokedex id range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Generation {
    Gen1,
    Gen2,
    Gen3,
    Gen4,
    Gen5,
    Gen6,
    Gen7,
    Gen8,
    Gen9,
}

impl Generation {
    pub const ALL: [Generation; 9] = [
        Generation::Gen1,
        Generation::Gen2,
        Generation::Gen3,
        Generation::Gen4,
        Generation::Gen5,
        Generation::Gen6,
        Generation::Gen7,
        Generation::Gen8,
        Generation::Gen9,
    ];

    /// Inclusive Pokedex id range for this generation.
    pub fn id_range(self) -> (u16, u16) {
        match self {
            Generation::Gen1 => (1, 151),
            Generation::Gen2 => (152, 251),
            Generation::Gen3 => (252, 386),
            Generation::Gen4 => (387, 493),
            Generation::Gen5 => (494, 649),
            Generation::Gen6 => (650, 721),
            Generation::Gen7 => (722, 809),
            Generation::Gen8 => (810, 905),
            Generation::Gen9 => (906, 1025),
        }
    }

    /// The generation a Pokedex id belongs to, if it is in the catalog.
    pub fn of(pokemon_id: u16) -> Option<Generation> {
        Generation::ALL.into_iter().find(|generation| {
            let (start, end) = generation.id_range();
            (start..=end).contains(&pokemon_id)
        })
    }

    /// Human-readable label for UI display.
    pub fn label(self) -> &'static str {
        match self {
            Generation::Gen1 => "Generation I",
            Generation::Gen2 => "Generation II",
            Generation::Gen3 => "Generation III",
            Generation::Gen4 => "Generation IV",
            Generation::Gen5 => "Generation V",
            Generation::Gen6 => "Generation VI",
            Generation::Gen7 => "Generation VII",
            Generation::Gen8 => "Generation VIII",
            Generation::Gen9 => "Generation IX",
        }
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
