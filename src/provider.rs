use crate::errors::{DataProviderError, DataProviderResult};
use schema::PokemonType;
use std::collections::HashMap;

/// Lowest Pokedex id served by the catalog.
pub const MIN_POKEMON_ID: u16 = 1;
/// Highest Pokedex id served by the catalog.
pub const MAX_POKEMON_ID: u16 = 1025;

/// Source of Pokemon typing data, keyed by Pokedex id.
///
/// The analysis engine consumes only this shape; how the data is fetched
/// (REST catalog, cache, fixture) is the implementer's concern. A member
/// whose types cannot be resolved is reported as an error and the caller
/// decides whether to omit it from the profile.
pub trait PokemonDataProvider {
    /// The ordered list of one or two types for the given Pokemon.
    fn pokemon_types(&self, pokemon_id: u16) -> DataProviderResult<Vec<PokemonType>>;
}

/// In-memory provider backed by a fixed id -> types map.
///
/// Doubles as the offline catalog and the test stand-in for the remote
/// Pokemon API.
#[derive(Debug, Clone, Default)]
pub struct StaticPokemonProvider {
    entries: HashMap<u16, Vec<PokemonType>>,
}

impl StaticPokemonProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the typing for a Pokemon id. Replaces any previous entry.
    pub fn insert(&mut self, pokemon_id: u16, types: Vec<PokemonType>) {
        self.entries.insert(pokemon_id, types);
    }

    /// Builder-style variant of [`insert`](Self::insert).
    pub fn with_entry(mut self, pokemon_id: u16, types: Vec<PokemonType>) -> Self {
        self.insert(pokemon_id, types);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PokemonDataProvider for StaticPokemonProvider {
    fn pokemon_types(&self, pokemon_id: u16) -> DataProviderResult<Vec<PokemonType>> {
        if !(MIN_POKEMON_ID..=MAX_POKEMON_ID).contains(&pokemon_id) {
            return Err(DataProviderError::InvalidPokemonId(pokemon_id));
        }
        let types = self
            .entries
            .get(&pokemon_id)
            .ok_or(DataProviderError::PokemonNotFound(pokemon_id))?;
        if types.is_empty() || types.len() > 2 {
            return Err(DataProviderError::MalformedData(format!(
                "Pokemon {} has {} types",
                pokemon_id,
                types.len()
            )));
        }
        Ok(types.clone())
    }
}
