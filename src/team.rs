use crate::analysis::{analyze_team, TeamTypeAnalysis};
use crate::errors::{TeamError, TeamResult};
use crate::provider::PokemonDataProvider;
use schema::PokemonType;
use serde::{Deserialize, Serialize};

/// Fixed number of team slots.
pub const TEAM_SIZE: usize = 6;

/// A team of up to six Pokemon, identified by Pokedex id per slot.
///
/// Pure in-memory value type; persistence, ownership and sharing live in
/// the hosted backend and are not modeled here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub name: String,
    pub description: Option<String>,
    // Positional slots (0-5). An empty slot holds None.
    pub slots: [Option<u16>; TEAM_SIZE],
}

impl Team {
    /// Create an empty team. The name must contain at least one
    /// non-whitespace character.
    pub fn new(name: impl Into<String>) -> TeamResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TeamError::EmptyTeamName);
        }
        Ok(Self {
            name,
            description: None,
            slots: [None; TEAM_SIZE],
        })
    }

    /// Assign a Pokemon to a specific slot, replacing any occupant.
    pub fn set_slot(&mut self, position: usize, pokemon_id: u16) -> TeamResult<()> {
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(TeamError::InvalidPosition(position))?;
        *slot = Some(pokemon_id);
        Ok(())
    }

    /// Empty a slot, returning its previous occupant if any.
    pub fn clear_slot(&mut self, position: usize) -> TeamResult<Option<u16>> {
        let slot = self
            .slots
            .get_mut(position)
            .ok_or(TeamError::InvalidPosition(position))?;
        Ok(slot.take())
    }

    /// Place a Pokemon in the first free slot.
    pub fn add_pokemon(&mut self, pokemon_id: u16) -> TeamResult<usize> {
        let position = self
            .slots
            .iter()
            .position(|slot| slot.is_none())
            .ok_or(TeamError::TeamFull)?;
        self.slots[position] = Some(pokemon_id);
        Ok(position)
    }

    /// Number of occupied slots.
    pub fn member_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.member_count() == TEAM_SIZE
    }

    /// Resolve the occupied slots to their type combinations.
    ///
    /// Members whose typing cannot be resolved are omitted from the
    /// profile, matching how the UI drops Pokemon whose catalog fetch
    /// failed rather than aborting the whole analysis.
    pub fn type_profile(&self, provider: &impl PokemonDataProvider) -> Vec<Vec<PokemonType>> {
        self.slots
            .iter()
            .flatten()
            .filter_map(|id| provider.pokemon_types(*id).ok())
            .collect()
    }

    /// Resolve the team through `provider` and analyze its type matchups.
    pub fn analyze(&self, provider: &impl PokemonDataProvider) -> TeamTypeAnalysis {
        analyze_team(&self.type_profile(provider))
    }
}
