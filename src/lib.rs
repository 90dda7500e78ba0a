// In: src/lib.rs

//! Pokemon Team Builder Core
//!
//! The type-coverage analysis engine behind a team-building application:
//! pure computations over the fixed 18-type effectiveness chart, plus the
//! in-memory team model and the data-provider seam the presentation layer
//! plugs into. No I/O, no shared mutable state; every analysis is a fresh
//! snapshot derived from its inputs.

// --- MODULE DECLARATIONS ---
// This declares the module hierarchy for the crate.
pub mod analysis;
pub mod effectiveness;
pub mod errors;
pub mod generation;
pub mod provider;
pub mod team;

// --- PUBLIC API RE-EXPORTS ---
// This section defines the public-facing API of the `pokemon-team-builder`
// crate, making it easy for users to import the most important types directly.

// --- From the `schema` crate ---
// Re-export the core data definitions and the static chart lookup.
pub use schema::{effectiveness_of, PokemonType, TypeEffectiveness};

// --- From this crate's modules (`src/`) ---

// Core analysis functions and result record.
pub use analysis::{analyze_team, TeamTypeAnalysis};
pub use effectiveness::calculate_effectiveness;

// Team model and collaborator seams.
pub use provider::{PokemonDataProvider, StaticPokemonProvider, MAX_POKEMON_ID, MIN_POKEMON_ID};
pub use team::{Team, TEAM_SIZE};

// Catalog metadata.
pub use generation::Generation;

// Crate-specific error and result types.
pub use errors::{
    DataProviderError, DataProviderResult, TeamBuilderError, TeamBuilderResult, TeamError,
    TeamResult,
};
