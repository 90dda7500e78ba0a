// Pokemon Team Builder Schema - Shared type definitions
// This crate contains the core type enumeration and the static
// type-effectiveness chart shared between the main pokemon-team-builder
// crate and any future data tooling.

// Re-export the main types
pub use pokemon_types::*;
pub use type_chart::*;

pub mod pokemon_types;
pub mod type_chart;
