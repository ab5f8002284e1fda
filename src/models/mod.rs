//! PokeAPI response models
//!
//! Deserialization targets for the JSON bodies returned by the API. Only the
//! fields the REPL uses are modelled; serde ignores the rest.

pub mod location_area;
pub mod pokemon;

// Re-export commonly used types
pub use location_area::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
