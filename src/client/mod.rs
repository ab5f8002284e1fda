//! PokeAPI Client Module
//!
//! Fetches location areas and pokemon, caching raw response bodies by URL.

mod pokeapi;

pub use pokeapi::PokeClient;
