//! Location area models
//!
//! Bodies of `GET /location-area` and `GET /location-area/{name}`.

use serde::Deserialize;

/// A name plus the URL of the full resource.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the location area listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas across all pages
    pub count: u32,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A single location area and the pokemon that can be met there.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationAreaDetail {
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: EncounterPokemon,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EncounterPokemon {
    pub name: String,
}

impl LocationAreaDetail {
    /// Names of the encountered pokemon, in API order.
    pub fn pokemon_names(&self) -> Vec<String> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.clone())
            .collect()
    }
}
