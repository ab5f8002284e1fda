//! Error types for the Pokedex client and REPL
//!
//! Provides unified error handling using thiserror. The cache itself never
//! fails; these errors come from the network, decoding and user input.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the Pokedex.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Transport-level failure talking to the API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("Unexpected status {status} from {url}")]
    UnexpectedStatus { url: String, status: u16 },

    /// Response body was not the JSON we expected
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No pokemon with this name exists
    #[error("pokemon not found: {0}")]
    PokemonNotFound(String),

    /// No location area with this name exists
    #[error("location area not found: {0}")]
    LocationAreaNotFound(String),

    /// The configured API root cannot carry resource paths
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// A command was invoked without its required argument
    #[error("expected one argument, {0}")]
    MissingArgument(&'static str),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PokedexError {
    /// Returns true if the API reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PokedexError::PokemonNotFound(_)
                | PokedexError::LocationAreaNotFound(_)
                | PokedexError::UnexpectedStatus { status: 404, .. }
        )
    }
}

// == Result Type Alias ==
/// Convenience Result type for the Pokedex.
pub type Result<T> = std::result::Result<T, PokedexError>;
