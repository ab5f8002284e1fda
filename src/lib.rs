//! Pokedex - an interactive PokeAPI explorer
//!
//! Responses are cached in memory by request URL and expired by a background
//! sweep, so paging back and forth does not refetch.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repl;
pub mod tasks;

pub use cache::ExpiringCache;
pub use client::PokeClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
