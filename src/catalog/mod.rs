//! Catalog gateway: where valid names and their attributes come from.
//!
//! The game engine consumes this contract and nothing else about the outside
//! world. The production implementation talks to PokeAPI; the in-memory
//! implementation backs offline play and the engine's tests.

mod memory;
mod pokeapi;
mod types;

pub use memory::{StaticCatalog, KANTO};
pub use pokeapi::{PokeApiClient, PokeApiConfig};
pub use types::Entry;

use async_trait::async_trait;
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Errors from catalog lookups.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// HTTP request failed (network, timeout, TLS, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Entry not found (404).
    #[error("entry not found: {0}")]
    NotFound(String),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a response body.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// Catalog backend is unavailable.
    #[error("catalog unavailable: {0}")]
    Unavailable(String),
}

/// Asynchronous, fallible source of valid names and per-name attributes.
///
/// `list_names` failures block the game in its loading state (manual retry
/// only); `get_details` failures are tolerated by substituting
/// [`Entry::placeholder`] at the call site.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Map of normalized (uppercase) name to an opaque lookup handle.
    async fn list_names(&self) -> Result<FxHashMap<String, String>, CatalogError>;

    /// Attribute bundle for one entry, by name (any case).
    async fn get_details(&self, name: &str) -> Result<Entry, CatalogError>;
}
