//! PokeAPI client.
//!
//! PokeAPI (pokeapi.co) is free and unauthenticated. Two requests are needed
//! per details lookup: `/pokemon/{name}` for types and sprites, then the
//! species URL it points at for the generation label.

use std::time::Duration;

use reqwest::Client;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::types::Entry;
use super::CatalogError;

/// How many entries to page in for the valid-name list.
const DEFAULT_LIMIT: u32 = 1000;

/// PokeAPI client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PokeApiConfig {
    /// Base URL (default: <https://pokeapi.co/api/v2>).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Maximum number of names to list (default: 1000).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// PokeAPI client.
pub struct PokeApiClient {
    client: Client,
    base_url: String,
    limit: u32,
}

impl PokeApiClient {
    /// Create a new client with a bounded request timeout.
    ///
    /// # Errors
    /// Returns `CatalogError::Http` if the underlying HTTP client cannot be
    /// built.
    pub fn new(config: PokeApiConfig) -> Result<Self, CatalogError> {
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        let base_url = config
            .base_url
            .unwrap_or_else(|| "https://pokeapi.co/api/v2".to_string());

        Ok(Self {
            client,
            base_url,
            limit: config.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }

    /// Fetch the valid-name page and build the normalized lookup map.
    pub(crate) async fn fetch_names(&self) -> Result<FxHashMap<String, String>, CatalogError> {
        let url = format!("{}/pokemon", self.base_url);

        debug!("PokeAPI list names: limit={}", self.limit);

        let response = self
            .client
            .get(&url)
            .query(&[("limit", self.limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let page: NamePage = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("failed to parse name list: {e}")))?;

        let mut names = FxHashMap::default();
        for resource in page.results {
            names.insert(resource.name.to_uppercase(), resource.url);
        }

        Ok(names)
    }

    /// Fetch one entry's attribute bundle.
    pub(crate) async fn fetch_details(&self, name: &str) -> Result<Entry, CatalogError> {
        let url = format!("{}/pokemon/{}", self.base_url, name.to_lowercase());

        debug!("PokeAPI get details: name={}", name);

        let response = self.client.get(&url).send().await?;

        let status = response.status();
        if status == 404 {
            return Err(CatalogError::NotFound(name.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let pokemon: PokemonResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("failed to parse pokemon response: {e}")))?;

        // Second hop: the species record carries the generation.
        let species: SpeciesResponse = self
            .client
            .get(&pokemon.species.url)
            .send()
            .await?
            .json()
            .await
            .map_err(|e| CatalogError::Parse(format!("failed to parse species response: {e}")))?;

        Ok(build_entry(name, pokemon, &species))
    }
}

#[async_trait::async_trait]
impl super::Catalog for PokeApiClient {
    async fn list_names(&self) -> Result<FxHashMap<String, String>, CatalogError> {
        self.fetch_names().await
    }

    async fn get_details(&self, name: &str) -> Result<Entry, CatalogError> {
        self.fetch_details(name).await
    }
}

fn build_entry(name: &str, pokemon: PokemonResponse, species: &SpeciesResponse) -> Entry {
    Entry {
        name: name.to_uppercase(),
        types: pokemon.types.into_iter().map(|t| t.kind.name).collect(),
        // "generation-i" -> "GENERATION I"
        generation: species.generation.name.replace('-', " ").to_uppercase(),
        sprite: pokemon.sprites.front_default,
        official_art: pokemon
            .sprites
            .other
            .and_then(|o| o.official_artwork)
            .and_then(|a| a.front_default),
    }
}

// ============================================================================
// Wire DTOs
// ============================================================================

#[derive(Debug, Deserialize)]
struct NamedResource {
    name: String,
    url: String,
}

#[derive(Debug, Deserialize)]
struct NamePage {
    results: Vec<NamedResource>,
}

#[derive(Debug, Deserialize)]
struct PokemonResponse {
    types: Vec<TypeSlot>,
    species: NamedResource,
    sprites: Sprites,
}

#[derive(Debug, Deserialize)]
struct TypeSlot {
    #[serde(rename = "type")]
    kind: NamedResource,
}

#[derive(Debug, Deserialize)]
struct Sprites {
    front_default: Option<String>,
    #[serde(default)]
    other: Option<OtherSprites>,
}

#[derive(Debug, Deserialize)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Option<ArtworkSprites>,
}

#[derive(Debug, Deserialize)]
struct ArtworkSprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SpeciesResponse {
    generation: NamedResource,
}
