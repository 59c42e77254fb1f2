//! Thin `PokeAPI` client over `reqwest`.
//!
//! Every call is a GET that must answer with a success status and a JSON
//! body. Transport failures, error statuses, and decode failures each map
//! to their own [`FetchError`] variant so callers can log them precisely.

use std::time::Duration;

use pokedex_core::config::ApiConfig;
use pokedex_types::{ApiListing, ApiPokemon, ApiSpecies, EntryId, EntryReference};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;

/// HTTP client bound to one `PokeAPI` base URL.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl PokeApiClient {
    /// Build a client from the `api` configuration section.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Client`] if the TLS backend cannot be set up.
    pub fn new(config: &ApiConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// The base URL with any trailing slash removed.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the catalog listing capped at `limit` entries.
    pub fn listing_url(&self, limit: u32) -> String {
        format!("{}/pokemon?limit={limit}", self.base_url)
    }

    /// URL of the primary record for `id`.
    pub fn entry_url(&self, id: EntryId) -> String {
        format!("{}/pokemon/{id}", self.base_url)
    }

    /// URL of the species record for `id`.
    pub fn species_url(&self, id: EntryId) -> String {
        format!("{}/pokemon-species/{id}", self.base_url)
    }

    /// GET `url` and decode its JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Http`], [`FetchError::Status`], or
    /// [`FetchError::Decode`] depending on where the request failed.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Http {
                url: url.to_owned(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|e| FetchError::Decode {
            url: url.to_owned(),
            message: e.to_string(),
        })
    }

    /// Fetch the catalog listing: up to `limit` name/URL references.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the listing request.
    pub async fn fetch_listing(&self, limit: u32) -> Result<Vec<EntryReference>, FetchError> {
        let listing: ApiListing = self.get_json(&self.listing_url(limit)).await?;
        debug!(
            available = listing.count,
            returned = listing.results.len(),
            "catalog listing received"
        );
        Ok(listing.results)
    }

    /// Fetch a primary record from its resource URL.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the request.
    pub async fn fetch_pokemon(&self, url: &str) -> Result<ApiPokemon, FetchError> {
        self.get_json(url).await
    }

    /// Fetch the species record for `id`.
    ///
    /// # Errors
    ///
    /// Propagates any failure of the request.
    pub async fn fetch_species(&self, id: EntryId) -> Result<ApiSpecies, FetchError> {
        self.get_json(&self.species_url(id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base_url: &str) -> Option<PokeApiClient> {
        let config = ApiConfig {
            base_url: base_url.to_owned(),
            ..ApiConfig::default()
        };
        PokeApiClient::new(&config).ok()
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let Some(client) = client("https://pokeapi.co/api/v2/") else {
            return;
        };
        assert_eq!(client.base_url(), "https://pokeapi.co/api/v2");
        assert_eq!(
            client.listing_url(2000),
            "https://pokeapi.co/api/v2/pokemon?limit=2000"
        );
    }

    #[test]
    fn resource_urls_use_decimal_ids() {
        let Some(client) = client("http://localhost:9000") else {
            return;
        };
        assert_eq!(client.entry_url(EntryId(25)), "http://localhost:9000/pokemon/25");
        assert_eq!(
            client.species_url(EntryId(25)),
            "http://localhost:9000/pokemon-species/25"
        );
    }
}
