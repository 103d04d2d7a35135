//! PokeAPI client implementation

use crate::{
    error::PokeApiError,
    types::{Pokemon, PokemonPage},
};
use reqwest::{Client, StatusCode};

/// Base URL of the public PokeAPI service
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// PokeAPI REST client
#[derive(Clone, Debug)]
pub struct PokeApiClient {
    client: Client,
    base_url: String,
}

impl Default for PokeApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl PokeApiClient {
    /// Create a client against the public PokeAPI service
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an explicit base URL
    ///
    /// Useful for pointing at a local mock server in tests.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of the pokemon listing
    ///
    /// Issues `GET {base}/pokemon?limit={limit}` and decodes the paging
    /// envelope. An empty listing decodes to a page with no results.
    ///
    /// # Errors
    ///
    /// Returns errors for network failures, API errors, or parsing failures
    pub async fn list_pokemon(&self, limit: u32) -> Result<PokemonPage, PokeApiError> {
        let response = self
            .client
            .get(format!("{}/pokemon", self.base_url))
            .query(&[("limit", limit)])
            .send()
            .await
            .map_err(|e| PokeApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<PokemonPage>()
                .await
                .map_err(|e| PokeApiError::ResponseParseFailed(e.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(PokeApiError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }

    /// Fetch the full record of a single pokemon by name
    ///
    /// Issues `GET {base}/pokemon/{name}`. The service also accepts a dex
    /// number in place of the name.
    ///
    /// # Errors
    ///
    /// Returns `PokeApiError::NotFound` when no pokemon exists under the
    /// name, and other errors for network, API, or parsing failures
    pub async fn get_pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        let response = self
            .client
            .get(format!("{}/pokemon/{name}", self.base_url))
            .send()
            .await
            .map_err(|e| PokeApiError::RequestFailed(e.to_string()))?;

        match response.status() {
            StatusCode::OK => response
                .json::<Pokemon>()
                .await
                .map_err(|e| PokeApiError::ResponseParseFailed(e.to_string())),
            StatusCode::NOT_FOUND => Err(PokeApiError::NotFound(name.to_string())),
            status => {
                let body = response.text().await.unwrap_or_default();
                Err(PokeApiError::Api {
                    status: status.as_u16(),
                    message: body,
                })
            }
        }
    }
}
