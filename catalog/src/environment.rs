//! Environment seam between the catalog reducer and the outside world.
//!
//! The reducer never performs I/O. It asks the environment for effects,
//! and every effect settles with exactly one completion action carrying
//! the request token of the fetch it belongs to. Gateway errors never
//! escape the effect: they are converted to their display string and fed
//! back as a failure completion.

use crate::types::CatalogAction;
use dexter_core::{
    effect::Effect,
    environment::{Clock, SystemClock},
    loadable::RequestToken,
};
use dexter_pokeapi::PokeApiClient;
use std::sync::Arc;

/// Number of entries requested from the listing endpoint
pub const DEFAULT_PAGE_LIMIT: u32 = 20;

/// Dependencies of the catalog reducer
pub trait CatalogEnvironment: Send + Sync {
    /// Wall clock for refresh timestamps
    fn clock(&self) -> &dyn Clock;

    /// One fetch of the first listing page
    ///
    /// Settles with `ListLoaded` or `ListFailed` carrying `token`.
    fn fetch_list(&self, token: RequestToken) -> Effect<CatalogAction>;

    /// One fetch of a single pokemon record
    ///
    /// Settles with `DetailsLoaded` or `DetailsFailed` carrying `token`.
    fn fetch_details(&self, token: RequestToken, name: String) -> Effect<CatalogAction>;
}

/// Production environment backed by the real PokeAPI client
#[derive(Clone)]
pub struct LiveCatalogEnvironment {
    client: Arc<PokeApiClient>,
    clock: Arc<dyn Clock>,
    page_limit: u32,
}

impl LiveCatalogEnvironment {
    /// Create an environment against the public PokeAPI service
    #[must_use]
    pub fn new() -> Self {
        Self::with_client(PokeApiClient::new())
    }

    /// Create an environment over an explicit client
    #[must_use]
    pub fn with_client(client: PokeApiClient) -> Self {
        Self {
            client: Arc::new(client),
            clock: Arc::new(SystemClock),
            page_limit: DEFAULT_PAGE_LIMIT,
        }
    }

    /// Replace the clock
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Override how many entries one listing fetch requests
    #[must_use]
    pub const fn with_page_limit(mut self, page_limit: u32) -> Self {
        self.page_limit = page_limit;
        self
    }
}

impl Default for LiveCatalogEnvironment {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogEnvironment for LiveCatalogEnvironment {
    fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }

    fn fetch_list(&self, token: RequestToken) -> Effect<CatalogAction> {
        let client = self.client.clone();
        let limit = self.page_limit;

        Effect::Future(Box::pin(async move {
            match client.list_pokemon(limit).await {
                Ok(page) => {
                    tracing::debug!(%token, entries = page.results.len(), "listing fetched");
                    Some(CatalogAction::ListLoaded {
                        token,
                        entries: page.results,
                    })
                }
                Err(e) => {
                    tracing::warn!(%token, error = %e, "listing fetch failed");
                    Some(CatalogAction::ListFailed {
                        token,
                        message: e.to_string(),
                    })
                }
            }
        }))
    }

    fn fetch_details(&self, token: RequestToken, name: String) -> Effect<CatalogAction> {
        let client = self.client.clone();

        Effect::Future(Box::pin(async move {
            match client.get_pokemon(&name).await {
                Ok(pokemon) => {
                    tracing::debug!(%token, name = %pokemon.name, "details fetched");
                    Some(CatalogAction::DetailsLoaded { token, pokemon })
                }
                Err(e) => {
                    tracing::warn!(%token, %name, error = %e, "detail fetch failed");
                    Some(CatalogAction::DetailsFailed {
                        token,
                        message: e.to_string(),
                    })
                }
            }
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_environment_defaults_to_first_page() {
        let env = LiveCatalogEnvironment::new();
        assert_eq!(env.page_limit, DEFAULT_PAGE_LIMIT);
    }

    #[test]
    fn page_limit_can_be_overridden() {
        let env = LiveCatalogEnvironment::new().with_page_limit(50);
        assert_eq!(env.page_limit, 50);
    }
}
