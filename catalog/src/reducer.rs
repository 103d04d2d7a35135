//! Reducer logic for the pokedex catalog.
//!
//! The reducer is pure: it advances the resource slots, records the
//! selection, and describes fetches as effects for the runtime to execute.
//! Completions carry the token of the fetch they settle, so a slot that
//! has since issued a newer fetch silently drops the stale arrival.

use crate::environment::CatalogEnvironment;
use crate::types::{CatalogAction, CatalogState};
use dexter_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};

/// Reducer for the catalog
///
/// Handles the browsing loop:
/// 1. An intent begins a fetch on its slot and emits one gateway effect
/// 2. The gateway settles with exactly one completion action
/// 3. The completion settles the slot, unless a newer fetch superseded it
#[derive(Clone)]
pub struct CatalogReducer<E> {
    _phantom: std::marker::PhantomData<E>,
}

impl<E> CatalogReducer<E> {
    /// Create a new catalog reducer
    #[must_use]
    pub const fn new() -> Self {
        Self {
            _phantom: std::marker::PhantomData,
        }
    }
}

impl<E> Default for CatalogReducer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Reducer for CatalogReducer<E>
where
    E: CatalogEnvironment,
{
    type State = CatalogState;
    type Action = CatalogAction;
    type Environment = E;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            // ========== Intents ==========
            CatalogAction::FetchList => {
                let token = state.list.begin();
                tracing::debug!(%token, "loading collection listing");
                smallvec![env.fetch_list(token)]
            }

            CatalogAction::FetchDetails { name } => {
                let trimmed = name.trim();
                let token = state.details.begin();

                if trimmed.is_empty() {
                    // Rejected locally; the gateway never sees an empty name.
                    state.details.fail(token, "Pokemon name must not be empty");
                    return SmallVec::new();
                }

                tracing::debug!(%token, name = trimmed, "loading pokemon details");
                smallvec![env.fetch_details(token, trimmed.to_string())]
            }

            CatalogAction::Select { target } => {
                // Stored verbatim. The entry is not checked against the
                // loaded listing, and no fetch ever clears it.
                state.selected = target;
                SmallVec::new()
            }

            // ========== Completions ==========
            CatalogAction::ListLoaded { token, entries } => {
                if state.list.succeed(token, entries) {
                    state.list_refreshed_at = Some(env.clock().now());
                } else {
                    tracing::debug!(%token, "dropping stale listing result");
                }
                SmallVec::new()
            }

            CatalogAction::ListFailed { token, message } => {
                if !state.list.fail(token, message) {
                    tracing::debug!(%token, "dropping stale listing failure");
                }
                SmallVec::new()
            }

            CatalogAction::DetailsLoaded { token, pokemon } => {
                if !state.details.succeed(token, pokemon) {
                    tracing::debug!(%token, "dropping stale detail result");
                }
                SmallVec::new()
            }

            CatalogAction::DetailsFailed { token, message } => {
                if !state.details.fail(token, message) {
                    tracing::debug!(%token, "dropping stale detail failure");
                }
                SmallVec::new()
            }
        }
    }
}
