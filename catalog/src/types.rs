//! Domain types for the pokedex catalog.
//!
//! The state is two async resource slots plus a selection. The listing slot
//! holds the first page of collection entries; the details slot holds one
//! decoded pokemon record. The selection is independent of both slots and
//! survives any fetch.

use chrono::{DateTime, Utc};
use dexter_core::loadable::{Loadable, RequestToken};
use dexter_macros::Action;
use dexter_pokeapi::{NamedResource, Pokemon};

/// State of the catalog browser
#[derive(Clone, Debug, Default)]
pub struct CatalogState {
    /// Collection listing slot
    pub list: Loadable<Vec<NamedResource>>,
    /// Single pokemon detail slot
    pub details: Loadable<Pokemon>,
    /// Currently selected listing entry, if any
    pub selected: Option<NamedResource>,
    /// When the listing last loaded successfully
    pub list_refreshed_at: Option<DateTime<Utc>>,
}

impl CatalogState {
    /// Creates a new empty catalog state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True while a listing fetch is in flight
    #[must_use]
    pub fn is_list_loading(&self) -> bool {
        self.list.is_pending()
    }

    /// The listing failure message, if the most recent fetch failed
    #[must_use]
    pub fn list_error(&self) -> Option<&str> {
        self.list.error()
    }

    /// Listing entries: the fulfilled page, or the stale page kept while a
    /// refresh is in flight. Empty when nothing has loaded.
    #[must_use]
    pub fn list_entries(&self) -> &[NamedResource] {
        self.list.retained().map_or(&[], Vec::as_slice)
    }

    /// True while a detail fetch is in flight
    #[must_use]
    pub fn is_details_loading(&self) -> bool {
        self.details.is_pending()
    }

    /// The detail failure message, if the most recent fetch failed
    #[must_use]
    pub fn details_error(&self) -> Option<&str> {
        self.details.error()
    }

    /// The loaded detail record
    #[must_use]
    pub fn current_details(&self) -> Option<&Pokemon> {
        self.details.data()
    }

    /// True when a listing entry is selected
    #[must_use]
    pub const fn has_selection(&self) -> bool {
        self.selected.is_some()
    }

    /// Name of the selected entry, if any
    #[must_use]
    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|entry| entry.name.as_str())
    }

    /// When the listing last loaded successfully
    #[must_use]
    pub const fn list_refreshed_at(&self) -> Option<DateTime<Utc>> {
        self.list_refreshed_at
    }
}

/// Actions driving the catalog
///
/// Intents arrive from the front end; completions are fed back by gateway
/// effects. Each completion carries the token of the fetch it settles, so
/// a slot can drop completions from fetches it has since superseded.
#[derive(Action, Clone, Debug, PartialEq)]
pub enum CatalogAction {
    // ========== Intents ==========
    /// Intent: Load the first page of the collection listing
    #[intent]
    FetchList,

    /// Intent: Load the detail record for one pokemon
    #[intent]
    FetchDetails {
        /// Name to look up; must be non-empty after trimming
        name: String,
    },

    /// Intent: Change the current selection
    #[intent]
    Select {
        /// Entry to select, or `None` to clear the selection
        target: Option<NamedResource>,
    },

    // ========== Completions ==========
    /// Completion: Listing fetch succeeded
    #[completion]
    ListLoaded {
        /// Token of the fetch being settled
        token: RequestToken,
        /// Entries of the first listing page
        entries: Vec<NamedResource>,
    },

    /// Completion: Listing fetch failed
    #[completion]
    ListFailed {
        /// Token of the fetch being settled
        token: RequestToken,
        /// Failure message, stored verbatim on the slot
        message: String,
    },

    /// Completion: Detail fetch succeeded
    #[completion]
    DetailsLoaded {
        /// Token of the fetch being settled
        token: RequestToken,
        /// The decoded pokemon record
        pokemon: Pokemon,
    },

    /// Completion: Detail fetch failed
    #[completion]
    DetailsFailed {
        /// Token of the fetch being settled
        token: RequestToken,
        /// Failure message, stored verbatim on the slot
        message: String,
    },
}
