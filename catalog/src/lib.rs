//! Pokedex catalog feature built on the Dexter architecture.
//!
//! The catalog tracks two asynchronously fetched resources, the collection
//! listing and a single pokemon's detail record, plus the user's current
//! selection. It demonstrates:
//!
//! - Async resource slots with stale-while-revalidate (`Loadable`)
//! - Request tokens dropping stale completions when fetches overlap
//! - A gateway environment producing exactly one completion per fetch
//! - Derived accessors a rendering layer can consume directly
//! - Testing with `ReducerTest` and a store driven by a stub environment
//!
//! # Quick Start
//!
//! ```no_run
//! use dexter_catalog::{CatalogAction, CatalogReducer, CatalogState, LiveCatalogEnvironment};
//! use dexter_runtime::Store;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create environment and store
//! let env = LiveCatalogEnvironment::new();
//! let store = Store::new(CatalogState::new(), CatalogReducer::new(), env);
//!
//! // Load the collection listing
//! let mut handle = store.send(CatalogAction::FetchList).await?;
//! handle.wait().await;
//!
//! // Read state
//! let names = store
//!     .state(|s| s.list_entries().iter().map(|e| e.name.clone()).collect::<Vec<_>>())
//!     .await;
//! println!("Loaded {} pokemon", names.len());
//! # Ok(())
//! # }
//! ```

pub mod environment;
pub mod reducer;
pub mod types;

// Re-export commonly used types
pub use environment::{CatalogEnvironment, LiveCatalogEnvironment, DEFAULT_PAGE_LIMIT};
pub use reducer::CatalogReducer;
pub use types::{CatalogAction, CatalogState};
