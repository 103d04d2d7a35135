//! # PokeAPI Client
//!
//! Rust client library for the [PokeAPI](https://pokeapi.co) REST service,
//! covering the pokemon listing and single pokemon lookups used by the
//! Dexter catalog.
//!
//! ## Example
//!
//! ```no_run
//! use dexter_pokeapi::PokeApiClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create a client against the public service
//!     let client = PokeApiClient::new();
//!
//!     // Fetch the first page of the listing
//!     let page = client.list_pokemon(20).await?;
//!     println!("{} pokemon known, {} on this page", page.count, page.results.len());
//!
//!     // Fetch one pokemon by name
//!     let pikachu = client.get_pokemon("pikachu").await?;
//!     println!("#{} {}", pikachu.id, pikachu.name);
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - Paged pokemon listing with name and URL entries
//! - Full pokemon records (sprites, types, abilities, base stats)
//! - Distinguishes unknown names from transport and service failures
//! - Type-safe wire records that tolerate fields this crate does not read

pub mod client;
pub mod error;
pub mod types;

// Re-export main types for convenience
pub use client::{PokeApiClient, DEFAULT_BASE_URL};
pub use error::PokeApiError;
pub use types::{AbilitySlot, NamedResource, Pokemon, PokemonPage, Sprites, StatSlot, TypeSlot};
