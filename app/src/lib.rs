//! Console pokedex browser over the Dexter catalog.
//!
//! The binary wires three small pieces around the catalog store: a local
//! credential gate, a route table mirroring the browser's paths, and pure
//! text views over the catalog state. All state management lives in
//! `dexter-catalog`; this crate only translates console input into actions
//! and state into text.

pub mod auth;
pub mod route;
pub mod ui;

// Re-export commonly used types
pub use route::Route;
