//! # Linguee API Library
//!
//! Fetches Linguee dictionary pages and turns their markup into typed records:
//! lemmas, translations, usage examples, external sources and autocompletions.
//!
//! ## Modules
//!
//! - `core` - orchestrator errors, correction policy, terminal helpers
//! - `client` - retrieval orchestrator with the bounded correction-redirect loop
//! - `network` - fetcher and the composable cache layers
//! - `parsers` - DOM helpers, schema interpreter, page schemas
//! - `models` - typed records produced by the parsers
//! - `utils` - supported languages and URL construction
//! - `env` - typed environment-variable configuration
//! - `web` - HTTP transport (optional)

pub mod client;
pub mod core;
pub mod env;
pub mod models;
pub mod network;
pub mod parsers;
pub mod utils;
#[cfg(feature = "web")]
pub mod web;

// Re-export commonly used items for convenience
pub use client::Client;
pub use crate::core::*;
pub use models::*;
pub use network::*;
pub use parsers::*;
pub use utils::*;
