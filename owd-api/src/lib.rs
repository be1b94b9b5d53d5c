//! Wire types and the async data loader for the oil well analytics service.
//!
//! This crate provides:
//! - `config`: base origin and the fixed endpoint table
//! - `models`: serde types for every JSON payload the service produces
//! - `fetch`: the `Fetch` transport seam (browser and native implementations)
//! - `loader`: one-shot GET + status check + JSON parse, with the
//!   log-and-recover failure path shared by all read-only panels

pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod models;
mod numeric;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{ApiConfig, Endpoint};
pub use error::{LoadError, TransportError};
pub use fetch::{Fetch, RawResponse};
