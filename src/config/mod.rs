//! Configuration loading.
//!
//! Settings live in a TOML file; every section is optional and falls back to
//! defaults suitable for a local development backend.

mod loader;
mod types;

pub use loader::{ConfigError, API_KEY_ENV};
pub use types::{ApiConfig, Config, CoordinatorConfig, IdentityConfig};
