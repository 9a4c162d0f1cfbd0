//! Startup-time configuration: TOML file plus environment override.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, Config};
