//! Configuration for the extractor
//!
//! Provides types and loading for the optional `extract.toml` file.

pub mod loader;
pub mod schema;

pub use loader::{load_config, merge_cli_overrides, CliOverrides, ConfigError};
pub use schema::*;
