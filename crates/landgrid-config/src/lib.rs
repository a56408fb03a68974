//! Configuration for the land model tools.
//!
//! Settings persist to disk as `config.ron`, unknown or missing fields fall
//! back to defaults, and command-line flags override what was loaded.

mod cli;
mod config;
mod error;

pub use cli::{CliArgs, Command};
pub use config::{CatalogConfig, Config, DebugConfig, ServerConfig, ViewConfig};
pub use error::ConfigError;
