//! gpacalc-store: Storage backends and configuration.
//!
//! Provides the file-backed [`KeyValueStore`](gpacalc_core::KeyValueStore)
//! used by the CLI and the `gpacalc.toml` configuration loader.

pub mod config;
pub mod file;

pub use config::{load_config_from, GpacalcConfig};
pub use file::FileStore;
