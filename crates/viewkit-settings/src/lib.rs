//! ViewKit Settings Crate
//!
//! Loads, validates and saves the viewport controller configuration.
//! Supports JSON and TOML files stored in the platform config directory.

pub mod config;
pub mod error;

pub use config::{AnimationSettings, Config, EventSettings, ViewportSettings, CONFIG_FILE_NAME};
pub use error::{ConfigError, ConfigResult, SettingsError, SettingsResult};
