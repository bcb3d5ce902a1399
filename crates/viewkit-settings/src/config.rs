//! Configuration for the viewport controller.
//!
//! Configuration is organized into logical sections:
//! - Viewport limits (scale range, snapping, overscroll, default transform)
//! - Animation tuning (smoothing, convergence, frame interval)
//! - Event bus options (history, channel capacity)
//!
//! Files are JSON or TOML, chosen by extension. Missing fields fall back to
//! the defaults in [`viewkit_core::constants`].

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use viewkit_core::constants::{
    CONVERGENCE_THRESHOLD, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, FULL_TURN_DEG,
    MAX_SCALE, MIN_SCALE, OVERSCROLL_RATIO, SMOOTHING_FACTOR, SNAP_INCREMENT_DEG,
    SNAP_THRESHOLD_DEG, ZOOM_STEP,
};
use viewkit_core::{EventBusConfig, SurfaceSize, TransformState};

use crate::error::{ConfigError, ConfigResult, SettingsResult};

/// Name of the config file inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "viewkit.toml";

/// Viewport geometry and constraint settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportSettings {
    /// Surface width assumed until the host initializes the controller
    pub surface_width: f64,
    /// Surface height assumed until the host initializes the controller
    pub surface_height: f64,
    /// Smallest zoom magnitude
    pub min_scale: f64,
    /// Largest zoom magnitude
    pub max_scale: f64,
    /// Factor applied by one zoom-in / zoom-out step
    pub zoom_step: f64,
    /// Rotations within this many degrees of a snap angle are snapped
    pub snap_threshold_deg: f64,
    /// Spacing of snap angles in degrees
    pub snap_increment_deg: f64,
    /// Elastic overscroll as a fraction of the surface dimension
    pub overscroll_ratio: f64,
    /// Transform restored by initialize and reset
    pub default_transform: TransformState,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            surface_width: DEFAULT_SURFACE_WIDTH,
            surface_height: DEFAULT_SURFACE_HEIGHT,
            min_scale: MIN_SCALE,
            max_scale: MAX_SCALE,
            zoom_step: ZOOM_STEP,
            snap_threshold_deg: SNAP_THRESHOLD_DEG,
            snap_increment_deg: SNAP_INCREMENT_DEG,
            overscroll_ratio: OVERSCROLL_RATIO,
            default_transform: TransformState::IDENTITY,
        }
    }
}

impl ViewportSettings {
    /// The configured initial surface
    pub fn surface(&self) -> SurfaceSize {
        SurfaceSize::new(self.surface_width, self.surface_height)
    }

    fn validate(&self) -> ConfigResult<()> {
        if !self.surface().is_valid() {
            return Err(ConfigError::out_of_range(
                "viewport.surface",
                self.surface(),
            ));
        }

        let t = &self.default_transform;
        if ![t.x, t.y, t.scale, t.rotation].iter().all(|v| v.is_finite()) || t.scale == 0.0 {
            return Err(ConfigError::out_of_range("viewport.default_transform", t));
        }

        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(ConfigError::out_of_range("viewport.min_scale", self.min_scale));
        }

        if !(self.max_scale.is_finite() && self.max_scale >= self.min_scale) {
            return Err(ConfigError::out_of_range("viewport.max_scale", self.max_scale));
        }

        if !(self.zoom_step.is_finite() && self.zoom_step > 1.0) {
            return Err(ConfigError::out_of_range("viewport.zoom_step", self.zoom_step));
        }

        if !(self.snap_increment_deg > 0.0 && self.snap_increment_deg <= FULL_TURN_DEG) {
            return Err(ConfigError::out_of_range(
                "viewport.snap_increment_deg",
                self.snap_increment_deg,
            ));
        }

        // Snap windows must not overlap, otherwise the first-match rule decides.
        if !(self.snap_threshold_deg >= 0.0
            && self.snap_threshold_deg < self.snap_increment_deg / 2.0)
        {
            return Err(ConfigError::out_of_range(
                "viewport.snap_threshold_deg",
                self.snap_threshold_deg,
            ));
        }

        if !(self.overscroll_ratio.is_finite() && self.overscroll_ratio >= 0.0) {
            return Err(ConfigError::out_of_range(
                "viewport.overscroll_ratio",
                self.overscroll_ratio,
            ));
        }

        Ok(())
    }
}

/// Animation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Fraction of the remaining distance covered per frame
    pub smoothing_factor: f64,
    /// Per-component delta below which the animation snaps to its target
    pub convergence_threshold: f64,
    /// Frame interval used by hosts without a display-synced clock
    pub frame_interval_ms: u64,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            smoothing_factor: SMOOTHING_FACTOR,
            convergence_threshold: CONVERGENCE_THRESHOLD,
            frame_interval_ms: 16,
        }
    }
}

impl AnimationSettings {
    /// Frame interval as a duration
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }

    fn validate(&self) -> ConfigResult<()> {
        if !(self.smoothing_factor > 0.0 && self.smoothing_factor <= 1.0) {
            return Err(ConfigError::out_of_range(
                "animation.smoothing_factor",
                self.smoothing_factor,
            ));
        }

        if !(self.convergence_threshold.is_finite() && self.convergence_threshold > 0.0) {
            return Err(ConfigError::out_of_range(
                "animation.convergence_threshold",
                self.convergence_threshold,
            ));
        }

        if self.frame_interval_ms == 0 {
            return Err(ConfigError::out_of_range("animation.frame_interval_ms", 0));
        }

        Ok(())
    }
}

/// Event bus options
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EventSettings {
    /// Keep a bounded history of published events
    pub enable_history: bool,
    /// Maximum number of retained events
    pub max_history_size: usize,
    /// Broadcast channel capacity for async receivers
    pub channel_capacity: usize,
}

impl Default for EventSettings {
    fn default() -> Self {
        let bus = EventBusConfig::default();
        Self {
            enable_history: bus.enable_history,
            max_history_size: bus.max_history_size,
            channel_capacity: bus.channel_capacity,
        }
    }
}

impl EventSettings {
    /// Build the event bus configuration these settings describe
    pub fn bus_config(&self) -> EventBusConfig {
        EventBusConfig {
            channel_capacity: self.channel_capacity,
            enable_history: self.enable_history,
            max_history_size: self.max_history_size,
            ..EventBusConfig::default()
        }
    }

    fn validate(&self) -> ConfigResult<()> {
        if self.channel_capacity == 0 {
            return Err(ConfigError::out_of_range("events.channel_capacity", 0));
        }
        Ok(())
    }
}

/// Complete application configuration
///
/// Aggregates all settings sections and provides file I/O operations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Viewport limits and defaults
    pub viewport: ViewportSettings,
    /// Animation tuning
    pub animation: AnimationSettings,
    /// Event bus options
    pub events: EventSettings,
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            ConfigFormat::Json => serde_json::from_str(&content)?,
            ConfigFormat::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        tracing::info!("Loaded settings from {}", path.display());
        Ok(config)
    }

    /// Load config from `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> SettingsResult<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            tracing::debug!("No settings at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;
        let format = ConfigFormat::from_path(path)?;

        let content = match format {
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
            ConfigFormat::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        tracing::info!("Saved settings to {}", path.display());
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        self.viewport.validate()?;
        self.animation.validate()?;
        self.events.validate()?;
        Ok(())
    }

    /// Default location of the config file in the platform config directory
    pub fn default_path() -> ConfigResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("viewkit").join(CONFIG_FILE_NAME))
            .ok_or_else(|| ConfigError::UnsupportedPlatform(std::env::consts::OS.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    fn from_path(path: &Path) -> ConfigResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
