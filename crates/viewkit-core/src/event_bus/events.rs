//! Event type definitions for the event bus.
//!
//! Events are cloneable and serializable so that subscribers can log,
//! forward or replay them.

use serde::{Deserialize, Serialize};

use crate::data::{SurfaceSize, TransformState};

/// Root event enum for all application events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum AppEvent {
    /// Viewport transform and animation events
    Viewport(ViewportEvent),
    /// Settings and configuration
    Settings(SettingsEvent),
}

impl AppEvent {
    /// Get the category of this event
    pub fn category(&self) -> EventCategory {
        match self {
            AppEvent::Viewport(_) => EventCategory::Viewport,
            AppEvent::Settings(_) => EventCategory::Settings,
        }
    }

    /// Get a short description of this event for logging
    pub fn description(&self) -> String {
        match self {
            AppEvent::Viewport(e) => e.description(),
            AppEvent::Settings(e) => e.description(),
        }
    }

    /// The committed transform carried by this event, if any
    pub fn transform(&self) -> Option<TransformState> {
        match self {
            AppEvent::Viewport(ViewportEvent::TransformChanged { transform })
            | AppEvent::Viewport(ViewportEvent::Initialized { transform, .. }) => Some(*transform),
            _ => None,
        }
    }
}

/// Event category for filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Viewport transform events.
    Viewport,
    /// Settings and configuration events.
    Settings,
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventCategory::Viewport => write!(f, "Viewport"),
            EventCategory::Settings => write!(f, "Settings"),
        }
    }
}

/// Viewport events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum ViewportEvent {
    /// The controller was (re-)initialized for a surface.
    Initialized {
        /// New surface dimensions.
        surface: SurfaceSize,
        /// Transform restored by the initialization.
        transform: TransformState,
    },
    /// A transform was committed, either directly or by an animation frame.
    TransformChanged {
        /// Snapshot of the committed transform.
        transform: TransformState,
    },
    /// An animation began moving towards a target.
    AnimationStarted {
        /// Transform the animation is heading for.
        target: TransformState,
    },
    /// An animation reached its target.
    AnimationSettled {
        /// Number of frames the animation took.
        frames: u32,
    },
    /// An animation was abandoned before reaching its target.
    AnimationCancelled,
}

impl ViewportEvent {
    fn description(&self) -> String {
        match self {
            ViewportEvent::Initialized { surface, .. } => {
                format!("Viewport initialized at {}", surface)
            }
            ViewportEvent::TransformChanged { transform } => {
                format!("Transform: {}", transform)
            }
            ViewportEvent::AnimationStarted { target } => {
                format!("Animating to {}", target)
            }
            ViewportEvent::AnimationSettled { frames } => {
                format!("Animation settled after {} frames", frames)
            }
            ViewportEvent::AnimationCancelled => "Animation cancelled".to_string(),
        }
    }
}

/// Settings-related events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum SettingsEvent {
    /// Settings loaded.
    Loaded {
        /// Source file, if the settings came from disk.
        path: Option<String>,
    },
    /// Settings saved.
    Saved {
        /// Destination file.
        path: String,
    },
}

impl SettingsEvent {
    fn description(&self) -> String {
        match self {
            SettingsEvent::Loaded { path: Some(path) } => format!("Settings loaded from {}", path),
            SettingsEvent::Loaded { path: None } => "Default settings loaded".to_string(),
            SettingsEvent::Saved { path } => format!("Settings saved to {}", path),
        }
    }
}
