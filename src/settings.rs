//! Player preferences
//!
//! Persisted separately from progress in LocalStorage.

use serde::{Deserialize, Serialize};

/// Game settings/preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Accessibility ===
    /// Reduced motion (no click ripples or sparkles)
    pub reduced_motion: bool,
}

impl Settings {
    /// Whether transient click/sparkle effects are shown
    pub fn effects_enabled(&self) -> bool {
        !self.reduced_motion
    }

    /// Flip reduced motion, returning the new value
    pub fn toggle_reduced_motion(&mut self) -> bool {
        self.reduced_motion = !self.reduced_motion;
        self.reduced_motion
    }
}
