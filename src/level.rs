//! Level data
//!
//! Levels come from `levels.json` as an ordered array. If that resource cannot
//! be used, a single built-in demo level is substituted so the game stays
//! playable.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Circular hit region in image-pixel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

impl Target {
    pub const fn new(x: f32, y: f32, radius: f32) -> Self {
        Self { x, y, radius }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// One puzzle: an image, where to click, and a hint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Level {
    /// Image URL or data URI
    pub image: String,
    pub target: Target,
    pub hint: String,
}

/// Why a level list could not be used
#[derive(Error, Debug)]
pub enum LoadError {
    /// Request failed before a response arrived.
    #[error("network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Body was not a JSON array of levels.
    #[error("malformed level data: {0}")]
    Parse(#[from] serde_json::Error),

    /// The list parsed but holds no levels.
    #[error("level list is empty")]
    Empty,

    /// A level has a target that can never be hit sensibly.
    #[error("level {index} has an invalid target: {reason}")]
    InvalidLevel { index: usize, reason: &'static str },
}

/// Result type for level loading.
pub type LoadResult<T> = Result<T, LoadError>;

const FALLBACK_IMAGE: &str = "data:image/svg+xml,%3Csvg width='400' height='300' xmlns='http://www.w3.org/2000/svg'%3E%3Crect width='400' height='300' fill='%23f0f0f0'/%3E%3Ccircle cx='150' cy='100' r='20' fill='%23ff4444'/%3E%3Ctext x='200' y='250' text-anchor='middle' font-size='16' fill='%23333'%3EDemo Level - Find the red circle!%3C/text%3E%3C/svg%3E";

/// The single demo level used when `levels.json` is unavailable
pub fn fallback_levels() -> Vec<Level> {
    vec![Level {
        image: FALLBACK_IMAGE.to_string(),
        target: Target::new(150.0, 100.0, 25.0),
        hint: "Find the red circle".to_string(),
    }]
}

/// Parse and validate a level list
pub fn parse_levels(json: &str) -> LoadResult<Vec<Level>> {
    let levels: Vec<Level> = serde_json::from_str(json)?;
    if levels.is_empty() {
        return Err(LoadError::Empty);
    }
    for (index, level) in levels.iter().enumerate() {
        validate(index, &level.target)?;
    }
    Ok(levels)
}

fn validate(index: usize, target: &Target) -> LoadResult<()> {
    if !target.x.is_finite() || !target.y.is_finite() {
        return Err(LoadError::InvalidLevel {
            index,
            reason: "non-finite center",
        });
    }
    if !(target.radius.is_finite() && target.radius > 0.0) {
        return Err(LoadError::InvalidLevel {
            index,
            reason: "radius must be positive",
        });
    }
    Ok(())
}

/// Use the loaded list, or log the failure and fall back to the demo level
pub fn levels_or_fallback(result: LoadResult<Vec<Level>>) -> Vec<Level> {
    match result {
        Ok(levels) => {
            log::info!("Levels loaded successfully! ({} levels)", levels.len());
            levels
        }
        Err(e) => {
            log::error!("Error loading levels: {}", e);
            fallback_levels()
        }
    }
}
