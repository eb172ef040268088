//! Click hit testing
//!
//! The canvas is sized to its image, but CSS may display it larger or smaller.
//! Clicks arrive in client (display) coordinates and must be scaled back into
//! image pixels before they are compared against a level's target.

use glam::Vec2;

use crate::level::Target;

/// Intrinsic canvas size (`canvas.width`/`canvas.height`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasMetrics {
    pub width: f32,
    pub height: f32,
}

/// Where the canvas is drawn on screen (`getBoundingClientRect()`)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl DisplayRect {
    fn is_usable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Result of testing one click against a target
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HitOutcome {
    Hit { distance: f32 },
    Miss { distance: f32 },
}

impl HitOutcome {
    pub fn is_hit(&self) -> bool {
        matches!(self, HitOutcome::Hit { .. })
    }

    pub fn distance(&self) -> f32 {
        match *self {
            HitOutcome::Hit { distance } | HitOutcome::Miss { distance } => distance,
        }
    }
}

/// Map a client-space click to image pixels.
///
/// Returns `None` while the canvas has no displayed area (hidden, or not laid
/// out yet), since no scale factor exists then.
pub fn to_image_coords(client: Vec2, canvas: CanvasMetrics, rect: DisplayRect) -> Option<Vec2> {
    if !rect.is_usable() {
        return None;
    }
    let scale = Vec2::new(canvas.width / rect.width, canvas.height / rect.height);
    Some((client - Vec2::new(rect.left, rect.top)) * scale)
}

impl Target {
    /// Boundary-inclusive containment test
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        point.distance(self.center()) <= self.radius
    }
}

/// Test an image-space point against a target
pub fn hit_test(target: &Target, point: Vec2) -> HitOutcome {
    let distance = point.distance(target.center());
    if distance <= target.radius {
        HitOutcome::Hit { distance }
    } else {
        HitOutcome::Miss { distance }
    }
}
