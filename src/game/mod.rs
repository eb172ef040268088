//! Pure game logic
//!
//! Nothing in here touches the DOM or storage:
//! - Coordinate mapping and hit testing
//! - Completed/unlocked progress bookkeeping
//! - Which of the three screens is visible

pub mod hit;
pub mod progress;
pub mod screen;

pub use hit::{CanvasMetrics, DisplayRect, HitOutcome, hit_test, to_image_coords};
pub use progress::{CardStatus, LevelCard, Progress};
pub use screen::{Screen, ScreenRouter};
