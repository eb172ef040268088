//! Rendering interface
//!
//! Everything the game shows goes through [`Renderer`]. The browser build uses
//! `dom::DomRenderer`, the native build [`LogRenderer`].

#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod headless;

pub use headless::LogRenderer;

use glam::Vec2;

use crate::game::{LevelCard, Screen};

/// Message area styling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    None,
    Success,
    Error,
    Completion,
}

impl Feedback {
    pub fn css_class(&self) -> &'static str {
        match self {
            Feedback::None => "",
            Feedback::Success => "success",
            Feedback::Error => "error",
            Feedback::Completion => "completion",
        }
    }
}

/// Presentation side effects driven by [`crate::App`].
///
/// Positions passed to the effect methods are client (viewport) coordinates of
/// the triggering click.
pub trait Renderer {
    /// Hide every screen, then show `screen`
    fn show_screen(&mut self, screen: Screen);
    fn set_message(&mut self, text: &str, kind: Feedback);
    fn set_level_counter(&mut self, text: &str);
    fn set_hint(&mut self, text: &str);
    fn set_next_button_visible(&mut self, visible: bool);
    /// Load `image` and draw it with the canvas resized to the image
    fn draw_level_image(&mut self, image: &str);

    fn spawn_click_effect(&mut self, client: Vec2);
    fn spawn_sparkle(&mut self, client: Vec2);

    fn update_progress(&mut self, completed: usize, total: usize);
    fn render_level_grid(&mut self, cards: &[LevelCard]);

    fn set_reduced_motion(&mut self, enabled: bool);

    fn set_dev_mode(&mut self, enabled: bool);
    fn show_dev_coordinates(&mut self, image: Vec2, snippet: &str);
    /// Replace any previous dev marker with one at `client`
    fn place_dev_marker(&mut self, client: Vec2);
}

/// Progress bar text, e.g. "2/5 Levels Completed"
pub fn progress_text(completed: usize, total: usize) -> String {
    format!("{}/{} Levels Completed", completed, total)
}

/// Progress bar width in percent
pub fn progress_percent(completed: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (completed as f64 / total as f64 * 100.0).min(100.0)
    }
}
