//! Renderer that only logs, for the native build

use glam::Vec2;

use super::{Feedback, Renderer, progress_text};
use crate::game::{LevelCard, Screen};

#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn show_screen(&mut self, screen: Screen) {
        log::info!("[screen] {}", screen.element_id());
    }

    fn set_message(&mut self, text: &str, kind: Feedback) {
        if !text.is_empty() {
            log::info!("[message:{}] {}", kind.css_class(), text);
        }
    }

    fn set_level_counter(&mut self, text: &str) {
        log::info!("[counter] {}", text);
    }

    fn set_hint(&mut self, text: &str) {
        log::info!("[hint] {}", text);
    }

    fn set_next_button_visible(&mut self, visible: bool) {
        log::debug!("[next] visible={}", visible);
    }

    fn draw_level_image(&mut self, image: &str) {
        log::debug!("[image] {} bytes", image.len());
    }

    fn spawn_click_effect(&mut self, client: Vec2) {
        log::debug!("[effect] click at {}", client);
    }

    fn spawn_sparkle(&mut self, client: Vec2) {
        log::debug!("[effect] sparkle at {}", client);
    }

    fn update_progress(&mut self, completed: usize, total: usize) {
        log::info!("[progress] {}", progress_text(completed, total));
    }

    fn render_level_grid(&mut self, cards: &[LevelCard]) {
        for card in cards {
            log::debug!("[grid] {} {}", card.number, card.status.label());
        }
    }

    fn set_reduced_motion(&mut self, enabled: bool) {
        log::info!("[motion] reduced={}", enabled);
    }

    fn set_dev_mode(&mut self, enabled: bool) {
        log::info!("[dev] {}", enabled);
    }

    fn show_dev_coordinates(&mut self, image: Vec2, snippet: &str) {
        log::info!("[dev] {} -> {}", image, snippet);
    }

    fn place_dev_marker(&mut self, client: Vec2) {
        log::debug!("[dev] marker at {}", client);
    }
}
