//! Application state
//!
//! One [`App`] owns everything the game mutates: the loaded levels, the
//! current level, progress, the screen router and dev mode. DOM handlers call
//! into it; it calls back out through a [`Renderer`] and persists through a
//! [`KeyValueStore`].

use glam::Vec2;

use crate::consts::*;
use crate::game::{CanvasMetrics, DisplayRect, HitOutcome, Progress, Screen, ScreenRouter};
use crate::game::{hit_test, to_image_coords};
use crate::level::Level;
use crate::persistence::SaveStore;
use crate::platform::KeyValueStore;
use crate::renderer::{Feedback, Renderer};
use crate::settings::Settings;

/// What a canvas click did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ClickResult {
    /// Not on the game screen, or the canvas isn't laid out
    Ignored,
    /// Dev mode reported these image coordinates
    Picked(Vec2),
    Tested(HitOutcome),
}

pub struct App<R: Renderer, S: KeyValueStore> {
    /// `None` until `levels.json` (or the fallback) arrives
    levels: Option<Vec<Level>>,
    current_level: usize,
    progress: Progress,
    router: ScreenRouter,
    dev_mode: bool,
    settings: Settings,
    saves: SaveStore<S>,
    renderer: R,
}

impl<R: Renderer, S: KeyValueStore> App<R, S> {
    /// Restore saved progress and settings and show the menu
    pub fn new(renderer: R, store: S) -> Self {
        let saves = SaveStore::new(store);
        let progress = saves.load_progress();
        let settings = saves.load_settings();
        let mut app = Self {
            levels: None,
            current_level: 0,
            progress,
            router: ScreenRouter::new(),
            dev_mode: false,
            settings,
            saves,
            renderer,
        };
        app.renderer.show_screen(Screen::Menu);
        app.renderer.set_reduced_motion(app.settings.reduced_motion);
        app.refresh_progress();
        app
    }

    pub fn levels(&self) -> Option<&[Level]> {
        self.levels.as_deref()
    }

    pub fn level_count(&self) -> usize {
        self.levels.as_ref().map_or(0, Vec::len)
    }

    pub fn current_level(&self) -> usize {
        self.current_level
    }

    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    pub fn screen(&self) -> Screen {
        self.router.current()
    }

    pub fn game_started(&self) -> bool {
        self.router.game_started()
    }

    pub fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn store(&self) -> &S {
        self.saves.inner()
    }

    /// Install the level list
    pub fn levels_loaded(&mut self, levels: Vec<Level>) {
        log::info!("{} levels ready", levels.len());
        self.levels = Some(levels);
        self.refresh_progress();
        self.refresh_level_grid();
    }

    pub fn start_game(&mut self) {
        if self.level_count() == 0 {
            log::warn!("Start requested before levels loaded");
            self.renderer.set_message(MSG_STILL_LOADING, Feedback::Error);
            return;
        }
        self.enter_level(0);
    }

    pub fn show_menu(&mut self) {
        self.router.leave_game();
        self.renderer.show_screen(Screen::Menu);
        self.current_level = 0;
        self.clear_message();
        self.renderer.set_next_button_visible(false);
    }

    pub fn show_level_select(&mut self) {
        self.refresh_level_grid();
        self.router.show(Screen::LevelSelect);
        self.renderer.show_screen(Screen::LevelSelect);
    }

    /// Open a level from the level grid. Locked or unknown levels are ignored.
    pub fn play_level(&mut self, index: usize) -> bool {
        if index >= self.level_count() {
            log::warn!("No level {} to play", index + 1);
            return false;
        }
        if !self.progress.is_unlocked(index) {
            log::warn!("Level {} is locked", index + 1);
            return false;
        }
        self.enter_level(index);
        true
    }

    pub fn restart_level(&mut self) {
        self.load_level(self.current_level);
    }

    /// Advance after a hit, or announce that every level is done
    pub fn next_level(&mut self) {
        let next = self.current_level + 1;
        if next < self.level_count() {
            self.load_level(next);
        } else {
            self.renderer.set_message(MSG_ALL_DONE, Feedback::Completion);
            self.renderer.set_next_button_visible(false);
        }
    }

    /// Escape returns to the menu, `r` restarts; only while a game is running
    pub fn handle_key(&mut self, key: &str) -> bool {
        if !self.router.game_started() {
            return false;
        }
        match key {
            "Escape" => self.show_menu(),
            "r" => self.restart_level(),
            _ => return false,
        }
        true
    }

    pub fn toggle_dev_mode(&mut self) {
        self.dev_mode = !self.dev_mode;
        log::info!("Dev mode: {}", self.dev_mode);
        self.renderer.set_dev_mode(self.dev_mode);
        if self.dev_mode {
            self.renderer.set_message(MSG_DEV_MODE, Feedback::Success);
        } else {
            self.clear_message();
        }
    }

    /// Flip reduced motion and persist the choice
    pub fn toggle_reduced_motion(&mut self) {
        let enabled = self.settings.toggle_reduced_motion();
        log::info!("Reduced motion: {}", enabled);
        self.saves.save_settings(&self.settings);
        self.renderer.set_reduced_motion(enabled);
    }

    /// Handle a click on the level canvas at client position `client`
    pub fn handle_click(
        &mut self,
        client: Vec2,
        canvas: CanvasMetrics,
        rect: DisplayRect,
    ) -> ClickResult {
        if !self.router.is_visible(Screen::Game) {
            return ClickResult::Ignored;
        }
        let Some(target) = self
            .levels
            .as_ref()
            .and_then(|levels| levels.get(self.current_level))
            .map(|level| level.target)
        else {
            return ClickResult::Ignored;
        };
        let Some(point) = to_image_coords(client, canvas, rect) else {
            log::debug!("Click ignored, canvas has no displayed size");
            return ClickResult::Ignored;
        };

        if self.dev_mode {
            self.renderer.show_dev_coordinates(point, &dev_snippet(point));
            self.renderer.place_dev_marker(client);
            return ClickResult::Picked(point);
        }

        if self.settings.effects_enabled() {
            self.renderer.spawn_click_effect(client);
        }

        let outcome = hit_test(&target, point);
        if outcome.is_hit() {
            log::info!(
                "Level {} found (distance {:.1})",
                self.current_level + 1,
                outcome.distance()
            );
            self.renderer.set_message(MSG_FOUND, Feedback::Success);
            self.renderer.set_next_button_visible(true);
            self.complete_level(self.current_level);
            if self.settings.effects_enabled() {
                self.renderer.spawn_sparkle(client);
            }
        } else {
            self.renderer.set_message(MSG_MISSED, Feedback::Error);
        }
        ClickResult::Tested(outcome)
    }

    fn enter_level(&mut self, index: usize) {
        self.router.enter_game();
        self.renderer.show_screen(Screen::Game);
        self.load_level(index);
    }

    fn load_level(&mut self, index: usize) {
        let Some(level) = self.levels.as_ref().and_then(|levels| levels.get(index)) else {
            log::warn!("Level {} not loaded", index + 1);
            return;
        };
        self.current_level = index;
        self.renderer.set_level_counter(&format!("Level {}", index + 1));
        self.renderer.set_hint(&level.hint);
        self.renderer.set_message("", Feedback::None);
        self.renderer.set_next_button_visible(false);
        self.renderer.draw_level_image(&level.image);
    }

    fn complete_level(&mut self, index: usize) {
        self.progress.complete(index, self.level_count());
        self.saves.save_progress(&self.progress);
        self.refresh_progress();
    }

    fn clear_message(&mut self) {
        self.renderer.set_message("", Feedback::None);
    }

    fn refresh_progress(&mut self) {
        let total = self.level_count();
        self.renderer
            .update_progress(self.progress.completed_within(total), total);
    }

    fn refresh_level_grid(&mut self) {
        let cards = self.progress.level_cards(self.level_count());
        self.renderer.render_level_grid(&cards);
    }
}

/// Ready-to-paste target JSON for a picked point
pub fn dev_snippet(point: Vec2) -> String {
    format!(
        r#""target": {{ "x": {}, "y": {}, "radius": {} }}"#,
        point.x.round() as i64,
        point.y.round() as i64,
        DEV_SNIPPET_RADIUS
    )
}
