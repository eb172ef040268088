// Integration tests driving `App` natively through a recording renderer and
// in-memory storage.

use gaseste_andreiul::App;
use gaseste_andreiul::app::ClickResult;
use gaseste_andreiul::consts::*;
use gaseste_andreiul::game::{CanvasMetrics, CardStatus, DisplayRect, LevelCard, Screen};
use gaseste_andreiul::level::{Level, Target, fallback_levels};
use gaseste_andreiul::platform::{KeyValueStore, MemoryStorage};
use gaseste_andreiul::renderer::{Feedback, Renderer};
use glam::Vec2;

#[derive(Debug, Default)]
struct Recorder {
    screens: Vec<Screen>,
    message: (String, Option<Feedback>),
    counter: String,
    hint: String,
    next_visible: bool,
    images: Vec<String>,
    click_effects: usize,
    sparkles: usize,
    progress: (usize, usize),
    grid: Vec<LevelCard>,
    reduced_motion: bool,
    dev_mode: bool,
    dev_snippets: Vec<String>,
    dev_markers: usize,
}

impl Recorder {
    fn visible_screen(&self) -> Option<Screen> {
        self.screens.last().copied()
    }
}

impl Renderer for Recorder {
    fn show_screen(&mut self, screen: Screen) {
        self.screens.push(screen);
    }
    fn set_message(&mut self, text: &str, kind: Feedback) {
        self.message = (text.to_string(), Some(kind));
    }
    fn set_level_counter(&mut self, text: &str) {
        self.counter = text.to_string();
    }
    fn set_hint(&mut self, text: &str) {
        self.hint = text.to_string();
    }
    fn set_next_button_visible(&mut self, visible: bool) {
        self.next_visible = visible;
    }
    fn draw_level_image(&mut self, image: &str) {
        self.images.push(image.to_string());
    }
    fn spawn_click_effect(&mut self, _client: Vec2) {
        self.click_effects += 1;
    }
    fn spawn_sparkle(&mut self, _client: Vec2) {
        self.sparkles += 1;
    }
    fn update_progress(&mut self, completed: usize, total: usize) {
        self.progress = (completed, total);
    }
    fn render_level_grid(&mut self, cards: &[LevelCard]) {
        self.grid = cards.to_vec();
    }
    fn set_reduced_motion(&mut self, enabled: bool) {
        self.reduced_motion = enabled;
    }
    fn set_dev_mode(&mut self, enabled: bool) {
        self.dev_mode = enabled;
    }
    fn show_dev_coordinates(&mut self, _image: Vec2, snippet: &str) {
        self.dev_snippets.push(snippet.to_string());
    }
    fn place_dev_marker(&mut self, _client: Vec2) {
        self.dev_markers += 1;
    }
}

fn level(name: &str, x: f32, y: f32, radius: f32) -> Level {
    Level {
        image: format!("img/{}.jpg", name),
        target: Target::new(x, y, radius),
        hint: format!("Look around the {}", name),
    }
}

fn three_levels() -> Vec<Level> {
    vec![
        level("park", 150.0, 100.0, 25.0),
        level("beach", 40.0, 60.0, 10.0),
        level("market", 300.0, 200.0, 30.0),
    ]
}

const CANVAS: CanvasMetrics = CanvasMetrics { width: 400.0, height: 300.0 };
const NATURAL: DisplayRect = DisplayRect { left: 0.0, top: 0.0, width: 400.0, height: 300.0 };

fn new_app() -> App<Recorder, MemoryStorage> {
    App::new(Recorder::default(), MemoryStorage::new())
}

fn click(app: &mut App<Recorder, MemoryStorage>, x: f32, y: f32) -> ClickResult {
    app.handle_click(Vec2::new(x, y), CANVAS, NATURAL)
}

#[test]
fn starts_on_menu_with_fresh_progress() {
    let app = new_app();
    assert_eq!(app.screen(), Screen::Menu);
    assert_eq!(app.renderer().visible_screen(), Some(Screen::Menu));
    assert!(!app.game_started());
    assert_eq!(app.progress().unlocked(), 1);
}

#[test]
fn start_before_levels_load_warns() {
    let mut app = new_app();
    app.start_game();
    assert_eq!(app.screen(), Screen::Menu);
    assert!(!app.game_started());
    assert_eq!(app.renderer().message.0, MSG_STILL_LOADING);
    assert_eq!(app.renderer().message.1, Some(Feedback::Error));
}

#[test]
fn start_loads_first_level() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();

    assert_eq!(app.screen(), Screen::Game);
    assert!(app.game_started());
    assert_eq!(app.current_level(), 0);
    let r = app.renderer();
    assert_eq!(r.counter, "Level 1");
    assert_eq!(r.hint, "Look around the park");
    assert_eq!(r.images, vec!["img/park.jpg".to_string()]);
    assert!(!r.next_visible);
}

#[test]
fn miss_then_hit_completes_and_persists() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();

    let miss = click(&mut app, 180.0, 100.0);
    assert!(matches!(miss, ClickResult::Tested(o) if !o.is_hit()));
    assert_eq!(app.renderer().message.0, MSG_MISSED);
    assert_eq!(app.progress().completed_count(), 0);

    let hit = click(&mut app, 150.0, 100.0);
    assert!(matches!(hit, ClickResult::Tested(o) if o.is_hit()));
    let r = app.renderer();
    assert_eq!(r.message, (MSG_FOUND.to_string(), Some(Feedback::Success)));
    assert!(r.next_visible);
    assert_eq!(r.click_effects, 2);
    assert_eq!(r.sparkles, 1);
    assert_eq!(r.progress, (1, 3));

    assert!(app.progress().is_completed(0));
    assert_eq!(app.progress().unlocked(), 2);
    assert_eq!(
        app.store().get(PROGRESS_KEY).unwrap().as_deref(),
        Some(r#"{"completed":[0],"unlocked":2}"#)
    );
}

#[test]
fn scaled_canvas_click_maps_to_image() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();

    // Canvas shown at half size, offset in the page
    let rect = DisplayRect { left: 100.0, top: 50.0, width: 200.0, height: 150.0 };
    let result = app.handle_click(Vec2::new(175.0, 100.0), CANVAS, rect);
    assert!(matches!(result, ClickResult::Tested(o) if o.is_hit()));
}

#[test]
fn repeat_hit_is_idempotent() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();
    click(&mut app, 150.0, 100.0);
    let after_first = app.progress().clone();
    click(&mut app, 150.0, 100.0);
    assert_eq!(app.progress(), &after_first);
}

#[test]
fn next_level_advances_then_reports_completion() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();

    app.next_level();
    assert_eq!(app.current_level(), 1);
    assert_eq!(app.renderer().counter, "Level 2");
    app.next_level();
    assert_eq!(app.current_level(), 2);

    app.next_level();
    assert_eq!(app.current_level(), 2);
    let r = app.renderer();
    assert_eq!(r.message, (MSG_ALL_DONE.to_string(), Some(Feedback::Completion)));
    assert!(!r.next_visible);
}

#[test]
fn keyboard_shortcuts_only_while_playing() {
    let mut app = new_app();
    app.levels_loaded(three_levels());

    assert!(!app.handle_key("Escape"));
    assert!(!app.handle_key("r"));

    app.start_game();
    app.next_level();
    let images_before = app.renderer().images.len();
    assert!(app.handle_key("r"));
    assert_eq!(app.current_level(), 1);
    assert_eq!(app.renderer().images.len(), images_before + 1);

    assert!(!app.handle_key("x"));

    assert!(app.handle_key("Escape"));
    assert_eq!(app.screen(), Screen::Menu);
    assert!(!app.game_started());
    assert_eq!(app.current_level(), 0);
    assert!(!app.handle_key("r"));
}

#[test]
fn level_select_respects_locks() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.show_level_select();
    assert_eq!(app.screen(), Screen::LevelSelect);

    let statuses: Vec<_> = app.renderer().grid.iter().map(|c| c.status).collect();
    assert_eq!(statuses, vec![CardStatus::Available, CardStatus::Locked, CardStatus::Locked]);

    assert!(!app.play_level(1));
    assert_eq!(app.screen(), Screen::LevelSelect);
    assert!(!app.play_level(9));

    assert!(app.play_level(0));
    click(&mut app, 150.0, 100.0);
    app.show_menu();
    app.show_level_select();
    let statuses: Vec<_> = app.renderer().grid.iter().map(|c| c.status).collect();
    assert_eq!(statuses, vec![CardStatus::Completed, CardStatus::Available, CardStatus::Locked]);

    assert!(app.play_level(1));
    assert_eq!(app.screen(), Screen::Game);
    assert_eq!(app.current_level(), 1);
    assert!(app.game_started());
}

#[test]
fn exactly_one_screen_after_every_transition() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.show_level_select();
    assert_eq!(app.renderer().visible_screen(), Some(app.screen()));
    app.play_level(0);
    assert_eq!(app.renderer().visible_screen(), Some(app.screen()));
    app.show_menu();
    assert_eq!(app.renderer().visible_screen(), Some(Screen::Menu));
    app.start_game();
    assert_eq!(app.renderer().visible_screen(), Some(Screen::Game));
}

#[test]
fn clicks_ignored_outside_game_screen() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    assert_eq!(click(&mut app, 150.0, 100.0), ClickResult::Ignored);
    assert_eq!(app.progress().completed_count(), 0);
}

#[test]
fn dev_mode_picks_coordinates_without_scoring() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();

    app.toggle_dev_mode();
    assert!(app.dev_mode());
    assert!(app.renderer().dev_mode);
    assert_eq!(app.renderer().message.0, MSG_DEV_MODE);

    let result = click(&mut app, 150.4, 99.6);
    assert_eq!(result, ClickResult::Picked(Vec2::new(150.4, 99.6)));
    let r = app.renderer();
    assert_eq!(
        r.dev_snippets,
        vec![r#""target": { "x": 150, "y": 100, "radius": 30 }"#.to_string()]
    );
    assert_eq!(r.dev_markers, 1);
    assert_eq!(r.click_effects, 0);
    assert_eq!(app.progress().completed_count(), 0);

    app.toggle_dev_mode();
    assert!(!app.dev_mode());
    assert_eq!(app.renderer().message, (String::new(), Some(Feedback::None)));
}

#[test]
fn saved_progress_beyond_level_count_is_kept() {
    let mut store = MemoryStorage::new();
    store
        .set(PROGRESS_KEY, r#"{"completed":[0,1,5],"unlocked":3}"#)
        .unwrap();
    let mut app = App::new(Recorder::default(), store);
    assert_eq!(app.progress().completed_count(), 3);

    app.levels_loaded(three_levels());
    assert_eq!(app.progress().completed().collect::<Vec<_>>(), vec![0, 1, 5]);
    assert_eq!(app.progress().unlocked(), 3);
    assert_eq!(app.renderer().progress, (2, 3));
    assert!(app.play_level(2));
}

#[test]
fn fallback_levels_do_not_erase_saved_progress() {
    let mut store = MemoryStorage::new();
    store
        .set(PROGRESS_KEY, r#"{"completed":[0,1,2,3,4],"unlocked":6}"#)
        .unwrap();
    let mut app = App::new(Recorder::default(), store);

    // levels.json failed to load
    app.levels_loaded(fallback_levels());
    assert_eq!(app.renderer().progress, (1, 1));
    assert_eq!(app.renderer().grid.len(), 1);
    assert_eq!(app.renderer().grid[0].status, CardStatus::Completed);

    app.start_game();
    assert!(matches!(click(&mut app, 150.0, 100.0), ClickResult::Tested(o) if o.is_hit()));
    assert_eq!(
        app.store().get(PROGRESS_KEY).unwrap().as_deref(),
        Some(r#"{"completed":[0,1,2,3,4],"unlocked":6}"#)
    );
}

#[test]
fn fallback_level_is_playable() {
    let mut app = new_app();
    app.levels_loaded(fallback_levels());
    app.start_game();
    assert_eq!(app.renderer().hint, "Find the red circle");
    assert!(matches!(click(&mut app, 180.0, 100.0), ClickResult::Tested(o) if !o.is_hit()));
    assert!(matches!(click(&mut app, 150.0, 100.0), ClickResult::Tested(o) if o.is_hit()));
    // Single level: nothing further to unlock
    assert_eq!(app.progress().unlocked(), 1);
    app.next_level();
    assert_eq!(app.renderer().message.0, MSG_ALL_DONE);
}

#[test]
fn reduced_motion_toggle_suppresses_effects_and_persists() {
    let mut app = new_app();
    assert!(!app.renderer().reduced_motion);
    app.toggle_reduced_motion();
    assert!(app.settings().reduced_motion);
    assert!(app.renderer().reduced_motion);
    assert_eq!(
        app.store().get(SETTINGS_KEY).unwrap().as_deref(),
        Some(r#"{"reduced_motion":true}"#)
    );

    app.levels_loaded(three_levels());
    app.start_game();
    click(&mut app, 150.0, 100.0);
    assert_eq!(app.renderer().click_effects, 0);
    assert_eq!(app.renderer().sparkles, 0);
    assert!(app.progress().is_completed(0));
}

#[test]
fn reduced_motion_restored_on_startup() {
    let mut store = MemoryStorage::new();
    store.set(SETTINGS_KEY, r#"{"reduced_motion":true}"#).unwrap();
    let app = App::new(Recorder::default(), store);
    assert!(app.settings().reduced_motion);
    assert!(app.renderer().reduced_motion);
}

#[test]
fn dev_mode_off_resumes_hit_testing() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();

    app.toggle_dev_mode();
    assert!(matches!(click(&mut app, 150.0, 100.0), ClickResult::Picked(_)));
    assert_eq!(app.progress().completed_count(), 0);

    app.toggle_dev_mode();
    assert!(matches!(click(&mut app, 150.0, 100.0), ClickResult::Tested(o) if o.is_hit()));
    let r = app.renderer();
    assert_eq!(r.message, (MSG_FOUND.to_string(), Some(Feedback::Success)));
    assert_eq!(r.click_effects, 1);
    assert_eq!(r.dev_markers, 1);
    assert!(app.progress().is_completed(0));
}

#[test]
fn menu_clears_message_and_next_button_after_hit() {
    let mut app = new_app();
    app.levels_loaded(three_levels());
    app.start_game();
    click(&mut app, 150.0, 100.0);
    assert!(app.renderer().next_visible);
    assert_eq!(app.renderer().message.0, MSG_FOUND);

    app.show_menu();
    let r = app.renderer();
    assert_eq!(r.visible_screen(), Some(Screen::Menu));
    assert!(!r.next_visible);
    assert_eq!(r.message, (String::new(), Some(Feedback::None)));
    assert_eq!(app.current_level(), 0);
}

#[test]
fn message_area_is_outside_every_screen() {
    // The loading warning is shown on the menu, so #message can't live
    // inside a screen container that gets hidden.
    let html = include_str!("../index.html");
    let at = html.find(r#"id="message""#).unwrap();
    let before = &html[..at];
    let opened = before.matches("<div").count();
    let closed = before.matches("</div>").count();
    assert_eq!(opened, closed + 1, "#message must sit at body level");
    for screen in Screen::ALL {
        let id = format!(r#"id="{}""#, screen.element_id());
        assert!(html.find(&id).unwrap() < at);
    }
}
