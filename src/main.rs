//! Găsește-l pe Andrei entry point
//!
//! Handles platform-specific initialization and wires DOM events to the game.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Element, HtmlCanvasElement, KeyboardEvent, MouseEvent};

    use gaseste_andreiul::App;
    use gaseste_andreiul::consts::LEVELS_URL;
    use gaseste_andreiul::game::{CanvasMetrics, DisplayRect};
    use gaseste_andreiul::platform::LocalStorage;
    use gaseste_andreiul::platform::fetch::load_levels;
    use gaseste_andreiul::renderer::dom::DomRenderer;

    type Game = App<DomRenderer, LocalStorage>;

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if let Err(e) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::error_1(&format!("Logger init failed: {}", e).into());
        }

        log::info!("Găsește-l pe Andrei starting...");

        let window = web_sys::window().ok_or("no window")?;
        let document = window.document().ok_or("no document")?;
        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or("no canvas")?
            .dyn_into()?;

        let renderer = DomRenderer::new(document.clone(), canvas.clone())?;
        let game = Rc::new(RefCell::new(App::new(renderer, LocalStorage::new())));

        setup_canvas_click(&canvas, game.clone());
        setup_keyboard(&document, game.clone());
        setup_buttons(&document, game.clone());

        // Single attempt; the fallback level is substituted on failure
        wasm_bindgen_futures::spawn_local(async move {
            let levels = load_levels(LEVELS_URL).await;
            game.borrow_mut().levels_loaded(levels);
        });

        log::info!("Găsește-l pe Andrei running!");
        Ok(())
    }

    fn setup_canvas_click(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        let canvas_clone = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = canvas_clone.get_bounding_client_rect();
            let metrics = CanvasMetrics {
                width: canvas_clone.width() as f32,
                height: canvas_clone.height() as f32,
            };
            let display = DisplayRect {
                left: rect.left() as f32,
                top: rect.top() as f32,
                width: rect.width() as f32,
                height: rect.height() as f32,
            };
            let client = glam::Vec2::new(event.client_x() as f32, event.client_y() as f32);
            game.borrow_mut().handle_click(client, metrics, display);
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_keyboard(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            game.borrow_mut().handle_key(&event.key());
        });
        let _ = document
            .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    /// Buttons carry `data-action`; level cards carry `data-level`.
    /// One delegated listener handles both, so regenerated grids need no rebinding.
    fn setup_buttons(document: &web_sys::Document, game: Rc<RefCell<Game>>) {
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let Some(target) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
                return;
            };

            if let Ok(Some(card)) = target.closest("[data-level]") {
                if let Some(index) = card
                    .get_attribute("data-level")
                    .and_then(|v| v.parse::<usize>().ok())
                {
                    game.borrow_mut().play_level(index);
                }
                return;
            }

            let Ok(Some(button)) = target.closest("[data-action]") else {
                return;
            };
            let action = button.get_attribute("data-action").unwrap_or_default();
            let mut g = game.borrow_mut();
            match action.as_str() {
                "start" => g.start_game(),
                "level-select" => g.show_level_select(),
                "menu" => g.show_menu(),
                "restart" => g.restart_level(),
                "next" => g.next_level(),
                "dev-mode" => g.toggle_dev_mode(),
                "reduced-motion" => g.toggle_reduced_motion(),
                other => log::warn!("Unknown action: {}", other),
            }
        });
        let _ = document
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();
    log::info!("Găsește-l pe Andrei (native) starting...");
    log::info!("Native mode only replays the demo level");
    log::info!("Run with `trunk serve` for the web version");

    demo_playthrough();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Play the built-in demo level headlessly: one miss, then a hit
#[cfg(not(target_arch = "wasm32"))]
fn demo_playthrough() {
    use gaseste_andreiul::App;
    use gaseste_andreiul::game::{CanvasMetrics, DisplayRect};
    use gaseste_andreiul::level::fallback_levels;
    use gaseste_andreiul::platform::MemoryStorage;
    use gaseste_andreiul::renderer::LogRenderer;
    use glam::Vec2;

    let mut app = App::new(LogRenderer, MemoryStorage::new());
    app.levels_loaded(fallback_levels());
    app.start_game();

    // Demo image is 400x300, shown at its natural size
    let canvas = CanvasMetrics { width: 400.0, height: 300.0 };
    let rect = DisplayRect { left: 0.0, top: 0.0, width: 400.0, height: 300.0 };

    let miss = app.handle_click(Vec2::new(180.0, 100.0), canvas, rect);
    log::info!("Click at (180, 100): {:?}", miss);
    let hit = app.handle_click(Vec2::new(150.0, 100.0), canvas, rect);
    log::info!("Click at (150, 100): {:?}", hit);

    app.next_level();
    println!(
        "✓ Demo level completed: {}/{} levels",
        app.progress().completed_count(),
        app.level_count()
    );
}
