//! DOM/canvas renderer for the browser build

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{
    CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlElement, HtmlImageElement,
};

use super::{Feedback, Renderer, progress_percent, progress_text};
use crate::consts::*;
use crate::game::{CardStatus, LevelCard, Screen};

pub struct DomRenderer {
    document: Document,
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    image: HtmlImageElement,
    /// Kept alive until the next level replaces it
    on_image_load: Option<Closure<dyn FnMut()>>,
}

impl DomRenderer {
    pub fn new(document: Document, canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into()?;
        let image = HtmlImageElement::new()?;
        Ok(Self {
            document,
            canvas,
            ctx,
            image,
            on_image_load: None,
        })
    }

    fn html(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    fn set_display(&self, id: &str, value: &str) {
        if let Some(el) = self.html(id) {
            let _ = el.style().set_property("display", value);
        }
    }

    fn set_text(&self, id: &str, text: &str) {
        if let Some(el) = self.document.get_element_by_id(id) {
            el.set_text_content(Some(text));
        }
    }

    /// Client position relative to the game container
    fn container_offset(&self, client: Vec2) -> Option<(Element, Vec2)> {
        let container = self.document.get_element_by_id("game-container")?;
        let rect = container.get_bounding_client_rect();
        let local = client - Vec2::new(rect.left() as f32, rect.top() as f32);
        Some((container, local))
    }

    /// Absolutely positioned overlay centered on `client`, removed after `ttl_ms`
    fn spawn_overlay(&self, client: Vec2, size: f64, class: &str, text: Option<&str>, ttl_ms: i32) {
        let Some((container, local)) = self.container_offset(client) else {
            return;
        };
        let Ok(el) = self.document.create_element("div") else {
            return;
        };
        let Ok(el) = el.dyn_into::<HtmlElement>() else {
            return;
        };
        el.set_class_name(class);
        let style = el.style();
        let half = (size / 2.0) as f32;
        let _ = style.set_property("position", "absolute");
        let _ = style.set_property("left", &format!("{}px", local.x - half));
        let _ = style.set_property("top", &format!("{}px", local.y - half));
        let _ = style.set_property("pointer-events", "none");
        if let Some(text) = text {
            let _ = style.set_property("font-size", &format!("{}px", size));
            let _ = style.set_property("animation", "bounce 1s ease-out");
            el.set_text_content(Some(text));
        }
        let _ = container.append_child(&el);

        let remove = Closure::once_into_js(move || {
            if container.contains(Some(el.as_ref())) {
                let _ = container.remove_child(&el);
            }
        });
        if let Some(window) = web_sys::window() {
            let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                remove.unchecked_ref(),
                ttl_ms,
            );
        }
    }
}

impl Renderer for DomRenderer {
    fn show_screen(&mut self, screen: Screen) {
        for s in Screen::ALL {
            self.set_display(s.element_id(), "none");
        }
        self.set_display(screen.element_id(), "block");
    }

    fn set_message(&mut self, text: &str, kind: Feedback) {
        if let Some(el) = self.document.get_element_by_id("message") {
            el.set_text_content(Some(text));
            el.set_class_name(kind.css_class());
        }
    }

    fn set_level_counter(&mut self, text: &str) {
        self.set_text("level-counter", text);
    }

    fn set_hint(&mut self, text: &str) {
        self.set_text("hint", text);
    }

    fn set_next_button_visible(&mut self, visible: bool) {
        self.set_display("next-level", if visible { "inline-block" } else { "none" });
    }

    fn draw_level_image(&mut self, image: &str) {
        let img = self.image.clone();
        let canvas = self.canvas.clone();
        let ctx = self.ctx.clone();
        let onload = Closure::<dyn FnMut()>::new(move || {
            canvas.set_width(img.natural_width());
            canvas.set_height(img.natural_height());
            if let Err(e) = ctx.draw_image_with_html_image_element(&img, 0.0, 0.0) {
                log::error!("Drawing level image failed: {:?}", e);
            }
        });
        self.image.set_onload(Some(onload.as_ref().unchecked_ref()));
        self.on_image_load = Some(onload);
        self.image.set_src(image);
    }

    fn spawn_click_effect(&mut self, client: Vec2) {
        self.spawn_overlay(client, CLICK_EFFECT_SIZE, "click-effect", None, CLICK_EFFECT_MS);
    }

    fn spawn_sparkle(&mut self, client: Vec2) {
        self.spawn_overlay(client, SPARKLE_SIZE, "sparkle", Some("✨"), SPARKLE_MS);
    }

    fn update_progress(&mut self, completed: usize, total: usize) {
        if let Some(bar) = self.html("progress-bar") {
            let _ = bar
                .style()
                .set_property("width", &format!("{}%", progress_percent(completed, total)));
        }
        self.set_text("progress-text", &progress_text(completed, total));
    }

    fn render_level_grid(&mut self, cards: &[LevelCard]) {
        let Some(grid) = self.document.get_element_by_id("level-grid") else {
            return;
        };
        grid.set_inner_html("");
        for card in cards {
            let Ok(el) = self.document.create_element("div") else {
                continue;
            };
            el.set_class_name(card.status.css_class());
            // Clicks are delegated to the grid; only playable cards carry an index
            if card.playable {
                let _ = el.set_attribute("data-level", &card.index.to_string());
            }
            let completed_icon = if card.status == CardStatus::Completed {
                r#"<div class="completed-icon">✅</div>"#
            } else {
                ""
            };
            let number = if card.playable {
                card.number.to_string()
            } else {
                "🔒".to_string()
            };
            el.set_inner_html(&format!(
                r#"{}<div class="level-number">{}</div><div class="level-status">{}</div>"#,
                completed_icon,
                number,
                card.status.label()
            ));
            let _ = grid.append_child(&el);
        }
    }

    fn set_reduced_motion(&mut self, enabled: bool) {
        let label = if enabled { "🐢 Reduced Motion: ON" } else { "🐢 Reduced Motion" };
        self.set_text("reduced-motion", label);
    }

    fn set_dev_mode(&mut self, enabled: bool) {
        if let Some(button) = self.html("dev-mode") {
            let (label, background) = if enabled {
                ("🔧 Dev Mode: ON", "linear-gradient(45deg, #FF6B6B, #4ECDC4)")
            } else {
                ("🔧 Dev Mode", "rgba(255, 255, 255, 0.2)")
            };
            button.set_text_content(Some(label));
            let _ = button.style().set_property("background", background);
        }
        self.set_display("coordinates", if enabled { "block" } else { "none" });
    }

    fn show_dev_coordinates(&mut self, image: Vec2, snippet: &str) {
        if let Some(el) = self.document.get_element_by_id("coord-display") {
            el.set_inner_html(&format!(
                "<strong>X: {}, Y: {}</strong><br><small>JSON format: {}</small>",
                image.x.round() as i64,
                image.y.round() as i64,
                snippet
            ));
        }
    }

    fn place_dev_marker(&mut self, client: Vec2) {
        let Some((container, local)) = self.container_offset(client) else {
            return;
        };
        if let Ok(old) = container.query_selector_all(".coord-marker") {
            for i in 0..old.length() {
                if let Some(node) = old.item(i) {
                    let _ = container.remove_child(&node);
                }
            }
        }
        let Ok(marker) = self
            .document
            .create_element("div")
            .and_then(|el| el.dyn_into::<HtmlElement>().map_err(JsValue::from))
        else {
            return;
        };
        marker.set_class_name("coord-marker");
        let half = (DEV_MARKER_SIZE / 2.0) as f32;
        let style = marker.style();
        for (prop, value) in [
            ("position", "absolute".to_string()),
            ("width", format!("{}px", DEV_MARKER_SIZE)),
            ("height", format!("{}px", DEV_MARKER_SIZE)),
            ("border", "3px dashed #FFD700".to_string()),
            ("border-radius", "50%".to_string()),
            ("pointer-events", "none".to_string()),
            ("background-color", "rgba(255, 215, 0, 0.2)".to_string()),
            ("left", format!("{}px", local.x - half)),
            ("top", format!("{}px", local.y - half)),
        ] {
            let _ = style.set_property(prop, &value);
        }
        let _ = container.append_child(&marker);
    }
}
