//! Level list download (web only)

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use crate::level::{self, Level, LoadError, LoadResult};

fn js_err(e: wasm_bindgen::JsValue) -> LoadError {
    LoadError::Network(format!("{:?}", e))
}

/// Fetch and parse the level list. Single attempt, no timeout.
pub async fn fetch_levels(url: &str) -> LoadResult<Vec<Level>> {
    let window = web_sys::window().ok_or_else(|| LoadError::Network("no window".into()))?;
    let resp: Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;

    if !resp.ok() {
        return Err(LoadError::Status(resp.status()));
    }

    let body = JsFuture::from(resp.text().map_err(js_err)?)
        .await
        .map_err(js_err)?
        .as_string()
        .ok_or_else(|| LoadError::Network("response body is not text".into()))?;

    level::parse_levels(&body)
}

/// Fetch the level list, substituting the demo level on any failure
pub async fn load_levels(url: &str) -> Vec<Level> {
    level::levels_or_fallback(fetch_levels(url).await)
}
