//! Găsește-l pe Andrei - find the hidden spot in each picture
//!
//! Core modules:
//! - `level`: Level records, JSON parsing and the fallback demo level
//! - `game`: Hit testing, progress tracking and screen routing (pure logic)
//! - `app`: Application state driving the game from DOM events
//! - `renderer`: Rendering interface (DOM implementation on web)
//! - `platform`: Browser/native platform abstraction (storage, fetch)
//! - `persistence`: Progress and settings save/load

pub mod app;
pub mod game;
pub mod level;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod settings;

pub use app::App;
pub use level::{Level, LoadError, Target};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Level list resource, relative to the page
    pub const LEVELS_URL: &str = "levels.json";

    /// LocalStorage key for the progress blob
    pub const PROGRESS_KEY: &str = "gaseste-andreiul-progress";
    /// LocalStorage key for user preferences
    pub const SETTINGS_KEY: &str = "gaseste-andreiul-settings";

    /// Click ripple lifetime (ms)
    pub const CLICK_EFFECT_MS: i32 = 600;
    /// Click ripple diameter (px)
    pub const CLICK_EFFECT_SIZE: f64 = 40.0;
    /// Success sparkle lifetime (ms)
    pub const SPARKLE_MS: i32 = 1000;
    /// Success sparkle glyph size (px)
    pub const SPARKLE_SIZE: f64 = 30.0;
    /// Dev mode marker diameter (px)
    pub const DEV_MARKER_SIZE: f64 = 60.0;
    /// Radius suggested in the dev mode JSON snippet
    pub const DEV_SNIPPET_RADIUS: u32 = 30;

    pub const MSG_FOUND: &str = "🎉 Forta mondiala, l-ai gasit!";
    pub const MSG_MISSED: &str = "❌ Hai ca erai aproape, mai incearca";
    pub const MSG_ALL_DONE: &str = "🏆 Nu mai avem!";
    pub const MSG_STILL_LOADING: &str = "⚠️ Game levels are still loading, please wait...";
    pub const MSG_DEV_MODE: &str =
        "🛠️ Developer Mode: Click on objects to get their coordinates!";
}
