pub mod actions;
pub mod analytics;
pub mod components;
pub mod config;
pub mod dom;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod haptics;
pub mod shortcuts;
pub mod storage;
pub mod timer;
pub mod toast;

use crate::components::App;
use crate::config::LandingConfig;
use leptos::*;
use wasm_bindgen::prelude::*;

/// Mount the page and wire up its effects.
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    };
    // Fails only if a logger is already set
    let _ = console_log::init_with_level(level);

    let config = LandingConfig::from_page();
    let reduced_motion = dom::prefers_reduced_motion();
    let effects_config = config.clone();

    mount_to_body(move || view! { <App config=config reduced_motion=reduced_motion/> });

    // Effects look the markup up, so they go in after the mount
    effects::install(&effects_config, reduced_motion);
    log::debug!("Landing page ready");
}
