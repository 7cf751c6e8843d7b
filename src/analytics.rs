use crate::actions::Action;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = umami, js_name = track)]
    fn umami_track(event: &str);
}

fn tracker_loaded() -> bool {
    js_sys::eval("typeof umami !== 'undefined'")
        .ok()
        .and_then(|v| v.as_bool())
        .unwrap_or(false)
}

/// Report a call-to-action click to Umami.
/// No-op when the tracker is missing (not embedded, or blocked).
pub fn track_action(action: Action) {
    if tracker_loaded() {
        umami_track(action.event_name());
    }
}
