const TAP_MS: u32 = 12;

/// Short vibration on devices that support it; ignored elsewhere.
pub fn tap_feedback() {
    if let Some(window) = web_sys::window() {
        let _ = window.navigator().vibrate_with_duration(TAP_MS);
    }
}
