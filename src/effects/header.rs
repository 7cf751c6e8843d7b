use crate::dom;
use crate::error::LandingError;
use web_sys::Document;

pub const HEADER_SELECTOR: &str = ".site-header";
pub const SCROLLED_CLASS: &str = "is-scrolled";

pub fn header_shadowed(scroll_y: f64, offset: f64) -> bool {
    scroll_y > offset
}

pub fn install(document: &Document, offset: f64) -> Result<(), LandingError> {
    let Some(header) = document.query_selector(HEADER_SELECTOR).ok().flatten() else {
        return Ok(());
    };
    let window = web_sys::window().ok_or_else(|| LandingError::Dom("no window".into()))?;

    let scroller = window.clone();
    let update = move || {
        let y = scroller.scroll_y().unwrap_or(0.0);
        let _ = header
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, header_shadowed(y, offset));
    };

    // Page may load already scrolled (reload, anchor link)
    update();
    dom::listen(&window, "scroll", true, move |_| update())
}
