use crate::dom;
use crate::error::LandingError;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, FocusOptions, HtmlElement, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

const IN_PAGE_LINK: &str = "a[href^='#']";

/// The element id an in-page `href` points at. A bare `#` points nowhere.
pub fn fragment_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    (!id.is_empty()).then_some(id)
}

/// Scroll `#id` into view and move keyboard focus to it.
///
/// Returns `false` when no such element exists, so callers can let the
/// browser handle the event instead.
pub fn focus_section(document: &Document, id: &str, reduced_motion: bool) -> bool {
    let Some(target) = document.get_element_by_id(id) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(if reduced_motion {
        ScrollBehavior::Auto
    } else {
        ScrollBehavior::Smooth
    });
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);

    if let Ok(el) = target.dyn_into::<HtmlElement>() {
        // Sections are not focusable by default
        if !el.has_attribute("tabindex") {
            let _ = el.set_attribute("tabindex", "-1");
        }
        let focus = FocusOptions::new();
        focus.set_prevent_scroll(true);
        let _ = el.focus_with_options(&focus);
    }
    true
}

pub fn install(document: &Document, reduced_motion: bool) -> Result<(), LandingError> {
    let doc = document.clone();
    dom::listen(document, "click", false, move |ev| {
        let Some(anchor) = dom::event_element(&ev).and_then(|el| dom::closest(&el, IN_PAGE_LINK))
        else {
            return;
        };
        let Some(href) = anchor.get_attribute("href") else {
            return;
        };
        let Some(id) = fragment_id(&href) else {
            return;
        };
        if focus_section(&doc, id, reduced_motion) {
            ev.prevent_default();
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_id() {
        assert_eq!(fragment_id("#store"), Some("store"));
        assert_eq!(fragment_id("#top"), Some("top"));
        assert_eq!(fragment_id("#"), None);
        assert_eq!(fragment_id(""), None);
        assert_eq!(fragment_id("/about#team"), None);
    }
}
