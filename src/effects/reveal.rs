use crate::dom;
use crate::error::LandingError;
use wasm_bindgen::prelude::*;
use web_sys::{
    Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

pub const REVEAL_SELECTOR: &str = ".reveal, .card, .hero";
pub const REVEALED_CLASS: &str = "is-revealed";

fn reveal(el: &Element) {
    let _ = el.class_list().add_1(REVEALED_CLASS);
}

/// Fade elements in the first time they scroll into view. Browsers without
/// `IntersectionObserver` get everything revealed up front.
pub fn install(document: &Document, threshold: f64) {
    let targets = dom::query_all(document, REVEAL_SELECTOR);
    if targets.is_empty() {
        return;
    }

    match observer(threshold) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
        }
        Err(e) => {
            log::debug!("IntersectionObserver unavailable ({e}), revealing immediately");
            targets.iter().for_each(reveal);
        }
    }
}

fn observer(threshold: f64) -> Result<IntersectionObserver, LandingError> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target);
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    options.set_root_margin("0px 0px -40px 0px");

    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}
