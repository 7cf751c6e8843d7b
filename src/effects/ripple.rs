use crate::dom;
use crate::error::{report, LandingError};
use crate::geometry::{Point, Rect};
use crate::timer::{BrowserScheduler, Scheduler};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent};

const BUTTON_SELECTOR: &str = ".btn";

/// Size and offset of a ripple, relative to its button.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    pub fn style(&self) -> String {
        format!(
            "width:{size}px;height:{size}px;left:{left}px;top:{top}px",
            size = self.size,
            left = self.left,
            top = self.top
        )
    }
}

/// Where a click on `button` happened. Keyboard activation has no pointer
/// position and falls back to the button centre.
pub fn click_origin(button: Rect, click: Option<Point>) -> Point {
    click.unwrap_or(Point::new(
        button.left + button.width / 2.0,
        button.top + button.height / 2.0,
    ))
}

/// A circle wide enough to cover the button, centred on the click.
pub fn ripple_geometry(button: Rect, click: Option<Point>) -> RippleGeometry {
    let size = button.width.max(button.height);
    let click = click_origin(button, click);
    RippleGeometry {
        size,
        left: click.x - button.left - size / 2.0,
        top: click.y - button.top - size / 2.0,
    }
}

pub fn install(document: &Document, duration_ms: u32) -> Result<(), LandingError> {
    let doc = document.clone();
    dom::listen(document, "click", true, move |ev| {
        let Some(mouse) = ev.dyn_ref::<MouseEvent>() else {
            return;
        };
        let Some(button) = dom::event_element(&ev).and_then(|el| dom::closest(&el, BUTTON_SELECTOR))
        else {
            return;
        };
        // detail is the click count; 0 means keyboard or synthetic
        let click = (mouse.detail() > 0)
            .then(|| Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())));
        report("ripple", spawn(&doc, &button, click, duration_ms));
    })
}

fn spawn(
    document: &Document,
    button: &Element,
    click: Option<Point>,
    duration_ms: u32,
) -> Result<(), LandingError> {
    let geometry = ripple_geometry(Rect::from_dom(&button.get_bounding_client_rect()), click);
    let ripple = document.create_element("span")?;
    ripple.set_class_name("ripple");
    ripple.set_attribute("aria-hidden", "true")?;
    ripple.set_attribute("style", &geometry.style())?;
    button.append_child(&ripple)?;

    BrowserScheduler.schedule(duration_ms, Box::new(move || ripple.remove()));
    Ok(())
}
