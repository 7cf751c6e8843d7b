use crate::dom;
use crate::error::LandingError;
use crate::geometry::{Point, Rect};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, PointerEvent};

pub const TILT_SELECTOR: &str = "[data-tilt]";

/// `(rotate_x, rotate_y)` in degrees for a pointer over `card`. The card leans
/// toward the pointer; each axis is bounded by `max_deg`.
pub fn tilt_angles(card: Rect, pointer: Point, max_deg: f64) -> (f64, f64) {
    let p = card.normalize(pointer);
    let rotate_x = (0.5 - p.y) * 2.0 * max_deg;
    let rotate_y = (p.x - 0.5) * 2.0 * max_deg;
    (rotate_x, rotate_y)
}

pub fn tilt_transform(rotate_x: f64, rotate_y: f64) -> String {
    format!("perspective(800px) rotateX({rotate_x:.2}deg) rotateY({rotate_y:.2}deg)")
}

pub fn install(document: &Document, max_deg: f64) -> Result<(), LandingError> {
    for card in dom::query_all(document, TILT_SELECTOR) {
        let Ok(card) = card.dyn_into::<HtmlElement>() else {
            continue;
        };

        let moving = card.clone();
        dom::listen(&card, "pointermove", true, move |ev| {
            let Some(pointer) = ev.dyn_ref::<PointerEvent>() else {
                return;
            };
            if pointer.pointer_type() == "touch" {
                return;
            }
            let rect = Rect::from_dom(&moving.get_bounding_client_rect());
            let at = Point::new(f64::from(pointer.client_x()), f64::from(pointer.client_y()));
            let (rx, ry) = tilt_angles(rect, at, max_deg);
            let _ = moving.style().set_property("transform", &tilt_transform(rx, ry));
        })?;

        let leaving = card.clone();
        dom::listen(&card, "pointerleave", true, move |_| {
            let _ = leaving.style().remove_property("transform");
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: Rect = Rect {
        left: 0.0,
        top: 0.0,
        width: 200.0,
        height: 100.0,
    };

    #[test]
    fn test_centre_is_flat() {
        assert_eq!(tilt_angles(CARD, Point::new(100.0, 50.0), 8.0), (0.0, 0.0));
    }

    #[test]
    fn test_corners_hit_the_bound() {
        assert_eq!(tilt_angles(CARD, Point::new(0.0, 0.0), 8.0), (8.0, -8.0));
        assert_eq!(tilt_angles(CARD, Point::new(200.0, 100.0), 8.0), (-8.0, 8.0));
    }

    #[test]
    fn test_pointer_outside_card_is_clamped() {
        let (rx, ry) = tilt_angles(CARD, Point::new(-500.0, 900.0), 10.0);
        assert_eq!((rx, ry), (-10.0, -10.0));
    }

    #[test]
    fn test_transform_string() {
        assert_eq!(
            tilt_transform(4.0, -2.126),
            "perspective(800px) rotateX(4.00deg) rotateY(-2.13deg)"
        );
    }
}
