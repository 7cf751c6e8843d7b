//! Decorative effects. Each one looks up its own elements and quietly does
//! nothing when they are absent.

mod confetti;
mod header;
mod reveal;
mod ripple;
mod scroll;
mod tilt;
mod year;

pub use confetti::{burst, Burst, Particle};
pub use header::{header_shadowed, SCROLLED_CLASS};
pub use reveal::{REVEALED_CLASS, REVEAL_SELECTOR};
pub use ripple::{click_origin, ripple_geometry, RippleGeometry};
pub use scroll::{focus_section, fragment_id};
pub use tilt::{tilt_angles, tilt_transform, TILT_SELECTOR};

use crate::config::LandingConfig;
use crate::dom;
use crate::error::report;

/// Wire every effect against the current document. Call once, after the page
/// markup is mounted.
pub fn install(config: &LandingConfig, reduced_motion: bool) {
    let Some(document) = dom::document() else {
        return;
    };

    year::stamp(&document);
    report(
        "header shadow",
        header::install(&document, config.header_shadow_offset),
    );
    report("smooth scroll", scroll::install(&document, reduced_motion));
    reveal::install(&document, config.reveal_threshold);

    if !reduced_motion {
        report("ripple", ripple::install(&document, config.ripple_ms));
        report("tilt", tilt::install(&document, config.tilt_max_deg));
    }

    log::debug!("Effects installed (reduced motion: {reduced_motion})");
}
