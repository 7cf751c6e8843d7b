use crate::error::LandingError;
use crate::toast::{DEFAULT_EXIT_MS, DEFAULT_TIMEOUT_MS};
use serde::Deserialize;

/// Id of the optional `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "landing-config";

/// Upper bound on particles per burst, whatever the page asks for.
pub const MAX_CONFETTI_PARTICLES: usize = 500;

/// Page tunables. Every field is optional in the JSON block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub toast_timeout_ms: i32,
    pub toast_exit_ms: u32,
    /// Scroll distance (px) past which the header gets its shadow
    pub header_shadow_offset: f64,
    pub reveal_threshold: f64,
    pub ripple_ms: u32,
    pub tilt_max_deg: f64,
    pub confetti_particles: usize,
    pub confetti_ms: f64,
    pub store_section_id: String,
    pub bargain_message: String,
    pub buy_message: String,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            toast_timeout_ms: DEFAULT_TIMEOUT_MS,
            toast_exit_ms: DEFAULT_EXIT_MS,
            header_shadow_offset: 8.0,
            reveal_threshold: 0.15,
            ripple_ms: 600,
            tilt_max_deg: 8.0,
            confetti_particles: 80,
            confetti_ms: 1400.0,
            store_section_id: "store".to_string(),
            bargain_message: "Offer sent! We'll see what we can do.".to_string(),
            buy_message: "Great pick! It's waiting in the store.".to_string(),
        }
    }
}

impl LandingConfig {
    pub fn from_json(json: &str) -> Result<Self, LandingError> {
        let mut config: Self = serde_json::from_str(json)?;
        if config.confetti_particles > MAX_CONFETTI_PARTICLES {
            log::warn!(
                "confetti_particles {} capped at {MAX_CONFETTI_PARTICLES}",
                config.confetti_particles
            );
            config.confetti_particles = MAX_CONFETTI_PARTICLES;
        }
        Ok(config)
    }

    /// Read overrides from the page, falling back to defaults when the block
    /// is missing or malformed.
    pub fn from_page() -> Self {
        let Some(raw) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        Self::from_json(&raw).unwrap_or_else(|e| {
            log::warn!("Ignoring #{CONFIG_ELEMENT_ID}, using defaults: {e}");
            Self::default()
        })
    }
}
