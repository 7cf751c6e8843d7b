use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong on the page. None of it is fatal: callers log
/// the error and skip the effect.
#[derive(Debug, Error)]
pub enum LandingError {
    #[error("localStorage is unavailable")]
    StorageUnavailable,

    #[error("storage write failed: {0}")]
    Storage(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),

    #[error("invalid landing config: {0}")]
    Config(#[from] serde_json::Error),
}

impl From<JsValue> for LandingError {
    fn from(value: JsValue) -> Self {
        let message = value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}"));
        LandingError::Dom(message)
    }
}

/// Log a non-fatal failure and drop it.
pub fn report(context: &str, result: Result<(), LandingError>) {
    if let Err(err) = result {
        log::warn!("{context}: {err}");
    }
}
