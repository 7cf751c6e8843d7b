use crate::error::LandingError;
use std::cell::RefCell;
use std::collections::HashMap;

pub const BARGAIN_CLICKS_KEY: &str = "bargain_clicks";
pub const LAST_ACTION_KEY: &str = "last_action";

/// String key-value persistence. Implemented by `LocalStore` in the browser and
/// by `MemoryStore` everywhere else.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), LandingError>;
}

/// Browser `localStorage`.
///
/// Holds `None` when storage cannot be reached, which happens:
/// - outside a browser environment
/// - when localStorage is disabled (some private browsing modes)
/// - on a SecurityError (e.g. a sandboxed third-party iframe)
///
/// Reads then behave as if every key were missing and writes fail with
/// `LandingError::StorageUnavailable`.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            // Expected in private mode, not worth a warning
            log::debug!("localStorage unavailable, counters will not persist");
        }
        Self { storage }
    }
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        let storage = self.storage.as_ref().ok_or(LandingError::StorageUnavailable)?;
        storage.set_item(key, value).map_err(|_| {
            LandingError::Storage(format!(
                "could not write `{key}` (quota exceeded or storage blocked)"
            ))
        })
    }
}

/// In-memory store used by tests and as a stand-in when nothing should persist.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let store = Self::new();
        store.entries.borrow_mut().extend(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        );
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LandingError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Parse a stored counter. Missing, non-numeric and negative values read as 0.
pub fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.trim().parse::<u64>().ok()).unwrap_or(0)
}
