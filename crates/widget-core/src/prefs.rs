//! Persisted UI preferences. Failures here never block the widget.

use crate::ports::ClientStore;

/// Read the open/closed preference. Open when nothing is stored.
pub fn load_open_state(store: &dyn ClientStore, key: &str) -> bool {
    match store.get(key) {
        Ok(Some(value)) => value == "true",
        Ok(None) => true,
        Err(e) => {
            log::warn!("Failed to read open state: {}", e);
            true
        }
    }
}

/// Persist the open/closed preference.
pub fn store_open_state(store: &dyn ClientStore, key: &str, open: bool) {
    let value = if open { "true" } else { "false" };
    if let Err(e) = store.set(key, value, None) {
        log::warn!("Failed to store open state: {}", e);
    }
}
