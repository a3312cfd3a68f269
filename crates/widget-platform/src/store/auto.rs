//! Pick the best available preference store.
//!
//! Priority: localStorage → Memory (fallback).
//! Some embedding contexts (sandboxed iframes, privacy modes) deny
//! localStorage; the widget still works, just without persistence.

use std::rc::Rc;
use widget_core::ports::ClientStore;
use super::{LocalStore, MemoryStore};

/// Open the best available store.
/// Returns a trait object so callers are backend-agnostic.
pub fn auto_detect_store() -> Rc<dyn ClientStore> {
    match LocalStore::new() {
        Ok(local) => {
            log::info!("Preference store: localStorage");
            Rc::new(local)
        }
        Err(e) => {
            log::warn!("localStorage unavailable ({}), falling back to memory", e);
            Rc::new(MemoryStore::new())
        }
    }
}
