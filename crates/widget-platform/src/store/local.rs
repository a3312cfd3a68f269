//! localStorage store backend.
//! Persistent across page reloads; no expiry notion, so TTLs are ignored.

use widget_core::ports::ClientStore;
use widget_types::{Result, WidgetError};

pub struct LocalStore {
    storage: web_sys::Storage,
}

impl LocalStore {
    pub fn new() -> Result<Self> {
        let storage = web_sys::window()
            .ok_or_else(|| WidgetError::Store("no window object".to_string()))?
            .local_storage()
            .map_err(|e| WidgetError::Store(format!("{:?}", e)))?
            .ok_or_else(|| WidgetError::Store("localStorage not available".to_string()))?;
        Ok(Self { storage })
    }
}

impl ClientStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|e| WidgetError::Store(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str, _ttl_days: Option<u32>) -> Result<()> {
        self.storage
            .set_item(key, value)
            .map_err(|e| WidgetError::Store(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.storage
            .remove_item(key)
            .map_err(|e| WidgetError::Store(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "localstorage"
    }
}
