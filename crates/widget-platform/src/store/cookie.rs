//! Cookie store backend — `document.cookie` with Max-Age expiry.
//! The session token lives here so it is scoped and aged like any other
//! site cookie.

use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;
use widget_core::ports::ClientStore;
use widget_types::{Result, WidgetError};

const SECONDS_PER_DAY: u32 = 86_400;

pub struct CookieStore;

impl CookieStore {
    pub fn new() -> Self {
        Self
    }

    fn document() -> Result<HtmlDocument> {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| WidgetError::Store("no document object".to_string()))
    }
}

impl Default for CookieStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientStore for CookieStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let raw = Self::document()?
            .cookie()
            .map_err(|e| WidgetError::Store(format!("{:?}", e)))?;

        for pair in raw.split(';') {
            let pair = pair.trim();
            if let Some(value) = pair
                .strip_prefix(key)
                .and_then(|rest| rest.strip_prefix('='))
            {
                return Ok(Some(value.to_string()));
            }
        }
        Ok(None)
    }

    fn set(&self, key: &str, value: &str, ttl_days: Option<u32>) -> Result<()> {
        let mut cookie = format!("{}={}; Path=/; SameSite=Lax", key, value);
        if let Some(days) = ttl_days {
            cookie.push_str(&format!("; Max-Age={}", days * SECONDS_PER_DAY));
        }
        Self::document()?
            .set_cookie(&cookie)
            .map_err(|e| WidgetError::Store(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<()> {
        let cookie = format!("{}=; Path=/; Max-Age=0", key);
        Self::document()?
            .set_cookie(&cookie)
            .map_err(|e| WidgetError::Store(format!("{:?}", e)))
    }

    fn backend_name(&self) -> &str {
        "cookie"
    }
}
