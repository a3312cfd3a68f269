//! Session identity — one stable token per browser, kept in a cookie.

use widget_types::Result;
use crate::ports::ClientStore;

/// Cookie retention window for the session token
pub const SESSION_TTL_DAYS: u32 = 7;

/// Result of session initialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionHandle {
    pub id: String,
    /// Fresh sessions have no server-side history to load
    pub is_new: bool,
}

/// Look up the persisted session token, minting and storing a fresh one
/// when absent. A browser keeps the same token until the cookie expires.
pub fn init_session(store: &dyn ClientStore, cookie_key: &str) -> Result<SessionHandle> {
    if let Some(existing) = store.get(cookie_key)? {
        log::debug!("Reusing session {}", existing);
        return Ok(SessionHandle {
            id: existing,
            is_new: false,
        });
    }

    let id = uuid::Uuid::new_v4().to_string();
    store.set(cookie_key, &id, Some(SESSION_TTL_DAYS))?;
    log::debug!("Minted session {}", id);
    Ok(SessionHandle { id, is_new: true })
}

/// A session that lives only as long as the page — used when the cookie
/// store is unavailable. Marked new so no history load is attempted.
pub fn transient_session() -> SessionHandle {
    SessionHandle {
        id: uuid::Uuid::new_v4().to_string(),
        is_new: true,
    }
}
