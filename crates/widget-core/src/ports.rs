//! Port traits — the hexagonal architecture boundary.
//!
//! These traits are defined here in `widget-core` (pure Rust).
//! Implementations live in `widget-platform` (browser adapters).
//! The core never imports platform code; it only depends on these traits.

use std::pin::Pin;
use async_trait::async_trait;
use futures::Stream;
use widget_types::{entry::Entry, wire::StreamRequest, Result};

// ─── Chat Transport Port ─────────────────────────────────────

/// Event from the streaming chat transport
#[derive(Debug, Clone)]
pub enum StreamEvent {
    /// A decoded incremental text payload
    Delta(String),
    /// Stream finished
    Done,
    /// Error during connect or mid-stream
    Error(String),
}

#[async_trait(?Send)]
pub trait ChatTransport {
    /// One-shot fetch of the prior transcript for a session.
    async fn fetch_history(&self, session_id: &str) -> Result<Vec<Entry>>;

    /// Issue a send and read the response incrementally — returns a stream
    /// of decoded events.
    fn stream_chat(&self, req: StreamRequest) -> Pin<Box<dyn Stream<Item = StreamEvent>>>;
}

// ─── Client Store Port ───────────────────────────────────────

/// Key/value persistence for client-side state (cookie, localStorage).
///
/// Synchronous on purpose: every backing browser API here is synchronous.
pub trait ClientStore {
    /// Get a value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Persist a value. `ttl_days` is honored by stores with an expiry
    /// notion (cookies) and ignored by the rest.
    fn set(&self, key: &str, value: &str, ttl_days: Option<u32>) -> Result<()>;

    /// Delete a value
    fn remove(&self, key: &str) -> Result<()>;

    /// Name of this backend (for logging/debug)
    fn backend_name(&self) -> &str;
}
