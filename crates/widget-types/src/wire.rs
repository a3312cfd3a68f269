//! Wire shapes spoken with the embed backend.

use serde::{Deserialize, Serialize};
use crate::entry::{Entry, Role};

// ─── History ─────────────────────────────────────────────────

/// One record returned by the history endpoint.
///
/// Newer backends tag records with `role`; older ones mark assistant turns
/// with `"type": "query"` instead.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryRecord {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub content: String,
}

impl HistoryRecord {
    /// Map a server record into a display entry.
    /// Records with an unrecognized role are dropped.
    pub fn into_entry(self) -> Option<Entry> {
        match self.role.as_deref() {
            Some("user") => Some(Entry {
                role: Role::User,
                text: self.content,
            }),
            Some("assistant") => Some(Entry {
                role: Role::Assistant,
                text: self.content,
            }),
            _ if self.kind.as_deref() == Some("query") => Some(Entry {
                role: Role::Assistant,
                text: self.content,
            }),
            _ => None,
        }
    }
}

/// The history endpoint returns either a bare array of records or an object
/// wrapping the same under `history`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum HistoryResponse {
    Wrapped { history: Vec<HistoryRecord> },
    Bare(Vec<HistoryRecord>),
}

impl HistoryResponse {
    pub fn into_entries(self) -> Vec<Entry> {
        let records = match self {
            HistoryResponse::Wrapped { history } => history,
            HistoryResponse::Bare(records) => records,
        };
        records
            .into_iter()
            .filter_map(HistoryRecord::into_entry)
            .collect()
    }
}

// ─── Streaming chat ──────────────────────────────────────────

/// Request body for the stream-chat endpoint.
///
/// The backend accepts per-request overrides for username, prompt, model and
/// temperature; this client always sends them as `null`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamRequest {
    pub message: String,
    pub session_id: String,
    pub username: Option<String>,
    pub prompt: Option<String>,
    pub model: Option<String>,
    pub temperature: Option<f32>,
}

impl StreamRequest {
    pub fn new(message: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            session_id: session_id.into(),
            username: None,
            prompt: None,
            model: None,
            temperature: None,
        }
    }
}

/// Frame type carrying incremental assistant text.
pub const TEXT_RESPONSE_CHUNK: &str = "textResponseChunk";

/// One `data:`-prefixed JSON frame from the stream-chat response body.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamFrame {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(rename = "textResponse", default)]
    pub text_response: Option<String>,
}

impl StreamFrame {
    /// The incremental text payload, when this frame carries one.
    /// Frames of other types, and chunk frames with an empty payload,
    /// are received and ignored.
    pub fn incremental_text(&self) -> Option<&str> {
        if self.kind != TEXT_RESPONSE_CHUNK {
            return None;
        }
        match self.text_response.as_deref() {
            Some(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}
