use serde::{Deserialize, Serialize};

/// localStorage key for the open/closed preference
pub const OPEN_STATE_KEY: &str = "chat_widget:open";

/// Widget configuration.
///
/// Passed explicitly to the composition root — the widget reads no ambient
/// globals. The host page can override the defaults through `data-*`
/// attributes on the canvas element.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WidgetConfig {
    /// Embed identifier assigned by the backend
    pub embed_id: String,
    /// Base URL of the embed API
    pub api_base: String,
    /// Title shown in the panel header
    pub title: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            embed_id: "00000000-0000-0000-0000-000000000000".to_string(),
            api_base: "/api/embed".to_string(),
            title: "Chat".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Cookie key holding the session token for this embed.
    pub fn session_cookie_key(&self) -> String {
        format!("allm_{}_session_id", self.embed_id)
    }

    pub fn history_url(&self, session_id: &str) -> String {
        format!("{}/{}/{}", self.api_base, self.embed_id, session_id)
    }

    pub fn stream_url(&self) -> String {
        format!("{}/{}/stream-chat", self.api_base, self.embed_id)
    }
}
