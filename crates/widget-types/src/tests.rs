#[cfg(test)]
mod tests {
    use crate::config::*;
    use crate::entry::*;
    use crate::error::*;
    use crate::wire::*;

    // ─── Entry Tests ─────────────────────────────────────────

    #[test]
    fn test_entry_user() {
        let entry = Entry::user("hi");
        assert_eq!(entry.role, Role::User);
        assert_eq!(entry.text, "hi");
    }

    #[test]
    fn test_entry_assistant() {
        let entry = Entry::assistant("hello");
        assert_eq!(entry.role, Role::Assistant);
        assert_eq!(entry.text, "hello");
    }

    #[test]
    fn test_role_serialization() {
        let json = serde_json::to_string(&Role::User).unwrap();
        assert_eq!(json, r#""user""#);

        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
    }

    #[test]
    fn test_entry_serialization_roundtrip() {
        let entry = Entry::user("test input");
        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: Entry = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, entry);
    }

    // ─── History Mapping Tests ───────────────────────────────

    #[test]
    fn test_history_wrapped_response() {
        let json = r#"{"history":[{"role":"user","content":"hi"},{"role":"assistant","content":"hello"}]}"#;
        let response: HistoryResponse = serde_json::from_str(json).unwrap();
        let entries = response.into_entries();
        assert_eq!(
            entries,
            vec![Entry::user("hi"), Entry::assistant("hello")]
        );
    }

    #[test]
    fn test_history_bare_array() {
        let json = r#"[{"role":"user","content":"one"},{"role":"assistant","content":"two"}]"#;
        let response: HistoryResponse = serde_json::from_str(json).unwrap();
        let entries = response.into_entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].role, Role::User);
        assert_eq!(entries[1].role, Role::Assistant);
    }

    #[test]
    fn test_history_unknown_role_dropped() {
        let json = r#"[{"role":"system","content":"secret"},{"role":"user","content":"hi"}]"#;
        let response: HistoryResponse = serde_json::from_str(json).unwrap();
        let entries = response.into_entries();
        assert_eq!(entries, vec![Entry::user("hi")]);
    }

    #[test]
    fn test_history_legacy_query_marker() {
        let json = r#"[{"type":"query","content":"an answer"}]"#;
        let response: HistoryResponse = serde_json::from_str(json).unwrap();
        let entries = response.into_entries();
        assert_eq!(entries, vec![Entry::assistant("an answer")]);
    }

    #[test]
    fn test_history_role_wins_over_legacy_marker() {
        // A record carrying both shapes maps by role first
        let json = r#"[{"role":"user","type":"query","content":"hi"}]"#;
        let response: HistoryResponse = serde_json::from_str(json).unwrap();
        let entries = response.into_entries();
        assert_eq!(entries, vec![Entry::user("hi")]);
    }

    #[test]
    fn test_history_empty_array() {
        let response: HistoryResponse = serde_json::from_str("[]").unwrap();
        assert!(response.into_entries().is_empty());
    }

    // ─── StreamRequest Tests ─────────────────────────────────

    #[test]
    fn test_stream_request_body_shape() {
        let req = StreamRequest::new("hello", "session-1");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["message"], "hello");
        assert_eq!(value["sessionId"], "session-1");
        // Overrides are always present and null
        assert!(value["username"].is_null());
        assert!(value["prompt"].is_null());
        assert!(value["model"].is_null());
        assert!(value["temperature"].is_null());
    }

    // ─── StreamFrame Tests ───────────────────────────────────

    #[test]
    fn test_frame_incremental_text() {
        let frame: StreamFrame =
            serde_json::from_str(r#"{"type":"textResponseChunk","textResponse":"Hel"}"#).unwrap();
        assert_eq!(frame.incremental_text(), Some("Hel"));
    }

    #[test]
    fn test_frame_other_type_ignored() {
        let frame: StreamFrame =
            serde_json::from_str(r#"{"type":"finalizeResponseStream","close":true}"#).unwrap();
        assert_eq!(frame.incremental_text(), None);
    }

    #[test]
    fn test_frame_empty_payload_ignored() {
        let frame: StreamFrame =
            serde_json::from_str(r#"{"type":"textResponseChunk","textResponse":""}"#).unwrap();
        assert_eq!(frame.incremental_text(), None);
    }

    #[test]
    fn test_frame_missing_payload_ignored() {
        let frame: StreamFrame =
            serde_json::from_str(r#"{"type":"textResponseChunk"}"#).unwrap();
        assert_eq!(frame.incremental_text(), None);
    }

    // ─── Config Tests ────────────────────────────────────────

    #[test]
    fn test_config_urls() {
        let config = WidgetConfig {
            embed_id: "abc".to_string(),
            api_base: "https://chat.example.net/api/embed".to_string(),
            title: "Chat".to_string(),
        };
        assert_eq!(
            config.history_url("s1"),
            "https://chat.example.net/api/embed/abc/s1"
        );
        assert_eq!(
            config.stream_url(),
            "https://chat.example.net/api/embed/abc/stream-chat"
        );
        assert_eq!(config.session_cookie_key(), "allm_abc_session_id");
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let config = WidgetConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: WidgetConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.api_base, config.api_base);
        assert_eq!(deserialized.title, config.title);
    }

    // ─── Error Tests ─────────────────────────────────────────

    #[test]
    fn test_error_display() {
        let err = WidgetError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "Network error: connection refused");

        let err = WidgetError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 404: not found");

        let err = WidgetError::Store("no document".to_string());
        assert_eq!(err.to_string(), "Store error: no document");
    }

    #[test]
    fn test_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{{invalid}}").unwrap_err();
        let err: WidgetError = serde_err.into();
        assert!(matches!(err, WidgetError::Serialization(_)));
    }
}
