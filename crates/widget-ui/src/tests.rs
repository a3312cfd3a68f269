#[cfg(test)]
mod tests {
    use crate::state::UiState;
    use widget_types::entry::{Entry, Role};
    use widget_types::event::WidgetEvent;

    fn delta(text: &str) -> WidgetEvent {
        WidgetEvent::AssistantDelta {
            text: text.to_string(),
        }
    }

    // ─── UiState Tests ───────────────────────────────────────

    #[test]
    fn test_ui_state_initial() {
        let state = UiState::new(true);
        assert!(state.transcript.is_empty());
        assert!(state.input_text.is_empty());
        assert!(state.open);
        assert!(!state.is_busy());
        assert!(!state.awaiting_reply());
        assert!(state.status_text.is_empty());
    }

    #[test]
    fn test_ui_state_starts_closed_when_preferred() {
        let state = UiState::new(false);
        assert!(!state.open);
    }

    #[test]
    fn test_push_user_entry() {
        let mut state = UiState::new(true);
        state.push_user_entry("hello");
        assert_eq!(state.transcript, vec![Entry::user("hello")]);
    }

    #[test]
    fn test_history_loaded_replaces_transcript() {
        let mut state = UiState::new(true);
        state.process_events(vec![WidgetEvent::HistoryLoaded {
            entries: vec![Entry::user("hi"), Entry::assistant("hello")],
        }]);

        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript[0].role, Role::User);
        assert_eq!(state.transcript[1].role, Role::Assistant);
    }

    #[test]
    fn test_stream_start_sets_busy() {
        let mut state = UiState::new(true);
        state.process_events(vec![WidgetEvent::StreamStart]);
        assert!(state.is_busy());
        assert!(state.awaiting_reply());
    }

    #[test]
    fn test_two_deltas_make_one_entry() {
        let mut state = UiState::new(true);
        state.push_user_entry("hi");
        state.process_events(vec![
            WidgetEvent::StreamStart,
            delta("Hel"),
            delta("lo"),
            WidgetEvent::StreamEnd,
        ]);

        // Exactly one new assistant entry holding the cumulative text
        assert_eq!(state.transcript.len(), 2);
        assert_eq!(state.transcript[1], Entry::assistant("Hello"));
        assert!(!state.is_busy());
    }

    #[test]
    fn test_first_delta_clears_typing_indicator() {
        let mut state = UiState::new(true);
        state.process_events(vec![WidgetEvent::StreamStart]);
        assert!(state.awaiting_reply());

        state.process_events(vec![delta("H")]);
        assert!(!state.awaiting_reply());
        assert!(state.is_busy());
    }

    #[test]
    fn test_consecutive_turns_get_separate_entries() {
        let mut state = UiState::new(true);
        state.push_user_entry("one");
        state.process_events(vec![
            WidgetEvent::StreamStart,
            delta("first"),
            WidgetEvent::StreamEnd,
        ]);
        state.push_user_entry("two");
        state.process_events(vec![
            WidgetEvent::StreamStart,
            delta("second"),
            WidgetEvent::StreamEnd,
        ]);

        assert_eq!(state.transcript.len(), 4);
        assert_eq!(state.transcript[1], Entry::assistant("first"));
        assert_eq!(state.transcript[3], Entry::assistant("second"));
    }

    #[test]
    fn test_stream_error_clears_busy_and_keeps_text() {
        let mut state = UiState::new(true);
        state.push_user_entry("hi");
        state.process_events(vec![
            WidgetEvent::StreamStart,
            delta("par"),
            WidgetEvent::StreamError {
                message: "connection reset".to_string(),
            },
        ]);

        assert!(!state.is_busy());
        assert_eq!(state.status_text, "connection reset");
        assert_eq!(state.transcript[1], Entry::assistant("par"));
    }

    #[test]
    fn test_stream_error_before_any_delta() {
        let mut state = UiState::new(true);
        state.push_user_entry("hi");
        state.process_events(vec![
            WidgetEvent::StreamStart,
            WidgetEvent::StreamError {
                message: "HTTP 500: oops".to_string(),
            },
        ]);

        // No assistant entry appears, the indicator does not stick
        assert_eq!(state.transcript.len(), 1);
        assert!(!state.is_busy());
        assert!(!state.awaiting_reply());
    }

    #[test]
    fn test_next_send_clears_previous_error() {
        let mut state = UiState::new(true);
        state.process_events(vec![
            WidgetEvent::StreamStart,
            WidgetEvent::StreamError {
                message: "boom".to_string(),
            },
        ]);
        assert!(!state.status_text.is_empty());

        state.process_events(vec![WidgetEvent::StreamStart]);
        assert!(state.status_text.is_empty());
    }

    // ─── Send gating ─────────────────────────────────────────

    #[test]
    fn test_can_send_requires_nonblank_draft() {
        let mut state = UiState::new(true);
        assert!(!state.can_send());

        state.input_text = "   \t ".to_string();
        assert!(!state.can_send());

        state.input_text = "hello".to_string();
        assert!(state.can_send());
    }

    #[test]
    fn test_can_send_blocked_while_streaming() {
        let mut state = UiState::new(true);
        state.input_text = "hello".to_string();
        state.process_events(vec![WidgetEvent::StreamStart]);
        assert!(!state.can_send());

        state.process_events(vec![WidgetEvent::StreamEnd]);
        assert!(state.can_send());
    }
}
