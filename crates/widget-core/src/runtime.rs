//! Widget runtime — drives a send through the transport port and publishes
//! events for the UI to fold into the transcript.
//!
//! All methods run on the single browser execution context; callers spawn
//! them via `wasm_bindgen_futures::spawn_local`. At most one send is in
//! flight at a time because the send affordance is disabled while a reply
//! is streaming.

use futures::StreamExt;
use widget_types::{event::WidgetEvent, wire::StreamRequest};
use crate::event_bus::EventBus;
use crate::ports::{ChatTransport, StreamEvent};

pub struct WidgetRuntime {
    session_id: String,
    bus: EventBus,
}

impl WidgetRuntime {
    pub fn new(session_id: String, bus: EventBus) -> Self {
        Self { session_id, bus }
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Fetch the prior transcript for this session.
    ///
    /// Failure is non-fatal and silent to the end user: the transcript is
    /// left untouched and a warning is logged.
    pub async fn load_history(&self, transport: &dyn ChatTransport) {
        match transport.fetch_history(&self.session_id).await {
            Ok(entries) => self.bus.emit(WidgetEvent::HistoryLoaded { entries }),
            Err(e) => log::warn!("Failed to load history: {}", e),
        }
    }

    /// Submit a draft and fold the streamed reply into events.
    ///
    /// Empty and whitespace-only drafts are a no-op: no request is issued.
    /// A stream error ends the turn without a `StreamEnd`; whatever text
    /// already arrived stays in the transcript.
    pub async fn send(&self, draft: &str, transport: &dyn ChatTransport) {
        let message = draft.trim();
        if message.is_empty() {
            return;
        }

        self.bus.emit(WidgetEvent::StreamStart);

        let mut stream = transport.stream_chat(StreamRequest::new(message, &self.session_id));
        while let Some(event) = stream.next().await {
            match event {
                StreamEvent::Delta(text) => {
                    self.bus.emit(WidgetEvent::AssistantDelta { text });
                }
                StreamEvent::Done => break,
                StreamEvent::Error(message) => {
                    log::error!("Chat stream failed: {}", message);
                    self.bus.emit(WidgetEvent::StreamError { message });
                    return;
                }
            }
        }

        self.bus.emit(WidgetEvent::StreamEnd);
    }
}
