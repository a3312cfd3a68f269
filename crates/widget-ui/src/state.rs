//! UI-level state that drives rendering — the fold of widget events into
//! the displayed transcript, updated each frame by draining the event bus.

use widget_types::entry::Entry;
use widget_types::event::WidgetEvent;

/// State visible to UI panels
pub struct UiState {
    /// Displayed transcript (user + assistant entries)
    pub transcript: Vec<Entry>,
    /// Input field content
    pub input_text: String,
    /// A send is in flight and the reply has not finished
    pub streaming: bool,
    /// Whether the panel is open (launcher hidden)
    pub open: bool,
    /// Status line; empty unless the last stream failed
    pub status_text: String,
    /// The streamed reply already has its entry in the transcript
    reply_started: bool,
}

impl UiState {
    pub fn new(open: bool) -> Self {
        Self {
            transcript: Vec::new(),
            input_text: String::new(),
            streaming: false,
            open,
            status_text: String::new(),
            reply_started: false,
        }
    }

    /// Fold events from the event bus into the displayed transcript.
    pub fn process_events(&mut self, events: Vec<WidgetEvent>) {
        for event in events {
            match event {
                WidgetEvent::HistoryLoaded { entries } => {
                    // Fires once at mount, before any send can happen
                    self.transcript = entries;
                }
                WidgetEvent::StreamStart => {
                    self.streaming = true;
                    self.reply_started = false;
                    self.status_text.clear();
                }
                WidgetEvent::AssistantDelta { text } => {
                    if self.reply_started {
                        // The last entry is the reply; keep it equal to the
                        // cumulative buffer
                        if let Some(last) = self.transcript.last_mut() {
                            last.text.push_str(&text);
                        }
                    } else {
                        self.transcript.push(Entry::assistant(text));
                        self.reply_started = true;
                    }
                }
                WidgetEvent::StreamEnd => {
                    self.streaming = false;
                }
                WidgetEvent::StreamError { message } => {
                    // Text already streamed stays; the indicator must not stick
                    self.streaming = false;
                    self.status_text = message;
                }
            }
        }
    }

    /// Add the submitted draft to the display
    pub fn push_user_entry(&mut self, text: &str) {
        self.transcript.push(Entry::user(text));
    }

    /// The typing indicator shows from send until the first delta
    pub fn awaiting_reply(&self) -> bool {
        self.streaming && !self.reply_started
    }

    pub fn is_busy(&self) -> bool {
        self.streaming
    }

    /// Submission is gated on a non-blank draft and no send in flight
    pub fn can_send(&self) -> bool {
        !self.input_text.trim().is_empty() && !self.streaming
    }
}
