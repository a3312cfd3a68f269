use serde::{Deserialize, Serialize};
use crate::entry::Entry;

/// Events published by the widget runtime.
/// The UI folds these into the displayed transcript each frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum WidgetEvent {
    /// Prior transcript fetched for an existing session
    HistoryLoaded { entries: Vec<Entry> },

    /// A send was issued; a reply is now expected
    StreamStart,

    /// Incremental assistant text from the response stream
    AssistantDelta { text: String },

    /// The response stream finished
    StreamEnd,

    /// The stream failed — text already received stays in the transcript
    StreamError { message: String },
}
