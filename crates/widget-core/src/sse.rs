//! Incremental decoding of the `data:`-prefixed frame protocol.
//!
//! The response body arrives as arbitrary text chunks: one chunk may hold
//! several newline-separated lines, and a line may be split across two
//! chunks. The decoder carries the trailing partial line between pushes so
//! a frame is only parsed once its line is complete.

use widget_types::wire::StreamFrame;

const FRAME_PREFIX: &str = "data:";

#[derive(Debug, Default)]
pub struct SseDecoder {
    carry: String,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one decoded text chunk; returns the frames it completed.
    pub fn push(&mut self, chunk: &str) -> Vec<StreamFrame> {
        self.carry.push_str(chunk);

        let mut frames = Vec::new();
        while let Some(pos) = self.carry.find('\n') {
            let line: String = self.carry.drain(..=pos).collect();
            if let Some(frame) = parse_line(line.trim_end_matches(['\n', '\r'])) {
                frames.push(frame);
            }
        }
        frames
    }

    /// Flush the trailing line once the stream has ended.
    pub fn finish(&mut self) -> Option<StreamFrame> {
        let line = std::mem::take(&mut self.carry);
        parse_line(line.trim_end_matches('\r'))
    }
}

/// Only lines carrying the frame prefix are frames; everything else is
/// inter-frame noise. A malformed frame is skipped, not fatal.
fn parse_line(line: &str) -> Option<StreamFrame> {
    let payload = line.strip_prefix(FRAME_PREFIX)?.trim_start();
    if payload.is_empty() {
        return None;
    }
    match serde_json::from_str(payload) {
        Ok(frame) => Some(frame),
        Err(e) => {
            log::warn!("Skipping malformed frame: {}", e);
            None
        }
    }
}
