//! Event bus between the widget runtime and the UI.
//!
//! Single-threaded (WASM constraint), interior mutability via RefCell.
//! The runtime buffers events here; the UI drains them once per frame.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;
use widget_types::event::WidgetEvent;

/// Shared event bus — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<VecDeque<WidgetEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    /// Publish an event. Called by the runtime.
    pub fn emit(&self, event: WidgetEvent) {
        self.inner.borrow_mut().push_back(event);
    }

    /// Drain all pending events. Called by the UI layer each frame.
    pub fn drain(&self) -> Vec<WidgetEvent> {
        self.inner.borrow_mut().drain(..).collect()
    }

    /// Check if there are pending events (useful for repaint triggers).
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().is_empty()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
