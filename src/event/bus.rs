use std::cell::RefCell;

use crate::event::{Signal, SignalHandler};

/// A simple event bus for broadcasting signals to registered handlers
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn SignalHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive signals
    pub fn subscribe(&self, handler: Box<dyn SignalHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit a signal to all registered handlers, in subscription order
    pub fn emit(&self, signal: Signal) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_signal(signal);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}
