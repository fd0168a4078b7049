mod bus;
mod events;

pub use bus::EventBus;
pub use events::Signal;

/// Observer of sketchpad signals
pub trait SignalHandler {
    fn handle_signal(&mut self, signal: Signal);
}

impl<F: FnMut(Signal)> SignalHandler for F {
    fn handle_signal(&mut self, signal: Signal) {
        self(signal)
    }
}
