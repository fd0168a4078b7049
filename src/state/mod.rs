mod pointer_state;

pub use pointer_state::PointerState;
