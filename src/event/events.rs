/// Change notifications that drive repainting of the visible canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// The committed drawables changed: one was begun, extended, undone,
    /// redone, or the history was cleared.
    DrawingChanged,
    /// The cursor preview moved, appeared, disappeared, or the active tool
    /// changed.
    ToolMoved,
}

impl Signal {
    pub fn name(self) -> &'static str {
        match self {
            Signal::DrawingChanged => "drawing-changed",
            Signal::ToolMoved => "tool-moved",
        }
    }
}
