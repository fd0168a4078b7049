//! Pointer interaction state machine for the canvas.
//!
//! ```text
//!              pointer-down
//!   ┌──────┐ ───────────────► ┌─────────┐ ◄──┐
//!   │ Idle │                  │ Drawing │    │ pointer-move
//!   └──────┘ ◄─────────────── └─────────┘ ───┘
//!            pointer-up / leave
//! ```
//!
//! Hovering is tracked separately by the presence of a cursor preview and
//! is orthogonal to these states.

use crate::drawable::DrawableId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PointerState {
    /// No gesture in progress
    #[default]
    Idle,
    /// The pointer is held and feeding the given drawable
    Drawing(DrawableId),
}

impl PointerState {
    /// Returns true if the editor is currently in an idle state
    pub fn is_idle(&self) -> bool {
        matches!(self, PointerState::Idle)
    }

    /// Returns true if a gesture is in progress
    pub fn is_drawing(&self) -> bool {
        matches!(self, PointerState::Drawing(_))
    }

    /// The drawable receiving pointer moves, if any
    pub fn current(&self) -> Option<DrawableId> {
        match self {
            PointerState::Drawing(id) => Some(*id),
            PointerState::Idle => None,
        }
    }

    /// Release the current drawable and return to idle. The drawable itself
    /// stays committed.
    pub fn finish(&mut self) -> Option<DrawableId> {
        std::mem::take(self).current()
    }
}
