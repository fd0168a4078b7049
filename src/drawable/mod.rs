use egui::{Pos2, Rect};
use uuid::Uuid;

use crate::surface::Surface;

pub(crate) mod sticker;
pub(crate) mod stroke;

pub use sticker::{Sticker, ROTATION_PER_UNIT};
pub use stroke::Stroke;

/// Stable handle to a drawable, kept across undo and redo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DrawableId(Uuid);

impl DrawableId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DrawableId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for DrawableId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Common contract of everything that can be painted onto a surface
pub trait Drawable {
    /// Feed the next pointer position while the pointer is held.
    ///
    /// Repeating a point is harmless.
    fn extend(&mut self, point: Pos2);

    /// Paint the current state at absolute canvas coordinates.
    ///
    /// Never mutates the drawable, so it may be called any number of times.
    fn render(&self, surface: &mut dyn Surface);
}

/// The drawables that can be committed to history
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableType {
    Stroke(Stroke),
    Sticker(Sticker),
}

impl DrawableType {
    pub fn id(&self) -> DrawableId {
        match self {
            DrawableType::Stroke(s) => s.id(),
            DrawableType::Sticker(s) => s.id(),
        }
    }

    /// Get the drawable kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            DrawableType::Stroke(_) => "stroke",
            DrawableType::Sticker(_) => "sticker",
        }
    }

    /// Area the drawable may paint into
    pub fn bounds(&self) -> Rect {
        match self {
            DrawableType::Stroke(s) => s.bounds(),
            DrawableType::Sticker(s) => s.bounds(),
        }
    }

    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            DrawableType::Stroke(s) => Some(s),
            DrawableType::Sticker(_) => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            DrawableType::Sticker(s) => Some(s),
            DrawableType::Stroke(_) => None,
        }
    }
}

impl Drawable for DrawableType {
    fn extend(&mut self, point: Pos2) {
        match self {
            DrawableType::Stroke(s) => s.extend(point),
            DrawableType::Sticker(s) => s.extend(point),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            DrawableType::Stroke(s) => s.render(surface),
            DrawableType::Sticker(s) => s.render(surface),
        }
    }
}

/// Factory functions for creating drawables
pub mod factory {
    use super::*;
    use egui::Color32;

    /// Create a stroke that starts at `start`
    pub fn create_stroke(start: Pos2, thickness: f32, color: Color32) -> DrawableType {
        DrawableType::Stroke(Stroke::new(DrawableId::new(), vec![start], thickness, color))
    }

    /// Create an unrotated sticker anchored at `anchor`
    pub fn create_sticker(anchor: Pos2, glyph: &str, size: f32, color: Color32) -> DrawableType {
        DrawableType::Sticker(Sticker::new(DrawableId::new(), anchor, glyph, size, color))
    }
}
