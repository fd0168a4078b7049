use egui::{Color32, Pos2, Rect, Vec2};

use super::{Drawable, DrawableId};
use crate::surface::Surface;

/// Radians of rotation per canvas unit of horizontal drag
pub const ROTATION_PER_UNIT: f32 = 0.02;

/// A glyph stamped onto the canvas.
///
/// The anchor is fixed where the pointer went down; dragging sideways
/// spins the sticker around it. Vertical motion has no effect.
#[derive(Debug, Clone, PartialEq)]
pub struct Sticker {
    id: DrawableId,
    anchor: Pos2,
    glyph: String,
    size: f32,
    rotation: f32,
    color: Color32,
}

impl Sticker {
    pub fn new(id: DrawableId, anchor: Pos2, glyph: &str, size: f32, color: Color32) -> Self {
        Self {
            id,
            anchor,
            glyph: glyph.to_owned(),
            size,
            rotation: 0.0,
            color,
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    pub fn anchor(&self) -> Pos2 {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Square around the anchor that holds the glyph at any rotation
    pub fn bounds(&self) -> Rect {
        let chars = self.glyph.chars().count().max(1) as f32;
        let extent = self.size * chars * std::f32::consts::SQRT_2;
        Rect::from_center_size(self.anchor, Vec2::splat(extent))
    }
}

impl Drawable for Sticker {
    fn extend(&mut self, point: Pos2) {
        self.rotation = (point.x - self.anchor.x) * ROTATION_PER_UNIT;
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.draw_glyphs(&self.glyph, self.anchor, self.size, self.rotation, self.color);
    }
}
