use egui::{Color32, Pos2};

use crate::drawable::Drawable;
use crate::surface::Surface;
use crate::tool::ToolState;

/// How the preview looks, derived from the active tool
#[derive(Debug, Clone, PartialEq)]
pub enum CursorShape {
    /// Open circle drawn with the current stroke weight
    Circle { radius: f32, thickness: f32 },
    /// The selected sticker glyph, unrotated
    Glyph { text: String, size: f32 },
}

/// Indicator of where the next stroke or sticker will land.
///
/// Lives only while the pointer hovers the canvas and is never committed
/// to history or exported.
#[derive(Debug, Clone, PartialEq)]
pub struct CursorPreview {
    position: Pos2,
    shape: CursorShape,
    color: Color32,
    radius: f32,
}

impl CursorPreview {
    pub fn new(position: Pos2, tools: &ToolState, radius: f32) -> Self {
        let mut preview = Self {
            position,
            shape: CursorShape::Circle {
                radius,
                thickness: tools.stroke_width(),
            },
            color: tools.ink(),
            radius,
        };
        preview.restyle(tools);
        preview
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn shape(&self) -> &CursorShape {
        &self.shape
    }

    /// Match the preview to the active tool
    pub fn restyle(&mut self, tools: &ToolState) {
        self.color = tools.ink();
        self.shape = match tools.selected_sticker() {
            Some(glyph) => CursorShape::Glyph {
                text: glyph.to_owned(),
                size: tools.sticker_size(),
            },
            None => CursorShape::Circle {
                radius: self.radius,
                thickness: tools.stroke_width(),
            },
        };
    }
}

impl Drawable for CursorPreview {
    fn extend(&mut self, point: Pos2) {
        self.position = point;
    }

    fn render(&self, surface: &mut dyn Surface) {
        match &self.shape {
            CursorShape::Circle { radius, thickness } => {
                surface.stroke_circle(self.position, *radius, *thickness, self.color);
            }
            CursorShape::Glyph { text, size } => {
                surface.draw_glyphs(text, self.position, *size, 0.0, self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SketchpadConfig;
    use crate::tool::Thickness;

    #[test]
    fn test_shape_follows_tool() {
        let mut tools = ToolState::new(&SketchpadConfig::default());
        let mut cursor = CursorPreview::new(Pos2::new(5.0, 5.0), &tools, 10.0);
        assert_eq!(
            cursor.shape(),
            &CursorShape::Circle {
                radius: 10.0,
                thickness: 2.0
            }
        );

        tools.select_sticker("🎃");
        cursor.restyle(&tools);
        assert_eq!(
            cursor.shape(),
            &CursorShape::Glyph {
                text: "🎃".to_owned(),
                size: 32.0
            }
        );

        tools.select_thickness(Thickness::Thick);
        cursor.restyle(&tools);
        assert_eq!(
            cursor.shape(),
            &CursorShape::Circle {
                radius: 10.0,
                thickness: 6.0
            }
        );
    }

    #[test]
    fn test_extend_moves() {
        let tools = ToolState::new(&SketchpadConfig::default());
        let mut cursor = CursorPreview::new(Pos2::new(5.0, 5.0), &tools, 10.0);
        cursor.extend(Pos2::new(30.0, 40.0));
        assert_eq!(cursor.position(), Pos2::new(30.0, 40.0));
    }
}
