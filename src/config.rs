use egui::{Color32, Vec2};
use serde::{Deserialize, Serialize};

use crate::error::{SketchError, SketchResult};

/// Stickers offered before the user adds any of their own.
pub const DEFAULT_STICKERS: [&str; 3] = ["🐔", "🌽", "🎃"];

/// Tunable settings for a sketchpad session.
///
/// Everything is in canvas units unless noted. Missing fields fall back to
/// their defaults when deserializing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchpadConfig {
    /// Width and height of the working canvas
    pub canvas_size: [u32; 2],
    /// Line weight used by the "Thin" tool
    pub thin_thickness: f32,
    /// Line weight used by the "Thick" tool
    pub thick_thickness: f32,
    /// Radius of the circular cursor preview in line mode
    pub cursor_radius: f32,
    /// Glyph size for placed stickers and their preview
    pub sticker_size: f32,
    /// Initial sticker palette
    pub stickers: Vec<String>,
    /// Color of strokes and stickers, unmultiplied RGBA
    pub ink: [u8; 4],
    /// Pixels per canvas unit in exported images
    pub export_scale: u32,
    pub export_file_name: String,
}

impl Default for SketchpadConfig {
    fn default() -> Self {
        Self {
            canvas_size: [256, 256],
            thin_thickness: 2.0,
            thick_thickness: 6.0,
            cursor_radius: 10.0,
            sticker_size: 32.0,
            stickers: DEFAULT_STICKERS.iter().map(|s| s.to_string()).collect(),
            ink: [0, 0, 0, 255],
            export_scale: 4,
            export_file_name: "sketchpad.png".to_owned(),
        }
    }
}

impl SketchpadConfig {
    /// Parse a configuration from JSON and validate it
    pub fn from_json(json: &str) -> SketchResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SketchResult<()> {
        if self.canvas_size[0] == 0 || self.canvas_size[1] == 0 {
            return Err(SketchError::Config(format!(
                "canvas size must be non-zero, got {}x{}",
                self.canvas_size[0], self.canvas_size[1]
            )));
        }
        for (name, value) in [
            ("thin_thickness", self.thin_thickness),
            ("thick_thickness", self.thick_thickness),
            ("cursor_radius", self.cursor_radius),
            ("sticker_size", self.sticker_size),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(SketchError::Config(format!("{name} must be positive, got {value}")));
            }
        }
        if self.export_scale == 0 {
            return Err(SketchError::Config("export_scale must be at least 1".to_owned()));
        }
        if self.export_file_name.trim().is_empty() {
            return Err(SketchError::Config("export_file_name is empty".to_owned()));
        }
        Ok(())
    }

    pub fn canvas_vec(&self) -> Vec2 {
        Vec2::new(self.canvas_size[0] as f32, self.canvas_size[1] as f32)
    }

    pub fn ink_color(&self) -> Color32 {
        let [r, g, b, a] = self.ink;
        Color32::from_rgba_unmultiplied(r, g, b, a)
    }
}
