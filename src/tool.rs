use egui::Color32;
use log::info;

use crate::config::SketchpadConfig;

/// Discrete stroke weights offered by the toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Thickness {
    Thin,
    Thick,
}

impl Thickness {
    pub const ALL: [Thickness; 2] = [Thickness::Thin, Thickness::Thick];

    pub fn label(self) -> &'static str {
        match self {
            Thickness::Thin => "Thin",
            Thickness::Thick => "Thick",
        }
    }
}

/// What a pointer press on the canvas creates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolMode {
    /// Draw freehand strokes
    Line,
    /// Stamp the selected glyph
    Sticker(String),
}

/// Current tool selection. Exactly one mode is active at a time: picking a
/// sticker stops line drawing and picking a thickness goes back to lines.
#[derive(Debug, Clone)]
pub struct ToolState {
    thickness: Thickness,
    mode: ToolMode,
    stickers: Vec<String>,
    thin_width: f32,
    thick_width: f32,
    sticker_size: f32,
    ink: Color32,
}

impl ToolState {
    pub fn new(config: &SketchpadConfig) -> Self {
        Self {
            thickness: Thickness::Thin,
            mode: ToolMode::Line,
            stickers: config.stickers.clone(),
            thin_width: config.thin_thickness,
            thick_width: config.thick_thickness,
            sticker_size: config.sticker_size,
            ink: config.ink_color(),
        }
    }

    pub fn thickness(&self) -> Thickness {
        self.thickness
    }

    /// Line weight, in canvas units, of the current thickness
    pub fn stroke_width(&self) -> f32 {
        match self.thickness {
            Thickness::Thin => self.thin_width,
            Thickness::Thick => self.thick_width,
        }
    }

    pub fn mode(&self) -> &ToolMode {
        &self.mode
    }

    /// The glyph a press would stamp, if a sticker is active
    pub fn selected_sticker(&self) -> Option<&str> {
        match &self.mode {
            ToolMode::Sticker(glyph) => Some(glyph),
            ToolMode::Line => None,
        }
    }

    pub fn stickers(&self) -> &[String] {
        &self.stickers
    }

    pub fn sticker_size(&self) -> f32 {
        self.sticker_size
    }

    pub fn ink(&self) -> Color32 {
        self.ink
    }

    /// Select a stroke weight and switch to line drawing
    pub fn select_thickness(&mut self, thickness: Thickness) {
        self.thickness = thickness;
        self.mode = ToolMode::Line;
    }

    /// Switch to stamping `glyph`
    pub fn select_sticker(&mut self, glyph: &str) {
        self.mode = ToolMode::Sticker(glyph.to_owned());
    }

    /// Add a user-entered glyph to the palette and select it.
    ///
    /// Surrounding whitespace is trimmed; blank input is rejected. A glyph
    /// already in the palette is selected without being added twice.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        let glyph = text.trim();
        if glyph.is_empty() {
            return false;
        }
        if !self.stickers.iter().any(|s| s == glyph) {
            info!("Adding custom sticker {glyph:?}");
            self.stickers.push(glyph.to_owned());
        }
        self.select_sticker(glyph);
        true
    }
}
