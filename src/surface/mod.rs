use egui::{Color32, Pos2};

mod glyphs;
mod raster;

pub use glyphs::{GlyphBitmap, GlyphRasterizer};
pub use raster::{RasterSurface, MAX_PIXEL_EXTENT};

/// A destination that drawables can render themselves onto.
///
/// All coordinates and sizes are in canvas units. An implementation maps
/// them onto its own resolution, so the same drawable renders identically
/// (up to scale) on the visible canvas and on an upscaled export.
pub trait Surface {
    /// Reset the whole surface to transparent
    fn clear(&mut self);

    /// Draw a connected polyline through `points` with round joins and caps.
    ///
    /// Zero-length segments contribute nothing, so a single point (or any run
    /// of identical points) leaves no visible mark.
    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32);

    /// Draw the outline of a circle
    fn stroke_circle(&mut self, center: Pos2, radius: f32, thickness: f32, color: Color32);

    /// Draw a run of glyphs centered at `center`, rotated about it by
    /// `rotation` radians (clockwise, in screen orientation).
    fn draw_glyphs(&mut self, text: &str, center: Pos2, size: f32, rotation: f32, color: Color32);
}
