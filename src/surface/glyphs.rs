use ab_glyph::{point, Font, FontArc, ScaleFont};
use egui::{Rect, Vec2};
use log::debug;

use crate::error::SketchResult;

/// Coverage bitmap of an unrotated glyph run.
#[derive(Debug, Clone)]
pub struct GlyphBitmap {
    pub width: usize,
    pub height: usize,
    /// Row-major coverage in `0.0..=1.0`
    pub coverage: Vec<f32>,
    /// Position of the bitmap's top-left corner relative to the run's center
    pub origin: Vec2,
}

impl GlyphBitmap {
    /// Bilinearly sampled coverage at continuous bitmap coordinates, where
    /// pixel centers sit on integers. Zero outside the bitmap.
    pub fn sample(&self, u: f32, v: f32) -> f32 {
        let x0 = u.floor();
        let y0 = v.floor();
        let fx = u - x0;
        let fy = v - y0;
        let (x0, y0) = (x0 as i64, y0 as i64);

        let top = self.at(x0, y0) * (1.0 - fx) + self.at(x0 + 1, y0) * fx;
        let bottom = self.at(x0, y0 + 1) * (1.0 - fx) + self.at(x0 + 1, y0 + 1) * fx;
        top * (1.0 - fy) + bottom * fy
    }

    fn at(&self, x: i64, y: i64) -> f32 {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return 0.0;
        }
        self.coverage[y as usize * self.width + x as usize]
    }
}

/// Rasterizes sticker text using the fonts bundled with egui.
///
/// Each character is looked up in the faces in order, so plain text comes
/// from Ubuntu and emoji fall through to Noto Emoji.
pub struct GlyphRasterizer {
    faces: Vec<FontArc>,
}

impl std::fmt::Debug for GlyphRasterizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphRasterizer")
            .field("faces", &self.faces.len())
            .finish()
    }
}

impl GlyphRasterizer {
    pub fn with_default_fonts() -> SketchResult<Self> {
        let faces = [
            epaint_default_fonts::UBUNTU_LIGHT,
            epaint_default_fonts::NOTO_EMOJI_REGULAR,
            epaint_default_fonts::EMOJI_ICON,
            epaint_default_fonts::HACK_REGULAR,
        ]
        .into_iter()
        .map(FontArc::try_from_slice)
        .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { faces })
    }

    fn face_for(&self, c: char) -> Option<&FontArc> {
        self.faces.iter().find(|face| face.glyph_id(c).0 != 0)
    }

    /// Returns true if every non-whitespace character of `text` has a glyph
    pub fn supports(&self, text: &str) -> bool {
        text.chars()
            .filter(|c| !c.is_whitespace())
            .all(|c| self.face_for(c).is_some())
    }

    /// Lay out `text` on a single line at `px_size` and rasterize it.
    ///
    /// Returns `None` when nothing in the run has an outline.
    pub fn rasterize(&self, text: &str, px_size: f32) -> Option<GlyphBitmap> {
        let mut pen_x = 0.0;
        let mut ascent: f32 = 0.0;
        let mut descent: f32 = 0.0;
        let mut outlines = Vec::new();

        for c in text.chars() {
            let Some(face) = self.face_for(c) else {
                debug!("No glyph for {c:?}, skipping");
                continue;
            };
            let scaled = face.as_scaled(px_size);
            let id = face.glyph_id(c);
            ascent = ascent.max(scaled.ascent());
            descent = descent.min(scaled.descent());

            let glyph = id.with_scale_and_position(px_size, point(pen_x, 0.0));
            if let Some(outlined) = face.outline_glyph(glyph) {
                outlines.push(outlined);
            }
            pen_x += scaled.h_advance(id);
        }

        if outlines.is_empty() {
            return None;
        }

        let mut bounds = Rect::NOTHING;
        for outlined in &outlines {
            let b = outlined.px_bounds();
            bounds = bounds.union(Rect::from_min_max(
                egui::pos2(b.min.x, b.min.y),
                egui::pos2(b.max.x, b.max.y),
            ));
        }

        let min_x = bounds.min.x.floor();
        let min_y = bounds.min.y.floor();
        let width = (bounds.max.x.ceil() - min_x).max(1.0) as usize;
        let height = (bounds.max.y.ceil() - min_y).max(1.0) as usize;
        let mut coverage = vec![0.0_f32; width * height];

        for outlined in &outlines {
            let b = outlined.px_bounds();
            let off_x = (b.min.x - min_x) as i64;
            let off_y = (b.min.y - min_y) as i64;
            outlined.draw(|x, y, c| {
                let bx = off_x + x as i64;
                let by = off_y + y as i64;
                if bx >= 0 && by >= 0 && (bx as usize) < width && (by as usize) < height {
                    let cell = &mut coverage[by as usize * width + bx as usize];
                    *cell = cell.max(c.clamp(0.0, 1.0));
                }
            });
        }

        // The baseline sits at y = 0, so the line box spans -ascent..-descent.
        let center = Vec2::new(pen_x / 2.0, -(ascent + descent) / 2.0);

        Some(GlyphBitmap {
            width,
            height,
            coverage,
            origin: Vec2::new(min_x, min_y) - center,
        })
    }
}
