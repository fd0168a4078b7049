use std::sync::Arc;

use egui::{Color32, ColorImage, Pos2, Vec2};
use image::{Rgba, RgbaImage};

use super::{GlyphRasterizer, Surface};
use crate::error::{SketchError, SketchResult};
use crate::geometry::{distance_to_line_segment, rotate};

/// Largest width or height, in pixels, a raster surface may have
pub const MAX_PIXEL_EXTENT: u32 = 8192;

/// Software-rendered surface backed by an RGBA image.
///
/// Pixels hold straight (unmultiplied) alpha. Every primitive is first
/// accumulated into a coverage mask and then composited source-over, so
/// overlapping segments of one polyline never double-blend.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    scale: f32,
    glyphs: Arc<GlyphRasterizer>,
}

/// Per-pixel coverage for the part of the image a primitive can touch
struct CoverageMask {
    x0: u32,
    y0: u32,
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl CoverageMask {
    /// Mask over the pixel-space box `min..max`, clipped to the image.
    /// `None` when the box misses the image entirely.
    fn covering(min: Pos2, max: Pos2, image_width: u32, image_height: u32) -> Option<Self> {
        let x0 = min.x.floor().max(0.0);
        let y0 = min.y.floor().max(0.0);
        let x1 = max.x.ceil().min(image_width as f32);
        let y1 = max.y.ceil().min(image_height as f32);
        if !(x1 > x0 && y1 > y0) {
            return None;
        }
        let (width, height) = ((x1 - x0) as u32, (y1 - y0) as u32);
        Some(Self {
            x0: x0 as u32,
            y0: y0 as u32,
            width,
            height,
            data: vec![0.0; (width * height) as usize],
        })
    }

    /// Visit every pixel of the mask whose center lies within `min..max`,
    /// keeping the largest coverage the closure reports.
    fn fill(&mut self, min: Pos2, max: Pos2, mut coverage_at: impl FnMut(Pos2) -> f32) {
        let sx = (min.x.floor().max(self.x0 as f32) as u32).max(self.x0);
        let sy = (min.y.floor().max(self.y0 as f32) as u32).max(self.y0);
        let ex = (max.x.ceil().max(0.0) as u32).min(self.x0 + self.width);
        let ey = (max.y.ceil().max(0.0) as u32).min(self.y0 + self.height);

        for y in sy..ey {
            for x in sx..ex {
                let c = coverage_at(Pos2::new(x as f32 + 0.5, y as f32 + 0.5));
                if c > 0.0 {
                    let cell = &mut self.data[((y - self.y0) * self.width + (x - self.x0)) as usize];
                    *cell = cell.max(c.min(1.0));
                }
            }
        }
    }
}

impl RasterSurface {
    /// Create a transparent surface of `size` canvas units at `scale` pixels
    /// per unit.
    pub fn new(size: Vec2, scale: f32, glyphs: Arc<GlyphRasterizer>) -> SketchResult<Self> {
        if !(scale.is_finite() && scale > 0.0) {
            return Err(SketchError::SurfaceUnavailable(format!("invalid scale {scale}")));
        }
        let width = (size.x * scale).round();
        let height = (size.y * scale).round();
        if !(width >= 1.0 && height >= 1.0)
            || width > MAX_PIXEL_EXTENT as f32
            || height > MAX_PIXEL_EXTENT as f32
        {
            return Err(SketchError::SurfaceUnavailable(format!(
                "cannot allocate a {width}x{height} pixel surface"
            )));
        }

        Ok(Self {
            image: RgbaImage::new(width as u32, height as u32),
            scale,
            glyphs,
        })
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Unmultiplied RGBA of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Copy of the pixels in the form egui uploads as a texture
    pub fn to_color_image(&self) -> ColorImage {
        ColorImage::from_rgba_unmultiplied(
            [self.image.width() as usize, self.image.height() as usize],
            self.image.as_raw(),
        )
    }

    fn to_pixels(&self, p: Pos2) -> Pos2 {
        Pos2::new(p.x * self.scale, p.y * self.scale)
    }

    fn new_mask(&self, min: Pos2, max: Pos2) -> Option<CoverageMask> {
        CoverageMask::covering(min, max, self.image.width(), self.image.height())
    }

    fn composite(&mut self, mask: &CoverageMask, color: Color32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let src_alpha = a as f32 / 255.0;
        if src_alpha <= 0.0 {
            return;
        }

        for my in 0..mask.height {
            for mx in 0..mask.width {
                let coverage = mask.data[(my * mask.width + mx) as usize];
                if coverage <= 0.0 {
                    continue;
                }
                let pixel = self.image.get_pixel_mut(mask.x0 + mx, mask.y0 + my);
                blend(pixel, [r, g, b], src_alpha * coverage);
            }
        }
    }
}

/// Source-over blend of an unmultiplied color onto an unmultiplied pixel
fn blend(dst: &mut Rgba<u8>, src: [u8; 3], src_alpha: f32) {
    let dst_alpha = dst.0[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        dst.0 = [0, 0, 0, 0];
        return;
    }

    for i in 0..3 {
        let s = src[i] as f32;
        let d = dst.0[i] as f32;
        let value = (s * src_alpha + d * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        dst.0[i] = value.round().clamp(0.0, 255.0) as u8;
    }
    dst.0[3] = (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8;
}

impl Surface for RasterSurface {
    fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            pixel.0 = [0, 0, 0, 0];
        }
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, color: Color32) {
        if points.len() < 2 || thickness <= 0.0 {
            return;
        }

        let pixels: Vec<Pos2> = points.iter().map(|p| self.to_pixels(*p)).collect();
        let half = thickness * self.scale / 2.0;
        let reach = Vec2::splat(half + 1.0);

        let bounds = crate::geometry::calculate_bounds(&pixels, 0.0);
        let Some(mut mask) = self.new_mask(bounds.min - reach, bounds.max + reach) else {
            return;
        };

        for segment in pixels.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            if a == b {
                continue;
            }
            mask.fill(a.min(b) - reach, a.max(b) + reach, |p| {
                half + 0.5 - distance_to_line_segment(p, a, b)
            });
        }

        self.composite(&mask, color);
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, thickness: f32, color: Color32) {
        if radius <= 0.0 || thickness <= 0.0 {
            return;
        }

        let c = self.to_pixels(center);
        let r = radius * self.scale;
        let half = thickness * self.scale / 2.0;
        let reach = Vec2::splat(r + half + 1.0);

        let Some(mut mask) = self.new_mask(c - reach, c + reach) else {
            return;
        };
        mask.fill(c - reach, c + reach, |p| half + 0.5 - ((p - c).length() - r).abs());

        self.composite(&mask, color);
    }

    fn draw_glyphs(&mut self, text: &str, center: Pos2, size: f32, rotation: f32, color: Color32) {
        if size <= 0.0 {
            return;
        }
        let Some(bitmap) = self.glyphs.rasterize(text, size * self.scale) else {
            return;
        };

        let c = self.to_pixels(center);
        let extent = Vec2::new(bitmap.width as f32, bitmap.height as f32);
        let corners = [
            bitmap.origin,
            bitmap.origin + Vec2::new(extent.x, 0.0),
            bitmap.origin + Vec2::new(0.0, extent.y),
            bitmap.origin + extent,
        ]
        .map(|corner| c + rotate(corner, rotation));

        let min = corners.iter().fold(Pos2::new(f32::INFINITY, f32::INFINITY), |m, p| m.min(*p));
        let max = corners
            .iter()
            .fold(Pos2::new(f32::NEG_INFINITY, f32::NEG_INFINITY), |m, p| m.max(*p));
        let reach = Vec2::splat(1.0);

        let Some(mut mask) = self.new_mask(min - reach, max + reach) else {
            return;
        };
        mask.fill(min - reach, max + reach, |p| {
            let local = rotate(p - c, -rotation) - bitmap.origin;
            bitmap.sample(local.x - 0.5, local.y - 0.5)
        });

        self.composite(&mask, color);
    }
}
