use egui::{Context, TextureHandle, TextureId, TextureOptions};

use crate::renderer::RenderLoop;

/// GPU copy of the visible canvas, re-uploaded only when the render loop
/// has produced a new frame.
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    /// Render loop version of the uploaded pixels
    uploaded: Option<u64>,
}

impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("has_handle", &self.handle.is_some())
            .field("uploaded", &self.uploaded)
            .finish()
    }
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload the latest frame if it changed and return the texture to draw
    pub fn sync(&mut self, ctx: &Context, render_loop: &RenderLoop) -> TextureId {
        let version = render_loop.version();
        if let (Some(handle), Some(uploaded)) = (&self.handle, self.uploaded) {
            if uploaded == version {
                return handle.id();
            }
        }

        let image = render_loop.surface().to_color_image();
        let handle = match self.handle.take() {
            Some(mut handle) => {
                handle.set(image, TextureOptions::LINEAR);
                handle
            }
            None => ctx.load_texture("sketchpad_canvas", image, TextureOptions::LINEAR),
        };
        let id = handle.id();
        self.handle = Some(handle);
        self.uploaded = Some(version);
        id
    }

    /// Render loop version currently on the GPU
    pub fn uploaded_version(&self) -> Option<u64> {
        self.uploaded
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Signal;
    use crate::history::History;
    use crate::surface::{GlyphRasterizer, RasterSurface};
    use egui::Vec2;
    use std::sync::Arc;

    #[test]
    fn test_uploads_only_new_frames() {
        let ctx = Context::default();
        let glyphs = Arc::new(GlyphRasterizer::with_default_fonts().unwrap());
        let mut render_loop =
            RenderLoop::new(RasterSurface::new(Vec2::splat(8.0), 1.0, glyphs).unwrap());
        let mut texture = CanvasTexture::new();

        let first = texture.sync(&ctx, &render_loop);
        assert_eq!(texture.uploaded_version(), Some(0));
        assert_eq!(texture.sync(&ctx, &render_loop), first);

        render_loop.handle(Signal::DrawingChanged, &History::new(), None);
        let second = texture.sync(&ctx, &render_loop);
        assert_eq!(texture.uploaded_version(), Some(1));
        // The same texture is updated in place
        assert_eq!(first, second);
    }
}
