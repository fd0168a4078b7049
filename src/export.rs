use std::io::Cursor;
use std::sync::Arc;

use egui::Vec2;
use image::{ImageFormat, RgbaImage};
use log::info;

use crate::error::SketchResult;
use crate::history::History;
use crate::surface::{GlyphRasterizer, RasterSurface};

/// Render the committed drawables onto a fresh surface `scale` times the
/// canvas resolution. The cursor preview is never part of an export.
pub fn rasterize(
    history: &History,
    canvas_size: Vec2,
    scale: u32,
    glyphs: Arc<GlyphRasterizer>,
) -> SketchResult<RasterSurface> {
    let mut surface = RasterSurface::new(canvas_size, scale as f32, glyphs)?;
    history.render_all(&mut surface);
    Ok(surface)
}

/// Encode an image as PNG bytes
pub fn encode_png(image: &RgbaImage) -> SketchResult<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Hand the encoded image to the user: written to the working directory
/// natively. Returns a short status message.
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(bytes: &[u8], file_name: &str) -> SketchResult<String> {
    std::fs::write(file_name, bytes)?;
    info!("Exported {} bytes to {}", bytes.len(), file_name);
    Ok(format!("Saved {file_name}"))
}

/// Hand the encoded image to the user: offered as a browser download.
/// Returns a short status message.
#[cfg(target_arch = "wasm32")]
pub fn deliver(bytes: &[u8], file_name: &str) -> SketchResult<String> {
    use crate::error::SketchError;
    use eframe::wasm_bindgen::JsCast as _;

    let js_err = |err: eframe::wasm_bindgen::JsValue| SketchError::Download(format!("{err:?}"));

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(bytes));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("image/png");
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| SketchError::Download("no document".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| SketchError::Download("anchor is not an HtmlAnchorElement".to_owned()))?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();
    web_sys::Url::revoke_object_url(&url).map_err(js_err)?;

    info!("Offered {} bytes as {}", bytes.len(), file_name);
    Ok(format!("Downloaded {file_name}"))
}
