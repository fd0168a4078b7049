use thiserror::Error;

/// Errors surfaced by the sketchpad.
///
/// Undo/redo on an empty stack is not an error; those operations are
/// silent no-ops. Everything here is either fatal at startup or reported
/// back to the user from an export attempt.
#[derive(Debug, Error)]
pub enum SketchError {
    #[error("Drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    #[error("Failed to load sticker font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write export: {0}")]
    Io(#[from] std::io::Error),

    #[error("Download failed: {0}")]
    Download(String),
}

/// Result type for sketchpad operations
pub type SketchResult<T> = Result<T, SketchError>;
