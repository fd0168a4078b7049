#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod config;
pub mod cursor;
pub mod drawable;
pub mod error;
pub mod event;
pub mod export;
pub mod geometry;
pub mod history;
pub mod input;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod surface;
pub mod texture;
pub mod tool;

pub use app::SketchpadApp;
pub use config::SketchpadConfig;
pub use cursor::CursorPreview;
pub use drawable::{Drawable, DrawableId, DrawableType};
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, Signal, SignalHandler};
pub use history::History;
pub use input::{CanvasInput, PointerEvent};
pub use renderer::RenderLoop;
pub use sketchpad::Sketchpad;
pub use state::PointerState;
pub use surface::{RasterSurface, Surface};
pub use tool::{Thickness, ToolMode, ToolState};
