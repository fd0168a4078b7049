use log::debug;

use crate::cursor::CursorPreview;
use crate::drawable::Drawable;
use crate::event::Signal;
use crate::history::History;
use crate::surface::RasterSurface;

/// Owns the visible canvas and repaints it from history on every signal.
///
/// Nothing else writes into the visible surface, so each frame reflects
/// the history exactly as it was when the signal was handled.
#[derive(Debug)]
pub struct RenderLoop {
    visible: RasterSurface,
    /// Bumped after every repaint
    version: u64,
}

impl RenderLoop {
    pub fn new(visible: RasterSurface) -> Self {
        Self { visible, version: 0 }
    }

    /// Repaint in response to `signal`
    pub fn handle(&mut self, signal: Signal, history: &History, cursor: Option<&CursorPreview>) {
        match signal {
            Signal::DrawingChanged => self.repaint(history),
            Signal::ToolMoved => {
                self.repaint(history);
                if let Some(cursor) = cursor {
                    cursor.render(&mut self.visible);
                }
            }
        }
        self.version += 1;
        debug!(
            "Handled {} ({} drawables), frame {}",
            signal.name(),
            history.len(),
            self.version
        );
    }

    fn repaint(&mut self, history: &History) {
        history.render_all(&mut self.visible);
    }

    pub fn surface(&self) -> &RasterSurface {
        &self.visible
    }

    /// Frame counter, for consumers that cache the rendered pixels
    pub fn version(&self) -> u64 {
        self.version
    }
}
