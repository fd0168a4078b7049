use std::sync::Arc;

use log::{debug, info, warn};

use crate::config::SketchpadConfig;
use crate::cursor::CursorPreview;
use crate::drawable::Drawable;
use crate::error::SketchResult;
use crate::event::{EventBus, Signal, SignalHandler};
use crate::export;
use crate::history::History;
use crate::input::PointerEvent;
use crate::renderer::RenderLoop;
use crate::state::PointerState;
use crate::surface::{GlyphRasterizer, RasterSurface};
use crate::tool::{Thickness, ToolMode, ToolState};

/// The drawing pad: history, tools, cursor preview and the visible canvas.
///
/// Every mutation announces itself with a [`Signal`]. The render loop
/// handles the signal synchronously before the call returns, then bus
/// subscribers are notified, so callers always observe a canvas that
/// matches the history.
#[derive(Debug)]
pub struct Sketchpad {
    config: SketchpadConfig,
    history: History,
    tools: ToolState,
    cursor: Option<CursorPreview>,
    pointer: PointerState,
    render_loop: RenderLoop,
    event_bus: EventBus,
    glyphs: Arc<GlyphRasterizer>,
}

impl Sketchpad {
    /// Create a sketchpad with an empty, painted canvas.
    ///
    /// Fails if the configuration is invalid, the sticker fonts cannot be
    /// loaded, or the canvas cannot be allocated.
    pub fn new(config: SketchpadConfig) -> SketchResult<Self> {
        config.validate()?;
        let glyphs = Arc::new(GlyphRasterizer::with_default_fonts()?);
        let visible = RasterSurface::new(config.canvas_vec(), 1.0, Arc::clone(&glyphs))?;

        let mut pad = Self {
            tools: ToolState::new(&config),
            config,
            history: History::new(),
            cursor: None,
            pointer: PointerState::Idle,
            render_loop: RenderLoop::new(visible),
            event_bus: EventBus::new(),
            glyphs,
        };
        pad.emit(Signal::DrawingChanged);
        Ok(pad)
    }

    pub fn config(&self) -> &SketchpadConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolState {
        &self.tools
    }

    pub fn cursor(&self) -> Option<&CursorPreview> {
        self.cursor.as_ref()
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    /// The pixels currently on screen
    pub fn visible(&self) -> &RasterSurface {
        self.render_loop.surface()
    }

    /// Register an observer for every signal emitted from now on
    pub fn subscribe(&self, handler: Box<dyn SignalHandler>) {
        self.event_bus.subscribe(handler);
    }

    fn emit(&mut self, signal: Signal) {
        self.render_loop.handle(signal, &self.history, self.cursor.as_ref());
        self.event_bus.emit(signal);
    }

    /// Drive the pointer state machine with one input event
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Enter(pos) => {
                self.cursor = Some(CursorPreview::new(pos, &self.tools, self.config.cursor_radius));
                self.emit(Signal::ToolMoved);
            }
            PointerEvent::Leave => {
                self.cursor = None;
                if let Some(id) = self.pointer.finish() {
                    debug!("Pointer left mid-gesture, keeping {id}");
                }
                self.emit(Signal::ToolMoved);
            }
            PointerEvent::Down(pos) => {
                if self.pointer.is_drawing() {
                    return;
                }
                let id = match self.tools.mode() {
                    ToolMode::Line => {
                        self.history
                            .begin_stroke(pos, self.tools.stroke_width(), self.tools.ink())
                    }
                    ToolMode::Sticker(glyph) => self.history.begin_sticker(
                        pos,
                        glyph,
                        self.tools.sticker_size(),
                        self.tools.ink(),
                    ),
                };
                self.pointer = PointerState::Drawing(id);
                self.emit(Signal::DrawingChanged);
                self.move_cursor(pos);
            }
            PointerEvent::Move(pos) => {
                if let Some(id) = self.pointer.current() {
                    if self.history.extend(id, pos) {
                        self.emit(Signal::DrawingChanged);
                    } else {
                        debug!("{id} is no longer committed, ending gesture");
                        self.pointer = PointerState::Idle;
                    }
                }
                self.move_cursor(pos);
            }
            PointerEvent::Up(_) => {
                if let Some(id) = self.pointer.finish() {
                    debug!("Finished {id}");
                }
            }
        }
    }

    fn move_cursor(&mut self, pos: egui::Pos2) {
        if let Some(cursor) = &mut self.cursor {
            cursor.extend(pos);
            self.emit(Signal::ToolMoved);
        }
    }

    /// Remove every drawable; nothing can be redone afterwards
    pub fn clear(&mut self) {
        self.history.clear();
        self.pointer.finish();
        self.emit(Signal::DrawingChanged);
    }

    /// Undo the most recent drawable. Returns false if there was none.
    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo();
        if changed {
            self.emit(Signal::DrawingChanged);
        }
        changed
    }

    /// Redo the most recently undone drawable. Returns false if there was none.
    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo();
        if changed {
            self.emit(Signal::DrawingChanged);
        }
        changed
    }

    pub fn select_thickness(&mut self, thickness: Thickness) {
        info!("Selected {} line", thickness.label());
        self.tools.select_thickness(thickness);
        self.tool_changed();
    }

    pub fn select_sticker(&mut self, glyph: &str) {
        info!("Selected sticker {glyph:?}");
        self.tools.select_sticker(glyph);
        self.tool_changed();
    }

    /// Add a glyph typed by the user to the palette and select it.
    /// Blank input is ignored and returns false.
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        if !self.glyphs.supports(text) {
            warn!("No bundled font covers all of {:?}, parts will not render", text.trim());
        }
        let added = self.tools.add_custom_sticker(text);
        if added {
            self.tool_changed();
        }
        added
    }

    fn tool_changed(&mut self) {
        if let Some(cursor) = &mut self.cursor {
            cursor.restyle(&self.tools);
        }
        self.emit(Signal::ToolMoved);
    }

    /// Render the committed drawables at export resolution
    pub fn render_export(&self) -> SketchResult<RasterSurface> {
        export::rasterize(
            &self.history,
            self.config.canvas_vec(),
            self.config.export_scale,
            Arc::clone(&self.glyphs),
        )
    }

    /// Render at export resolution and encode as PNG
    pub fn export_png(&self) -> SketchResult<Vec<u8>> {
        let surface = self.render_export()?;
        export::encode_png(surface.image())
    }

    /// Export and deliver the PNG under the configured file name
    pub fn export(&self) -> SketchResult<String> {
        let bytes = self.export_png()?;
        export::deliver(&bytes, &self.config.export_file_name)
    }
}
