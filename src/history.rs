use egui::{Color32, Pos2};
use log::{debug, info};

use crate::drawable::{factory, Drawable, DrawableId, DrawableType};
use crate::surface::Surface;

/// Linear undo/redo history of committed drawables.
///
/// A drawable lives in at most one of the two stacks. Beginning a new
/// drawable discards everything that could have been redone.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Rendered bottom to top in insertion order
    committed: Vec<DrawableType>,
    /// Most recently undone last
    redoable: Vec<DrawableType>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a stroke at `point` and commit it
    pub fn begin_stroke(&mut self, point: Pos2, thickness: f32, color: Color32) -> DrawableId {
        self.begin(factory::create_stroke(point, thickness, color))
    }

    /// Place a sticker at `point` and commit it
    pub fn begin_sticker(&mut self, point: Pos2, glyph: &str, size: f32, color: Color32) -> DrawableId {
        self.begin(factory::create_sticker(point, glyph, size, color))
    }

    fn begin(&mut self, drawable: DrawableType) -> DrawableId {
        let id = drawable.id();
        debug!("Committing {} {}", drawable.kind(), id);
        self.committed.push(drawable);
        if !self.redoable.is_empty() {
            debug!("Discarding {} redoable drawables", self.redoable.len());
            self.redoable.clear();
        }
        id
    }

    /// Extend the committed drawable `id`.
    ///
    /// Returns false when it is no longer committed, e.g. it was undone
    /// mid-gesture.
    pub fn extend(&mut self, id: DrawableId, point: Pos2) -> bool {
        match self.committed.iter_mut().rev().find(|d| d.id() == id) {
            Some(drawable) => {
                drawable.extend(point);
                true
            }
            None => false,
        }
    }

    /// Move the most recent drawable onto the redo stack. No-op when empty.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                info!("Undo {} {}", drawable.kind(), drawable.id());
                self.redoable.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Re-commit the most recently undone drawable on top. No-op when empty.
    pub fn redo(&mut self) -> bool {
        match self.redoable.pop() {
            Some(drawable) => {
                info!("Redo {} {}", drawable.kind(), drawable.id());
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Empty both stacks. Clearing is itself a new action, so nothing
    /// from before it can be redone.
    pub fn clear(&mut self) {
        info!(
            "Clearing history ({} committed, {} redoable)",
            self.committed.len(),
            self.redoable.len()
        );
        self.committed.clear();
        self.redoable.clear();
    }

    /// Clear `surface` and paint every committed drawable in order
    pub fn render_all(&self, surface: &mut dyn Surface) {
        surface.clear();
        for drawable in &self.committed {
            drawable.render(surface);
        }
    }

    pub fn committed(&self) -> &[DrawableType] {
        &self.committed
    }

    pub fn redoable(&self) -> &[DrawableType] {
        &self.redoable
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redoable.is_empty()
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }
}
