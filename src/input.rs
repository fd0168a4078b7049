use egui::{Pos2, Rect, Response};

/// Pointer input in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Pointer moved onto the canvas
    Enter(Pos2),
    /// Pointer left the canvas
    Leave,
    /// Primary button was pressed over the canvas
    Down(Pos2),
    /// Pointer moved while over the canvas (held or not)
    Move(Pos2),
    /// Primary button was released over the canvas
    Up(Pos2),
}

/// Screen position to canvas-local coordinates. `None` outside the canvas.
pub fn canvas_local(screen: Option<Pos2>, canvas_rect: Rect) -> Option<Pos2> {
    screen
        .filter(|pos| canvas_rect.contains(*pos))
        .map(|pos| (pos - canvas_rect.min).to_pos2())
}

/// Converts raw egui pointer state into `PointerEvent`s for one canvas.
#[derive(Debug, Default)]
pub struct CanvasInput {
    /// Canvas-local position while the pointer is over the canvas
    last_pos: Option<Pos2>,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovering(&self) -> bool {
        self.last_pos.is_some()
    }

    /// Read this frame's pointer state for the canvas widget `response`.
    ///
    /// Hover comes from the response, so a window or popup layered above
    /// the canvas shadows it. Positions are reported relative to the
    /// canvas' top-left corner.
    pub fn process_input(&mut self, response: &Response) -> Vec<PointerEvent> {
        let (pressed, released) = response.ctx.input(|input| {
            (
                input.pointer.primary_pressed(),
                input.pointer.primary_released(),
            )
        });

        let local = canvas_local(response.hover_pos(), response.rect);
        self.collect(local, pressed, released)
    }

    /// Report the pointer as gone, e.g. while a modal owns the input.
    pub fn release(&mut self) -> Vec<PointerEvent> {
        self.collect(None, false, false)
    }

    /// Turn one frame of pointer state into events, in the order the
    /// controller should see them: presence and motion, then press, then
    /// release.
    pub fn collect(&mut self, hover: Option<Pos2>, pressed: bool, released: bool) -> Vec<PointerEvent> {
        let mut events = Vec::new();

        match (self.last_pos, hover) {
            (None, Some(pos)) => events.push(PointerEvent::Enter(pos)),
            (Some(_), None) => events.push(PointerEvent::Leave),
            (Some(last), Some(pos)) if last != pos => events.push(PointerEvent::Move(pos)),
            _ => {}
        }

        if let Some(pos) = hover {
            if pressed {
                events.push(PointerEvent::Down(pos));
            }
            if released {
                events.push(PointerEvent::Up(pos));
            }
        }

        self.last_pos = hover;
        events
    }
}
