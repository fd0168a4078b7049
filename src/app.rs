use egui::{Color32, CursorIcon, Rect, RichText};
use log::{error, warn};

use crate::config::SketchpadConfig;
use crate::error::{SketchError, SketchResult};
use crate::input::CanvasInput;
use crate::sketchpad::Sketchpad;
use crate::texture::CanvasTexture;
use crate::tool::{Thickness, ToolMode};

pub const TITLE: &str = "Sticker Sketchpad";

/// The eframe shell around a [`Sketchpad`]: canvas widget, toolbar and the
/// custom-sticker prompt.
pub struct SketchpadApp {
    sketchpad: Sketchpad,
    input: CanvasInput,
    texture: CanvasTexture,
    /// Text of the custom sticker prompt while it is open
    custom_sticker: Option<String>,
    /// Outcome of the last export
    status: Option<String>,
}

impl SketchpadApp {
    /// Called once before the first frame.
    ///
    /// Without a GL context nothing could ever be shown, so that is
    /// reported as a startup failure instead of running a dead canvas.
    pub fn new(cc: &eframe::CreationContext<'_>) -> SketchResult<Self> {
        if cc.gl.is_none() {
            return Err(SketchError::SurfaceUnavailable(
                "no OpenGL context available".to_owned(),
            ));
        }
        Self::with_config(SketchpadConfig::default())
    }

    pub fn with_config(config: SketchpadConfig) -> SketchResult<Self> {
        Ok(Self {
            sketchpad: Sketchpad::new(config)?,
            input: CanvasInput::new(),
            texture: CanvasTexture::new(),
            custom_sticker: None,
            status: None,
        })
    }

    pub fn sketchpad(&self) -> &Sketchpad {
        &self.sketchpad
    }

    fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let size = self.sketchpad.config().canvas_vec();
        let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click_and_drag());

        // The custom sticker prompt is modal
        let events = if self.custom_sticker.is_some() {
            self.input.release()
        } else {
            self.input.process_input(&response)
        };
        for event in events {
            self.sketchpad.handle_pointer(event);
        }

        let texture_id = self.texture.sync(ui.ctx(), self.sketchpad.render_loop());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, 0.0, Color32::WHITE);
        painter.image(
            texture_id,
            rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );
        painter.rect_stroke(rect, 0.0, egui::Stroke::new(1.0, Color32::GRAY));

        // The preview replaces the system cursor over the canvas
        if self.input.is_hovering() {
            ui.ctx().set_cursor_icon(CursorIcon::None);
        }
    }

    fn actions_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Clear").clicked() {
                self.sketchpad.clear();
            }

            let can_undo = self.sketchpad.history().can_undo();
            let can_redo = self.sketchpad.history().can_redo();
            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                self.sketchpad.undo();
            }
            if ui.add_enabled(can_redo, egui::Button::new("Redo")).clicked() {
                self.sketchpad.redo();
            }

            if ui.button("Export").clicked() {
                self.status = Some(match self.sketchpad.export() {
                    Ok(message) => message,
                    Err(err) => {
                        error!("Export failed: {err}");
                        format!("Export failed: {err}")
                    }
                });
            }
        });
    }

    fn tools_ui(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let line_mode = *self.sketchpad.tools().mode() == ToolMode::Line;
            for thickness in Thickness::ALL {
                let selected = line_mode && self.sketchpad.tools().thickness() == thickness;
                if ui.selectable_label(selected, thickness.label()).clicked() {
                    self.sketchpad.select_thickness(thickness);
                }
            }
        });

        ui.horizontal_wrapped(|ui| {
            // Collect first to avoid borrowing issues
            let stickers: Vec<String> = self.sketchpad.tools().stickers().to_vec();
            let selected = self.sketchpad.tools().selected_sticker().map(str::to_owned);

            for glyph in &stickers {
                let is_selected = selected.as_deref() == Some(glyph.as_str());
                if ui
                    .selectable_label(is_selected, RichText::new(glyph).size(20.0))
                    .clicked()
                {
                    self.sketchpad.select_sticker(glyph);
                }
            }

            if ui.button("Custom…").clicked() {
                self.custom_sticker = Some(String::new());
            }
        });
    }

    fn custom_sticker_prompt(&mut self, ctx: &egui::Context) {
        let Some(text) = &mut self.custom_sticker else {
            return;
        };

        let mut submit = false;
        let mut cancel = false;
        egui::Window::new("Custom sticker")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Type an emoji or some text:");
                let response = ui.text_edit_singleline(text);
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    submit = true;
                }
                ui.horizontal(|ui| {
                    if ui.button("Add").clicked() {
                        submit = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });

        if submit {
            let text = self.custom_sticker.take().unwrap_or_default();
            if !self.sketchpad.add_custom_sticker(&text) {
                warn!("Ignoring empty custom sticker");
            }
        } else if cancel {
            self.custom_sticker = None;
        }
    }
}

impl SketchpadApp {
    fn show(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.heading(TITLE);
                self.canvas_ui(ui);
                self.actions_ui(ui);
                self.tools_ui(ui);
                if let Some(status) = &self.status {
                    ui.label(status);
                }
            });
        });

        self.custom_sticker_prompt(ctx);
    }
}

impl eframe::App for SketchpadApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Event, Modifiers, PointerButton, Pos2, RawInput};

    fn screen() -> Rect {
        Rect::from_min_size(Pos2::ZERO, egui::vec2(360.0, 440.0))
    }

    fn frame(ctx: &egui::Context, app: &mut SketchpadApp, events: Vec<Event>) {
        let input = RawInput {
            screen_rect: Some(screen()),
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.show(ctx));
    }

    fn button(pos: Pos2, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button: PointerButton::Primary,
            pressed,
            modifiers: Modifiers::default(),
        }
    }

    /// Hover, press and release at `pos`, one frame each
    fn click(ctx: &egui::Context, app: &mut SketchpadApp, pos: Pos2) {
        frame(ctx, app, vec![Event::PointerMoved(pos)]);
        frame(ctx, app, vec![button(pos, true)]);
        frame(ctx, app, vec![button(pos, false)]);
    }

    fn app() -> SketchpadApp {
        SketchpadApp::with_config(SketchpadConfig::default()).unwrap()
    }

    #[test]
    fn test_click_on_canvas_draws() {
        let ctx = egui::Context::default();
        let mut app = app();
        frame(&ctx, &mut app, Vec::new());

        click(&ctx, &mut app, screen().center());
        assert_eq!(app.sketchpad().history().len(), 1);
        assert!(app.input.is_hovering());
    }

    #[test]
    fn test_clicks_on_prompt_do_not_reach_canvas() {
        let ctx = egui::Context::default();
        let mut app = app();

        // Leave something to redo
        frame(&ctx, &mut app, Vec::new());
        click(&ctx, &mut app, screen().center());
        app.sketchpad.undo();
        assert!(app.sketchpad().history().can_redo());

        app.custom_sticker = Some(String::new());
        frame(&ctx, &mut app, Vec::new());
        frame(&ctx, &mut app, Vec::new());
        let prompt = ctx
            .memory(|mem| mem.area_rect(egui::Id::new("Custom sticker")))
            .unwrap();

        click(&ctx, &mut app, prompt.center());
        assert!(app.sketchpad().history().is_empty());
        assert!(app.sketchpad().history().can_redo());
        assert!(!app.input.is_hovering());
        assert!(app.sketchpad().cursor().is_none());
    }
}
