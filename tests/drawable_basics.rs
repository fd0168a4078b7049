use std::sync::Arc;

use egui::{Color32, Pos2, Vec2};
use sticker_sketchpad::drawable::{factory, ROTATION_PER_UNIT};
use sticker_sketchpad::history::History;
use sticker_sketchpad::surface::{GlyphRasterizer, RasterSurface, Surface};
use sticker_sketchpad::Drawable;

/// Everything a surface was asked to draw, in order
#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear,
    Polyline(Vec<Pos2>, f32),
    Circle(Pos2, f32, f32),
    Glyphs(String, Pos2, f32, f32),
}

#[derive(Default)]
struct RecordingSurface {
    ops: Vec<Op>,
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], thickness: f32, _color: Color32) {
        self.ops.push(Op::Polyline(points.to_vec(), thickness));
    }

    fn stroke_circle(&mut self, center: Pos2, radius: f32, thickness: f32, _color: Color32) {
        self.ops.push(Op::Circle(center, radius, thickness));
    }

    fn draw_glyphs(&mut self, text: &str, center: Pos2, size: f32, rotation: f32, _color: Color32) {
        self.ops.push(Op::Glyphs(text.to_owned(), center, size, rotation));
    }
}

fn raster(size: f32) -> RasterSurface {
    let glyphs = Arc::new(GlyphRasterizer::with_default_fonts().unwrap());
    RasterSurface::new(Vec2::splat(size), 1.0, glyphs).unwrap()
}

#[test]
fn test_stroke_renders_polyline_in_insertion_order() {
    let mut stroke = factory::create_stroke(Pos2::new(10.0, 10.0), 3.0, Color32::BLACK);
    stroke.extend(Pos2::new(20.0, 10.0));
    stroke.extend(Pos2::new(20.0, 20.0));

    let mut surface = RecordingSurface::default();
    stroke.render(&mut surface);
    assert_eq!(
        surface.ops,
        vec![Op::Polyline(
            vec![Pos2::new(10.0, 10.0), Pos2::new(20.0, 10.0), Pos2::new(20.0, 20.0)],
            3.0
        )]
    );
}

#[test]
fn test_single_point_stroke_leaves_no_mark() {
    let stroke = factory::create_stroke(Pos2::new(16.0, 16.0), 6.0, Color32::BLACK);
    let mut surface = raster(32.0);
    stroke.render(&mut surface);
    assert!(surface.image().pixels().all(|p| p.0[3] == 0));

    // Duplicate points only add zero-length segments
    let mut stroke = stroke;
    stroke.extend(Pos2::new(16.0, 16.0));
    stroke.render(&mut surface);
    assert!(surface.image().pixels().all(|p| p.0[3] == 0));
}

#[test]
fn test_multi_point_stroke_is_connected() {
    let mut stroke = factory::create_stroke(Pos2::new(4.0, 4.0), 2.0, Color32::BLACK);
    stroke.extend(Pos2::new(28.0, 4.0));
    stroke.extend(Pos2::new(28.0, 28.0));

    let mut surface = raster(32.0);
    stroke.render(&mut surface);
    // Midpoints of both segments and the corner are inked
    assert_eq!(surface.pixel(16, 4)[3], 255);
    assert_eq!(surface.pixel(28, 16)[3], 255);
    assert_eq!(surface.pixel(28, 4)[3], 255);
    // The inside of the corner is not
    assert_eq!(surface.pixel(16, 16)[3], 0);
}

#[test]
fn test_render_does_not_mutate() {
    let mut sticker = factory::create_sticker(Pos2::new(50.0, 50.0), "★", 32.0, Color32::BLACK);
    sticker.extend(Pos2::new(70.0, 50.0));
    let before = sticker.clone();

    let mut surface = RecordingSurface::default();
    sticker.render(&mut surface);
    sticker.render(&mut surface);
    assert_eq!(sticker, before);
    assert_eq!(surface.ops[0], surface.ops[1]);
}

#[test]
fn test_sticker_rotation_from_drag() {
    let mut dragged_sideways = factory::create_sticker(Pos2::new(50.0, 50.0), "★", 32.0, Color32::BLACK);
    dragged_sideways.extend(Pos2::new(70.0, 50.0));
    let rotation = dragged_sideways.as_sticker().unwrap().rotation();
    assert!(rotation != 0.0);
    assert!((rotation - 20.0 * ROTATION_PER_UNIT).abs() < 1e-6);

    let mut dragged_down = factory::create_sticker(Pos2::new(50.0, 50.0), "★", 32.0, Color32::BLACK);
    dragged_down.extend(Pos2::new(50.0, 80.0));
    assert_eq!(dragged_down.as_sticker().unwrap().rotation(), 0.0);

    let mut surface = RecordingSurface::default();
    dragged_sideways.render(&mut surface);
    assert_eq!(
        surface.ops,
        vec![Op::Glyphs("★".to_owned(), Pos2::new(50.0, 50.0), 32.0, rotation)]
    );
}

#[test]
fn test_render_all_clears_then_paints_in_order() {
    let mut history = History::new();
    let first = history.begin_stroke(Pos2::new(1.0, 1.0), 2.0, Color32::BLACK);
    history.extend(first, Pos2::new(5.0, 5.0));
    history.begin_sticker(Pos2::new(9.0, 9.0), "🌽", 32.0, Color32::BLACK);

    let mut surface = RecordingSurface::default();
    history.render_all(&mut surface);
    assert_eq!(surface.ops.len(), 3);
    assert_eq!(surface.ops[0], Op::Clear);
    assert!(matches!(surface.ops[1], Op::Polyline(..)));
    assert!(matches!(surface.ops[2], Op::Glyphs(..)));
}

#[test]
fn test_render_all_is_idempotent() {
    let mut history = History::new();
    let id = history.begin_stroke(Pos2::new(2.0, 30.0), 4.0, Color32::from_rgb(200, 30, 30));
    history.extend(id, Pos2::new(60.0, 2.0));
    history.begin_sticker(Pos2::new(32.0, 32.0), "O", 24.0, Color32::BLACK);

    let mut surface = raster(64.0);
    history.render_all(&mut surface);
    let once = surface.image().clone();
    history.render_all(&mut surface);
    assert_eq!(surface.image(), &once);
}

#[test]
fn test_later_drawables_paint_over_earlier() {
    let mut history = History::new();
    let red = history.begin_stroke(Pos2::new(0.0, 16.0), 6.0, Color32::RED);
    history.extend(red, Pos2::new(32.0, 16.0));
    let blue = history.begin_stroke(Pos2::new(16.0, 0.0), 6.0, Color32::BLUE);
    history.extend(blue, Pos2::new(16.0, 32.0));

    let mut surface = raster(32.0);
    history.render_all(&mut surface);
    assert_eq!(surface.pixel(16, 16), [0, 0, 255, 255]);
}

#[test]
fn test_bounds() {
    let mut stroke = factory::create_stroke(Pos2::new(10.0, 10.0), 2.0, Color32::BLACK);
    stroke.extend(Pos2::new(20.0, 30.0));
    let rect = stroke.bounds();
    assert_eq!(rect.min, Pos2::new(9.0, 9.0));
    assert_eq!(rect.max, Pos2::new(21.0, 31.0));
    assert_eq!(stroke.kind(), "stroke");

    let sticker = factory::create_sticker(Pos2::new(50.0, 50.0), "★", 32.0, Color32::BLACK);
    assert!(sticker.bounds().contains(Pos2::new(50.0, 50.0)));
    assert_eq!(sticker.kind(), "sticker");
}
