use egui::{Color32, Pos2, Rect};

use super::{Drawable, DrawableId};
use crate::geometry;
use crate::surface::Surface;

/// Freehand line through the pointer positions recorded while drawing
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: DrawableId,
    points: Vec<Pos2>,
    thickness: f32,
    color: Color32,
}

impl Stroke {
    pub fn new(id: DrawableId, points: Vec<Pos2>, thickness: f32, color: Color32) -> Self {
        Self {
            id,
            points,
            thickness,
            color,
        }
    }

    pub fn id(&self) -> DrawableId {
        self.id
    }

    /// Get the points that make up this stroke
    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn bounds(&self) -> Rect {
        geometry::calculate_bounds(&self.points, self.thickness / 2.0)
    }
}

impl Drawable for Stroke {
    fn extend(&mut self, point: Pos2) {
        self.points.push(point);
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.stroke_polyline(&self.points, self.thickness, self.color);
    }
}
