use egui::{Color32, Pos2, Rect};
use std::fmt;

use crate::shape::Geometry;

/// Opaque reference to one primitive on a render surface.
///
/// Only meaningful to the surface that issued it, and only until that
/// primitive is erased or the surface is cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle(u64);

impl Handle {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handle:{}", self.0)
    }
}

/// Fill and outline colors for closed primitives
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ShapeStyle {
    pub fill: Option<Color32>,
    pub outline: Option<Color32>,
}

impl ShapeStyle {
    /// Filled with an outline of the same color
    pub fn solid(color: Color32) -> Self {
        Self {
            fill: Some(color),
            outline: Some(color),
        }
    }

    pub fn outline(color: Color32) -> Self {
        Self {
            fill: None,
            outline: Some(color),
        }
    }
}

/// The drawing calls the session needs from a canvas
pub trait RenderSurface {
    fn draw_circle(&mut self, center: Pos2, radius: f32, style: ShapeStyle) -> Handle;

    fn draw_rect(&mut self, rect: Rect, style: ShapeStyle) -> Handle;

    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32) -> Handle;

    /// Remove one primitive. Unknown handles are ignored.
    fn erase(&mut self, handle: Handle);

    /// Remove every primitive.
    fn clear_all(&mut self);

    /// The topmost primitive at `pos`, if any
    fn shape_under_point(&self, pos: Pos2) -> Option<Handle>;

    /// Draw `geometry`. Closed shapes use `style`; lines use its outline color.
    fn draw_geometry(&mut self, geometry: Geometry, style: ShapeStyle) -> Handle {
        match geometry {
            Geometry::Circle { center, radius } => self.draw_circle(center, radius, style),
            Geometry::Rectangle(rect) => self.draw_rect(rect, style),
            Geometry::Line { from, to } => {
                let color = style.outline.or(style.fill).unwrap_or(Color32::BLACK);
                self.draw_line(from, to, color)
            }
        }
    }
}
