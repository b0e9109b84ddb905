use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2};

use crate::surface::{Handle, RenderSurface, ShapeStyle};

/// Width of outlines and lines on the canvas
pub const LINE_WIDTH: f32 = 1.0;

/// Default distance in points within which a line counts as hit
pub const DEFAULT_HIT_TOLERANCE: f32 = 3.0;

/// A single draw instruction
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    Circle {
        center: Pos2,
        radius: f32,
        style: ShapeStyle,
    },
    Rect {
        rect: Rect,
        style: ShapeStyle,
    },
    Line {
        from: Pos2,
        to: Pos2,
        color: Color32,
    },
}

impl Primitive {
    pub fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        match self {
            Primitive::Circle { center, radius, .. } => center.distance(pos) <= *radius,
            Primitive::Rect { rect, .. } => rect.contains(pos),
            Primitive::Line { from, to, .. } => distance_to_line_segment(pos, *from, *to) <= tolerance,
        }
    }

    fn paint(&self, painter: &Painter, offset: Vec2) {
        match *self {
            Primitive::Circle { center, radius, style } => {
                painter.circle(center + offset, radius, fill_color(style), outline_stroke(style));
            }
            Primitive::Rect { rect, style } => {
                painter.rect(rect.translate(offset), 0.0, fill_color(style), outline_stroke(style));
            }
            Primitive::Line { from, to, color } => {
                painter.line_segment([from + offset, to + offset], Stroke::new(LINE_WIDTH, color));
            }
        }
    }
}

fn fill_color(style: ShapeStyle) -> Color32 {
    style.fill.unwrap_or(Color32::TRANSPARENT)
}

fn outline_stroke(style: ShapeStyle) -> Stroke {
    style
        .outline
        .map_or(Stroke::NONE, |color| Stroke::new(LINE_WIDTH, color))
}

/// Calculate distance from a point to a line segment
pub(crate) fn distance_to_line_segment(point: Pos2, line_start: Pos2, line_end: Pos2) -> f32 {
    let line_vec = line_end - line_start;
    let point_vec = point - line_start;

    let line_len = line_vec.length();
    if line_len == 0.0 {
        return point_vec.length();
    }

    let t = ((point_vec.x * line_vec.x + point_vec.y * line_vec.y) / line_len).clamp(0.0, line_len);
    let projection = line_start + (line_vec * t / line_len);
    (point - projection).length()
}

/// Counters of the calls a surface has received
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderStats {
    pub draws: usize,
    pub erases: usize,
    pub clears: usize,
}

impl RenderStats {
    pub fn total(&self) -> usize {
        self.draws + self.erases + self.clears
    }
}

/// In-memory render surface: the list of primitives currently on the canvas.
///
/// The egui canvas paints this list every frame.
#[derive(Debug)]
pub struct DisplayList {
    items: Vec<(Handle, Primitive)>,
    next_handle: u64,
    hit_tolerance: f32,
    stats: RenderStats,
}

impl Default for DisplayList {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplayList {
    pub fn new() -> Self {
        Self::with_hit_tolerance(DEFAULT_HIT_TOLERANCE)
    }

    pub fn with_hit_tolerance(hit_tolerance: f32) -> Self {
        Self {
            items: Vec::new(),
            next_handle: 1,
            hit_tolerance,
            stats: RenderStats::default(),
        }
    }

    /// Current draw instructions, bottom first
    pub fn primitives(&self) -> impl Iterator<Item = (Handle, &Primitive)> {
        self.items.iter().map(|(handle, primitive)| (*handle, primitive))
    }

    pub fn get(&self, handle: Handle) -> Option<&Primitive> {
        self.items
            .iter()
            .find(|(h, _)| *h == handle)
            .map(|(_, primitive)| primitive)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Paint every primitive, shifted by `offset` into screen space
    pub fn paint(&self, painter: &Painter, offset: Vec2) {
        for (_, primitive) in &self.items {
            primitive.paint(painter, offset);
        }
    }

    fn push(&mut self, primitive: Primitive) -> Handle {
        let handle = Handle::new(self.next_handle);
        self.next_handle += 1;
        self.items.push((handle, primitive));
        self.stats.draws += 1;
        handle
    }
}

impl RenderSurface for DisplayList {
    fn draw_circle(&mut self, center: Pos2, radius: f32, style: ShapeStyle) -> Handle {
        self.push(Primitive::Circle { center, radius, style })
    }

    fn draw_rect(&mut self, rect: Rect, style: ShapeStyle) -> Handle {
        self.push(Primitive::Rect { rect, style })
    }

    fn draw_line(&mut self, from: Pos2, to: Pos2, color: Color32) -> Handle {
        self.push(Primitive::Line { from, to, color })
    }

    fn erase(&mut self, handle: Handle) {
        self.stats.erases += 1;
        self.items.retain(|(h, _)| *h != handle);
    }

    fn clear_all(&mut self) {
        self.stats.clears += 1;
        self.items.clear();
    }

    fn shape_under_point(&self, pos: Pos2) -> Option<Handle> {
        self.items
            .iter()
            .rev()
            .find(|(_, primitive)| primitive.hit_test(pos, self.hit_tolerance))
            .map(|(handle, _)| *handle)
    }
}
