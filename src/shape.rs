use egui::{Pos2, Rect, pos2};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::color::parse_color;
use crate::error::ValueError;
use crate::surface::Handle;

/// The three primitives the drawer knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Rectangle,
    Line,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Rectangle, ShapeKind::Line];

    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Rectangle => "Rectangle",
            ShapeKind::Line => "Line",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ValueError::EmptyKind);
        }
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| ValueError::UnknownKind(s.to_owned()))
    }
}

/// Stable identifier assigned by the store when a shape is created
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ShapeId(u64);

impl ShapeId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A shape owned by the store.
///
/// The render handle is an annotation only: it is swapped every time the
/// shape is redrawn and is never written to disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    color: String,
    size: u32,
    handle: Option<Handle>,
}

impl Shape {
    pub(crate) fn new(id: ShapeId, kind: ShapeKind, color: String, size: u32) -> Self {
        Self {
            id,
            kind,
            color,
            size,
            handle: None,
        }
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn handle(&self) -> Option<Handle> {
        self.handle
    }

    pub(crate) fn set_handle(&mut self, handle: Option<Handle>) {
        self.handle = handle;
    }

    pub(crate) fn set_size(&mut self, size: u32) {
        self.size = size;
    }

    /// The persisted form of this shape
    pub fn to_record(&self) -> ShapeRecord {
        ShapeRecord {
            kind: self.kind,
            color: self.color.clone(),
            size: self.size,
        }
    }
}

/// One entry of a saved shape file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ShapeRecord {
    pub kind: ShapeKind,
    pub color: String,
    pub size: u32,
}

impl ShapeRecord {
    pub fn new(kind: ShapeKind, color: impl Into<String>, size: u32) -> Self {
        Self {
            kind,
            color: color.into(),
            size,
        }
    }

    /// Validate raw form input for the draw command
    pub fn parse(kind: &str, color: &str, size: &str) -> Result<Self, ValueError> {
        let kind = kind.parse::<ShapeKind>()?;

        let color = color.trim();
        parse_color(color)?;

        let size = size
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|size| *size > 0)
            .ok_or_else(|| ValueError::InvalidSize(size.to_owned()))?;

        Ok(Self::new(kind, color, size))
    }
}

/// Concrete canvas geometry for one shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    Circle { center: Pos2, radius: f32 },
    Rectangle(Rect),
    Line { from: Pos2, to: Pos2 },
}

impl Geometry {
    /// Geometry used by the draw and load commands, centered on `reference`
    pub fn placed(kind: ShapeKind, size: u32, reference: Pos2) -> Self {
        let s = size as f32;
        match kind {
            ShapeKind::Circle => Geometry::Circle {
                center: reference,
                radius: s,
            },
            ShapeKind::Rectangle => Geometry::Rectangle(Rect::from_min_max(
                pos2(reference.x - s, reference.y - s),
                pos2(reference.x + s, reference.y + s),
            )),
            ShapeKind::Line => Geometry::Line {
                from: pos2(reference.x - s, reference.y),
                to: pos2(reference.x + s, reference.y),
            },
        }
    }

    /// Geometry spanned by a drag from `start` to `current`
    pub fn dragged(kind: ShapeKind, start: Pos2, current: Pos2) -> Self {
        match kind {
            ShapeKind::Circle => Geometry::Circle {
                center: start,
                radius: start.distance(current),
            },
            ShapeKind::Rectangle => Geometry::Rectangle(Rect::from_two_pos(start, current)),
            ShapeKind::Line => Geometry::Line {
                from: start,
                to: current,
            },
        }
    }

    /// The `size` value this geometry corresponds to
    pub fn derived_size(&self) -> u32 {
        let extent = match self {
            Geometry::Circle { radius, .. } => *radius,
            Geometry::Rectangle(rect) => rect.width().max(rect.height()) / 2.0,
            Geometry::Line { from, to } => from.distance(*to) / 2.0,
        };
        extent.round().max(0.0) as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Circle".parse::<ShapeKind>(), Ok(ShapeKind::Circle));
        assert_eq!(" Line ".parse::<ShapeKind>(), Ok(ShapeKind::Line));
        assert_eq!("".parse::<ShapeKind>(), Err(ValueError::EmptyKind));
        assert_eq!(
            "Triangle".parse::<ShapeKind>(),
            Err(ValueError::UnknownKind("Triangle".to_owned()))
        );
    }

    #[test]
    fn test_record_parse_rejects_bad_size() {
        for size in ["", "0", "-3", "abc", "2.5"] {
            assert!(
                matches!(
                    ShapeRecord::parse("Circle", "red", size),
                    Err(ValueError::InvalidSize(_))
                ),
                "size {size:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_record_parse_valid() {
        let record = ShapeRecord::parse("Rectangle", " blue ", " 20 ").unwrap();
        assert_eq!(record, ShapeRecord::new(ShapeKind::Rectangle, "blue", 20));
    }

    #[test]
    fn test_placed_geometry() {
        let reference = pos2(200.0, 150.0);
        assert_eq!(
            Geometry::placed(ShapeKind::Rectangle, 20, reference),
            Geometry::Rectangle(Rect::from_min_max(pos2(180.0, 130.0), pos2(220.0, 170.0)))
        );
        assert_eq!(
            Geometry::placed(ShapeKind::Line, 10, reference),
            Geometry::Line {
                from: pos2(190.0, 150.0),
                to: pos2(210.0, 150.0)
            }
        );
    }

    #[test]
    fn test_dragged_circle_radius() {
        let geometry = Geometry::dragged(ShapeKind::Circle, pos2(100.0, 100.0), pos2(103.0, 104.0));
        assert_eq!(
            geometry,
            Geometry::Circle {
                center: pos2(100.0, 100.0),
                radius: 5.0
            }
        );
        assert_eq!(geometry.derived_size(), 5);
    }

    #[test]
    fn test_dragged_rect_is_normalized() {
        let geometry = Geometry::dragged(ShapeKind::Rectangle, pos2(50.0, 60.0), pos2(10.0, 20.0));
        let Geometry::Rectangle(rect) = geometry else {
            panic!("expected a rectangle");
        };
        assert_eq!(rect.min, pos2(10.0, 20.0));
        assert_eq!(rect.max, pos2(50.0, 60.0));
        assert_eq!(geometry.derived_size(), 20);
    }
}
