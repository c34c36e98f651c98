//! Core geometry types shared by targets and renderers
//!
//! Positions live in stage coordinates (origin at stage center, y up).
//! Bounding boxes are axis-aligned and only their extent is used for
//! interpolation tolerances.

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Displacement from `origin` to this point
    pub fn delta_from(&self, origin: Point) -> Vec2 {
        Vec2::new(self.x - origin.x, self.y - origin.y)
    }

    /// Offset the point by `delta` scaled by `t`
    pub fn offset_by(&self, delta: Vec2, t: f32) -> Self {
        Point::new(self.x + delta.x * t, self.y + delta.y * t)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// 2D rectangle
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Build a rect from its left/right/bottom/top edges
    pub fn from_edges(left: f32, right: f32, bottom: f32, top: f32) -> Self {
        Rect::new(left, bottom, right - left, top - bottom)
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }
}

/// 2D vector
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Per-axis absolute value
    pub fn abs(&self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }
}

/// Sign of a value as -1, 0 or 1
///
/// Unlike [`f32::signum`], zero (of either sign) maps to 0, so a scale axis
/// collapsing to zero counts as a sign change.
pub fn sign(value: f32) -> i8 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}
