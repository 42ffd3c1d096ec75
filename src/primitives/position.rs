//! Point and Rect - pointer coordinates and element geometry
//!
//! Both live in client (viewport) pixels, the coordinate space of
//! `MouseEvent::client_x` and `getBoundingClientRect`.

/// Point in client pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Vector from `origin` to this point
    pub fn offset_from(&self, origin: Self) -> Self {
        Self {
            x: self.x - origin.x,
            y: self.y - origin.y,
        }
    }
}

/// Bounding box as reported by `getBoundingClientRect`
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, width, height }
    }

    pub fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    /// Center in client coordinates
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Center relative to the box's own top-left corner
    pub fn half_extents(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Client point re-expressed relative to the top-left corner
    pub fn local(&self, client: Point) -> Point {
        client.offset_from(self.origin())
    }
}
