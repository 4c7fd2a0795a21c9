//! Geometry primitives

use crate::math::round_to_int;

/// Point in device pixel space
///
/// Origin is the top-left corner, x grows right, y grows down.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Rect { left, top, right, bottom }
    }

    /// Corner points in a fixed winding order
    ///
    /// left-top, right-top, right-bottom, left-bottom.
    pub fn corners(&self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }
}

/// A polygon edge clipped to the surface and rounded to scanlines
///
/// `top` is the first scanline the edge touches, `bot` the first it no
/// longer touches. The x position on a scanline is `x = m*y + b`.
/// Edges are immutable once built and always satisfy `top < bot`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    pub top: i32,
    pub bot: i32,
    pub m: f64,
    pub b: f64,
}

impl Edge {
    /// Build an edge from a y-ordered segment
    ///
    /// Returns `None` when both rounded endpoints land on the same
    /// scanline; such a segment contributes no rows. `p1.y <= p2.y` is a
    /// clipper-maintained invariant and asserted here.
    pub fn from_segment(p1: Point, p2: Point) -> Option<Edge> {
        assert!(p1.y <= p2.y, "segment endpoints out of order: {:?} {:?}", p1, p2);
        let top = round_to_int(p1.y);
        let bot = round_to_int(p2.y);
        if top == bot {
            return None;
        }
        let m = (p1.x - p2.x) / (p1.y - p2.y);
        let b = p1.x - m * p1.y;
        Some(Edge { top, bot, m, b })
    }

    /// Column intercept at the vertical center of `row`, rounded half up
    pub fn x_at(&self, row: i32) -> i32 {
        round_to_int(self.m * (f64::from(row) + 0.5) + self.b)
    }
}
