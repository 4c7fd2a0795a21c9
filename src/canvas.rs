//! Canvas orchestrator

use crate::blend::blend;
use crate::buffer::Surface;
use crate::clip::clip_polygon;
use crate::edge::{Point, Rect};
use crate::paint::Paint;
use crate::scan::ScanConverter;
use log::debug;
use std::cmp::{max, min};

/// Draw interface bound to a mutable [`Surface`] for its lifetime
///
/// Every operation runs to completion before returning and touches only
/// the borrowed surface; well-formed calls always leave the surface in a
/// fully defined state.
///
///     use polycanvas::{Canvas, Paint, Pixel, Rect, Rgba, Surface};
///
///     let mut surface = Surface::new(4, 4);
///     let mut canvas = Canvas::new(&mut surface);
///     let red = Paint::new(Rgba::opaque(1.0, 0.0, 0.0));
///     canvas.fill_rect(&Rect::new(1.0, 1.0, 3.0, 3.0), &red);
///     assert_eq!(surface[(1, 1)], Pixel::pack(255, 255, 0, 0));
///     assert_eq!(surface[(0, 0)], Pixel::ZERO);
///
pub struct Canvas<'a> {
    surface: &'a mut Surface,
}

impl<'a> Canvas<'a> {
    /// Bind a canvas to a surface
    pub fn new(surface: &'a mut Surface) -> Self {
        Canvas { surface }
    }

    /// Composite the paint against every pixel of the surface
    pub fn fill_all(&mut self, paint: &Paint) {
        debug!("fill_all: mode {:?}", paint.mode);
        let src = paint.src_pixel();
        for dst in self.surface.pixels_mut() {
            *dst = blend(paint.mode, src, *dst);
        }
    }

    /// Fill an axis-aligned rectangle
    ///
    /// The rectangle's corners are taken in a fixed winding order and
    /// handed to [`Canvas::fill_convex_polygon`].
    pub fn fill_rect(&mut self, rect: &Rect, paint: &Paint) {
        self.fill_convex_polygon(&rect.corners(), paint);
    }

    /// Fill a convex polygon
    ///
    /// At least three points are required. Convexity is a caller contract;
    /// behavior on non-convex or self-intersecting input is undefined.
    /// Portions outside the surface are clipped away.
    pub fn fill_convex_polygon(&mut self, points: &[Point], paint: &Paint) {
        assert!(points.len() >= 3, "a polygon needs at least 3 points, got {}", points.len());
        let (w, h) = (self.surface.width(), self.surface.height());
        let edges = clip_polygon(points, w, h);
        debug!("fill_convex_polygon: {} points, {} clipped edges", points.len(), edges.len());
        let src = paint.src_pixel();
        for span in ScanConverter::new(edges, h) {
            let x1 = max(span.x1, 0);
            let x2 = min(span.x2, w as i32);
            let y = span.y as usize;
            for x in x1..x2 {
                let dst = &mut self.surface[(x as usize, y)];
                *dst = blend(paint.mode, src, *dst);
            }
        }
    }
}
