//! Segment clipping against the surface bounds
//!
//! A directed segment is clipped against the rectangle
//! `[0,width] x [0,height]` one axis at a time. Vertical clipping can
//! reject the segment outright; horizontal clipping never discards
//! coverage, it projects the out-of-bounds portion onto the boundary as a
//! vertical edge so the polygon's winding survives intact.

use crate::edge::{Edge, Point};
use log::trace;

/// Convert a y-ordered sub-segment to an [`Edge`] and collect it
///
/// Degenerate sub-segments (rounded onto a single scanline) are silently
/// dropped; they contribute no visible rows.
fn push_edge(p1: Point, p2: Point, edges: &mut Vec<Edge>) {
    if let Some(e) = Edge::from_segment(p1, p2) {
        trace!("clip: edge top {} bot {} m {} b {}", e.top, e.bot, e.m, e.b);
        edges.push(e);
    }
}

/// Clip the segment `p1`->`p2` against the surface bounds
///
/// Emitted edges are appended to `edges`. A segment wholly above or below
/// the surface vanishes; a segment wholly beyond the left or right side
/// projects to a single vertical edge pinned to that boundary. Interpolation
/// ratios outside `(0,1]` mean the ordering invariant was broken upstream
/// and assert fatally.
pub fn clip_segment(p1: Point, p2: Point, width: usize, height: usize, edges: &mut Vec<Edge>) {
    // p1 takes the smaller y
    let (mut p1, mut p2) = if p2.y < p1.y { (p2, p1) } else { (p1, p2) };

    // vertical clip against y = 0
    if p1.y < 0.0 {
        if p2.y < 0.0 {
            return; // wholly above
        }
        let ratio = -p1.y / (p2.y - p1.y);
        assert!(ratio > 0.0 && ratio <= 1.0, "top clip ratio {} out of (0,1]", ratio);
        p1.x += (p2.x - p1.x) * ratio;
        p1.y = 0.0;
    }

    // vertical clip against y = height
    let max_y = height as f64;
    if p2.y > max_y {
        if p1.y > max_y {
            return; // wholly below
        }
        let ratio = (p2.y - max_y) / (p2.y - p1.y);
        assert!(ratio > 0.0 && ratio <= 1.0, "bottom clip ratio {} out of (0,1]", ratio);
        p2.x += (p1.x - p2.x) * ratio;
        p2.y = max_y;
    }

    // After the horizontal stages p3..p4 is the interior piece of the
    // segment, left-most endpoint first; boundary crossings replace the
    // corresponding end.
    let (mut p3, mut p4) = if p1.x < p2.x { (p1, p2) } else { (p2, p1) };

    let max_x = width as f64;

    // clip against x = 0
    if p1.x < 0.0 {
        if p2.x < 0.0 {
            // wholly left of the surface: project onto x = 0
            push_edge(Point::new(0.0, p1.y), Point::new(0.0, p2.y), edges);
            return;
        }
        let ratio = -p1.x / (p2.x - p1.x);
        assert!(ratio > 0.0 && ratio <= 1.0, "left clip ratio {} out of (0,1]", ratio);
        let cross = Point::new(0.0, p1.y + ratio * (p2.y - p1.y));
        p1.x = 0.0;
        push_edge(p1, cross, edges);
        p3 = cross;
    }
    if p2.x < 0.0 {
        let ratio = -p2.x / (p1.x - p2.x);
        assert!(ratio > 0.0 && ratio <= 1.0, "left clip ratio {} out of (0,1]", ratio);
        let cross = Point::new(0.0, p2.y - ratio * (p2.y - p1.y));
        p2.x = 0.0;
        push_edge(cross, p2, edges);
        p3 = cross;
    }

    // clip against x = width
    if p1.x > max_x {
        if p2.x > max_x {
            // wholly right of the surface: project onto x = width
            push_edge(Point::new(max_x, p1.y), Point::new(max_x, p2.y), edges);
            return;
        }
        let ratio = (p1.x - max_x) / (p1.x - p2.x);
        assert!(ratio > 0.0 && ratio <= 1.0, "right clip ratio {} out of (0,1]", ratio);
        let cross = Point::new(max_x, p1.y + ratio * (p2.y - p1.y));
        p1.x = max_x;
        push_edge(p1, cross, edges);
        p4 = cross;
    }
    if p2.x > max_x {
        let ratio = (p2.x - max_x) / (p2.x - p1.x);
        assert!(ratio > 0.0 && ratio <= 1.0, "right clip ratio {} out of (0,1]", ratio);
        let cross = Point::new(max_x, p2.y - ratio * (p2.y - p1.y));
        p2.x = max_x;
        push_edge(cross, p2, edges);
        p4 = cross;
    }

    // interior piece, re-ordered so the smaller y comes first
    if p3.y < p4.y {
        push_edge(p3, p4, edges);
    } else {
        push_edge(p4, p3, edges);
    }
}

/// Clip every edge of a closed polygon, including the wrap-around edge
pub fn clip_polygon(points: &[Point], width: usize, height: usize) -> Vec<Edge> {
    let mut edges = Vec::with_capacity(points.len() + 2);
    for pair in points.windows(2) {
        clip_segment(pair[0], pair[1], width, height, &mut edges);
    }
    if let (Some(&last), Some(&first)) = (points.last(), points.first()) {
        clip_segment(last, first, width, height, &mut edges);
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip_one(p1: Point, p2: Point) -> Vec<Edge> {
        let mut edges = vec![];
        clip_segment(p1, p2, 512, 512, &mut edges);
        edges
    }

    #[test]
    fn inside_segment_is_one_edge() {
        let edges = clip_one(Point::new(1.0, 3.0), Point::new(2.0, 4.0));
        assert_eq!(edges.len(), 1);
        let e = edges[0];
        assert_eq!((e.top, e.bot), (3, 4));
        assert!((e.m - 1.0).abs() < 1e-12);
        assert!((e.b + 2.0).abs() < 1e-12);
    }

    #[test]
    fn wholly_left_projects_to_boundary() {
        let edges = clip_one(Point::new(-25.0, 45.0), Point::new(-25.0, -25.0));
        // vertically clipped to [0,45], then pinned to x = 0
        assert_eq!(edges.len(), 1);
        let e = edges[0];
        assert_eq!((e.top, e.bot), (0, 45));
        assert_eq!(e.m, 0.0);
        assert_eq!(e.b, 0.0);
    }

    #[test]
    fn wholly_right_projects_to_boundary() {
        let edges = clip_one(Point::new(600.0, 1.0), Point::new(700.0, 9.0));
        assert_eq!(edges.len(), 1);
        let e = edges[0];
        assert_eq!((e.top, e.bot), (1, 9));
        assert_eq!(e.m, 0.0);
        assert_eq!(e.b, 512.0);
    }

    #[test]
    fn wholly_above_or_below_is_rejected() {
        assert!(clip_one(Point::new(1.0, -3.0), Point::new(2.0, -1.0)).is_empty());
        assert!(clip_one(Point::new(1.0, 600.0), Point::new(2.0, 513.0)).is_empty());
    }

    #[test]
    fn top_clip_interpolates_x() {
        let edges = clip_one(Point::new(1.0, -3.0), Point::new(2.0, 4.0));
        assert_eq!(edges.len(), 1);
        let e = edges[0];
        assert_eq!((e.top, e.bot), (0, 4));
        // clipped start point is (1 + 3/7, 0)
        assert!((e.b - (1.0 + 3.0 / 7.0)).abs() < 1e-9);
    }

    #[test]
    fn left_and_right_clip_keeps_interior_piece() {
        // Crosses both vertical boundaries within a single scanline; the
        // tiny boundary slivers round away, only the interior survives.
        let edges = clip_one(Point::new(-1.0, 3.0), Point::new(513.0, 4.0));
        assert_eq!(edges.len(), 1);
        let e = edges[0];
        assert_eq!((e.top, e.bot), (3, 4));
    }

    #[test]
    fn left_crossing_emits_boundary_and_interior() {
        let edges = clip_one(Point::new(-4.0, 0.0), Point::new(4.0, 8.0));
        assert_eq!(edges.len(), 2);
        // boundary piece pinned to x = 0 over the clipped-off y range
        assert_eq!((edges[0].top, edges[0].bot), (0, 4));
        assert_eq!(edges[0].m, 0.0);
        assert_eq!(edges[0].b, 0.0);
        // interior piece from (0,4) to (4,8)
        assert_eq!((edges[1].top, edges[1].bot), (4, 8));
        assert!((edges[1].m - 1.0).abs() < 1e-12);
        assert!((edges[1].b + 4.0).abs() < 1e-12);
    }

    #[test]
    fn polygon_above_surface_has_no_negative_tops() {
        let pts = [Point::new(0.0, -5.0), Point::new(8.0, 3.0), Point::new(0.0, 3.0)];
        let edges = clip_polygon(&pts, 8, 8);
        assert!(!edges.is_empty());
        for e in &edges {
            assert!(e.top >= 0, "edge {:?} starts above the surface", e);
        }
    }

    #[test]
    fn closed_polygon_includes_wraparound_edge() {
        let pts = [Point::new(1.0, 1.0), Point::new(5.0, 1.0), Point::new(5.0, 5.0), Point::new(1.0, 5.0)];
        let edges = clip_polygon(&pts, 8, 8);
        // top and bottom sides are horizontal and round away; the two
        // vertical sides (one from the wrap-around) remain
        assert_eq!(edges.len(), 2);
    }
}
