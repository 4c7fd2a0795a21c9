//! Scanline conversion of clipped edges into fill spans
//!
//! For a convex polygon at most two edges straddle any scanline, so the
//! sweep keeps exactly two active slots and refills them from a cursor
//! into the top-sorted edge list. The two lowest-top edges are therefore
//! the active pair by construction, not by careful removal order.

use crate::edge::Edge;
use log::debug;

/// A half-open run of columns `[x1, x2)` on row `y`
///
/// Spans are produced in increasing row order, one per covered row, and
/// are never empty. Columns may fall outside the surface; the fill step
/// clamps before touching pixels.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Span {
    pub y: i32,
    pub x1: i32,
    pub x2: i32,
}

/// Sweep state over a clipped, closed polygon's edges
///
/// Iterate it to drain the spans of the polygon row by row.
#[derive(Debug)]
pub struct ScanConverter {
    edges: Vec<Edge>,
    active: Option<(Edge, Edge)>,
    cursor: usize,
    y: i32,
    height: i32,
}

impl ScanConverter {
    /// Sort the edges by top scanline and prime the active pair
    ///
    /// Ties in `top` are left in arbitrary order; convexity guarantees the
    /// same span either way.
    pub fn new(mut edges: Vec<Edge>, height: usize) -> Self {
        edges.sort_by(|a, b| a.top.cmp(&b.top));
        let active = if edges.len() >= 2 { Some((edges[0], edges[1])) } else { None };
        debug!("scan: {} edges, height {}", edges.len(), height);
        ScanConverter { edges, active, cursor: 2, y: 0, height: height as i32 }
    }

    fn take_next(&mut self) -> Option<Edge> {
        let e = self.edges.get(self.cursor).copied();
        if e.is_some() {
            self.cursor += 1;
        }
        e
    }
}

impl Iterator for ScanConverter {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        while self.y < self.height {
            let (mut e1, mut e2) = self.active?;
            // bookkeeping only: the slot with the smaller top goes first
            if e2.top < e1.top {
                std::mem::swap(&mut e1, &mut e2);
            }
            let y = self.y;
            if y < e1.top {
                // sort ties can park the pair below the current row
                self.active = Some((e1, e2));
                self.y += 1;
                continue;
            }
            debug_assert!(y < e1.bot && y < e2.bot, "active edge outlived its bottom row");

            let xa = e1.x_at(y);
            let xb = e2.x_at(y);

            // Retire edges whose last contributing row this was, second
            // slot first, so a double retirement pulls the next two lowest
            // tops in order.
            let mut alive = true;
            if y + 1 == e2.bot {
                match self.take_next() {
                    Some(e) => e2 = e,
                    None => alive = false,
                }
            }
            if y + 1 == e1.bot {
                match self.take_next() {
                    Some(e) => e1 = e,
                    None => alive = false,
                }
            }
            self.active = if alive { Some((e1, e2)) } else { None };
            self.y += 1;

            if xa != xb {
                let (x1, x2) = if xa < xb { (xa, xb) } else { (xb, xa) };
                return Some(Span { y, x1, x2 });
            }
            // equal columns: empty span, nothing to fill on this row
        }
        None
    }
}
