//! Minimal 2D software canvas
//!
//! How a fill works:
//!
//! ```text
//! canvas = Canvas::new(&mut surface)
//! canvas.fill_convex_polygon(points, paint)
//!      clip::clip_polygon()
//!        clip_segment()          -- bounds clip, boundary projection
//!          Edge::from_segment()  -- round to scanlines, drop degenerates
//!      ScanConverter::new()      -- sort by top scanline
//!        next()                  -- active pair sweep, one Span per row
//!      paint.src_pixel()         -- float color -> packed premultiplied
//!      blend::blend()            -- Porter-Duff per pixel
//!        Pixel::scale()          -- word-parallel round(channel*s/255)
//!      surface[(x, y)] = result
//! ```
//!
//! The surface stores packed premultiplied ARGB pixels; all compositing is
//! aliased (no coverage or anti-aliasing) and single threaded.

pub mod blend;
pub mod buffer;
pub mod canvas;
pub mod clip;
pub mod color;
pub mod edge;
pub mod io;
pub mod math;
pub mod paint;
pub mod pixel;
pub mod scan;

pub use crate::blend::*;
pub use crate::buffer::*;
pub use crate::canvas::*;
pub use crate::clip::*;
pub use crate::color::*;
pub use crate::edge::*;
pub use crate::math::*;
pub use crate::paint::*;
pub use crate::pixel::*;
pub use crate::scan::*;
