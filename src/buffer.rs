//! Pixel surface

use crate::pixel::Pixel;
use std::ops::{Index, IndexMut};

/// Owned width x height pixel buffer
///
/// Pixels are stored row-major; a pixel lives at `y * width + x`. Access is
/// bounds checked, so a draw call can never write outside the buffer.
///
///     use polycanvas::{Pixel, Surface};
///
///     let mut surface = Surface::new(2, 2);
///     assert_eq!(surface[(0, 0)], Pixel::ZERO);
///     surface[(1, 0)] = Pixel::pack(255, 255, 0, 0);
///     assert_eq!(surface[(1, 0)].red(), 255);
///
#[derive(Debug, Default, Clone)]
pub struct Surface {
    data: Vec<Pixel>,
    width: usize,
    height: usize,
}

impl Surface {
    /// Create a fully transparent surface
    ///
    /// Allocates width * height pixels; panics on a zero dimension.
    pub fn new(width: usize, height: usize) -> Self {
        if width == 0 || height == 0 {
            panic!("cannot create a surface with 0 width or height");
        }
        Surface { data: vec![Pixel::ZERO; width * height], width, height }
    }

    /// Surface width in pixels
    pub fn width(&self) -> usize {
        self.width
    }
    /// Surface height in pixels
    pub fn height(&self) -> usize {
        self.height
    }
    /// Number of pixels in the buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reset every pixel to fully transparent
    pub fn clear(&mut self) {
        self.data.iter_mut().for_each(|p| *p = Pixel::ZERO);
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }
    /// All pixels, row-major, mutable
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.data
    }

    /// Copy out the buffer as RGBA bytes, one pixel per four bytes
    ///
    /// Channels stay premultiplied; this is the layout the [`crate::io`]
    /// helpers write to file.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() * 4);
        for p in &self.data {
            out.extend_from_slice(&[p.red(), p.green(), p.blue(), p.alpha()]);
        }
        out
    }
}

impl Index<(usize, usize)> for Surface {
    type Output = Pixel;
    fn index(&self, index: (usize, usize)) -> &Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize, usize)> for Surface {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Pixel {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
