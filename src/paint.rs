//! Paint descriptor

use crate::blend::BlendMode;
use crate::color::Rgba;
use crate::pixel::Pixel;

/// What a fill draws with: a solid color and a compositing mode
///
/// Paints are read-only inputs to a draw call and are not retained.
#[derive(Debug, Default, Copy, Clone)]
pub struct Paint {
    pub color: Rgba,
    pub mode: BlendMode,
}

impl Paint {
    /// Create a paint with the default [`BlendMode::SrcOver`]
    pub fn new(color: Rgba) -> Self {
        Paint { color, mode: BlendMode::SrcOver }
    }
    /// Create a paint with an explicit blend mode
    pub fn with_mode(color: Rgba, mode: BlendMode) -> Self {
        Paint { color, mode }
    }

    /// Packed premultiplied source pixel for this paint
    ///
    /// The source color is constant across a fill, so this conversion
    /// happens once per draw call rather than per pixel.
    pub fn src_pixel(&self) -> Pixel {
        self.color.premultiply()
    }
}
