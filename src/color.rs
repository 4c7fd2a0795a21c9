//! Colors

use crate::math::multiply_u8;
use crate::pixel::Pixel;

/// Convert an f64 `[0,1]` component to a u8 `[0,255]` component
pub fn cu8(v: f64) -> u8 {
    (v * 255.0).round() as u8
}

/// Color as red, green, blue, and alpha float components in `[0,1]`
///
/// Channel ranges are a documented caller precondition, not validated here.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct Rgba {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
    /// Alpha
    pub a: f64,
}

impl Rgba {
    /// Create a new color
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Rgba { r, g, b, a }
    }
    /// Create a new color with alpha 1
    pub fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }
    /// Fully transparent color (0,0,0,0)
    pub fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    /// Convert to a packed premultiplied [`Pixel`]
    ///
    /// Each channel becomes `round(c * 255)`; color channels are then
    /// scaled by the integer alpha with exact divide-by-255 rounding.
    ///
    ///     use polycanvas::{Pixel, Rgba};
    ///
    ///     let half_red = Rgba::new(1.0, 0.0, 0.0, 0.5);
    ///     assert_eq!(half_red.premultiply(), Pixel::pack(128, 128, 0, 0));
    ///
    pub fn premultiply(&self) -> Pixel {
        let a = cu8(self.a);
        Pixel::pack(
            a,
            multiply_u8(cu8(self.r), a),
            multiply_u8(cu8(self.g), a),
            multiply_u8(cu8(self.b), a),
        )
    }
}
