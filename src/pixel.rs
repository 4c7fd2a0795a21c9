//! Packed premultiplied pixel

use crate::math::scale_packed;

/// Packed 32-bit premultiplied ARGB pixel
///
/// Channel layout is alpha, red, green, blue from the high byte down. Color
/// channels are stored already scaled by alpha, so every channel is at most
/// the alpha channel.
///
///     use polycanvas::Pixel;
///
///     let p = Pixel::pack(255, 128, 64, 0);
///     assert_eq!(p.alpha(), 255);
///     assert_eq!(p.red(), 128);
///     assert_eq!(p.green(), 64);
///     assert_eq!(p.blue(), 0);
///
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Pixel(pub u32);

impl Pixel {
    /// Fully transparent pixel, all channels zero
    pub const ZERO: Pixel = Pixel(0);

    /// Pack four 8-bit channels
    ///
    /// Channels are taken as already premultiplied; nothing is validated.
    pub fn pack(a: u8, r: u8, g: u8, b: u8) -> Self {
        Pixel((u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b))
    }

    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }
    pub fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Scale all four channels by `s/255`, rounding each channel exactly
    pub fn scale(self, s: u8) -> Self {
        Pixel(scale_packed(self.0, s))
    }
}

/// Per-channel sum, clamped at 255
///
/// The Porter-Duff formulas only ever add two contributions whose channel
/// sums stay within range; the clamp guards against rounding drift in
/// caller-supplied colors.
impl std::ops::Add for Pixel {
    type Output = Pixel;
    fn add(self, rhs: Pixel) -> Pixel {
        Pixel::pack(
            self.alpha().saturating_add(rhs.alpha()),
            self.red().saturating_add(rhs.red()),
            self.green().saturating_add(rhs.green()),
            self.blue().saturating_add(rhs.blue()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_roundtrip() {
        let p = Pixel::pack(0x12, 0x34, 0x56, 0x78);
        assert_eq!(p.0, 0x1234_5678);
        assert_eq!(p.alpha(), 0x12);
        assert_eq!(p.red(), 0x34);
        assert_eq!(p.green(), 0x56);
        assert_eq!(p.blue(), 0x78);
    }

    #[test]
    fn scale_identity_and_zero() {
        let p = Pixel::pack(200, 150, 100, 50);
        assert_eq!(p.scale(255), p);
        assert_eq!(p.scale(0), Pixel::ZERO);
    }

    #[test]
    fn add_clamps_per_channel() {
        let p = Pixel::pack(200, 10, 128, 0);
        let q = Pixel::pack(100, 20, 128, 0);
        assert_eq!(p + q, Pixel::pack(255, 30, 255, 0));
    }
}
