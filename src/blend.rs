//! Porter-Duff compositing
//!
//! All arithmetic is per channel on premultiplied pixels, so the formulas
//! reduce to scaling by an alpha factor and adding.
//!
//! See <https://en.wikipedia.org/wiki/Alpha_compositing>

use crate::pixel::Pixel;

/// The twelve Porter-Duff blend modes
///
/// `Sa`/`Da` below are the source and destination alpha, and products are
/// taken per channel.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BlendMode {
    /// 0
    Clear,
    /// S
    Src,
    /// D
    Dst,
    /// S + (1 - Sa)*D
    SrcOver,
    /// D + (1 - Da)*S
    DstOver,
    /// Da * S
    SrcIn,
    /// Sa * D
    DstIn,
    /// (1 - Da)*S
    SrcOut,
    /// (1 - Sa)*D
    DstOut,
    /// Da*S + (1 - Sa)*D
    SrcATop,
    /// Sa*D + (1 - Da)*S
    DstATop,
    /// (1 - Sa)*D + (1 - Da)*S
    Xor,
}

impl Default for BlendMode {
    fn default() -> BlendMode {
        BlendMode::SrcOver
    }
}

/// Composite `src` against `dst`
///
/// Pure and total over all modes; the match is exhaustive so adding a mode
/// without a formula will not compile.
pub fn blend(mode: BlendMode, src: Pixel, dst: Pixel) -> Pixel {
    let sa = src.alpha();
    let da = dst.alpha();
    match mode {
        BlendMode::Clear => Pixel::ZERO,
        BlendMode::Src => src,
        BlendMode::Dst => dst,
        BlendMode::SrcOver => src + dst.scale(255 - sa),
        BlendMode::DstOver => dst + src.scale(255 - da),
        BlendMode::SrcIn => src.scale(da),
        BlendMode::DstIn => dst.scale(sa),
        BlendMode::SrcOut => src.scale(255 - da),
        BlendMode::DstOut => dst.scale(255 - sa),
        BlendMode::SrcATop => src.scale(da) + dst.scale(255 - sa),
        BlendMode::DstATop => dst.scale(sa) + src.scale(255 - da),
        BlendMode::Xor => dst.scale(255 - sa) + src.scale(255 - da),
    }
}
