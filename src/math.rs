//! Fixed point arithmetic shared by the blend engine
//!
//! The interesting piece is [`scale_packed`]: all four 8-bit channels of a
//! packed pixel are spread into 16-bit lanes of a single `u64` so one
//! multiply and one rounding correction scale every channel at once.
//!
//! See <https://en.wikipedia.org/wiki/SWAR>

/// Round half up to the nearest integer.
///
/// Scanline indices and span columns are derived with this rule. Note it
/// differs from `f64::round` for negative half values (`-0.5` rounds to 0).
pub fn round_to_int(v: f64) -> i32 {
    (v + 0.5).floor() as i32
}

/// Exact `round(x / 255)` for `x` in `[0, 255*255 + 255]`.
pub fn div255(x: u32) -> u32 {
    let t = x + 128;
    (t + (t >> 8)) >> 8
}

/// Multiply two u8 values in `[0,255]` fixed point, rounding exactly.
///
/// `multiply_u8(a, s) == round(a * s / 255)` for every `(a, s)` pair.
pub fn multiply_u8(a: u8, s: u8) -> u8 {
    div255(u32::from(a) * u32::from(s)) as u8
}

/// `0xXX` replicated into the low byte of each 16-bit lane.
fn lane_splat(x: u64) -> u64 {
    (x << 48) | (x << 32) | (x << 16) | x
}

/// Spread `0xAARRGGBB` into `0x00AA00GG00RR00BB`.
///
/// Each channel sits in its own 16-bit lane with 8 bits of headroom, so a
/// multiply by an 8-bit scalar cannot carry into the neighboring lane.
fn expand_to_64(p: u32) -> u64 {
    let ag = u64::from(p & 0xFF00_FF00);
    let rb = u64::from(p & 0x00FF_00FF);
    (ag << 24) | rb
}

/// Inverse of [`expand_to_64`]: collapse `0x00AA00GG00RR00BB` back into
/// `0xAARRGGBB`. Only the low byte of each lane is kept.
fn compress_to_32(v: u64) -> u32 {
    (((v >> 24) & 0xFF00_FF00) | (v & 0x00FF_00FF)) as u32
}

/// Word-parallel `round(channel * scale / 255)` over all four packed lanes.
///
/// Per lane this computes `t = v*scale + 128`, folds the overflow byte back
/// in with `t += t >> 8`, and keeps `t >> 8`. The largest intermediate,
/// `255*255 + 128`, still fits a 16-bit lane, so lanes never interact.
/// Results are bit-identical to [`multiply_u8`] applied per channel.
pub fn scale_packed(p: u32, scale: u8) -> u32 {
    let mut v = expand_to_64(p) * u64::from(scale);
    v += lane_splat(128);
    v += (v >> 8) & lane_splat(0xFF);
    v >>= 8;
    compress_to_32(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_half_up() {
        assert_eq!(round_to_int(0.0), 0);
        assert_eq!(round_to_int(0.49), 0);
        assert_eq!(round_to_int(0.5), 1);
        assert_eq!(round_to_int(1.49), 1);
        assert_eq!(round_to_int(2.5), 3);
        assert_eq!(round_to_int(-0.5), 0);
        assert_eq!(round_to_int(-1.5), -1);
        assert_eq!(round_to_int(-1.51), -2);
    }

    #[test]
    fn div255_matches_float_rounding() {
        for x in 0..=255u32 * 255 {
            let want = (f64::from(x) / 255.0).round() as u32;
            assert_eq!(div255(x), want, "x = {}", x);
        }
    }

    #[test]
    fn scale_packed_matches_per_channel() {
        // Every (value, scale) pair in every lane position, with unequal
        // values in the other lanes to catch cross-lane carries.
        for v in 0..=255u32 {
            let a = v as u8;
            let r = (255 - v) as u8;
            let g = (v ^ 0x5A) as u8;
            let b = ((v + 91) % 256) as u8;
            let p = (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b);
            for s in 0..=255u8 {
                let out = scale_packed(p, s);
                assert_eq!((out >> 24) as u8, multiply_u8(a, s), "alpha v={} s={}", v, s);
                assert_eq!((out >> 16) as u8, multiply_u8(r, s), "red v={} s={}", v, s);
                assert_eq!((out >> 8) as u8, multiply_u8(g, s), "green v={} s={}", v, s);
                assert_eq!(out as u8, multiply_u8(b, s), "blue v={} s={}", v, s);
            }
        }
    }
}
