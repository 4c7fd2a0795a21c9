//! Saving and loading surfaces as image files
//!
//! Test-support tooling for golden-image style comparisons; the rendering
//! core itself never touches the filesystem. Channels are written exactly
//! as stored, premultiplied.

use crate::buffer::Surface;
use crate::pixel::Pixel;
use std::path::Path;

/// Errors from reading or writing image files
#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Write the surface to an RGBA image file
///
/// The format is picked from the file extension, as with
/// [`image::save_buffer`].
pub fn write_file<P: AsRef<Path>>(surface: &Surface, filename: P) -> Result<(), IoError> {
    image::save_buffer(
        filename,
        &surface.to_rgba8(),
        surface.width() as u32,
        surface.height() as u32,
        image::ColorType::Rgba8,
    )?;
    Ok(())
}

/// Read an RGBA image file back into a surface
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<Surface, IoError> {
    let img = image::open(filename)?.to_rgba8();
    let (w, h) = img.dimensions();
    let mut surface = Surface::new(w as usize, h as usize);
    for (x, y, p) in img.enumerate_pixels() {
        let [r, g, b, a] = p.0;
        surface[(x as usize, y as usize)] = Pixel::pack(a, r, g, b);
    }
    Ok(surface)
}

/// Pixel-exact comparison of two image files
///
/// Differing pixels are printed to ease hunting down a regression.
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, IoError> {
    let s1 = read_file(f1)?;
    let s2 = read_file(f2)?;
    if s1.width() != s2.width() || s1.height() != s2.height() {
        return Ok(false);
    }
    let mut same = true;
    for (i, (p1, p2)) in s1.pixels().iter().zip(s2.pixels().iter()).enumerate() {
        if p1 != p2 {
            println!("({},{}): {:08x} {:08x}", i % s1.width(), i / s1.width(), p1.0, p2.0);
            same = false;
        }
    }
    Ok(same)
}
