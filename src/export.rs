//! Surface export
//!
//! Raw PPM dumps and PNG screenshots. Both strip the alpha byte from each
//! packed pixel and emit plain RGB triples, row-major, top row first.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::rasterizer::Surface;

fn rgb_bytes(surface: &Surface) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(surface.buffer.len() * 3);
    for &pixel in &surface.buffer {
        bytes.push(((pixel >> 16) & 0xFF) as u8);
        bytes.push(((pixel >> 8) & 0xFF) as u8);
        bytes.push((pixel & 0xFF) as u8);
    }
    bytes
}

/// Write the surface as binary PPM (P6): text header, then one RGB triple
/// per pixel with no padding.
pub fn write_ppm<W: Write>(surface: &Surface, writer: &mut W) -> io::Result<()> {
    write!(writer, "P6\n{} {}\n255\n", surface.width, surface.height)?;
    writer.write_all(&rgb_bytes(surface))
}

pub fn save_ppm<P: AsRef<Path>>(surface: &Surface, path: P) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_ppm(surface, &mut writer)
}

/// Save the surface as a PNG screenshot.
pub fn save_png<P: AsRef<Path>>(surface: &Surface, path: P) -> image::ImageResult<()> {
    image::save_buffer(
        path,
        &rgb_bytes(surface),
        surface.width,
        surface.height,
        image::ExtendedColorType::Rgb8,
    )
}
