//! CPU-side pixel surface
//!
//! A Surface owns a contiguous buffer of packed 0xAARRGGBB pixels plus the
//! cached fill buffer used for fast clears. Resizing never grows in place:
//! the old buffer is dropped and a fresh one allocated, so callers must not
//! hold references across a resize.

use log::debug;
use std::collections::TryReserveError;

use super::color::Color;

/// Error type for surface buffer allocation
#[derive(Debug)]
pub enum SurfaceError {
    /// Requested dimensions do not fit the address space
    TooLarge { width: u32, height: u32 },
    /// The allocator refused the buffer
    Allocation(TryReserveError),
}

impl From<TryReserveError> for SurfaceError {
    fn from(e: TryReserveError) -> Self {
        SurfaceError::Allocation(e)
    }
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SurfaceError::TooLarge { width, height } => {
                write!(f, "surface {}x{} exceeds addressable memory", width, height)
            }
            SurfaceError::Allocation(e) => write!(f, "buffer allocation failed: {}", e),
        }
    }
}

/// Pixel buffer with explicit dimensions.
///
/// `buffer` is row-major, `width * height` packed pixels, and that length
/// relationship holds at all times. The presentation layer reads `buffer`
/// directly; everything else goes through the drawing methods.
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub buffer: Vec<u32>,

    // Cached solid-color fill for clear(). Rebuilt when the clear color
    // changes, and lazily when the surface dimensions no longer match
    // clear_size (i.e. after a resize).
    clear_cache: Vec<u32>,
    clear_size: (u32, u32),
    clear_color: Color,
}

fn pixel_count(width: u32, height: u32) -> Result<usize, SurfaceError> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or(SurfaceError::TooLarge { width, height })
}

fn alloc_pixels(width: u32, height: u32) -> Result<Vec<u32>, SurfaceError> {
    let len = pixel_count(width, height)?;
    let mut buffer = Vec::new();
    buffer.try_reserve_exact(len)?;
    buffer.resize(len, 0);
    Ok(buffer)
}

impl Surface {
    /// Allocate a zero-initialized surface. The buffer is dropped with the
    /// owner; there is no explicit destroy call.
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            width,
            height,
            buffer: alloc_pixels(width, height)?,
            clear_cache: Vec::new(),
            clear_size: (0, 0),
            clear_color: Color::BLACK,
        })
    }

    /// Throw away the pixel buffer and allocate a fresh zeroed one.
    ///
    /// Previous pixel contents are lost by design. The old buffer is freed
    /// before the new allocation so a resize never holds both; if the new
    /// allocation fails the surface is left empty (0x0), not pointing at
    /// stale pixels.
    pub fn resize(&mut self, new_width: u32, new_height: u32) -> Result<(), SurfaceError> {
        self.buffer = Vec::new();
        self.width = 0;
        self.height = 0;

        self.buffer = alloc_pixels(new_width, new_height)?;
        self.width = new_width;
        self.height = new_height;
        Ok(())
    }

    /// Record the clear color and rebuild the fill cache for it.
    pub fn set_clear_color(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.clear_color = color;
        self.rebuild_clear_cache()
    }

    /// Fill the whole buffer with the recorded clear color.
    ///
    /// At a stable size this is a single bulk copy out of the cache; the
    /// cache is regenerated only when the dimensions moved since it was
    /// built (first clear, or the clear after a resize).
    pub fn clear(&mut self) -> Result<(), SurfaceError> {
        if self.clear_size != (self.width, self.height) {
            self.rebuild_clear_cache()?;
        }
        self.buffer.copy_from_slice(&self.clear_cache);
        Ok(())
    }

    fn rebuild_clear_cache(&mut self) -> Result<(), SurfaceError> {
        debug!("rebuilding clear cache at {}x{}", self.width, self.height);

        let len = self.buffer.len();
        if self.clear_size != (self.width, self.height) {
            self.clear_cache = Vec::new();
            self.clear_cache.try_reserve_exact(len)?;
            self.clear_size = (self.width, self.height);
        }

        let packed = self.clear_color.pack();
        self.clear_cache.clear();
        self.clear_cache.resize(len, packed);
        Ok(())
    }
}
