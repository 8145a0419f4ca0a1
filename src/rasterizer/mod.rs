//! Software rasterizer
//!
//! CPU-side drawing into a plain `Vec<u32>` of packed 0xAARRGGBB pixels:
//! - Spans, Bresenham lines, scanline-filled triangles
//! - Thick lines built from two triangles over a perpendicular-offset quad
//! - Cached clear color so per-frame clears are a single bulk copy

mod color;
mod draw;
mod math;
mod surface;

pub use color::*;
pub use draw::*;
pub use math::*;
pub use surface::*;

/// Default surface dimensions
pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
