//! Color types for the rasterizer
//!
//! Colors are authored as normalized floats and quantized once, at the
//! moment they enter the pixel buffer.

use serde::{Deserialize, Serialize};

/// RGBA color, each channel a normalized float in [0, 1]
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color { r: 0.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 };
    pub const RED: Color = Color { r: 1.0, g: 0.0, b: 0.0, a: 1.0 };
    pub const GREEN: Color = Color { r: 0.0, g: 1.0, b: 0.0, a: 1.0 };
    pub const BLUE: Color = Color { r: 0.0, g: 0.0, b: 1.0, a: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Pack into a 0xAARRGGBB pixel.
    ///
    /// Channels are quantized by truncation (`channel * 255` floored, not
    /// rounded) and the alpha byte is forced fully opaque no matter what the
    /// input alpha was. Both are intentional and relied on for pixel-exact
    /// output; `as u8` additionally saturates channels outside [0, 1].
    pub fn pack(self) -> u32 {
        let r = (self.r * 255.0) as u8;
        let g = (self.g * 255.0) as u8;
        let b = (self.b * 255.0) as u8;
        let a = 255u32;

        (a << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
    }
}
