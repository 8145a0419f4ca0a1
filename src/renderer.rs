//! Presentation layer
//!
//! Uploads the software surface to the GPU each frame. The packed ARGB
//! buffer is unpacked into a reused RGBA staging buffer, turned into a
//! nearest-filtered texture, and drawn stretched over the whole window.

use macroquad::color::WHITE;
use macroquad::math::vec2;
use macroquad::texture::{draw_texture_ex, DrawTextureParams, FilterMode, Texture2D};
use macroquad::window::{screen_height, screen_width};

use crate::context::DrawContext;
use crate::rasterizer::{Color, SurfaceError};

pub struct Renderer {
    pub ctx: DrawContext,
    staging: Vec<u8>,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            ctx: DrawContext::new(width, height)?,
            staging: Vec::new(),
        })
    }

    pub fn set_clear_color(&mut self, color: Color) -> Result<(), SurfaceError> {
        self.ctx.surface.set_clear_color(color)
    }

    pub fn handle_resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        log::info!("resizing render surface to {}x{}", width, height);
        self.ctx.handle_resize(width, height)
    }

    /// Upload the current surface contents and draw them over the window.
    pub fn present(&mut self) {
        let surface = &self.ctx.surface;

        self.staging.clear();
        self.staging.reserve(surface.buffer.len() * 4);
        for &pixel in &surface.buffer {
            self.staging.push(((pixel >> 16) & 0xFF) as u8);
            self.staging.push(((pixel >> 8) & 0xFF) as u8);
            self.staging.push((pixel & 0xFF) as u8);
            self.staging.push(((pixel >> 24) & 0xFF) as u8);
        }

        let texture =
            Texture2D::from_rgba8(surface.width as u16, surface.height as u16, &self.staging);
        texture.set_filter(FilterMode::Nearest);

        draw_texture_ex(
            &texture,
            0.0,
            0.0,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(screen_width(), screen_height())),
                ..Default::default()
            },
        );
    }
}
