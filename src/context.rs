//! Draw context
//!
//! Pairs a [`Canvas`] with a [`Surface`] and carries world-space drawing
//! requests across the float/int boundary: endpoints go through the canvas
//! transform, thickness is scaled by the canvas zoom, and both are
//! truncated into the rasterizer's integer domain.

use crate::canvas::Canvas;
use crate::rasterizer::{Color, Point, Surface, SurfaceError, Vec2};
use crate::scene::LineEntity;

pub struct DrawContext {
    pub canvas: Canvas,
    pub surface: Surface,
}

impl DrawContext {
    pub fn new(width: u32, height: u32) -> Result<Self, SurfaceError> {
        Ok(Self {
            canvas: Canvas::new(width, height),
            surface: Surface::new(width, height)?,
        })
    }

    /// Draw a world-space line segment. Thickness is given in world units
    /// and follows the canvas zoom, so lines keep their apparent width
    /// relative to the content.
    pub fn draw_thick_line(&mut self, start: Vec2, end: Vec2, thickness: f32, color: Color) {
        let screen_start = self.canvas.world_to_screen(start);
        let screen_end = self.canvas.world_to_screen(end);
        let scaled = thickness * self.canvas.scale();

        self.surface.draw_thick_line(
            Point::new(screen_start.x as i32, screen_start.y as i32),
            Point::new(screen_end.x as i32, screen_end.y as i32),
            scaled as i32,
            color,
        );
    }

    /// Draw a batch of positioned line entities: each line's endpoints are
    /// offset by its entity position before projection.
    pub fn draw_lines(&mut self, entities: &[LineEntity]) {
        for entity in entities {
            let start = entity.position.apply(entity.line.start);
            let end = entity.position.apply(entity.line.end);
            self.draw_thick_line(start, end, entity.line.thickness, entity.line.color);
        }
    }

    /// Resize the surface and the canvas viewport together. They must not
    /// drift apart, or projection centers on the wrong point.
    pub fn handle_resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        self.surface.resize(width, height)?;
        self.canvas.resize(width, height);
        Ok(())
    }
}
