//! Drawing primitives
//!
//! Scanline triangle fill and thick-line rasterization. Geometry that falls
//! outside the surface is clipped or dropped silently; nothing in here
//! reports an error.

use super::color::Color;
use super::math::Vec2;
use super::surface::Surface;

/// Integer pixel coordinate. Only the rasterizer speaks in these; everything
/// upstream works in float world or screen space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Surface {
    /// Write one packed pixel. Out-of-bounds coordinates are ignored; this
    /// is the bounds policy for every drawing call built on top.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: u32) {
        if x >= 0 && (x as u32) < self.width && y >= 0 && (y as u32) < self.height {
            self.buffer[y as usize * self.width as usize + x as usize] = color;
        }
    }

    /// Fill the horizontal run y, [x0, x1] inclusive.
    ///
    /// The clip sequence is ordered so every boundary case lands right:
    /// reject the row, order the endpoints, reject fully-outside spans,
    /// then clamp what remains into the surface.
    pub fn draw_span(&mut self, y: i32, x0: i32, x1: i32, color: u32) {
        if y < 0 || y as u32 >= self.height {
            return;
        }

        let (mut x0, mut x1) = if x0 > x1 { (x1, x0) } else { (x0, x1) };

        // Entirely left or right of the surface
        if x1 < 0 || x0 >= self.width as i32 {
            return;
        }

        if x0 < 0 {
            x0 = 0;
        }
        if x1 >= self.width as i32 {
            x1 = self.width as i32 - 1;
        }

        let row = y as usize * self.width as usize;
        self.buffer[row + x0 as usize..=row + x1 as usize].fill(color);
    }

    /// 1-pixel Bresenham line.
    pub fn plot_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Color) {
        // Whole segment outside the surface
        if x0.max(x1) < 0
            || x0.min(x1) >= self.width as i32
            || y0.max(y1) < 0
            || y0.min(y1) >= self.height as i32
        {
            return;
        }

        let packed = color.pack();

        // Deltas and the error term are differenced in i64; coordinates near
        // the i32 limits must not overflow
        let dx = (x1 as i64 - x0 as i64).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let dy = -(y1 as i64 - y0 as i64).abs();
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        let mut x = x0;
        let mut y = y0;
        loop {
            self.set_pixel(x, y, packed);
            if x == x1 && y == y1 {
                break;
            }

            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Scanline fill of the triangle (p0, p1, p2).
    ///
    /// Flat-split walk: vertices sorted by ascending y, then rows advance
    /// two edge trackers by their inverse slopes, top-to-middle first and
    /// middle-to-bottom second. Both row ranges exclude their upper bound
    /// so the middle scanline is drawn exactly once. Rows outside the
    /// surface advance the trackers in a single step rather than being
    /// walked.
    pub fn draw_filled_triangle(&mut self, p0: Point, p1: Point, p2: Point, color: u32) {
        let (mut p0, mut p1, mut p2) = (p0, p1, p2);
        if p1.y < p0.y {
            std::mem::swap(&mut p0, &mut p1);
        }
        if p2.y < p0.y {
            std::mem::swap(&mut p0, &mut p2);
        }
        if p2.y < p1.y {
            std::mem::swap(&mut p1, &mut p2);
        }

        // Inverse slopes (dx per row), differenced in i64 so coordinates
        // near the i32 limits cannot overflow; a zero-height edge
        // contributes none
        let dx01 = if p1.y != p0.y {
            (p1.x as i64 - p0.x as i64) as f32 / (p1.y as i64 - p0.y as i64) as f32
        } else {
            0.0
        };
        let dx02 = if p2.y != p0.y {
            (p2.x as i64 - p0.x as i64) as f32 / (p2.y as i64 - p0.y as i64) as f32
        } else {
            0.0
        };
        let dx12 = if p2.y != p1.y {
            (p2.x as i64 - p1.x as i64) as f32 / (p2.y as i64 - p1.y as i64) as f32
        } else {
            0.0
        };

        let height = self.height as i32;

        // Top half: both edges leave the top vertex. Rows above the surface
        // are collapsed into one tracker step.
        let mut xa = p0.x as f32;
        let mut xb = p0.x as f32;
        let skipped = (p1.y.min(0) as i64 - p0.y as i64).max(0) as f32;
        xa += dx01 * skipped;
        xb += dx02 * skipped;
        for y in p0.y.max(0)..p1.y.min(height) {
            self.draw_span(y, xa.round() as i32, xb.round() as i32, color);
            xa += dx01;
            xb += dx02;
        }

        // Bottom half: the short edge restarts at the middle vertex
        xa = p1.x as f32;
        let skipped = (p2.y.min(0) as i64 - p1.y as i64).max(0) as f32;
        xa += dx12 * skipped;
        xb += dx02 * skipped;
        for y in p1.y.max(0)..p2.y.min(height) {
            self.draw_span(y, xa.round() as i32, xb.round() as i32, color);
            xa += dx12;
            xb += dx02;
        }
    }

    /// Draw the segment p0..p1 as a quad `thickness` pixels wide, built by
    /// offsetting both endpoints along the unit perpendicular and filling
    /// the two triangles that share the (v1, v2) diagonal.
    ///
    /// Corners are clamped into the surface after they are computed, not
    /// clipped as lines; a very thick line reaching far outside the surface
    /// distorts near the edges.
    pub fn draw_thick_line(&mut self, p0: Point, p1: Point, thickness: i32, color: Color) {
        if self.width < 1 || self.height < 1 {
            return;
        }

        let delta = Vec2::new(
            (p1.x as i64 - p0.x as i64) as f32,
            (p1.y as i64 - p0.y as i64) as f32,
        );
        if delta.len() == 0.0 {
            return;
        }

        // Unit perpendicular scaled to half the width
        let half_w = thickness as f32 * 0.5;
        let offset = delta.perpendicular().scale(half_w);

        let v0 = self.clamp_point(Point::new(
            (p0.x as f32 + offset.x).round() as i32,
            (p0.y as f32 + offset.y).round() as i32,
        ));
        let v1 = self.clamp_point(Point::new(
            (p0.x as f32 - offset.x).round() as i32,
            (p0.y as f32 - offset.y).round() as i32,
        ));
        let v2 = self.clamp_point(Point::new(
            (p1.x as f32 + offset.x).round() as i32,
            (p1.y as f32 + offset.y).round() as i32,
        ));
        let v3 = self.clamp_point(Point::new(
            (p1.x as f32 - offset.x).round() as i32,
            (p1.y as f32 - offset.y).round() as i32,
        ));

        let packed = color.pack();
        self.draw_filled_triangle(v0, v1, v2, packed);
        self.draw_filled_triangle(v1, v2, v3, packed);
    }

    fn clamp_point(&self, p: Point) -> Point {
        Point {
            x: p.x.clamp(0, self.width as i32 - 1),
            y: p.y.clamp(0, self.height as i32 - 1),
        }
    }
}
