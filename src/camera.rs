//! Camera view
//!
//! A position plus a zoom factor, expressed as a thin adapter over
//! [`Canvas`]: the camera builds an equivalent canvas (scale = zoom,
//! translation = position * zoom) so both mappings share one transform
//! path and one Y convention.

use crate::canvas::{Canvas, CanvasError};
use crate::rasterizer::Vec2;

/// Replacement coordinate for projected points that land far outside the
/// viewport. Extreme screen coordinates otherwise lose float precision and
/// can wrap back into view when rasterized.
pub const OFFSCREEN_SENTINEL: f32 = -10000.0;

/// Axis-aligned world-space rectangle visible through a camera.
#[derive(Debug, Clone, Copy)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Bounds {
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left && p.x <= self.right && p.y >= self.bottom && p.y <= self.top
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.top - self.bottom
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Camera {
    pub position: Vec2,
    pub zoom: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl Camera {
    pub fn new(position: Vec2, zoom: f32) -> Self {
        Self { position, zoom }
    }

    /// Build the canvas this camera is equivalent to. World points map as
    /// `(world - position) * zoom` before recentering, so the translation
    /// entering the canvas carries the zoom factor.
    pub fn to_canvas(&self, width: u32, height: u32) -> Canvas {
        let mut canvas = Canvas::new(width, height);
        canvas.set_scale(self.zoom);
        canvas.translate(self.position.x * self.zoom, self.position.y * self.zoom);
        canvas
    }

    /// Project a world point to screen pixels. Each axis that lands outside
    /// `[-viewport, 2 * viewport]` snaps to [`OFFSCREEN_SENTINEL`]
    /// independently of the other.
    pub fn world_to_screen(&self, world: Vec2, width: u32, height: u32) -> Vec2 {
        let mut screen = self.to_canvas(width, height).world_to_screen(world);

        let w = width as f32;
        let h = height as f32;
        if screen.x < -w || screen.x > 2.0 * w {
            screen.x = OFFSCREEN_SENTINEL;
        }
        if screen.y < -h || screen.y > 2.0 * h {
            screen.y = OFFSCREEN_SENTINEL;
        }
        screen
    }

    /// Invert the projection. Fails when `zoom` is zero, same as the canvas
    /// it adapts.
    pub fn screen_to_world(
        &self,
        screen: Vec2,
        width: u32,
        height: u32,
    ) -> Result<Vec2, CanvasError> {
        self.to_canvas(width, height).screen_to_world(screen)
    }

    /// World-space rectangle currently in view: half-extents of
    /// `(viewport / 2) / zoom` around the camera position.
    pub fn visible_bounds(&self, width: u32, height: u32) -> Bounds {
        let half_width = width as f32 / (2.0 * self.zoom);
        let half_height = height as f32 / (2.0 * self.zoom);

        Bounds {
            left: self.position.x - half_width,
            right: self.position.x + half_width,
            bottom: self.position.y - half_height,
            top: self.position.y + half_height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_vec2_near(a: Vec2, b: Vec2) {
        assert!(
            (a.x - b.x).abs() < 0.001 && (a.y - b.y).abs() < 0.001,
            "expected {:?} ~= {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_default_camera_centers_origin() {
        let camera = Camera::default();
        let screen = camera.world_to_screen(Vec2::ZERO, 800, 600);
        assert_vec2_near(screen, Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_world_to_screen_formula() {
        let camera = Camera::new(Vec2::new(3.0, 4.0), 2.0);
        // x: (10 - 3) * 2 + 400, y: 300 - (6 - 4) * 2
        let screen = camera.world_to_screen(Vec2::new(10.0, 6.0), 800, 600);
        assert_vec2_near(screen, Vec2::new(414.0, 296.0));
    }

    #[test]
    fn test_screen_to_world_formula() {
        let camera = Camera::new(Vec2::new(3.0, 4.0), 2.0);
        // x: (0 - 400) / 2 + 3, y: (300 - 0) / 2 + 4
        let world = camera.screen_to_world(Vec2::ZERO, 800, 600).unwrap();
        assert_vec2_near(world, Vec2::new(-197.0, 154.0));
    }

    #[test]
    fn test_round_trip() {
        let camera = Camera::new(Vec2::new(5.0, -2.0), 0.5);
        let world = Vec2::new(17.3, -42.9);
        let screen = camera.world_to_screen(world, 800, 600);
        let back = camera.screen_to_world(screen, 800, 600).unwrap();
        assert_vec2_near(back, world);
    }

    #[test]
    fn test_far_point_snaps_per_axis() {
        let camera = Camera::default();
        // x wildly off-screen, y centered: only x snaps
        let screen = camera.world_to_screen(Vec2::new(100_000.0, 0.0), 800, 600);
        assert_eq!(screen.x, OFFSCREEN_SENTINEL);
        assert_eq!(screen.y, 300.0);
    }

    #[test]
    fn test_point_just_inside_margin_is_kept() {
        let camera = Camera::default();
        // Lands at screen x = 1500, inside the 2 * width margin
        let screen = camera.world_to_screen(Vec2::new(1100.0, 0.0), 800, 600);
        assert_vec2_near(screen, Vec2::new(1500.0, 300.0));
    }

    #[test]
    fn test_zero_zoom_cannot_unproject() {
        let camera = Camera::new(Vec2::ZERO, 0.0);
        let result = camera.screen_to_world(Vec2::new(400.0, 300.0), 800, 600);
        assert!(matches!(result, Err(CanvasError::DegenerateTransform)));
    }

    #[test]
    fn test_visible_bounds_extents() {
        let camera = Camera::new(Vec2::new(10.0, 20.0), 2.0);
        let bounds = camera.visible_bounds(800, 600);

        assert_eq!(bounds.left, -190.0);
        assert_eq!(bounds.right, 210.0);
        assert_eq!(bounds.bottom, -130.0);
        assert_eq!(bounds.top, 170.0);
        assert_eq!(bounds.width(), 400.0);
        assert_eq!(bounds.height(), 300.0);

        assert!(bounds.contains(Vec2::ZERO));
        assert!(bounds.contains(Vec2::new(10.0, 20.0)));
        assert!(!bounds.contains(Vec2::new(300.0, 0.0)));
    }

    #[test]
    fn test_matches_equivalent_canvas() {
        let camera = Camera::new(Vec2::new(-8.0, 3.5), 1.5);
        let canvas = camera.to_canvas(800, 600);

        let world = Vec2::new(12.0, -7.0);
        assert_vec2_near(
            camera.world_to_screen(world, 800, 600),
            canvas.world_to_screen(world),
        );
    }
}
