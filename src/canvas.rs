//! Canvas transform stack
//!
//! World-to-screen mapping built from a uniform scale and a translation,
//! with a bounded save/restore stack. The matrix is always recomputed from
//! `(scale, translation)` after a mutation, never edited in place, so a
//! restored state reproduces the exact transform that was saved.

use crate::rasterizer::{Mat3, Vec2};

/// Depth of the save/restore stack. Saves past this depth are dropped.
pub const CANVAS_STACK_MAX: usize = 16;

/// Screen Y grows down while world Y grows up. The sign lives here and is
/// applied only at the world/screen boundary crossings below.
pub const SCREEN_Y_FLIP: f32 = -1.0;

#[derive(Debug, Clone, Copy)]
pub enum CanvasError {
    /// The transform cannot be inverted (scale is zero or not finite)
    DegenerateTransform,
}

impl std::fmt::Display for CanvasError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CanvasError::DegenerateTransform => {
                write!(f, "canvas transform is degenerate and cannot be inverted")
            }
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct SavedTransform {
    scale: f32,
    translation: Vec2,
}

/// Pan/zoom view over world space.
///
/// Moving the canvas right shifts content left, like a camera: the stored
/// translation enters the transform negated. Screen coordinates put the
/// world origin at the viewport center.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: f32,
    height: f32,
    scale: f32,
    translation: Vec2,
    transform: Mat3,
    stack: Vec<SavedTransform>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut canvas = Self {
            width: width as f32,
            height: height as f32,
            scale: 1.0,
            translation: Vec2::ZERO,
            transform: Mat3::IDENTITY,
            stack: Vec::with_capacity(CANVAS_STACK_MAX),
        };
        canvas.update_transform();
        canvas
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    pub fn transform(&self) -> Mat3 {
        self.transform
    }

    /// Shift the view. Deltas accumulate onto the current translation.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.translation = self.translation + Vec2::new(dx, dy);
        self.update_transform();
    }

    /// Replace the uniform scale factor. Not clamped here; callers that
    /// want zoom limits clamp before calling.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.update_transform();
    }

    /// Update the viewport dimensions used for centering.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width as f32;
        self.height = height as f32;
    }

    /// Push the current scale and translation. Returns false (and saves
    /// nothing) once the stack is full.
    pub fn save(&mut self) -> bool {
        if self.stack.len() >= CANVAS_STACK_MAX {
            return false;
        }
        self.stack.push(SavedTransform {
            scale: self.scale,
            translation: self.translation,
        });
        true
    }

    /// Pop and reapply the most recent save. Returns false on an empty
    /// stack, leaving the current state untouched.
    pub fn restore(&mut self) -> bool {
        match self.stack.pop() {
            Some(saved) => {
                self.scale = saved.scale;
                self.translation = saved.translation;
                self.update_transform();
                true
            }
            None => false,
        }
    }

    /// Map a world point to screen pixels: scale, shift by the negated
    /// translation, then recenter on the viewport with the Y flip.
    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        let v = self.transform.transform_point(world);
        Vec2::new(
            self.width * 0.5 + v.x,
            self.height * 0.5 + SCREEN_Y_FLIP * v.y,
        )
    }

    /// Invert `world_to_screen`. Fails when the transform is singular
    /// instead of producing non-finite coordinates.
    pub fn screen_to_world(&self, screen: Vec2) -> Result<Vec2, CanvasError> {
        let inverse = self
            .transform
            .inverse()
            .ok_or(CanvasError::DegenerateTransform)?;
        let centered = Vec2::new(
            screen.x - self.width * 0.5,
            SCREEN_Y_FLIP * (screen.y - self.height * 0.5),
        );
        Ok(inverse.transform_point(centered))
    }

    // Scale applies to the point first, then the negated translation.
    fn update_transform(&mut self) {
        let translate = Mat3::translation(-self.translation.x, -self.translation.y);
        self.transform = translate.mul(&Mat3::scaling(self.scale));
    }
}
