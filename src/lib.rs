//! 2D software rasterizer with a pan/zoom canvas.
//!
//! Everything renders on the CPU into a packed-pixel [`Surface`]; the
//! [`Canvas`] maps world coordinates onto it through a scale/translate
//! stack, and [`Camera`] offers the same view as position-plus-zoom.
//! [`DrawContext`] ties the two halves together for world-space drawing.

pub mod camera;
pub mod canvas;
pub mod context;
pub mod export;
pub mod rasterizer;
pub mod renderer;
pub mod scene;

pub use camera::{Bounds, Camera, OFFSCREEN_SENTINEL};
pub use canvas::{Canvas, CanvasError, CANVAS_STACK_MAX};
pub use context::DrawContext;
pub use rasterizer::{Color, Mat3, Point, Surface, SurfaceError, Vec2};
pub use renderer::Renderer;
pub use scene::{load_scene, save_scene, LineEntity, Scene, SceneError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
