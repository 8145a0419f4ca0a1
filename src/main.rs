//! Interactive canvas demo
//!
//! Renders the demo scene through the software rasterizer and presents it
//! with macroquad. Arrow keys pan, the mouse wheel zooms, right-drag pans,
//! F12 saves a PNG screenshot.

use macroquad::prelude::*;

use softcanvas::export;
use softcanvas::rasterizer::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use softcanvas::scene::{load_scene, Scene};
use softcanvas::{Renderer, VERSION};

const SCENE_PATH: &str = "assets/scenes/default.ron";

fn window_conf() -> Conf {
    Conf {
        window_title: format!("softcanvas v{}", VERSION),
        window_width: DEFAULT_WIDTH as i32,
        window_height: DEFAULT_HEIGHT as i32,
        window_resizable: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let scene = match load_scene(SCENE_PATH) {
        Ok(scene) => {
            log::info!("loaded scene from {}", SCENE_PATH);
            scene
        }
        Err(e) => {
            log::warn!("could not load {}: {}, using built-in scene", SCENE_PATH, e);
            Scene::default_scene()
        }
    };

    let mut renderer = match Renderer::new(DEFAULT_WIDTH, DEFAULT_HEIGHT) {
        Ok(renderer) => renderer,
        Err(e) => {
            eprintln!("Failed to create render surface: {}", e);
            return;
        }
    };
    if let Err(e) = renderer.set_clear_color(scene.clear_color) {
        eprintln!("Failed to prepare clear color: {}", e);
        return;
    }

    let mut last_mouse = mouse_position();

    loop {
        // Keyboard pan, 5 world units per press
        if is_key_pressed(KeyCode::Up) {
            renderer.ctx.canvas.translate(0.0, 5.0);
        }
        if is_key_pressed(KeyCode::Down) {
            renderer.ctx.canvas.translate(0.0, -5.0);
        }
        if is_key_pressed(KeyCode::Left) {
            renderer.ctx.canvas.translate(-5.0, 0.0);
        }
        if is_key_pressed(KeyCode::Right) {
            renderer.ctx.canvas.translate(5.0, 0.0);
        }

        // Wheel zoom around the current view
        let scroll = mouse_wheel().1;
        if scroll != 0.0 {
            let zoom = (renderer.ctx.canvas.scale() * (1.0 + scroll * 0.02)).clamp(0.1, 10.0);
            renderer.ctx.canvas.set_scale(zoom);
        }

        // Right-drag pan: content follows the cursor. Screen Y grows down,
        // so the vertical delta feeds the translation unnegated.
        let (mx, my) = mouse_position();
        if is_mouse_button_down(MouseButton::Right) {
            let dx = mx - last_mouse.0;
            let dy = my - last_mouse.1;
            if dx != 0.0 || dy != 0.0 {
                renderer.ctx.canvas.translate(-dx, dy);
            }
        }
        last_mouse = (mx, my);

        // Follow window resizes
        let win_w = screen_width() as u32;
        let win_h = screen_height() as u32;
        if win_w > 0
            && win_h > 0
            && (win_w, win_h) != (renderer.ctx.surface.width, renderer.ctx.surface.height)
        {
            if let Err(e) = renderer.handle_resize(win_w, win_h) {
                log::error!("resize to {}x{} failed: {}", win_w, win_h, e);
            }
        }

        if let Err(e) = renderer.ctx.surface.clear() {
            log::error!("clear failed: {}", e);
        }
        renderer.ctx.draw_lines(&scene.lines);
        renderer.present();

        if is_key_pressed(KeyCode::F12) {
            match export::save_png(&renderer.ctx.surface, "screenshot.png") {
                Ok(()) => log::info!("saved screenshot.png"),
                Err(e) => log::error!("screenshot failed: {}", e),
            }
        }

        // Stats overlay
        let translation = renderer.ctx.canvas.translation();
        draw_text(&format!("FPS: {}", get_fps()), 20.0, 30.0, 20.0, WHITE);
        draw_text(
            &format!("Zoom: {:.2}", renderer.ctx.canvas.scale()),
            20.0,
            50.0,
            20.0,
            WHITE,
        );
        draw_text(
            &format!("Position: [{:.1}, {:.1}]", translation.x, translation.y),
            20.0,
            70.0,
            20.0,
            WHITE,
        );

        next_frame().await;
    }
}
