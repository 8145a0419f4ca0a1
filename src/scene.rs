//! Scene data and persistence
//!
//! The drawable world is a flat list of positioned line entities plus a
//! clear color. Uses RON (Rusty Object Notation) for human-readable scene
//! files.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::rasterizer::{Color, Vec2};

/// Error type for scene loading
#[derive(Debug)]
pub enum SceneError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for SceneError {
    fn from(e: std::io::Error) -> Self {
        SceneError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for SceneError {
    fn from(e: ron::error::SpannedError) -> Self {
        SceneError::ParseError(e)
    }
}

impl From<ron::Error> for SceneError {
    fn from(e: ron::Error) -> Self {
        SceneError::SerializeError(e)
    }
}

impl std::fmt::Display for SceneError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneError::IoError(e) => write!(f, "IO error: {}", e),
            SceneError::ParseError(e) => write!(f, "Parse error: {}", e),
            SceneError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

/// World-space placement of an entity. Line endpoints are stored relative
/// to this.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Offset a local-space point into world space.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x + self.x, point.y + self.y)
    }
}

/// A line segment in entity-local coordinates, with its world-space
/// thickness and color.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Line {
    pub start: Vec2,
    pub end: Vec2,
    pub thickness: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LineEntity {
    pub position: Position,
    pub line: Line,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub clear_color: Color,
    pub lines: Vec<LineEntity>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            clear_color: Color::BLACK,
            lines: Vec::new(),
        }
    }
}

impl Scene {
    /// Built-in demo content used when no scene file is available.
    pub fn default_scene() -> Self {
        Self {
            clear_color: Color::new(100.0 / 255.0, 30.0 / 255.0, 10.0 / 255.0),
            lines: vec![
                LineEntity {
                    position: Position::new(0.0, 0.0),
                    line: Line {
                        start: Vec2::new(0.0, 50.0),
                        end: Vec2::new(200.0, 50.0),
                        thickness: 10.0,
                        color: Color::new(0.2, 0.4, 1.0),
                    },
                },
                LineEntity {
                    position: Position::new(0.0, 0.0),
                    line: Line {
                        start: Vec2::new(0.0, 0.0),
                        end: Vec2::new(100.0, 0.0),
                        thickness: 25.0,
                        color: Color::new(10.0 / 255.0, 244.0 / 255.0, 10.0 / 255.0),
                    },
                },
                LineEntity {
                    position: Position::new(-150.0, -80.0),
                    line: Line {
                        start: Vec2::new(0.0, 0.0),
                        end: Vec2::new(0.0, 160.0),
                        thickness: 10.0,
                        color: Color::new(0.0, 0.0, 1.0),
                    },
                },
            ],
        }
    }
}

/// Load a scene from a RON file
pub fn load_scene<P: AsRef<Path>>(path: P) -> Result<Scene, SceneError> {
    let contents = fs::read_to_string(path)?;
    let scene: Scene = ron::from_str(&contents)?;
    Ok(scene)
}

/// Load a scene from a RON string (for embedded scenes or testing)
pub fn load_scene_from_str(s: &str) -> Result<Scene, SceneError> {
    let scene: Scene = ron::from_str(s)?;
    Ok(scene)
}

/// Save a scene to a RON file
pub fn save_scene<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<(), SceneError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(scene, config)?;
    fs::write(path, contents)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_apply_offsets_point() {
        let position = Position::new(10.0, -5.0);
        let world = position.apply(Vec2::new(3.0, 4.0));
        assert_eq!(world.x, 13.0);
        assert_eq!(world.y, -1.0);
    }

    #[test]
    fn test_ron_round_trip() {
        let scene = Scene::default_scene();
        let config = ron::ser::PrettyConfig::new();
        let text = ron::ser::to_string_pretty(&scene, config).unwrap();
        let loaded = load_scene_from_str(&text).unwrap();

        assert_eq!(loaded.lines.len(), scene.lines.len());
        assert_eq!(loaded.clear_color.pack(), scene.clear_color.pack());
        for (a, b) in loaded.lines.iter().zip(scene.lines.iter()) {
            assert_eq!(a.position.x, b.position.x);
            assert_eq!(a.line.thickness, b.line.thickness);
            assert_eq!(a.line.end.x, b.line.end.x);
        }
    }

    #[test]
    fn test_parse_minimal_scene() {
        let text = r#"(
            clear_color: (r: 0.0, g: 0.0, b: 0.0, a: 1.0),
            lines: [
                (
                    position: (x: 1.0, y: 2.0),
                    line: (
                        start: (x: 0.0, y: 0.0),
                        end: (x: 10.0, y: 0.0),
                        thickness: 2.0,
                        color: (r: 1.0, g: 1.0, b: 1.0, a: 1.0),
                    ),
                ),
            ],
        )"#;

        let scene = load_scene_from_str(text).unwrap();
        assert_eq!(scene.lines.len(), 1);
        assert_eq!(scene.lines[0].position.y, 2.0);
        assert_eq!(scene.lines[0].line.end.x, 10.0);
    }

    #[test]
    fn test_malformed_scene_is_parse_error() {
        let result = load_scene_from_str("(clear_color: oops)");
        assert!(matches!(result, Err(SceneError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_scene("/nonexistent/scene.ron");
        assert!(matches!(result, Err(SceneError::IoError(_))));
    }
}
