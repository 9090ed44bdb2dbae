//! Scene - a list of styled shapes loaded from JSON
//!
//! A scene file is a JSON object with an `entries` array. Each entry
//! holds one tagged shape, an optional style and an optional `enabled`
//! flag:
//!
//! ```json
//! {
//!   "name": "spawn points",
//!   "entries": [
//!     { "shape": { "shape": "box", "position": [0, 0.5, 0] },
//!       "style": { "color": { "r": 0, "g": 1, "b": 0, "a": 1 }, "duration": 5 } },
//!     { "shape": { "shape": "arrow", "origin": [0, 0, 0], "direction": [0, 0, 2] } }
//!   ]
//! }
//! ```

use std::path::Path as FilePath;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::traits::Wireframe;
use super::ShapeParams;
use crate::sink::{LineSink, LineStyle};

/// Errors that can occur while loading a scene
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("Failed to read scene file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse scene: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Scene has no shapes")]
    Empty,
}

fn enabled_by_default() -> bool {
    true
}

/// A shape in the scene with its presentation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SceneEntry {
    /// The shape
    pub shape: ShapeParams,
    /// How its segments are presented
    #[serde(default)]
    pub style: LineStyle,
    /// Whether this entry is drawn
    #[serde(default = "enabled_by_default")]
    pub enabled: bool,
}

impl SceneEntry {
    /// Create an enabled entry
    pub fn new(shape: impl Into<ShapeParams>, style: LineStyle) -> Self {
        Self {
            shape: shape.into(),
            style,
            enabled: true,
        }
    }
}

/// A named list of styled shapes, drawn in order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub name: String,
    pub entries: Vec<SceneEntry>,
}

impl Scene {
    /// Create an empty scene
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Parse a scene from JSON text
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        let scene: Scene = serde_json::from_str(json)?;
        if scene.entries.is_empty() {
            return Err(SceneError::Empty);
        }
        Ok(scene)
    }

    /// Load a scene from a JSON file
    ///
    /// An unnamed scene takes the file stem as its name.
    pub fn load(path: impl AsRef<FilePath>) -> Result<Self, SceneError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let mut scene = Self::from_json(&text)?;

        if scene.name.is_empty() {
            scene.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("scene")
                .to_string();
        }

        log::info!(
            "Loaded scene '{}' from {} ({} entries)",
            scene.name,
            path.display(),
            scene.entries.len()
        );
        Ok(scene)
    }

    /// Serialize as pretty JSON
    pub fn to_json(&self) -> Result<String, SceneError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Add a shape to the scene
    pub fn add(&mut self, shape: impl Into<ShapeParams>, style: LineStyle) -> &mut Self {
        self.entries.push(SceneEntry::new(shape, style));
        self
    }

    /// Get the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if scene is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over enabled entries
    pub fn enabled(&self) -> impl Iterator<Item = &SceneEntry> {
        self.entries.iter().filter(|entry| entry.enabled)
    }

    /// Total segments drawn by enabled entries
    pub fn segment_count(&self) -> usize {
        self.enabled().map(|entry| entry.shape.segment_count()).sum()
    }

    /// Draw every enabled entry, in order, with its own style
    pub fn draw(&self, sink: &mut dyn LineSink) {
        for entry in self.enabled() {
            entry.shape.draw(sink, &entry.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Arrow, WireBox, WireSphere};
    use crate::sink::{Color, LineList};
    use nalgebra::{Point3, Vector3};

    const SCENE: &str = r#"{
        "name": "test",
        "entries": [
            { "shape": { "shape": "box", "position": [0.0, 0.5, 0.0] },
              "style": { "color": { "r": 0.0, "g": 1.0, "b": 0.0, "a": 1.0 }, "duration": 5.0 } },
            { "shape": { "shape": "arrow", "origin": [0.0, 0.0, 0.0], "direction": [0.0, 0.0, 2.0] } },
            { "shape": { "shape": "sphere", "center": [1.0, 1.0, 1.0] }, "enabled": false }
        ]
    }"#;

    #[test]
    fn test_parse_scene() {
        let scene = Scene::from_json(SCENE).unwrap();
        assert_eq!(scene.name, "test");
        assert_eq!(scene.len(), 3);

        assert_eq!(scene.entries[0].style.color, Color::GREEN);
        assert_eq!(scene.entries[0].style.duration, 5.0);
        assert!(scene.entries[0].style.depth_test);
        assert_eq!(scene.entries[1].style, LineStyle::default());
        assert!(!scene.entries[2].enabled);

        match &scene.entries[0].shape {
            ShapeParams::Box(wire_box) => {
                assert_eq!(wire_box.transform.position, Point3::new(0.0, 0.5, 0.0));
                assert_eq!(wire_box.transform.scale, Vector3::repeat(1.0));
            }
            other => panic!("expected box, got {:?}", other),
        }
    }

    #[test]
    fn test_draw_skips_disabled() {
        let scene = Scene::from_json(SCENE).unwrap();
        assert_eq!(scene.segment_count(), 12 + 7);

        let mut list = LineList::new();
        scene.draw(&mut list);
        assert_eq!(list.len(), 19);
        assert_eq!(list.lines()[0].style.color, Color::GREEN);
        assert_eq!(list.lines()[12].style.color, Color::WHITE);
    }

    #[test]
    fn test_empty_scene_rejected() {
        let err = Scene::from_json(r#"{ "entries": [] }"#).unwrap_err();
        assert!(matches!(err, SceneError::Empty));
    }

    #[test]
    fn test_bad_json_rejected() {
        let err = Scene::from_json(r#"{ "entries": [ { "shape": { "shape": "torus" } } ] }"#)
            .unwrap_err();
        assert!(matches!(err, SceneError::ParseError(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let mut scene = Scene::new("built");
        scene
            .add(WireBox::default(), LineStyle::new(Color::RED))
            .add(WireSphere::new(Point3::origin(), 2.0), LineStyle::default())
            .add(Arrow::new(Point3::origin(), Vector3::x()), LineStyle::default().with_depth_test(false));

        let json = scene.to_json().unwrap();
        assert_eq!(Scene::from_json(&json).unwrap(), scene);
    }

    #[test]
    fn test_unnormalized_box_rotation() {
        let scene = Scene::from_json(
            r#"{ "entries": [ { "shape": { "shape": "box", "rotation": [0.0, 1.0, 0.0, 1.0] } } ] }"#,
        )
        .unwrap();

        let ShapeParams::Box(wire_box) = &scene.entries[0].shape else {
            panic!("expected box");
        };
        let corner = wire_box.corners()[0];
        assert!((corner - Point3::new(0.5, -0.5, 0.5)).norm() < 1.0e-5);
        assert!(wire_box.segments().iter().all(|s| (s.length() - 1.0).abs() < 1.0e-5));
    }

    #[test]
    fn test_zero_rotation_is_parse_error() {
        let err = Scene::from_json(
            r#"{ "entries": [ { "shape": { "shape": "box", "rotation": [0.0, 0.0, 0.0, 0.0] } } ] }"#,
        )
        .unwrap_err();
        assert!(matches!(err, SceneError::ParseError(_)));
    }

    #[test]
    fn test_color_alpha_defaults_to_opaque() {
        let scene = Scene::from_json(
            r#"{ "entries": [ { "shape": { "shape": "line", "start": [0.0, 0.0, 0.0], "end": [1.0, 0.0, 0.0] },
                               "style": { "color": { "r": 0.0, "g": 1.0, "b": 0.0 } } } ] }"#,
        )
        .unwrap();
        assert_eq!(scene.entries[0].style.color, Color::GREEN);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Scene::load("/definitely/not/a/scene.json").unwrap_err();
        assert!(matches!(err, SceneError::IoError(_)));
    }
}
