use std::path::PathBuf;

use eframe::egui;
use serde::{Deserialize, Serialize};

use crate::{GizmoApp, ShapeEditor, ShapeKind};

/// Returns the path to the settings file: `~/.config/wire-gizmo/settings.json`
fn settings_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("wire-gizmo");
    path.push("settings.json");
    path
}

/// Persisted viewer settings.
///
/// Serialized as JSON to the platform config directory.
/// Fields use `#[serde(default)]` so that adding new settings
/// won't break existing config files.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerSettings {
    // Editor
    pub selected_shape: ShapeKind,
    pub editor: ShapeEditor,
    pub show_settings: bool,
    pub live: bool,

    // Style
    pub color_r: u8,
    pub color_g: u8,
    pub color_b: u8,
    pub duration: f32,
    pub depth_test: bool,

    // Display
    pub line_width: f32,
    pub show_grid: bool,
    pub show_axes: bool,
    pub fov_degrees: f32,

    // Color (stored as u8 triples since Color32 isn't serde-friendly)
    pub background_r: u8,
    pub background_g: u8,
    pub background_b: u8,

    // Scene
    pub last_scene: Option<PathBuf>,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            selected_shape: ShapeKind::Sphere,
            editor: ShapeEditor::default(),
            show_settings: true,
            live: true,

            color_r: 255,
            color_g: 235,
            color_b: 4,
            duration: 2.0,
            depth_test: true,

            line_width: 1.5,
            show_grid: true,
            show_axes: true,
            fov_degrees: 45.0,

            background_r: 24,
            background_g: 26,
            background_b: 30,

            last_scene: None,
        }
    }
}

impl ViewerSettings {
    /// Load settings from disk, falling back to defaults on any error.
    pub fn load() -> Self {
        let path = settings_path();
        match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                log::info!("No settings file found ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk as pretty JSON.
    pub fn save(&self) {
        let path = settings_path();
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                log::warn!("Failed to create config directory: {}", e);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = std::fs::write(&path, json) {
                    log::warn!("Failed to write settings: {}", e);
                }
            }
            Err(e) => {
                log::warn!("Failed to serialize settings: {}", e);
            }
        }
    }

    /// Extract current settings from the running application.
    pub fn from_app(app: &GizmoApp) -> Self {
        let viewport = &app.viewport.settings;
        Self {
            selected_shape: app.selected_shape,
            editor: app.editor.clone(),
            show_settings: app.show_settings,
            live: app.live,

            color_r: app.color.r(),
            color_g: app.color.g(),
            color_b: app.color.b(),
            duration: app.duration,
            depth_test: app.depth_test,

            line_width: viewport.line_width,
            show_grid: viewport.show_grid,
            show_axes: viewport.show_axes,
            fov_degrees: app.viewport.camera.fov_degrees(),

            background_r: viewport.background.r(),
            background_g: viewport.background.g(),
            background_b: viewport.background.b(),

            last_scene: app.scene_path.clone(),
        }
    }

    /// Apply loaded settings to the running application.
    pub fn apply(&self, app: &mut GizmoApp) {
        app.selected_shape = self.selected_shape;
        app.editor = self.editor.clone();
        app.show_settings = self.show_settings;
        app.live = self.live;

        app.color = egui::Color32::from_rgb(self.color_r, self.color_g, self.color_b);
        app.duration = self.duration;
        app.depth_test = self.depth_test;

        let viewport = &mut app.viewport.settings;
        viewport.line_width = self.line_width;
        viewport.show_grid = self.show_grid;
        viewport.show_axes = self.show_axes;
        viewport.background =
            egui::Color32::from_rgb(self.background_r, self.background_g, self.background_b);
        app.viewport.camera.set_fov_degrees(self.fov_degrees);

        if let Some(path) = &self.last_scene {
            app.load_scene(path.clone());
        }
    }
}
