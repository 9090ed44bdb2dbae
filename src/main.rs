//! wire-gizmo viewer
//!
//! An interactive host for the debug shapes: pick a shape, tweak its
//! parameters and style, and watch the decomposed segments in a 3D
//! viewport. Shapes can be drawn live (every frame) or stamped with a
//! lifetime, and whole scenes can be loaded from JSON files.

use std::path::PathBuf;

use eframe::egui;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use wire_gizmo::shapes::{
    Arrow, Line, Polyline, Ray, Scene, ShapeParams, WireArc, WireBox, WireCircle, WireSphere,
    Wireframe,
};
use wire_gizmo::sink::{Color, DebugLines, LineStyle};
use wire_gizmo::Transform;

mod render;
mod settings;

use render::Viewport;
use settings::ViewerSettings;

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting wire-gizmo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 750.0])
            .with_title("wire-gizmo"),
        ..Default::default()
    };

    eframe::run_native(
        "wire-gizmo",
        options,
        Box::new(|cc| Ok(Box::new(GizmoApp::new(cc)))),
    )
}

/// Available shape types
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum ShapeKind {
    Line,
    Ray,
    Polyline,
    Box,
    Sphere,
    Circle,
    Arc,
    Arrow,
}

impl ShapeKind {
    fn all() -> &'static [ShapeKind] {
        &[
            ShapeKind::Line,
            ShapeKind::Ray,
            ShapeKind::Polyline,
            ShapeKind::Box,
            ShapeKind::Sphere,
            ShapeKind::Circle,
            ShapeKind::Arc,
            ShapeKind::Arrow,
        ]
    }

    fn name(&self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Ray => "Ray",
            ShapeKind::Polyline => "Polyline",
            ShapeKind::Box => "Box",
            ShapeKind::Sphere => "Wire sphere",
            ShapeKind::Circle => "Wire circle",
            ShapeKind::Arc => "Wire arc",
            ShapeKind::Arrow => "Arrow",
        }
    }
}

/// Shape parameters (used fields vary by shape type)
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShapeEditor {
    // Common
    pub position: [f32; 3],
    pub direction: [f32; 3],
    pub radius: f32,
    pub segments: u32,

    // Line specific
    pub end: [f32; 3],

    // Ray specific
    pub distance: f32,

    // Box specific
    pub rotation_degrees: [f32; 3],
    pub scale: [f32; 3],

    // Arc specific
    pub angle: f32,

    // Arrow specific
    pub head_size: f32,
    pub absolute_head: bool,

    // Polyline specific (a helix through this many points)
    pub polyline_points: u32,
    pub polyline_turns: f32,
}

impl Default for ShapeEditor {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 0.0],
            direction: [1.0, 0.0, 0.0],
            radius: 1.0,
            segments: 32,

            end: [1.0, 1.0, 1.0],

            distance: 2.0,

            rotation_degrees: [0.0, 30.0, 0.0],
            scale: [1.0, 1.0, 1.0],

            angle: 90.0,

            head_size: 0.1,
            absolute_head: false,

            polyline_points: 64,
            polyline_turns: 3.0,
        }
    }
}

impl ShapeEditor {
    /// Build the shape for the selected kind from the current parameters
    fn build(&self, kind: ShapeKind) -> ShapeParams {
        let position = Point3::from(self.position);
        let direction = Vector3::from(self.direction);

        match kind {
            ShapeKind::Line => Line::new(position, Point3::from(self.end)).into(),
            ShapeKind::Ray => Ray::with_distance(position, direction, self.distance).into(),
            ShapeKind::Polyline => Polyline::new(self.helix(position)).into(),
            ShapeKind::Box => {
                let [x, y, z] = self.rotation_degrees.map(f32::to_radians);
                WireBox::new(Transform::new(
                    position,
                    UnitQuaternion::from_euler_angles(x, y, z),
                    Vector3::from(self.scale),
                ))
                .into()
            }
            ShapeKind::Sphere => WireSphere::with_segments(position, self.radius, self.segments).into(),
            ShapeKind::Circle => {
                WireCircle::with_segments(position, direction, self.radius, self.segments).into()
            }
            ShapeKind::Arc => {
                WireArc::with_segments(position, direction, self.angle, self.radius, self.segments)
                    .into()
            }
            ShapeKind::Arrow => {
                let arrow = Arrow::new(position, direction);
                if self.absolute_head {
                    arrow.with_absolute_head(self.head_size).into()
                } else {
                    arrow.with_head_size(self.head_size).into()
                }
            }
        }
    }

    /// Points of a vertical helix around `center`
    fn helix(&self, center: Point3<f32>) -> Vec<Point3<f32>> {
        let n = self.polyline_points.max(2);
        (0..n)
            .map(|i| {
                let t = i as f32 / (n - 1) as f32;
                let angle = t * self.polyline_turns * std::f32::consts::TAU;
                center
                    + Vector3::new(
                        self.radius * angle.cos(),
                        t * 2.0 * self.radius,
                        self.radius * angle.sin(),
                    )
            })
            .collect()
    }
}

/// Main application state
pub struct GizmoApp {
    lines: DebugLines,
    viewport: Viewport,
    show_settings: bool,

    // Shape selection
    selected_shape: ShapeKind,
    editor: ShapeEditor,
    live: bool,

    // Style
    color: egui::Color32,
    duration: f32,
    depth_test: bool,

    // Scene
    scene: Option<Scene>,
    scene_path: Option<PathBuf>,
    status: String,
}

impl GizmoApp {
    fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            lines: DebugLines::new(),
            viewport: Viewport::new(),
            show_settings: true,
            selected_shape: ShapeKind::Sphere,
            editor: ShapeEditor::default(),
            live: true,
            color: egui::Color32::from_rgb(255, 235, 4),
            duration: 2.0,
            depth_test: true,
            scene: None,
            scene_path: None,
            status: "Ready".to_string(),
        };
        ViewerSettings::load().apply(&mut app);
        app
    }

    /// Current style from the UI, with the given lifetime
    fn style(&self, duration: f32) -> LineStyle {
        let [r, g, b, a] = self.color.to_srgba_unmultiplied();
        let color = Color::rgba(
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            a as f32 / 255.0,
        );
        LineStyle::new(color)
            .with_duration(duration)
            .with_depth_test(self.depth_test)
    }

    /// Draw the current shape once, with the configured lifetime
    fn stamp_shape(&mut self) {
        let shape = self.editor.build(self.selected_shape);
        let style = self.style(self.duration);
        shape.draw(&mut self.lines, &style);
        log::debug!(
            "Stamped {} ({} segments, {}s)",
            shape.name(),
            shape.segment_count(),
            self.duration
        );
    }

    /// Load a scene file and draw it once
    fn load_scene(&mut self, path: PathBuf) {
        match Scene::load(&path) {
            Ok(scene) => {
                scene.draw(&mut self.lines);
                self.status = format!(
                    "Scene '{}': {} shapes, {} segments",
                    scene.name,
                    scene.len(),
                    scene.segment_count()
                );
                self.scene = Some(scene);
                self.scene_path = Some(path);
            }
            Err(e) => {
                log::warn!("Failed to load scene {}: {}", path.display(), e);
                self.status = format!("Scene error: {}", e);
            }
        }
    }

    fn pick_scene(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Scene", &["json"])
            .pick_file()
        {
            self.load_scene(path);
        }
    }

    fn replay_scene(&mut self) {
        if let Some(scene) = &self.scene {
            scene.draw(&mut self.lines);
        }
    }

    fn shape_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Shape");
        ui.separator();

        egui::ComboBox::from_label("Type")
            .selected_text(self.selected_shape.name())
            .show_ui(ui, |ui| {
                for kind in ShapeKind::all() {
                    ui.selectable_value(&mut self.selected_shape, *kind, kind.name());
                }
            });

        ui.separator();
        ui.label("Parameters:");

        let editor = &mut self.editor;
        vec3_row(ui, "Position", &mut editor.position);

        match self.selected_shape {
            ShapeKind::Line => {
                vec3_row(ui, "End", &mut editor.end);
            }
            ShapeKind::Ray => {
                vec3_row(ui, "Direction", &mut editor.direction);
                ui.add(egui::Slider::new(&mut editor.distance, 0.0..=10.0).text("Distance"));
            }
            ShapeKind::Polyline => {
                ui.add(egui::Slider::new(&mut editor.radius, 0.1..=5.0).text("Radius"));
                ui.add(egui::Slider::new(&mut editor.polyline_points, 2..=256).text("Points"));
                ui.add(egui::Slider::new(&mut editor.polyline_turns, 0.5..=10.0).text("Turns"));
            }
            ShapeKind::Box => {
                vec3_row(ui, "Rotation (°)", &mut editor.rotation_degrees);
                vec3_row(ui, "Scale", &mut editor.scale);
            }
            ShapeKind::Sphere => {
                ui.add(egui::Slider::new(&mut editor.radius, 0.0..=5.0).text("Radius"));
                ui.add(egui::Slider::new(&mut editor.segments, 1..=128).text("Segments"));
            }
            ShapeKind::Circle => {
                vec3_row(ui, "Normal", &mut editor.direction);
                ui.add(egui::Slider::new(&mut editor.radius, 0.0..=5.0).text("Radius"));
                ui.add(egui::Slider::new(&mut editor.segments, 1..=128).text("Segments"));
            }
            ShapeKind::Arc => {
                vec3_row(ui, "Direction", &mut editor.direction);
                ui.add(egui::Slider::new(&mut editor.angle, 0.0..=360.0).text("Angle (°)"));
                ui.add(egui::Slider::new(&mut editor.radius, 0.0..=5.0).text("Radius"));
                ui.add(egui::Slider::new(&mut editor.segments, 1..=128).text("Segments"));
            }
            ShapeKind::Arrow => {
                vec3_row(ui, "Direction", &mut editor.direction);
                ui.add(egui::Slider::new(&mut editor.head_size, 0.0..=1.0).text("Head size"));
                ui.checkbox(&mut editor.absolute_head, "Absolute head size");
            }
        }

        ui.separator();

        ui.collapsing("Style", |ui| {
            ui.horizontal(|ui| {
                ui.label("Color");
                ui.color_edit_button_srgba(&mut self.color);
            });
            ui.add(egui::Slider::new(&mut self.duration, 0.0..=30.0).text("Duration (s)"));
            ui.checkbox(&mut self.depth_test, "Depth test");
        });

        ui.separator();

        ui.checkbox(&mut self.live, "Draw live");
        if ui.button("Stamp").clicked() {
            self.stamp_shape();
        }

        ui.separator();

        ui.collapsing("Scene", |ui| {
            if ui.button("Load scene…").clicked() {
                self.pick_scene();
            }
            if ui
                .add_enabled(self.scene.is_some(), egui::Button::new("Replay scene"))
                .clicked()
            {
                self.replay_scene();
            }
        });

        ui.separator();

        ui.collapsing("Display", |ui| {
            let settings = &mut self.viewport.settings;
            ui.add(egui::Slider::new(&mut settings.line_width, 0.5..=5.0).text("Line width"));
            ui.checkbox(&mut settings.show_grid, "Show grid");
            ui.checkbox(&mut settings.show_axes, "Show axes");

            let mut fov = self.viewport.camera.fov_degrees();
            if ui
                .add(egui::Slider::new(&mut fov, 10.0..=120.0).text("FOV (°)"))
                .changed()
            {
                self.viewport.camera.set_fov_degrees(fov);
            }

            if ui.button("Clear lines").clicked() {
                self.lines.clear();
            }
        });
    }
}

/// Three drag values on one row
fn vec3_row(ui: &mut egui::Ui, label: &str, value: &mut [f32; 3]) {
    ui.horizontal(|ui| {
        ui.label(label);
        for component in value.iter_mut() {
            ui.add(egui::DragValue::new(component).speed(0.05));
        }
    });
}

impl eframe::App for GizmoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.request_repaint();

        if self.live {
            let shape = self.editor.build(self.selected_shape);
            let style = self.style(0.0);
            shape.draw(&mut self.lines, &style);
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("wire-gizmo");
                ui.separator();
                ui.toggle_value(&mut self.show_settings, "⚙ Settings");
                ui.separator();
                if ui.button("💾 Save settings").clicked() {
                    ViewerSettings::from_app(self).save();
                }
                ui.separator();
                ui.label(&self.status);
            });
        });

        // Settings panel
        if self.show_settings {
            egui::SidePanel::left("settings_panel")
                .min_width(240.0)
                .show(ctx, |ui| {
                    egui::ScrollArea::vertical().show(ui, |ui| self.shape_panel(ui));
                });
        }

        // Main viewport
        egui::CentralPanel::default().show(ctx, |ui| {
            let lines = self.lines.snapshot();
            self.viewport.show(ui, &lines);

            ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
                ui.horizontal(|ui| {
                    ui.small(format!("Shape: {}", self.selected_shape.name()));
                    ui.separator();
                    ui.small(format!("Lines: {}", lines.len()));
                    ui.separator();
                    ui.small(format!(
                        "Camera distance: {:.2}",
                        self.viewport.camera.distance()
                    ));
                });
            });
        });

        // Age lines after presenting so single-frame lines are seen once
        let dt = ctx.input(|i| i.stable_dt);
        self.lines.advance(dt);

        if ctx.input(|i| i.viewport().close_requested()) {
            ViewerSettings::from_app(self).save();
            log::info!("Settings saved on exit");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_builds() {
        let editor = ShapeEditor::default();
        for kind in ShapeKind::all() {
            let shape = editor.build(*kind);
            assert!(!shape.segments().is_empty(), "{}", kind.name());
            assert!(shape.segments().iter().all(|s| s.is_finite()));
        }
    }

    #[test]
    fn test_helix_points() {
        let editor = ShapeEditor::default();
        let shape = editor.build(ShapeKind::Polyline);
        assert_eq!(shape.segment_count(), editor.polyline_points as usize - 1);
    }
}
