//! 3D gizmo viewport widget
//!
//! Presents a list of debug lines through an orbit camera using egui's
//! painter. This is the host-renderer side of the line sink: color comes
//! from each line's style, lifetime is handled by the `DebugLines` store
//! feeding it, and depth testing is approximated by draw order.
//!
//! ## Controls
//!
//! - Drag: orbit
//! - Scroll: zoom

use eframe::egui::{self, Color32, Pos2, Rect, Stroke, Vec2};
use nalgebra::Point3;

use wire_gizmo::sink::{Color, DebugLine};

use super::camera::Camera;

/// Display settings for the viewport
#[derive(Clone)]
pub struct ViewportSettings {
    /// Background color
    pub background: Color32,

    /// Line thickness in pixels
    pub line_width: f32,

    /// Whether to draw the ground grid
    pub show_grid: bool,

    /// Half the number of grid cells along each axis
    pub grid_half_count: u32,

    /// Whether to draw the world axes at the origin
    pub show_axes: bool,

    /// Orbit speed in radians per dragged pixel
    pub orbit_speed: f32,
}

impl Default for ViewportSettings {
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(24, 26, 30),
            line_width: 1.5,
            show_grid: true,
            grid_half_count: 10,
            show_axes: true,
            orbit_speed: 0.01,
        }
    }
}

/// 3D viewport widget
pub struct Viewport {
    /// Display settings
    pub settings: ViewportSettings,

    /// Camera the lines are seen through
    pub camera: Camera,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color32(color: &Color) -> Color32 {
    let [r, g, b, a] = color.to_rgba8();
    Color32::from_rgba_unmultiplied(r, g, b, a)
}

impl Viewport {
    /// Create a new viewport with default settings
    pub fn new() -> Self {
        Self {
            settings: ViewportSettings::default(),
            camera: Camera::default(),
        }
    }

    /// Map normalized device coordinates to screen coordinates
    ///
    /// NDC X and Y range from -1.0 to 1.0; screen Y increases downward.
    fn ndc_to_screen(ndc: &Point3<f32>, rect: Rect) -> Pos2 {
        let norm_x = (ndc.x + 1.0) / 2.0;
        let norm_y = (ndc.y + 1.0) / 2.0;
        Pos2::new(
            rect.left() + norm_x * rect.width(),
            rect.bottom() - norm_y * rect.height(), // Flip Y
        )
    }

    /// Project a world-space segment onto the widget rect
    fn project(&self, start: &Point3<f32>, end: &Point3<f32>, rect: Rect) -> Option<[Pos2; 2]> {
        let aspect = rect.width() / rect.height().max(1.0);
        let (a, b) = self.camera.project_segment(start, end, aspect)?;
        Some([Self::ndc_to_screen(&a, rect), Self::ndc_to_screen(&b, rect)])
    }

    /// Draw the viewport
    ///
    /// # Arguments
    /// * `ui` - The egui UI context
    /// * `lines` - Debug lines to present
    ///
    /// # Returns
    /// The response from the widget
    pub fn show(&mut self, ui: &mut egui::Ui, lines: &[DebugLine]) -> egui::Response {
        let size = ui.available_size().max(Vec2::splat(64.0));
        let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
        let rect = response.rect;

        self.handle_input(ui, &response);

        painter.rect_filled(rect, 4.0, self.settings.background);
        let painter = painter.with_clip_rect(rect);

        if self.settings.show_grid {
            self.draw_grid(&painter, rect);
        }
        if self.settings.show_axes {
            self.draw_axes(&painter, rect);
        }

        // Depth-tested lines first so overlay lines always end up on top
        let (tested, overlay): (Vec<&DebugLine>, Vec<&DebugLine>) =
            lines.iter().partition(|line| line.style.depth_test);
        for line in tested.into_iter().chain(overlay) {
            self.draw_line(&painter, rect, line);
        }

        response
    }

    /// Apply drag-to-orbit and scroll-to-zoom
    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response) {
        if response.dragged() {
            let delta = response.drag_delta();
            self.camera.orbit(
                delta.x * self.settings.orbit_speed,
                delta.y * self.settings.orbit_speed,
            );
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll != 0.0 {
                self.camera.zoom((-scroll * 0.002).exp());
            }
        }
    }

    fn draw_line(&self, painter: &egui::Painter, rect: Rect, line: &DebugLine) {
        let segment = &line.segment;
        if let Some(points) = self.project(&segment.start, &segment.end, rect) {
            let stroke = Stroke::new(self.settings.line_width, to_color32(&line.style.color));
            painter.line_segment(points, stroke);
        }
    }

    /// Draw the ground grid on the XZ plane
    fn draw_grid(&self, painter: &egui::Painter, rect: Rect) {
        let stroke = Stroke::new(0.5, Color32::from_rgba_unmultiplied(90, 90, 100, 90));
        let n = self.settings.grid_half_count as i32;
        let extent = n as f32;

        for i in -n..=n {
            let offset = i as f32;
            let lines = [
                (Point3::new(offset, 0.0, -extent), Point3::new(offset, 0.0, extent)),
                (Point3::new(-extent, 0.0, offset), Point3::new(extent, 0.0, offset)),
            ];
            for (start, end) in lines {
                if let Some(points) = self.project(&start, &end, rect) {
                    painter.line_segment(points, stroke);
                }
            }
        }
    }

    /// Draw the labelled X, Y and Z axes at the origin
    fn draw_axes(&self, painter: &egui::Painter, rect: Rect) {
        let axes = [
            ("X", Point3::new(1.0, 0.0, 0.0), Color32::from_rgb(220, 60, 60)),
            ("Y", Point3::new(0.0, 1.0, 0.0), Color32::from_rgb(60, 200, 60)),
            ("Z", Point3::new(0.0, 0.0, 1.0), Color32::from_rgb(60, 110, 230)),
        ];
        let aspect = rect.width() / rect.height().max(1.0);

        for (label, end, color) in axes {
            if let Some(points) = self.project(&Point3::origin(), &end, rect) {
                painter.line_segment(points, Stroke::new(2.0, color));
            }
            if let Some(ndc) = self.camera.project(&end, aspect) {
                painter.text(
                    Self::ndc_to_screen(&ndc, rect),
                    egui::Align2::LEFT_BOTTOM,
                    label,
                    egui::FontId::monospace(12.0),
                    color,
                );
            }
        }
    }
}
