//! Orbit camera for the gizmo viewport
//!
//! The camera orbits `target` at a fixed distance; yaw and pitch are
//! changed by dragging, distance by scrolling.

use std::f32::consts::PI;

use nalgebra::{Matrix4, Point3, Vector3};

/// Camera for 3D viewing
#[derive(Clone, Debug)]
pub struct Camera {
    /// Camera position
    pub position: Point3<f32>,
    /// Point the camera is looking at
    pub target: Point3<f32>,
    /// Up vector
    pub up: Vector3<f32>,
    /// Field of view in radians
    pub fov: f32,
    /// Near clipping plane
    pub near: f32,
    /// Far clipping plane
    pub far: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Point3::new(4.0, 3.0, 6.0),
            target: Point3::origin(),
            up: Vector3::y(),
            fov: PI / 4.0, // 45 degrees
            near: 0.05,
            far: 500.0,
        }
    }
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Point3<f32>, target: Point3<f32>) -> Self {
        Self {
            position,
            target,
            ..Default::default()
        }
    }

    /// Get the view matrix
    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(&self.position, &self.target, &self.up)
    }

    /// Get the projection matrix (perspective)
    pub fn projection_matrix(&self, aspect: f32) -> Matrix4<f32> {
        Matrix4::new_perspective(aspect, self.fov, self.near, self.far)
    }

    /// Distance from the camera to its target
    pub fn distance(&self) -> f32 {
        (self.position - self.target).magnitude()
    }

    /// Get FOV in degrees (for UI display)
    pub fn fov_degrees(&self) -> f32 {
        self.fov.to_degrees()
    }

    /// Set FOV from degrees (for UI input)
    pub fn set_fov_degrees(&mut self, degrees: f32) {
        self.fov = degrees.clamp(10.0, 120.0).to_radians();
    }

    /// Orbit the camera around the target
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let offset = self.position - self.target;
        let distance = offset.magnitude();
        if distance <= f32::EPSILON {
            return;
        }

        // Convert to spherical coordinates
        let current_yaw = offset.z.atan2(offset.x);
        let current_pitch = (offset.y / distance).clamp(-1.0, 1.0).asin();

        let new_yaw = current_yaw + yaw;
        let new_pitch = (current_pitch + pitch).clamp(-PI / 2.0 + 0.1, PI / 2.0 - 0.1);

        // Convert back to Cartesian
        let cos_pitch = new_pitch.cos();
        self.position = self.target
            + Vector3::new(
                distance * cos_pitch * new_yaw.cos(),
                distance * new_pitch.sin(),
                distance * cos_pitch * new_yaw.sin(),
            );
    }

    /// Zoom the camera (move closer/farther from target)
    pub fn zoom(&mut self, factor: f32) {
        let offset = self.position - self.target;
        let Some(direction) = offset.try_normalize(f32::EPSILON) else {
            return;
        };
        let new_distance = (offset.magnitude() * factor).clamp(0.5, self.far * 0.5);
        self.position = self.target + direction * new_distance;
    }

    /// Project a world point to normalized device coordinates
    ///
    /// Returns `None` for points at or behind the near plane.
    pub fn project(&self, point: &Point3<f32>, aspect: f32) -> Option<Point3<f32>> {
        let view = self.view_matrix().transform_point(point);
        if view.z > -self.near {
            return None;
        }
        Some(self.projection_matrix(aspect).transform_point(&view))
    }

    /// Clip a world-space segment against the near plane and project it
    ///
    /// Returns the NDC endpoints of the visible part, if any.
    pub fn project_segment(
        &self,
        start: &Point3<f32>,
        end: &Point3<f32>,
        aspect: f32,
    ) -> Option<(Point3<f32>, Point3<f32>)> {
        let view = self.view_matrix();
        let mut a = view.transform_point(start);
        let mut b = view.transform_point(end);
        let plane = -self.near;

        match (a.z <= plane, b.z <= plane) {
            (false, false) => return None,
            (true, false) => b = a + (b - a) * ((plane - a.z) / (b.z - a.z)),
            (false, true) => a = b + (a - b) * ((plane - b.z) / (a.z - b.z)),
            (true, true) => {}
        }

        let projection = self.projection_matrix(aspect);
        Some((projection.transform_point(&a), projection.transform_point(&b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camera_default() {
        let cam = Camera::default();
        assert!(cam.position.z > 0.0); // Camera in front
        assert_eq!(cam.target, Point3::origin());
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut cam = Camera::default();
        let before = cam.distance();
        cam.orbit(0.7, 0.3);
        assert!((cam.distance() - before).abs() < 1.0e-4);
    }

    #[test]
    fn test_zoom_clamps() {
        let mut cam = Camera::default();
        cam.zoom(0.0);
        assert!((cam.distance() - 0.5).abs() < 1.0e-4);
    }

    #[test]
    fn test_target_projects_to_center() {
        let cam = Camera::default();
        let ndc = cam.project(&Point3::origin(), 1.0).unwrap();
        assert!(ndc.x.abs() < 1.0e-5);
        assert!(ndc.y.abs() < 1.0e-5);
    }

    #[test]
    fn test_point_behind_camera_rejected() {
        let cam = Camera::new(Point3::new(0.0, 0.0, 5.0), Point3::origin());
        assert!(cam.project(&Point3::new(0.0, 0.0, 10.0), 1.0).is_none());
    }

    #[test]
    fn test_segment_clipped_at_near_plane() {
        let cam = Camera::new(Point3::new(0.0, 0.0, 5.0), Point3::origin());
        let behind = Point3::new(0.0, 0.0, 10.0);
        let front = Point3::new(0.0, 0.0, 0.0);

        let (a, b) = cam.project_segment(&behind, &front, 1.0).unwrap();
        assert!(a.coords.iter().all(|c| c.is_finite()));
        assert!(b.coords.iter().all(|c| c.is_finite()));

        assert!(cam.project_segment(&behind, &Point3::new(1.0, 0.0, 9.0), 1.0).is_none());
    }
}
