//! Wire sphere - three axis-aligned great circles
//!
//! ## Parametric Equations
//! ```text
//! YZ circle: (cx,            cy + r sin a,  cz + r cos a)
//! XZ circle: (cx + r cos a,  cy,            cz + r sin a)
//! XY circle: (cx + r cos a,  cy + r sin a,  cz)
//! ```
//!
//! The three circles are walked together: each angular step emits one
//! segment per circle, in YZ, XZ, XY order. The walk ends at 360°, which
//! lands on the starting point within floating-point tolerance; no
//! separate closing segment is emitted.

use nalgebra::Point3;
use serde::{Deserialize, Serialize};

use super::circle::default_radius;
use super::traits::Wireframe;
use crate::geometry::Segment;

/// Segments per great circle when not specified (10° steps)
pub const DEFAULT_SPHERE_SEGMENTS: u32 = 36;

/// A wireframe sphere made of three great circles
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireSphere {
    pub center: Point3<f32>,
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Segments per great circle
    #[serde(default = "default_segments")]
    pub segments: u32,
}

fn default_segments() -> u32 {
    DEFAULT_SPHERE_SEGMENTS
}

impl WireSphere {
    /// Sphere with the default 36 segments per circle
    pub fn new(center: Point3<f32>, radius: f32) -> Self {
        Self::with_segments(center, radius, DEFAULT_SPHERE_SEGMENTS)
    }

    /// Sphere with a custom number of segments per circle
    pub fn with_segments(center: Point3<f32>, radius: f32, segments: u32) -> Self {
        Self {
            center,
            radius,
            segments,
        }
    }

    /// Angular step between consecutive points, in degrees
    pub fn step_degrees(&self) -> f32 {
        360.0 / self.steps() as f32
    }

    fn steps(&self) -> u32 {
        self.segments.max(1)
    }

    /// Points of the YZ, XZ and XY circles at angle `degrees`
    fn ring_points(&self, degrees: f32) -> [Point3<f32>; 3] {
        let c = self.center;
        let r = self.radius;
        let (sin, cos) = degrees.to_radians().sin_cos();
        [
            Point3::new(c.x, c.y + r * sin, c.z + r * cos),
            Point3::new(c.x + r * cos, c.y, c.z + r * sin),
            Point3::new(c.x + r * cos, c.y + r * sin, c.z),
        ]
    }
}

impl Wireframe for WireSphere {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        let step = self.step_degrees();
        let mut previous = self.ring_points(0.0);

        for index in 1..=self.steps() {
            let next = self.ring_points(step * index as f32);
            for (start, end) in previous.iter().zip(next.iter()) {
                emit(Segment::new(*start, *end));
            }
            previous = next;
        }
    }

    fn name(&self) -> &str {
        "Sphere"
    }

    fn segment_count(&self) -> usize {
        3 * self.steps() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_segment_count() {
        let sphere = WireSphere::new(Point3::origin(), 1.0);
        assert_eq!(sphere.segments().len(), 108);
        assert_eq!(sphere.segment_count(), 108);
        assert!((sphere.step_degrees() - 10.0).abs() < 1.0e-6);
    }

    #[test]
    fn test_endpoints_on_sphere() {
        let center = Point3::new(1.0, -2.0, 3.5);
        let radius = 2.5;
        let sphere = WireSphere::new(center, radius);

        for segment in sphere.segments() {
            assert!(((segment.start - center).norm() - radius).abs() < 1.0e-4);
            assert!(((segment.end - center).norm() - radius).abs() < 1.0e-4);
        }
    }

    #[test]
    fn test_circles_stay_in_their_planes() {
        let center = Point3::new(0.5, 0.5, 0.5);
        let segments = WireSphere::new(center, 1.0).segments();

        for step in segments.chunks(3) {
            assert_eq!(step[0].end.x, center.x); // YZ
            assert_eq!(step[1].end.y, center.y); // XZ
            assert_eq!(step[2].end.z, center.z); // XY
        }
    }

    #[test]
    fn test_first_step_starts_on_axes() {
        let segments = WireSphere::new(Point3::origin(), 1.0).segments();
        assert_eq!(segments[0].start, Point3::new(0.0, 0.0, 1.0));
        assert_eq!(segments[1].start, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(segments[2].start, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_stepwise_chain_returns_to_start() {
        let segments = WireSphere::new(Point3::origin(), 1.0).segments();

        // Each circle is a connected chain
        for i in 3..segments.len() {
            assert_eq!(segments[i].start, segments[i - 3].end);
        }

        // The last step lands back on the first point of each circle
        let n = segments.len();
        for k in 0..3 {
            assert!((segments[n - 3 + k].end - segments[k].start).norm() < 1.0e-5);
        }
    }

    #[test]
    fn test_custom_and_degenerate_segments() {
        let sphere = WireSphere::with_segments(Point3::origin(), 1.0, 12);
        assert_eq!(sphere.segments().len(), 36);

        let zero = WireSphere::with_segments(Point3::origin(), 1.0, 0);
        assert_eq!(zero.segments().len(), 3);

        let point = WireSphere::new(Point3::new(1.0, 1.0, 1.0), 0.0);
        assert!(point.segments().iter().all(|s| s.is_degenerate()));
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let sphere: WireSphere = serde_json::from_str(r#"{ "center": [0.0, 2.0, 0.0] }"#).unwrap();
        assert_eq!(sphere, WireSphere::new(Point3::new(0.0, 2.0, 0.0), 1.0));
        assert_eq!(sphere.segment_count(), 3 * DEFAULT_SPHERE_SEGMENTS as usize);
    }
}
