//! Wire arc - a pie-slice outline in the horizontal plane
//!
//! The arc is centered on the heading of `direction` projected onto the
//! XZ plane and spans `angle` degrees. The outline starts at `position`,
//! runs out to the first arc point, follows the arc in `segments` chords
//! and returns to `position`.
//!
//! Only the X and Z components of `direction` are used: arcs always lie
//! in the horizontal plane through `position`.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::circle::{default_radius, default_segments, DEFAULT_SEGMENTS};
use super::traits::Wireframe;
use crate::geometry::Segment;

/// A horizontal pie slice of `radius` around `position`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WireArc {
    pub position: Point3<f32>,
    /// Heading the arc is centered on (XZ plane)
    pub direction: Vector3<f32>,
    /// Angular span in degrees
    pub angle: f32,
    #[serde(default = "default_radius")]
    pub radius: f32,
    /// Number of chords along the arc
    #[serde(default = "default_segments")]
    pub segments: u32,
}

impl WireArc {
    /// Arc with the default 32 chords
    pub fn new(position: Point3<f32>, direction: Vector3<f32>, angle: f32, radius: f32) -> Self {
        Self::with_segments(position, direction, angle, radius, DEFAULT_SEGMENTS)
    }

    /// Arc with a custom number of chords
    pub fn with_segments(
        position: Point3<f32>,
        direction: Vector3<f32>,
        angle: f32,
        radius: f32,
        segments: u32,
    ) -> Self {
        Self {
            position,
            direction,
            angle,
            radius,
            segments,
        }
    }

    fn chords(&self) -> u32 {
        self.segments.max(1)
    }

    /// Heading of `direction` in the XZ plane, in degrees
    ///
    /// Measured from +X towards +Z. A direction with no horizontal
    /// component gives 0.
    pub fn heading_degrees(&self) -> f32 {
        self.direction.z.atan2(self.direction.x).to_degrees()
    }

    /// Angle of the first arc point, in degrees
    pub fn start_degrees(&self) -> f32 {
        self.heading_degrees() - self.angle / 2.0
    }

    /// Point on the arc at `degrees`
    pub fn point_at(&self, degrees: f32) -> Point3<f32> {
        let (sin, cos) = degrees.to_radians().sin_cos();
        self.position + Vector3::new(self.radius * cos, 0.0, self.radius * sin)
    }
}

impl Wireframe for WireArc {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        let n = self.chords();
        let start = self.start_degrees();
        let step = self.angle / n as f32;

        let mut previous = self.position;
        for index in 0..=n {
            let point = self.point_at(start + step * index as f32);
            emit(Segment::new(previous, point));
            previous = point;
        }

        emit(Segment::new(previous, self.position));
    }

    fn name(&self) -> &str {
        "Arc"
    }

    fn segment_count(&self) -> usize {
        self.chords() as usize + 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: &Point3<f32>, b: &Point3<f32>) -> bool {
        (a - b).norm() < 1.0e-5
    }

    #[test]
    fn test_quarter_arc_along_x() {
        let arc = WireArc::with_segments(Point3::origin(), Vector3::x(), 90.0, 2.0, 4);
        assert!((arc.start_degrees() + 45.0).abs() < 1.0e-5);

        let segments = arc.segments();
        assert_eq!(segments.len(), 6);
        assert_eq!(segments.len(), arc.segment_count());

        // Leading spoke from the center to -45°
        let s = std::f32::consts::SQRT_2;
        assert_eq!(segments[0].start, Point3::origin());
        assert!(close(&segments[0].end, &Point3::new(s, 0.0, -s)));

        // Chords sweep in 22.5° steps up to +45°
        assert!(close(&segments[2].end, &Point3::new(2.0, 0.0, 0.0)));
        assert!(close(&segments[4].end, &Point3::new(s, 0.0, s)));

        // Closing spoke back to the center
        assert!(close(&segments[5].start, &Point3::new(s, 0.0, s)));
        assert_eq!(segments[5].end, Point3::origin());
    }

    #[test]
    fn test_outline_is_connected() {
        let arc = WireArc::new(Point3::new(1.0, 2.0, 3.0), Vector3::new(-1.0, 0.0, 1.0), 120.0, 1.0);
        let segments = arc.segments();
        assert_eq!(segments.len(), 34);

        for pair in segments.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(segments[0].start, arc.position);
        assert_eq!(segments.last().unwrap().end, arc.position);
    }

    #[test]
    fn test_arc_stays_horizontal() {
        let arc = WireArc::new(Point3::new(0.0, 5.0, 0.0), Vector3::new(0.3, 10.0, 0.4), 270.0, 1.5);
        for segment in arc.segments() {
            assert_eq!(segment.start.y, 5.0);
            assert_eq!(segment.end.y, 5.0);
        }
    }

    #[test]
    fn test_heading_follows_xz_projection() {
        let arc = WireArc::new(Point3::origin(), Vector3::new(0.0, 3.0, 1.0), 30.0, 1.0);
        assert!((arc.heading_degrees() - 90.0).abs() < 1.0e-4);

        let vertical = WireArc::new(Point3::origin(), Vector3::y(), 30.0, 1.0);
        assert_eq!(vertical.heading_degrees(), 0.0);
    }

    #[test]
    fn test_zero_segments_clamped() {
        let arc = WireArc::with_segments(Point3::origin(), Vector3::x(), 60.0, 1.0, 0);
        assert_eq!(arc.segments().len(), 3);
    }
}
