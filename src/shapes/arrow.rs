//! Arrow - a shaft with a four-spoke head

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use super::traits::Wireframe;
use crate::geometry::{perpendicular_basis, Segment, BASIS_EPSILON};

/// Head size when not specified
pub const DEFAULT_HEAD_SIZE: f32 = 0.1;

fn default_head_size() -> f32 {
    DEFAULT_HEAD_SIZE
}

/// An arrow from `origin` to `origin + direction`
///
/// The head size is relative to the arrow length unless `absolute_head`
/// is set. Emission order:
/// 1. shaft, origin to tip
/// 2. four spokes from the tip to the head base, offset by `+left`,
///    `-left`, `+up`, `-up`
/// 3. two base segments joining the opposite spoke ends (left pair, then
///    up pair)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub origin: Point3<f32>,
    pub direction: Vector3<f32>,
    #[serde(default = "default_head_size")]
    pub head_size: f32,
    /// Treat `head_size` as a world-space length
    #[serde(default)]
    pub absolute_head: bool,
}

impl Arrow {
    /// Arrow with a head 10% of its length
    pub fn new(origin: Point3<f32>, direction: Vector3<f32>) -> Self {
        Self {
            origin,
            direction,
            head_size: DEFAULT_HEAD_SIZE,
            absolute_head: false,
        }
    }

    /// Set a relative head size (builder pattern)
    pub fn with_head_size(mut self, head_size: f32) -> Self {
        self.head_size = head_size;
        self.absolute_head = false;
        self
    }

    /// Set an absolute head size (builder pattern)
    pub fn with_absolute_head(mut self, head_size: f32) -> Self {
        self.head_size = head_size;
        self.absolute_head = true;
        self
    }

    /// Tip of the arrow
    pub fn tip(&self) -> Point3<f32> {
        self.origin + self.direction
    }

    /// Head length in world units
    pub fn head_length(&self) -> f32 {
        if self.absolute_head {
            self.head_size
        } else {
            self.head_size * self.direction.norm()
        }
    }
}

impl Wireframe for Arrow {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        let tip = self.tip();
        let head = self.head_length();
        let forward = self
            .direction
            .try_normalize(BASIS_EPSILON)
            .unwrap_or_else(Vector3::zeros);
        let base = tip - forward * head;
        let (left, up) = perpendicular_basis(&self.direction);

        let spokes = [
            base + left * head,
            base - left * head,
            base + up * head,
            base - up * head,
        ];

        emit(Segment::new(self.origin, tip));
        for spoke in spokes {
            emit(Segment::new(tip, spoke));
        }
        emit(Segment::new(spokes[0], spokes[1]));
        emit(Segment::new(spokes[2], spokes[3]));
    }

    fn name(&self) -> &str {
        "Arrow"
    }

    fn segment_count(&self) -> usize {
        7
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seven_segments_and_exact_shaft() {
        let origin = Point3::new(1.0, 2.0, 3.0);
        let direction = Vector3::new(0.5, -1.0, 2.0);
        let arrow = Arrow::new(origin, direction);

        let segments = arrow.segments();
        assert_eq!(segments.len(), 7);
        assert_eq!(segments[0].start, origin);
        assert_eq!(segments[0].end, origin + direction);
    }

    #[test]
    fn test_spokes_start_at_tip() {
        let arrow = Arrow::new(Point3::origin(), Vector3::new(4.0, 0.0, 0.0));
        let segments = arrow.segments();
        for spoke in &segments[1..5] {
            assert_eq!(spoke.start, arrow.tip());
        }
    }

    #[test]
    fn test_relative_head_geometry() {
        // Length 4, relative head 0.1 -> head length 0.4
        let arrow = Arrow::new(Point3::origin(), Vector3::new(4.0, 0.0, 0.0));
        assert!((arrow.head_length() - 0.4).abs() < 1.0e-6);

        let segments = arrow.segments();
        let base = Point3::new(3.6, 0.0, 0.0);
        for spoke in &segments[1..5] {
            let offset = spoke.end - base;
            assert!((offset.norm() - 0.4).abs() < 1.0e-5);
            assert!(offset.x.abs() < 1.0e-5);
        }

        // Base segments cross through the head base
        for base_segment in &segments[5..7] {
            let mid = base_segment.start + (base_segment.end - base_segment.start) * 0.5;
            assert!((mid - base).norm() < 1.0e-5);
        }
    }

    #[test]
    fn test_absolute_head_ignores_length() {
        let short = Arrow::new(Point3::origin(), Vector3::new(0.0, 0.0, 1.0)).with_absolute_head(0.25);
        let long = Arrow::new(Point3::origin(), Vector3::new(0.0, 0.0, 10.0)).with_absolute_head(0.25);
        assert_eq!(short.head_length(), 0.25);
        assert_eq!(long.head_length(), 0.25);

        let segments = long.segments();
        let base = Point3::new(0.0, 0.0, 9.75);
        assert!(((segments[1].end - base).norm() - 0.25).abs() < 1.0e-5);
    }

    #[test]
    fn test_vertical_arrow_uses_fallback_basis() {
        let arrow = Arrow::new(Point3::origin(), Vector3::new(0.0, 2.0, 0.0));
        let segments = arrow.segments();
        assert!(segments.iter().all(|s| s.is_finite()));

        // Fallback left is -X, so the first spoke ends on the -X side
        assert!((segments[1].end - Point3::new(-0.2, 1.8, 0.0)).norm() < 1.0e-5);
    }

    #[test]
    fn test_zero_direction_is_degenerate_not_nan() {
        let origin = Point3::new(1.0, 1.0, 1.0);
        let segments = Arrow::new(origin, Vector3::zeros()).segments();
        assert_eq!(segments.len(), 7);
        for segment in segments {
            assert!(segment.is_finite());
            assert!(segment.is_degenerate());
            assert_eq!(segment.start, origin);
        }
    }
}
