//! Shapes module - debug shapes and their decomposition into segments
//!
//! This module provides:
//! - `Wireframe` trait for abstracting over different shape types
//! - Straight shapes: Line, Ray, Polyline, WireBox
//! - Round shapes: WireSphere, WireCircle, WireArc
//! - Arrow
//! - `ShapeParams`, one tagged value for any of the above
//! - `Scene` for loading lists of styled shapes from JSON

mod arc;
mod arrow;
mod circle;
mod primitives;
mod scene;
mod sphere;
mod traits;

pub use arc::WireArc;
pub use arrow::{Arrow, DEFAULT_HEAD_SIZE};
pub use circle::{WireCircle, DEFAULT_SEGMENTS};
pub use primitives::{Line, Polyline, Ray, WireBox, BOX_EDGES, UNIT_CUBE_CORNERS};
pub use scene::{Scene, SceneEntry, SceneError};
pub use sphere::{WireSphere, DEFAULT_SPHERE_SEGMENTS};
pub use traits::{BoxedWireframe, Wireframe};

use serde::{Deserialize, Serialize};

use crate::geometry::Segment;
use crate::sink::{LineSink, LineStyle};

/// Any debug shape, tagged by kind
///
/// Serialized with a `"shape"` tag, e.g.
/// `{"shape": "sphere", "center": [0, 1, 0], "radius": 0.5}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeParams {
    Line(Line),
    Ray(Ray),
    Polyline(Polyline),
    Box(WireBox),
    Sphere(WireSphere),
    Circle(WireCircle),
    Arc(WireArc),
    Arrow(Arrow),
}

impl ShapeParams {
    fn as_wireframe(&self) -> &dyn Wireframe {
        match self {
            ShapeParams::Line(shape) => shape,
            ShapeParams::Ray(shape) => shape,
            ShapeParams::Polyline(shape) => shape,
            ShapeParams::Box(shape) => shape,
            ShapeParams::Sphere(shape) => shape,
            ShapeParams::Circle(shape) => shape,
            ShapeParams::Arc(shape) => shape,
            ShapeParams::Arrow(shape) => shape,
        }
    }
}

impl Wireframe for ShapeParams {
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment)) {
        self.as_wireframe().for_each_segment(emit);
    }

    fn name(&self) -> &str {
        self.as_wireframe().name()
    }

    fn segment_count(&self) -> usize {
        self.as_wireframe().segment_count()
    }
}

macro_rules! impl_from_shape {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ShapeParams {
                fn from(shape: $ty) -> Self {
                    ShapeParams::$variant(shape)
                }
            }
        )*
    };
}

impl_from_shape! {
    Line => Line,
    Ray => Ray,
    Polyline => Polyline,
    Box => WireBox,
    Sphere => WireSphere,
    Circle => WireCircle,
    Arc => WireArc,
    Arrow => Arrow,
}

/// Decompose a shape into its segments
///
/// # Arguments
/// * `shape` - The shape to decompose
///
/// # Returns
/// The shape's segments in emission order
pub fn decompose<W: Wireframe + ?Sized>(shape: &W) -> Vec<Segment> {
    shape.segments()
}

/// Decompose a shape straight into a sink
///
/// Segments are handed over one at a time, in emission order, each with
/// the same `style`.
pub fn draw<W, S>(shape: &W, sink: &mut S, style: &LineStyle)
where
    W: Wireframe + ?Sized,
    S: LineSink,
{
    shape.draw(sink, style);
}
