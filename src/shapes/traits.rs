//! Wireframe trait definition
//!
//! The `Wireframe` trait is the core abstraction for debug shapes.
//! A shape only has to say which segments it consists of, in order;
//! collecting them or streaming them to a sink comes for free.

use crate::geometry::Segment;
use crate::sink::{LineSink, LineStyle};

/// A shape that can be drawn as a set of line segments
///
/// ## Determinism
///
/// Decomposition is a pure function of the shape's parameters: the same
/// shape always yields the same segments in the same order. The order is
/// part of each shape's contract and is documented on the shape.
///
/// ## Thread Safety
///
/// Shapes are plain values, `Send + Sync`, and may be decomposed from
/// any thread. Only the sink needs care when shared.
pub trait Wireframe: Send + Sync {
    /// Call `emit` once per segment, in decomposition order
    fn for_each_segment(&self, emit: &mut dyn FnMut(Segment));

    /// Name of this shape kind (for logs and UI)
    fn name(&self) -> &str;

    /// Number of segments `for_each_segment` will emit
    ///
    /// Default implementation counts them.
    fn segment_count(&self) -> usize {
        let mut count = 0;
        self.for_each_segment(&mut |_| count += 1);
        count
    }

    /// Collect all segments into a vector
    fn segments(&self) -> Vec<Segment> {
        let mut segments = Vec::with_capacity(self.segment_count());
        self.for_each_segment(&mut |segment| segments.push(segment));
        segments
    }

    /// Stream every segment to `sink` with the given style
    fn draw(&self, sink: &mut dyn LineSink, style: &LineStyle) {
        log::trace!("drawing {} ({} segments)", self.name(), self.segment_count());
        self.for_each_segment(&mut |segment| sink.draw_line(segment, style));
    }
}

/// A boxed wireframe for dynamic dispatch
pub type BoxedWireframe = Box<dyn Wireframe>;
