//! Shared line buffer for drawing from several threads
//!
//! `SharedLines` wraps a `DebugLines` store in `Arc<Mutex<_>>`. Every
//! clone points at the same store, so worker threads can each hold one
//! and draw into it while the presenting thread reads and advances it.
//!
//! Shapes themselves are pure; this handle is the only place where
//! concurrent access to a sink is serialized.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use super::lines::{DebugLine, DebugLines};
use super::{LineSink, LineStyle};
use crate::geometry::Segment;

/// Thread-safe handle to a `DebugLines` store
///
/// ## Example
///
/// ```
/// use wire_gizmo::sink::SharedLines;
/// use wire_gizmo::shapes::{Line, Wireframe};
/// use wire_gizmo::sink::LineStyle;
/// use nalgebra::Point3;
///
/// let lines = SharedLines::new();
/// let mut producer = lines.clone();
///
/// std::thread::spawn(move || {
///     Line::new(Point3::origin(), Point3::new(0.0, 1.0, 0.0))
///         .draw(&mut producer, &LineStyle::default());
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(lines.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SharedLines {
    inner: Arc<Mutex<DebugLines>>,
}

impl SharedLines {
    /// Create a handle to a new, empty store
    pub fn new() -> Self {
        Self::from_lines(DebugLines::new())
    }

    /// Share an existing store
    pub fn from_lines(lines: DebugLines) -> Self {
        Self {
            inner: Arc::new(Mutex::new(lines)),
        }
    }

    /// Lock the store, recovering from poisoning
    pub fn lock(&self) -> MutexGuard<'_, DebugLines> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of live lines
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Check if no line is live
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Copy of the live lines, oldest first
    pub fn snapshot(&self) -> Vec<DebugLine> {
        self.lock().snapshot()
    }

    /// Age the store by `dt` seconds
    pub fn advance(&self, dt: f32) {
        self.lock().advance(dt);
    }

    /// Remove all lines
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Draw a batch of segments under a single lock
    pub fn draw_all<I>(&self, segments: I, style: &LineStyle)
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut lines = self.lock();
        for segment in segments {
            lines.draw_line(segment, style);
        }
    }
}

impl LineSink for SharedLines {
    fn draw_line(&mut self, segment: Segment, style: &LineStyle) {
        self.lock().draw_line(segment, style);
    }
}
