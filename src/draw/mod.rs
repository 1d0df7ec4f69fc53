//! Stroke model and geometry for freehand drawings.
//!
//! This module defines the core drawing types:
//! - [`Point`] and [`Stroke`]: vector ink as stored with a drawing note
//! - [`Frame`]: ordered container for all strokes of the current drawing
//! - [`Eraser`]: splits strokes around a circular eraser footprint
//! - [`DirtyTracker`]: damage rectangles for incremental repaint

pub mod dirty;
pub mod eraser;
pub mod frame;
pub mod point;
pub mod stroke;

pub use dirty::{DirtyTracker, MAX_DIRTY_REGIONS};
pub use eraser::{DEFAULT_ERASER_DIAMETER, Eraser};
pub use frame::Frame;
pub use point::Point;
pub use stroke::{DEFAULT_STROKE_WIDTH, Stroke, StrokeMode};
