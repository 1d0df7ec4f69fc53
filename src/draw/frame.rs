//! Frame container for the strokes of one drawing.

use super::eraser::Eraser;
use super::point::Point;
use super::stroke::Stroke;
use serde::{Deserialize, Serialize};

/// Ordered strokes making up the canvas content.
///
/// Serialises transparently as the plain stroke list the note store keeps.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Frame {
    /// Strokes in draw order (first = bottom layer, last = top layer)
    pub strokes: Vec<Stroke>,
}

impl Frame {
    /// Creates a new empty frame.
    pub fn new() -> Self {
        Self {
            strokes: Vec::new(),
        }
    }

    /// Builds a frame from stored strokes, dropping those without points.
    pub fn from_strokes(strokes: impl IntoIterator<Item = Stroke>) -> Self {
        Self {
            strokes: strokes.into_iter().filter(|s| !s.is_empty()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Appends a stroke on top and returns its index.
    pub fn push(&mut self, stroke: Stroke) -> usize {
        self.strokes.push(stroke);
        self.strokes.len() - 1
    }

    /// Appends a point to the stroke at `index`.
    ///
    /// Returns the extended stroke, or `None` when the index is stale.
    pub fn extend_stroke(&mut self, index: usize, point: Point) -> Option<&Stroke> {
        let stroke = self.strokes.get_mut(index)?;
        stroke.points.push(point);
        Some(stroke)
    }

    pub fn get(&self, index: usize) -> Option<&Stroke> {
        self.strokes.get(index)
    }

    /// Replaces the content with the fragments left after erasing at `at`.
    ///
    /// Returns the strokes as they were before the eraser changed them.
    pub fn erase_at(&mut self, eraser: &Eraser, at: Point) -> Vec<Stroke> {
        eraser.erase_in_place(&mut self.strokes, at)
    }
}
