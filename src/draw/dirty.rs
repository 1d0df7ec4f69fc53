//! Dirty region tracking for incremental repaint of the canvas.
//!
//! Collects axis-aligned rectangles that need repainting between frames.
//! Hosts that never drain the tracker see at most [`MAX_DIRTY_REGIONS`] pending
//! rectangles; beyond that the queue collapses into one covering rectangle.

use super::{Point, Stroke};
use crate::util::Rect;

/// Pending rectangles kept before they are merged into one.
pub const MAX_DIRTY_REGIONS: usize = 32;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        if self.regions.len() >= MAX_DIRTY_REGIONS {
            let merged = self.regions.drain(..).fold(rect, Rect::union);
            self.regions.push(merged);
            return;
        }
        self.regions.push(rect);
    }

    /// Adds the bounding box of `stroke`. Empty strokes have nothing to repaint.
    pub fn mark_stroke(&mut self, stroke: &Stroke) {
        if let Some(rect) = stroke.bounding_box() {
            self.mark_rect(rect);
        }
    }

    /// Adds the rectangle covering one line segment drawn at `width`.
    pub fn mark_segment(&mut self, from: Point, to: Point, width: f64) {
        let padding = (width / 2.0).max(1.0);
        if let Some(rect) = Rect::covering(
            from.x.min(to.x) - padding,
            from.y.min(to.y) - padding,
            from.x.max(to.x) + padding,
            from.y.max(to.y) + padding,
        ) {
            self.mark_rect(rect);
        }
    }

    /// Marks the union of all given strokes as a single region.
    pub fn mark_strokes<'a>(&mut self, strokes: impl IntoIterator<Item = &'a Stroke>) {
        let union = strokes
            .into_iter()
            .filter_map(Stroke::bounding_box)
            .reduce(Rect::union);
        if let Some(rect) = union {
            self.mark_rect(rect);
        }
    }

    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface (or nothing while the surface size is unknown); otherwise
    /// returns accumulated rectangles.
    pub fn take_regions(&mut self, width: u32, height: u32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            let width = width.min(i32::MAX as u32) as i32;
            let height = height.min(i32::MAX as u32) as i32;
            Rect::new(0, 0, width, height).into_iter().collect()
        } else {
            std::mem::take(&mut self.regions)
        }
    }
}
