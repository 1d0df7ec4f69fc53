//! Point eraser that splits strokes around the eraser footprint.
//!
//! The eraser is a circle of a fixed diameter applied at a single point per
//! input event. A stroke point counts as hit when it lies within the eraser
//! radius plus half the stroke's own width, so thick strokes are caught by
//! their rendered edge rather than their centreline. Hit points are removed
//! and the remaining points are regrouped into contiguous fragments.
//!
//! Positions between two consecutive events are not interpolated: a fast
//! swipe can leave ink between samples untouched.

use super::point::Point;
use super::stroke::Stroke;
use log::trace;

/// Eraser diameter used when none is configured.
pub const DEFAULT_ERASER_DIAMETER: f64 = 20.0;

/// Circular eraser footprint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Eraser {
    diameter: f64,
}

impl Default for Eraser {
    fn default() -> Self {
        Self::new(DEFAULT_ERASER_DIAMETER)
    }
}

impl Eraser {
    /// Creates an eraser, falling back to the default diameter when `diameter`
    /// is not a positive number.
    pub fn new(diameter: f64) -> Self {
        let diameter = if diameter.is_finite() && diameter > 0.0 {
            diameter
        } else {
            DEFAULT_ERASER_DIAMETER
        };
        Self { diameter }
    }

    pub fn diameter(&self) -> f64 {
        self.diameter
    }

    /// Hit distance for `stroke`: eraser radius plus half the stroke width.
    pub fn threshold(&self, stroke: &Stroke) -> f64 {
        self.diameter / 2.0 + stroke.stroke_width / 2.0
    }

    /// Whether erasing at `at` would change `stroke`: some point is within
    /// the threshold, or the stroke has no points to keep.
    pub fn touches(&self, stroke: &Stroke, at: Point) -> bool {
        let threshold = self.threshold(stroke);
        match stroke.extent() {
            Some(extent) if within_reach(extent, at, threshold) => stroke
                .points
                .iter()
                .any(|p| p.distance_to(at) <= threshold),
            Some(_) => false,
            None => true,
        }
    }

    /// Splits one stroke around the eraser placed at `at`.
    ///
    /// - Single-point strokes are kept whole or dropped whole.
    /// - Longer strokes are cut into maximal runs of points farther than the
    ///   threshold; runs shorter than two points are discarded.
    ///
    /// Points exactly at the threshold distance count as hit.
    pub fn split(&self, stroke: &Stroke, at: Point) -> Vec<Stroke> {
        if self.touches(stroke, at) {
            self.cut(stroke, at)
        } else {
            vec![stroke.clone()]
        }
    }

    /// Applies the eraser at `at` to every stroke, returning the surviving
    /// fragments in original-stroke-then-run order.
    pub fn erase(&self, strokes: &[Stroke], at: Point) -> Vec<Stroke> {
        let mut fragments = strokes.to_vec();
        self.erase_in_place(&mut fragments, at);
        fragments
    }

    /// Like [`Eraser::erase`], but rewrites `strokes` directly and hands back
    /// the original strokes the eraser changed. Untouched strokes are moved,
    /// not copied.
    pub fn erase_in_place(&self, strokes: &mut Vec<Stroke>, at: Point) -> Vec<Stroke> {
        let before = strokes.len();
        let mut touched = Vec::new();
        for stroke in std::mem::take(strokes) {
            if self.touches(&stroke, at) {
                strokes.extend(self.cut(&stroke, at));
                touched.push(stroke);
            } else {
                strokes.push(stroke);
            }
        }
        trace!(
            "Eraser at ({:.1}, {:.1}) changed {} of {} strokes, {} remain",
            at.x,
            at.y,
            touched.len(),
            before,
            strokes.len()
        );
        touched
    }

    /// Surviving runs of a stroke already known to be touched.
    fn cut(&self, stroke: &Stroke, at: Point) -> Vec<Stroke> {
        if stroke.points.len() < 2 {
            return Vec::new();
        }
        let threshold = self.threshold(stroke);
        stroke
            .points
            .split(|p| p.distance_to(at) <= threshold)
            .filter(|run| run.len() >= 2)
            .map(|run| stroke.with_points(run.to_vec()))
            .collect()
    }
}

/// Cheap rejection: false when `at` lies farther than `threshold` outside the
/// point extent on some axis, which puts every point out of reach.
fn within_reach(
    (min_x, min_y, max_x, max_y): (f64, f64, f64, f64),
    at: Point,
    threshold: f64,
) -> bool {
    at.x >= min_x - threshold
        && at.x <= max_x + threshold
        && at.y >= min_y - threshold
        && at.y <= max_y + threshold
}
