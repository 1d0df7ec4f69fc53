//! Utility types for geometry shared by the drawing and input layers.
//!
//! This module provides:
//! - [`Rect`], an integer damage rectangle used for dirty-region tracking
//! - Coordinate clamping against the canvas bounds reported by the host

// ============================================================================
// Rectangles
// ============================================================================

/// Axis-aligned rectangle in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    ///
    /// Spans wider than `i32::MAX` saturate.
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        Self::new(min_x, min_y, span(min_x, max_x), span(min_y, max_y))
    }

    /// Builds the smallest integer rectangle covering the given float bounds.
    ///
    /// Degenerate spans are widened to one pixel so a single dot still
    /// produces damage.
    pub fn covering(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Option<Self> {
        if !(min_x.is_finite() && min_y.is_finite() && max_x.is_finite() && max_y.is_finite()) {
            return None;
        }
        let (min_x, max_x) = pixel_bounds(min_x, max_x);
        let (min_y, max_y) = pixel_bounds(min_y, max_y);
        Self::from_min_max(min_x, min_y, max_x, max_y)
    }

    /// Returns true when the rectangle has a drawable area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());
        Rect {
            x: min_x,
            y: min_y,
            width: span(min_x, max_x),
            height: span(min_y, max_y),
        }
    }

    fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }
}

/// `max - min`, saturating at `i32::MAX`.
fn span(min: i32, max: i32) -> i32 {
    let wide = i64::from(max) - i64::from(min);
    wide.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32
}

/// Rounds a float span outwards to pixels, keeping at least one pixel.
///
/// Bounds beyond the `i32` range are pinned to it.
fn pixel_bounds(min: f64, max: f64) -> (i32, i32) {
    let lo = min
        .floor()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX - 1)) as i32;
    let hi = max
        .ceil()
        .clamp(f64::from(i32::MIN), f64::from(i32::MAX)) as i32;
    (lo, hi.max(lo + 1))
}

// ============================================================================
// Canvas Bounds
// ============================================================================

/// Clamps a coordinate pair to `[0, width] × [0, height]`.
///
/// Bounds are only applied when both dimensions are known (non-zero); the host
/// reports zero before its first layout pass, in which case coordinates pass
/// through untouched.
pub fn clamp_to_canvas(x: f64, y: f64, width: u32, height: u32) -> (f64, f64) {
    if width == 0 || height == 0 {
        return (x, y);
    }
    (x.clamp(0.0, width as f64), y.clamp(0.0, height as f64))
}
