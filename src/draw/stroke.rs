//! Stroke definitions for freehand drawings.

use super::point::Point;
use crate::util::Rect;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Width used for new strokes and for stored strokes without a usable width.
pub const DEFAULT_STROKE_WIDTH: f64 = 3.0;

/// Rendering mode tag carried by every stored stroke.
///
/// Erasing is an input mode only; it never produces a stored stroke, so the
/// single variant here is what the storage collaborator expects to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrokeMode {
    #[default]
    Draw,
}

/// One continuous pen-down-to-pen-up drawing action.
///
/// Serialises to the record shape the note store keeps:
/// `{"points": [{"x", "y"}, ...], "mode": "draw", "strokeWidth": 3.0}`.
/// Decoding is lenient so damaged records load as
/// something drawable rather than failing the whole note.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawStroke")]
pub struct Stroke {
    /// Points in drawing order
    pub points: Vec<Point>,
    /// Always [`StrokeMode::Draw`] for stored strokes
    pub mode: StrokeMode,
    /// Line thickness in canvas units
    pub stroke_width: f64,
}

impl Stroke {
    /// Creates a stroke from the given points, falling back to the default width
    /// when `stroke_width` is not a positive number.
    pub fn new(points: Vec<Point>, stroke_width: f64) -> Self {
        Self {
            points,
            mode: StrokeMode::Draw,
            stroke_width: sanitize_width(Some(stroke_width)),
        }
    }

    /// Starts a stroke at a single point.
    pub fn starting_at(point: Point, stroke_width: f64) -> Self {
        Self::new(vec![point], stroke_width)
    }

    /// Returns a stroke with the same width carrying a different set of points.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            mode: StrokeMode::Draw,
            stroke_width: self.stroke_width,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Whether the stroke renders as a connected polyline (two or more points).
    pub fn is_polyline(&self) -> bool {
        self.points.len() >= 2
    }

    /// Float bounds of the points as `(min_x, min_y, max_x, max_y)`, unpadded.
    pub(crate) fn extent(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.points.first()?;
        let init = (first.x, first.y, first.x, first.y);
        Some(
            self.points[1..]
                .iter()
                .fold(init, |(min_x, min_y, max_x, max_y), p| {
                    (min_x.min(p.x), min_y.min(p.y), max_x.max(p.x), max_y.max(p.y))
                }),
        )
    }

    /// Returns the axis-aligned bounding box expanded to cover the stroke width.
    ///
    /// Returns `None` for an empty stroke.
    pub fn bounding_box(&self) -> Option<Rect> {
        let (min_x, min_y, max_x, max_y) = self.extent()?;
        let padding = (self.stroke_width / 2.0).max(1.0);
        Rect::covering(
            min_x - padding,
            min_y - padding,
            max_x + padding,
            max_y + padding,
        )
    }
}

fn sanitize_width(width: Option<f64>) -> f64 {
    match width {
        Some(w) if w.is_finite() && w > 0.0 => w,
        _ => DEFAULT_STROKE_WIDTH,
    }
}

/// Wire form accepted when decoding stored strokes.
///
/// Any `points` value that is not a list of `{x, y}` numbers decodes as an
/// empty list; any `strokeWidth` that is not a positive number decodes as the
/// default. The `mode` tag is ignored because stored strokes are always ink.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStroke {
    #[serde(default)]
    points: Lenient<Vec<Point>>,
    #[serde(default)]
    stroke_width: Lenient<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Lenient<T> {
    Valid(T),
    Invalid(IgnoredAny),
}

impl<T> Default for Lenient<T> {
    fn default() -> Self {
        Lenient::Invalid(IgnoredAny)
    }
}

impl<T> Lenient<T> {
    fn into_option(self) -> Option<T> {
        match self {
            Lenient::Valid(value) => Some(value),
            Lenient::Invalid(_) => None,
        }
    }
}

impl From<RawStroke> for Stroke {
    fn from(raw: RawStroke) -> Self {
        Self {
            points: raw.points.into_option().unwrap_or_default(),
            mode: StrokeMode::Draw,
            stroke_width: sanitize_width(raw.stroke_width.into_option()),
        }
    }
}
