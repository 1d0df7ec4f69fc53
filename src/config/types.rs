//! Configuration type definitions.

use crate::draw::{DEFAULT_ERASER_DIAMETER, DEFAULT_STROKE_WIDTH};
use crate::input::InputMode;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Stroke editor settings.
///
/// Controls how gestures turn into ink and how large the eraser is when a
/// drawing is opened.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct EditorConfig {
    /// Eraser footprint diameter in canvas units (valid range: 1.0 - 200.0)
    #[serde(default = "default_eraser_diameter")]
    pub eraser_diameter: f64,

    /// Width of newly drawn strokes (valid range: 0.5 - 50.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Mode the editor starts in ("draw" or "erase")
    #[serde(default)]
    pub initial_mode: InputMode,

    /// Clamp pointer positions to the canvas once its size is known
    #[serde(default = "default_clamp_to_canvas")]
    pub clamp_to_canvas: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            eraser_diameter: default_eraser_diameter(),
            stroke_width: default_stroke_width(),
            initial_mode: InputMode::default(),
            clamp_to_canvas: default_clamp_to_canvas(),
        }
    }
}

/// Canvas dimensions known ahead of the first layout pass.
///
/// Zero means unknown; the host reports the real size with a resize event.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Canvas width in pixels
    #[serde(default)]
    pub width: u32,

    /// Canvas height in pixels
    #[serde(default)]
    pub height: u32,
}

fn default_eraser_diameter() -> f64 {
    DEFAULT_ERASER_DIAMETER
}

fn default_stroke_width() -> f64 {
    DEFAULT_STROKE_WIDTH
}

fn default_clamp_to_canvas() -> bool {
    true
}
