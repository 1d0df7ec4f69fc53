//! Host input events delivered to the stroke editor.

use super::mode::InputMode;
use crate::draw::Stroke;
use serde::{Deserialize, Serialize};

/// Identifies one independent pointer or touch.
///
/// Hosts that only report a single pointer can ignore this and use
/// [`PointerId::PRIMARY`] throughout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointerId(pub u64);

impl PointerId {
    pub const PRIMARY: PointerId = PointerId(0);
}

/// A single event from the host UI layer.
///
/// Serialised form (used by gesture scripts):
/// ```json
/// {"type": "start", "x": 10.0, "y": 20.0}
/// {"type": "move", "x": 12.0, "y": 24.0, "pointer": 1}
/// {"type": "set-mode", "mode": "erase"}
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum GestureEvent {
    /// Pointer went down
    Start {
        #[serde(default)]
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    /// Pointer moved while down
    Move {
        #[serde(default)]
        pointer: PointerId,
        x: f64,
        y: f64,
    },
    /// Pointer lifted
    End {
        #[serde(default)]
        pointer: PointerId,
    },
    /// Gesture taken over or aborted by the host
    Cancel {
        #[serde(default)]
        pointer: PointerId,
    },
    /// Draw/erase toggle
    SetMode { mode: InputMode },
    /// Canvas size changed
    Resize { width: u32, height: u32 },
    /// Strokes of the note being opened
    LoadInitial { strokes: Vec<Stroke> },
}
