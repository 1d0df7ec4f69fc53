//! Input handling and the stroke editor state machine.
//!
//! This module turns host pointer events into edits of the stroke list. It
//! keeps the current input mode (draw or erase), the stroke being extended by
//! each active pointer, and notifies an observer whenever the strokes change.

pub mod events;
pub mod mode;
pub mod state;

// Re-export commonly used types at module level
pub use events::{GestureEvent, PointerId};
pub use mode::{InputMode, ParseInputModeError};
pub use state::{StrokeEditor, StrokeObserver};
