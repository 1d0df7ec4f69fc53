//! Drawing core of the Cerne note-taking app.
//!
//! Exposes the stroke editor together with the stroke model, configuration,
//! and note records so that host UIs and tools share one implementation of
//! drawing, erasing, and the stored stroke format.

pub mod config;
pub mod draw;
pub mod input;
pub mod note;
pub mod util;

pub use config::Config;
pub use draw::{Point, Stroke};
pub use input::{GestureEvent, InputMode, StrokeEditor};
