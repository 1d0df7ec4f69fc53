mod editor;
mod gesture;
#[cfg(test)]
mod tests;

pub use editor::{StrokeEditor, StrokeObserver};
