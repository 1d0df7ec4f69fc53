//! Stroke editor state and session lifecycle.

use crate::config::Config;
use crate::draw::{DEFAULT_STROKE_WIDTH, DirtyTracker, Eraser, Frame, Point, Stroke};
use crate::input::{InputMode, PointerId};
use crate::util::{self, Rect};
use log::debug;
use std::collections::HashMap;
use std::fmt;

/// Callback receiving the full stroke list after every change.
///
/// Each call gets its own copy, so a list handed out earlier never changes
/// under the receiver.
pub type StrokeObserver = Box<dyn FnMut(Vec<Stroke>)>;

/// Editing session for one drawing.
///
/// Owns the authoritative stroke list. Hosts feed it gesture events (see the
/// `on_gesture_*` and `on_pointer_*` methods) and read the result either from
/// the registered observer or through [`StrokeEditor::strokes`]. When the
/// session ends, [`StrokeEditor::into_strokes`] hands the final list over for
/// storage.
pub struct StrokeEditor {
    /// Canvas content in draw order
    pub(super) frame: Frame,
    /// Current interpretation of pointer events
    pub(super) mode: InputMode,
    /// Eraser footprint used in erase mode
    pub(super) eraser: Eraser,
    /// Width given to newly drawn strokes
    pub(super) stroke_width: f64,
    /// Whether incoming coordinates are clamped to the canvas bounds
    pub(super) clamp_to_canvas: bool,
    /// Canvas width in pixels (0 until the host reports it)
    pub(super) canvas_width: u32,
    /// Canvas height in pixels (0 until the host reports it)
    pub(super) canvas_height: u32,
    /// Index into `frame` of the stroke each pointer is extending
    pub(super) active: HashMap<PointerId, usize>,
    /// Set once the initial strokes have been seeded
    initial_loaded: bool,
    observer: Option<StrokeObserver>,
    /// Tracks dirty regions between renders
    pub(super) dirty_tracker: DirtyTracker,
}

impl Default for StrokeEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StrokeEditor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StrokeEditor")
            .field("strokes", &self.frame.len())
            .field("mode", &self.mode)
            .field("eraser", &self.eraser)
            .field("stroke_width", &self.stroke_width)
            .field("canvas", &(self.canvas_width, self.canvas_height))
            .field("active", &self.active)
            .field("initial_loaded", &self.initial_loaded)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl StrokeEditor {
    /// Creates an editor with the default eraser diameter and stroke width,
    /// in draw mode, with unknown canvas bounds.
    pub fn new() -> Self {
        Self::with_settings(Eraser::default(), DEFAULT_STROKE_WIDTH)
    }

    /// Creates an editor with a custom eraser and stroke width.
    pub fn with_settings(eraser: Eraser, stroke_width: f64) -> Self {
        let stroke_width = if stroke_width.is_finite() && stroke_width > 0.0 {
            stroke_width
        } else {
            DEFAULT_STROKE_WIDTH
        };
        Self {
            frame: Frame::new(),
            mode: InputMode::Draw,
            eraser,
            stroke_width,
            clamp_to_canvas: true,
            canvas_width: 0,
            canvas_height: 0,
            active: HashMap::new(),
            initial_loaded: false,
            observer: None,
            dirty_tracker: DirtyTracker::new(),
        }
    }

    /// Creates an editor from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut editor = Self::with_settings(
            Eraser::new(config.editor.eraser_diameter),
            config.editor.stroke_width,
        );
        editor.mode = config.editor.initial_mode;
        editor.clamp_to_canvas = config.editor.clamp_to_canvas;
        editor.canvas_width = config.canvas.width;
        editor.canvas_height = config.canvas.height;
        editor
    }

    /// Registers the callback that receives the stroke list after each change.
    pub fn set_observer(&mut self, observer: impl FnMut(Vec<Stroke>) + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Removes the registered observer, if any.
    pub fn clear_observer(&mut self) -> Option<StrokeObserver> {
        self.observer.take()
    }

    /// Seeds the editor with the strokes of the note being opened.
    ///
    /// Only the first call in a session applies; later calls are ignored even
    /// when they carry different strokes, so a host re-mount cannot clobber
    /// edits already made. The strokes are copied, and records without points
    /// are dropped.
    ///
    /// Returns whether the strokes were applied.
    pub fn load_initial(&mut self, strokes: &[Stroke]) -> bool {
        if self.initial_loaded {
            debug!("Initial strokes already loaded; ignoring reseed");
            return false;
        }
        self.initial_loaded = true;
        self.frame = Frame::from_strokes(strokes.iter().cloned());
        self.active.clear();
        self.dirty_tracker.mark_full();
        debug!("Loaded {} initial strokes", self.frame.len());
        self.notify();
        true
    }

    /// Whether [`StrokeEditor::load_initial`] has already applied.
    pub fn initial_loaded(&self) -> bool {
        self.initial_loaded
    }

    /// Switches how subsequent events are interpreted. Existing strokes are
    /// untouched.
    pub fn set_mode(&mut self, mode: InputMode) {
        if self.mode != mode {
            debug!("Input mode {} -> {}", self.mode.as_str(), mode.as_str());
        }
        self.mode = mode;
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn eraser(&self) -> &Eraser {
        &self.eraser
    }

    pub fn stroke_width(&self) -> f64 {
        self.stroke_width
    }

    /// Updates canvas dimensions after the host lays out the drawing surface.
    ///
    /// Zero in either dimension means unknown and disables clamping.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.canvas_width = width;
        self.canvas_height = height;
        self.dirty_tracker.mark_full();
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        (self.canvas_width, self.canvas_height)
    }

    /// Current strokes in draw order.
    pub fn strokes(&self) -> &[Stroke] {
        &self.frame.strokes
    }

    /// Copy of the current strokes, detached from the editor.
    pub fn snapshot(&self) -> Vec<Stroke> {
        self.frame.strokes.clone()
    }

    /// Whether any pointer is currently extending a stroke.
    pub fn is_drawing(&self) -> bool {
        !self.active.is_empty()
    }

    /// Drains pending dirty rectangles for the current canvas size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        self.dirty_tracker
            .take_regions(self.canvas_width, self.canvas_height)
    }

    /// Ends the session, handing the final strokes to the caller.
    pub fn into_strokes(self) -> Vec<Stroke> {
        self.frame.strokes
    }

    /// Converts host coordinates into a canvas point.
    ///
    /// Non-finite coordinates yield `None`; the event is then ignored.
    pub(super) fn locate(&self, x: f64, y: f64) -> Option<Point> {
        if !(x.is_finite() && y.is_finite()) {
            debug!("Ignoring non-finite pointer position ({x}, {y})");
            return None;
        }
        let (x, y) = if self.clamp_to_canvas {
            util::clamp_to_canvas(x, y, self.canvas_width, self.canvas_height)
        } else {
            (x, y)
        };
        Some(Point::new(x, y))
    }

    /// Delivers a copy of the stroke list to the observer.
    pub(super) fn notify(&mut self) {
        if let Some(observer) = self.observer.as_mut() {
            observer(self.frame.strokes.clone());
        }
    }
}
