use crate::draw::{Point, Stroke};
use crate::input::{GestureEvent, InputMode, PointerId};
use log::debug;

use super::StrokeEditor;

impl StrokeEditor {
    /// Processes a pointer-down event from the primary pointer.
    ///
    /// # Behavior
    /// - Draw mode: starts a new single-point stroke on top of the frame
    /// - Erase mode: erases at the position; no stroke is started
    pub fn on_gesture_start(&mut self, x: f64, y: f64) {
        self.on_pointer_start(PointerId::PRIMARY, x, y);
    }

    /// Processes pointer motion from the primary pointer.
    ///
    /// # Behavior
    /// - Draw mode: appends the point to the stroke started by this gesture
    /// - Draw mode without a started stroke: ignored
    /// - Erase mode: erases at the position
    pub fn on_gesture_move(&mut self, x: f64, y: f64) {
        self.on_pointer_move(PointerId::PRIMARY, x, y);
    }

    /// Processes the end of the primary pointer's gesture.
    pub fn on_gesture_end(&mut self) {
        self.on_pointer_end(PointerId::PRIMARY);
    }

    /// Processes a host cancellation of the primary pointer's gesture.
    ///
    /// Points already committed stay in place.
    pub fn on_gesture_cancel(&mut self) {
        self.on_pointer_cancel(PointerId::PRIMARY);
    }

    /// Pointer-down for a specific pointer.
    pub fn on_pointer_start(&mut self, pointer: PointerId, x: f64, y: f64) {
        let Some(point) = self.locate(x, y) else {
            return;
        };

        match self.mode {
            InputMode::Erase => self.erase_at(point),
            InputMode::Draw => {
                let stroke = Stroke::starting_at(point, self.stroke_width);
                self.dirty_tracker.mark_stroke(&stroke);
                let index = self.frame.push(stroke);
                self.active.insert(pointer, index);
                self.notify();
            }
        }
    }

    /// Pointer motion for a specific pointer.
    pub fn on_pointer_move(&mut self, pointer: PointerId, x: f64, y: f64) {
        let Some(point) = self.locate(x, y) else {
            return;
        };

        if self.mode == InputMode::Erase {
            self.erase_at(point);
            return;
        }

        let Some(&index) = self.active.get(&pointer) else {
            debug!("Ignoring move for pointer {} without a started stroke", pointer.0);
            return;
        };

        let Some(stroke) = self.frame.extend_stroke(index, point) else {
            debug!("Stroke {index} for pointer {} no longer exists", pointer.0);
            self.active.remove(&pointer);
            return;
        };

        let previous = stroke
            .points
            .len()
            .checked_sub(2)
            .map_or(point, |i| stroke.points[i]);
        let width = stroke.stroke_width;
        self.dirty_tracker.mark_segment(previous, point, width);
        self.notify();
    }

    /// Pointer-up for a specific pointer.
    pub fn on_pointer_end(&mut self, pointer: PointerId) {
        self.active.remove(&pointer);
    }

    /// Host cancellation for a specific pointer.
    pub fn on_pointer_cancel(&mut self, pointer: PointerId) {
        self.active.remove(&pointer);
    }

    /// Dispatches one host event.
    pub fn apply(&mut self, event: GestureEvent) {
        match event {
            GestureEvent::Start { pointer, x, y } => self.on_pointer_start(pointer, x, y),
            GestureEvent::Move { pointer, x, y } => self.on_pointer_move(pointer, x, y),
            GestureEvent::End { pointer } => self.on_pointer_end(pointer),
            GestureEvent::Cancel { pointer } => self.on_pointer_cancel(pointer),
            GestureEvent::SetMode { mode } => self.set_mode(mode),
            GestureEvent::Resize { width, height } => self.resize(width, height),
            GestureEvent::LoadInitial { strokes } => {
                self.load_initial(&strokes);
            }
        }
    }

    /// Runs the eraser at `point` over the whole frame.
    ///
    /// Every stroke in progress is released: the stroke a pointer was
    /// extending may have been split or removed, so its index no longer
    /// identifies it.
    fn erase_at(&mut self, point: Point) {
        let touched = self.frame.erase_at(&self.eraser, point);
        self.active.clear();

        self.dirty_tracker.mark_strokes(&touched);
        self.notify();
    }
}
