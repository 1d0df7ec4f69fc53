use super::*;
use crate::config::Config;
use crate::draw::{Eraser, MAX_DIRTY_REGIONS, Point, Stroke};
use crate::input::{GestureEvent, InputMode, PointerId};
use std::cell::RefCell;
use std::rc::Rc;

fn points(coords: &[(f64, f64)]) -> Vec<Point> {
    coords.iter().copied().map(Point::from).collect()
}

fn stroke(coords: &[(f64, f64)]) -> Stroke {
    Stroke::new(points(coords), 3.0)
}

/// Editor with an observer that records every delivered list.
fn observed_editor() -> (StrokeEditor, Rc<RefCell<Vec<Vec<Stroke>>>>) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let mut editor = StrokeEditor::new();
    editor.set_observer(move |strokes| sink.borrow_mut().push(strokes));
    (editor, seen)
}

#[test]
fn test_draw_accumulates_single_stroke() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(10.0, 0.0);
    editor.on_gesture_move(10.0, 10.0);
    editor.on_gesture_end();

    assert_eq!(editor.strokes().len(), 1);
    let drawn = &editor.strokes()[0];
    assert_eq!(drawn.points, points(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0)]));
    assert_eq!(drawn.stroke_width, 3.0);
    assert!(!editor.is_drawing());
}

#[test]
fn test_erase_removes_stroke_when_only_single_point_runs_remain() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[stroke(&[
        (0.0, 0.0),
        (10.0, 0.0),
        (20.0, 0.0),
        (30.0, 0.0),
        (40.0, 0.0),
    ])]);
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(20.0, 0.0);

    assert!(editor.strokes().is_empty());
}

#[test]
fn test_erase_splits_stroke_into_fragments() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[stroke(&[
        (0.0, 0.0),
        (5.0, 0.0),
        (20.0, 0.0),
        (35.0, 0.0),
        (40.0, 0.0),
    ])]);
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(20.0, 0.0);

    assert_eq!(
        editor.strokes(),
        &[
            stroke(&[(0.0, 0.0), (5.0, 0.0)]),
            stroke(&[(35.0, 0.0), (40.0, 0.0)])
        ]
    );
}

#[test]
fn test_erase_preserves_unaffected_strokes() {
    let far = stroke(&[(200.0, 200.0), (210.0, 210.0), (220.0, 200.0)]);
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[stroke(&[(0.0, 0.0), (1.0, 1.0)]), far.clone()]);
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(0.0, 0.0);

    assert_eq!(editor.strokes(), &[far]);
}

#[test]
fn test_single_point_strokes_are_erased_atomically() {
    let near = stroke(&[(3.0, 4.0)]);
    let far = stroke(&[(30.0, 40.0)]);
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[near, far.clone()]);
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(0.0, 0.0);

    assert_eq!(editor.strokes(), &[far]);
}

#[test]
fn test_erase_applies_on_every_move() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[
        stroke(&[(0.0, 0.0), (1.0, 0.0)]),
        stroke(&[(100.0, 0.0), (101.0, 0.0)]),
    ]);
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(0.0, 0.0);
    assert_eq!(editor.strokes().len(), 1);

    editor.on_gesture_move(100.0, 0.0);
    assert!(editor.strokes().is_empty());
}

#[test]
fn test_erase_does_not_interpolate_between_events() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[stroke(&[(50.0, -5.0), (50.0, 5.0)])]);
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(100.0, 0.0);

    assert_eq!(editor.strokes().len(), 1);
}

#[test]
fn test_load_initial_applies_only_once() {
    let first = vec![stroke(&[(0.0, 0.0), (1.0, 1.0)])];
    let second = vec![stroke(&[(5.0, 5.0), (6.0, 6.0)]), stroke(&[(9.0, 9.0)])];

    let (mut editor, seen) = observed_editor();
    assert!(editor.load_initial(&first));
    assert!(!editor.load_initial(&second));

    assert_eq!(editor.strokes(), first.as_slice());
    assert!(editor.initial_loaded());
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_load_initial_ignored_after_user_edits() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[]);
    editor.on_gesture_start(1.0, 1.0);
    editor.on_gesture_end();

    editor.load_initial(&[stroke(&[(5.0, 5.0)])]);
    assert_eq!(editor.strokes(), &[stroke(&[(1.0, 1.0)])]);
}

#[test]
fn test_load_initial_copies_input() {
    let mut source = vec![stroke(&[(0.0, 0.0), (1.0, 1.0)])];
    let mut editor = StrokeEditor::new();
    editor.load_initial(&source);

    source[0].points.push(Point::new(99.0, 99.0));
    source.push(stroke(&[(7.0, 7.0)]));

    assert_eq!(editor.strokes(), &[stroke(&[(0.0, 0.0), (1.0, 1.0)])]);
}

#[test]
fn test_load_initial_drops_strokes_without_points() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[Stroke::new(Vec::new(), 3.0), stroke(&[(1.0, 1.0)])]);
    assert_eq!(editor.strokes().len(), 1);
}

#[test]
fn test_mode_switch_isolation() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(10.0, 0.0);
    editor.on_gesture_end();
    let before = editor.snapshot();

    editor.set_mode(InputMode::Erase);
    assert_eq!(editor.strokes(), before.as_slice());

    editor.set_mode(InputMode::Draw);
    editor.on_gesture_start(100.0, 100.0);
    editor.on_gesture_move(110.0, 100.0);
    editor.on_gesture_end();

    assert_eq!(editor.strokes().len(), 2);
    assert_eq!(editor.strokes()[0], before[0]);
    assert_eq!(
        editor.strokes()[1].points,
        points(&[(100.0, 100.0), (110.0, 100.0)])
    );
}

#[test]
fn test_mode_is_sampled_per_event() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[stroke(&[(200.0, 0.0), (210.0, 0.0)])]);
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(5.0, 0.0);

    editor.set_mode(InputMode::Erase);
    editor.on_gesture_move(205.0, 0.0);

    assert_eq!(editor.strokes(), &[stroke(&[(0.0, 0.0), (5.0, 0.0)])]);
}

#[test]
fn test_erase_releases_stroke_in_progress() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(50.0, 0.0);
    editor.on_gesture_move(100.0, 0.0);

    editor.set_mode(InputMode::Erase);
    editor.on_gesture_move(500.0, 500.0);
    assert!(!editor.is_drawing());

    editor.set_mode(InputMode::Draw);
    editor.on_gesture_move(150.0, 0.0);

    assert_eq!(
        editor.strokes(),
        &[stroke(&[(0.0, 0.0), (50.0, 0.0), (100.0, 0.0)])]
    );
}

#[test]
fn test_move_without_start_is_ignored() {
    let (mut editor, seen) = observed_editor();
    editor.on_gesture_move(10.0, 10.0);

    assert!(editor.strokes().is_empty());
    assert!(seen.borrow().is_empty());
}

#[test]
fn test_move_after_end_is_ignored() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_end();
    editor.on_gesture_move(10.0, 10.0);

    assert_eq!(editor.strokes(), &[stroke(&[(0.0, 0.0)])]);
}

#[test]
fn test_cancel_keeps_partial_stroke() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(4.0, 4.0);
    editor.on_gesture_cancel();
    editor.on_gesture_move(8.0, 8.0);

    assert_eq!(editor.strokes(), &[stroke(&[(0.0, 0.0), (4.0, 4.0)])]);
    assert!(!editor.is_drawing());
}

#[test]
fn test_start_in_erase_mode_starts_no_stroke() {
    let mut editor = StrokeEditor::new();
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(0.0, 0.0);
    editor.set_mode(InputMode::Draw);
    editor.on_gesture_move(5.0, 5.0);

    assert!(editor.strokes().is_empty());
}

#[test]
fn test_observer_receives_each_mutation() {
    let (mut editor, seen) = observed_editor();
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(1.0, 1.0);
    editor.on_gesture_end();
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(300.0, 300.0);

    let seen = seen.borrow();
    assert_eq!(seen.len(), 3);
    assert_eq!(seen[0], vec![stroke(&[(0.0, 0.0)])]);
    assert_eq!(seen[1], vec![stroke(&[(0.0, 0.0), (1.0, 1.0)])]);
    assert_eq!(seen[2], seen[1]);
}

#[test]
fn test_delivered_snapshots_are_not_aliased() {
    let (mut editor, seen) = observed_editor();
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(1.0, 0.0);

    let first = seen.borrow()[1].clone();
    editor.on_gesture_move(2.0, 0.0);
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(0.0, 0.0);

    assert_eq!(seen.borrow()[1], first);
    assert_eq!(first, vec![stroke(&[(0.0, 0.0), (1.0, 0.0)])]);
    assert!(editor.strokes().is_empty());
}

#[test]
fn test_coordinates_clamped_to_known_bounds() {
    let mut editor = StrokeEditor::new();
    editor.resize(100, 50);
    editor.on_gesture_start(-10.0, 20.0);
    editor.on_gesture_move(150.0, 80.0);

    assert_eq!(
        editor.strokes()[0].points,
        points(&[(0.0, 20.0), (100.0, 50.0)])
    );
}

#[test]
fn test_coordinates_pass_through_with_unknown_bounds() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(-10.0, 2000.0);

    assert_eq!(editor.strokes()[0].points, points(&[(-10.0, 2000.0)]));
}

#[test]
fn test_non_finite_coordinates_are_ignored() {
    let (mut editor, seen) = observed_editor();
    editor.on_gesture_start(f64::NAN, 0.0);
    assert!(editor.strokes().is_empty());

    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(f64::INFINITY, 1.0);
    assert_eq!(editor.strokes(), &[stroke(&[(0.0, 0.0)])]);
    assert_eq!(seen.borrow().len(), 1);
}

#[test]
fn test_pointers_extend_their_own_strokes() {
    let mut editor = StrokeEditor::new();
    let a = PointerId(1);
    let b = PointerId(2);
    editor.on_pointer_start(a, 0.0, 0.0);
    editor.on_pointer_start(b, 100.0, 0.0);
    editor.on_pointer_move(a, 0.0, 10.0);
    editor.on_pointer_move(b, 100.0, 10.0);
    editor.on_pointer_end(a);
    editor.on_pointer_move(a, 0.0, 20.0);
    editor.on_pointer_move(b, 100.0, 20.0);

    assert_eq!(
        editor.strokes(),
        &[
            stroke(&[(0.0, 0.0), (0.0, 10.0)]),
            stroke(&[(100.0, 0.0), (100.0, 10.0), (100.0, 20.0)])
        ]
    );
}

#[test]
fn test_apply_dispatches_events() {
    let mut editor = StrokeEditor::new();
    for event in [
        GestureEvent::LoadInitial {
            strokes: vec![stroke(&[(500.0, 500.0), (510.0, 510.0)])],
        },
        GestureEvent::Resize {
            width: 1000,
            height: 1000,
        },
        GestureEvent::Start {
            pointer: PointerId::PRIMARY,
            x: 0.0,
            y: 0.0,
        },
        GestureEvent::Move {
            pointer: PointerId::PRIMARY,
            x: 10.0,
            y: 0.0,
        },
        GestureEvent::End {
            pointer: PointerId::PRIMARY,
        },
        GestureEvent::SetMode {
            mode: InputMode::Erase,
        },
        GestureEvent::Start {
            pointer: PointerId::PRIMARY,
            x: 505.0,
            y: 505.0,
        },
    ] {
        editor.apply(event);
    }

    assert_eq!(editor.mode(), InputMode::Erase);
    assert_eq!(editor.canvas_size(), (1000, 1000));
    assert_eq!(editor.strokes(), &[stroke(&[(0.0, 0.0), (10.0, 0.0)])]);
}

#[test]
fn test_dirty_regions_follow_edits() {
    let mut editor = StrokeEditor::new();
    editor.resize(200, 200);
    assert_eq!(editor.take_dirty_regions().len(), 1);

    editor.on_gesture_start(10.0, 10.0);
    editor.on_gesture_move(20.0, 10.0);
    let regions = editor.take_dirty_regions();
    assert_eq!(regions.len(), 2);
    assert!(editor.take_dirty_regions().is_empty());

    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(150.0, 150.0);
    assert!(editor.take_dirty_regions().is_empty());

    editor.on_gesture_start(15.0, 10.0);
    assert_eq!(editor.take_dirty_regions().len(), 1);
}

#[test]
fn test_far_coordinates_without_bounds_keep_valid_damage() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(1.0e12, 0.0);
    editor.on_gesture_move(1.0e12, 5.0);
    editor.on_gesture_end();

    editor.on_gesture_start(-3.0e9, 0.0);
    editor.on_gesture_move(3.0e9, 0.0);
    editor.on_gesture_end();

    assert_eq!(editor.strokes().len(), 2);
    assert_eq!(editor.strokes()[1].points, points(&[(-3.0e9, 0.0), (3.0e9, 0.0)]));
    let regions = editor.take_dirty_regions();
    assert!(!regions.is_empty());
    assert!(regions.iter().all(|rect| rect.is_valid()));

    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(3.0e9, 0.0);
    assert_eq!(editor.strokes().len(), 1);
    assert!(editor.take_dirty_regions().iter().all(|rect| rect.is_valid()));
}

#[test]
fn test_undrained_damage_stays_bounded() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(0.0, 0.0);
    for i in 1..=10_000 {
        editor.on_gesture_move(f64::from(i % 500), f64::from(i / 500));
    }

    let regions = editor.take_dirty_regions();
    assert!(!regions.is_empty());
    assert!(regions.len() <= MAX_DIRTY_REGIONS);
    assert_eq!(editor.strokes()[0].len(), 10_001);
}

#[test]
fn test_erase_damage_covers_only_changed_strokes() {
    let mut editor = StrokeEditor::new();
    editor.load_initial(&[
        stroke(&[(0.0, 0.0), (10.0, 0.0)]),
        stroke(&[(400.0, 400.0), (410.0, 400.0)]),
    ]);
    editor.resize(1000, 1000);
    editor.take_dirty_regions();

    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(405.0, 400.0);

    let regions = editor.take_dirty_regions();
    assert_eq!(regions.len(), 1);
    assert!(regions[0].x >= 390);
    assert!(regions[0].y >= 390);
    assert_eq!(editor.strokes(), &[stroke(&[(0.0, 0.0), (10.0, 0.0)])]);
}

#[test]
fn test_into_strokes_hands_over_final_list() {
    let mut editor = StrokeEditor::new();
    editor.on_gesture_start(1.0, 2.0);
    editor.on_gesture_move(3.0, 4.0);
    assert_eq!(
        editor.into_strokes(),
        vec![stroke(&[(1.0, 2.0), (3.0, 4.0)])]
    );
}

#[test]
fn test_custom_settings_apply_to_new_strokes_and_eraser() {
    let mut editor = StrokeEditor::with_settings(Eraser::new(4.0), 6.0);
    editor.on_gesture_start(0.0, 0.0);
    editor.on_gesture_move(10.0, 0.0);
    editor.on_gesture_end();
    assert_eq!(editor.strokes()[0].stroke_width, 6.0);

    // threshold = 2 + 3 = 5
    editor.set_mode(InputMode::Erase);
    editor.on_gesture_start(16.0, 0.0);
    assert_eq!(editor.strokes().len(), 1);
}

#[test]
fn test_from_config_uses_editor_settings() {
    let mut config = Config::default();
    config.editor.eraser_diameter = 40.0;
    config.editor.stroke_width = 5.0;
    config.editor.initial_mode = InputMode::Erase;
    config.editor.clamp_to_canvas = false;
    config.canvas.width = 100;
    config.canvas.height = 100;

    let mut editor = StrokeEditor::from_config(&config);
    assert_eq!(editor.mode(), InputMode::Erase);
    assert_eq!(editor.eraser().diameter(), 40.0);
    assert_eq!(editor.stroke_width(), 5.0);

    editor.set_mode(InputMode::Draw);
    editor.on_gesture_start(-5.0, 150.0);
    assert_eq!(editor.strokes()[0].points, points(&[(-5.0, 150.0)]));
}
