//! Tracker behavior over realistic measurement flows.
//!
//! Exercises the observer-driven lifecycle: initial pre-measurement
//! state, resize streams, configuration changes mid-stream, and
//! subscription teardown.

#![cfg(feature = "alloc")]

use std::cell::RefCell;
use std::rc::Rc;

use screenfit::{FitMode, FitTracker, Frame, Sizing, XAlign, YAlign};

fn wall_tracker() -> FitTracker {
    FitTracker::new(Frame::new(5120.0, 1440.0)).unwrap()
}

#[test]
fn pre_measurement_state_is_stable_identity() {
    let t = wall_tracker();
    let f = t.fitted();
    assert_eq!(f.scale, 1.0);
    assert_eq!(f.offset_left, 0.0);
    assert_eq!(f.offset_top, 0.0);
    assert_eq!(f.content.width, 5120.0);
}

#[test]
fn resize_gesture_last_measurement_wins() {
    let mut t = wall_tracker();
    // A drag-resize burst: each measurement fully replaces the previous.
    for (w, h) in [
        (1900.0, 1070.0),
        (1910.0, 1075.0),
        (1920.0, 1080.0),
        (2560.0, 720.0),
    ] {
        t.resize(w, h).unwrap();
    }
    assert_eq!(t.fitted().scale, 0.5);
    assert_eq!(t.container().unwrap().width, 2560.0);
}

#[test]
fn mode_flip_mid_stream_uses_retained_measurement() {
    let mut t = wall_tracker();
    t.resize(1920.0, 1080.0).unwrap();
    assert_eq!(t.fitted().scale, 0.375);

    t.set_mode(FitMode::Cover).unwrap();
    assert_eq!(t.fitted().scale, 0.75);

    // Back again; still against the same 1920×1080 measurement.
    t.set_mode(FitMode::Contain).unwrap();
    assert_eq!(t.fitted().scale, 0.375);
}

#[test]
fn alignment_and_sizing_changes_apply() {
    let mut t = wall_tracker();
    t.resize(2000.0, 540.0).unwrap();
    assert_eq!(t.fitted().offset_left, 40.0);

    t.set_x_align(XAlign::Right).unwrap();
    assert_eq!(t.fitted().offset_left, 80.0);

    t.set_y_align(YAlign::Top).unwrap();
    assert_eq!(t.fitted().offset_top, 0.0);

    t.set_sizing(Sizing::Resize).unwrap();
    assert_eq!(t.fitted().content.width, 1920.0);
}

#[test]
fn design_swap_refits_current_container() {
    let mut t = wall_tracker();
    t.resize(1920.0, 1080.0).unwrap();

    // Swap to a 16:9 design: it fills the container exactly.
    t.set_design(1920.0, 1080.0).unwrap();
    assert_eq!(t.fitted().scale, 1.0);
    assert!(!t.fitted().is_letterboxed());
}

#[test]
fn subscriber_sees_stream_in_order() {
    let scales = Rc::new(RefCell::new(Vec::new()));
    let mut t = wall_tracker();
    let sink = Rc::clone(&scales);
    t.subscribe(move |f| sink.borrow_mut().push(f.scale));

    t.resize(1920.0, 1080.0).unwrap();
    t.set_mode(FitMode::Cover).unwrap();
    t.resize(2560.0, 720.0).unwrap();
    assert_eq!(*scales.borrow(), vec![0.375, 0.75, 0.5]);
}

#[test]
fn unsubscribed_listener_is_torn_down_cleanly() {
    let count = Rc::new(RefCell::new(0u32));
    let mut t = wall_tracker();
    let sink = Rc::clone(&count);
    let sub = t.subscribe(move |_| *sink.borrow_mut() += 1);
    t.resize(1920.0, 1080.0).unwrap();

    t.unsubscribe(sub);
    t.resize(2560.0, 720.0).unwrap();
    t.set_mode(FitMode::Cover).unwrap();
    assert_eq!(*count.borrow(), 1);
}

#[test]
fn rejected_update_leaves_no_trace() {
    let count = Rc::new(RefCell::new(0u32));
    let mut t = wall_tracker();
    let sink = Rc::clone(&count);
    t.subscribe(move |_| *sink.borrow_mut() += 1);
    t.resize(1920.0, 1080.0).unwrap();

    assert!(t.resize(f64::NAN, 500.0).is_err());
    assert!(t.set_design(-1.0, 1440.0).is_err());

    assert_eq!(*count.borrow(), 1);
    assert_eq!(t.fitted().scale, 0.375);
    assert_eq!(t.frame().design.width, 5120.0);
}
