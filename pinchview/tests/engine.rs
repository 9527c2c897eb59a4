// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `pinchview` engine.
//!
//! These drive an [`Engine`] through a recording host: input goes in with
//! explicit timestamps, frames are fired by hand, and assertions look at the
//! published transforms and the host calls the engine made.

use kurbo::{Point, Rect, Size};
use pinchview::{
    Engine, FrameHandle, GestureState, Host, PointerButton, PointerId, PointerInput, TouchPoint,
    Transform, TransformPatch, Transition, ViewConfig, WheelInput,
};

#[derive(Debug, Default)]
struct RecordingHost {
    next_frame: u64,
    live_frame: Option<FrameHandle>,
    cancelled: Vec<FrameHandle>,
    published: Vec<(Transform, Transition)>,
    captured: Vec<PointerId>,
    released: Vec<PointerId>,
    detached: bool,
}

impl RecordingHost {
    fn last(&self) -> (Transform, Transition) {
        *self.published.last().unwrap()
    }
}

impl Host for RecordingHost {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_frame += 1;
        let handle = FrameHandle(self.next_frame);
        self.live_frame = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.cancelled.push(handle);
        if self.live_frame == Some(handle) {
            self.live_frame = None;
        }
    }

    fn publish(&mut self, transform: Transform, transition: Transition) {
        self.published.push((transform, transition));
    }

    fn capture_pointer(&mut self, pointer: PointerId) {
        self.captured.push(pointer);
    }

    fn release_pointer(&mut self, pointer: PointerId) {
        self.released.push(pointer);
    }

    fn detach_inputs(&mut self) {
        self.detached = true;
    }
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn engine_with(config: ViewConfig, content: Size) -> Engine<RecordingHost> {
    init_logging();
    Engine::new(
        config,
        Rect::new(0.0, 0.0, 500.0, 500.0),
        content,
        RecordingHost::default(),
    )
}

/// 500×500 container, 1000×1000 content, default options.
fn engine() -> Engine<RecordingHost> {
    engine_with(ViewConfig::default(), Size::new(1000.0, 1000.0))
}

/// Fires frames 16 ms apart until the engine stops asking. Returns the count.
fn run_frames(engine: &mut Engine<RecordingHost>, mut now: f64) -> usize {
    let mut frames = 0;
    while let Some(handle) = engine.host_mut().live_frame.take() {
        engine.on_frame(handle, now);
        now += 16.0;
        frames += 1;
        assert!(frames < 10_000, "animation never settled");
    }
    frames
}

fn click(engine: &mut Engine<RecordingHost>, at: (f64, f64), time_ms: f64) {
    engine.on_pointer_down(PointerInput::primary(at, time_ms));
    engine.on_pointer_up(PointerInput::primary(at, time_ms + 50.0));
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn construction_publishes_initial_transform() {
    let engine = engine();
    assert_eq!(engine.host().published.len(), 1);
    assert_eq!(
        engine.host().last(),
        (Transform::new(1.0, 0.0, 0.0, 0.0), Transition::Snap)
    );
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn zoom_to_centre_keeps_content_centred() {
    let mut engine = engine();
    engine.zoom_to(2.0, None);

    let (t, transition) = engine.host().last();
    assert_eq!(t, Transform::new(2.0, 0.0, 0.0, 0.0));
    assert_eq!(transition, Transition::Snap);
    assert_eq!(engine.gesture_state(), GestureState::Idle);

    // Same scale again is a no-op.
    let published = engine.host().published.len();
    engine.zoom_to(2.0, None);
    assert_eq!(engine.host().published.len(), published);
}

#[test]
fn zoom_to_clamps_scale() {
    let mut engine = engine();
    engine.zoom_to(10.0, None);
    assert_eq!(engine.transform().scale, 3.0);
    engine.zoom_to(0.01, None);
    assert_eq!(engine.transform().scale, 0.5);
}

#[test]
fn wheel_zooms_around_cursor() {
    let mut engine = engine();
    engine.on_wheel(WheelInput::new((250.0, 250.0), -100.0));

    let t = engine.transform();
    assert!(approx(t.scale, 1.15));
    assert!(approx(t.x, 0.0));
    assert!(approx(t.y, 0.0));
    assert_eq!(engine.host().last().1, Transition::Snap);

    // The image point under an off-centre cursor stays put.
    let cursor = Point::new(300.0, 200.0);
    let before = engine.container_to_image(cursor);
    engine.on_wheel(WheelInput::new(cursor, -50.0));
    let after = engine.container_to_image(cursor);
    assert!(approx(before.x, after.x));
    assert!(approx(before.y, after.y));
}

#[test]
fn wheel_with_degenerate_factor_is_ignored() {
    let mut engine = engine();
    // 1 - 1000 · 0.0015 < 0
    engine.on_wheel(WheelInput::new((250.0, 250.0), 1000.0));
    assert_eq!(engine.transform().scale, 1.0);
    assert_eq!(engine.host().published.len(), 1);
}

#[test]
fn wheel_uses_screen_coordinates() {
    init_logging();
    let mut engine = Engine::new(
        ViewConfig::default(),
        Rect::new(100.0, 50.0, 600.0, 550.0),
        Size::new(1000.0, 1000.0),
        RecordingHost::default(),
    );
    // Screen (350, 300) is the container centre.
    engine.on_wheel(WheelInput::new((350.0, 300.0), -100.0));
    let t = engine.transform();
    assert!(approx(t.x, 0.0));
    assert!(approx(t.y, 0.0));
}

#[test]
fn double_click_zooms_in_steps() {
    let mut engine = engine();

    click(&mut engine, (250.0, 250.0), 0.0);
    assert_eq!(engine.transform().scale, 1.0);
    click(&mut engine, (250.0, 250.0), 200.0);
    let (t, transition) = engine.host().last();
    assert!(approx(t.scale, 1.5));
    assert_eq!(transition, Transition::EaseOut);
    assert_eq!(engine.gesture_state(), GestureState::Transitioning);

    click(&mut engine, (250.0, 250.0), 1_000.0);
    click(&mut engine, (250.0, 250.0), 1_200.0);
    assert!(approx(engine.transform().scale, 2.25));

    click(&mut engine, (250.0, 250.0), 2_000.0);
    click(&mut engine, (250.0, 250.0), 2_200.0);
    assert_eq!(engine.transform().scale, 3.0);
}

#[test]
fn slow_clicks_do_not_zoom() {
    let mut engine = engine();
    click(&mut engine, (250.0, 250.0), 0.0);
    click(&mut engine, (250.0, 250.0), 800.0);
    assert_eq!(engine.transform().scale, 1.0);
}

#[test]
fn move_to_and_move_by_clamp_into_bounds() {
    let mut engine = engine();
    engine.move_to(100.0, 100.0);
    assert_eq!(engine.transform(), Transform::new(1.0, -150.0, -150.0, 0.0));

    engine.move_by(-1_000.0, 20.0);
    assert_eq!(engine.transform(), Transform::new(1.0, -300.0, -130.0, 0.0));
}

#[test]
fn reset_restores_initial_transform_with_transition() {
    let mut engine = engine();
    engine.zoom_to(2.0, Some(Point::new(100.0, 100.0)));
    engine.reset();
    assert_eq!(
        engine.host().last(),
        (Transform::new(1.0, 0.0, 0.0, 0.0), Transition::EaseOut)
    );
    assert_eq!(engine.gesture_state(), GestureState::Transitioning);

    run_frames(&mut engine, 0.0);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn configured_transition_is_reported_and_waited_out() {
    let mut engine = engine_with(
        ViewConfig {
            transition: true,
            ..ViewConfig::default()
        },
        Size::new(1000.0, 1000.0),
    );
    engine.move_by(10.0, 0.0);
    assert_eq!(engine.host().last().1, Transition::EaseOut);
    assert!(engine.is_animating());

    // 300 ms at 16 ms per frame, plus the first frame that fixes the start.
    assert_eq!(run_frames(&mut engine, 0.0), 20);
    assert!(!engine.is_animating());

    engine.set_transform(TransformPatch::new().translation(0.0, 0.0), Some(false));
    assert_eq!(engine.host().last().1, Transition::Snap);
    assert!(!engine.is_animating());
}

#[test]
fn drag_follows_pointer_and_captures_it() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    assert_eq!(engine.host().captured, vec![PointerId(0)]);
    assert_eq!(engine.gesture_state(), GestureState::Panning);

    engine.on_pointer_move(PointerInput::primary((240.0, 270.0), 500.0));
    assert_eq!(engine.transform(), Transform::new(1.0, -10.0, 20.0, 0.0));

    engine.on_pointer_up(PointerInput::primary((240.0, 270.0), 1_000.0));
    assert_eq!(engine.host().released, vec![PointerId(0)]);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn tap_below_threshold_does_not_move() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((252.0, 251.0), 10.0));
    engine.on_pointer_up(PointerInput::primary((252.0, 251.0), 20.0));

    assert_eq!(engine.transform(), Transform::new(1.0, 0.0, 0.0, 0.0));
    assert_eq!(engine.host().published.len(), 1);
}

#[test]
fn non_primary_buttons_are_ignored() {
    let mut engine = engine();
    let press = PointerInput::primary((250.0, 250.0), 0.0).with_button(PointerButton::Secondary);
    engine.on_pointer_down(press);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
    assert!(engine.host().captured.is_empty());
}

#[test]
fn fast_release_continues_kinetically() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((260.0, 250.0), 16.0));
    engine.on_pointer_move(PointerInput::primary((280.0, 250.0), 32.0));
    engine.on_pointer_up(PointerInput::primary((280.0, 250.0), 40.0));

    assert_eq!(engine.gesture_state(), GestureState::KineticAnimating);
    let released_at = engine.transform().x;
    assert_eq!(released_at, 30.0);

    // 20 · 0.92ⁿ < 0.5 first holds at n = 45.
    assert_eq!(run_frames(&mut engine, 100.0), 45);
    let t = engine.transform();
    assert!(t.x > released_at && t.x <= 300.0);
    assert_eq!(t.y, 0.0);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn overshoot_is_damped_and_eases_back() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((100.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((500.0, 250.0), 1_000.0));
    engine.on_pointer_move(PointerInput::primary((500.5, 250.0), 2_000.0));

    // 100 px past the bound is displaced by 100 · 0.15 · (1 - e⁻¹).
    let x = engine.transform().x;
    assert!(x > 300.0 && x < 310.0, "x = {x}");
    assert!(engine.viewport().is_out_of_bounds());

    engine.on_pointer_up(PointerInput::primary((500.5, 250.0), 2_010.0));
    assert_eq!(engine.gesture_state(), GestureState::ElasticAnimating);

    run_frames(&mut engine, 3_000.0);
    assert_eq!(engine.transform().x, 300.0);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
    assert_eq!(engine.viewport().elastic_offset().x, 0.0);
}

#[test]
fn rigid_bounds_clamp_during_drag() {
    let mut engine = engine_with(
        ViewConfig {
            elastic: false,
            ..ViewConfig::default()
        },
        Size::new(1000.0, 1000.0),
    );
    engine.on_pointer_down(PointerInput::primary((100.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((500.0, 250.0), 1_000.0));
    assert_eq!(engine.transform().x, 300.0);
    assert_eq!(engine.viewport().elastic_offset().x, 0.0);

    // 400 px over 1 s is fast enough for inertia, which stays pinned too.
    engine.on_pointer_up(PointerInput::primary((500.0, 250.0), 2_000.0));
    assert_eq!(engine.gesture_state(), GestureState::KineticAnimating);
    run_frames(&mut engine, 3_000.0);
    assert_eq!(engine.transform().x, 300.0);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn pinch_tracks_touches_by_identifier() {
    let mut engine = engine();
    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        0.0,
    );
    assert_eq!(engine.gesture_state(), GestureState::Pinching);

    // Reported in the opposite order, twice as far apart.
    let spread = [
        TouchPoint::new(2, (350.0, 250.0)),
        TouchPoint::new(1, (150.0, 250.0)),
    ];
    engine.on_touch_move(&spread, 16.0);
    let t = engine.transform();
    assert!(approx(t.scale, 2.0));
    assert!(approx(t.x, 0.0));
    assert!(approx(t.y, 0.0));
    assert!(approx(t.rotation, 0.0));

    // Hold still so the release carries no scale velocity.
    engine.on_touch_move(&spread, 32.0);
    engine.on_touch_end(&[], 40.0);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn pinch_rotates_when_enabled() {
    let mut engine = engine();
    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        0.0,
    );
    engine.on_touch_move(
        &[
            TouchPoint::new(1, (250.0, 200.0)),
            TouchPoint::new(2, (250.0, 300.0)),
        ],
        16.0,
    );
    let t = engine.transform();
    assert!(approx(t.rotation, 90.0));
    assert!(approx(t.scale, 1.0));

    let mut rigid = engine_with(
        ViewConfig {
            enable_rotation: false,
            ..ViewConfig::default()
        },
        Size::new(1000.0, 1000.0),
    );
    rigid.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        0.0,
    );
    rigid.on_touch_move(
        &[
            TouchPoint::new(1, (250.0, 200.0)),
            TouchPoint::new(2, (250.0, 300.0)),
        ],
        16.0,
    );
    assert_eq!(rigid.transform().rotation, 0.0);
}

#[test]
fn second_finger_turns_pan_into_pinch() {
    let mut engine = engine();
    engine.on_touch_start(&[TouchPoint::new(1, (200.0, 250.0))], 0.0);
    assert_eq!(engine.gesture_state(), GestureState::Panning);

    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        10.0,
    );
    assert_eq!(engine.gesture_state(), GestureState::Pinching);
}

#[test]
fn lifting_one_pinch_finger_resumes_pan() {
    let mut engine = engine();
    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        0.0,
    );
    let spread = [
        TouchPoint::new(1, (150.0, 250.0)),
        TouchPoint::new(2, (350.0, 250.0)),
    ];
    engine.on_touch_move(&spread, 16.0);
    engine.on_touch_move(&spread, 32.0);

    engine.on_touch_end(&[TouchPoint::new(1, (150.0, 250.0))], 40.0);
    assert_eq!(engine.gesture_state(), GestureState::Panning);

    engine.on_touch_move(&[TouchPoint::new(1, (170.0, 250.0))], 56.0);
    let t = engine.transform();
    assert!(approx(t.scale, 2.0));
    assert!(approx(t.x, 20.0));
    assert!(approx(t.y, 0.0));
}

#[test]
fn stale_frames_are_ignored() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((260.0, 250.0), 16.0));
    engine.on_pointer_move(PointerInput::primary((280.0, 250.0), 32.0));
    engine.on_pointer_up(PointerInput::primary((280.0, 250.0), 40.0));
    let stale = engine.host().live_frame.unwrap();

    // A wheel event cancels the kinetic run.
    engine.on_wheel(WheelInput::new((250.0, 250.0), -10.0));
    assert_eq!(engine.host().cancelled, vec![stale]);
    assert_eq!(engine.gesture_state(), GestureState::Idle);

    let before = engine.transform();
    let published = engine.host().published.len();
    engine.on_frame(stale, 100.0);
    assert_eq!(engine.transform(), before);
    assert_eq!(engine.host().published.len(), published);
}

#[test]
fn wheel_during_drag_keeps_drag_consistent() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((270.0, 250.0), 100.0));
    assert_eq!(engine.transform().x, 20.0);

    engine.on_wheel(WheelInput::new((250.0, 250.0), -100.0));
    // The centre pivot pushes the offset content outward: 20 · 1.15.
    assert!(approx(engine.transform().x, 23.0));
    assert_eq!(engine.gesture_state(), GestureState::Panning);

    engine.on_pointer_move(PointerInput::primary((280.0, 250.0), 200.0));
    assert!(approx(engine.transform().x, 33.0));
}

#[test]
fn rotate_reclamps_translation() {
    let mut engine = engine_with(ViewConfig::default(), Size::new(1000.0, 400.0));
    engine.move_by(300.0, 0.0);
    assert_eq!(engine.transform().x, 300.0);

    engine.rotate(90.0);
    let (t, transition) = engine.host().last();
    assert_eq!(t.rotation, 90.0);
    assert!(approx(t.x, 0.0));
    assert_eq!(transition, Transition::EaseOut);

    engine.rotate(360.0);
    assert_eq!(engine.transform().rotation, 90.0);
}

#[test]
fn set_transform_ignores_non_finite_fields() {
    let mut engine = engine();
    engine.set_transform(
        TransformPatch::new()
            .scale(f64::NAN)
            .translation(50.0, 0.0)
            .rotation(450.0),
        None,
    );
    let (t, transition) = engine.host().last();
    assert_eq!(t.scale, 1.0);
    assert_eq!(t.x, 50.0);
    assert_eq!(t.rotation, 90.0);
    assert_eq!(transition, Transition::Snap);
}

#[test]
fn center_on_image_point_moves_it_to_container_centre() {
    let mut engine = engine();
    engine.center_on_image_point(Point::new(750.0, 500.0));
    assert_eq!(engine.transform().x, -250.0);
    let shown = engine.image_to_container(Point::new(750.0, 500.0));
    assert!(approx(shown.x, 250.0));
    assert!(approx(shown.y, 250.0));
}

#[test]
fn viewport_bounds_follow_transform() {
    let mut engine = engine();
    assert_eq!(
        engine.viewport_bounds(),
        Rect::new(-250.0, -250.0, 750.0, 750.0)
    );
    engine.zoom_to(0.5, None);
    assert_eq!(
        engine.viewport_bounds(),
        Rect::new(0.0, 0.0, 500.0, 500.0)
    );
}

#[test]
fn programmatic_change_preempts_drag() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((270.0, 250.0), 100.0));
    engine.move_to(250.0, 250.0);

    assert_eq!(engine.gesture_state(), GestureState::Idle);
    assert_eq!(engine.host().released, vec![PointerId(0)]);

    // Later moves of the abandoned drag are ignored.
    engine.on_pointer_move(PointerInput::primary((300.0, 250.0), 200.0));
    assert_eq!(engine.transform().x, 0.0);
}

#[test]
fn pointer_cancel_settles_without_inertia() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    engine.on_pointer_move(PointerInput::primary((260.0, 250.0), 16.0));
    engine.on_pointer_move(PointerInput::primary((280.0, 250.0), 32.0));
    engine.on_pointer_cancel(PointerId(0));

    assert_eq!(engine.gesture_state(), GestureState::Idle);
    assert_eq!(engine.transform().x, 30.0);
}

#[test]
fn destroy_detaches_and_goes_inert() {
    let mut engine = engine();
    engine.on_pointer_down(PointerInput::primary((250.0, 250.0), 0.0));
    engine.destroy();

    assert!(engine.host().detached);
    assert!(engine.is_destroyed());
    assert_eq!(engine.host().released, vec![PointerId(0)]);

    let published = engine.host().published.len();
    engine.move_to(0.0, 0.0);
    engine.zoom_to(2.0, None);
    engine.on_wheel(WheelInput::new((250.0, 250.0), -100.0));
    engine.reset();
    assert_eq!(engine.host().published.len(), published);
    assert_eq!(engine.transform(), Transform::new(1.0, 0.0, 0.0, 0.0));
}

#[test]
fn resizing_the_container_reclamps() {
    let mut engine = engine();
    engine.move_by(300.0, 0.0);
    engine.set_container_rect(Rect::new(0.0, 0.0, 900.0, 500.0));
    // (1000 - 900) / 2 + 50
    assert_eq!(engine.transform().x, 100.0);

    engine.set_content_size(Size::new(400.0, 400.0));
    assert_eq!(engine.transform().x, 0.0);
}

#[test]
fn pinch_release_carries_midpoint_velocity() {
    let mut engine = engine();
    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        0.0,
    );
    engine.on_touch_move(
        &[
            TouchPoint::new(1, (210.0, 250.0)),
            TouchPoint::new(2, (310.0, 250.0)),
        ],
        16.0,
    );
    engine.on_touch_move(
        &[
            TouchPoint::new(1, (230.0, 250.0)),
            TouchPoint::new(2, (330.0, 250.0)),
        ],
        32.0,
    );
    assert_eq!(engine.transform().x, 30.0);

    engine.on_touch_end(&[], 40.0);
    assert_eq!(engine.gesture_state(), GestureState::KineticAnimating);

    run_frames(&mut engine, 48.0);
    let t = engine.transform();
    assert!(t.x > 30.0 && t.x <= 300.0);
    assert_eq!(t.scale, 1.0);
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn pinch_release_carries_scale_velocity() {
    let mut engine = engine();
    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        0.0,
    );
    engine.on_touch_move(
        &[
            TouchPoint::new(1, (190.0, 250.0)),
            TouchPoint::new(2, (310.0, 250.0)),
        ],
        16.0,
    );
    let released_at = engine.transform().scale;
    assert!(approx(released_at, 1.2));

    engine.on_touch_end(&[], 20.0);
    assert_eq!(engine.gesture_state(), GestureState::KineticAnimating);

    run_frames(&mut engine, 32.0);
    let scale = engine.transform().scale;
    assert!(scale > released_at && scale <= 3.0, "scale = {scale}");
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn touch_cancel_ends_gesture_without_inertia() {
    let mut engine = engine();
    engine.on_touch_start(&[TouchPoint::new(1, (250.0, 250.0))], 0.0);
    engine.on_touch_move(&[TouchPoint::new(1, (260.0, 250.0))], 16.0);
    engine.on_touch_move(&[TouchPoint::new(1, (280.0, 250.0))], 32.0);
    engine.on_touch_cancel();

    assert_eq!(engine.gesture_state(), GestureState::Idle);
    assert!(!engine.is_animating());
    assert_eq!(engine.transform().x, 30.0);

    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        100.0,
    );
    assert_eq!(engine.gesture_state(), GestureState::Pinching);
    engine.on_touch_cancel();
    assert_eq!(engine.gesture_state(), GestureState::Idle);
}

#[test]
fn double_tap_with_one_finger_zooms() {
    let mut engine = engine();
    let tap = [TouchPoint::new(1, (250.0, 250.0))];

    engine.on_touch_start(&tap, 0.0);
    engine.on_touch_end(&[], 50.0);
    assert_eq!(engine.transform().scale, 1.0);

    engine.on_touch_start(&tap, 200.0);
    engine.on_touch_end(&[], 250.0);
    let (t, transition) = engine.host().last();
    assert!(approx(t.scale, 1.5));
    assert_eq!(transition, Transition::EaseOut);
}

#[test]
fn third_finger_during_pinch_is_ignored() {
    let mut engine = engine();
    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        0.0,
    );
    engine.on_touch_start(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
            TouchPoint::new(3, (400.0, 400.0)),
        ],
        10.0,
    );
    assert_eq!(engine.gesture_state(), GestureState::Pinching);
    assert!(engine.host().cancelled.is_empty());

    // Lifting the extra finger keeps the pinch going.
    engine.on_touch_end(
        &[
            TouchPoint::new(1, (200.0, 250.0)),
            TouchPoint::new(2, (300.0, 250.0)),
        ],
        20.0,
    );
    assert_eq!(engine.gesture_state(), GestureState::Pinching);
}

#[test]
fn set_config_reclamps_transform() {
    let mut engine = engine();
    engine.move_by(300.0, 0.0);
    engine.zoom_to(1.0, None);
    assert_eq!(engine.transform().x, 300.0);

    engine.set_config(ViewConfig {
        bounds_padding: 0.0,
        ..ViewConfig::default()
    });
    assert_eq!(engine.transform().x, 250.0);
    assert_eq!(engine.host().last().1, Transition::Snap);

    engine.zoom_to(3.0, None);
    engine.set_config(ViewConfig {
        max_scale: 2.0,
        ..ViewConfig::default()
    });
    assert_eq!(engine.transform().scale, 2.0);
    assert_eq!(engine.config().max_scale, 2.0);
}

#[test]
fn non_finite_geometry_keeps_last_transform() {
    let mut engine = engine();
    engine.move_by(120.0, -40.0);
    let before = engine.transform();

    engine.set_container_rect(Rect::new(0.0, 0.0, f64::NAN, 500.0));
    engine.set_content_size(Size::new(f64::INFINITY, 1000.0));
    assert_eq!(engine.transform(), before);

    engine.on_wheel(WheelInput::new((250.0, 250.0), -100.0));
    assert!(approx(engine.transform().scale, 1.15));

    init_logging();
    let degenerate = Engine::new(
        ViewConfig::default(),
        Rect::new(0.0, 0.0, f64::NAN, 500.0),
        Size::new(f64::INFINITY, 1000.0),
        RecordingHost::default(),
    );
    assert_eq!(degenerate.transform(), Transform::new(1.0, 0.0, 0.0, 0.0));
}
