// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture engine.

use kurbo::{Point, Rect, Size, Vec2};
use pinchview_event_state::drag::{DRAG_THRESHOLD, DragState};
use pinchview_event_state::pinch::PinchState;
use pinchview_event_state::tap::{TapResult, TapState};
use pinchview_view::{
    ClampMode, Transform, TransformPatch, ViewConfig, Viewport, normalize_rotation,
};

use crate::animation::{AnimationRun, ElasticReturn, KineticRun, Step, TransitionWait};
use crate::host::{FrameHandle, Host, Transition};
use crate::input::{PointerButton, PointerId, PointerInput, TouchId, TouchPoint, WheelInput};

/// Release speed, per axis, above which a drag continues kinetically.
pub const KINETIC_START_SPEED: f64 = 1.0;

/// Release scale velocity above which a pinch continues kinetically.
pub const KINETIC_START_SCALE_SPEED: f64 = 0.001;

/// Scale factor applied by a double tap or double click.
pub const DOUBLE_TAP_ZOOM: f64 = 1.5;

/// What is currently driving the transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureState {
    /// Nothing.
    Idle,
    /// A single pointer or finger is down.
    Panning,
    /// Two fingers are down.
    Pinching,
    /// Inertia after a release.
    KineticAnimating,
    /// Easing back into bounds after a release.
    ElasticAnimating,
    /// A programmatic change is being animated by the renderer.
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PointSource {
    Pointer(PointerId),
    Touch(TouchId),
}

#[derive(Clone, Copy, Debug)]
struct PanSession {
    source: PointSource,
    drag: DragState,
    start_translation: Vec2,
}

#[derive(Clone, Copy, Debug)]
enum Session {
    None,
    Pan(PanSession),
    Pinch(PinchState<TouchId>),
}

/// Pan/zoom/rotate engine for one piece of content in one container.
///
/// The engine owns the [`Viewport`], the current gesture session and at most
/// one [`AnimationRun`]. Every entry point runs to completion, cancels
/// whatever else was driving the transform first, and ends by publishing
/// the transform to the [`Host`] if it changed.
///
/// Input handlers take *screen* coordinates. Programmatic calls
/// ([`Engine::move_to`], [`Engine::zoom_to`], conversions) use *container*
/// coordinates, relative to the container's top-left corner.
#[derive(Debug)]
pub struct Engine<H: Host> {
    viewport: Viewport,
    container_origin: Point,
    host: H,
    session: Session,
    run: Option<AnimationRun>,
    pending_frame: Option<FrameHandle>,
    taps: TapState,
    destroyed: bool,
}

impl<H: Host> Engine<H> {
    /// Creates an engine and publishes the initial transform.
    ///
    /// `container` is the container rectangle in screen coordinates;
    /// `content` the intrinsic size of the content.
    pub fn new(config: ViewConfig, container: Rect, content: Size, host: H) -> Self {
        let mut engine = Self {
            viewport: Viewport::new(config, container.size(), content),
            container_origin: container.origin(),
            host,
            session: Session::None,
            run: None,
            pending_frame: None,
            taps: TapState::default(),
            destroyed: false,
        };
        engine.publish(Transition::Snap);
        engine
    }

    /// Returns the host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Returns the host mutably.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Returns the underlying viewport model.
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the (normalized) configuration.
    pub fn config(&self) -> &ViewConfig {
        self.viewport.config()
    }

    /// Replaces the configuration and re-clamps the transform.
    pub fn set_config(&mut self, config: ViewConfig) {
        if self.destroyed {
            return;
        }
        self.viewport.set_config(config);
        self.publish(Transition::Snap);
    }

    /// Updates the container rectangle (screen coordinates), e.g. on resize.
    pub fn set_container_rect(&mut self, container: Rect) {
        if self.destroyed {
            return;
        }
        self.container_origin = container.origin();
        self.viewport.set_container_size(container.size());
        self.publish(Transition::Snap);
    }

    /// Updates the intrinsic content size, e.g. once an image has loaded.
    pub fn set_content_size(&mut self, content: Size) {
        if self.destroyed {
            return;
        }
        self.viewport.set_content_size(content);
        self.publish(Transition::Snap);
    }

    /// What is currently driving the transform.
    pub fn gesture_state(&self) -> GestureState {
        match (&self.session, &self.run) {
            (Session::Pan(_), _) => GestureState::Panning,
            (Session::Pinch(_), _) => GestureState::Pinching,
            (Session::None, Some(AnimationRun::Kinetic(_))) => GestureState::KineticAnimating,
            (Session::None, Some(AnimationRun::ElasticReturn(_))) => {
                GestureState::ElasticAnimating
            }
            (Session::None, Some(AnimationRun::Transition(_))) => GestureState::Transitioning,
            (Session::None, None) => GestureState::Idle,
        }
    }

    /// Returns `true` while an animation run is active.
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Returns the active animation run, if any.
    pub fn animation(&self) -> Option<&AnimationRun> {
        self.run.as_ref()
    }

    /// Returns `true` once [`Engine::destroy`] has been called.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    // --- Input ---------------------------------------------------------------

    /// Handles a pointer press. Only the primary button starts a drag.
    pub fn on_pointer_down(&mut self, input: PointerInput) {
        if self.destroyed || input.button != PointerButton::Primary {
            return;
        }
        if !matches!(self.session, Session::None) {
            return;
        }
        let before = self.gesture_state();
        self.cancel_animation();
        self.host.capture_pointer(input.id);
        let pos = self.to_container(input.position);
        self.begin_pan(PointSource::Pointer(input.id), pos, input.time_ms, false);
        self.log_transition(before);
    }

    /// Handles a pointer move. Ignored unless that pointer is dragging.
    pub fn on_pointer_move(&mut self, input: PointerInput) {
        if self.destroyed || !self.is_panning_with(PointSource::Pointer(input.id)) {
            return;
        }
        let pos = self.to_container(input.position);
        self.drag_to(pos, input.time_ms);
    }

    /// Handles a pointer release: settles kinetically, elastically or not at all.
    ///
    /// The release position is not sampled; velocity comes from the last moves.
    pub fn on_pointer_up(&mut self, input: PointerInput) {
        if self.destroyed || !self.is_panning_with(PointSource::Pointer(input.id)) {
            return;
        }
        let before = self.gesture_state();
        self.host.release_pointer(input.id);
        self.end_pan(input.time_ms);
        self.log_transition(before);
    }

    /// Handles a cancelled pointer: ends the drag without inertia.
    pub fn on_pointer_cancel(&mut self, id: PointerId) {
        if self.destroyed || !self.is_panning_with(PointSource::Pointer(id)) {
            return;
        }
        let before = self.gesture_state();
        self.host.release_pointer(id);
        self.session = Session::None;
        self.settle();
        self.log_transition(before);
    }

    /// Handles new touches. `touches` lists every touch currently down.
    ///
    /// One touch starts a pan; a second one turns any gesture into a pinch.
    pub fn on_touch_start(&mut self, touches: &[TouchPoint], time_ms: f64) {
        if self.destroyed || touches.is_empty() {
            return;
        }
        let before = self.gesture_state();
        let touches = self.touches_in_container(touches);

        match self.session {
            Session::Pinch(_) => {}
            Session::Pan(pan) if touches.len() >= 2 => {
                self.cancel_animation();
                let first = match pan.source {
                    PointSource::Touch(id) => touches.iter().find(|(k, _)| *k == id).copied(),
                    PointSource::Pointer(id) => {
                        self.host.release_pointer(id);
                        None
                    }
                };
                let first = first.unwrap_or(touches[0]);
                if let Some(second) = touches.iter().find(|(k, _)| *k != first.0).copied() {
                    self.begin_pinch(first, second, time_ms);
                }
            }
            Session::Pan(_) => {}
            Session::None if touches.len() >= 2 => {
                self.cancel_animation();
                self.begin_pinch(touches[0], touches[1], time_ms);
            }
            Session::None => {
                self.cancel_animation();
                let (id, pos) = touches[0];
                self.begin_pan(PointSource::Touch(id), pos, time_ms, false);
            }
        }
        self.log_transition(before);
    }

    /// Handles moving touches. `touches` lists every touch currently down.
    pub fn on_touch_move(&mut self, touches: &[TouchPoint], time_ms: f64) {
        if self.destroyed {
            return;
        }
        let touches = self.touches_in_container(touches);
        match self.session {
            Session::Pan(PanSession {
                source: PointSource::Touch(id),
                ..
            }) => {
                if let Some(&(_, pos)) = touches.iter().find(|(k, _)| *k == id) {
                    self.drag_to(pos, time_ms);
                }
            }
            Session::Pinch(pinch) => {
                if let Some((a, b)) = pinch.locate(&touches) {
                    self.pinch_to(a, b, time_ms);
                }
            }
            _ => {}
        }
    }

    /// Handles lifted touches. `touches` lists the touches still down.
    ///
    /// Lifting one finger of a pinch continues as a pan under the other one.
    pub fn on_touch_end(&mut self, touches: &[TouchPoint], time_ms: f64) {
        if self.destroyed {
            return;
        }
        let before = self.gesture_state();
        let touches = self.touches_in_container(touches);
        match self.session {
            Session::Pan(PanSession {
                source: PointSource::Touch(id),
                ..
            }) => {
                if !touches.iter().any(|(k, _)| *k == id) {
                    self.end_pan(time_ms);
                }
            }
            Session::Pinch(pinch) => {
                let mut remaining = touches.iter().filter(|(k, _)| pinch.contains(*k));
                match (remaining.next().copied(), remaining.next()) {
                    (Some(_), Some(_)) => {}
                    (Some((id, pos)), None) => {
                        log::debug!("pinch reduced to one finger, continuing as pan");
                        self.begin_pan(PointSource::Touch(id), pos, time_ms, true);
                    }
                    (None, _) => {
                        self.session = Session::None;
                        self.release(true, pinch.velocity(), pinch.scale_velocity());
                    }
                }
            }
            _ => {}
        }
        self.log_transition(before);
    }

    /// Handles cancelled touches: ends the gesture without inertia.
    pub fn on_touch_cancel(&mut self) {
        if self.destroyed {
            return;
        }
        let before = self.gesture_state();
        if matches!(
            self.session,
            Session::Pinch(_)
                | Session::Pan(PanSession {
                    source: PointSource::Touch(_),
                    ..
                })
        ) {
            self.session = Session::None;
            self.settle();
        }
        self.log_transition(before);
    }

    /// Handles a wheel event: zooms around the cursor.
    ///
    /// `factor = 1 - delta_y · wheel_zoom_speed`; non-positive factors are
    /// ignored. Any running animation is cancelled first.
    pub fn on_wheel(&mut self, input: WheelInput) {
        if self.destroyed {
            return;
        }
        let before = self.gesture_state();
        self.cancel_animation();

        let factor = 1.0 + (-input.delta_y * self.config().wheel_zoom_speed);
        if !(factor > 0.0 && factor.is_finite()) {
            log::debug!("ignoring wheel delta {} (factor {factor})", input.delta_y);
            self.log_transition(before);
            return;
        }
        let pivot = self.to_container(input.position);
        let t = self.viewport.transform();
        let new_scale = self.viewport.clamp_scale(t.scale * factor);
        if self.viewport.apply_around_pivot(pivot, new_scale, t.rotation) {
            self.viewport.clamp_translation(ClampMode::Hard);
            self.rebase_pan();
            self.publish(Transition::Snap);
        }
        self.log_transition(before);
    }

    /// Advances the active animation run. Call when a frame requested through
    /// [`Host::request_frame`] fires.
    ///
    /// Frames other than the one the engine is waiting for are ignored, so a
    /// cancelled frame that fires anyway has no effect.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: f64) {
        if self.destroyed || self.pending_frame != Some(handle) {
            log::trace!("ignoring stale frame {handle:?}");
            return;
        }
        self.pending_frame = None;
        let Some(run) = self.run.take() else {
            return;
        };
        let before = self.gesture_state_with(Some(run));

        match run {
            AnimationRun::Kinetic(mut kinetic) => {
                let step = kinetic.step(&mut self.viewport);
                log::trace!("kinetic tick, velocity {:?}", kinetic.velocity());
                self.publish(Transition::Snap);
                match step {
                    Step::Continue => self.start_run(AnimationRun::Kinetic(kinetic)),
                    Step::Finished => {
                        log::debug!("kinetic run finished");
                        self.settle();
                    }
                }
            }
            AnimationRun::ElasticReturn(mut elastic) => {
                let step = elastic.step(&mut self.viewport, now_ms);
                log::trace!("elastic return tick at {now_ms}");
                self.publish(Transition::Snap);
                if step == Step::Continue {
                    self.start_run(AnimationRun::ElasticReturn(elastic));
                } else {
                    log::debug!("elastic return finished");
                }
            }
            AnimationRun::Transition(mut wait) => {
                if wait.step(now_ms) == Step::Continue {
                    self.start_run(AnimationRun::Transition(wait));
                }
            }
        }
        self.log_transition(before);
    }

    // --- Programmatic API ----------------------------------------------------

    /// Returns the current transform.
    pub fn transform(&self) -> Transform {
        self.viewport.transform()
    }

    /// Restores `(initial_scale, 0, 0, 0)` with a transition.
    pub fn reset(&mut self) {
        if self.destroyed {
            return;
        }
        let before = self.gesture_state();
        self.preempt();
        let initial = self.config().initial_scale;
        self.viewport
            .set_transform(Transform::new(initial, 0.0, 0.0, 0.0));
        self.viewport.clamp_translation(ClampMode::Hard);
        self.commit(true);
        self.log_transition(before);
    }

    /// Rotates by `degrees` (result taken mod 360) with a transition.
    pub fn rotate(&mut self, degrees: f64) {
        if self.destroyed {
            return;
        }
        if !degrees.is_finite() {
            log::warn!("ignoring non-finite rotation {degrees}");
            return;
        }
        let before = self.gesture_state();
        self.preempt();
        let rotation = (self.viewport.transform().rotation + degrees) % 360.0;
        self.viewport.set_rotation(rotation);
        self.viewport.clamp_translation(ClampMode::Hard);
        self.commit(true);
        self.log_transition(before);
    }

    /// Overwrites the supplied fields of the transform.
    ///
    /// Scale is clamped, rotation taken mod 360, translation re-clamped.
    /// `use_transition` defaults to [`ViewConfig::transition`]. Non-finite
    /// fields are ignored.
    pub fn set_transform(&mut self, patch: TransformPatch, use_transition: Option<bool>) {
        if self.destroyed {
            return;
        }
        if patch.has_non_finite() {
            log::warn!("ignoring non-finite fields in {patch:?}");
        }
        let before = self.gesture_state();
        self.preempt();
        let mut t = self.viewport.transform();
        t.apply_patch(&patch);
        if patch.rotation.is_some() {
            t.rotation %= 360.0;
        }
        self.viewport.set_transform(t);
        self.viewport.clamp_translation(ClampMode::Hard);
        self.commit(use_transition.unwrap_or(self.config().transition));
        self.log_transition(before);
    }

    /// Moves the content so its centre sits at container point `(x, y)`.
    ///
    /// The translation becomes the offset of that point from the container
    /// centre, then is clamped into bounds.
    pub fn move_to(&mut self, x: f64, y: f64) {
        let center = self.viewport.container_center();
        self.move_translation(Vec2::new(x - center.x, y - center.y));
    }

    /// Shifts the content by `(dx, dy)` container pixels, clamped into bounds.
    pub fn move_by(&mut self, dx: f64, dy: f64) {
        let translation = self.viewport.translation() + Vec2::new(dx, dy);
        self.move_translation(translation);
    }

    /// Zooms to `scale` around `point` (container coordinates), defaulting
    /// to the container centre. No-op if the clamped scale is unchanged.
    pub fn zoom_to(&mut self, scale: f64, point: Option<Point>) {
        if self.destroyed || !scale.is_finite() {
            return;
        }
        let t = self.viewport.transform();
        let new_scale = self.viewport.clamp_scale(scale);
        if new_scale == t.scale {
            return;
        }
        let before = self.gesture_state();
        self.preempt();
        let pivot = point.unwrap_or_else(|| self.viewport.container_center());
        if self.viewport.apply_around_pivot(pivot, new_scale, t.rotation) {
            self.viewport.clamp_translation(ClampMode::Hard);
            self.commit(self.config().transition);
        }
        self.log_transition(before);
    }

    /// Brings image point `image_pt` to the container centre (as far as the
    /// bounds allow).
    pub fn center_on_image_point(&mut self, image_pt: Point) {
        let shown_at = self.viewport.image_to_container(image_pt);
        let delta = self.viewport.container_center() - shown_at;
        self.move_by(delta.x, delta.y);
    }

    /// Converts a container point into image coordinates.
    pub fn container_to_image(&self, pt: Point) -> Point {
        self.viewport.container_to_image(pt)
    }

    /// Converts an image point into container coordinates.
    pub fn image_to_container(&self, pt: Point) -> Point {
        self.viewport.image_to_container(pt)
    }

    /// Bounding box of the displayed content, in container coordinates.
    pub fn viewport_bounds(&self) -> Rect {
        self.viewport.viewport_bounds()
    }

    /// Cancels any animation or gesture and detaches from all input sources.
    ///
    /// The engine ignores every call afterwards.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.preempt();
        self.host.detach_inputs();
        self.destroyed = true;
        log::debug!("engine destroyed");
    }

    // --- Internals -----------------------------------------------------------

    fn to_container(&self, screen: Point) -> Point {
        screen - self.container_origin.to_vec2()
    }

    fn touches_in_container(&self, touches: &[TouchPoint]) -> Vec<(TouchId, Point)> {
        touches
            .iter()
            .map(|t| (t.id, self.to_container(t.position)))
            .collect()
    }

    fn is_panning_with(&self, source: PointSource) -> bool {
        matches!(self.session, Session::Pan(pan) if pan.source == source)
    }

    fn begin_pan(&mut self, source: PointSource, pos: Point, time_ms: f64, resumed: bool) {
        let mut drag = DragState::new(DRAG_THRESHOLD, self.config().max_speed);
        if resumed {
            drag.resume(pos, time_ms);
        } else {
            drag.start(pos, time_ms);
        }
        self.session = Session::Pan(PanSession {
            source,
            drag,
            start_translation: self.viewport.translation(),
        });
    }

    fn begin_pinch(&mut self, a: (TouchId, Point), b: (TouchId, Point), time_ms: f64) {
        let t = self.viewport.transform();
        if a.1 == b.1 {
            log::warn!("pinch started with coincident touches at {:?}", a.1);
        }
        let pinch = PinchState::start(a, b, t.scale, t.rotation, time_ms)
            .with_max_speed(self.config().max_speed);
        self.session = Session::Pinch(pinch);
        self.taps.clear();
    }

    /// Shared drag step for pointers and single touches.
    fn drag_to(&mut self, pos: Point, time_ms: f64) {
        let Session::Pan(pan) = &mut self.session else {
            return;
        };
        pan.drag.update(pos, time_ms);
        if !pan.drag.has_moved() {
            return;
        }
        let Some(offset) = pan.drag.total_offset(pos) else {
            return;
        };
        let target = pan.start_translation + offset;
        let clamped = self.viewport.clamp_position(target, ClampMode::Elastic);
        self.viewport.set_translation(clamped);
        self.taps.clear();
        self.publish(Transition::Snap);
    }

    fn pinch_to(&mut self, a: Point, b: Point, time_ms: f64) {
        let Session::Pinch(pinch) = &mut self.session else {
            return;
        };
        let sample = pinch.update(a, b, time_ms);
        let config = *self.viewport.config();
        let current = self.viewport.transform();

        let scale = sample
            .distance_ratio
            .map_or(current.scale, |ratio| {
                pinch.start_scale() * ratio * config.pinch_speed
            });
        let rotation = match sample.angle_delta {
            Some(delta) if config.enable_rotation => {
                normalize_rotation(pinch.start_rotation() + delta)
            }
            _ => current.rotation,
        };

        // Follow the fingers first, then scale/rotate around where they are.
        self.viewport
            .set_translation(current.translation() + sample.midpoint_delta);
        self.viewport
            .apply_around_pivot(sample.midpoint, scale, rotation);
        self.viewport.clamp_translation(ClampMode::Elastic);
        pinch.record_scale(self.viewport.transform().scale);
        self.publish(Transition::Snap);
    }

    fn end_pan(&mut self, time_ms: f64) {
        let Session::Pan(pan) = self.session else {
            return;
        };
        self.session = Session::None;
        if !pan.drag.has_moved() {
            let at = pan.drag.last_pos.unwrap_or_default();
            if self.taps.on_tap(at, time_ms) == TapResult::Double {
                self.double_tap_zoom(at);
                return;
            }
        }
        self.release(pan.drag.has_moved(), pan.drag.velocity(), 0.0);
    }

    /// Resolves the end of a gesture into kinetic motion, an elastic return or rest.
    fn release(&mut self, moved: bool, velocity: Vec2, scale_velocity: f64) {
        let fast = velocity.x.abs() > KINETIC_START_SPEED
            || velocity.y.abs() > KINETIC_START_SPEED
            || scale_velocity.abs() > KINETIC_START_SCALE_SPEED;
        if moved && fast {
            log::debug!("kinetic run from velocity {velocity:?}, scale {scale_velocity}");
            self.start_run(AnimationRun::Kinetic(KineticRun::new(
                velocity,
                scale_velocity,
            )));
        } else {
            self.settle();
        }
    }

    /// Eases back into bounds if needed, otherwise comes to rest in bounds.
    fn settle(&mut self) {
        if !self.start_elastic_return() && self.viewport.is_out_of_bounds() {
            self.viewport.clamp_translation(ClampMode::Hard);
            self.publish(Transition::Snap);
        } else if self.run.is_none() {
            self.viewport.reset_elastic();
        }
    }

    fn start_elastic_return(&mut self) -> bool {
        if matches!(self.run, Some(AnimationRun::ElasticReturn(_))) {
            return true;
        }
        match ElasticReturn::new(&self.viewport) {
            Some(elastic) => {
                log::debug!("elastic return to {:?}", elastic.target());
                self.start_run(AnimationRun::ElasticReturn(elastic));
                true
            }
            None => false,
        }
    }

    fn double_tap_zoom(&mut self, at: Point) {
        let t = self.viewport.transform();
        let target = (t.scale * DOUBLE_TAP_ZOOM).min(self.config().max_scale);
        log::debug!("double tap at {at:?}, zooming to {target}");
        if self.viewport.apply_around_pivot(at, target, t.rotation) {
            self.viewport.clamp_translation(ClampMode::Hard);
            self.commit(true);
        }
    }

    /// Keeps an ongoing pan consistent after the transform changed under it.
    fn rebase_pan(&mut self) {
        if let Session::Pan(pan) = &mut self.session {
            let last = pan.drag.last_pos.unwrap_or_default();
            let offset = pan.drag.total_offset(last).unwrap_or_default();
            pan.start_translation = self.viewport.translation() - offset;
        }
    }

    fn move_translation(&mut self, translation: Vec2) {
        if self.destroyed {
            return;
        }
        if !translation.is_finite() {
            log::warn!("ignoring non-finite translation {translation:?}");
            return;
        }
        let before = self.gesture_state();
        self.preempt();
        let clamped = self.viewport.clamp_position(translation, ClampMode::Hard);
        self.viewport.set_translation(clamped);
        self.commit(self.config().transition);
        self.log_transition(before);
    }

    /// Stops every other driver before a programmatic change.
    fn preempt(&mut self) {
        self.cancel_animation();
        match self.session {
            Session::Pan(PanSession {
                source: PointSource::Pointer(id),
                ..
            }) => self.host.release_pointer(id),
            Session::Pan(_) | Session::Pinch(_) | Session::None => {}
        }
        self.session = Session::None;
    }

    /// Publishes a programmatic change, tracking its transition if animated.
    fn commit(&mut self, animated: bool) {
        self.publish(Transition::from_flag(animated));
        if animated {
            self.start_run(AnimationRun::Transition(TransitionWait::default()));
        }
    }

    fn start_run(&mut self, run: AnimationRun) {
        self.run = Some(run);
        if self.pending_frame.is_none() {
            self.pending_frame = Some(self.host.request_frame());
        }
    }

    fn cancel_animation(&mut self) {
        if let Some(handle) = self.pending_frame.take() {
            self.host.cancel_frame(handle);
        }
        if let Some(run) = self.run.take() {
            log::debug!("cancelled {run:?}");
        }
    }

    fn publish(&mut self, transition: Transition) {
        let transform = self.viewport.transform();
        log::trace!("publish {transform:?} ({transition:?})");
        self.host.publish(transform, transition);
    }

    fn gesture_state_with(&self, run: Option<AnimationRun>) -> GestureState {
        match run {
            Some(AnimationRun::Kinetic(_)) => GestureState::KineticAnimating,
            Some(AnimationRun::ElasticReturn(_)) => GestureState::ElasticAnimating,
            Some(AnimationRun::Transition(_)) => GestureState::Transitioning,
            None => GestureState::Idle,
        }
    }

    fn log_transition(&self, before: GestureState) {
        let after = self.gesture_state();
        if before != after {
            log::debug!("gesture state {before:?} -> {after:?}");
        }
    }
}
