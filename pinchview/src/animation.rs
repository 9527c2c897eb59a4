// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Frame-driven runs: kinetic motion, elastic return and transition waits.
//!
//! Each run is a plain value advanced by one `step` per animation frame.
//! A step mutates the viewport atomically and reports whether the run wants
//! another frame; scheduling and cancellation are the engine's business.

use kurbo::Vec2;
use pinchview_view::{ClampMode, Viewport};

use crate::host::Transition;

/// Per-axis speed below which kinetic motion stops, in pixels per tick.
pub const KINETIC_STOP_SPEED: f64 = 0.5;

/// Scale velocity below which kinetic motion stops, per tick.
pub const KINETIC_STOP_SCALE_SPEED: f64 = 0.001;

/// Duration of the elastic return, in milliseconds.
pub const ELASTIC_RETURN_MS: f64 = 300.0;

/// Whether a run wants another frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Schedule another frame.
    Continue,
    /// The run is over.
    Finished,
}

/// Cubic ease-out: `1 - (1 - t)³`.
#[must_use]
pub fn ease_out_cubic(progress: f64) -> f64 {
    let inv = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Post-release motion under geometric friction.
///
/// Every tick moves by the velocity, re-clamps elastically, then multiplies
/// the velocity by `friction`. Friction is per tick, not per millisecond,
/// so the frame rate sets the real-world duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KineticRun {
    velocity: Vec2,
    scale_velocity: f64,
}

impl KineticRun {
    /// Starts from a translation velocity (pixels per tick) and a scale
    /// velocity (scale units per tick).
    #[must_use]
    pub fn new(velocity: Vec2, scale_velocity: f64) -> Self {
        Self {
            velocity,
            scale_velocity,
        }
    }

    /// Current translation velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Current scale velocity.
    #[must_use]
    pub fn scale_velocity(&self) -> f64 {
        self.scale_velocity
    }

    /// Returns `true` once every velocity component is below its stop threshold.
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.velocity.x.abs() < KINETIC_STOP_SPEED
            && self.velocity.y.abs() < KINETIC_STOP_SPEED
            && self.scale_velocity.abs() < KINETIC_STOP_SCALE_SPEED
    }

    /// Advances one tick.
    pub fn step(&mut self, viewport: &mut Viewport) -> Step {
        let transform = viewport.transform();
        viewport.set_scale(transform.scale + self.scale_velocity);
        let target = transform.translation() + self.velocity;
        let clamped = viewport.clamp_position(target, ClampMode::Elastic);
        viewport.set_translation(clamped);

        let friction = viewport.config().friction;
        self.velocity *= friction;
        self.scale_velocity *= friction;

        if self.is_at_rest() {
            Step::Finished
        } else {
            Step::Continue
        }
    }
}

/// Eases an out-of-bounds translation back to the nearest valid one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElasticReturn {
    from: Vec2,
    to: Vec2,
    started_ms: Option<f64>,
}

impl ElasticReturn {
    /// Captures the current translation and its in-bounds target.
    ///
    /// Returns `None` when elasticity is off or nothing is out of bounds.
    #[must_use]
    pub fn new(viewport: &Viewport) -> Option<Self> {
        if !viewport.config().elastic || !viewport.is_out_of_bounds() {
            return None;
        }
        Some(Self {
            from: viewport.translation(),
            to: viewport.nearest_in_bounds(),
            started_ms: None,
        })
    }

    /// Translation the run ends at.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.to
    }

    /// Advances to `now_ms`. The first step fixes the start time.
    pub fn step(&mut self, viewport: &mut Viewport, now_ms: f64) -> Step {
        let started = *self.started_ms.get_or_insert(now_ms);
        let progress = ((now_ms - started) / ELASTIC_RETURN_MS).clamp(0.0, 1.0);
        let eased = ease_out_cubic(progress);
        viewport.set_translation(self.from + (self.to - self.from) * eased);
        if progress >= 1.0 {
            viewport.reset_elastic();
            Step::Finished
        } else {
            Step::Continue
        }
    }
}

/// Waits out a renderer transition so the engine can report it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TransitionWait {
    started_ms: Option<f64>,
}

impl TransitionWait {
    /// Advances to `now_ms`. The first step fixes the start time.
    pub fn step(&mut self, now_ms: f64) -> Step {
        let started = *self.started_ms.get_or_insert(now_ms);
        if now_ms - started >= Transition::DURATION_MS {
            Step::Finished
        } else {
            Step::Continue
        }
    }
}

/// The single frame-driven run an engine may have.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnimationRun {
    /// Inertia after a release.
    Kinetic(KineticRun),
    /// Ease back into bounds.
    ElasticReturn(ElasticReturn),
    /// Renderer transition in progress.
    Transition(TransitionWait),
}
