// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Velocity sampling normalized to a fixed reference tick.
//!
//! Velocities are expressed in "units per 16 ms tick", so the same gesture
//! produces the same velocity whatever rate the input source samples at:
//! `velocity = Δposition / Δtime · 16`.
//!
//! ```
//! use kurbo::Point;
//! use pinchview_event_state::velocity::VelocityTracker;
//!
//! let mut tracker = VelocityTracker::new(300.0);
//! tracker.start(Point::new(0.0, 0.0), 0.0);
//! // 8 px in 8 ms is 16 px per reference tick.
//! let v = tracker.sample(Point::new(8.0, 0.0), 8.0);
//! assert_eq!(v.x, 16.0);
//! ```

use kurbo::{Point, Vec2};

/// Duration of the reference tick velocities are normalized to, in milliseconds.
pub const REFERENCE_TICK_MS: f64 = 16.0;

/// Converts a change over `dt_ms` into a per-reference-tick rate.
///
/// Returns `None` when `dt_ms` is not positive.
#[must_use]
pub fn per_tick(delta: f64, dt_ms: f64) -> Option<f64> {
    (dt_ms > 0.0).then(|| delta / dt_ms * REFERENCE_TICK_MS)
}

/// Tracks the velocity of a moving point.
#[derive(Clone, Copy, Debug)]
pub struct VelocityTracker {
    last: Option<(Point, f64)>,
    velocity: Vec2,
    max_speed: f64,
}

impl Default for VelocityTracker {
    fn default() -> Self {
        Self::new(f64::INFINITY)
    }
}

impl VelocityTracker {
    /// Creates a tracker clamping each velocity component to `±max_speed`.
    #[must_use]
    pub fn new(max_speed: f64) -> Self {
        Self {
            last: None,
            velocity: Vec2::ZERO,
            max_speed: max_speed.max(0.0),
        }
    }

    /// Forgets any previous samples and starts from `pos` at `time_ms`.
    pub fn start(&mut self, pos: Point, time_ms: f64) {
        self.last = Some((pos, time_ms));
        self.velocity = Vec2::ZERO;
    }

    /// Records a new position and returns the updated velocity.
    ///
    /// Samples with a non-positive time step update the position but keep the
    /// previous velocity. Without a previous sample this behaves like
    /// [`VelocityTracker::start`].
    pub fn sample(&mut self, pos: Point, time_ms: f64) -> Vec2 {
        let Some((last_pos, last_time)) = self.last else {
            self.start(pos, time_ms);
            return self.velocity;
        };
        let dt = time_ms - last_time;
        let delta = pos - last_pos;
        if let (Some(vx), Some(vy)) = (per_tick(delta.x, dt), per_tick(delta.y, dt)) {
            self.velocity = Vec2::new(
                vx.clamp(-self.max_speed, self.max_speed),
                vy.clamp(-self.max_speed, self.max_speed),
            );
        }
        self.last = Some((pos, time_ms));
        self.velocity
    }

    /// Returns the most recent velocity.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    /// Clears samples and velocity.
    pub fn reset(&mut self) {
        self.last = None;
        self.velocity = Vec2::ZERO;
    }
}
