// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Two-finger pinch tracking.
//!
//! [`PinchState`] remembers *which* two touches form the pinch, so fingers
//! that cross or are reported in a different order in later events do not
//! corrupt the gesture. Each update reports the distance ratio and angle
//! change relative to the start of the pinch, together with the midpoint and
//! its movement since the previous update.
//!
//! ```
//! use kurbo::Point;
//! use pinchview_event_state::pinch::PinchState;
//!
//! let mut pinch = PinchState::start(
//!     (1_u32, Point::new(100.0, 100.0)),
//!     (2_u32, Point::new(200.0, 100.0)),
//!     1.0,
//!     0.0,
//!     0.0,
//! );
//!
//! // Touches arrive in the opposite order, twice as far apart.
//! let touches = [(2, Point::new(250.0, 100.0)), (1, Point::new(50.0, 100.0))];
//! let (a, b) = pinch.locate(&touches).unwrap();
//! let sample = pinch.update(a, b, 16.0);
//! assert_eq!(sample.distance_ratio, Some(2.0));
//! assert_eq!(sample.midpoint, Point::new(150.0, 100.0));
//! ```

use kurbo::{Point, Vec2};

use crate::velocity::{VelocityTracker, per_tick};

/// Finger separation, in pixels, below which distance and angle are not
/// meaningful.
pub const MIN_PINCH_DISTANCE: f64 = 1e-3;

/// Geometry of one pinch update.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PinchSample {
    /// Current finger distance over the distance at the start of the pinch.
    ///
    /// `None` while the start distance is degenerate.
    pub distance_ratio: Option<f64>,
    /// Change of the finger angle since the start of the pinch, in degrees.
    ///
    /// `None` while the start distance is degenerate.
    pub angle_delta: Option<f64>,
    /// Current midpoint of the two fingers.
    pub midpoint: Point,
    /// Midpoint movement since the previous update.
    pub midpoint_delta: Vec2,
}

/// Tracks a two-finger pinch by touch identifier.
#[derive(Clone, Copy, Debug)]
pub struct PinchState<K> {
    ids: (K, K),
    start_distance: f64,
    start_angle: f64,
    start_scale: f64,
    start_rotation: f64,
    last_midpoint: Point,
    last_time: f64,
    last_dt: f64,
    last_scale: f64,
    midpoint_velocity: VelocityTracker,
    scale_velocity: f64,
}

impl<K: Copy + PartialEq> PinchState<K> {
    /// Starts a pinch from two identified touches, remembering the scale and
    /// rotation (degrees) the content had at that moment.
    #[must_use]
    pub fn start(
        a: (K, Point),
        b: (K, Point),
        start_scale: f64,
        start_rotation: f64,
        time_ms: f64,
    ) -> Self {
        let span = b.1 - a.1;
        let midpoint = a.1.midpoint(b.1);
        let mut midpoint_velocity = VelocityTracker::default();
        midpoint_velocity.start(midpoint, time_ms);
        Self {
            ids: (a.0, b.0),
            start_distance: span.hypot(),
            start_angle: span.atan2(),
            start_scale,
            start_rotation,
            last_midpoint: midpoint,
            last_time: time_ms,
            last_dt: 0.0,
            last_scale: start_scale,
            midpoint_velocity,
            scale_velocity: 0.0,
        }
    }

    /// Limits the midpoint velocity to `±max_speed` per axis.
    #[must_use]
    pub fn with_max_speed(mut self, max_speed: f64) -> Self {
        let mut tracker = VelocityTracker::new(max_speed);
        tracker.start(self.last_midpoint, self.last_time);
        self.midpoint_velocity = tracker;
        self
    }

    /// Identifiers of the two tracked touches, in start order.
    pub fn ids(&self) -> (K, K) {
        self.ids
    }

    /// Returns `true` if `id` is one of the tracked touches.
    pub fn contains(&self, id: K) -> bool {
        self.ids.0 == id || self.ids.1 == id
    }

    /// Finds the tracked touches in `touches`, in start order.
    ///
    /// Returns `None` unless both are present.
    pub fn locate(&self, touches: &[(K, Point)]) -> Option<(Point, Point)> {
        let find = |id: K| touches.iter().find(|(k, _)| *k == id).map(|(_, p)| *p);
        Some((find(self.ids.0)?, find(self.ids.1)?))
    }

    /// Scale of the content when the pinch started.
    pub fn start_scale(&self) -> f64 {
        self.start_scale
    }

    /// Rotation of the content, in degrees, when the pinch started.
    pub fn start_rotation(&self) -> f64 {
        self.start_rotation
    }

    /// Records the current positions of the tracked touches, in start order.
    ///
    /// If the fingers started on top of each other, distance and angle are
    /// re-anchored on the first update where they have separated.
    pub fn update(&mut self, a: Point, b: Point, time_ms: f64) -> PinchSample {
        let span = b - a;
        let distance = span.hypot();
        let midpoint = a.midpoint(b);
        let midpoint_delta = midpoint - self.last_midpoint;

        self.midpoint_velocity.sample(midpoint, time_ms);
        self.last_dt = time_ms - self.last_time;
        self.last_time = time_ms;
        self.last_midpoint = midpoint;

        let (distance_ratio, angle_delta) = if self.start_distance < MIN_PINCH_DISTANCE {
            if distance >= MIN_PINCH_DISTANCE {
                self.start_distance = distance;
                self.start_angle = span.atan2();
            }
            (None, None)
        } else if distance < MIN_PINCH_DISTANCE {
            (None, None)
        } else {
            (
                Some(distance / self.start_distance),
                Some((span.atan2() - self.start_angle).to_degrees()),
            )
        };

        PinchSample {
            distance_ratio,
            angle_delta,
            midpoint,
            midpoint_delta,
        }
    }

    /// Records the scale the content ended up with after the latest update,
    /// for scale velocity sampling.
    pub fn record_scale(&mut self, scale: f64) {
        if let Some(v) = per_tick(scale - self.last_scale, self.last_dt) {
            self.scale_velocity = v;
        }
        self.last_scale = scale;
    }

    /// Midpoint velocity, in pixels per reference tick.
    pub fn velocity(&self) -> Vec2 {
        self.midpoint_velocity.velocity()
    }

    /// Scale change per reference tick.
    pub fn scale_velocity(&self) -> f64 {
        self.scale_velocity
    }

    /// Latest midpoint of the two touches.
    pub fn midpoint(&self) -> Point {
        self.last_midpoint
    }
}
