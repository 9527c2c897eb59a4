// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: drag threshold, movement deltas, total offsets and velocity.
//!
//! ## Usage
//!
//! 1) Start a drag operation by calling [`DragState::start`] with the initial position and time.
//! 2) On each move event, call [`DragState::update`] to get the movement delta since the last update.
//! 3) Check [`DragState::has_moved`] before acting on the movement: until the pointer has
//!    travelled further than the drag threshold from the start, the interaction is still a tap.
//! 4) Read [`DragState::velocity`] on release to decide on inertia.
//! 5) End the drag operation with [`DragState::end`] to reset state.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use pinchview_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//!
//! // Start dragging at (10, 20)
//! drag.start(Point::new(10.0, 20.0), 0.0);
//! assert!(drag.is_dragging());
//!
//! // A 2 px wiggle is still a tap.
//! drag.update(Point::new(12.0, 20.0), 8.0);
//! assert!(!drag.has_moved());
//!
//! // Move to (15, 25): past the threshold.
//! let delta = drag.update(Point::new(15.0, 25.0), 16.0).unwrap();
//! assert_eq!(delta.x, 3.0);
//! assert!(drag.has_moved());
//!
//! // Total offset from start is (5, 5)
//! let total = drag.total_offset(Point::new(15.0, 25.0)).unwrap();
//! assert_eq!(total.x, 5.0);
//! assert_eq!(total.y, 5.0);
//! ```

use kurbo::{Point, Vec2};

use crate::velocity::VelocityTracker;

/// Distance in pixels a pointer must travel before a press becomes a drag.
pub const DRAG_THRESHOLD: f64 = 3.0;

/// Tracks drag state for move event processing
#[derive(Debug, Clone, Copy)]
pub struct DragState {
    /// Start position of the drag operation
    pub start_pos: Option<Point>,
    /// Last recorded pointer position during drag
    pub last_pos: Option<Point>,
    threshold: f64,
    moved: bool,
    velocity: VelocityTracker,
}

impl Default for DragState {
    fn default() -> Self {
        Self::new(DRAG_THRESHOLD, f64::INFINITY)
    }
}

impl DragState {
    /// Creates a drag tracker with the given threshold (pixels) and maximum
    /// per-axis speed (pixels per reference tick).
    #[must_use]
    pub fn new(threshold: f64, max_speed: f64) -> Self {
        Self {
            start_pos: None,
            last_pos: None,
            threshold: threshold.max(0.0),
            moved: false,
            velocity: VelocityTracker::new(max_speed),
        }
    }

    /// Start tracking a new drag operation from the given position.
    pub fn start(&mut self, pos: Point, time_ms: f64) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.moved = false;
        self.velocity.start(pos, time_ms);
    }

    /// Re-anchors a drag that is already known to be moving at `pos`.
    ///
    /// Used when a gesture hands over to a plain drag mid-flight (for
    /// example when one finger of a pinch lifts): the threshold is
    /// considered passed and velocity sampling restarts.
    pub fn resume(&mut self, pos: Point, time_ms: f64) {
        self.start(pos, time_ms);
        self.moved = true;
    }

    /// Update the drag state with a new position, returning the movement delta since last update.
    pub fn update(&mut self, pos: Point, time_ms: f64) -> Option<Vec2> {
        let start_pos = self.start_pos?;
        let delta = self.last_pos.map(|last_pos| pos - last_pos);
        self.last_pos = Some(pos);
        self.velocity.sample(pos, time_ms);
        if !self.moved && (pos - start_pos).hypot() > self.threshold {
            self.moved = true;
        }
        delta
    }

    /// Get total offset from drag start position.
    pub fn total_offset(&self, current_pos: Point) -> Option<Vec2> {
        self.start_pos.map(|start_pos| current_pos - start_pos)
    }

    /// Returns `true` once the pointer has travelled past the drag threshold.
    ///
    /// Latches: moving back towards the start does not clear it.
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// Latest sampled velocity, in pixels per reference tick.
    pub fn velocity(&self) -> Vec2 {
        self.velocity.velocity()
    }

    /// End the current drag operation and reset state.
    pub fn end(&mut self) {
        self.start_pos = None;
        self.last_pos = None;
        self.moved = false;
        self.velocity.reset();
    }

    /// Returns `true` while a drag operation is active
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
