// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Double-tap recognition with spatial and temporal tolerance.
//!
//! Feed every completed tap (a press released before it became a drag) to
//! [`TapState::on_tap`]. A tap that follows the previous one closely enough
//! in time and space is reported as [`TapResult::Double`]; the pair is then
//! consumed, so a third tap starts a new sequence.
//!
//! ```
//! use kurbo::Point;
//! use pinchview_event_state::tap::{TapResult, TapState};
//!
//! let mut taps = TapState::default();
//! assert_eq!(taps.on_tap(Point::new(10.0, 10.0), 1000.0), TapResult::Single);
//! assert_eq!(taps.on_tap(Point::new(14.0, 12.0), 1200.0), TapResult::Double);
//! assert_eq!(taps.on_tap(Point::new(14.0, 12.0), 1300.0), TapResult::Single);
//! ```

use kurbo::Point;

/// Largest gap between two taps of a double tap, in milliseconds.
pub const DOUBLE_TAP_DELAY_MS: f64 = 300.0;

/// Largest distance between two taps of a double tap, in pixels.
pub const DOUBLE_TAP_THRESHOLD: f64 = 10.0;

/// Outcome of feeding a tap to [`TapState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TapResult {
    /// A lone tap, remembered as a possible first half of a double tap.
    Single,
    /// The second tap of a double tap.
    Double,
}

/// Remembers the last tap to recognize double taps.
#[derive(Clone, Copy, Debug)]
pub struct TapState {
    last: Option<(Point, f64)>,
    delay_ms: f64,
    threshold: f64,
}

impl Default for TapState {
    fn default() -> Self {
        Self::new(DOUBLE_TAP_DELAY_MS, DOUBLE_TAP_THRESHOLD)
    }
}

impl TapState {
    /// Creates a recognizer with custom tolerances.
    #[must_use]
    pub fn new(delay_ms: f64, threshold: f64) -> Self {
        Self {
            last: None,
            delay_ms,
            threshold,
        }
    }

    /// Records a tap at `pos` and reports whether it completes a double tap.
    pub fn on_tap(&mut self, pos: Point, time_ms: f64) -> TapResult {
        if let Some((last_pos, last_time)) = self.last.take() {
            let dt = time_ms - last_time;
            if (0.0..=self.delay_ms).contains(&dt) && pos.distance(last_pos) <= self.threshold {
                return TapResult::Double;
            }
        }
        self.last = Some((pos, time_ms));
        TapResult::Single
    }

    /// Forgets the remembered tap, e.g. when a drag or pinch intervenes.
    pub fn clear(&mut self) {
        self.last = None;
    }

    /// Returns `true` if a tap is waiting for its possible second half.
    pub fn is_pending(&self) -> bool {
        self.last.is_some()
    }
}
