// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input records delivered by the host's input sources.
//!
//! Positions are in *screen* coordinates; the engine subtracts the container
//! origin itself. Times are milliseconds on any monotonic clock, as long as
//! the same clock feeds every event and frame.

use kurbo::Point;

/// Identifier of a pointer (mouse, pen) as reported by the input source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// Identifier of a touch point, stable for the lifetime of that touch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TouchId(pub u64);

/// Button that changed state in a pointer down/up event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PointerButton {
    /// Left mouse button, pen contact.
    #[default]
    Primary,
    /// Right mouse button.
    Secondary,
    /// Middle mouse button.
    Auxiliary,
    /// Any other button, by index.
    Other(u16),
}

/// A pointer down, move, up or cancel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerInput {
    /// Which pointer.
    pub id: PointerId,
    /// Button that changed state; ignored for moves.
    pub button: PointerButton,
    /// Screen position.
    pub position: Point,
    /// Event time in milliseconds.
    pub time_ms: f64,
}

impl PointerInput {
    /// Primary-button event of pointer `0`.
    #[must_use]
    pub fn primary(position: impl Into<Point>, time_ms: f64) -> Self {
        Self {
            id: PointerId(0),
            button: PointerButton::Primary,
            position: position.into(),
            time_ms,
        }
    }

    /// Same event for another pointer.
    #[must_use]
    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Same event for another button.
    #[must_use]
    pub fn with_button(mut self, button: PointerButton) -> Self {
        self.button = button;
        self
    }
}

/// One active touch point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    /// Stable identifier of the touch.
    pub id: TouchId,
    /// Screen position.
    pub position: Point,
}

impl TouchPoint {
    /// Creates a touch point.
    #[must_use]
    pub fn new(id: u64, position: impl Into<Point>) -> Self {
        Self {
            id: TouchId(id),
            position: position.into(),
        }
    }
}

/// A wheel event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelInput {
    /// Screen position of the cursor.
    pub position: Point,
    /// Vertical delta; negative values scroll up and zoom in.
    pub delta_y: f64,
}

impl WheelInput {
    /// Creates a wheel event.
    #[must_use]
    pub fn new(position: impl Into<Point>, delta_y: f64) -> Self {
        Self {
            position: position.into(),
            delta_y,
        }
    }
}
