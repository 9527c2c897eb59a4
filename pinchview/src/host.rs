// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! What the engine needs from its environment.

use pinchview_view::Transform;

use crate::input::PointerId;

/// Handle of a frame requested from the host's frame scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Rendering hint attached to a published transform.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Transition {
    /// Show the new transform immediately.
    #[default]
    Snap,
    /// Animate to the new transform over [`Transition::DURATION_MS`] with an ease-out curve.
    EaseOut,
}

impl Transition {
    /// Duration of an [`Transition::EaseOut`] transition, in milliseconds.
    pub const DURATION_MS: f64 = 300.0;

    /// [`Transition::EaseOut`] if `animated`, else [`Transition::Snap`].
    #[must_use]
    pub fn from_flag(animated: bool) -> Self {
        if animated { Self::EaseOut } else { Self::Snap }
    }
}

/// Capabilities the engine needs from its environment.
///
/// The host owns the real input listeners, the frame clock and the
/// renderer. The engine calls back into it synchronously; none of these
/// methods may call back into the engine.
pub trait Host {
    /// Schedules one call to `Engine::on_frame` on the next animation frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a frame returned by [`Host::request_frame`].
    ///
    /// Frames that already fired may be passed; the engine also ignores
    /// frames it no longer waits for.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Receives the transform after every change.
    fn publish(&mut self, transform: Transform, transition: Transition);

    /// Routes all further events of `pointer` to the engine until released,
    /// even when the pointer leaves the content element.
    fn capture_pointer(&mut self, pointer: PointerId) {
        let _ = pointer;
    }

    /// Ends a capture. Must tolerate pointers that were never captured or
    /// have already been released by the input source.
    fn release_pointer(&mut self, pointer: PointerId) {
        let _ = pointer;
    }

    /// Detaches the pointer, touch and wheel listeners.
    fn detach_inputs(&mut self) {}
}
