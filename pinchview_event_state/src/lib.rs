// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview Event State: per-interaction gesture state for pan/zoom viewers.
//!
//! This crate provides small, focused state machines for the interactions a
//! pan/zoom/rotate viewer has to track across several input events. Each
//! module handles one pattern:
//!
//! - [`drag`]: Single-point drags with a tap/drag threshold and velocity sampling
//! - [`pinch`]: Two-finger pinches tracked by touch identifier
//! - [`tap`]: Double-tap recognition with spatial/temporal tolerance
//! - [`velocity`]: Velocity sampling normalized to a 16 ms reference tick
//!
//! ## Design Philosophy
//!
//! Each state manager is designed to be:
//!
//! - **Minimal and focused**: Each handles one specific interaction pattern
//! - **Stateful but simple**: Track just enough state to compute transitions
//! - **Geometry only**: Report positions, deltas, ratios and velocities, never transforms
//! - **Generic**: Accept application-specific touch identifier types
//!
//! The crate does not know about scales, bounds or animation. The `pinchview`
//! engine combines these trackers with a `pinchview_view::Viewport` to turn
//! raw input into transform changes.
//!
//! ## Usage Patterns
//!
//! ### Drag Operations
//!
//! ```rust
//! # #[cfg(feature = "drag")]
//! # fn example() {
//! use kurbo::Point;
//! use pinchview_event_state::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 10.0), 0.0);
//! drag.update(Point::new(20.0, 12.0), 16.0);
//! assert!(drag.has_moved());
//! let total = drag.total_offset(Point::new(20.0, 12.0)).unwrap();
//! // total is (10.0, 2.0); velocity is (10.0, 2.0) px per 16 ms tick
//! # }
//! ```
//!
//! ### Double Taps
//!
//! ```rust
//! # #[cfg(feature = "tap")]
//! # fn example() {
//! use kurbo::Point;
//! use pinchview_event_state::tap::{TapResult, TapState};
//!
//! let mut taps = TapState::default();
//! taps.on_tap(Point::new(50.0, 50.0), 1000.0);
//! let result = taps.on_tap(Point::new(52.0, 49.0), 1180.0);
//! assert_eq!(result, TapResult::Double);
//! # }
//! ```
//!
//! ## Features
//!
//! - `drag`: Enable drag state tracking (requires `kurbo` dependency)
//! - `pinch`: Enable two-finger pinch tracking (requires `kurbo` dependency)
//! - `tap`: Enable double-tap recognition (requires `kurbo` dependency)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "drag")]
pub mod drag;
#[cfg(feature = "pinch")]
pub mod pinch;
#[cfg(feature = "tap")]
pub mod tap;
#[cfg(any(feature = "drag", feature = "pinch"))]
pub mod velocity;
