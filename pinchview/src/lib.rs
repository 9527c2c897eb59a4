// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview: a pan/zoom/rotate engine for a single piece of content.
//!
//! [`Engine`] turns pointer, touch and wheel input into a [`Transform`]
//! (scale, translation, rotation) of some content inside a fixed container.
//! It keeps the content within bounds, lets it stretch elastically past them
//! while a gesture is active, continues with inertia after a fast release and
//! eases back into bounds afterwards.
//!
//! The engine is host-agnostic. Everything it needs from its environment
//! (a frame clock, a renderer, pointer capture) goes through the [`Host`]
//! trait, and every input is delivered explicitly with a timestamp.
//!
//! - [`engine`]: the engine and its gesture state
//! - [`host`]: the environment capabilities the engine calls back into
//! - [`input`]: raw pointer, touch and wheel records
//! - [`animation`]: frame-driven kinetic, elastic and transition runs
//!
//! The geometry lives in [`pinchview_view`] and the per-gesture trackers in
//! [`pinchview_event_state`]; their main types are re-exported here.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Point, Rect, Size};
//! use pinchview::{Engine, FrameHandle, Host, Transform, Transition, ViewConfig};
//!
//! #[derive(Default)]
//! struct Renderer {
//!     frames: u64,
//!     shown: Option<Transform>,
//! }
//!
//! impl Host for Renderer {
//!     fn request_frame(&mut self) -> FrameHandle {
//!         self.frames += 1;
//!         FrameHandle(self.frames)
//!     }
//!     fn cancel_frame(&mut self, _: FrameHandle) {}
//!     fn publish(&mut self, transform: Transform, _: Transition) {
//!         self.shown = Some(transform);
//!     }
//! }
//!
//! let mut engine = Engine::new(
//!     ViewConfig::default(),
//!     Rect::new(0.0, 0.0, 500.0, 500.0),
//!     Size::new(1000.0, 1000.0),
//!     Renderer::default(),
//! );
//! engine.zoom_to(2.0, None);
//!
//! let shown = engine.host().shown.unwrap();
//! assert_eq!(shown.scale, 2.0);
//! // Zooming about the container centre keeps the content centred.
//! assert_eq!(engine.image_to_container(Point::new(500.0, 500.0)), Point::new(250.0, 250.0));
//! ```
//!
//! ## Features
//!
//! - `serde`: (De)serialization of [`ViewConfig`], [`Transform`] and [`TransformPatch`].

pub mod animation;
pub mod engine;
pub mod host;
pub mod input;

pub use animation::{AnimationRun, ElasticReturn, KineticRun, Step, TransitionWait};
pub use engine::{Engine, GestureState};
pub use host::{FrameHandle, Host, Transition};
pub use input::{PointerButton, PointerId, PointerInput, TouchId, TouchPoint, WheelInput};
pub use pinchview_view::{
    ClampMode, ConfigError, Transform, TransformPatch, ViewConfig, Viewport, ViewportDebugInfo,
};
