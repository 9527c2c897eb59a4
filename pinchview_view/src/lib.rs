// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinchview View: a headless model of content panned, zoomed and rotated
//! inside a fixed container.
//!
//! This crate owns the geometry of a pan/zoom/rotate viewer and nothing else:
//! - Transform state (scale, translation, rotation) and its configuration.
//! - Translation bounds that account for the rotated content footprint.
//! - A rubber-band ("elastic") clamp for drags past those bounds.
//! - Pivot-anchored scale/rotation changes.
//! - Conversion between container and image coordinates.
//!
//! It does **not** interpret input or run animations. The `pinchview` crate
//! layers gestures, inertia and elastic return on top of [`Viewport`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use pinchview_view::{ClampMode, ViewConfig, Viewport};
//!
//! // 500x500 container showing a 1000x1000 image.
//! let mut view = Viewport::new(
//!     ViewConfig::default(),
//!     Size::new(500.0, 500.0),
//!     Size::new(1000.0, 1000.0),
//! );
//!
//! // Zoom to 2x around a point, keeping it under the cursor.
//! let cursor = Point::new(100.0, 150.0);
//! let under_cursor = view.container_to_image(cursor);
//! view.apply_around_pivot(cursor, 2.0, 0.0);
//! let back = view.image_to_container(under_cursor);
//! assert!((back - cursor).hypot() < 1e-9);
//!
//! // Bring the translation back into range.
//! view.clamp_translation(ClampMode::Hard);
//! ```
//!
//! ## Coordinate model
//!
//! Translation is the offset of the content's centre from the container's
//! centre, so `(0, 0)` shows the content centred. An image point `p` is
//! displayed at `C + t + R(θ)·s·(p − h)`, with `C` the container centre,
//! `h` half the content size, `s` the scale and `θ` the rotation. Both
//! coordinate conversions include rotation and are exact inverses.
//!
//! ## Bounds
//!
//! On each axis the valid translation range is derived from the rotated
//! footprint: if the content fits the container on that axis the range is
//! pinned at `0`, otherwise the content may move until its edge sits
//! `bounds_padding` (a fraction of the container's shorter side) inside the
//! container.

mod bounds;
mod config;
mod transform;
mod viewport;

pub use bounds::{
    BOUNDS_EPSILON, Bounds, ClampMode, ElasticOffset, content_footprint, elastic_displacement,
};
pub use config::{ConfigError, MIN_SCALE_FLOOR, ViewConfig};
pub use transform::{Transform, TransformPatch, normalize_rotation};
pub use viewport::{Viewport, ViewportDebugInfo};
