// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Translation bounds and the rubber-band offset used while dragging past them.

use kurbo::{Size, Vec2};

use crate::config::ViewConfig;

/// Tolerance used when deciding whether a translation lies outside bounds.
pub const BOUNDS_EPSILON: f64 = 1e-9;

/// How a translation is brought back into range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Clamp into the true bounds and clear any elastic offset.
    #[default]
    Hard,
    /// Allow damped overshoot past the bounds on axes where the content
    /// overflows the container. Falls back to [`ClampMode::Hard`] when
    /// [`ViewConfig::elastic`] is off.
    Elastic,
}

/// Valid translation range, in container pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    /// Smallest horizontal translation.
    pub min_x: f64,
    /// Largest horizontal translation.
    pub max_x: f64,
    /// Smallest vertical translation.
    pub min_y: f64,
    /// Largest vertical translation.
    pub max_y: f64,
}

impl Bounds {
    /// Bounds that pin the translation at the origin on both axes.
    pub const ZERO: Self = Self {
        min_x: 0.0,
        max_x: 0.0,
        min_y: 0.0,
        max_y: 0.0,
    };

    /// Computes the true bounds for a content footprint inside a container.
    ///
    /// On each axis where the footprint fits, the range collapses to `0`.
    /// Otherwise the content may pan until its edge is `padding` pixels
    /// inside the container: `max = footprint/2 - container/2 + padding`.
    #[must_use]
    pub fn for_footprint(footprint: Size, container: Size, bounds_padding: f64) -> Self {
        let pad = container.width.min(container.height).max(0.0) * bounds_padding;
        let pad = if pad.is_finite() { pad } else { 0.0 };
        let axis = |footprint: f64, container: f64| {
            if !(footprint.is_finite() && container.is_finite()) || footprint <= container {
                0.0
            } else {
                footprint / 2.0 - container / 2.0 + pad
            }
        };
        let max_x = axis(footprint.width, container.width);
        let max_y = axis(footprint.height, container.height);
        Self {
            min_x: -max_x,
            max_x,
            min_y: -max_y,
            max_y,
        }
    }

    /// Clamps each axis of `translation` independently.
    #[must_use]
    pub fn clamp(&self, translation: Vec2) -> Vec2 {
        Vec2::new(
            translation.x.clamp(self.min_x, self.max_x),
            translation.y.clamp(self.min_y, self.max_y),
        )
    }

    /// Returns `true` if `translation` lies inside the bounds on both axes.
    #[must_use]
    pub fn contains(&self, translation: Vec2) -> bool {
        translation.x >= self.min_x - BOUNDS_EPSILON
            && translation.x <= self.max_x + BOUNDS_EPSILON
            && translation.y >= self.min_y - BOUNDS_EPSILON
            && translation.y <= self.max_y + BOUNDS_EPSILON
    }

    /// Returns `true` when the horizontal range is pinned at a single value.
    #[must_use]
    pub fn is_pinned_x(&self) -> bool {
        self.max_x <= self.min_x
    }

    /// Returns `true` when the vertical range is pinned at a single value.
    #[must_use]
    pub fn is_pinned_y(&self) -> bool {
        self.max_y <= self.min_y
    }

    /// Extends the range on the side an elastic offset points to.
    #[must_use]
    pub fn widened_by(&self, offset: Vec2) -> Self {
        let widen = |min: f64, max: f64, offset: f64| {
            if offset >= 0.0 {
                (min, max + offset)
            } else {
                (min + offset, max)
            }
        };
        let (min_x, max_x) = widen(self.min_x, self.max_x, offset.x);
        let (min_y, max_y) = widen(self.min_y, self.max_y, offset.y);
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }
}

/// Axis-aligned size of the scaled and rotated content rectangle.
///
/// `W = w·s·|cos θ| + h·s·|sin θ|`, `H = w·s·|sin θ| + h·s·|cos θ|`.
#[must_use]
pub fn content_footprint(content: Size, scale: f64, rotation_degrees: f64) -> Size {
    let (sin, cos) = rotation_degrees.to_radians().sin_cos();
    let (sin, cos) = (sin.abs(), cos.abs());
    let w = content.width.max(0.0) * scale;
    let h = content.height.max(0.0) * scale;
    Size::new(w * cos + h * sin, w * sin + h * cos)
}

/// Damped visible displacement for an overshoot past a boundary.
///
/// Small overshoots are damped linearly; larger ones grow sub-linearly
/// through `1 - e^(-overshoot/100)`.
#[must_use]
pub fn elastic_displacement(overshoot: f64, config: &ViewConfig) -> f64 {
    let overshoot = overshoot.abs();
    if overshoot < config.min_elastic_distance {
        overshoot * config.elastic_resistance
    } else {
        overshoot * config.elastic_resistance * (1.0 - (-overshoot / 100.0).exp())
    }
}

/// Running rubber-band offset, one scalar per axis.
///
/// Persists across the move events of a drag (and the ticks of a kinetic
/// run) and is cleared whenever a hard clamp is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElasticOffset {
    offset: Vec2,
}

impl ElasticOffset {
    /// Current offset. Positive values extend the maximum bound, negative
    /// values the minimum.
    #[must_use]
    pub fn get(&self) -> Vec2 {
        self.offset
    }

    /// Clears the offset on both axes.
    pub fn reset(&mut self) {
        self.offset = Vec2::ZERO;
    }

    /// Updates the offset from a raw translation and returns the translation
    /// clamped into the elastically widened bounds.
    ///
    /// Pinned axes (content fits the container) are always clamped hard.
    pub fn clamp(&mut self, translation: Vec2, bounds: &Bounds, config: &ViewConfig) -> Vec2 {
        self.offset.x = Self::update_axis(
            self.offset.x,
            translation.x,
            bounds.min_x,
            bounds.max_x,
            config,
        );
        self.offset.y = Self::update_axis(
            self.offset.y,
            translation.y,
            bounds.min_y,
            bounds.max_y,
            config,
        );
        bounds.widened_by(self.offset).clamp(translation)
    }

    fn update_axis(offset: f64, value: f64, min: f64, max: f64, config: &ViewConfig) -> f64 {
        if max <= min {
            0.0
        } else if value > max {
            elastic_displacement(value - max, config)
        } else if value < min {
            -elastic_displacement(min - value, config)
        } else {
            offset * config.elastic_resistance
        }
    }
}
