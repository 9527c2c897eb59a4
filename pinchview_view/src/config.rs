// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Per-instance configuration of a pan/zoom/rotate viewport.
///
/// All fields are public so partial options can be expressed with struct
/// update syntax against [`ViewConfig::default`]:
///
/// ```rust
/// use pinchview_view::ViewConfig;
///
/// let config = ViewConfig {
///     max_scale: 8.0,
///     enable_rotation: false,
///     ..ViewConfig::default()
/// };
/// assert_eq!(config.min_scale, 0.5);
/// ```
///
/// With the `serde` feature, missing fields in a serialized options object
/// resolve against the same defaults.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ViewConfig {
    /// Smallest allowed scale factor.
    pub min_scale: f64,
    /// Largest allowed scale factor.
    pub max_scale: f64,
    /// Scale applied at construction and by `reset`.
    pub initial_scale: f64,
    /// Scale change per unit of vertical wheel delta.
    pub wheel_zoom_speed: f64,
    /// Extra pan room, as a fraction of the container's shorter side.
    pub bounds_padding: f64,
    /// Per-tick velocity multiplier of kinetic motion.
    pub friction: f64,
    /// Largest sampled pan velocity, in pixels per 16 ms tick.
    pub max_speed: f64,
    /// Whether programmatic updates ask the renderer for an animated transition by default.
    pub transition: bool,
    /// Multiplier on the pinch distance ratio.
    pub pinch_speed: f64,
    /// Whether drags may overshoot the bounds with rubber-band resistance.
    pub elastic: bool,
    /// Damping applied to overshoot while dragging past the bounds.
    pub elastic_resistance: f64,
    /// Bounce strength of the elastic return.
    ///
    /// Accepted and validated for option compatibility; the return animation
    /// currently uses a fixed cubic ease-out and does not overshoot.
    pub elastic_bounce: f64,
    /// Overshoot, in pixels, below which damping is linear.
    pub min_elastic_distance: f64,
    /// Whether two-finger gestures rotate the content.
    pub enable_rotation: bool,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.5,
            max_scale: 3.0,
            initial_scale: 1.0,
            wheel_zoom_speed: 0.0015,
            bounds_padding: 0.1,
            friction: 0.92,
            max_speed: 300.0,
            transition: false,
            pinch_speed: 1.0,
            elastic: true,
            elastic_resistance: 0.15,
            elastic_bounce: 0.3,
            min_elastic_distance: 5.0,
            enable_rotation: true,
        }
    }
}

/// Smallest scale a normalized configuration can express.
pub const MIN_SCALE_FLOOR: f64 = 1e-6;

impl ViewConfig {
    /// Returns a copy that every viewport operation can rely on.
    ///
    /// Normalization never fails:
    /// - non-finite fields fall back to their defaults;
    /// - a reversed scale range is swapped and floored at [`MIN_SCALE_FLOOR`];
    /// - `initial_scale` is clamped into the scale range;
    /// - `friction` is clamped into `[0, 1)`;
    /// - speeds, padding and elastic tuning are made non-negative.
    #[must_use]
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |value: f64, fallback: f64| {
            if value.is_finite() { value } else { fallback }
        };

        let mut min_scale = finite_or(self.min_scale, defaults.min_scale);
        let mut max_scale = finite_or(self.max_scale, defaults.max_scale);
        if min_scale > max_scale {
            core::mem::swap(&mut min_scale, &mut max_scale);
        }
        let min_scale = min_scale.max(MIN_SCALE_FLOOR);
        let max_scale = max_scale.max(min_scale);

        Self {
            min_scale,
            max_scale,
            initial_scale: finite_or(self.initial_scale, defaults.initial_scale)
                .clamp(min_scale, max_scale),
            wheel_zoom_speed: finite_or(self.wheel_zoom_speed, defaults.wheel_zoom_speed).abs(),
            bounds_padding: finite_or(self.bounds_padding, defaults.bounds_padding).abs(),
            friction: finite_or(self.friction, defaults.friction).clamp(0.0, 1.0 - 1e-9),
            max_speed: finite_or(self.max_speed, defaults.max_speed).abs(),
            transition: self.transition,
            pinch_speed: finite_or(self.pinch_speed, defaults.pinch_speed).abs(),
            elastic: self.elastic,
            elastic_resistance: finite_or(self.elastic_resistance, defaults.elastic_resistance)
                .abs(),
            elastic_bounce: finite_or(self.elastic_bounce, defaults.elastic_bounce).abs(),
            min_elastic_distance: finite_or(
                self.min_elastic_distance,
                defaults.min_elastic_distance,
            )
            .abs(),
            enable_rotation: self.enable_rotation,
        }
    }

    /// Checks the configuration without changing it.
    ///
    /// Viewports accept any configuration (see [`ViewConfig::normalized`]);
    /// this is for hosts that want to surface bad options to their users.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("min_scale", self.min_scale),
            ("max_scale", self.max_scale),
            ("initial_scale", self.initial_scale),
            ("wheel_zoom_speed", self.wheel_zoom_speed),
            ("bounds_padding", self.bounds_padding),
            ("friction", self.friction),
            ("max_speed", self.max_speed),
            ("pinch_speed", self.pinch_speed),
            ("elastic_resistance", self.elastic_resistance),
            ("elastic_bounce", self.elastic_bounce),
            ("min_elastic_distance", self.min_elastic_distance),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.min_scale <= 0.0 {
            return Err(ConfigError::NonPositiveMinScale(self.min_scale));
        }
        if self.min_scale > self.max_scale {
            return Err(ConfigError::InvertedScaleRange {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.min_scale..=self.max_scale).contains(&self.initial_scale) {
            return Err(ConfigError::InitialScaleOutOfRange(self.initial_scale));
        }
        if self.friction >= 1.0 {
            return Err(ConfigError::FrictionOutOfRange(self.friction));
        }
        Ok(())
    }
}

/// Problem reported by [`ViewConfig::validate`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A numeric field is NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A numeric field that must be non-negative is negative.
    Negative {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
    /// `min_scale` is zero.
    NonPositiveMinScale(f64),
    /// `min_scale` is larger than `max_scale`.
    InvertedScaleRange {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// `initial_scale` lies outside `[min_scale, max_scale]`.
    InitialScaleOutOfRange(f64),
    /// `friction` would never bring kinetic motion to rest.
    FrictionOutOfRange(f64),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "`{field}` must be a finite number"),
            Self::Negative { field, value } => {
                write!(f, "`{field}` must not be negative (got {value})")
            }
            Self::NonPositiveMinScale(min) => {
                write!(f, "`min_scale` must be greater than zero (got {min})")
            }
            Self::InvertedScaleRange { min, max } => write!(
                f,
                "`min_scale` ({min}) must not be larger than `max_scale` ({max})"
            ),
            Self::InitialScaleOutOfRange(scale) => write!(
                f,
                "`initial_scale` ({scale}) must lie within [min_scale, max_scale]"
            ),
            Self::FrictionOutOfRange(friction) => {
                write!(f, "`friction` must be below 1 (got {friction})")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
