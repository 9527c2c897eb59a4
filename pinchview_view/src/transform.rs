// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Scale, translation and rotation of the content inside its container.
///
/// `x`/`y` offset the content's centre from the container's centre, in
/// container pixels. `rotation` is in degrees, clockwise on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Transform {
    /// Uniform scale factor.
    pub scale: f64,
    /// Horizontal translation.
    pub x: f64,
    /// Vertical translation.
    pub y: f64,
    /// Rotation in degrees.
    pub rotation: f64,
}

impl Transform {
    /// Untransformed content, centred in the container.
    pub const IDENTITY: Self = Self::new(1.0, 0.0, 0.0, 0.0);

    /// Creates a transform from its four components.
    #[must_use]
    pub const fn new(scale: f64, x: f64, y: f64, rotation: f64) -> Self {
        Self {
            scale,
            x,
            y,
            rotation,
        }
    }

    /// Returns the translation as a vector.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Sets the translation from a vector.
    pub fn set_translation(&mut self, translation: Vec2) {
        self.x = translation.x;
        self.y = translation.y;
    }

    /// Applies the fields present in `patch`, leaving the rest unchanged.
    ///
    /// Non-finite values in the patch are skipped.
    pub fn apply_patch(&mut self, patch: &TransformPatch) {
        let fields = [
            (&mut self.scale, patch.scale),
            (&mut self.x, patch.x),
            (&mut self.y, patch.y),
            (&mut self.rotation, patch.rotation),
        ];
        for (slot, value) in fields {
            if let Some(value) = value.filter(|v| v.is_finite()) {
                *slot = value;
            }
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// A partial [`Transform`]: only the fields that are `Some` are written.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TransformPatch {
    /// New scale, if any.
    pub scale: Option<f64>,
    /// New horizontal translation, if any.
    pub x: Option<f64>,
    /// New vertical translation, if any.
    pub y: Option<f64>,
    /// New rotation in degrees, if any.
    pub rotation: Option<f64>,
}

impl TransformPatch {
    /// An empty patch.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the scale field.
    #[must_use]
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Sets both translation fields.
    #[must_use]
    pub fn translation(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Sets the rotation field, in degrees.
    #[must_use]
    pub fn rotation(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Returns `true` if any field carries a non-finite value.
    #[must_use]
    pub fn has_non_finite(&self) -> bool {
        [self.scale, self.x, self.y, self.rotation]
            .into_iter()
            .flatten()
            .any(|v| !v.is_finite())
    }
}

/// Wraps an angle in degrees into `(-180, 180]`.
#[must_use]
pub fn normalize_rotation(degrees: f64) -> f64 {
    let wrapped = degrees.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}
