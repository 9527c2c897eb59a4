// Copyright 2025 the Pinchview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::bounds::{Bounds, ClampMode, ElasticOffset, content_footprint};
use crate::config::ViewConfig;
use crate::transform::Transform;

/// Floor applied to scales before dividing by them.
const SCALE_EPSILON: f64 = 1e-9;

/// Content of a fixed size, panned, zoomed and rotated inside a container.
///
/// `Viewport` owns the [`Transform`] and keeps it consistent with the
/// configured scale range and translation bounds. It knows nothing about
/// input or animation; those live in higher-level crates that drive it.
///
/// Three coordinate spaces are involved:
/// - *container* space: pixels relative to the container's top-left corner;
/// - *image* space: content pixels, origin at the content's top-left corner;
/// - *local* space: image space re-centred on the content's centre.
///
/// A local point `l` is displayed at `C + t + R(θ)·s·l`, where `C` is the
/// container centre and `t` the translation.
#[derive(Clone, Debug)]
pub struct Viewport {
    config: ViewConfig,
    container: Size,
    content: Size,
    transform: Transform,
    elastic: ElasticOffset,
}

impl Viewport {
    /// Creates a viewport at the configured initial scale, centred.
    ///
    /// The configuration is [normalized](ViewConfig::normalized) first.
    #[must_use]
    pub fn new(config: ViewConfig, container: Size, content: Size) -> Self {
        let config = config.normalized();
        let mut vp = Self {
            config,
            container: usable_size(container, "container").unwrap_or(Size::ZERO),
            content: usable_size(content, "content").unwrap_or(Size::ZERO),
            transform: Transform::new(config.initial_scale, 0.0, 0.0, 0.0),
            elastic: ElasticOffset::default(),
        };
        vp.clamp_translation(ClampMode::Hard);
        vp
    }

    /// Returns the (normalized) configuration.
    #[must_use]
    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// Replaces the configuration, then re-clamps scale and translation.
    pub fn set_config(&mut self, config: ViewConfig) {
        self.config = config.normalized();
        self.transform.scale = self.clamp_scale(self.transform.scale);
        self.clamp_translation(ClampMode::Hard);
    }

    /// Returns the container size.
    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    /// Sets the container size and re-clamps the translation.
    ///
    /// Non-finite or negative sizes are ignored.
    pub fn set_container_size(&mut self, container: Size) {
        let Some(container) = usable_size(container, "container") else {
            return;
        };
        if self.container == container {
            return;
        }
        self.container = container;
        self.clamp_translation(ClampMode::Hard);
    }

    /// Returns the intrinsic (unscaled, unrotated) content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Sets the intrinsic content size and re-clamps the translation.
    ///
    /// Non-finite or negative sizes are ignored.
    pub fn set_content_size(&mut self, content: Size) {
        let Some(content) = usable_size(content, "content") else {
            return;
        };
        if self.content == content {
            return;
        }
        self.content = content;
        self.clamp_translation(ClampMode::Hard);
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Overwrites the transform verbatim.
    ///
    /// Scale is clamped into range; translation is left as given. Callers
    /// follow up with [`Viewport::clamp_translation`]. Non-finite components
    /// are ignored.
    pub fn set_transform(&mut self, transform: Transform) {
        if transform.scale.is_finite() {
            self.transform.scale = self.clamp_scale(transform.scale);
        }
        if transform.x.is_finite() {
            self.transform.x = transform.x;
        }
        if transform.y.is_finite() {
            self.transform.y = transform.y;
        }
        if transform.rotation.is_finite() {
            self.transform.rotation = transform.rotation;
        }
    }

    /// Returns the current translation.
    #[must_use]
    pub fn translation(&self) -> Vec2 {
        self.transform.translation()
    }

    /// Sets the translation without clamping it.
    pub fn set_translation(&mut self, translation: Vec2) {
        if translation.is_finite() {
            self.transform.set_translation(translation);
        }
    }

    /// Sets the scale, clamped into `[min_scale, max_scale]`, without moving
    /// the translation.
    pub fn set_scale(&mut self, scale: f64) {
        if scale.is_finite() {
            self.transform.scale = self.clamp_scale(scale);
        }
    }

    /// Sets the rotation in degrees, unnormalized.
    pub fn set_rotation(&mut self, degrees: f64) {
        if degrees.is_finite() {
            self.transform.rotation = degrees;
        }
    }

    /// Clamps a scale into the configured range.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        scale.clamp(self.config.min_scale, self.config.max_scale)
    }

    /// Returns the container centre in container coordinates.
    #[must_use]
    pub fn container_center(&self) -> Point {
        Point::new(self.container.width / 2.0, self.container.height / 2.0)
    }

    /// Axis-aligned size of the content at the current scale and rotation.
    #[must_use]
    pub fn footprint(&self) -> Size {
        content_footprint(
            self.content,
            self.transform.scale,
            self.transform.rotation,
        )
    }

    /// True translation bounds for the current scale and rotation.
    ///
    /// Recomputed on every call; never cached across a mutation.
    #[must_use]
    pub fn bounds(&self) -> Bounds {
        Bounds::for_footprint(self.footprint(), self.container, self.config.bounds_padding)
    }

    /// Bounds used by a clamp in `mode`: the true bounds, widened by the
    /// running elastic offset for [`ClampMode::Elastic`].
    #[must_use]
    pub fn effective_bounds(&self, mode: ClampMode) -> Bounds {
        let bounds = self.bounds();
        if self.is_elastic(mode) {
            bounds.widened_by(self.elastic.get())
        } else {
            bounds
        }
    }

    /// Returns the running elastic offset.
    #[must_use]
    pub fn elastic_offset(&self) -> Vec2 {
        self.elastic.get()
    }

    /// Clears the running elastic offset.
    pub fn reset_elastic(&mut self) {
        self.elastic.reset();
    }

    /// Clamps a translation into range.
    ///
    /// [`ClampMode::Elastic`] updates the running elastic offset;
    /// [`ClampMode::Hard`] clears it.
    pub fn clamp_position(&mut self, translation: Vec2, mode: ClampMode) -> Vec2 {
        let bounds = self.bounds();
        if self.is_elastic(mode) {
            self.elastic.clamp(translation, &bounds, &self.config)
        } else {
            self.elastic.reset();
            bounds.clamp(translation)
        }
    }

    /// Clamps the current translation into range in place.
    pub fn clamp_translation(&mut self, mode: ClampMode) {
        let clamped = self.clamp_position(self.translation(), mode);
        self.transform.set_translation(clamped);
    }

    /// Returns `true` if the translation lies outside the true bounds.
    #[must_use]
    pub fn is_out_of_bounds(&self) -> bool {
        !self.bounds().contains(self.translation())
    }

    /// The in-bounds translation closest to the current one.
    #[must_use]
    pub fn nearest_in_bounds(&self) -> Vec2 {
        self.bounds().clamp(self.translation())
    }

    /// Changes scale and rotation so that `pivot` (container coordinates)
    /// stays visually fixed.
    ///
    /// `new_scale` is clamped into range. The translation is left unclamped.
    /// Returns `false`, changing nothing, when neither scale nor rotation
    /// would change or when an input is not finite.
    pub fn apply_around_pivot(&mut self, pivot: Point, new_scale: f64, new_rotation: f64) -> bool {
        if !pivot.is_finite() || !new_scale.is_finite() || !new_rotation.is_finite() {
            return false;
        }
        let new_scale = self.clamp_scale(new_scale);
        if new_scale == self.transform.scale && new_rotation == self.transform.rotation {
            return false;
        }

        let local = self.container_to_local(pivot);
        let center = self.container_center().to_vec2();
        let displaced = rotate_vec(local * new_scale, new_rotation);
        let translation = pivot.to_vec2() - center - displaced;

        self.transform.scale = new_scale;
        self.transform.rotation = new_rotation;
        self.transform.set_translation(translation);
        true
    }

    /// Converts a container point into image coordinates.
    #[must_use]
    pub fn container_to_image(&self, pt: Point) -> Point {
        let half = Vec2::new(self.content.width / 2.0, self.content.height / 2.0);
        (self.container_to_local(pt) + half).to_point()
    }

    /// Converts an image point into container coordinates.
    #[must_use]
    pub fn image_to_container(&self, pt: Point) -> Point {
        self.image_to_container_affine() * pt
    }

    /// Affine map from image space to container space.
    #[must_use]
    pub fn image_to_container_affine(&self) -> Affine {
        let t = &self.transform;
        let half = Vec2::new(self.content.width / 2.0, self.content.height / 2.0);
        Affine::translate(self.container_center().to_vec2() + t.translation())
            * Affine::rotate(t.rotation.to_radians())
            * Affine::scale(t.scale.max(SCALE_EPSILON))
            * Affine::translate(-half)
    }

    /// The displayed content's axis-aligned bounding box, in container
    /// coordinates.
    #[must_use]
    pub fn viewport_bounds(&self) -> Rect {
        let affine = self.image_to_container_affine();
        let w = self.content.width;
        let h = self.content.height;
        let corners = [
            affine * Point::new(0.0, 0.0),
            affine * Point::new(w, 0.0),
            affine * Point::new(0.0, h),
            affine * Point::new(w, h),
        ];
        let mut min = corners[0];
        let mut max = corners[0];
        for p in &corners[1..] {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Rect::from_points(min, max)
    }

    /// Snapshot of the current viewport state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            container: self.container,
            content: self.content,
            transform: self.transform,
            footprint: self.footprint(),
            bounds: self.bounds(),
            elastic_offset: self.elastic.get(),
            viewport_bounds: self.viewport_bounds(),
        }
    }

    fn is_elastic(&self, mode: ClampMode) -> bool {
        mode == ClampMode::Elastic && self.config.elastic
    }

    /// Undo translation, rotation and scale, in that order.
    fn container_to_local(&self, pt: Point) -> Vec2 {
        let t = &self.transform;
        let offset = pt.to_vec2() - self.container_center().to_vec2() - t.translation();
        rotate_vec(offset, -t.rotation) / t.scale.max(SCALE_EPSILON)
    }
}

fn usable_size(size: Size, what: &str) -> Option<Size> {
    if size.is_finite() && size.width >= 0.0 && size.height >= 0.0 {
        Some(size)
    } else {
        log::warn!("ignoring unusable {what} size {size:?}");
        None
    }
}

fn rotate_vec(v: Vec2, degrees: f64) -> Vec2 {
    let (sin, cos) = degrees.to_radians().sin_cos();
    Vec2::new(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Clone, Copy, Debug)]
pub struct ViewportDebugInfo {
    /// Container size.
    pub container: Size,
    /// Intrinsic content size.
    pub content: Size,
    /// Current transform.
    pub transform: Transform,
    /// Axis-aligned size of the scaled and rotated content.
    pub footprint: Size,
    /// True translation bounds.
    pub bounds: Bounds,
    /// Running elastic offset.
    pub elastic_offset: Vec2,
    /// Displayed content bounding box in container coordinates.
    pub viewport_bounds: Rect,
}
