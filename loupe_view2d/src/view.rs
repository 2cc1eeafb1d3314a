// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::bounds;
use crate::fit;
use crate::modes::DisplayMode;

/// Outcome of a relayout pass, reported once per relevant transition.
///
/// Hosts can use this in place of content/layout listeners: every setter that
/// may relayout returns the outcome of doing so.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutOutcome {
    /// New content was assigned (or cleared).
    pub content_changed: bool,
    /// The base transform or view geometry changed.
    pub layout_changed: bool,
}

/// Headless pan/zoom view over a rectangular content surface.
///
/// `ContentView` composes two affine transforms:
/// - an immutable-until-recomputed **base** transform fitting and centering
///   content in the view (see [`crate::fit::fit_transform`]), and
/// - a mutable **support** transform accumulating all user-driven
///   scale/pan/rotate/flip since the last reset.
///
/// The display transform handed to a renderer is their composition,
/// re-derived on every call to [`ContentView::display_transform`]; it is
/// never stored, so it can never go stale.
///
/// All scale primitives here are unclamped. Scale-limit policy belongs to
/// the callers (gesture and animation layers); the limits themselves are
/// derived here (see [`ContentView::min_scale`] / [`ContentView::max_scale`]).
#[derive(Clone, Debug)]
pub struct ContentView {
    viewport: Size,
    content: Option<Size>,
    mode: DisplayMode,
    base: Affine,
    supp: Affine,
    /// Support transform to adopt on the next content relayout.
    next_supp: Option<Affine>,
    min_override: Option<f64>,
    max_override: Option<f64>,
    /// Last nonzero decomposed x-scale; guarantees `scale()` is never 0.
    last_scale: f64,
    user_scaled: bool,
}

impl Default for ContentView {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl ContentView {
    /// Creates a view with the given viewport size and no content.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            content: None,
            mode: DisplayMode::default(),
            base: Affine::IDENTITY,
            supp: Affine::IDENTITY,
            next_supp: None,
            min_override: None,
            max_override: None,
            last_scale: 1.0,
            user_scaled: false,
        }
    }

    /// Returns the current viewport size.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Returns the intrinsic content size, if content is set.
    #[must_use]
    pub fn content_size(&self) -> Option<Size> {
        self.content
    }

    /// Returns the current display mode.
    #[must_use]
    pub fn display_mode(&self) -> DisplayMode {
        self.mode
    }

    /// Returns the viewport center, the anchor for centered zooms.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0)
    }

    /// Assigns new content, resetting the support transform to the mode's
    /// default scale.
    pub fn set_content_size(&mut self, size: Size) -> LayoutOutcome {
        self.set_content_with_transform(size, None)
    }

    /// Assigns new content together with a support transform captured from a
    /// previous content instance (see [`ContentView::support_transform`]).
    ///
    /// The transform is adopted during this relayout, preserving the user's
    /// zoom/pan across the content swap.
    pub fn set_content_with_transform(
        &mut self,
        size: Size,
        transform: Option<Affine>,
    ) -> LayoutOutcome {
        self.content = Some(size);
        self.next_supp = transform;
        self.relayout_content();
        LayoutOutcome {
            content_changed: true,
            layout_changed: true,
        }
    }

    /// Clears the content; all transforms return to identity and gesture
    /// operations become no-ops.
    pub fn clear_content(&mut self) -> LayoutOutcome {
        self.content = None;
        self.base = Affine::IDENTITY;
        self.supp = Affine::IDENTITY;
        self.next_supp = None;
        self.last_scale = 1.0;
        self.user_scaled = false;
        LayoutOutcome {
            content_changed: true,
            layout_changed: true,
        }
    }

    /// Sets the viewport size, rebuilding the base transform.
    ///
    /// If the user has not zoomed since the last relayout, the mode's default
    /// scale is re-applied; otherwise the absolute on-screen scale is
    /// preserved by compensating for the base-scale change.
    pub fn set_viewport_size(&mut self, size: Size) -> LayoutOutcome {
        if self.viewport == size {
            return LayoutOutcome::default();
        }
        let delta = size - self.viewport;
        self.viewport = size;

        let Some(content) = self.content else {
            return LayoutOutcome {
                content_changed: false,
                layout_changed: true,
            };
        };

        let old_base = self.base_scale();
        let old_scale = self.scale();
        let old_min = fit::min_scale(old_base);

        self.base = fit::fit_transform(content, self.viewport);
        self.post_translate(Vec2::new(-delta.width, -delta.height));

        let target = if self.user_scaled {
            if (old_scale - old_min).abs() > 0.001 {
                (old_base / self.base_scale()) * old_scale
            } else {
                // Still at the minimum: relayout to the fit scale.
                1.0
            }
        } else {
            fit::default_scale(self.mode, self.base_scale(), content)
        };
        self.zoom_to(self.clamp_scale(target), self.viewport_center());
        self.user_scaled = false;

        LayoutOutcome {
            content_changed: false,
            layout_changed: true,
        }
    }

    /// Sets the display mode. A change relayouts with the new default scale.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> LayoutOutcome {
        if self.mode == mode {
            return LayoutOutcome::default();
        }
        self.mode = mode;
        self.user_scaled = false;
        if self.content.is_some() {
            self.relayout_content();
        }
        LayoutOutcome {
            content_changed: false,
            layout_changed: true,
        }
    }

    /// Overrides the scale limits. `None` restores the derived default for
    /// that bound. Overrides are sticky until changed again.
    pub fn set_scale_limits(&mut self, min: Option<f64>, max: Option<f64>) {
        self.min_override = min;
        self.max_override = max;
    }

    /// Returns the minimum allowed support scale.
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_override
            .unwrap_or_else(|| fit::min_scale(self.base_scale()))
    }

    /// Returns the maximum allowed support scale.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_override.unwrap_or_else(|| match self.content {
            Some(content) => fit::max_scale(content, self.viewport),
            None => 1.0,
        })
    }

    /// Returns the default support scale of the current display mode.
    #[must_use]
    pub fn default_scale(&self) -> f64 {
        match self.content {
            Some(content) => fit::default_scale(self.mode, self.base_scale(), content),
            None => 1.0,
        }
    }

    /// Returns the uniform scale of the base (fit) transform.
    #[must_use]
    pub fn base_scale(&self) -> f64 {
        self.base.as_coeffs()[0]
    }

    /// Returns the current support scale.
    ///
    /// The value is the x-scale coefficient of the support transform. When
    /// the transform momentarily decomposes to a zero or non-finite
    /// coefficient, the last observed good value is returned instead, so the
    /// result is never 0 (and never NaN).
    pub fn scale(&mut self) -> f64 {
        let s = self.current_scale();
        self.last_scale = s;
        s
    }

    fn current_scale(&self) -> f64 {
        let s = self.supp.as_coeffs()[0];
        if s != 0.0 && s.is_finite() {
            s
        } else {
            self.last_scale
        }
    }

    /// Returns the composed display transform (base, then support).
    #[must_use]
    pub fn display_transform(&self) -> Affine {
        self.supp * self.base
    }

    /// Returns a snapshot of the support transform, suitable for re-applying
    /// via [`ContentView::set_content_with_transform`].
    #[must_use]
    pub fn support_transform(&self) -> Affine {
        self.supp
    }

    /// Resets the support transform to identity.
    pub fn reset(&mut self) {
        self.supp = Affine::IDENTITY;
    }

    /// Marks the current scale as user-chosen, so the next viewport relayout
    /// preserves it instead of re-applying the default scale.
    pub fn set_user_scaled(&mut self, user_scaled: bool) {
        self.user_scaled = user_scaled;
    }

    /// Translates the support transform. Zero deltas skip the multiply.
    pub fn post_translate(&mut self, delta: Vec2) {
        if delta.x != 0.0 || delta.y != 0.0 {
            self.supp = self.supp.then_translate(delta);
        }
    }

    /// Scales the support transform by `factor` about `center` in view
    /// coordinates. A factor of exactly 1 skips the multiply.
    pub fn post_scale(&mut self, factor: f64, center: Point) {
        if factor != 1.0 {
            self.supp = scale_about(self.supp, factor, center);
        }
    }

    /// Rotates the support transform by `degrees` about `center` in view
    /// coordinates. A zero angle skips the multiply.
    pub fn post_rotate(&mut self, degrees: f64, center: Point) {
        if degrees != 0.0 {
            self.supp = Affine::rotate_about(degrees.to_radians(), center) * self.supp;
        }
    }

    /// Rotates about the viewport center, refreshing the scale cache first so
    /// a degenerate post-rotation coefficient falls back to the value in
    /// effect now.
    pub fn rotate_by(&mut self, degrees: f64) {
        let _ = self.scale();
        self.post_rotate(degrees, self.viewport_center());
    }

    /// Mirrors the content horizontally about the viewport center.
    pub fn flip_horizontal(&mut self) {
        let _ = self.scale();
        let center = self.viewport_center().to_vec2();
        self.supp = self
            .supp
            .then_translate(-center)
            .then_scale_non_uniform(-1.0, 1.0)
            .then_translate(center);
    }

    /// Scales so the support scale becomes `target`, about `center`.
    ///
    /// Like the other primitives this does not clamp; it does re-center the
    /// content afterwards so a zoom never strands it off-screen.
    pub fn zoom_to(&mut self, target: f64, center: Point) {
        let factor = target / self.scale();
        self.post_scale(factor, center);
        self.center();
    }

    /// Pans by `delta`, clamped so content cannot leave the view, then
    /// re-centers any axis on which the content is smaller than the view.
    pub fn pan_by(&mut self, delta: Vec2) {
        if !self.has_valid_content() {
            return;
        }
        let clamped = bounds::clamp_pan(self.content_rect(), self.viewport, delta);
        self.post_translate(clamped);
        self.center();
    }

    /// Applies the bounds correction for the current display transform.
    pub fn center(&mut self) {
        let c = self.correction();
        if c.x != 0.0 || c.y != 0.0 {
            self.post_translate(c);
        }
    }

    /// Returns the bounds correction for the current display transform.
    #[must_use]
    pub fn correction(&self) -> Vec2 {
        self.correction_with(self.supp)
    }

    /// Returns the bounds correction the view would need under an alternate
    /// support transform. Used by animations to aim at the corrected
    /// destination before reaching it.
    #[must_use]
    pub fn correction_with(&self, support: Affine) -> Vec2 {
        if self.has_valid_content() {
            bounds::correction(self.content_rect_with(support), self.viewport)
        } else {
            Vec2::ZERO
        }
    }

    /// Returns the content rect mapped through the display transform, or a
    /// zero rect when no content is set.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        self.content_rect_with(self.supp)
    }

    fn content_rect_with(&self, support: Affine) -> Rect {
        match self.content {
            // Bounding box of the four mapped corners, as the axis-aligned
            // rect a renderer would cover.
            Some(content) if fit::is_valid(content) => (support * self.base)
                .transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, content)),
            _ => Rect::ZERO,
        }
    }

    fn has_valid_content(&self) -> bool {
        self.content.is_some_and(fit::is_valid)
    }

    // Not `f64::clamp`, which faults on an inverted or non-finite pair; host
    // overrides are arbitrary, and the max bound wins when they cross.
    fn clamp_scale(&self, target: f64) -> f64 {
        target.max(self.min_scale()).min(self.max_scale())
    }

    /// Snapshot of the current view state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ContentViewDebugInfo {
        ContentViewDebugInfo {
            viewport: self.viewport,
            content: self.content,
            mode: self.mode,
            base_scale: self.base_scale(),
            scale: self.current_scale(),
            min_scale: self.min_scale(),
            max_scale: self.max_scale(),
            content_rect: self.content_rect(),
        }
    }

    fn relayout_content(&mut self) {
        let Some(content) = self.content else {
            return;
        };
        self.base = fit::fit_transform(content, self.viewport);
        self.last_scale = 1.0;

        let target = match self.next_supp.take() {
            Some(next) => {
                self.supp = next;
                self.scale()
            }
            None => {
                self.supp = Affine::IDENTITY;
                fit::default_scale(self.mode, self.base_scale(), content)
            }
        };
        let clamped = self.clamp_scale(target);
        if clamped != self.scale() {
            self.zoom_to(clamped, self.viewport_center());
        }
        self.center();
        self.user_scaled = false;
    }
}

/// Debug snapshot of a [`ContentView`] state.
#[derive(Clone, Copy, Debug)]
pub struct ContentViewDebugInfo {
    /// Current viewport size.
    pub viewport: Size,
    /// Intrinsic content size, if any.
    pub content: Option<Size>,
    /// Current display mode.
    pub mode: DisplayMode,
    /// Uniform scale of the base transform.
    pub base_scale: f64,
    /// Current support scale.
    pub scale: f64,
    /// Minimum allowed support scale.
    pub min_scale: f64,
    /// Maximum allowed support scale.
    pub max_scale: f64,
    /// Content rect under the display transform.
    pub content_rect: Rect,
}

fn scale_about(m: Affine, factor: f64, center: Point) -> Affine {
    let c = center.to_vec2();
    m.then_translate(-c).then_scale(factor).then_translate(c)
}

#[cfg(test)]
mod tests {
    use kurbo::{Affine, Point, Size, Vec2};

    use super::ContentView;
    use crate::modes::DisplayMode;

    fn view(content: Size, viewport: Size, mode: DisplayMode) -> ContentView {
        let mut v = ContentView::new(viewport);
        v.set_display_mode(mode);
        v.set_content_size(content);
        v
    }

    fn composed_scale(v: &ContentView) -> f64 {
        v.display_transform().as_coeffs()[0]
    }

    #[test]
    fn fit_if_bigger_shows_small_content_one_to_one() {
        let mut v = view(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitIfBigger,
        );
        assert!((v.base_scale() - 3.0).abs() < 1e-9);
        assert!((v.scale() - 1.0 / 3.0).abs() < 1e-9);
        assert!((composed_scale(&v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn fit_if_bigger_fits_large_content() {
        let mut v = view(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitIfBigger,
        );
        assert!((v.base_scale() - 0.5).abs() < 1e-9);
        assert!((v.scale() - 1.0).abs() < 1e-9);
        assert!((composed_scale(&v) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn none_mode_cancels_base_fit() {
        let v = view(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::None,
        );
        assert!((composed_scale(&v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scale_survives_degenerate_decomposition() {
        let mut v = view(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        v.post_scale(2.0, v.viewport_center());
        assert!((v.scale() - 2.0).abs() < 1e-9);

        // Collapsing the x axis to an exactly zero coefficient must not
        // poison the reported scale; the last good value sticks.
        v.post_scale(0.0, v.viewport_center());
        assert!((v.scale() - 2.0).abs() < 1e-9);

        // Same for a non-finite coefficient.
        v.post_scale(f64::NAN, v.viewport_center());
        let s = v.scale();
        assert!(!s.is_nan());
        assert!((s - 2.0).abs() < 1e-9);
    }

    #[test]
    fn flip_keeps_content_in_view() {
        let mut v = view(
            Size::new(200.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        let before = v.content_rect();
        v.flip_horizontal();
        let after = v.content_rect();
        assert!((before.center().x - after.center().x).abs() < 1e-9);
        assert!((before.width() - after.width()).abs() < 1e-9);
        let s = v.scale();
        assert!(s != 0.0 && !s.is_nan());
    }

    #[test]
    fn zero_delta_mutators_do_not_touch_the_matrix() {
        let mut v = view(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        let before = v.support_transform();
        v.post_translate(Vec2::ZERO);
        v.post_scale(1.0, Point::new(10.0, 10.0));
        v.post_rotate(0.0, Point::new(10.0, 10.0));
        assert_eq!(v.support_transform(), before);
    }

    #[test]
    fn zoom_to_reaches_exact_target_about_focus() {
        let mut v = view(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        v.zoom_to(4.0, Point::new(10.0, 20.0));
        assert!((v.scale() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn pan_is_clamped_to_content_edges() {
        let mut v = view(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        // Zoomed 2x the content is 600px in a 300px view.
        v.zoom_to(2.0, v.viewport_center());
        v.pan_by(Vec2::new(-10_000.0, 0.0));
        let rect = v.content_rect();
        assert!((rect.x1 - 300.0).abs() < 1e-6, "flush right edge: {rect:?}");
        assert!(rect.x0 <= 1e-6);
    }

    #[test]
    fn smaller_content_recenters_after_pan() {
        let mut v = view(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitIfBigger,
        );
        v.pan_by(Vec2::new(50.0, -30.0));
        let rect = v.content_rect();
        assert!((rect.center().x - 150.0).abs() < 1e-6);
        assert!((rect.center().y - 150.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_resize_without_user_zoom_reapplies_default() {
        let mut v = view(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitIfBigger,
        );
        v.set_viewport_size(Size::new(500.0, 500.0));
        // Default for FitIfBigger with base 5 is 1/5: content stays 1:1.
        assert!((composed_scale(&v) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn viewport_resize_preserves_user_scale() {
        let mut v = view(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        v.zoom_to(3.0, v.viewport_center());
        v.set_user_scaled(true);
        let absolute = composed_scale(&v);

        v.set_viewport_size(Size::new(600.0, 300.0));
        assert!((composed_scale(&v) - absolute).abs() < 1e-6);
    }

    #[test]
    fn support_transform_transfers_across_content_swap() {
        let mut v = view(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        v.zoom_to(2.0, v.viewport_center());
        let carried = v.support_transform();

        let outcome = v.set_content_with_transform(Size::new(600.0, 600.0), Some(carried));
        assert!(outcome.content_changed);
        assert!((v.scale() - 2.0).abs() < 1e-9);
    }

    #[test]
    fn no_content_is_inert() {
        let mut v = ContentView::new(Size::new(300.0, 300.0));
        assert_eq!(v.display_transform(), Affine::IDENTITY);
        assert_eq!(v.content_rect(), kurbo::Rect::ZERO);
        v.pan_by(Vec2::new(10.0, 10.0));
        assert_eq!(v.display_transform(), Affine::IDENTITY);
        assert_eq!(v.min_scale(), 1.0);
        assert_eq!(v.max_scale(), 1.0);
    }

    #[test]
    fn degenerate_content_degrades_to_identity() {
        let mut v = ContentView::new(Size::new(300.0, 300.0));
        v.set_content_size(Size::new(0.0, 100.0));
        assert_eq!(v.base_scale(), 1.0);
        assert!((v.scale() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn explicit_limits_are_sticky() {
        let mut v = view(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        v.set_scale_limits(Some(0.75), Some(3.0));
        assert_eq!(v.min_scale(), 0.75);
        assert_eq!(v.max_scale(), 3.0);
        v.set_scale_limits(None, None);
        assert_eq!(v.min_scale(), 1.0);
        assert!((v.max_scale() - 16.0).abs() < 1e-9);
    }

    #[test]
    fn inverted_or_nan_limits_relayout_without_fault() {
        let mut v = view(
            Size::new(600.0, 600.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitToScreen,
        );
        // A crossed pair must not fault; the max bound wins.
        v.set_scale_limits(Some(2.0), Some(1.0));
        v.set_viewport_size(Size::new(400.0, 400.0));
        assert!((v.scale() - 1.0).abs() < 1e-9);

        v.set_scale_limits(Some(f64::NAN), None);
        v.set_content_size(Size::new(500.0, 500.0));
        assert!(v.scale().is_finite());
    }

    #[test]
    fn user_scaled_relayout_at_min_resets_to_fit() {
        let mut v = view(
            Size::new(100.0, 100.0),
            Size::new(300.0, 300.0),
            DisplayMode::FitIfBigger,
        );
        // Shown 1:1, so the support scale sits exactly at the minimum.
        assert!((v.scale() - 1.0 / 3.0).abs() < 1e-9);
        v.set_user_scaled(true);

        // The user never moved off the minimum; the relayout returns to the
        // fit scale instead of preserving the absolute on-screen scale.
        v.set_viewport_size(Size::new(400.0, 400.0));
        assert!((v.scale() - 1.0).abs() < 1e-9);
        assert!((composed_scale(&v) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn layout_outcome_fires_once_per_transition() {
        let mut v = ContentView::new(Size::new(300.0, 300.0));
        let o = v.set_content_size(Size::new(100.0, 100.0));
        assert!(o.content_changed && o.layout_changed);
        let o = v.set_viewport_size(Size::new(300.0, 300.0));
        assert_eq!(o, super::LayoutOutcome::default());
        let o = v.set_viewport_size(Size::new(400.0, 300.0));
        assert!(!o.content_changed && o.layout_changed);
        let o = v.set_display_mode(DisplayMode::None);
        assert_eq!(o, super::LayoutOutcome::default());
        let o = v.set_display_mode(DisplayMode::FitToScreen);
        assert!(o.layout_changed);
    }
}
