// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Derivation of the base (fit) transform and of the scale limits.
//!
//! These are pure functions of the content and view sizes. The base transform
//! uniformly scales content so it fits the view on at least one axis and
//! centers it; the limit functions derive the default/minimum/maximum support
//! scale for a given [`DisplayMode`].

use kurbo::{Affine, Size};

use crate::modes::DisplayMode;

/// Headroom multiplier above the "fill both axes" scale used for the default
/// maximum zoom.
pub const MAX_ZOOM_HEADROOM: f64 = 8.0;

/// Returns the base transform fitting `content` into `viewport`.
///
/// The scale is `min(vw/w, vh/h)` and the scaled content is centered. The
/// same rule applies whether content is larger or smaller than the view;
/// "don't upscale small content" is a property of the default scale for
/// [`DisplayMode::FitIfBigger`], not of the base transform.
///
/// Degenerate sizes (any extent `<= 0`, or non-finite) yield the identity.
#[must_use]
pub fn fit_transform(content: Size, viewport: Size) -> Affine {
    if !is_valid(content) || !is_valid(viewport) {
        return Affine::IDENTITY;
    }
    let scale = (viewport.width / content.width).min(viewport.height / content.height);
    let tx = (viewport.width - content.width * scale) / 2.0;
    let ty = (viewport.height - content.height * scale) / 2.0;
    Affine::scale(scale).then_translate((tx, ty).into())
}

/// Returns the default support scale for `mode`.
///
/// `base_scale` is the uniform scale of the base transform
/// (see [`fit_transform`]); `content` is the intrinsic content size, needed
/// only by [`DisplayMode::FillToScreen`].
#[must_use]
pub fn default_scale(mode: DisplayMode, base_scale: f64, content: Size) -> f64 {
    match mode {
        // Cancel the base fit: content at intrinsic 1:1.
        DisplayMode::None => 1.0 / base_scale,
        // The base transform already fits.
        DisplayMode::FitToScreen => 1.0,
        // 1:1 for small content, fit for large content.
        DisplayMode::FitIfBigger => (1.0 / base_scale).min(1.0),
        // Aspect-ratio correction so the shorter content axis fills the view.
        DisplayMode::FillToScreen => {
            if !is_valid(content) {
                return 1.0;
            }
            let aspect = content.width / content.height;
            if aspect < 1.0 { 1.0 / aspect } else { aspect }
        }
    }
}

/// Returns the default minimum support scale: `min(1, 1/base_scale)`.
#[must_use]
pub fn min_scale(base_scale: f64) -> f64 {
    (1.0 / base_scale).min(1.0)
}

/// Returns the default maximum support scale.
///
/// This is the scale at which content would cover the view on both axes,
/// times [`MAX_ZOOM_HEADROOM`], giving pinch-zoom generous range.
#[must_use]
pub fn max_scale(content: Size, viewport: Size) -> f64 {
    if !is_valid(content) || !is_valid(viewport) {
        return 1.0;
    }
    let fw = content.width / viewport.width;
    let fh = content.height / viewport.height;
    fw.max(fh) * MAX_ZOOM_HEADROOM
}

pub(crate) fn is_valid(size: Size) -> bool {
    size.width > 0.0 && size.height > 0.0 && size.width.is_finite() && size.height.is_finite()
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size};

    use super::{default_scale, fit_transform, max_scale, min_scale};
    use crate::modes::DisplayMode;

    #[test]
    fn fit_scale_is_min_axis_ratio_and_centers() {
        let cases = [
            (Size::new(100.0, 100.0), Size::new(300.0, 300.0)),
            (Size::new(600.0, 600.0), Size::new(300.0, 300.0)),
            (Size::new(640.0, 480.0), Size::new(300.0, 500.0)),
            (Size::new(7.0, 1000.0), Size::new(123.0, 45.0)),
        ];
        for (content, viewport) in cases {
            let base = fit_transform(content, viewport);
            let expected =
                (viewport.width / content.width).min(viewport.height / content.height);
            assert!(
                (base.as_coeffs()[0] - expected).abs() < 1e-4,
                "fit scale for {content:?} in {viewport:?}"
            );

            let mapped = base.transform_rect_bbox(Rect::from_origin_size(Point::ORIGIN, content));
            let view_center = Point::new(viewport.width / 2.0, viewport.height / 2.0);
            assert!((mapped.center().x - view_center.x).abs() < 1e-4, "centered x");
            assert!((mapped.center().y - view_center.y).abs() < 1e-4, "centered y");
        }
    }

    #[test]
    fn degenerate_content_yields_identity() {
        let base = fit_transform(Size::new(0.0, 100.0), Size::new(300.0, 300.0));
        assert_eq!(base, kurbo::Affine::IDENTITY);
        let base = fit_transform(Size::new(100.0, -5.0), Size::new(300.0, 300.0));
        assert_eq!(base, kurbo::Affine::IDENTITY);
        let base = fit_transform(Size::new(100.0, 100.0), Size::new(f64::NAN, 300.0));
        assert_eq!(base, kurbo::Affine::IDENTITY);
    }

    #[test]
    fn default_scale_per_mode() {
        let content = Size::new(100.0, 100.0);
        // Small content in a 300x300 view: base scale 3.
        assert!((default_scale(DisplayMode::None, 3.0, content) - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(default_scale(DisplayMode::FitToScreen, 3.0, content), 1.0);
        assert!(
            (default_scale(DisplayMode::FitIfBigger, 3.0, content) - 1.0 / 3.0).abs() < 1e-12
        );
        // Large content: base scale 0.5, FitIfBigger keeps the fit.
        assert_eq!(default_scale(DisplayMode::FitIfBigger, 0.5, content), 1.0);
    }

    #[test]
    fn fill_to_screen_inverts_tall_aspect() {
        let wide = Size::new(200.0, 100.0);
        let tall = Size::new(100.0, 200.0);
        assert!((default_scale(DisplayMode::FillToScreen, 1.0, wide) - 2.0).abs() < 1e-12);
        assert!((default_scale(DisplayMode::FillToScreen, 1.0, tall) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn limit_defaults() {
        // Small content upscaled by base 3 can zoom out to 1:1; large content
        // already fitted never drops below the fit.
        assert_eq!(min_scale(3.0), 1.0 / 3.0);
        assert_eq!(min_scale(0.5), 1.0);
        // 600x600 in 300x300: fill ratio 2, times the headroom.
        let m = max_scale(Size::new(600.0, 600.0), Size::new(300.0, 300.0));
        assert!((m - 16.0).abs() < 1e-12);
    }
}
