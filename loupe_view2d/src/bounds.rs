// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-axis bounds correction for the mapped content rect.
//!
//! Given the content rect under the display transform and the view size,
//! [`correction`] computes the translation that either centers content
//! smaller than the view on an axis or pulls larger content flush against
//! the nearest uncovered edge. [`clamp_pan`] applies the same rule to a
//! proposed drag delta so content cannot be dragged arbitrarily far past
//! its edge.

use kurbo::{Rect, Size, Vec2};

/// Returns the pan correction keeping `content` within or centered in the view.
///
/// Axes are independent: on each axis, content smaller than the view is
/// centered; content larger than the view is pulled flush against whichever
/// edge shows a gap; content fully covering the view needs no correction.
#[must_use]
pub fn correction(content: Rect, viewport: Size) -> Vec2 {
    Vec2::new(
        axis_correction(content.x0, content.x1, viewport.width),
        axis_correction(content.y0, content.y1, viewport.height),
    )
}

/// Clamps a proposed pan delta so the moved content stays in bounds.
///
/// The content rect is mapped as if `delta` were the only requested motion
/// and the per-axis correction of the moved rect is folded back into the
/// returned delta. After applying the result, either the content fully
/// covers the view on an axis or it is exactly centered when smaller.
#[must_use]
pub fn clamp_pan(content: Rect, viewport: Size, delta: Vec2) -> Vec2 {
    let moved = content + delta;
    delta + correction(moved, viewport)
}

fn axis_correction(near: f64, far: f64, extent: f64) -> f64 {
    let span = far - near;
    if span < extent {
        // Smaller than the view: center.
        (extent - span) / 2.0 - near
    } else if near > 0.0 {
        // Gap on the near side.
        -near
    } else if far < extent {
        // Gap on the far side.
        extent - far
    } else {
        0.0
    }
}
