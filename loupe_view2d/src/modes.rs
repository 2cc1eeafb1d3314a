// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the default scale of newly laid out content is derived.
///
/// The mode only affects the scale applied when content or the view size
/// changes; once the user has zoomed, the current scale is preserved where
/// possible (see [`crate::ContentView::set_viewport_size`]).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DisplayMode {
    /// Content is shown at its intrinsic 1:1 pixel scale.
    #[default]
    None,
    /// Content is always scaled to fit the view bounds.
    FitToScreen,
    /// Content is scaled down to fit if bigger than the view, and shown 1:1
    /// (never upscaled past intrinsic size) if smaller.
    FitIfBigger,
    /// Content is scaled so the shorter content axis fills the view
    /// (crop-to-fill).
    FillToScreen,
}
