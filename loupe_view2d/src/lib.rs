// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe View 2D: headless pan/zoom transform model for image content.
//!
//! This crate provides a small, headless model of an image surface presented
//! inside a fixed-size view. It focuses on:
//! - The two-matrix composition model: an immutable "fit" base transform and
//!   a mutable user-driven support transform, composed on demand into the
//!   display transform handed to a renderer.
//! - Default/minimum/maximum scale derivation per [`DisplayMode`].
//! - Bounds correction that keeps content centered when smaller than the
//!   view and flush against the edges when larger.
//!
//! It does **not** own any windowing, gesture recognition, decoding, or
//! rendering. Callers are expected to:
//! - Report content/view size and display-mode changes into [`ContentView`].
//! - Feed classified gesture events through a higher layer (see the
//!   `loupe_gestures` crate) or drive the transform primitives directly.
//! - Query [`ContentView::display_transform`] every draw pass.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Size, Vec2};
//! use loupe_view2d::{ContentView, DisplayMode};
//!
//! // 300x300 view showing a 600x600 image, fitted.
//! let mut view = ContentView::new(Size::new(300.0, 300.0));
//! view.set_display_mode(DisplayMode::FitToScreen);
//! view.set_content_size(Size::new(600.0, 600.0));
//!
//! // Zoom in 2x about the view center, then drag; the pan is clamped so the
//! // content cannot leave the view.
//! view.zoom_to(2.0, view.viewport_center());
//! view.pan_by(Vec2::new(-40.0, 0.0));
//!
//! // The matrix a renderer would apply to the content surface.
//! let display = view.display_transform();
//! # let _ = display;
//! ```
//!
//! ## Design notes
//!
//! - The display transform is recomputed on every query and never stored, so
//!   it cannot go stale against the base or support halves.
//! - Transform primitives never clamp; scale-limit policy lives in the
//!   gesture/animation layers, which read [`ContentView::min_scale`] and
//!   [`ContentView::max_scale`].
//! - Degenerate content or view sizes degrade to identity transforms and
//!   no-op operations rather than faults.
//!
//! This crate is `no_std`.

#![no_std]

mod bounds;
mod fit;
mod modes;
mod view;

pub use bounds::{clamp_pan, correction};
pub use fit::{MAX_ZOOM_HEADROOM, default_scale, fit_transform, max_scale, min_scale};
pub use modes::DisplayMode;
pub use view::{ContentView, ContentViewDebugInfo, LayoutOutcome};
