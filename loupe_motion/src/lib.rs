// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Motion: easing curves and the pan/zoom animator for Loupe views.
//!
//! This crate provides the time-based half of the Loupe engine:
//! - Stateless cubic easing curves over normalized progress.
//! - [`Animator`], which tweens pan and zoom on a
//!   [`ContentView`](loupe_view2d::ContentView) with at most one live
//!   animation per kind.
//!
//! The animator owns no timer and spawns nothing. The host drives it from
//! whatever periodic callback it has (a frame callback, a UI timer) by
//! passing the current time in milliseconds to [`Animator::advance`]; any
//! monotonic origin works. This keeps the tween math deterministic and
//! testable with a synthetic clock.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use loupe_motion::Animator;
//! use loupe_view2d::{ContentView, DisplayMode};
//!
//! let mut view = ContentView::new(Size::new(300.0, 300.0));
//! view.set_display_mode(DisplayMode::FitToScreen);
//! view.set_content_size(Size::new(600.0, 600.0));
//!
//! let mut animator = Animator::new();
//! let center = view.viewport_center();
//! animator.animate_zoom(&mut view, 2.0, center, 200.0, 0.0);
//!
//! // Host tick loop; re-schedule while `advance` returns true.
//! let mut now = 0.0;
//! while animator.advance(&mut view, now) {
//!     now += 16.0;
//! }
//! assert!((view.scale() - 2.0).abs() < 1e-9);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod animator;
mod easing;

pub use animator::{Animator, SNAP_BACK_DURATION_MS};
pub use easing::{ease_in_cubic, ease_in_out_cubic, ease_out_cubic};
