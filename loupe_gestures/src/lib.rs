// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Loupe Gestures: classified gesture events driving a Loupe view.
//!
//! This crate turns discrete, already-classified gesture signals — scroll
//! deltas, pinch scale factors with focal points, fling velocity vectors,
//! taps — into transform and animation calls on a
//! [`ContentView`](loupe_view2d::ContentView). It performs no gesture
//! recognition of its own; wire it to whatever recognizer the host platform
//! provides.
//!
//! The entry point is [`TouchView`], which owns the view model and an
//! [`Animator`](loupe_motion::Animator) and exposes one handler per event
//! kind. Behavior highlights:
//!
//! - Drags pan directly (clamped at the content edges); pinches scale
//!   directly about their focal point for responsiveness.
//! - Double taps walk a zoom cycle: step up by a third of the maximum scale,
//!   jump to the maximum, reset. The cycle is a pure function, see
//!   [`double_tap_target`].
//! - Fast flings (over 800 velocity units/s) pan by half the gesture
//!   distance with an ease-out animation.
//! - Touch-up snaps back to the minimum scale if a pinch left the view
//!   below it.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use loupe_gestures::TouchView;
//! use loupe_view2d::DisplayMode;
//!
//! let mut tv = TouchView::new(Size::new(300.0, 300.0));
//! tv.set_display_mode(DisplayMode::FitToScreen);
//! tv.set_content_size(Size::new(600.0, 600.0));
//!
//! // Double tap to zoom in; advance from the host tick loop.
//! tv.on_double_tap(Point::new(150.0, 150.0), 0.0);
//! let mut now = 0.0;
//! while tv.advance(now) {
//!     now += 16.0;
//! }
//!
//! // Drag while zoomed in; the pan is clamped at the content edges.
//! tv.on_drag(Vec2::new(25.0, 0.0), 1);
//! let display = tv.display_transform();
//! # let _ = display;
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod cycle;
mod touch_view;

pub use cycle::{ZoomCycle, double_tap_target};
pub use touch_view::{
    DOUBLE_TAP_DURATION_MS, FLING_DURATION_MS, FLING_VELOCITY_THRESHOLD, GestureFlags, TouchView,
};
