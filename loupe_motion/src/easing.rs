// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic easing curves over a normalized `[0, 1]` progress value.
//!
//! Curves are stateless `time → value` maps: input is the elapsed fraction of
//! an animation, output is the eased fraction of the animated delta. Inputs
//! outside `[0, 1]` are clamped, so a tick that overshoots its deadline lands
//! exactly on the target.

/// Ease-out: fast start, decelerating finish.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) - 1.0;
    t * t * t + 1.0
}

/// Ease-in: slow start, accelerating finish.
#[must_use]
pub fn ease_in_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    t * t * t
}

/// Ease-in-out: slow start and finish, fast middle.
#[must_use]
pub fn ease_in_out_cubic(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t < 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}
