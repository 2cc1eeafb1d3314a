// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The double-tap zoom cycle as a pure transition function.
//!
//! Successive double taps step the scale up by `step` until the next step
//! would pass the maximum, then jump to the maximum and reverse direction;
//! the tap after that drops back to the reset scale and the cycle restarts.

/// Direction of the double-tap zoom cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ZoomCycle {
    /// Successive taps zoom in by one step.
    #[default]
    Expanding,
    /// The next tap resets to the base of the cycle.
    Contracting,
}

/// Returns the next double-tap zoom target and cycle state.
///
/// - While [`ZoomCycle::Expanding`], the target is `current + step` as long
///   as a further step would still fit under `max`; otherwise the target is
///   `max` and the cycle flips to [`ZoomCycle::Contracting`].
/// - While [`ZoomCycle::Contracting`], the target is the literal `1.0` and
///   the cycle flips back to expanding. The reset target is `1.0` rather
///   than the minimum scale, which differs from `min` for content shown
///   below 1:1.
///
/// The returned target is not clamped; callers clamp to `[min, max]`.
#[must_use]
pub fn double_tap_target(current: f64, max: f64, step: f64, cycle: ZoomCycle) -> (f64, ZoomCycle) {
    match cycle {
        ZoomCycle::Contracting => (1.0, ZoomCycle::Expanding),
        ZoomCycle::Expanding if current + 2.0 * step <= max => {
            (current + step, ZoomCycle::Expanding)
        }
        ZoomCycle::Expanding => (max, ZoomCycle::Contracting),
    }
}
