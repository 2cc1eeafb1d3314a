// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Vec2};
use loupe_view2d::ContentView;

use crate::easing::{ease_in_out_cubic, ease_out_cubic};

/// Duration of the corrective zoom chained when an animation finishes below
/// the minimum scale, and of the touch-up snap-back.
pub const SNAP_BACK_DURATION_MS: f64 = 50.0;

/// In-flight zoom tween. Scale follows an ease-in-out curve from the start
/// scale to the target; the focal point is pre-corrected at start so the
/// content lands in bounds.
#[derive(Clone, Copy, Debug)]
struct ZoomAnimation {
    start_time: f64,
    duration: f64,
    start_scale: f64,
    delta_scale: f64,
    dest: Point,
}

/// In-flight pan tween. Total displacement follows an ease-out curve; each
/// tick applies the increment since the previous tick as a clamped pan.
#[derive(Clone, Copy, Debug)]
struct PanAnimation {
    start_time: f64,
    duration: f64,
    delta: Vec2,
    applied: Vec2,
}

/// Drives pan and zoom tweens on a [`ContentView`] from an external clock.
///
/// The animator never blocks and owns no timer: the host calls
/// [`Animator::advance`] with the current time (milliseconds, any monotonic
/// origin) on every frame or timer tick. At most one animation per kind is
/// live; starting a new one of the same kind silently replaces the old task
/// and the visual jumps to the new curve at its own elapsed-time zero.
///
/// A zero or negative duration applies the end state instantly. A stalled
/// clock stalls progress; it never faults.
#[derive(Clone, Copy, Debug, Default)]
pub struct Animator {
    zoom: Option<ZoomAnimation>,
    pan: Option<PanAnimation>,
}

impl Animator {
    /// Creates an idle animator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` while any animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.zoom.is_some() || self.pan.is_some()
    }

    /// Discards all in-flight animations without applying their targets.
    pub fn cancel(&mut self) {
        self.zoom = None;
        self.pan = None;
    }

    /// Starts a zoom tween to `target` about `focus`, preempting any running
    /// zoom. The target is capped at the view's maximum scale.
    pub fn animate_zoom(
        &mut self,
        view: &mut ContentView,
        target: f64,
        focus: Point,
        duration_ms: f64,
        now: f64,
    ) {
        let target = target.min(view.max_scale());
        let start_scale = view.scale();

        // Aim at the focal point shifted by the correction the view will need
        // once the target scale is reached, so the tween does not fight the
        // per-tick re-centering.
        let probe = scale_about(view.support_transform(), target, focus);
        let correction = view.correction_with(probe);
        let dest = focus + correction * target;

        if duration_ms <= 0.0 {
            view.zoom_to(target, dest);
            self.finish_zoom(view, now, true);
            return;
        }

        self.zoom = Some(ZoomAnimation {
            start_time: now,
            duration: duration_ms,
            start_scale,
            delta_scale: target - start_scale,
            dest,
        });
    }

    /// Starts a pan tween over `delta`, preempting any running pan.
    pub fn animate_pan(&mut self, view: &mut ContentView, delta: Vec2, duration_ms: f64, now: f64) {
        if duration_ms <= 0.0 {
            view.pan_by(delta);
            self.pan = None;
            return;
        }
        self.pan = Some(PanAnimation {
            start_time: now,
            duration: duration_ms,
            delta,
            applied: Vec2::ZERO,
        });
    }

    /// Advances all in-flight animations to `now`.
    ///
    /// Returns `true` while anything is still animating, so the host knows to
    /// keep scheduling ticks.
    pub fn advance(&mut self, view: &mut ContentView, now: f64) -> bool {
        if let Some(task) = self.zoom {
            let elapsed = (now - task.start_time).min(task.duration);
            let eased = ease_in_out_cubic(elapsed / task.duration);
            view.zoom_to(task.start_scale + task.delta_scale * eased, task.dest);
            if elapsed >= task.duration {
                self.finish_zoom(view, now, false);
            }
        }

        if let Some(task) = &mut self.pan {
            let elapsed = (now - task.start_time).min(task.duration);
            let eased = ease_out_cubic(elapsed / task.duration);
            let value = task.delta * eased;
            let step = value - task.applied;
            task.applied = value;
            let done = elapsed >= task.duration;
            view.pan_by(step);
            if done {
                // Final snap into bounds.
                view.center();
                self.pan = None;
            }
        }

        self.is_animating()
    }

    fn finish_zoom(&mut self, view: &mut ContentView, now: f64, instant: bool) {
        self.zoom = None;
        view.center();
        let min = view.min_scale();
        if view.scale() < min {
            if instant {
                view.zoom_to(min, view.viewport_center());
            } else {
                let center = view.viewport_center();
                self.animate_zoom(view, min, center, SNAP_BACK_DURATION_MS, now);
            }
        }
    }
}

fn scale_about(m: Affine, factor: f64, center: Point) -> Affine {
    let c = center.to_vec2();
    m.then_translate(-c).then_scale(factor).then_translate(c)
}
