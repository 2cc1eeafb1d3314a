// Copyright 2026 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Size, Vec2};
use loupe_motion::{Animator, SNAP_BACK_DURATION_MS};
use loupe_view2d::{ContentView, DisplayMode, LayoutOutcome};

use crate::cycle::{ZoomCycle, double_tap_target};

/// Minimum fling velocity, in input-device units per second, below which a
/// fling is ignored.
pub const FLING_VELOCITY_THRESHOLD: f64 = 800.0;

/// Duration of the fling-triggered pan animation.
pub const FLING_DURATION_MS: f64 = 300.0;

/// Duration of the double-tap zoom animation.
pub const DOUBLE_TAP_DURATION_MS: f64 = 200.0;

/// How far below the minimum scale a pinch may temporarily go; the touch-up
/// snap-back recovers the difference.
const PINCH_SOFT_FLOOR: f64 = 0.1;

bitflags::bitflags! {
    /// Which gesture families a [`TouchView`] responds to.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GestureFlags: u8 {
        /// Drag panning and flings.
        const SCROLL     = 0b0000_0001;
        /// Pinch zooming.
        const PINCH      = 0b0000_0010;
        /// The double-tap zoom cycle.
        const DOUBLE_TAP = 0b0000_0100;
    }
}

impl Default for GestureFlags {
    fn default() -> Self {
        Self::all()
    }
}

/// A [`ContentView`] wired to an [`Animator`] and driven by classified
/// gesture events.
///
/// `TouchView` is the integration surface of the engine: the host layout
/// collaborator reports size/mode changes, the host gesture recognizer feeds
/// discrete events (drags, pinch updates, flings, taps), and the renderer
/// queries [`TouchView::display_transform`] each frame. Animations are
/// advanced by calling [`TouchView::advance`] from the host's periodic tick
/// while it returns `true`.
///
/// Event handlers return `true` when the event was consumed. Without
/// content, or with the relevant [`GestureFlags`] bit cleared, they are
/// no-ops returning `false`.
#[derive(Clone, Debug)]
pub struct TouchView {
    view: ContentView,
    animator: Animator,
    flags: GestureFlags,
    cycle: ZoomCycle,
    /// A pinch is between begin and touch-up; drags and flings are ignored
    /// while set.
    pinch_active: bool,
    /// The first pinch update only arms the gesture; set once, like the
    /// recognizer it mirrors.
    pinch_armed: bool,
}

impl TouchView {
    /// Creates a touch view with the given viewport size, no content, and
    /// all gestures enabled.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            view: ContentView::new(viewport),
            animator: Animator::new(),
            flags: GestureFlags::default(),
            cycle: ZoomCycle::default(),
            pinch_active: false,
            pinch_armed: false,
        }
    }

    /// Returns the underlying view model.
    #[must_use]
    pub fn view(&self) -> &ContentView {
        &self.view
    }

    /// Returns the underlying view model mutably, for direct transform work
    /// outside the gesture surface (rotation, flips, programmatic zoom).
    pub fn view_mut(&mut self) -> &mut ContentView {
        &mut self.view
    }

    /// Returns the enabled gesture families.
    #[must_use]
    pub fn gesture_flags(&self) -> GestureFlags {
        self.flags
    }

    /// Sets the enabled gesture families.
    pub fn set_gesture_flags(&mut self, flags: GestureFlags) {
        self.flags = flags;
    }

    /// Assigns new content. Any in-flight animation is discarded and the
    /// double-tap cycle restarts.
    pub fn set_content_size(&mut self, size: Size) -> LayoutOutcome {
        self.set_content_with_transform(size, None)
    }

    /// Assigns new content together with a support transform captured from
    /// the previous content (see [`ContentView::support_transform`]).
    pub fn set_content_with_transform(
        &mut self,
        size: Size,
        transform: Option<Affine>,
    ) -> LayoutOutcome {
        self.animator.cancel();
        self.cycle = ZoomCycle::default();
        self.view.set_content_with_transform(size, transform)
    }

    /// Clears the content; gesture handlers become no-ops.
    pub fn clear_content(&mut self) -> LayoutOutcome {
        self.animator.cancel();
        self.cycle = ZoomCycle::default();
        self.view.clear_content()
    }

    /// Reports a viewport size change from the host layout pass.
    pub fn set_viewport_size(&mut self, size: Size) -> LayoutOutcome {
        self.view.set_viewport_size(size)
    }

    /// Changes the display mode.
    pub fn set_display_mode(&mut self, mode: DisplayMode) -> LayoutOutcome {
        self.view.set_display_mode(mode)
    }

    /// Overrides the scale limits; `None` restores the derived defaults.
    pub fn set_scale_limits(&mut self, min: Option<f64>, max: Option<f64>) {
        self.view.set_scale_limits(min, max);
    }

    /// Returns the composed display transform for the renderer.
    #[must_use]
    pub fn display_transform(&self) -> Affine {
        self.view.display_transform()
    }

    /// Returns the current support scale.
    pub fn scale(&mut self) -> f64 {
        self.view.scale()
    }

    /// Advances in-flight animations to `now` (milliseconds, any monotonic
    /// origin). Returns `true` while anything is still animating.
    pub fn advance(&mut self, now: f64) -> bool {
        self.animator.advance(&mut self.view, now)
    }

    /// Returns `true` while any animation is in flight.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Handles a drag update reporting the scroll distance `(dx, dy)` (the
    /// previous pointer position minus the current one).
    ///
    /// The pan is applied directly, clamped to the content edges. Ignored
    /// while a pinch is in progress or with more than one pointer down.
    pub fn on_drag(&mut self, distance: Vec2, pointer_count: u32) -> bool {
        if !self.can_scroll(pointer_count) {
            return false;
        }
        self.view.set_user_scaled(true);
        self.view.pan_by(-distance);
        true
    }

    /// Handles the start of a pinch gesture.
    pub fn on_pinch_begin(&mut self) {
        self.pinch_active = true;
    }

    /// Handles a pinch update with the incremental scale `factor`, the
    /// `focus` point in view coordinates, and the span change since the
    /// previous update.
    ///
    /// The scale is applied directly for responsiveness, clamped to
    /// `[min_scale - 0.1, max_scale]`; the slack below the minimum is
    /// recovered by the touch-up snap-back. The very first update only arms
    /// the gesture.
    pub fn on_pinch(&mut self, factor: f64, focus: Point, span_delta: f64) -> bool {
        if !self.flags.contains(GestureFlags::PINCH) || !self.has_content() {
            return false;
        }
        if !self.pinch_armed {
            self.pinch_armed = true;
            return true;
        }
        if span_delta == 0.0 {
            return true;
        }

        self.pinch_active = true;
        self.view.set_user_scaled(true);
        let current = self.view.scale();
        let target = (current * factor)
            .max(self.view.min_scale() - PINCH_SOFT_FLOOR)
            .min(self.view.max_scale());
        self.view.post_scale(target / current, focus);
        self.cycle = ZoomCycle::Expanding;
        true
    }

    /// Handles the end of a pinch gesture.
    pub fn on_pinch_end(&mut self) {
        self.pinch_active = false;
    }

    /// Handles a fling from `start` to `end` with the given release
    /// `velocity` (units per second).
    ///
    /// A fast enough fling pans by half the gesture distance over
    /// [`FLING_DURATION_MS`] with an ease-out curve, giving a decelerating
    /// feel. Ignored during a pinch or with multiple pointers.
    pub fn on_fling(
        &mut self,
        start: Point,
        end: Point,
        velocity: Vec2,
        pointer_count: u32,
        now: f64,
    ) -> bool {
        if !self.can_scroll(pointer_count) {
            return false;
        }
        if velocity.x.abs() <= FLING_VELOCITY_THRESHOLD
            && velocity.y.abs() <= FLING_VELOCITY_THRESHOLD
        {
            return false;
        }
        let diff = end - start;
        self.animator
            .animate_pan(&mut self.view, diff / 2.0, FLING_DURATION_MS, now);
        true
    }

    /// Handles a confirmed single tap. No transform effect; the return value
    /// tells the host whether the view would have consumed it.
    pub fn on_single_tap(&mut self) -> bool {
        self.has_content()
    }

    /// Handles a double tap at `at`, stepping the zoom cycle.
    ///
    /// The target comes from [`double_tap_target`] with a step of one third
    /// of the maximum scale, clamped into `[min_scale, max_scale]`, and is
    /// animated over [`DOUBLE_TAP_DURATION_MS`] about the tap point.
    pub fn on_double_tap(&mut self, at: Point, now: f64) -> bool {
        if !self.flags.contains(GestureFlags::DOUBLE_TAP) || !self.has_content() {
            return false;
        }
        self.view.set_user_scaled(true);
        let min = self.view.min_scale();
        let max = self.view.max_scale();
        let step = max / 3.0;
        let current = self.view.scale();
        let (target, next) = double_tap_target(current, max, step, self.cycle);
        self.cycle = next;
        let target = target.max(min).min(max);
        self.animator
            .animate_zoom(&mut self.view, target, at, DOUBLE_TAP_DURATION_MS, now);
        true
    }

    /// Handles the final touch-up of any gesture.
    ///
    /// Ends a pinch in progress; if the scale was left below the minimum
    /// (however it got there), snaps back to the minimum over a short
    /// animation.
    pub fn on_touch_up(&mut self, now: f64) -> bool {
        self.pinch_active = false;
        if self.has_content() && self.view.scale() < self.view.min_scale() {
            let min = self.view.min_scale();
            let center = self.view.viewport_center();
            self.animator
                .animate_zoom(&mut self.view, min, center, SNAP_BACK_DURATION_MS, now);
        }
        true
    }

    fn can_scroll(&self, pointer_count: u32) -> bool {
        self.flags.contains(GestureFlags::SCROLL)
            && !self.pinch_active
            && pointer_count <= 1
            && self.has_content()
    }

    fn has_content(&self) -> bool {
        self.view.content_size().is_some()
    }
}
