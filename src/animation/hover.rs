//! Pointer hover response.
//!
//! A responder has two targets, rest and hover. Pointer events retarget it:
//! the running tween is dropped and a new one starts from wherever the
//! element currently is. The last event always wins.

use std::time::Duration;

use super::ease::Ease;
use super::tween::{Motion, Tween};
use super::{DURATION_FAST, HOVER_ICON_IN};
use crate::models::VisualProps;

/// Hover animation for one element.
#[derive(Debug, Clone)]
pub struct HoverResponder {
    rest: VisualProps,
    hover: VisualProps,
    enter: Motion,
    leave: Motion,
    hovered: bool,
    tween: Option<Tween>,
}

impl HoverResponder {
    /// Create a responder sitting at `rest`.
    #[must_use]
    pub const fn new(rest: VisualProps, hover: VisualProps, enter: Motion, leave: Motion) -> Self {
        Self {
            rest,
            hover,
            enter,
            leave,
            hovered: false,
            tween: None,
        }
    }

    /// Slight grow, used on call-to-action buttons.
    #[must_use]
    pub const fn button_hover() -> Self {
        let motion = Motion::new(DURATION_FAST, Ease::POWER);
        Self::new(VisualProps::IDENTITY, VisualProps::scaled(1.05), motion, motion)
    }

    /// Lift and grow, used on cards.
    #[must_use]
    pub const fn card_hover() -> Self {
        let motion = Motion::new(DURATION_FAST, Ease::POWER);
        Self::new(
            VisualProps::IDENTITY,
            VisualProps::scaled(1.02).with_offset(0.0, -10.0),
            motion,
            motion,
        )
    }

    /// Full turn with a bounce on enter, quick settle on leave.
    #[must_use]
    pub const fn icon_rotate_hover() -> Self {
        Self::new(
            VisualProps::IDENTITY,
            VisualProps::scaled(1.1).with_rotation(360.0),
            Motion::new(HOVER_ICON_IN, Ease::BOUNCE),
            Motion::new(DURATION_FAST, Ease::POWER),
        )
    }

    /// Grow by 10%, used on stat counters.
    #[must_use]
    pub const fn lift() -> Self {
        let motion = Motion::new(DURATION_FAST, Ease::POWER);
        Self::new(VisualProps::IDENTITY, VisualProps::scaled(1.1), motion, motion)
    }

    /// Custom hover props with the default button timing.
    #[must_use]
    pub const fn to(hover: VisualProps) -> Self {
        let motion = Motion::new(DURATION_FAST, Ease::POWER);
        Self::new(VisualProps::IDENTITY, hover, motion, motion)
    }

    /// Stretch both motions by `factor`.
    #[must_use]
    pub fn scaled(mut self, factor: f32) -> Self {
        self.enter = self.enter.scaled(factor);
        self.leave = self.leave.scaled(factor);
        self
    }

    /// Whether the pointer is currently over the element.
    #[must_use]
    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    /// Pointer entered. Returns `false` if already hovered.
    pub fn pointer_enter(&mut self, now: Duration) -> bool {
        self.retarget(true, now)
    }

    /// Pointer left. Returns `false` if already at rest.
    pub fn pointer_leave(&mut self, now: Duration) -> bool {
        self.retarget(false, now)
    }

    fn retarget(&mut self, hovered: bool, now: Duration) -> bool {
        if self.hovered == hovered {
            return false;
        }
        let current = self.sample(now);
        let (to, motion) = if hovered {
            (self.hover, self.enter)
        } else {
            (self.rest, self.leave)
        };
        self.hovered = hovered;
        self.tween = Some(Tween::new(current, to, now, motion));
        true
    }

    /// Props at `now`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> VisualProps {
        match &self.tween {
            Some(tween) => tween.sample(now),
            None if self.hovered => self.hover,
            None => self.rest,
        }
    }

    /// True while a tween is in flight.
    #[must_use]
    pub fn is_animating(&self, now: Duration) -> bool {
        self.tween.is_some_and(|t| !t.is_finished(now))
    }

    /// Drop a finished tween.
    pub fn tick(&mut self, now: Duration) {
        if self.tween.is_some_and(|t| t.is_finished(now)) {
            self.tween = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(ms: u64) -> Duration {
        Duration::from_millis(ms)
    }

    #[test]
    fn test_enter_reaches_hover() {
        let mut h = HoverResponder::button_hover();
        assert!(h.pointer_enter(at(0)));
        assert!(h.is_animating(at(100)));
        assert_eq!(h.sample(at(400)), VisualProps::scaled(1.05));
        h.tick(at(400));
        assert_eq!(h.sample(at(400)), VisualProps::scaled(1.05));
    }

    #[test]
    fn test_enter_then_leave_settles_at_rest() {
        let mut h = HoverResponder::card_hover();
        h.pointer_enter(at(0));
        h.pointer_leave(at(0));
        assert_eq!(h.sample(at(500)), VisualProps::IDENTITY);
        assert!(!h.is_hovered());
    }

    #[test]
    fn test_leave_mid_enter_starts_from_current() {
        let mut h = HoverResponder::button_hover();
        h.pointer_enter(at(0));
        let mid = h.sample(at(150));
        h.pointer_leave(at(150));
        assert_eq!(h.sample(at(150)), mid);
        assert!(mid.scale > 1.0 && mid.scale < 1.05);
    }

    #[test]
    fn test_repeated_enter_is_noop() {
        let mut h = HoverResponder::icon_rotate_hover();
        assert!(h.pointer_enter(at(0)));
        let before = h.sample(at(200));
        assert!(!h.pointer_enter(at(200)));
        assert_eq!(h.sample(at(200)), before);
        assert!(!HoverResponder::lift().pointer_leave(at(0)));
    }
}
