//! Continuous effects: floating, spinning and scroll-scrubbed parallax.

use std::time::Duration;

use super::ease::Ease;
use super::tween::{secs, Motion, Tween};
use crate::models::VisualProps;

/// Endless up-and-down drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Floating {
    /// Vertical travel in pixels (negative floats upward)
    pub amplitude: f32,
    /// Seconds for one leg of the yoyo
    pub period: f32,
    /// Seconds before the drift begins
    pub delay: f32,
    /// Curve for each leg
    pub ease: Ease,
}

impl Default for Floating {
    fn default() -> Self {
        Self {
            amplitude: -15.0,
            period: 3.0,
            delay: 0.0,
            ease: Ease::SWAY,
        }
    }
}

impl Floating {
    /// Props `elapsed` seconds after the effect was attached.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> VisualProps {
        let t = elapsed - self.delay;
        if t <= 0.0 || self.period <= 0.0 {
            return VisualProps::IDENTITY;
        }
        let cycles = t / self.period;
        let leg = cycles.fract();
        // Odd legs run backwards
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let forward = (cycles.floor() as u64) % 2 == 0;
        let p = if forward { leg } else { 1.0 - leg };
        VisualProps::IDENTITY.with_offset(0.0, self.amplitude * self.ease.apply(p))
    }
}

/// Endless linear rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spin {
    /// Degrees per revolution
    pub degrees: f32,
    /// Seconds per revolution
    pub period: f32,
}

impl Default for Spin {
    fn default() -> Self {
        Self {
            degrees: 360.0,
            period: 10.0,
        }
    }
}

impl Spin {
    /// Props `elapsed` seconds after the effect was attached.
    #[must_use]
    pub fn sample(&self, elapsed: f32) -> VisualProps {
        if elapsed <= 0.0 || self.period <= 0.0 {
            return VisualProps::IDENTITY;
        }
        VisualProps::IDENTITY.with_rotation(self.degrees * (elapsed / self.period).fract())
    }
}

/// Props driven by scroll progress through a span, smoothed over `scrub`
/// seconds so fast scrolling catches up gradually.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    /// Props at the end of the span
    pub to: VisualProps,
    /// Catch-up time in seconds (0.0 follows scroll exactly)
    pub scrub: f32,
    chase: Option<Tween>,
    target: f32,
}

impl Parallax {
    /// Parallax toward `to` with the given scrub.
    #[must_use]
    pub const fn new(to: VisualProps, scrub: f32) -> Self {
        Self {
            to,
            scrub,
            chase: None,
            target: 0.0,
        }
    }

    /// Drift up 100 px across the span.
    #[must_use]
    pub const fn drift() -> Self {
        Self::new(VisualProps::IDENTITY.with_offset(0.0, -100.0), 1.0)
    }

    /// The progress the effect is heading for.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }

    /// Set the scroll progress (clamped to 0.0..=1.0).
    #[allow(clippy::float_cmp)]
    pub fn set_progress(&mut self, progress: f32, now: Duration) {
        let progress = progress.clamp(0.0, 1.0);
        if progress == self.target {
            return;
        }
        let current = self.sample(now);
        let goal = VisualProps::IDENTITY.lerp(&self.to, progress);
        self.target = progress;
        self.chase = Some(Tween::new(
            current,
            goal,
            now,
            Motion::new(self.scrub, Ease::SMOOTH),
        ));
    }

    /// Props at `now`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> VisualProps {
        self.chase.map_or_else(
            || VisualProps::IDENTITY.lerp(&self.to, self.target),
            |t| t.sample(now),
        )
    }
}

/// A continuous effect attached to an element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Yoyo drift
    Floating(Floating),
    /// Constant rotation
    Spin(Spin),
    /// Scroll-linked props
    Parallax(Parallax),
}

impl Effect {
    /// Props at `now` for an effect attached at `since`.
    #[must_use]
    pub fn sample(&self, since: Duration, now: Duration) -> VisualProps {
        let elapsed = secs(now.saturating_sub(since));
        match self {
            Self::Floating(f) => f.sample(elapsed),
            Self::Spin(s) => s.sample(elapsed),
            Self::Parallax(p) => p.sample(now),
        }
    }
}
