//! Scroll-triggered reveal.
//!
//! A reveal moves one element between a hidden and a visible state. The
//! trigger boundary sits at `start * viewport_height` from the top of the
//! viewport: once the element's top edge is at or above it the reveal plays
//! forward, and once it drops back below the boundary the reveal reverses.
//!
//! Progress is continuous. Reversing mid-entry (or replaying mid-exit)
//! continues from the current progress, so the element never jumps.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ease::Ease;
use super::tween::secs;
use super::{DURATION_NORMAL, DURATION_SLOW, STAGGER_NORMAL, TRIGGER_START};
use crate::models::VisualProps;

/// Settings for one reveal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    /// Props while hidden. The visible state is always [`VisualProps::IDENTITY`].
    pub hidden: VisualProps,
    /// Transition length in seconds
    pub duration: f32,
    /// Easing curve
    pub ease: Ease,
    /// Delay before a forward play from fully hidden, in seconds
    pub delay: f32,
    /// Trigger boundary as a fraction of viewport height from the top
    pub start: f32,
    /// Jump straight to visible when the element is already past the
    /// boundary on the first observation
    pub skip_if_initially_visible: bool,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self::fade_in_up()
    }
}

impl RevealConfig {
    fn with_hidden(hidden: VisualProps) -> Self {
        Self {
            hidden,
            duration: DURATION_NORMAL,
            ease: Ease::SMOOTH,
            delay: 0.0,
            start: TRIGGER_START,
            skip_if_initially_visible: false,
        }
    }

    /// Fade in while rising 50 px.
    #[must_use]
    pub fn fade_in_up() -> Self {
        Self::with_hidden(VisualProps::IDENTITY.with_offset(0.0, 50.0).with_opacity(0.0))
    }

    /// Fade in while sliding from the left.
    #[must_use]
    pub fn fade_in_left() -> Self {
        Self::with_hidden(VisualProps::IDENTITY.with_offset(-50.0, 0.0).with_opacity(0.0))
    }

    /// Fade in while sliding from the right.
    #[must_use]
    pub fn fade_in_right() -> Self {
        Self::with_hidden(VisualProps::IDENTITY.with_offset(50.0, 0.0).with_opacity(0.0))
    }

    /// Grow from 80% with a slight overshoot.
    #[must_use]
    pub fn scale_in() -> Self {
        Self {
            ease: Ease::BOUNCE,
            ..Self::with_hidden(VisualProps::scaled(0.8).with_opacity(0.0))
        }
    }

    /// Short rise used for grids of siblings; pair with [`stagger`].
    #[must_use]
    pub fn stagger_fade_in() -> Self {
        Self::with_hidden(VisualProps::IDENTITY.with_offset(0.0, 30.0).with_opacity(0.0))
    }

    /// Headline reveal: rises 50 px while unclipping top to bottom.
    #[must_use]
    pub fn text_reveal() -> Self {
        Self {
            duration: DURATION_SLOW,
            ..Self::with_hidden(
                VisualProps::IDENTITY
                    .with_offset(0.0, 50.0)
                    .with_opacity(0.0)
                    .with_clip(0.0),
            )
        }
    }

    /// Builder: set delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Builder: set trigger boundary.
    #[must_use]
    pub const fn with_start(mut self, start: f32) -> Self {
        self.start = start;
        self
    }

    /// Builder: skip the entry animation for initially visible elements.
    #[must_use]
    pub const fn skipping_initial(mut self) -> Self {
        self.skip_if_initially_visible = true;
        self
    }

    /// Stretch duration and delay by `factor` (0.0 makes the reveal instant).
    #[must_use]
    pub fn scaled(self, factor: f32) -> Self {
        let factor = factor.max(0.0);
        Self {
            duration: self.duration * factor,
            delay: self.delay * factor,
            ..self
        }
    }
}

/// Give sibling reveals increasing delays: `delay = base + index * step`.
#[must_use]
pub fn stagger(configs: impl IntoIterator<Item = RevealConfig>, step: f32) -> Vec<RevealConfig> {
    configs
        .into_iter()
        .enumerate()
        .map(|(i, config)| {
            #[allow(clippy::cast_precision_loss)]
            let extra = i as f32 * step;
            config.with_delay(config.delay + extra)
        })
        .collect()
}

/// [`stagger`] with the default 0.1 s step.
#[must_use]
pub fn stagger_default(configs: impl IntoIterator<Item = RevealConfig>) -> Vec<RevealConfig> {
    stagger(configs, STAGGER_NORMAL)
}

/// Externally visible reveal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealState {
    /// At the hidden props
    Hidden,
    /// Moving in either direction
    Transitioning,
    /// At the visible props
    Visible,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    Idle,
    Forward,
    Backward,
}

/// One element's reveal animation.
#[derive(Debug, Clone)]
pub struct Reveal {
    config: RevealConfig,
    /// Linear progress when `anchor` was set
    progress_at: f32,
    anchor: Duration,
    direction: Direction,
    delayed: bool,
    observed: bool,
}

impl Reveal {
    /// Create a reveal already at its hidden state.
    #[must_use]
    pub const fn new(config: RevealConfig) -> Self {
        Self {
            config,
            progress_at: 0.0,
            anchor: Duration::ZERO,
            direction: Direction::Idle,
            delayed: false,
            observed: false,
        }
    }

    /// The settings this reveal was built with.
    #[must_use]
    pub const fn config(&self) -> &RevealConfig {
        &self.config
    }

    /// Linear progress (0.0 hidden, 1.0 visible) at `now`.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        let mut elapsed = secs(now.saturating_sub(self.anchor));
        if self.delayed {
            elapsed -= self.config.delay;
        }
        let step = if self.config.duration > 0.0 {
            elapsed.max(0.0) / self.config.duration
        } else {
            f32::INFINITY
        };
        match self.direction {
            Direction::Idle => self.progress_at,
            Direction::Forward if elapsed < 0.0 => self.progress_at,
            Direction::Forward => (self.progress_at + step).min(1.0),
            Direction::Backward => (self.progress_at - step).max(0.0),
        }
    }

    /// Interpolated props at `now`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> VisualProps {
        let t = self.config.ease.apply(self.progress(now));
        self.config.hidden.lerp(&VisualProps::IDENTITY, t)
    }

    /// State at `now`.
    #[must_use]
    pub fn state(&self, now: Duration) -> RevealState {
        let p = self.progress(now);
        match self.direction {
            Direction::Forward if p < 1.0 => RevealState::Transitioning,
            Direction::Backward if p > 0.0 => RevealState::Transitioning,
            _ if p >= 1.0 => RevealState::Visible,
            _ if p <= 0.0 => RevealState::Hidden,
            _ => RevealState::Transitioning,
        }
    }

    /// Settle a finished transition so later updates start from a clean phase.
    pub fn tick(&mut self, now: Duration) {
        if self.direction == Direction::Idle {
            return;
        }
        let p = self.progress(now);
        let done = match self.direction {
            Direction::Forward => p >= 1.0,
            Direction::Backward => p <= 0.0,
            Direction::Idle => false,
        };
        if done {
            self.progress_at = p;
            self.direction = Direction::Idle;
            self.delayed = false;
        }
    }

    /// Observe the element's top edge, in pixels from the viewport top.
    ///
    /// Returns `true` when this observation started a transition.
    pub fn update(&mut self, top_in_viewport: f32, viewport_height: f32, now: Duration) -> bool {
        self.tick(now);
        let past_boundary = top_in_viewport <= self.config.start * viewport_height;

        if !self.observed {
            self.observed = true;
            if past_boundary && self.config.skip_if_initially_visible {
                self.progress_at = 1.0;
                self.direction = Direction::Idle;
                return false;
            }
        }

        let p = self.progress(now);
        if past_boundary {
            if self.direction == Direction::Forward || (self.direction == Direction::Idle && p >= 1.0) {
                return false;
            }
            self.start(Direction::Forward, p, now);
            true
        } else {
            if self.direction == Direction::Backward || (self.direction == Direction::Idle && p <= 0.0) {
                return false;
            }
            self.start(Direction::Backward, p, now);
            true
        }
    }

    #[allow(clippy::float_cmp)]
    fn start(&mut self, direction: Direction, from: f32, now: Duration) {
        self.delayed = direction == Direction::Forward && from == 0.0 && self.config.delay > 0.0;
        self.progress_at = from;
        self.anchor = now;
        self.direction = direction;
    }
}
