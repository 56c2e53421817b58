//! Property tweens and positioned timelines.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

use super::ease::Ease;
use crate::models::VisualProps;

/// Seconds as `f32`, the unit every animation setting uses.
#[must_use]
pub fn secs(d: Duration) -> f32 {
    d.as_secs_f32()
}

/// Timing of one animated change: how long, which curve, how late.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Motion {
    /// Duration in seconds
    pub duration: f32,
    /// Easing curve
    pub ease: Ease,
    /// Delay before the change starts, in seconds
    pub delay: f32,
}

impl Motion {
    /// Motion with no delay.
    #[must_use]
    pub const fn new(duration: f32, ease: Ease) -> Self {
        Self {
            duration,
            ease,
            delay: 0.0,
        }
    }

    /// Builder: set delay.
    #[must_use]
    pub const fn with_delay(mut self, delay: f32) -> Self {
        self.delay = delay;
        self
    }

    /// Stretch (or with 0.0, collapse) duration and delay by `factor`.
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

impl Default for Motion {
    fn default() -> Self {
        Self::new(super::DURATION_NORMAL, Ease::SMOOTH)
    }
}

/// A single interpolation between two property snapshots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    /// Props at progress 0
    pub from: VisualProps,
    /// Props at progress 1
    pub to: VisualProps,
    /// Clock time the tween was started
    pub start: Duration,
    /// Timing
    pub motion: Motion,
}

impl Tween {
    /// Start a tween at `start`.
    #[must_use]
    pub const fn new(from: VisualProps, to: VisualProps, start: Duration, motion: Motion) -> Self {
        Self {
            from,
            to,
            start,
            motion,
        }
    }

    /// Linear progress in 0.0..=1.0. Zero-length tweens complete immediately.
    #[must_use]
    pub fn progress(&self, now: Duration) -> f32 {
        let elapsed = secs(now.saturating_sub(self.start)) - self.motion.delay;
        if elapsed < 0.0 {
            return 0.0;
        }
        if self.motion.duration <= 0.0 {
            return 1.0;
        }
        (elapsed / self.motion.duration).min(1.0)
    }

    /// Interpolated props at `now`.
    #[must_use]
    pub fn sample(&self, now: Duration) -> VisualProps {
        let t = self.motion.ease.apply(self.progress(now));
        self.from.lerp(&self.to, t)
    }

    /// True once the tween has reached `to`.
    #[must_use]
    pub fn is_finished(&self, now: Duration) -> bool {
        self.progress(now) >= 1.0
    }

    /// Clock time at which the tween completes.
    #[must_use]
    pub fn end(&self) -> Duration {
        self.start
            + Duration::from_secs_f32((self.motion.delay + self.motion.duration).max(0.0))
    }
}

/// Where a timeline entry starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Position {
    /// Seconds from the timeline start
    At(f32),
    /// Seconds relative to the current end of the timeline (`"-=0.6"` is `After(-0.6)`)
    After(f32),
}

impl Default for Position {
    fn default() -> Self {
        Self::After(0.0)
    }
}

impl FromStr for Position {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parse = |v: &str| {
            v.trim()
                .parse::<f32>()
                .with_context(|| format!("Invalid timeline position '{s}'"))
        };
        if let Some(rest) = s.strip_prefix("-=") {
            Ok(Self::After(-parse(rest)?))
        } else if let Some(rest) = s.strip_prefix("+=") {
            Ok(Self::After(parse(rest)?))
        } else {
            Ok(Self::At(parse(s)?))
        }
    }
}

#[derive(Debug, Clone)]
struct Entry {
    label: &'static str,
    from: VisualProps,
    to: VisualProps,
    motion: Motion,
    offset: f32,
    count: usize,
    stagger: f32,
}

impl Entry {
    fn end(&self) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let spread = self.count.saturating_sub(1) as f32 * self.stagger;
        self.offset + spread + self.motion.duration
    }
}

/// A sequence of labelled tweens placed on a shared time axis.
///
/// Entries hold their `from` state until their start time, so a timeline can
/// be sampled from the first frame without anything flashing in its final
/// state.
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    delay: f32,
    entries: Vec<Entry>,
}

impl Timeline {
    /// Empty timeline that starts after `delay` seconds.
    #[must_use]
    pub const fn new(delay: f32) -> Self {
        Self {
            delay,
            entries: Vec::new(),
        }
    }

    /// Append a single-target entry.
    pub fn add(
        &mut self,
        label: &'static str,
        from: VisualProps,
        to: VisualProps,
        motion: Motion,
        position: Position,
    ) -> &mut Self {
        self.add_staggered(label, from, to, motion, 1, 0.0, position)
    }

    /// Append an entry animating `count` targets, each `stagger` seconds
    /// after the previous.
    #[allow(clippy::too_many_arguments)]
    pub fn add_staggered(
        &mut self,
        label: &'static str,
        from: VisualProps,
        to: VisualProps,
        motion: Motion,
        count: usize,
        stagger: f32,
        position: Position,
    ) -> &mut Self {
        let offset = match position {
            Position::At(t) => t,
            Position::After(rel) => self.duration_without_delay() + rel,
        }
        .max(0.0)
            + motion.delay;
        self.entries.push(Entry {
            label,
            from,
            to,
            motion: Motion { delay: 0.0, ..motion },
            offset,
            count: count.max(1),
            stagger,
        });
        self
    }

    fn duration_without_delay(&self) -> f32 {
        self.entries.iter().map(Entry::end).fold(0.0, f32::max)
    }

    /// Total length including the initial delay.
    #[must_use]
    pub fn duration(&self) -> f32 {
        self.delay + self.duration_without_delay()
    }

    /// Seconds from timeline start at which target `index` of `label` begins.
    #[must_use]
    pub fn start_of(&self, label: &str, index: usize) -> Option<f32> {
        let entry = self.entries.iter().find(|e| e.label == label)?;
        #[allow(clippy::cast_precision_loss)]
        let stagger = index.min(entry.count - 1) as f32 * entry.stagger;
        Some(self.delay + entry.offset + stagger)
    }

    /// Materialize the tween for target `index` of `label`, with the timeline
    /// starting at clock time `origin`.
    #[must_use]
    pub fn tween_for(&self, label: &str, index: usize, origin: Duration) -> Option<Tween> {
        let entry = self.entries.iter().find(|e| e.label == label)?;
        let delay = self.start_of(label, index)?;
        Some(Tween::new(
            entry.from,
            entry.to,
            origin,
            entry.motion.with_delay(delay),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden() -> VisualProps {
        VisualProps::IDENTITY.with_opacity(0.0)
    }

    #[test]
    fn test_tween_holds_from_during_delay() {
        let t = Tween::new(
            hidden(),
            VisualProps::IDENTITY,
            Duration::from_secs(1),
            Motion::new(0.5, Ease::Linear).with_delay(0.5),
        );
        assert_eq!(t.sample(Duration::ZERO), hidden());
        assert_eq!(t.sample(Duration::from_millis(1400)), hidden());
        assert_eq!(t.sample(Duration::from_secs(2)), VisualProps::IDENTITY);
        assert_eq!(t.end(), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_duration_completes_immediately() {
        let t = Tween::new(
            hidden(),
            VisualProps::IDENTITY,
            Duration::ZERO,
            Motion::new(0.0, Ease::SMOOTH),
        );
        assert!(t.is_finished(Duration::ZERO));
        assert_eq!(t.sample(Duration::ZERO), VisualProps::IDENTITY);
    }

    #[test]
    fn test_position_parse() {
        assert_eq!("-=0.6".parse::<Position>().unwrap(), Position::After(-0.6));
        assert_eq!("+=1".parse::<Position>().unwrap(), Position::After(1.0));
        assert_eq!("2".parse::<Position>().unwrap(), Position::At(2.0));
        assert!("soon".parse::<Position>().is_err());
    }

    #[test]
    fn test_timeline_overlap_positions() {
        let mut tl = Timeline::new(0.5);
        let id = VisualProps::IDENTITY;
        tl.add("title", hidden(), id, Motion::new(1.2, Ease::SMOOTH), Position::default())
            .add("subtitle", hidden(), id, Motion::new(1.0, Ease::SMOOTH), Position::After(-0.6));

        assert!((tl.start_of("title", 0).unwrap() - 0.5).abs() < 1e-6);
        // 0.5 delay + 1.2 title end - 0.6 overlap
        assert!((tl.start_of("subtitle", 0).unwrap() - 1.1).abs() < 1e-6);
        assert!((tl.duration() - 2.1).abs() < 1e-6);
        assert!(tl.start_of("missing", 0).is_none());
    }

    #[test]
    fn test_timeline_stagger() {
        let mut tl = Timeline::new(0.0);
        tl.add_staggered(
            "icons",
            hidden(),
            VisualProps::IDENTITY,
            Motion::new(1.0, Ease::Linear),
            4,
            0.2,
            Position::At(0.0),
        );
        assert!((tl.start_of("icons", 3).unwrap() - 0.6).abs() < 1e-6);
        assert!((tl.duration() - 1.6).abs() < 1e-6);

        let tween = tl.tween_for("icons", 2, Duration::ZERO).unwrap();
        assert_eq!(tween.sample(Duration::from_millis(300)), hidden());
        assert!(tween.is_finished(Duration::from_millis(1500)));
    }
}
