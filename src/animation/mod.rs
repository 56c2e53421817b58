//! Motion engine for the showcase.
//!
//! - [`ease`]: named easing curves
//! - [`tween`]: tweens between [`VisualProps`](crate::models::VisualProps) snapshots and positioned timelines
//! - [`reveal`]: scroll-triggered hidden/visible transitions
//! - [`hover`]: pointer-driven rest/hover transitions
//! - [`effects`]: floating, spin and parallax
//! - [`scope`]: the engine, per-section scopes and listener bookkeeping
//!
//! All time values are seconds as `f32`, matching how the motion design is
//! written down; clock readings are [`std::time::Duration`].

pub mod arena;
pub mod clock;
pub mod ease;
pub mod effects;
pub mod hover;
pub mod reveal;
pub mod scope;
pub mod tween;

pub use arena::{ElementId, TargetArena};
pub use clock::{Clock, ManualClock, SystemClock};
pub use ease::Ease;
pub use effects::{Effect, Floating, Parallax, Spin};
pub use hover::HoverResponder;
pub use reveal::{stagger, stagger_default, Reveal, RevealConfig, RevealState};
pub use scope::{
    AnimatedElement, AnimationScope, Engine, Listener, ListenerKind, MotionSettings, Viewport,
};
pub use tween::{Motion, Position, Timeline, Tween};

/// Quick transitions (hover responses)
pub const DURATION_FAST: f32 = 0.3;
/// Default reveal length
pub const DURATION_NORMAL: f32 = 0.6;
/// Headline reveals
pub const DURATION_SLOW: f32 = 1.2;

/// Default stagger between siblings
pub const STAGGER_NORMAL: f32 = 0.1;
/// Loose stagger between siblings
pub const STAGGER_SLOW: f32 = 0.2;

/// Default reveal boundary: 85% down the viewport.
pub const TRIGGER_START: f32 = 0.85;

/// Enter duration of the icon rotate hover.
pub const HOVER_ICON_IN: f32 = 0.5;

/// Pixels per terminal row.
pub const PX_PER_ROW: f32 = 16.0;
/// Pixels per terminal column.
pub const PX_PER_COL: f32 = 8.0;
