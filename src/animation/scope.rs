//! Animation engine and per-section scopes.
//!
//! The [`Engine`] is created once at startup. Each mounted section asks it
//! for an [`AnimationScope`], registers its animated elements there, and
//! reverts the scope when it unmounts. Every event listener a scope acquires
//! is an RAII [`Listener`] recorded in the engine's registry, so
//! [`Engine::active_listeners`] shows whether teardown released everything.

use ratatui::layout::Rect;
use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::{debug, info};

use super::arena::{ElementId, TargetArena};
use super::clock::Clock;
use super::effects::Effect;
use super::hover::HoverResponder;
use super::reveal::{Reveal, RevealConfig, RevealState};
use super::tween::Tween;
use super::{PX_PER_ROW, TRIGGER_START};
use crate::models::VisualProps;

/// Event source a listener is subscribed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    /// Viewport scroll and resize
    Scroll,
    /// Pointer moved onto an element
    PointerEnter,
    /// Pointer moved off an element
    PointerLeave,
}

#[derive(Debug, Default)]
struct ListenerRegistry {
    next_id: u64,
    active: HashMap<u64, ListenerKind>,
    teardowns: usize,
}

/// Handle to one registered listener. Dropping it unregisters it.
pub struct Listener {
    id: u64,
    kind: ListenerKind,
    registry: Rc<RefCell<ListenerRegistry>>,
    released: bool,
}

impl Listener {
    fn acquire(registry: &Rc<RefCell<ListenerRegistry>>, kind: ListenerKind) -> Self {
        let id = {
            let mut reg = registry.borrow_mut();
            reg.next_id += 1;
            let id = reg.next_id;
            reg.active.insert(id, kind);
            id
        };
        Self {
            id,
            kind,
            registry: Rc::clone(registry),
            released: false,
        }
    }

    /// The event source.
    #[must_use]
    pub const fn kind(&self) -> ListenerKind {
        self.kind
    }

    /// Unregister. Returns `false` if already released.
    pub fn release(&mut self) -> bool {
        if self.released {
            return false;
        }
        self.released = true;
        self.registry.borrow_mut().active.remove(&self.id);
        true
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listener")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("released", &self.released)
            .finish()
    }
}

/// Engine-wide motion preferences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSettings {
    /// Reveal trigger boundary as a fraction of viewport height
    pub trigger_start: f32,
    /// Multiplier applied to every duration and delay
    pub duration_scale: f32,
    /// Collapse every animation to its end state
    pub reduced_motion: bool,
}

impl MotionSettings {
    /// The duration multiplier actually applied.
    #[must_use]
    pub fn effective_scale(&self) -> f32 {
        if self.reduced_motion {
            0.0
        } else {
            self.duration_scale.max(0.0)
        }
    }
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            trigger_start: TRIGGER_START,
            duration_scale: 1.0,
            reduced_motion: false,
        }
    }
}

/// The visible slice of the page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Document offset of the viewport's top edge
    pub scroll: f32,
    /// Viewport height
    pub height: f32,
}

impl Viewport {
    /// Viewport from terminal rows.
    #[must_use]
    pub fn from_rows(scroll_rows: u16, height_rows: u16) -> Self {
        Self {
            scroll: f32::from(scroll_rows) * PX_PER_ROW,
            height: f32::from(height_rows) * PX_PER_ROW,
        }
    }
}

/// Owns the animation clock and the listener registry.
pub struct Engine {
    clock: Rc<dyn Clock>,
    registry: Rc<RefCell<ListenerRegistry>>,
    settings: MotionSettings,
}

impl Engine {
    /// Initialize the engine. Call once at startup, before any scope exists.
    pub fn init(clock: Rc<dyn Clock>, settings: MotionSettings) -> Self {
        info!(
            trigger_start = settings.trigger_start,
            duration_scale = settings.duration_scale,
            reduced_motion = settings.reduced_motion,
            "Animation engine initialized"
        );
        Self {
            clock,
            registry: Rc::new(RefCell::new(ListenerRegistry::default())),
            settings,
        }
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Motion preferences.
    #[must_use]
    pub const fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    /// Create an empty scope.
    #[must_use]
    pub fn scope(&self, name: &str) -> AnimationScope {
        debug!(scope = name, "Animation scope created");
        AnimationScope {
            name: name.to_string(),
            clock: Rc::clone(&self.clock),
            registry: Rc::clone(&self.registry),
            settings: self.settings,
            elements: TargetArena::new(),
            listeners: Vec::new(),
            viewport: None,
            reverted: false,
        }
    }

    /// Listeners currently registered across all scopes.
    #[must_use]
    pub fn active_listeners(&self) -> usize {
        self.registry.borrow().active.len()
    }

    /// Registered listeners of one kind.
    #[must_use]
    pub fn listeners_of(&self, kind: ListenerKind) -> usize {
        self.registry
            .borrow()
            .active
            .values()
            .filter(|k| **k == kind)
            .count()
    }

    /// Number of scope teardowns performed so far.
    #[must_use]
    pub fn teardowns(&self) -> usize {
        self.registry.borrow().teardowns
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("settings", &self.settings)
            .field("active_listeners", &self.active_listeners())
            .finish_non_exhaustive()
    }
}

/// One animated element and everything attached to it.
#[derive(Debug, Clone, Default)]
pub struct AnimatedElement {
    /// Document offset of the element's top edge, in pixels
    pub anchor: f32,
    /// Element height in pixels, used for scroll-linked progress
    pub span: f32,
    /// Screen cells from the last layout pass
    pub bounds: Option<Rect>,
    reveal: Option<Reveal>,
    intro: Option<Tween>,
    hover: Option<HoverResponder>,
    effects: Vec<(Effect, Duration)>,
}

impl AnimatedElement {
    /// Composite props: entry animation, then hover, then effects.
    #[must_use]
    pub fn props(&self, now: Duration) -> VisualProps {
        let entry = match (&self.reveal, &self.intro) {
            (Some(reveal), _) => reveal.sample(now),
            (None, Some(intro)) => intro.sample(now),
            (None, None) => VisualProps::IDENTITY,
        };
        let hover = self
            .hover
            .as_ref()
            .map_or(VisualProps::IDENTITY, |h| h.sample(now));
        self.effects
            .iter()
            .fold(entry.compose(&hover), |acc, (effect, since)| {
                acc.compose(&effect.sample(*since, now))
            })
    }

    /// Reveal state, if the element has a reveal.
    #[must_use]
    pub fn reveal_state(&self, now: Duration) -> Option<RevealState> {
        self.reveal.as_ref().map(|r| r.state(now))
    }

    /// Whether the pointer is over the element.
    #[must_use]
    pub fn is_hovered(&self) -> bool {
        self.hover.as_ref().is_some_and(HoverResponder::is_hovered)
    }

    fn top_in(&self, viewport: Viewport) -> f32 {
        self.anchor - viewport.scroll
    }
}

/// Animation context for one mounted section.
///
/// Reverting (explicitly or by dropping) releases every listener and
/// discards every element exactly once.
pub struct AnimationScope {
    name: String,
    clock: Rc<dyn Clock>,
    registry: Rc<RefCell<ListenerRegistry>>,
    settings: MotionSettings,
    elements: TargetArena<AnimatedElement>,
    listeners: Vec<(ElementId, Listener)>,
    viewport: Option<Viewport>,
    reverted: bool,
}

impl AnimationScope {
    /// Scope name, for logging.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current clock time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Register a plain element at document offset `anchor` (pixels). An
    /// element already registered under `key` is replaced and its listeners
    /// are released.
    pub fn add(&mut self, key: &str, anchor: f32) -> ElementId {
        let element = AnimatedElement {
            anchor,
            ..AnimatedElement::default()
        };
        let previous = self.elements.id_of(key);
        let (id, replaced) = self.elements.insert(key, element);
        if let (Some(old), Some(_)) = (previous, replaced) {
            let released = self.release_listeners_of(old);
            debug!(scope = %self.name, key, released, "Replaced element with duplicate key");
        }
        id
    }

    fn release_listeners_of(&mut self, owner: ElementId) -> usize {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != owner);
        before - self.listeners.len()
    }

    /// Register an element that reveals on scroll.
    pub fn add_reveal(&mut self, key: &str, anchor: f32, config: RevealConfig) -> ElementId {
        let id = self.add(key, anchor);
        self.attach_reveal(id, config);
        id
    }

    /// Register an element that responds to hover.
    pub fn add_hover(&mut self, key: &str, anchor: f32, responder: HoverResponder) -> ElementId {
        let id = self.add(key, anchor);
        self.attach_hover(id, responder);
        id
    }

    /// Attach a scroll reveal. The trigger boundary and timing follow the
    /// engine's motion settings.
    pub fn attach_reveal(&mut self, id: ElementId, config: RevealConfig) -> bool {
        let config = config
            .with_start(self.settings.trigger_start)
            .scaled(self.settings.effective_scale());
        let now = self.now();
        let viewport = self.viewport;
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        let mut reveal = Reveal::new(config);
        if let Some(vp) = viewport {
            reveal.update(element.top_in(vp), vp.height, now);
        }
        element.reveal = Some(reveal);
        self.listeners
            .push((id, Listener::acquire(&self.registry, ListenerKind::Scroll)));
        true
    }

    /// Attach hover response.
    pub fn attach_hover(&mut self, id: ElementId, responder: HoverResponder) -> bool {
        let responder = responder.scaled(self.settings.effective_scale());
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        element.hover = Some(responder);
        self.listeners
            .push((id, Listener::acquire(&self.registry, ListenerKind::PointerEnter)));
        self.listeners
            .push((id, Listener::acquire(&self.registry, ListenerKind::PointerLeave)));
        true
    }

    /// Attach a time-driven entry animation (a timeline entry). Ignored when
    /// the element already has a scroll reveal.
    pub fn attach_intro(&mut self, id: ElementId, tween: Tween) -> bool {
        let scale = self.settings.effective_scale();
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        if element.reveal.is_some() {
            return false;
        }
        element.intro = Some(Tween {
            motion: tween.motion.scaled(scale),
            ..tween
        });
        true
    }

    /// Attach a continuous effect, starting now. Reduced motion skips
    /// effects entirely.
    pub fn attach_effect(&mut self, id: ElementId, effect: Effect) -> bool {
        if self.settings.reduced_motion {
            return false;
        }
        let now = self.now();
        let Some(element) = self.elements.get_mut(id) else {
            return false;
        };
        if matches!(effect, Effect::Parallax(_)) {
            self.listeners
                .push((id, Listener::acquire(&self.registry, ListenerKind::Scroll)));
        }
        element.effects.push((effect, now));
        true
    }

    /// Element lookup.
    #[must_use]
    pub fn element(&self, id: ElementId) -> Option<&AnimatedElement> {
        self.elements.get(id)
    }

    /// Element id for a stable key.
    #[must_use]
    pub fn id_of(&self, key: &str) -> Option<ElementId> {
        self.elements.id_of(key)
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// True when no element is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Listeners held by this scope.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn holds(&self, kind: ListenerKind) -> bool {
        self.listeners.iter().any(|(_, l)| l.kind() == kind)
    }

    /// Composite props of an element at the current time.
    #[must_use]
    pub fn props(&self, id: ElementId) -> Option<VisualProps> {
        let now = self.now();
        self.elements.get(id).map(|e| e.props(now))
    }

    /// Composite props by key; unknown keys render at rest.
    #[must_use]
    pub fn props_of(&self, key: &str) -> VisualProps {
        self.id_of(key)
            .and_then(|id| self.props(id))
            .unwrap_or(VisualProps::IDENTITY)
    }

    /// Reveal state by key.
    #[must_use]
    pub fn reveal_state_of(&self, key: &str) -> Option<RevealState> {
        let now = self.now();
        self.elements.by_key(key).and_then(|e| e.reveal_state(now))
    }

    /// Whether the element under `key` is hovered.
    #[must_use]
    pub fn is_hovered(&self, key: &str) -> bool {
        self.elements
            .by_key(key)
            .is_some_and(AnimatedElement::is_hovered)
    }

    /// Record where the element was drawn, for pointer hit-testing.
    pub fn set_bounds(&mut self, id: ElementId, bounds: Rect) {
        if let Some(element) = self.elements.get_mut(id) {
            element.bounds = Some(bounds);
        }
    }

    /// Move an element, e.g. after a resize reflows the page.
    pub fn set_anchor(&mut self, id: ElementId, anchor: f32, span: f32) {
        if let Some(element) = self.elements.get_mut(id) {
            element.anchor = anchor;
            element.span = span;
        }
    }

    /// Dispatch a scroll (or resize) to every reveal and parallax effect.
    /// Returns how many reveals started a transition.
    pub fn on_scroll(&mut self, viewport: Viewport) -> usize {
        self.viewport = Some(viewport);
        if !self.holds(ListenerKind::Scroll) {
            return 0;
        }
        let now = self.now();
        let mut started = 0;
        for (_, _, element) in self.elements.iter_mut() {
            let top = element.top_in(viewport);
            if let Some(reveal) = element.reveal.as_mut() {
                if reveal.update(top, viewport.height, now) {
                    started += 1;
                }
            }
            let span = element.span.max(1.0);
            for (effect, _) in &mut element.effects {
                if let Effect::Parallax(p) = effect {
                    p.set_progress(-top / span, now);
                }
            }
        }
        started
    }

    /// Re-evaluate every trigger against the last known viewport.
    pub fn refresh(&mut self) -> usize {
        match self.viewport {
            Some(vp) => self.on_scroll(vp),
            None => 0,
        }
    }

    /// Dispatch pointer motion at a terminal cell. Returns how many hover
    /// responders changed target.
    pub fn on_pointer(&mut self, column: u16, row: u16) -> usize {
        let enter = self.holds(ListenerKind::PointerEnter);
        let leave = self.holds(ListenerKind::PointerLeave);
        if !enter && !leave {
            return 0;
        }
        let now = self.now();
        let mut changed = 0;
        for (_, _, element) in self.elements.iter_mut() {
            let inside = element.bounds.is_some_and(|b| {
                column >= b.x && column < b.right() && row >= b.y && row < b.bottom()
            });
            if let Some(hover) = element.hover.as_mut() {
                let switched = if inside {
                    enter && hover.pointer_enter(now)
                } else {
                    leave && hover.pointer_leave(now)
                };
                if switched {
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Pointer left the terminal: every hovered element returns to rest.
    pub fn on_pointer_exit(&mut self) -> usize {
        if !self.holds(ListenerKind::PointerLeave) {
            return 0;
        }
        let now = self.now();
        self.elements
            .iter_mut()
            .filter_map(|(_, _, e)| e.hover.as_mut())
            .map(|h| h.pointer_leave(now))
            .filter(|left| *left)
            .count()
    }

    /// Settle finished transitions.
    pub fn tick(&mut self) {
        let now = self.now();
        for (_, _, element) in self.elements.iter_mut() {
            if let Some(reveal) = element.reveal.as_mut() {
                reveal.tick(now);
            }
            if let Some(hover) = element.hover.as_mut() {
                hover.tick(now);
            }
        }
    }

    fn teardown(&mut self) -> usize {
        if self.reverted {
            return 0;
        }
        self.reverted = true;
        let released = self
            .listeners
            .iter_mut()
            .map(|(_, listener)| listener.release())
            .filter(|released| *released)
            .count();
        self.listeners.clear();
        let elements = self.elements.len();
        self.elements.clear();
        self.registry.borrow_mut().teardowns += 1;
        debug!(scope = %self.name, released, elements, "Animation scope reverted");
        released
    }

    /// Release every listener and element. Returns the number of listeners
    /// released.
    pub fn revert(mut self) -> usize {
        self.teardown()
    }
}

impl Drop for AnimationScope {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl fmt::Debug for AnimationScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationScope")
            .field("name", &self.name)
            .field("elements", &self.elements.len())
            .field("listeners", &self.listeners.len())
            .field("reverted", &self.reverted)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::clock::ManualClock;

    fn engine() -> (Rc<ManualClock>, Engine) {
        let clock = Rc::new(ManualClock::new());
        let engine = Engine::init(clock.clone(), MotionSettings::default());
        (clock, engine)
    }

    #[test]
    fn test_listeners_follow_attachments() {
        let (_, engine) = engine();
        let mut scope = engine.scope("solutions");
        let card = scope.add_reveal("card.0", 1000.0, RevealConfig::fade_in_up());
        scope.attach_hover(card, HoverResponder::card_hover());
        assert_eq!(scope.listener_count(), 3);
        assert_eq!(engine.listeners_of(ListenerKind::Scroll), 1);
        assert_eq!(engine.listeners_of(ListenerKind::PointerEnter), 1);
        assert_eq!(engine.active_listeners(), 3);
    }

    #[test]
    fn test_duplicate_key_releases_replaced_listeners() {
        let (_, engine) = engine();
        let mut scope = engine.scope("solutions");
        let first = scope.add_reveal("card.0", 1000.0, RevealConfig::fade_in_up());
        scope.attach_hover(first, HoverResponder::card_hover());
        scope.add_hover("cta", 0.0, HoverResponder::button_hover());
        assert_eq!(engine.active_listeners(), 5);

        let second = scope.add_reveal("card.0", 1200.0, RevealConfig::fade_in_up());
        assert_ne!(first, second);
        assert_eq!(scope.len(), 2);
        assert_eq!(scope.listener_count(), 3);
        assert_eq!(engine.active_listeners(), 3);
        assert_eq!(engine.listeners_of(ListenerKind::PointerEnter), 1);
    }

    #[test]
    fn test_revert_releases_once() {
        let (_, engine) = engine();
        let before = engine.active_listeners();
        let mut scope = engine.scope("hero");
        scope.add_hover("cta", 0.0, HoverResponder::button_hover());
        assert_eq!(scope.revert(), 2);
        assert_eq!(engine.active_listeners(), before);
        assert_eq!(engine.teardowns(), 1);
    }

    #[test]
    fn test_drop_tears_down() {
        let (_, engine) = engine();
        {
            let mut scope = engine.scope("contact");
            scope.add_reveal("form", 0.0, RevealConfig::fade_in_right());
            assert_eq!(engine.active_listeners(), 1);
        }
        assert_eq!(engine.active_listeners(), 0);
        assert_eq!(engine.teardowns(), 1);
    }

    #[test]
    fn test_listener_release_is_idempotent() {
        let (_, engine) = engine();
        let mut listener = Listener::acquire(&engine.registry, ListenerKind::Scroll);
        assert!(listener.release());
        assert!(!listener.release());
        drop(listener);
        assert_eq!(engine.active_listeners(), 0);
    }

    #[test]
    fn test_scroll_reveals_elements_past_boundary() {
        let (clock, engine) = engine();
        let mut scope = engine.scope("portfolio");
        scope.add_reveal("near", 400.0, RevealConfig::fade_in_up());
        scope.add_reveal("far", 5000.0, RevealConfig::fade_in_up());

        let started = scope.on_scroll(Viewport {
            scroll: 0.0,
            height: 800.0,
        });
        assert_eq!(started, 1);
        clock.advance_secs(1.0);
        assert_eq!(scope.props_of("near"), VisualProps::IDENTITY);
        assert_eq!(scope.reveal_state_of("far"), Some(RevealState::Hidden));
    }

    #[test]
    fn test_dispatch_gated_by_listeners() {
        let (_, engine) = engine();
        let mut scope = engine.scope("plain");
        let id = scope.add("static", 0.0);
        scope.set_bounds(id, Rect::new(0, 0, 10, 2));
        assert_eq!(scope.on_scroll(Viewport::from_rows(0, 40)), 0);
        assert_eq!(scope.on_pointer(1, 1), 0);
        assert_eq!(scope.props_of("static"), VisualProps::IDENTITY);
    }

    #[test]
    fn test_pointer_hit_testing() {
        let (clock, engine) = engine();
        let mut scope = engine.scope("hero");
        let id = scope.add_hover("cta", 0.0, HoverResponder::button_hover());
        scope.set_bounds(id, Rect::new(10, 5, 12, 3));

        assert_eq!(scope.on_pointer(0, 0), 0);
        assert_eq!(scope.on_pointer(11, 6), 1);
        assert!(scope.is_hovered("cta"));
        assert_eq!(scope.on_pointer(12, 6), 0);
        assert_eq!(scope.on_pointer(30, 6), 1);
        clock.advance_secs(1.0);
        assert_eq!(scope.props_of("cta"), VisualProps::IDENTITY);
    }

    #[test]
    fn test_reduced_motion_is_instant() {
        let clock = Rc::new(ManualClock::new());
        let engine = Engine::init(
            clock,
            MotionSettings {
                reduced_motion: true,
                ..MotionSettings::default()
            },
        );
        let mut scope = engine.scope("solutions");
        scope.add_reveal("card", 0.0, RevealConfig::scale_in());
        scope.on_scroll(Viewport::from_rows(0, 40));
        assert_eq!(scope.props_of("card"), VisualProps::IDENTITY);
    }

    #[test]
    fn test_refresh_uses_new_anchor() {
        let (clock, engine) = engine();
        let mut scope = engine.scope("technologies");
        let id = scope.add_reveal("row", 2000.0, RevealConfig::fade_in_up());
        scope.on_scroll(Viewport {
            scroll: 0.0,
            height: 800.0,
        });
        assert_eq!(scope.reveal_state_of("row"), Some(RevealState::Hidden));

        scope.set_anchor(id, 100.0, 64.0);
        assert_eq!(scope.refresh(), 1);
        clock.advance_secs(1.0);
        assert_eq!(scope.reveal_state_of("row"), Some(RevealState::Visible));
    }
}
