//! Reveal, hover and teardown behaviour through the public scope API.

use flizzweb::animation::{
    stagger, HoverResponder, ListenerKind, RevealConfig, RevealState, Viewport, STAGGER_NORMAL,
};
use flizzweb::models::VisualProps;
use ratatui::layout::Rect;

mod fixtures;
use fixtures::*;

/// 30-row viewport at `scroll` rows.
fn viewport(scroll: u16) -> Viewport {
    Viewport::from_rows(scroll, 30)
}

#[test]
fn test_reveal_hidden_then_visible_then_hidden() {
    let (clock, engine) = manual_engine();
    let mut scope = engine.scope("reveal");
    let config = RevealConfig::fade_in_up();
    scope.add_reveal("card", 1000.0, config);

    scope.on_scroll(viewport(0));
    clock.advance_secs(2.0);
    assert_eq!(scope.reveal_state_of("card"), Some(RevealState::Hidden));
    assert_eq!(scope.props_of("card"), config.hidden);

    // Top edge now 200 px into a 480 px viewport
    assert_eq!(scope.on_scroll(viewport(50)), 1);
    clock.advance_secs(0.3);
    assert_eq!(scope.reveal_state_of("card"), Some(RevealState::Transitioning));
    clock.advance_secs(0.4);
    assert_eq!(scope.reveal_state_of("card"), Some(RevealState::Visible));
    assert_eq!(scope.props_of("card"), VisualProps::IDENTITY);

    // Scrolling further keeps the end state
    assert_eq!(scope.on_scroll(viewport(55)), 0);
    assert_eq!(scope.props_of("card"), VisualProps::IDENTITY);

    scope.on_scroll(viewport(0));
    clock.advance_secs(1.0);
    assert_eq!(scope.reveal_state_of("card"), Some(RevealState::Hidden));
    assert_eq!(scope.props_of("card"), config.hidden);
}

#[test]
fn test_hover_enter_then_leave_settles_at_rest() {
    let (clock, engine) = manual_engine();
    let mut scope = engine.scope("hover");
    let id = scope.add_hover("button", 0.0, HoverResponder::button_hover());
    scope.set_bounds(id, Rect::new(10, 5, 20, 3));

    assert_eq!(scope.on_pointer(12, 6), 1);
    assert!(scope.is_hovered("button"));
    assert_eq!(scope.on_pointer(0, 0), 1);
    assert!(!scope.is_hovered("button"));

    clock.advance_secs(1.0);
    scope.tick();
    assert_eq!(scope.props_of("button"), VisualProps::IDENTITY);
}

#[test]
fn test_hover_reaches_hover_target() {
    let (clock, engine) = manual_engine();
    let mut scope = engine.scope("hover");
    let id = scope.add_hover("card", 0.0, HoverResponder::card_hover());
    scope.set_bounds(id, Rect::new(0, 0, 10, 10));

    scope.on_pointer(1, 1);
    clock.advance_secs(1.0);
    let props = scope.props_of("card");
    assert!((props.scale - 1.02).abs() < 1e-4);
    assert!((props.offset_y + 10.0).abs() < 1e-3);
}

#[test]
fn test_stagger_delays_increase() {
    let configs = stagger(vec![RevealConfig::stagger_fade_in(); 4], STAGGER_NORMAL);
    let delays: Vec<f32> = configs.iter().map(|c| c.delay).collect();
    assert!(delays.windows(2).all(|w| w[1] > w[0]));
    assert!((delays[3] - 3.0 * STAGGER_NORMAL).abs() < 1e-6);
}

#[test]
fn test_revert_releases_every_listener_once() {
    let (_, engine) = manual_engine();
    let mut first = engine.scope("first");
    first.add_reveal("a", 0.0, RevealConfig::fade_in_left());
    first.add_hover("b", 0.0, HoverResponder::lift());
    let mut second = engine.scope("second");
    second.add_reveal("c", 0.0, RevealConfig::scale_in());

    assert_eq!(engine.active_listeners(), 4);
    assert_eq!(engine.listeners_of(ListenerKind::PointerEnter), 1);

    assert_eq!(first.revert(), 3);
    assert_eq!(engine.active_listeners(), 1);
    assert_eq!(engine.teardowns(), 1);

    drop(second);
    assert_eq!(engine.active_listeners(), 0);
    assert_eq!(engine.teardowns(), 2);
}
