//! Whole-app flows: keys, contact submission and rendering.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use flizzweb::config::{Config, ThemeMode};
use flizzweb::content::ContentRegistry;
use flizzweb::models::{ContactField, ContactForm, Submission};
use flizzweb::services::SubmissionSink;
use flizzweb::tui::sections::SectionKind;
use flizzweb::tui::{self, AppState};
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use std::cell::RefCell;
use std::rc::Rc;

mod fixtures;
use fixtures::*;

/// Sink whose submissions stay readable after it is boxed.
#[derive(Clone, Default)]
struct SharedSink(Rc<RefCell<Vec<Submission>>>);

impl SubmissionSink for SharedSink {
    fn deliver(&mut self, submission: &Submission) {
        self.0.borrow_mut().push(submission.clone());
    }
}

fn app(width: u16, height: u16) -> (Rc<flizzweb::animation::ManualClock>, AppState) {
    let (clock, engine) = manual_engine();
    let mut config = Config::new();
    config.ui.theme_mode = ThemeMode::Dark;
    let registry = ContentRegistry::builtin().unwrap();
    (clock, AppState::new(config, &registry, engine, width, height))
}

fn press(state: &mut AppState, code: KeyCode) -> bool {
    tui::handle_key_event(state, KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|c| c.symbol())
        .collect()
}

#[test]
fn test_contact_submission_clears_all_fields() {
    let (_, state) = app(100, 31);
    let sink = SharedSink::default();
    let mut state = state.with_sink(Box::new(sink.clone()));

    press(&mut state, KeyCode::Char('f'));
    type_text(&mut state, "Ana");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "ana@example.com");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "Hello there");
    press(&mut state, KeyCode::Enter);

    let received = sink.0.borrow();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].form.name, "Ana");
    assert_eq!(received[0].form.email, "ana@example.com");
    assert_eq!(received[0].form.company, "");
    assert_eq!(received[0].form.message, "Hello there");
    assert!(state.form.form.is_empty());
}

#[test]
fn test_single_field_update_leaves_others() {
    let mut form = ContactForm::new();
    form.set(ContactField::Name, "Ana");
    form.set(ContactField::Message, "Hi");
    form.set(ContactField::Email, "a@b.c");
    assert_eq!(form.name, "Ana");
    assert_eq!(form.message, "Hi");
    assert_eq!(form.company, "");
}

#[test]
fn test_keys_scroll_and_jump() {
    let (_, mut state) = app(100, 31);
    press(&mut state, KeyCode::Char('j'));
    assert_eq!(state.page.scroll(), 1);
    press(&mut state, KeyCode::Char('G'));
    assert_eq!(state.page.scroll(), state.page.max_scroll());
    assert!(state.page.is_mounted(SectionKind::Contact));
    press(&mut state, KeyCode::Char('g'));
    assert_eq!(state.page.scroll(), 0);
    assert!(!state.page.is_mounted(SectionKind::Contact));
}

fn mouse(state: &mut AppState, kind: MouseEventKind, column: u16, row: u16) {
    let event = MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    };
    let page_area = Rect::new(0, 0, 100, state.page.viewport_height());
    tui::handlers::handle_mouse_event(state, event, page_area);
}

#[test]
fn test_wheel_releases_hover_under_still_pointer() {
    let (_, mut state) = app(100, 31);
    let hero = state.page.scope(SectionKind::Hero).unwrap();
    let id = hero.id_of("buttons:0").unwrap();
    let button = hero.element(id).unwrap().bounds.unwrap();

    mouse(&mut state, MouseEventKind::Moved, button.x + 1, button.y + 1);
    assert!(state.page.scope(SectionKind::Hero).unwrap().is_hovered("buttons:0"));

    for _ in 0..4 {
        mouse(&mut state, MouseEventKind::ScrollDown, button.x + 1, button.y + 1);
    }
    assert_eq!(state.page.scroll(), 12);
    assert!(!state.page.scope(SectionKind::Hero).unwrap().is_hovered("buttons:0"));

    for _ in 0..4 {
        mouse(&mut state, MouseEventKind::ScrollUp, button.x + 1, button.y + 1);
    }
    assert!(state.page.scope(SectionKind::Hero).unwrap().is_hovered("buttons:0"));
}

#[test]
fn test_render_smoke() {
    let (clock, mut state) = app(100, 31);
    clock.advance_secs(5.0);
    state.tick();

    let mut terminal = Terminal::new(TestBackend::new(100, 31)).unwrap();
    terminal.draw(|f| tui::render(f, &state)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("PRECISE."));
    assert!(text.contains("Home"));
    assert!(text.contains("?: Help"));
}

#[test]
fn test_render_help_overlay() {
    let (_, mut state) = app(100, 40);
    press(&mut state, KeyCode::Char('?'));

    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal.draw(|f| tui::render(f, &state)).unwrap();
    assert!(screen_text(&terminal).contains("Keyboard Shortcuts"));
}

#[test]
fn test_render_narrow_terminal() {
    let (clock, mut state) = app(40, 20);
    clock.advance_secs(5.0);
    press(&mut state, KeyCode::Char('5'));
    clock.advance_secs(5.0);
    state.tick();

    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();
    terminal.draw(|f| tui::render(f, &state)).unwrap();
    assert!(screen_text(&terminal).contains("Contact"));
}
