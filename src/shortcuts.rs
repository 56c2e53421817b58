//! Centralized shortcut and action system.
//!
//! Key events are looked up per context and turned into [`Action`]s; the
//! handlers only ever dispatch actions. The help text for the same keys lives
//! in `data/help.toml`.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use crate::tui::sections::SectionKind;

/// Context name for page scrolling.
pub const PAGE: &str = "page";

/// Everything a key can do on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === SCROLLING ===
    /// One row down
    ScrollDown,
    /// One row up
    ScrollUp,
    /// One screen down
    PageDown,
    /// One screen up
    PageUp,
    /// First row
    ScrollToTop,
    /// Last row
    ScrollToBottom,
    /// Top of a section
    JumpTo(SectionKind),

    // === CONTACT ===
    /// Move to the contact form and type into it
    FocusForm,

    // === DISPLAY ===
    /// Auto, dark, light
    CycleTheme,
    /// Open or close the help overlay
    ToggleHelp,

    // === GENERAL ===
    /// Leave the app
    Quit,
}

impl Action {
    /// Stable identifier, used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::ScrollDown => "scroll_down",
            Self::ScrollUp => "scroll_up",
            Self::PageDown => "page_down",
            Self::PageUp => "page_up",
            Self::ScrollToTop => "scroll_top",
            Self::ScrollToBottom => "scroll_bottom",
            Self::JumpTo(_) => "jump_to_section",
            Self::FocusForm => "focus_form",
            Self::CycleTheme => "cycle_theme",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Modifiers held
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Binding of a key event. Shift is dropped for characters, whose case
    /// already carries it.
    #[must_use]
    pub fn from_event(event: KeyEvent) -> Self {
        let modifiers = match event.code {
            KeyCode::Char(_) => event.modifiers - KeyModifiers::SHIFT,
            _ => event.modifiers,
        };
        Self {
            code: event.code,
            modifiers,
        }
    }
}

/// Maps key events to actions per context.
#[derive(Debug, Clone)]
pub struct ShortcutRegistry {
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Registry with the default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };
        registry.register_page_shortcuts();
        registry
    }

    fn register_page_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = PAGE;

        // === SCROLLING ===
        self.register(ctx, K::Down, M::NONE, Action::ScrollDown);
        self.register(ctx, K::Char('j'), M::NONE, Action::ScrollDown);
        self.register(ctx, K::Up, M::NONE, Action::ScrollUp);
        self.register(ctx, K::Char('k'), M::NONE, Action::ScrollUp);
        self.register(ctx, K::PageDown, M::NONE, Action::PageDown);
        self.register(ctx, K::Char(' '), M::NONE, Action::PageDown);
        self.register(ctx, K::PageUp, M::NONE, Action::PageUp);
        self.register(ctx, K::Char('g'), M::NONE, Action::ScrollToTop);
        self.register(ctx, K::Home, M::NONE, Action::ScrollToTop);
        self.register(ctx, K::Char('G'), M::NONE, Action::ScrollToBottom);
        self.register(ctx, K::End, M::NONE, Action::ScrollToBottom);

        for (digit, kind) in ('1'..='5').zip(SectionKind::ALL) {
            self.register(ctx, K::Char(digit), M::NONE, Action::JumpTo(kind));
        }

        // === CONTACT ===
        self.register(ctx, K::Char('f'), M::NONE, Action::FocusForm);

        // === DISPLAY ===
        self.register(ctx, K::Char('t'), M::NONE, Action::CycleTheme);
        self.register(ctx, K::Char('?'), M::NONE, Action::ToggleHelp);

        // === GENERAL ===
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
    }

    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Action for a key event in `context`.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_scroll_keys() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup(PAGE, press(KeyCode::Char('j'))), Some(Action::ScrollDown));
        assert_eq!(registry.lookup(PAGE, press(KeyCode::Up)), Some(Action::ScrollUp));
        assert_eq!(registry.lookup(PAGE, press(KeyCode::Char(' '))), Some(Action::PageDown));
    }

    #[test]
    fn test_shifted_g_goes_to_bottom() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup(PAGE, event), Some(Action::ScrollToBottom));
        assert_eq!(registry.lookup(PAGE, press(KeyCode::Char('g'))), Some(Action::ScrollToTop));
    }

    #[test]
    fn test_digits_jump_to_sections() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(PAGE, press(KeyCode::Char('1'))),
            Some(Action::JumpTo(SectionKind::Hero))
        );
        assert_eq!(
            registry.lookup(PAGE, press(KeyCode::Char('5'))),
            Some(Action::JumpTo(SectionKind::Contact))
        );
        assert_eq!(registry.lookup(PAGE, press(KeyCode::Char('6'))), None);
    }

    #[test]
    fn test_quit_bindings() {
        let registry = ShortcutRegistry::new();
        assert_eq!(registry.lookup(PAGE, press(KeyCode::Char('q'))), Some(Action::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(registry.lookup(PAGE, ctrl_c), Some(Action::Quit));
        assert_eq!(registry.lookup("other", ctrl_c), None);
    }

    #[test]
    fn test_question_mark_with_shift() {
        let registry = ShortcutRegistry::new();
        let event = KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT);
        assert_eq!(registry.lookup(PAGE, event), Some(Action::ToggleHelp));
    }
}
