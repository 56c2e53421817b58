//! Page input handler.

use anyhow::Result;
use crossterm::event;

use crate::shortcuts::{ShortcutRegistry, PAGE};
use crate::tui::AppState;

/// Handle a key while the page has focus.
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let registry = ShortcutRegistry::new();

    if let Some(action) = registry.lookup(PAGE, key) {
        super::dispatch_action(state, action)
    } else {
        Ok(false)
    }
}
