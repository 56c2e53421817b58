//! Input handlers for the contact form and the help overlay.

use anyhow::Result;
use crossterm::event::{self, KeyCode, KeyModifiers};
use tracing::info;

use crate::content::copy::SUBMIT_THANKS;
use crate::tui::component::Component;
use crate::tui::contact_form::ContactFormEvent;
use crate::tui::help_overlay::HelpOverlayEvent;
use crate::tui::AppState;

/// Handle a key while the contact form has focus.
pub fn handle_form_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        state.should_quit = true;
        return Ok(true);
    }

    match state.form.handle_input(key) {
        Some(ContactFormEvent::Submit) => {
            let submission = state.form.form.submit(state.sink.as_mut());
            state.form.blur();
            info!(id = %submission.id, "Contact form cleared after submit");
            state.set_status(SUBMIT_THANKS);
        }
        Some(ContactFormEvent::Leave) => state.set_status("Left the contact form"),
        None => {}
    }
    Ok(false)
}

/// Handle a key while the help overlay is open.
pub fn handle_help_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if let Some(help) = state.help.as_mut() {
        if let Some(HelpOverlayEvent::Closed) = help.handle_input(key) {
            state.help = None;
        }
    }
    Ok(false)
}
