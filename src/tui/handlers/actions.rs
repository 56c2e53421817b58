//! Action dispatch.

use anyhow::Result;
use tracing::{debug, info};

use crate::shortcuts::Action;
use crate::tui::help_overlay::HelpOverlayState;
use crate::tui::sections::SectionKind;
use crate::tui::{AppState, Theme};

/// Perform `action`. Returns `Ok(true)` to quit.
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    debug!(action = action.id(), "Dispatching action");
    match action {
        Action::ScrollDown => state.page.scroll_by(&state.engine, 1),
        Action::ScrollUp => state.page.scroll_by(&state.engine, -1),
        Action::PageDown => state.page.page_by(&state.engine, 1),
        Action::PageUp => state.page.page_by(&state.engine, -1),
        Action::ScrollToTop => state.page.scroll_to(&state.engine, 0),
        Action::ScrollToBottom => {
            let bottom = state.page.max_scroll();
            state.page.scroll_to(&state.engine, bottom);
        }
        Action::JumpTo(kind) => {
            state.page.jump_to(&state.engine, kind);
            state.set_status(kind.title());
        }
        Action::FocusForm => {
            state.page.jump_to(&state.engine, SectionKind::Contact);
            state.form.focus();
            state.set_status("Typing into the contact form. Esc to leave");
        }
        Action::CycleTheme => {
            state.theme_mode = state.theme_mode.cycle();
            state.theme = Theme::from_mode(state.theme_mode);
            info!(mode = state.theme_mode.as_str(), "Theme changed");
            state.set_status(format!("Theme: {}", state.theme_mode.as_str()));
        }
        Action::ToggleHelp => {
            state.help = if state.help.is_some() {
                None
            } else {
                Some(HelpOverlayState::new(state.help_registry.clone()))
            };
        }
        Action::Quit => {
            state.should_quit = true;
            return Ok(true);
        }
    }
    Ok(false)
}
