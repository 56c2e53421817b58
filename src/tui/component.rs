//! Component trait pattern for TUI components.
//!
//! Interactive widgets own their state, handle their own keys and draw
//! themselves into a buffer. They report back to the page through events.

use crossterm::event::KeyEvent;
use ratatui::{buffer::Buffer, layout::Rect};

use crate::tui::Theme;

/// A component that can be rendered and handle input.
pub trait Component {
    /// Event type this component can emit
    type Event;

    /// Handle keyboard input.
    ///
    /// Returns `Some(Event)` if the parent has to act on it, `None` if the
    /// key was handled internally.
    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event>;

    /// Draw the component within `area`.
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme);

    /// Whether the component has finished and should be closed.
    fn should_close(&self) -> bool {
        false
    }
}
