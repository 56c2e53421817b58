//! Contact form editor embedded in the contact section.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::component::Component;
use super::theme::{Theme, Tone, ToneColors};
use crate::models::{ContactField, ContactForm};

/// Width from which name and email sit side by side.
const TWO_COLUMN_WIDTH: u16 = 50;
/// Rows of the message box, borders included.
const MESSAGE_ROWS: u16 = 6;

/// What the page has to do after a key press in the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactFormEvent {
    /// Submit the current values
    Submit,
    /// Give focus back to page scrolling
    Leave,
}

/// Editing state of the contact form.
#[derive(Debug, Clone, Default)]
pub struct ContactFormState {
    /// Field values
    pub form: ContactForm,
    /// Field receiving keystrokes
    pub active: ContactField,
    /// Whether the form has keyboard focus
    pub focused: bool,
}

impl ContactFormState {
    /// Empty, unfocused form.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take keyboard focus, starting at the first field.
    pub fn focus(&mut self) {
        self.focused = true;
        self.active = ContactField::Name;
    }

    /// Release keyboard focus.
    pub fn blur(&mut self) {
        self.focused = false;
    }

    /// Rows the fields need at `width`.
    #[must_use]
    pub const fn height(width: u16) -> u16 {
        if width >= TWO_COLUMN_WIDTH {
            3 + 3 + MESSAGE_ROWS
        } else {
            3 + 3 + 3 + MESSAGE_ROWS
        }
    }

    fn field_areas(area: Rect) -> [(ContactField, Rect); 4] {
        if area.width >= TWO_COLUMN_WIDTH {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(MESSAGE_ROWS),
                ])
                .split(area);
            let top = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[0]);
            [
                (ContactField::Name, top[0]),
                (ContactField::Email, top[1]),
                (ContactField::Company, rows[1]),
                (ContactField::Message, rows[2]),
            ]
        } else {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(3),
                    Constraint::Length(MESSAGE_ROWS),
                ])
                .split(area);
            [
                (ContactField::Name, rows[0]),
                (ContactField::Email, rows[1]),
                (ContactField::Company, rows[2]),
                (ContactField::Message, rows[3]),
            ]
        }
    }

    fn render_field(&self, field: ContactField, area: Rect, buf: &mut Buffer, colors: &ToneColors) {
        let is_active = self.focused && self.active == field;
        let value = self.form.get(field);

        let border_style = if is_active {
            Style::default().fg(colors.accent)
        } else {
            Style::default().fg(colors.muted)
        };
        let (text, style) = if value.is_empty() && !is_active {
            (field.placeholder().to_string(), Style::default().fg(colors.muted))
        } else if is_active {
            (
                format!("{value}_"),
                Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
            )
        } else {
            (value.to_string(), Style::default().fg(colors.text))
        };

        let block = Block::default()
            .title(field.label())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .style(Style::default().bg(colors.surface));

        Paragraph::new(text)
            .style(style)
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}

impl Component for ContactFormState {
    type Event = ContactFormEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match (key.code, key.modifiers) {
            (KeyCode::Enter, KeyModifiers::NONE) => Some(ContactFormEvent::Submit),
            (KeyCode::Esc, _) => {
                self.blur();
                Some(ContactFormEvent::Leave)
            }
            (KeyCode::Tab, KeyModifiers::NONE) => {
                self.active = self.active.next();
                None
            }
            (KeyCode::BackTab, _) => {
                self.active = self.active.previous();
                None
            }
            (KeyCode::Backspace, _) => {
                self.form.field_mut(self.active).pop();
                None
            }
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.form.field_mut(self.active).push(c);
                None
            }
            _ => None,
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let colors = theme.tone(Tone::Inverse);
        for (field, rect) in Self::field_areas(area) {
            self.render_field(field, rect, buf, &colors);
        }
    }

    fn should_close(&self) -> bool {
        !self.focused
    }
}
