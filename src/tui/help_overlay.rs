//! Help overlay listing every keyboard shortcut by context.
//!
//! Opened with `?`, scrollable, closed with `?`, `Esc` or `q`.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation,
        ScrollbarState, StatefulWidget, Widget, Wrap,
    },
};

use super::component::Component;
use super::help_registry::HelpRegistry;
use super::Theme;

/// Width of the key column.
const KEY_COLUMN: usize = 22;

/// What the app has to do after a key in the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HelpOverlayEvent {
    /// Close the overlay
    Closed,
}

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    total_lines: usize,
    registry: HelpRegistry,
    closed: bool,
}

impl HelpOverlayState {
    /// Overlay over the bindings in `registry`.
    #[must_use]
    pub fn new(registry: HelpRegistry) -> Self {
        let total_lines = Self::help_content(&registry, &Theme::dark()).len();
        Self {
            scroll_offset: 0,
            total_lines,
            registry,
            closed: false,
        }
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    fn help_content(registry: &HelpRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::from(Span::styled(
                format!("{} - Keyboard Shortcuts", registry.app_name()),
                Style::default().fg(theme.primary).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];

        for section in registry.sections() {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("═══ {} ═══", section.name.to_uppercase()),
                    Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  {}", section.description),
                    Style::default().fg(theme.text_muted),
                ),
            ]));
            lines.push(Line::from(""));
            for entry in &section.entries {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<KEY_COLUMN$}", entry.key_label()),
                        Style::default().fg(theme.success),
                    ),
                    Span::styled(entry.action.clone(), Style::default().fg(theme.text)),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Press '?' to close help • Press ↑↓ to scroll",
            Style::default().fg(theme.text_muted),
        )));
        lines
    }

    /// Centered modal area inside `area` (60% width, 80% height).
    #[must_use]
    pub fn modal_area(area: Rect) -> Rect {
        let width = (area.width * 60 / 100).max(40.min(area.width));
        let height = area.height * 80 / 100;
        Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        }
    }
}

impl Component for HelpOverlayState {
    type Event = HelpOverlayEvent;

    fn handle_input(&mut self, key: KeyEvent) -> Option<Self::Event> {
        match key.code {
            KeyCode::Char('?' | 'q') | KeyCode::Esc => {
                self.closed = true;
                Some(HelpOverlayEvent::Closed)
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                None
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.scroll_to_top();
                None
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.scroll_to_bottom();
                None
            }
            _ => None,
        }
    }

    fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme) {
        let modal = Self::modal_area(area);
        Clear.render(modal, buf);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(modal);

        let content_area = chunks[0];
        let visible_height = usize::from(content_area.height.saturating_sub(2));
        let offset = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);

        Paragraph::new(Self::help_content(&self.registry, theme))
            .block(
                Block::default()
                    .title(" Help - Keyboard Shortcuts ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(theme.primary)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((offset, 0))
            .render(content_area, buf);

        let mut scrollbar_state = ScrollbarState::new(self.total_lines.saturating_sub(visible_height))
            .position(self.scroll_offset);
        Scrollbar::default()
            .orientation(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"))
            .track_symbol(Some("│"))
            .thumb_symbol("█")
            .style(Style::default().fg(theme.primary))
            .render(chunks[1], buf, &mut scrollbar_state);
    }

    fn should_close(&self) -> bool {
        self.closed
    }
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new(HelpRegistry::default())
    }
}
