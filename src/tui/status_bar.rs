//! Status bar widget for displaying status messages and help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::component::Component;
use super::help_registry::{self, HelpRegistry};
use super::{AppState, Theme};

/// Hints shown when no status message is set.
const MAX_HINTS: usize = 4;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar: section and scroll position on the left, then
    /// the status message or the hints of the active context.
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let section = state
            .page
            .current_section()
            .map_or("", |kind| kind.title());

        let mut spans = vec![
            Span::styled(
                format!(" {section} "),
                Style::default()
                    .fg(theme.background)
                    .bg(theme.primary)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {:>3}% ", state.page.scroll_percent()),
                Style::default().fg(theme.text_muted),
            ),
        ];

        if state.status_message.is_empty() {
            spans.extend(Self::hint_spans(
                &state.help_registry,
                Self::get_current_context(state),
                theme,
            ));
        } else {
            spans.push(Span::styled(
                state.status_message.clone(),
                Style::default().fg(theme.success),
            ));
        }

        let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background));
        f.render_widget(status, area);
    }

    /// Context whose keys are live right now.
    pub(crate) fn get_current_context(state: &AppState) -> &'static str {
        if state.help.is_some() {
            help_registry::contexts::HELP
        } else if !state.form.should_close() {
            help_registry::contexts::FORM
        } else {
            help_registry::contexts::PAGE
        }
    }

    fn hint_spans(registry: &HelpRegistry, context: &str, theme: &Theme) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        for (i, (key, hint)) in registry.hints(context, MAX_HINTS).into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default().fg(theme.accent).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::styled(hint, Style::default().fg(theme.text_muted)));
        }

        if context == help_registry::contexts::PAGE {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.accent)));
            spans.push(Span::raw(": Help"));
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_hints_end_with_help() {
        let registry = HelpRegistry::default();
        let spans = StatusBar::hint_spans(&registry, help_registry::contexts::PAGE, &Theme::dark());
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(text.ends_with("?: Help"));
    }

    #[test]
    fn test_form_hints_skip_help_key() {
        let registry = HelpRegistry::default();
        let spans = StatusBar::hint_spans(&registry, help_registry::contexts::FORM, &Theme::dark());
        let text: String = spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(!text.contains("?: Help"));
        assert!(!text.is_empty());
    }
}
