//! Contact section: studio details beside the contact form.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{
    column, draw_button, draw_card, draw_heading, heading_height, wrapped_lines, Canvas, Mounter,
    RenderContext, Section, SectionKind, SectionLayout,
};
use crate::animation::{HoverResponder, RevealConfig};
use crate::assets::{Icon, IconResolver};
use crate::content::copy::{CONTACT, CONTACT_DETAILS, CONTACT_INTRO, CONTACT_NOTES, SUBMIT_LABEL};
use crate::tui::component::Component;
use crate::tui::contact_form::ContactFormState;

/// Content width from which details and form sit side by side.
const TWO_COLUMN_WIDTH: u16 = 70;
const GAP: u16 = 2;
const DETAIL_ICONS: [&str; 3] = ["Mail", "Phone", "MapPin"];
const NOTE_ICONS: [&str; 2] = ["Clock", "Users"];

/// The contact section.
#[derive(Debug, Clone)]
pub struct ContactSection {
    detail_icons: Vec<Icon>,
    note_icons: Vec<Icon>,
    send_icon: Icon,
}

impl ContactSection {
    /// Contact section with its icons resolved.
    #[must_use]
    pub fn new(icons: &IconResolver) -> Self {
        Self {
            detail_icons: DETAIL_ICONS.iter().map(|n| icons.resolve(n, n)).collect(),
            note_icons: NOTE_ICONS.iter().map(|n| icons.resolve(n, n)).collect(),
            send_icon: icons.resolve("Send", "Send"),
        }
    }
}

fn intro_height(width: u16) -> u16 {
    let text_w = width.saturating_sub(4);
    let details = u16::try_from(CONTACT_DETAILS.len() * 2).unwrap_or(u16::MAX);
    let notes = u16::try_from(CONTACT_NOTES.len() * 2).unwrap_or(u16::MAX);
    // border, padding, title, blank, subtitle, blank, details, blank, notes
    2 + 2 + 2 + wrapped_lines(CONTACT_INTRO.subtitle, text_w) + 1 + details + 1 + notes
}

fn form_height(width: u16) -> u16 {
    2 + 1 + ContactFormState::height(width.saturating_sub(4)) + 1 + 3 + 1
}

impl Section for ContactSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Contact
    }

    fn layout(&self, width: u16) -> SectionLayout {
        let (cx, cw) = column(width);
        let mut layout = SectionLayout::new(0);

        let heading_h = heading_height(&CONTACT, cw);
        layout.push("heading", Rect::new(cx, 2, cw, heading_h));
        let y = 2 + heading_h + 2;

        let (intro, form) = if cw >= TWO_COLUMN_WIDTH {
            let intro_w = (cw - GAP) * 2 / 5;
            let form_w = cw - GAP - intro_w;
            let row_h = intro_height(intro_w).max(form_height(form_w));
            (
                Rect::new(cx, y, intro_w, row_h),
                Rect::new(cx + intro_w + GAP, y, form_w, row_h),
            )
        } else {
            let intro = Rect::new(cx, y, cw, intro_height(cw));
            (intro, Rect::new(cx, intro.bottom() + 1, cw, form_height(cw)))
        };
        layout.push("intro", intro);
        layout.push("form", form);
        layout.push(
            "submit",
            Rect::new(form.x + 2, form.bottom() - 5, form.width.saturating_sub(4), 3),
        );

        layout.height = form.bottom().max(intro.bottom()) + 3;
        layout
    }

    fn mount(&self, m: &mut Mounter<'_>) {
        m.reveal("heading", RevealConfig::text_reveal());
        m.reveal("intro", RevealConfig::fade_in_left());
        m.reveal("form", RevealConfig::fade_in_right());
        m.hover("submit", HoverResponder::button_hover());
    }

    fn render(&self, canvas: &mut Canvas<'_>, ctx: &RenderContext<'_>) {
        canvas.fill();
        let colors = canvas.colors;

        canvas.element("heading", |area, buf| draw_heading(&CONTACT, colors, area, buf));

        canvas.element("intro", |area, buf| {
            let inner = draw_card(None, colors, false, area, buf);
            let text = Rect {
                x: inner.x + 1,
                y: inner.y + 1,
                width: inner.width.saturating_sub(2),
                height: inner.height.saturating_sub(2),
            };
            let bold = Style::default().fg(colors.text).add_modifier(Modifier::BOLD);
            let muted = Style::default().fg(colors.muted);
            let accent = Style::default().fg(colors.accent);

            let mut lines = vec![
                Line::from(Span::styled(CONTACT_INTRO.title, bold)),
                Line::from(""),
                Line::from(Span::styled(CONTACT_INTRO.subtitle, muted)),
                Line::from(""),
            ];
            for ((label, value), icon) in CONTACT_DETAILS.iter().zip(&self.detail_icons) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", icon.text()), accent),
                    Span::styled(*label, bold),
                ]));
                lines.push(Line::from(Span::styled(format!("  {value}"), muted)));
            }
            lines.push(Line::from(""));
            for ((title, note), icon) in CONTACT_NOTES.iter().zip(&self.note_icons) {
                lines.push(Line::from(vec![
                    Span::styled(format!("{} ", icon.text()), accent),
                    Span::styled(*title, bold),
                ]));
                lines.push(Line::from(Span::styled(format!("  {note}"), muted)));
            }
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .render(text, buf);
        });

        let form_state = ctx.form;
        let theme = ctx.theme;
        canvas.element("form", |area, buf| {
            let title = if form_state.focused {
                "Send a message (Esc to leave)"
            } else {
                "Send a message (f to fill in)"
            };
            let inner = draw_card(Some(title), colors, form_state.focused, area, buf);
            let fields = Rect {
                x: inner.x + 1,
                y: inner.y + 1,
                width: inner.width.saturating_sub(2),
                height: ContactFormState::height(inner.width.saturating_sub(2))
                    .min(inner.height.saturating_sub(1)),
            };
            form_state.render(fields, buf, theme);
        });

        // The submit button moves with the form it belongs to
        canvas.set_parent(canvas.props("form"));
        let hovered = canvas.is_hovered("submit");
        let label = format!("{} {SUBMIT_LABEL}", self.send_icon.text());
        canvas.element("submit", |area, buf| {
            draw_button(&label, colors, hovered, area, buf);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> ContactSection {
        ContactSection::new(&IconResolver::new(None, true))
    }

    #[test]
    fn test_side_by_side_when_wide() {
        let layout = section().layout(120);
        let intro = layout.rect("intro").unwrap();
        let form = layout.rect("form").unwrap();
        assert_eq!(intro.y, form.y);
        assert!(form.x > intro.right());
    }

    #[test]
    fn test_stacked_when_narrow() {
        let layout = section().layout(60);
        let intro = layout.rect("intro").unwrap();
        let form = layout.rect("form").unwrap();
        assert!(form.y > intro.bottom());
    }

    #[test]
    fn test_submit_inside_form_and_below_fields() {
        for width in [60, 120] {
            let layout = section().layout(width);
            let form = layout.rect("form").unwrap();
            let submit = layout.rect("submit").unwrap();
            assert_eq!(form.union(submit), form);
            let fields_end = form.y + 2 + ContactFormState::height(form.width - 4);
            assert!(submit.y >= fields_end, "width {width}");
        }
    }

    #[test]
    fn test_named_icons_resolve() {
        let section = section();
        assert!(section.detail_icons.iter().all(|i| !i.is_fallback()));
        assert!(!section.send_icon.is_fallback());
    }
}
