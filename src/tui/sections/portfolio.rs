//! Portfolio section: project case studies and a closing call to action.
//!
//! Cards slide in from alternating sides. The call to action is a panel that
//! scales in with its own button inside.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

use super::{
    column, draw_button, draw_card, draw_heading, grid_columns, heading_height, wrapped_lines,
    Canvas, Mounter, RenderContext, Section, SectionKind, SectionLayout,
};
use crate::animation::{HoverResponder, RevealConfig};
use crate::content::copy::{PORTFOLIO, PORTFOLIO_CTA, PORTFOLIO_CTA_BUTTON};
use crate::content::ContentRegistry;
use crate::models::Project;
use crate::tui::theme::ToneColors;

const GAP: u16 = 2;
/// Content width from which projects sit two to a row.
const TWO_COLUMN_WIDTH: u16 = 70;
/// Rows of the image band at the top of each card.
const IMAGE_ROWS: u16 = 3;
const CTA_BUTTON_WIDTH: u16 = 24;

fn project_key(project: &Project) -> String {
    format!("project:{}", project.id)
}

fn card_height(project: &Project, width: u16) -> u16 {
    let inner = width.saturating_sub(2);
    let tags = wrapped_lines(&project.services.join("  "), inner);
    let link = u16::from(project.link.is_some());
    2 + IMAGE_ROWS + 1 + 1 + wrapped_lines(&project.description, inner) + 1 + tags + link
}

fn draw_project(project: &Project, colors: ToneColors, hovered: bool, area: Rect, buf: &mut Buffer) {
    let inner = draw_card(Some(&project.industry), colors, hovered, area, buf);
    if inner.height == 0 {
        return;
    }

    let image = Rect {
        height: IMAGE_ROWS.min(inner.height),
        ..inner
    };
    let shade = if hovered { colors.accent } else { colors.muted };
    Block::default()
        .style(Style::default().bg(colors.bg).fg(shade))
        .render(image, buf);
    let label = project
        .image
        .as_deref()
        .map_or_else(|| "▚▚▚".to_string(), |_| format!("▚ {} ▚", project.title));
    Paragraph::new(label)
        .style(Style::default().fg(shade))
        .alignment(Alignment::Center)
        .render(
            Rect {
                y: image.y + image.height / 2,
                height: 1.min(image.height),
                ..image
            },
            buf,
        );

    let body = Rect {
        y: inner.y + image.height + 1,
        height: inner.height.saturating_sub(image.height + 1),
        ..inner
    };
    let mut lines = vec![
        Line::from(Span::styled(
            project.title.clone(),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            project.description.clone(),
            Style::default().fg(colors.muted),
        )),
        Line::from(""),
    ];
    let tags: Vec<Span> = project
        .services
        .iter()
        .flat_map(|s| {
            [
                Span::styled(s.clone(), Style::default().fg(colors.accent)),
                Span::raw("  "),
            ]
        })
        .collect();
    lines.push(Line::from(tags));
    if project.link.is_some() {
        lines.push(Line::from(Span::styled(
            "View case study ↗",
            Style::default().fg(colors.text).add_modifier(Modifier::UNDERLINED),
        )));
    }
    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .render(body, buf);
}

/// The portfolio section.
#[derive(Debug, Clone)]
pub struct PortfolioSection {
    projects: Vec<Project>,
}

impl PortfolioSection {
    /// Cards for every project in `registry`.
    #[must_use]
    pub fn new(registry: &ContentRegistry) -> Self {
        Self {
            projects: registry.projects().cloned().collect(),
        }
    }
}

impl Section for PortfolioSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Portfolio
    }

    fn layout(&self, width: u16) -> SectionLayout {
        let (cx, cw) = column(width);
        let mut slots = Vec::new();

        let heading_h = heading_height(&PORTFOLIO, cw);
        slots.push(("heading".to_string(), Rect::new(cx, 2, cw, heading_h)));

        let mut y = 2 + heading_h + 2;
        let count = if cw >= TWO_COLUMN_WIDTH { 2 } else { 1 };
        let columns = grid_columns(cw, count, GAP);
        for row in self.projects.chunks(columns.len()) {
            let row_h = row
                .iter()
                .zip(&columns)
                .map(|(p, (_, w))| card_height(p, *w))
                .max()
                .unwrap_or(0);
            for (project, (x, w)) in row.iter().zip(&columns) {
                slots.push((project_key(project), Rect::new(cx + x, y, *w, row_h)));
            }
            y += row_h + 1;
        }

        y += 2;
        let text_w = cw.saturating_sub(4);
        let cta_h = 2 + 1 + 1 + wrapped_lines(PORTFOLIO_CTA.subtitle, text_w) + 1 + 3 + 1;
        let cta = Rect::new(cx, y, cw, cta_h);
        slots.push(("cta".to_string(), cta));
        let button_w = CTA_BUTTON_WIDTH.min(cw);
        slots.push((
            "cta_button".to_string(),
            Rect::new(cx + (cw - button_w) / 2, cta.bottom() - 4, button_w, 3),
        ));

        let mut layout = SectionLayout::new(cta.bottom() + 3);
        for (key, rect) in slots {
            layout.push(key, rect);
        }
        layout
    }

    fn mount(&self, m: &mut Mounter<'_>) {
        m.reveal("heading", RevealConfig::text_reveal());
        for (i, project) in self.projects.iter().enumerate() {
            let config = if i % 2 == 0 {
                RevealConfig::fade_in_left()
            } else {
                RevealConfig::fade_in_right()
            };
            m.reveal_hover(&project_key(project), config, HoverResponder::card_hover());
        }
        m.reveal("cta", RevealConfig::scale_in());
        m.hover("cta_button", HoverResponder::button_hover());
    }

    fn render(&self, canvas: &mut Canvas<'_>, _ctx: &RenderContext<'_>) {
        canvas.fill();
        let colors = canvas.colors;

        canvas.element("heading", |area, buf| draw_heading(&PORTFOLIO, colors, area, buf));

        for project in &self.projects {
            let key = project_key(project);
            let hovered = canvas.is_hovered(&key);
            canvas.element(&key, |area, buf| draw_project(project, colors, hovered, area, buf));
        }

        canvas.element("cta", |area, buf| {
            let inner = draw_card(None, colors, false, area, buf);
            let text = Rect {
                x: inner.x + 1,
                y: inner.y + 1,
                width: inner.width.saturating_sub(2),
                height: inner.height.saturating_sub(5),
            };
            let lines = vec![
                Line::from(Span::styled(
                    PORTFOLIO_CTA.title,
                    Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    PORTFOLIO_CTA.subtitle,
                    Style::default().fg(colors.muted),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(text, buf);
        });

        // The button moves with the panel it sits in
        canvas.set_parent(canvas.props("cta"));
        let hovered = canvas.is_hovered("cta_button");
        canvas.element("cta_button", |area, buf| {
            draw_button(PORTFOLIO_CTA_BUTTON, colors, hovered, area, buf);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> PortfolioSection {
        PortfolioSection::new(&ContentRegistry::builtin().unwrap())
    }

    #[test]
    fn test_two_columns_when_wide() {
        let section = section();
        let layout = section.layout(120);
        let first = layout.rect(&project_key(&section.projects[0])).unwrap();
        let second = layout.rect(&project_key(&section.projects[1])).unwrap();
        assert_eq!(first.y, second.y);
        assert!(second.x > first.x);
    }

    #[test]
    fn test_one_column_when_narrow() {
        let section = section();
        let layout = section.layout(50);
        let first = layout.rect(&project_key(&section.projects[0])).unwrap();
        let second = layout.rect(&project_key(&section.projects[1])).unwrap();
        assert_eq!(first.x, second.x);
        assert!(second.y > first.y);
    }

    #[test]
    fn test_cta_button_inside_panel() {
        let layout = section().layout(100);
        let panel = layout.rect("cta").unwrap();
        let button = layout.rect("cta_button").unwrap();
        assert_eq!(panel.union(button), panel);
        assert!(panel.bottom() < layout.height);
    }
}
