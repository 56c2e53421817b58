//! Technologies section: badge columns per category and the philosophy panel.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{
    column, draw_card, draw_heading, grid_columns, heading_height, wrapped_lines, Canvas,
    Mounter, RenderContext, Section, SectionKind, SectionLayout,
};
use crate::animation::{stagger, HoverResponder, RevealConfig, STAGGER_NORMAL};
use crate::assets::{Icon, IconResolver};
use crate::content::copy::{TECH_PHILOSOPHY, TECH_STACK};
use crate::content::ContentRegistry;
use crate::models::{TechCategory, VisualProps};

const GAP: u16 = 2;

#[derive(Debug, Clone)]
struct Badge {
    id: String,
    name: String,
    icon: Icon,
}

impl Badge {
    fn key(&self) -> String {
        format!("tech:{}", self.id)
    }
}

#[derive(Debug, Clone)]
struct CategoryColumn {
    category: TechCategory,
    badges: Vec<Badge>,
}

impl CategoryColumn {
    fn key(&self) -> String {
        format!("category:{}", self.category)
    }

    /// Border, title row and one row per badge.
    fn height(&self) -> u16 {
        let badges = u16::try_from(self.badges.len()).unwrap_or(u16::MAX);
        2 + 2 + badges
    }
}

const fn category_columns(width: u16) -> u16 {
    if width >= 88 {
        4
    } else if width >= 44 {
        2
    } else {
        1
    }
}

/// The technologies section.
#[derive(Debug, Clone)]
pub struct TechnologiesSection {
    columns: Vec<CategoryColumn>,
}

impl TechnologiesSection {
    /// Columns for every non-empty category in `registry`.
    #[must_use]
    pub fn new(registry: &ContentRegistry, icons: &IconResolver) -> Self {
        let columns = registry
            .tech_categories()
            .into_iter()
            .map(|category| CategoryColumn {
                category,
                badges: registry
                    .technologies_in(category)
                    .map(|t| Badge {
                        id: t.id.clone(),
                        name: t.name.clone(),
                        icon: icons.resolve(&t.icon, &t.name),
                    })
                    .collect(),
            })
            .collect();
        Self { columns }
    }
}

impl Section for TechnologiesSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Technologies
    }

    fn layout(&self, width: u16) -> SectionLayout {
        let (cx, cw) = column(width);
        let mut slots = Vec::new();

        let heading_h = heading_height(&TECH_STACK, cw);
        slots.push(("heading".to_string(), Rect::new(cx, 2, cw, heading_h)));

        let mut y = 2 + heading_h + 2;
        let grid = grid_columns(cw, category_columns(cw), GAP);
        for row in self.columns.chunks(grid.len()) {
            let row_h = row.iter().map(CategoryColumn::height).max().unwrap_or(0);
            for (col, (x, w)) in row.iter().zip(&grid) {
                let panel = Rect::new(cx + x, y, *w, row_h);
                slots.push((col.key(), panel));
                for (badge, by) in col.badges.iter().zip(panel.y + 3..) {
                    slots.push((badge.key(), Rect::new(panel.x + 2, by, w.saturating_sub(4), 1)));
                }
            }
            y += row_h + 1;
        }

        y += 1;
        let text_w = cw.saturating_sub(4);
        let panel_h = 2 + 1 + 2 + wrapped_lines(TECH_PHILOSOPHY.subtitle, text_w) + 1;
        slots.push(("philosophy".to_string(), Rect::new(cx, y, cw, panel_h)));

        let mut layout = SectionLayout::new(y + panel_h + 3);
        for (key, rect) in slots {
            layout.push(key, rect);
        }
        layout
    }

    fn mount(&self, m: &mut Mounter<'_>) {
        m.reveal("heading", RevealConfig::text_reveal());
        let reveals = stagger(
            self.columns.iter().map(|_| RevealConfig::fade_in_up()),
            STAGGER_NORMAL,
        );
        for (col, config) in self.columns.iter().zip(reveals) {
            m.reveal(&col.key(), config);
            for badge in &col.badges {
                m.hover(&badge.key(), HoverResponder::button_hover());
            }
        }
        m.reveal("philosophy", RevealConfig::fade_in_up());
    }

    fn render(&self, canvas: &mut Canvas<'_>, _ctx: &RenderContext<'_>) {
        canvas.fill();
        let colors = canvas.colors;

        canvas.element("heading", |area, buf| draw_heading(&TECH_STACK, colors, area, buf));

        for col in &self.columns {
            let key = col.key();
            canvas.element(&key, |area, buf| {
                let inner = draw_card(None, colors, false, area, buf);
                Paragraph::new(Span::styled(
                    col.category.title(),
                    Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
                ))
                .alignment(Alignment::Center)
                .render(inner, buf);
            });

            // Badges ride along with their column
            canvas.set_parent(canvas.props(&key));
            for badge in &col.badges {
                let bkey = badge.key();
                let hovered = canvas.is_hovered(&bkey);
                canvas.element(&bkey, |area, buf| {
                    let style = if hovered {
                        Style::default().fg(colors.accent).add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(colors.text)
                    };
                    Paragraph::new(Line::from(vec![
                        Span::raw(format!("{} ", badge.icon.text())),
                        Span::styled(badge.name.clone(), style),
                    ]))
                    .render(area, buf);
                });
            }
            canvas.set_parent(VisualProps::IDENTITY);
        }

        canvas.element("philosophy", |area, buf| {
            let inner = draw_card(None, colors, false, area, buf);
            let text = Rect {
                x: inner.x + 1,
                y: inner.y + 1,
                width: inner.width.saturating_sub(2),
                height: inner.height.saturating_sub(1),
            };
            let lines = vec![
                Line::from(Span::styled(
                    TECH_PHILOSOPHY.title,
                    Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                )),
                Line::from(""),
                Line::from(Span::styled(
                    TECH_PHILOSOPHY.subtitle,
                    Style::default().fg(colors.muted),
                )),
            ];
            Paragraph::new(lines)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true })
                .render(text, buf);
        });
    }
}
