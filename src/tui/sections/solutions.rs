//! Solutions section: one card per service and a closing call to action.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::{
    column, draw_button, draw_card, draw_heading, grid_columns, heading_height, wrapped_lines,
    Canvas, Mounter, RenderContext, Section, SectionKind, SectionLayout,
};
use crate::animation::{stagger_default, HoverResponder, RevealConfig};
use crate::assets::{Icon, IconResolver};
use crate::content::copy::{SOLUTIONS, SOLUTIONS_CTA_BUTTON};
use crate::content::ContentRegistry;
use crate::tui::theme::ToneColors;

const GAP: u16 = 2;
const CTA_WIDTH: u16 = 26;

#[derive(Debug, Clone)]
struct ServiceCard {
    id: String,
    title: String,
    description: String,
    features: Vec<String>,
    icon: Icon,
}

impl ServiceCard {
    fn key(&self) -> String {
        format!("card:{}", self.id)
    }

    /// Rows the card needs at `width`, borders included.
    fn height(&self, width: u16) -> u16 {
        let inner = width.saturating_sub(2);
        let features = u16::try_from(self.features.len()).unwrap_or(u16::MAX);
        2 + 2 + wrapped_lines(&self.description, inner) + 1 + features
    }

    fn draw(&self, colors: ToneColors, hovered: bool, area: Rect, buf: &mut Buffer) {
        let inner = draw_card(None, colors, hovered, area, buf);
        let mut lines = vec![
            Line::from(vec![
                Span::styled(
                    format!("{} ", self.icon.text()),
                    Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    self.title.clone(),
                    Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                self.description.clone(),
                Style::default().fg(colors.muted),
            )),
            Line::from(""),
        ];
        lines.extend(self.features.iter().map(|f| {
            Line::from(vec![
                Span::styled("• ", Style::default().fg(colors.accent)),
                Span::styled(f.clone(), Style::default().fg(colors.text)),
            ])
        }));
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// Columns of the card grid for a content width.
const fn card_columns(width: u16) -> u16 {
    if width >= 96 {
        4
    } else if width >= 48 {
        2
    } else {
        1
    }
}

/// The solutions section.
#[derive(Debug, Clone)]
pub struct SolutionsSection {
    cards: Vec<ServiceCard>,
}

impl SolutionsSection {
    /// Cards for every service in `registry`.
    #[must_use]
    pub fn new(registry: &ContentRegistry, icons: &IconResolver) -> Self {
        let cards = registry
            .services()
            .map(|s| ServiceCard {
                id: s.id.clone(),
                title: s.title.clone(),
                description: s.description.clone(),
                features: s.features.clone(),
                icon: icons.resolve(&s.icon, &s.title),
            })
            .collect();
        Self { cards }
    }
}

impl Section for SolutionsSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Solutions
    }

    fn layout(&self, width: u16) -> SectionLayout {
        let (cx, cw) = column(width);
        let mut slots = Vec::new();

        let heading_h = heading_height(&SOLUTIONS, cw);
        slots.push(("heading".to_string(), Rect::new(cx, 2, cw, heading_h)));

        let mut y = 2 + heading_h + 2;
        let columns = grid_columns(cw, card_columns(cw), GAP);
        for row in self.cards.chunks(columns.len()) {
            let row_h = row
                .iter()
                .zip(&columns)
                .map(|(card, (_, w))| card.height(*w))
                .max()
                .unwrap_or(0);
            for (card, (x, w)) in row.iter().zip(&columns) {
                slots.push((card.key(), Rect::new(cx + x, y, *w, row_h)));
            }
            y += row_h + 1;
        }

        y += 1;
        let cta_w = CTA_WIDTH.min(cw);
        slots.push((
            "cta".to_string(),
            Rect::new(cx + (cw - cta_w) / 2, y, cta_w, 3),
        ));

        let mut layout = SectionLayout::new(y + 3 + 3);
        for (key, rect) in slots {
            layout.push(key, rect);
        }
        layout
    }

    fn mount(&self, m: &mut Mounter<'_>) {
        m.reveal("heading", RevealConfig::text_reveal());
        let reveals = stagger_default(self.cards.iter().map(|_| RevealConfig::stagger_fade_in()));
        for (card, config) in self.cards.iter().zip(reveals) {
            m.reveal_hover(&card.key(), config, HoverResponder::card_hover());
        }
        m.reveal_hover("cta", RevealConfig::fade_in_up(), HoverResponder::button_hover());
    }

    fn render(&self, canvas: &mut Canvas<'_>, _ctx: &RenderContext<'_>) {
        canvas.fill();
        let colors = canvas.colors;

        canvas.element("heading", |area, buf| draw_heading(&SOLUTIONS, colors, area, buf));

        for card in &self.cards {
            let key = card.key();
            let hovered = canvas.is_hovered(&key);
            canvas.element(&key, |area, buf| card.draw(colors, hovered, area, buf));
        }

        let hovered = canvas.is_hovered("cta");
        canvas.element("cta", |area, buf| {
            draw_button(SOLUTIONS_CTA_BUTTON, colors, hovered, area, buf);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section() -> SolutionsSection {
        let registry = ContentRegistry::builtin().unwrap();
        SolutionsSection::new(&registry, &IconResolver::new(None, true))
    }

    #[test]
    fn test_card_columns_by_width() {
        assert_eq!(card_columns(120), 4);
        assert_eq!(card_columns(60), 2);
        assert_eq!(card_columns(30), 1);
    }

    #[test]
    fn test_layout_has_every_card() {
        let section = section();
        let layout = section.layout(120);
        for card in &section.cards {
            let rect = layout.rect(&card.key()).unwrap();
            assert!(rect.right() <= 120);
            assert!(rect.bottom() < layout.height);
        }
        let cta = layout.rect("cta").unwrap();
        assert!(cta.bottom() <= layout.height);
    }

    #[test]
    fn test_narrow_layout_stacks_cards() {
        let section = section();
        let layout = section.layout(40);
        let xs: Vec<u16> = section
            .cards
            .iter()
            .map(|c| layout.rect(&c.key()).unwrap().x)
            .collect();
        assert!(xs.windows(2).all(|w| w[0] == w[1]));
    }
}
