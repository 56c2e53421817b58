//! Hero section: headline, calls to action, stats and the floating circle.
//!
//! Everything enters through one intro timeline that starts when the
//! section mounts. The circle and its icons float forever, the circle drifts
//! up as the hero scrolls away, and the whole hero shrinks and fades a little
//! while it leaves the viewport.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::{
    column, draw_button, draw_outline_button, wrapped_lines, Canvas, Mounter, RenderContext,
    Section, SectionKind, SectionLayout,
};
use crate::animation::{
    Ease, Effect, Floating, HoverResponder, Motion, Parallax, Position, Timeline, DURATION_SLOW,
    STAGGER_SLOW,
};
use crate::assets::{Icon, IconResolver};
use crate::content::copy::{HERO_BUTTONS, HERO_ICONS, HERO_STATS, HERO_SUBTITLE, HERO_TITLE};
use crate::models::VisualProps;
use crate::tui::paint::rotated_glyph;
use crate::tui::theme::ToneColors;

const HEIGHT: u16 = 26;
/// Content width from which the circle gets its own column.
const TWO_COLUMN_WIDTH: u16 = 84;
const CIRCLE: (u16, u16) = (24, 11);
const BUTTON_WIDTH: u16 = 20;
const STAT_WIDTH: u16 = 16;

/// Hover tilt of each orbiting icon, in degrees.
const ICON_TILT: [f32; 3] = [10.0, -10.0, 15.0];

/// Intro timeline, positioned the way the headline, copy, buttons, circle,
/// icons and stats overlap.
#[must_use]
pub fn intro_timeline() -> Timeline {
    let rise = VisualProps::IDENTITY.with_offset(0.0, 50.0).with_opacity(0.0);
    let shown = VisualProps::IDENTITY;
    let mut tl = Timeline::new(0.5);
    tl.add(
        "title",
        rise,
        shown,
        Motion::new(DURATION_SLOW, Ease::SMOOTH),
        Position::After(0.0),
    )
    .add(
        "subtitle",
        rise,
        shown,
        Motion::new(1.0, Ease::SMOOTH),
        Position::After(-0.6),
    )
    .add_staggered(
        "buttons",
        rise,
        shown,
        Motion::new(0.8, Ease::BOUNCE),
        HERO_BUTTONS.len(),
        0.0,
        Position::After(-0.4),
    )
    .add(
        "circle",
        VisualProps::scaled(0.0).with_rotation(-180.0).with_opacity(0.0),
        shown,
        Motion::new(1.5, Ease::BOUNCE),
        Position::After(-0.8),
    )
    .add_staggered(
        "icons",
        VisualProps::scaled(0.0).with_rotation(360.0).with_opacity(0.0),
        shown,
        Motion::new(0.8, Ease::BackOut(2.0)),
        HERO_ICONS.len(),
        STAGGER_SLOW,
        Position::After(-1.0),
    )
    .add_staggered(
        "stats",
        rise,
        shown,
        Motion::new(0.8, Ease::SMOOTH),
        HERO_STATS.len(),
        0.0,
        Position::After(-0.4),
    );
    tl
}

fn key(label: &str, index: usize) -> String {
    format!("{label}:{index}")
}

/// The hero section.
#[derive(Debug, Clone)]
pub struct HeroSection {
    icons: Vec<Icon>,
}

impl HeroSection {
    /// Hero with its orbiting icons resolved.
    #[must_use]
    pub fn new(icons: &IconResolver) -> Self {
        Self {
            icons: HERO_ICONS.iter().map(|name| icons.resolve(name, name)).collect(),
        }
    }
}

impl Section for HeroSection {
    fn kind(&self) -> SectionKind {
        SectionKind::Hero
    }

    fn layout(&self, width: u16) -> SectionLayout {
        let (cx, cw) = column(width);
        let two_columns = cw >= TWO_COLUMN_WIDTH;
        let text_width = if two_columns { cw * 3 / 5 } else { cw };

        let mut layout = SectionLayout::new(HEIGHT);
        layout.push("hero", Rect::new(0, 0, width, HEIGHT));
        layout.push("title", Rect::new(cx, 3, text_width, 3));

        let sub_height = wrapped_lines(HERO_SUBTITLE, text_width);
        layout.push("subtitle", Rect::new(cx, 7, text_width, sub_height));

        let buttons_y = 8 + sub_height;
        for (i, x) in [cx, cx + BUTTON_WIDTH + 2].into_iter().enumerate() {
            layout.push(key("buttons", i), Rect::new(x, buttons_y, BUTTON_WIDTH, 3));
        }

        let stats_y = buttons_y + 5;
        let mut x = cx;
        for i in 0..HERO_STATS.len() {
            layout.push(key("stats", i), Rect::new(x, stats_y, STAT_WIDTH - 2, 2));
            x += STAT_WIDTH;
        }

        if two_columns {
            let right_x = cx + text_width;
            let right_w = cw - text_width;
            let circle = Rect::new(
                right_x + right_w.saturating_sub(CIRCLE.0) / 2,
                6,
                CIRCLE.0,
                CIRCLE.1,
            );
            layout.push("circle", circle);
            let spots = [
                (circle.right().saturating_sub(3), circle.y.saturating_sub(1)),
                (circle.x.saturating_sub(2), circle.bottom().saturating_sub(2)),
                (circle.right() + 1, circle.y + circle.height / 2),
            ];
            for (i, (x, y)) in spots.into_iter().enumerate() {
                layout.push(key("icons", i), Rect::new(x, y, 3, 1));
            }
        }
        layout
    }

    fn mount(&self, m: &mut Mounter<'_>) {
        if let Some(id) = m.element("hero") {
            m.track_section(id);
            let fade = VisualProps::scaled(0.95).with_opacity(0.8);
            m.scope().attach_effect(id, Effect::Parallax(Parallax::new(fade, 1.0)));
        }

        let tl = intro_timeline();
        let origin = m.scope().now();
        let intro = |m: &mut Mounter<'_>, key: &str, label: &str, index: usize| {
            let id = m.element(key)?;
            if let Some(tween) = tl.tween_for(label, index, origin) {
                m.scope().attach_intro(id, tween);
            }
            Some(id)
        };

        intro(m, "title", "title", 0);
        intro(m, "subtitle", "subtitle", 0);
        for i in 0..HERO_BUTTONS.len() {
            if let Some(id) = intro(m, &key("buttons", i), "buttons", i) {
                m.scope().attach_hover(id, HoverResponder::button_hover());
            }
        }
        for i in 0..HERO_STATS.len() {
            if let Some(id) = intro(m, &key("stats", i), "stats", i) {
                m.scope().attach_hover(id, HoverResponder::lift());
            }
        }

        if let Some(id) = intro(m, "circle", "circle", 0) {
            m.track_section(id);
            let scope = m.scope();
            scope.attach_effect(id, Effect::Floating(Floating::default()));
            scope.attach_effect(id, Effect::Parallax(Parallax::drift()));
            scope.attach_hover(
                id,
                HoverResponder::to(VisualProps::scaled(1.05).with_rotation(5.0)),
            );
        }
        for (i, tilt) in ICON_TILT.iter().enumerate() {
            if let Some(id) = intro(m, &key("icons", i), "icons", i) {
                #[allow(clippy::cast_precision_loss)]
                let float = Floating {
                    amplitude: -10.0,
                    period: 2.5 + i as f32 * 0.3,
                    delay: i as f32 * 0.5,
                    ease: Ease::SWAY,
                };
                let hover = VisualProps::scaled(1.2).with_rotation(*tilt);
                let motion = Motion::new(0.2, Ease::POWER);
                let scope = m.scope();
                scope.attach_effect(id, Effect::Floating(float));
                scope.attach_hover(
                    id,
                    HoverResponder::new(VisualProps::IDENTITY, hover, motion, motion),
                );
            }
        }
    }

    fn render(&self, canvas: &mut Canvas<'_>, _ctx: &RenderContext<'_>) {
        canvas.fill();
        let colors = canvas.colors;
        canvas.set_parent(canvas.props("hero"));

        canvas.element("title", |area, buf| {
            let lines: Vec<Line> = HERO_TITLE
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    let fg = if i == 1 { colors.accent } else { colors.text };
                    Line::from(Span::styled(
                        *word,
                        Style::default().fg(fg).add_modifier(Modifier::BOLD),
                    ))
                })
                .collect();
            Paragraph::new(lines).render(area, buf);
        });

        canvas.element("subtitle", |area, buf| {
            Paragraph::new(HERO_SUBTITLE)
                .style(Style::default().fg(colors.muted))
                .wrap(Wrap { trim: true })
                .render(area, buf);
        });

        for (i, label) in HERO_BUTTONS.iter().enumerate() {
            let k = key("buttons", i);
            let hovered = canvas.is_hovered(&k);
            canvas.element(&k, |area, buf| {
                if i == 0 {
                    draw_button(label, colors, hovered, area, buf);
                } else {
                    draw_outline_button(label, colors, hovered, area, buf);
                }
            });
        }

        for (i, (value, label)) in HERO_STATS.iter().enumerate() {
            canvas.element(&key("stats", i), |area, buf| {
                let lines = vec![
                    Line::from(Span::styled(
                        *value,
                        Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(*label, Style::default().fg(colors.muted))),
                ];
                Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .render(area, buf);
            });
        }

        let circle_hovered = canvas.is_hovered("circle");
        canvas.element("circle", |area, buf| draw_circle(area, buf, colors, circle_hovered));

        for (i, icon) in self.icons.iter().enumerate() {
            let k = key("icons", i);
            let rotation = canvas.props(&k).rotation;
            let glyph = icon.text();
            canvas.element(&k, |area, buf| {
                Paragraph::new(rotated_glyph(&glyph, rotation).to_string())
                    .style(Style::default().fg(colors.accent).add_modifier(Modifier::BOLD))
                    .alignment(Alignment::Center)
                    .render(area, buf);
            });
        }
    }
}

fn draw_circle(area: Rect, buf: &mut Buffer, colors: ToneColors, hovered: bool) {
    let ring = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors.accent));
    let inner = ring.inner(area);
    ring.render(area, buf);

    let core_w = inner.width / 2;
    let core_h = inner.height / 2;
    let core = Rect::new(
        inner.x + (inner.width - core_w) / 2,
        inner.y + (inner.height - core_h) / 2,
        core_w,
        core_h,
    );
    let mut style = Style::default().bg(colors.accent).fg(colors.on_accent);
    if hovered {
        style = style.add_modifier(Modifier::BOLD);
    }
    Block::default().style(style).render(core, buf);
    let mid = Rect {
        y: core.y + core.height / 2,
        height: 1.min(core.height),
        ..core
    };
    Paragraph::new("ϟ")
        .style(style)
        .alignment(Alignment::Center)
        .render(mid, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intro_timeline_positions() {
        let tl = intro_timeline();
        let at = |label: &str, i: usize| tl.start_of(label, i).unwrap();
        assert!((at("title", 0) - 0.5).abs() < 1e-5);
        // subtitle overlaps the title by 0.6 s
        assert!((at("subtitle", 0) - 1.1).abs() < 1e-5);
        assert!((at("buttons", 1) - at("buttons", 0)).abs() < 1e-5);
        assert!((at("icons", 1) - at("icons", 0) - STAGGER_SLOW).abs() < 1e-5);
        assert!(at("stats", 0) > at("circle", 0));
    }

    #[test]
    fn test_narrow_layout_drops_circle() {
        let hero = HeroSection::new(&IconResolver::new(None, true));
        let narrow = hero.layout(60);
        assert!(narrow.rect("circle").is_none());
        assert!(narrow.rect("title").is_some());

        let wide = hero.layout(140);
        let circle = wide.rect("circle").unwrap();
        assert!(circle.right() <= 140);
        assert!(wide.rect("icons:2").is_some());
    }
}
