//! Page sections.
//!
//! Each section lays itself out for a given width as a list of keyed slots,
//! registers the animations for those slots when it mounts, and draws each
//! slot through a [`Canvas`] that applies the slot's current visual props.
//! Slot rects are relative to the section's top-left corner; the page adds the
//! section offset.

#![allow(clippy::cast_possible_truncation)]

pub mod contact;
pub mod hero;
pub mod portfolio;
pub mod solutions;
pub mod technologies;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

use super::contact_form::ContactFormState;
use super::paint::paint;
use super::theme::{Theme, Tone, ToneColors};
use crate::animation::{
    AnimationScope, ElementId, HoverResponder, RevealConfig, PX_PER_ROW,
};
use crate::content::copy::Heading;
use crate::models::VisualProps;

pub use contact::ContactSection;
pub use hero::HeroSection;
pub use portfolio::PortfolioSection;
pub use solutions::SolutionsSection;
pub use technologies::TechnologiesSection;

/// Widest the centred content column gets.
const MAX_CONTENT_WIDTH: u16 = 100;
/// Horizontal padding on each side of the column.
const SIDE_PADDING: u16 = 2;

/// The five sections, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// Headline, calls to action and stats
    Hero,
    /// Service cards
    Solutions,
    /// Project case studies
    Portfolio,
    /// Technology badges by category
    Technologies,
    /// Contact details and form
    Contact,
}

impl SectionKind {
    /// All sections in page order.
    pub const ALL: [Self; 5] = [
        Self::Hero,
        Self::Solutions,
        Self::Portfolio,
        Self::Technologies,
        Self::Contact,
    ];

    /// Name shown in the status bar.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::Solutions => "Solutions",
            Self::Portfolio => "Portfolio",
            Self::Technologies => "Tech Stack",
            Self::Contact => "Contact",
        }
    }

    /// Scope name, also used in logs.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Solutions => "solutions",
            Self::Portfolio => "portfolio",
            Self::Technologies => "technologies",
            Self::Contact => "contact",
        }
    }

    /// Background band.
    #[must_use]
    pub const fn tone(self) -> Tone {
        match self {
            Self::Solutions | Self::Technologies => Tone::Base,
            Self::Hero | Self::Portfolio | Self::Contact => Tone::Inverse,
        }
    }
}

/// A keyed rectangle inside a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Element key inside the section's scope
    pub key: String,
    /// Natural rect, relative to the section
    pub rect: Rect,
}

/// Result of laying out a section at one width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionLayout {
    /// Rows the section occupies
    pub height: u16,
    /// Keyed element rects
    pub slots: Vec<Slot>,
}

impl SectionLayout {
    /// Empty layout of `height` rows.
    #[must_use]
    pub const fn new(height: u16) -> Self {
        Self {
            height,
            slots: Vec::new(),
        }
    }

    /// Add a slot.
    pub fn push(&mut self, key: impl Into<String>, rect: Rect) {
        self.slots.push(Slot {
            key: key.into(),
            rect,
        });
    }

    /// Rect of the slot called `key`.
    #[must_use]
    pub fn rect(&self, key: &str) -> Option<Rect> {
        self.slots.iter().find(|s| s.key == key).map(|s| s.rect)
    }

    /// Whether `other` has the same slot keys in the same order.
    #[must_use]
    pub fn same_keys(&self, other: &Self) -> bool {
        self.slots
            .iter()
            .map(|s| &s.key)
            .eq(other.slots.iter().map(|s| &s.key))
    }
}

/// Shared state sections read while drawing.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    /// Active palette
    pub theme: &'a Theme,
    /// Contact form state
    pub form: &'a ContactFormState,
}

/// A section of the page.
pub trait Section {
    /// Which section this is.
    fn kind(&self) -> SectionKind;

    /// Lay out the section for `width` columns.
    fn layout(&self, width: u16) -> SectionLayout;

    /// Register animations for the laid-out slots.
    fn mount(&self, mounter: &mut Mounter<'_>);

    /// Draw every slot.
    fn render(&self, canvas: &mut Canvas<'_>, ctx: &RenderContext<'_>);
}

/// Build the default page from content.
#[must_use]
pub fn page_sections(
    registry: &crate::content::ContentRegistry,
    icons: &crate::assets::IconResolver,
) -> Vec<Box<dyn Section>> {
    vec![
        Box::new(HeroSection::new(icons)),
        Box::new(SolutionsSection::new(registry, icons)),
        Box::new(PortfolioSection::new(registry)),
        Box::new(TechnologiesSection::new(registry, icons)),
        Box::new(ContactSection::new(icons)),
    ]
}

fn page_rect(rect: Rect, top: u16) -> Rect {
    Rect {
        y: rect.y.saturating_add(top),
        ..rect
    }
}

/// Registers a section's elements in its scope.
pub struct Mounter<'a> {
    scope: &'a mut AnimationScope,
    layout: &'a SectionLayout,
    top: u16,
}

impl<'a> Mounter<'a> {
    /// Mounter for a section whose first row is page row `top`.
    pub fn new(scope: &'a mut AnimationScope, layout: &'a SectionLayout, top: u16) -> Self {
        Self { scope, layout, top }
    }

    /// The scope being filled.
    pub fn scope(&mut self) -> &mut AnimationScope {
        self.scope
    }

    /// Add the slot `key` as a plain element.
    pub fn element(&mut self, key: &str) -> Option<ElementId> {
        let rect = self.layout.rect(key)?;
        let page = page_rect(rect, self.top);
        let id = self.scope.add(key, f32::from(page.y) * PX_PER_ROW);
        self.scope
            .set_anchor(id, f32::from(page.y) * PX_PER_ROW, f32::from(page.height) * PX_PER_ROW);
        self.scope.set_bounds(id, page);
        Some(id)
    }

    /// Add the slot `key` with a scroll reveal.
    pub fn reveal(&mut self, key: &str, config: RevealConfig) -> Option<ElementId> {
        let id = self.element(key)?;
        self.scope.attach_reveal(id, config);
        Some(id)
    }

    /// Add the slot `key` with a hover response.
    pub fn hover(&mut self, key: &str, responder: HoverResponder) -> Option<ElementId> {
        let id = self.element(key)?;
        self.scope.attach_hover(id, responder);
        Some(id)
    }

    /// Add the slot `key` with both a reveal and a hover response.
    pub fn reveal_hover(
        &mut self,
        key: &str,
        config: RevealConfig,
        responder: HoverResponder,
    ) -> Option<ElementId> {
        let id = self.reveal(key, config)?;
        self.scope.attach_hover(id, responder);
        Some(id)
    }

    /// Measure scroll progress of `id` across the whole section instead of
    /// its own rect.
    pub fn track_section(&mut self, id: ElementId) {
        self.scope.set_anchor(
            id,
            f32::from(self.top) * PX_PER_ROW,
            f32::from(self.layout.height) * PX_PER_ROW,
        );
    }
}

/// Move the elements of a mounted scope to a new layout with the same
/// slot keys.
pub fn relayout(scope: &mut AnimationScope, layout: &SectionLayout, top: u16) {
    for slot in &layout.slots {
        if let Some(id) = scope.id_of(&slot.key) {
            let page = page_rect(slot.rect, top);
            let span = scope.element(id).map_or(0.0, |e| e.span);
            let own_span = f32::from(page.height) * PX_PER_ROW;
            // Elements tracking the whole section keep the section span
            if span > own_span {
                scope.set_anchor(
                    id,
                    f32::from(top) * PX_PER_ROW,
                    f32::from(layout.height) * PX_PER_ROW,
                );
            } else {
                scope.set_anchor(id, f32::from(page.y) * PX_PER_ROW, own_span);
            }
            scope.set_bounds(id, page);
        }
    }
}

/// Draws slots of one section into the page buffer.
pub struct Canvas<'a> {
    buf: &'a mut Buffer,
    scope: &'a AnimationScope,
    layout: &'a SectionLayout,
    top: u16,
    /// Colors of the section band
    pub colors: ToneColors,
    parent: VisualProps,
}

impl<'a> Canvas<'a> {
    /// Canvas for the section at page row `top`.
    pub fn new(
        buf: &'a mut Buffer,
        scope: &'a AnimationScope,
        layout: &'a SectionLayout,
        top: u16,
        colors: ToneColors,
    ) -> Self {
        Self {
            buf,
            scope,
            layout,
            top,
            colors,
            parent: VisualProps::IDENTITY,
        }
    }

    /// Compose `parent` under every element drawn from now on.
    pub fn set_parent(&mut self, parent: VisualProps) {
        self.parent = parent;
    }

    /// Current props of `key`, including the parent.
    #[must_use]
    pub fn props(&self, key: &str) -> VisualProps {
        self.parent.compose(&self.scope.props_of(key))
    }

    /// Page rect of the slot `key`.
    #[must_use]
    pub fn rect(&self, key: &str) -> Option<Rect> {
        self.layout.rect(key).map(|r| page_rect(r, self.top))
    }

    /// Whether the pointer is over `key`.
    #[must_use]
    pub fn is_hovered(&self, key: &str) -> bool {
        self.scope.is_hovered(key)
    }

    /// Fill the section band.
    pub fn fill(&mut self) {
        let area = Rect::new(0, self.top, self.buf.area.width, self.layout.height)
            .intersection(self.buf.area);
        Block::default()
            .style(Style::default().bg(self.colors.bg))
            .render(area, self.buf);
    }

    /// Draw slot `key` with its animated props.
    pub fn element(&mut self, key: &str, draw: impl FnOnce(Rect, &mut Buffer)) -> Option<Rect> {
        let rect = self.rect(key)?;
        let props = self.props(key);
        paint(self.buf, rect, &props, self.colors.bg, draw)
    }
}

/// Centred content column for `width`: `(x, width)`.
#[must_use]
pub fn column(width: u16) -> (u16, u16) {
    let inner = width.saturating_sub(SIDE_PADDING * 2).min(MAX_CONTENT_WIDTH).max(1);
    ((width.saturating_sub(inner)) / 2, inner)
}

/// Lines `text` occupies when word-wrapped at `width` columns.
#[must_use]
pub fn wrapped_lines(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 0usize;
    for paragraph in text.split('\n') {
        let mut current = 0usize;
        lines += 1;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if current == 0 {
                current = len;
            } else if current + 1 + len <= width {
                current += 1 + len;
            } else {
                lines += 1;
                current = len;
            }
            while current > width {
                lines += 1;
                current -= width;
            }
        }
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}

/// `"SOLUTIONS"` → `"S O L U T I O N S"` when it fits, the way headlines
/// are set wide on the page.
#[must_use]
pub fn spaced(title: &str, width: u16) -> String {
    let wide: String = title
        .chars()
        .map(String::from)
        .collect::<Vec<_>>()
        .join(" ");
    if wide.chars().count() <= usize::from(width) {
        wide
    } else {
        title.to_string()
    }
}

/// Rows a heading needs at `width`.
#[must_use]
pub fn heading_height(heading: &Heading, width: u16) -> u16 {
    2 + wrapped_lines(heading.subtitle, width)
}

/// Draw a centred section heading.
pub fn draw_heading(heading: &Heading, colors: ToneColors, area: Rect, buf: &mut Buffer) {
    let lines = vec![
        Line::from(Span::styled(
            spaced(heading.title, area.width),
            Style::default().fg(colors.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(heading.subtitle, Style::default().fg(colors.muted))),
    ];
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(area, buf);
}

/// Draw an accent button with a centred label.
pub fn draw_button(label: &str, colors: ToneColors, hovered: bool, area: Rect, buf: &mut Buffer) {
    let mut style = Style::default()
        .bg(colors.accent)
        .fg(colors.on_accent)
        .add_modifier(Modifier::BOLD);
    if hovered {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    Block::default().style(style).render(area, buf);
    let label_row = Rect {
        y: area.y + area.height / 2,
        height: 1.min(area.height),
        ..area
    };
    Paragraph::new(label)
        .style(style)
        .alignment(Alignment::Center)
        .render(label_row, buf);
}

/// Draw an outlined button.
pub fn draw_outline_button(
    label: &str,
    colors: ToneColors,
    hovered: bool,
    area: Rect,
    buf: &mut Buffer,
) {
    let border = if hovered { colors.accent } else { colors.text };
    Paragraph::new(label)
        .style(Style::default().fg(colors.text).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        )
        .render(area, buf);
}

/// Card frame on the surface colour; returns the inner area.
pub fn draw_card(title: Option<&str>, colors: ToneColors, hovered: bool, area: Rect, buf: &mut Buffer) -> Rect {
    let border = if hovered { colors.accent } else { colors.muted };
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors.surface).fg(colors.text));
    if let Some(title) = title {
        block = block.title(Span::styled(
            format!(" {title} "),
            Style::default().fg(colors.accent).add_modifier(Modifier::BOLD),
        ));
    }
    let inner = block.inner(area);
    block.render(area, buf);
    inner
}

/// Split `width` into `count` columns with `gap` between them; returns
/// `(x, width)` pairs relative to 0.
#[must_use]
pub fn grid_columns(width: u16, count: u16, gap: u16) -> Vec<(u16, u16)> {
    let count = count.max(1);
    let total_gap = gap * (count - 1);
    let each = width.saturating_sub(total_gap) / count;
    (0..count).map(|i| (i * (each + gap), each)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapped_lines() {
        assert_eq!(wrapped_lines("", 10), 1);
        assert_eq!(wrapped_lines("one two three", 20), 1);
        assert_eq!(wrapped_lines("one two three", 7), 2);
        assert_eq!(wrapped_lines("abcdefghij", 4), 3);
        assert_eq!(wrapped_lines("a\nb", 10), 2);
    }

    #[test]
    fn test_column_is_centred_and_capped() {
        assert_eq!(column(80), (2, 76));
        assert_eq!(column(200), (50, 100));
    }

    #[test]
    fn test_spaced_falls_back_when_narrow() {
        assert_eq!(spaced("ABC", 10), "A B C");
        assert_eq!(spaced("ABC", 4), "ABC");
    }

    #[test]
    fn test_grid_columns() {
        assert_eq!(grid_columns(50, 2, 2), vec![(0, 24), (26, 24)]);
        assert_eq!(grid_columns(10, 1, 2), vec![(0, 10)]);
    }

    #[test]
    fn test_section_order_and_tones() {
        assert_eq!(SectionKind::ALL[0], SectionKind::Hero);
        assert_eq!(SectionKind::ALL[4], SectionKind::Contact);
        assert_eq!(SectionKind::Solutions.tone(), Tone::Base);
        assert_eq!(SectionKind::Contact.tone(), Tone::Inverse);
    }

    #[test]
    fn test_layout_lookup() {
        let mut layout = SectionLayout::new(10);
        layout.push("card:a", Rect::new(1, 2, 3, 4));
        assert_eq!(layout.rect("card:a"), Some(Rect::new(1, 2, 3, 4)));
        assert_eq!(layout.rect("missing"), None);
    }
}
