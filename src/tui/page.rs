//! The scrolling page: section layout, mounting and drawing.
//!
//! Sections are stacked top to bottom in page rows. A section is mounted
//! (its [`AnimationScope`] created and filled) while it overlaps the mount
//! window, from one viewport above the visible rows to one viewport below
//! them, and reverted as soon as it leaves. Drawing renders the visible rows into a buffer in page
//! coordinates and copies them onto the frame.

use ratatui::{buffer::Buffer, layout::Rect};
use tracing::debug;

use super::contact_form::ContactFormState;
use super::sections::{relayout, Canvas, Mounter, RenderContext, Section, SectionKind, SectionLayout};
use super::theme::Theme;
use crate::animation::{AnimationScope, Engine, Viewport};

/// Rows moved by one mouse wheel notch.
pub const WHEEL_STEP: u16 = 3;

/// The stacked sections and the scroll position over them.
pub struct Page {
    sections: Vec<Box<dyn Section>>,
    layouts: Vec<SectionLayout>,
    tops: Vec<u16>,
    scopes: Vec<Option<AnimationScope>>,
    width: u16,
    viewport_height: u16,
    total_height: u16,
    scroll: u16,
    /// Last pointer cell in viewport coordinates
    pointer: Option<(u16, u16)>,
}

impl Page {
    /// Lay out `sections` for a `width` x `viewport_height` viewport. Nothing
    /// is mounted until [`Page::sync`].
    #[must_use]
    pub fn new(sections: Vec<Box<dyn Section>>, width: u16, viewport_height: u16) -> Self {
        let scopes = sections.iter().map(|_| None).collect();
        let mut page = Self {
            sections,
            layouts: Vec::new(),
            tops: Vec::new(),
            scopes,
            width,
            viewport_height,
            total_height: 0,
            scroll: 0,
            pointer: None,
        };
        page.layout();
        page
    }

    fn layout(&mut self) {
        self.layouts = self.sections.iter().map(|s| s.layout(self.width)).collect();
        self.tops.clear();
        let mut top = 0u16;
        for layout in &self.layouts {
            self.tops.push(top);
            top = top.saturating_add(layout.height);
        }
        self.total_height = top;
        self.scroll = self.scroll.min(self.max_scroll());
    }

    /// Page rows in total.
    #[must_use]
    pub const fn total_height(&self) -> u16 {
        self.total_height
    }

    /// First visible page row.
    #[must_use]
    pub const fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Rows in the viewport.
    #[must_use]
    pub const fn viewport_height(&self) -> u16 {
        self.viewport_height
    }

    /// Largest scroll position.
    #[must_use]
    pub const fn max_scroll(&self) -> u16 {
        self.total_height.saturating_sub(self.viewport_height)
    }

    /// Scroll position as a percentage of the scrollable range.
    #[must_use]
    pub fn scroll_percent(&self) -> u16 {
        let max = self.max_scroll();
        if max == 0 {
            return 100;
        }
        let percent = u32::from(self.scroll) * 100 / u32::from(max);
        u16::try_from(percent).unwrap_or(100)
    }

    fn viewport(&self) -> Viewport {
        Viewport::from_rows(self.scroll, self.viewport_height)
    }

    /// Page rows of section `index`.
    fn range(&self, index: usize) -> (u16, u16) {
        let top = self.tops[index];
        (top, top.saturating_add(self.layouts[index].height))
    }

    /// Top row of `kind`, if the page has it.
    #[must_use]
    pub fn top_of(&self, kind: SectionKind) -> Option<u16> {
        self.sections
            .iter()
            .position(|s| s.kind() == kind)
            .map(|i| self.tops[i])
    }

    /// Section under the upper third of the viewport.
    #[must_use]
    pub fn current_section(&self) -> Option<SectionKind> {
        let probe = self.scroll.saturating_add(self.viewport_height / 3);
        self.tops
            .iter()
            .rposition(|top| *top <= probe)
            .map(|i| self.sections[i].kind())
    }

    /// Whether `kind` currently has a mounted scope.
    #[must_use]
    pub fn is_mounted(&self, kind: SectionKind) -> bool {
        self.sections
            .iter()
            .zip(&self.scopes)
            .any(|(s, scope)| s.kind() == kind && scope.is_some())
    }

    /// The mounted scope of `kind`.
    #[must_use]
    pub fn scope(&self, kind: SectionKind) -> Option<&AnimationScope> {
        self.sections
            .iter()
            .zip(&self.scopes)
            .find(|(s, _)| s.kind() == kind)
            .and_then(|(_, scope)| scope.as_ref())
    }

    /// Scroll to `row` (clamped) and update mounts and triggers.
    pub fn scroll_to(&mut self, engine: &Engine, row: u16) {
        self.scroll = row.min(self.max_scroll());
        self.sync(engine);
    }

    /// Scroll by `delta` rows.
    pub fn scroll_by(&mut self, engine: &Engine, delta: i32) {
        let row = (i32::from(self.scroll) + delta).clamp(0, i32::from(u16::MAX));
        self.scroll_to(engine, u16::try_from(row).unwrap_or(u16::MAX));
    }

    /// Scroll by one viewport, keeping two rows of context.
    pub fn page_by(&mut self, engine: &Engine, pages: i32) {
        let step = i32::from(self.viewport_height.saturating_sub(2).max(1));
        self.scroll_by(engine, pages * step);
    }

    /// Bring the top of `kind` to the top of the viewport.
    pub fn jump_to(&mut self, engine: &Engine, kind: SectionKind) {
        if let Some(top) = self.top_of(kind) {
            self.scroll_to(engine, top);
        }
    }

    /// Reflow for a new terminal size. Mounted sections keep their
    /// animation state unless the new layout adds or drops slots, in which
    /// case they are mounted again.
    pub fn resize(&mut self, engine: &Engine, width: u16, viewport_height: u16) {
        if width == self.width && viewport_height == self.viewport_height {
            return;
        }
        self.width = width;
        self.viewport_height = viewport_height;
        let previous = std::mem::take(&mut self.layouts);
        self.layout();
        for i in 0..self.sections.len() {
            if self.scopes[i].is_none() {
                continue;
            }
            if previous.get(i).is_some_and(|old| old.same_keys(&self.layouts[i])) {
                if let Some(scope) = self.scopes[i].as_mut() {
                    relayout(scope, &self.layouts[i], self.tops[i]);
                }
            } else {
                self.unmount(i);
                self.mount(engine, i);
            }
        }
        debug!(width, viewport_height, total = self.total_height, "Page reflowed");
        self.sync(engine);
    }

    /// Mount sections entering the mount window, revert those leaving it,
    /// then dispatch the viewport to every mounted scope and hit-test the
    /// last pointer cell against the moved elements.
    pub fn sync(&mut self, engine: &Engine) {
        let window_start = self.scroll.saturating_sub(self.viewport_height);
        let window_end = self
            .scroll
            .saturating_add(self.viewport_height.saturating_mul(2));

        for i in 0..self.sections.len() {
            let (top, bottom) = self.range(i);
            let in_window = top < window_end && bottom > window_start;
            match (in_window, self.scopes[i].is_some()) {
                (true, false) => self.mount(engine, i),
                (false, true) => self.unmount(i),
                _ => {}
            }
        }

        let viewport = self.viewport();
        for scope in self.scopes.iter_mut().flatten() {
            scope.on_scroll(viewport);
        }
        if let Some((column, row)) = self.pointer {
            self.hit_test(column, row);
        }
    }

    fn mount(&mut self, engine: &Engine, index: usize) {
        let section = &self.sections[index];
        let mut scope = engine.scope(section.kind().id());
        let mut mounter = Mounter::new(&mut scope, &self.layouts[index], self.tops[index]);
        section.mount(&mut mounter);
        debug!(
            section = section.kind().id(),
            elements = scope.len(),
            listeners = scope.listener_count(),
            "Section mounted"
        );
        self.scopes[index] = Some(scope);
    }

    fn unmount(&mut self, index: usize) {
        if let Some(scope) = self.scopes[index].take() {
            let released = scope.revert();
            debug!(section = self.sections[index].kind().id(), released, "Section unmounted");
        }
    }

    /// Revert every mounted scope.
    pub fn unmount_all(&mut self) {
        for i in 0..self.scopes.len() {
            self.unmount(i);
        }
    }

    /// Pointer moved to `(column, row)` of the viewport.
    pub fn on_pointer(&mut self, column: u16, row: u16) {
        self.pointer = Some((column, row));
        self.hit_test(column, row);
    }

    fn hit_test(&mut self, column: u16, row: u16) {
        let page_row = row.saturating_add(self.scroll);
        for scope in self.scopes.iter_mut().flatten() {
            scope.on_pointer(column, page_row);
        }
    }

    /// Pointer left the viewport.
    pub fn on_pointer_exit(&mut self) {
        self.pointer = None;
        for scope in self.scopes.iter_mut().flatten() {
            scope.on_pointer_exit();
        }
    }

    /// Settle finished transitions.
    pub fn tick(&mut self) {
        for scope in self.scopes.iter_mut().flatten() {
            scope.tick();
        }
    }

    /// Draw the visible rows into `area` of `buf`.
    pub fn render(&self, area: Rect, buf: &mut Buffer, theme: &Theme, form: &ContactFormState) {
        let view_area = Rect::new(0, self.scroll, area.width, area.height);
        let mut view = Buffer::empty(view_area);
        let ctx = RenderContext { theme, form };

        for (i, section) in self.sections.iter().enumerate() {
            let (top, bottom) = self.range(i);
            if top >= view_area.bottom() || bottom <= view_area.y {
                continue;
            }
            let Some(scope) = self.scopes[i].as_ref() else {
                continue;
            };
            let colors = theme.tone(section.kind().tone());
            let mut canvas = Canvas::new(&mut view, scope, &self.layouts[i], top, colors);
            section.render(&mut canvas, &ctx);
        }

        for y in 0..view_area.height {
            for x in 0..view_area.width {
                let (Some(src), Some(dst)) = (
                    view.cell((x, view_area.y + y)),
                    buf.cell_mut((area.x + x, area.y + y)),
                ) else {
                    continue;
                };
                *dst = src.clone();
            }
        }
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        self.unmount_all();
    }
}

impl std::fmt::Debug for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Page")
            .field("sections", &self.sections.len())
            .field("total_height", &self.total_height)
            .field("scroll", &self.scroll)
            .field("pointer", &self.pointer)
            .field("mounted", &self.scopes.iter().flatten().count())
            .finish_non_exhaustive()
    }
}
