//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event dispatch and the
//! widgets that draw the page.

// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]

pub mod component;
pub mod contact_form;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod page;
pub mod paint;
pub mod sections;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{
        self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
        Event, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout, Rect},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;
use tracing::{debug, info};

use crate::animation::Engine;
use crate::assets::IconResolver;
use crate::config::{Config, ThemeMode};
use crate::content::ContentRegistry;
use crate::services::{LogSink, SubmissionSink};

// Re-export TUI components
pub use component::Component;
pub use contact_form::{ContactFormEvent, ContactFormState};
pub use help_overlay::HelpOverlayState;
pub use help_registry::HelpRegistry;
pub use page::Page;
pub use status_bar::StatusBar;
pub use theme::{Theme, ThemeVariant, Tone};

/// Rows taken by the status bar.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Application state.
pub struct AppState {
    /// Loaded configuration
    pub config: Config,
    /// Theme mode, cycled with `t`
    pub theme_mode: ThemeMode,
    /// Active palette
    pub theme: Theme,
    /// Animation engine shared by every section scope
    pub engine: Engine,
    /// The scrolling page
    pub page: Page,
    /// Contact form state
    pub form: ContactFormState,
    /// Where submitted forms go
    pub sink: Box<dyn SubmissionSink>,
    /// Last status message
    pub status_message: String,
    /// Keybinding definitions
    pub help_registry: HelpRegistry,
    /// Open help overlay
    pub help: Option<HelpOverlayState>,
    /// Set when the app should exit
    pub should_quit: bool,
}

impl AppState {
    /// State for a terminal of `width` x `height` cells, with the page synced
    /// to the top.
    pub fn new(
        config: Config,
        registry: &ContentRegistry,
        engine: Engine,
        width: u16,
        height: u16,
    ) -> Self {
        let icons = IconResolver::new(registry.asset_dir(), config.ui.emoji_icons);
        let sections = sections::page_sections(registry, &icons);
        let mut page = Page::new(sections, width, height.saturating_sub(STATUS_BAR_HEIGHT));
        page.sync(&engine);

        let theme_mode = config.ui.theme_mode;
        let help_registry = HelpRegistry::default();
        let help = config
            .ui
            .show_help_on_startup
            .then(|| HelpOverlayState::new(help_registry.clone()));

        Self {
            config,
            theme_mode,
            theme: Theme::from_mode(theme_mode),
            engine,
            page,
            form: ContactFormState::new(),
            sink: Box::new(LogSink::new()),
            status_message: String::new(),
            help_registry,
            help,
            should_quit: false,
        }
    }

    /// Replace the submission sink.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn SubmissionSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Show a status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
    }

    /// Reflow for a new terminal size.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.page
            .resize(&self.engine, width, height.saturating_sub(STATUS_BAR_HEIGHT));
    }

    /// Advance animations by one frame.
    pub fn tick(&mut self) {
        self.page.tick();
    }
}

/// Split the screen into page and status bar.
#[must_use]
pub fn screen_areas(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
        .split(area);
    (chunks[0], chunks[1])
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )
    .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )
    .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Main event loop. Reverts every mounted section before returning.
pub fn run_tui<B: Backend>(state: &mut AppState, terminal: &mut Terminal<B>) -> Result<()> {
    let frame = Duration::from_millis(state.config.motion.frame_ms);
    info!(frame_ms = state.config.motion.frame_ms, "Event loop started");

    let result = event_loop(state, terminal, frame);
    state.page.unmount_all();
    debug!(
        listeners = state.engine.active_listeners(),
        teardowns = state.engine.teardowns(),
        "Event loop finished"
    );
    result
}

fn event_loop<B: Backend>(
    state: &mut AppState,
    terminal: &mut Terminal<B>,
    frame: Duration,
) -> Result<()> {
    loop {
        state.tick();
        terminal.draw(|f| render(f, state))?;

        if event::poll(frame)? {
            let page_area = screen_areas(terminal.get_frame().area()).0;
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(state, key)? {
                        break;
                    }
                }
                Event::Mouse(mouse) => handlers::handle_mouse_event(state, mouse, page_area),
                Event::Resize(width, height) => state.resize(width, height),
                Event::FocusLost => state.page.on_pointer_exit(),
                _ => {}
            }
        }

        if state.should_quit {
            break;
        }
    }
    Ok(())
}

/// Render the UI from current state
pub fn render(f: &mut Frame, state: &AppState) {
    let area = f.area();
    let (page_area, status_area) = screen_areas(area);

    state
        .page
        .render(page_area, f.buffer_mut(), &state.theme, &state.form);
    StatusBar::render(f, status_area, state, &state.theme);

    if let Some(help) = &state.help {
        help.render(area, f.buffer_mut(), &state.theme);
    }
}

/// Route a key to the help overlay, the form or the page. Returns `Ok(true)`
/// to quit.
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    if state.help.is_some() {
        return handlers::handle_help_input(state, key);
    }
    if !state.form.should_close() {
        return handlers::handle_form_input(state, key);
    }
    handlers::handle_main_input(state, key)
}
