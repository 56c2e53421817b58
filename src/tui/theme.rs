//! Theme system for consistent UI colors across dark and light modes.
//!
//! Both palettes are built from the studio colours: dark `#1f1d2c`, light
//! `#f3f3f3` and the accent green `#68f70b`. Sections alternate between the
//! base tone and the inverse tone, the way the page alternates dark and light
//! bands.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::RgbColor;

const DARK: Color = Color::Rgb(0x1f, 0x1d, 0x2c);
const LIGHT: Color = Color::Rgb(0xf3, 0xf3, 0xf3);
const ACCENT: Color = Color::Rgb(0x68, 0xf7, 0x0b);

/// Semantic color theme for the TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// Which palette this is
    pub variant: ThemeVariant,

    // Primary UI colors
    /// Borders, titles and emphasis
    pub primary: Color,
    /// Accent green for highlights, focus and calls to action
    pub accent: Color,
    /// Text drawn on top of the accent colour
    pub on_accent: Color,
    /// Success messages
    pub success: Color,
    /// Error messages
    pub error: Color,

    // Text hierarchy
    /// Primary text content color
    pub text: Color,
    /// Labels and supporting copy
    pub text_secondary: Color,
    /// Hints and disabled items
    pub text_muted: Color,

    // Backgrounds
    /// Base page background
    pub background: Color,
    /// Panels and cards on the base tone
    pub surface: Color,
    /// Background of inverse-tone sections
    pub inverse_bg: Color,
    /// Text on inverse-tone sections
    pub inverse_text: Color,
    /// Panels and cards on the inverse tone
    pub inverse_surface: Color,
    /// Accent readable on the inverse tone
    pub inverse_accent: Color,
    /// Selection background
    pub highlight_bg: Color,
}

/// Theme variant identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    /// Dark base tone
    Dark,
    /// Light base tone
    Light,
}

/// Background band a section is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// The theme's base background
    Base,
    /// The opposite background
    Inverse,
}

/// Colors resolved for one tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneColors {
    /// Band background
    pub bg: Color,
    /// Card background
    pub surface: Color,
    /// Body text
    pub text: Color,
    /// Secondary text
    pub muted: Color,
    /// Highlights and button fill
    pub accent: Color,
    /// Text on the accent fill
    pub on_accent: Color,
}

impl Theme {
    /// Detects the OS theme and returns the appropriate Theme.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Theme for a configured mode; `Auto` asks the OS.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Dark base with light inverse bands.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            variant: ThemeVariant::Dark,
            primary: LIGHT,
            accent: ACCENT,
            on_accent: DARK,
            success: ACCENT,
            error: Color::Rgb(0xf8, 0x71, 0x71),

            text: LIGHT,
            text_secondary: Color::Rgb(0xc4, 0xc3, 0xcb),
            text_muted: Color::Rgb(0x8a, 0x88, 0x99),

            background: DARK,
            surface: Color::Rgb(0x2e, 0x2c, 0x3d),
            inverse_bg: LIGHT,
            inverse_text: DARK,
            inverse_surface: Color::Rgb(0xff, 0xff, 0xff),
            inverse_accent: Color::Rgb(0x3c, 0x9a, 0x00),
            highlight_bg: Color::Rgb(0x3b, 0x39, 0x4d),
        }
    }

    /// Light base with dark inverse bands.
    ///
    /// The accent is darkened for contrast against the light background.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            variant: ThemeVariant::Light,
            primary: DARK,
            accent: Color::Rgb(0x3c, 0x9a, 0x00),
            on_accent: LIGHT,
            success: Color::Rgb(0x3c, 0x9a, 0x00),
            error: Color::Rgb(0xc0, 0x1c, 0x1c),

            text: DARK,
            text_secondary: Color::Rgb(0x4a, 0x48, 0x5a),
            text_muted: Color::Rgb(0x7a, 0x78, 0x88),

            background: LIGHT,
            surface: Color::Rgb(0xff, 0xff, 0xff),
            inverse_bg: DARK,
            inverse_text: LIGHT,
            inverse_surface: Color::Rgb(0x2e, 0x2c, 0x3d),
            inverse_accent: ACCENT,
            highlight_bg: Color::Rgb(0xdd, 0xdd, 0xe3),
        }
    }

    /// Colors for a section band.
    #[must_use]
    pub const fn tone(&self, tone: Tone) -> ToneColors {
        match tone {
            Tone::Base => ToneColors {
                bg: self.background,
                surface: self.surface,
                text: self.text,
                muted: self.text_secondary,
                accent: self.accent,
                on_accent: self.on_accent,
            },
            Tone::Inverse => ToneColors {
                bg: self.inverse_bg,
                surface: self.inverse_surface,
                text: self.inverse_text,
                muted: self.text_muted,
                accent: self.inverse_accent,
                on_accent: self.inverse_bg,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}

/// RGB channels of a terminal color, when it has them.
#[must_use]
pub const fn rgb_of(color: Color) -> Option<RgbColor> {
    match color {
        Color::Rgb(r, g, b) => Some(RgbColor::new(r, g, b)),
        Color::Black => Some(RgbColor::new(0, 0, 0)),
        Color::White => Some(RgbColor::new(255, 255, 255)),
        _ => None,
    }
}
