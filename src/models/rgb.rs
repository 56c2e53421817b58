//! RGB colour blending.
//!
//! Terminals have no alpha channel, so opacity is drawn by mixing a colour
//! toward the background it sits on.

// Allow intentional type casts for color math
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

/// RGB color value, 0-255 per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RgbColor {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl RgbColor {
    /// Creates a new `RgbColor` from individual channel values.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Converts the color to a Ratatui Color for terminal rendering.
    #[must_use]
    pub const fn to_ratatui_color(self) -> ratatui::style::Color {
        ratatui::style::Color::Rgb(self.r, self.g, self.b)
    }

    /// Mix toward `other`. `amount` is clamped to 0.0-1.0; 0.0 returns
    /// `self`, 1.0 returns `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flizzweb::models::RgbColor;
    ///
    /// let dark = RgbColor::new(0x1f, 0x1d, 0x2c);
    /// let accent = RgbColor::new(0x68, 0xf7, 0x0b);
    /// assert_eq!(accent.blend(dark, 1.0), dark);
    /// ```
    #[must_use]
    pub fn blend(self, other: Self, amount: f32) -> Self {
        let t = amount.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| -> u8 {
            let a = f32::from(a);
            (a + (f32::from(b) - a) * t).round().clamp(0.0, 255.0) as u8
        };
        Self::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}
