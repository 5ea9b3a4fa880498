//! Light/dark color themes
//!
//! The dark-mode flag is the one persisted preference; everything else about
//! the theme derives from it.

use ratatui::style::{Color, Modifier, Style};

/// Colors used across the UI, resolved from the dark-mode flag
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub dark: bool,
    pub bg: Color,
    pub fg: Color,
    pub muted: Color,
    pub accent: Color,
    pub border: Color,
    pub badge_ok: Color,
    pub badge_warn: Color,
    pub badge_err: Color,
}

impl Theme {
    /// Theme for the given dark-mode flag
    pub fn from_flag(dark: bool) -> Self {
        if dark { Self::dark() } else { Self::light() }
    }

    fn light() -> Self {
        Self {
            dark: false,
            bg: Color::White,
            fg: Color::Black,
            muted: Color::DarkGray,
            accent: Color::Blue,
            border: Color::Gray,
            badge_ok: Color::Green,
            badge_warn: Color::Yellow,
            badge_err: Color::Red,
        }
    }

    fn dark() -> Self {
        Self {
            dark: true,
            bg: Color::Black,
            fg: Color::White,
            muted: Color::Gray,
            accent: Color::Cyan,
            border: Color::DarkGray,
            badge_ok: Color::LightGreen,
            badge_warn: Color::LightYellow,
            badge_err: Color::LightRed,
        }
    }

    /// Base style for page content
    pub fn base(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bg)
    }

    /// Style for secondary text
    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Style for highlighted/active elements
    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for the selected item in a list or tab row
    pub fn selection(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a status badge
    pub fn badge(&self, ok: bool) -> Style {
        let color = if ok { self.badge_ok } else { self.badge_warn };
        Style::default().fg(color)
    }

    /// Label shown on the theme toggle
    pub fn toggle_label(&self) -> &'static str {
        if self.dark { "Light Mode" } else { "Dark Mode" }
    }
}
