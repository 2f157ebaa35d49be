//! Teal & Coral colour themes for the encounter tracker.
//!
//! All colours are RGB truecolor. Views take a [`Theme`] instead of using
//! inline `Color::*` literals so the `mode` command can swap palettes.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

use crate::config::ThemeMode;
use crate::core::interpreter::StatusLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    /// Base background.
    pub bg: Color,
    /// Elevated panels (command key, focused input).
    pub surface: Color,
    /// Primary text.
    pub text: Color,
    /// Secondary labels.
    pub text_muted: Color,
    /// Faint hints, unfocused borders.
    pub text_dim: Color,
    /// Teal: focused borders, headings.
    pub primary: Color,
    /// Light teal: initiative values, cursor focus.
    pub primary_light: Color,
    /// Coral: title, highlights.
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub warning: Color,
    pub info: Color,
}

impl Theme {
    pub const fn dark() -> Self {
        Self {
            mode: ThemeMode::Dark,
            bg: Color::Rgb(0x0A, 0x19, 0x19),
            surface: Color::Rgb(0x12, 0x26, 0x26),
            text: Color::Rgb(0xE0, 0xE0, 0xE0),
            text_muted: Color::Rgb(0x80, 0x80, 0x80),
            text_dim: Color::Rgb(0x50, 0x50, 0x50),
            primary: Color::Rgb(0x00, 0x80, 0x80),
            primary_light: Color::Rgb(0x00, 0x96, 0x88),
            accent: Color::Rgb(0xFF, 0x7F, 0x50),
            error: Color::Rgb(0xEF, 0x53, 0x50),
            success: Color::Rgb(0x66, 0xBB, 0x6A),
            warning: Color::Rgb(0xFF, 0xA7, 0x26),
            info: Color::Rgb(0x42, 0xA5, 0xF5),
        }
    }

    pub const fn light() -> Self {
        Self {
            mode: ThemeMode::Light,
            bg: Color::Rgb(0xFA, 0xFA, 0xF7),
            surface: Color::Rgb(0xE4, 0xEE, 0xED),
            text: Color::Rgb(0x1A, 0x1A, 0x1A),
            text_muted: Color::Rgb(0x5C, 0x5C, 0x5C),
            text_dim: Color::Rgb(0x9E, 0x9E, 0x9E),
            primary: Color::Rgb(0x00, 0x69, 0x69),
            primary_light: Color::Rgb(0x00, 0x79, 0x6B),
            accent: Color::Rgb(0xD8, 0x4A, 0x1B),
            error: Color::Rgb(0xC6, 0x28, 0x28),
            success: Color::Rgb(0x2E, 0x7D, 0x32),
            warning: Color::Rgb(0xB2, 0x6A, 0x00),
            info: Color::Rgb(0x15, 0x65, 0xC0),
        }
    }

    pub const fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    // ── Style helpers ───────────────────────────────────────────────────

    /// Full-screen background and default text.
    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.bg)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Accent-coloured bold text (titles).
    pub fn title(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }

    /// Section header style.
    pub fn heading(&self) -> Style {
        Style::default().fg(self.primary).add_modifier(Modifier::BOLD)
    }

    pub fn border_focused(&self) -> Style {
        Style::default().fg(self.primary)
    }

    pub fn border_default(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    /// Key hint style (e.g., "Esc:focus").
    pub fn key_hint(&self) -> Style {
        Style::default().fg(self.primary_light)
    }

    pub fn status(&self, level: StatusLevel) -> Style {
        let color = match level {
            StatusLevel::Info => self.info,
            StatusLevel::Success => self.success,
            StatusLevel::Error => self.error,
        };
        Style::default().fg(color)
    }

    // ── Block builders ──────────────────────────────────────────────────

    /// A bordered block with focused styling.
    pub fn block_focused<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(self.border_focused())
    }

    /// A bordered block with default (unfocused) styling.
    pub fn block_default<'a>(&self, title: &'a str) -> Block<'a> {
        Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(self.border_default())
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
