//! TUI styles and color themes.
//!
//! The sequence area takes its colours from the session's
//! [`ColorScheme`]; the chrome around it uses a fixed [`ColorTheme`].

use fibscroll_core::{ColorScheme, Role};
use ratatui::style::{Color, Modifier, Style};

/// Convert a core colour to a terminal truecolor, compositing it over
/// `backdrop` by its alpha. Opaque colours convert unchanged.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn to_terminal(color: fibscroll_core::Color, backdrop: fibscroll_core::Color) -> Color {
    let alpha = color.alpha().clamp(0.0, 1.0);
    let (r, g, b) = color.to_rgb();
    let (br, bg, bb) = backdrop.to_rgb();
    let mix = |front: u8, back: u8| {
        (f32::from(front) * alpha + f32::from(back) * (1.0 - alpha)).round() as u8
    };
    Color::Rgb(mix(r, br), mix(g, bg), mix(b, bb))
}

/// Colour theme for the header, footer, and controls.
pub struct ColorTheme {
    pub primary: Color,
    pub warning: Color,
    pub text: Color,
    pub muted: Color,
    pub border: Color,
}

impl Default for ColorTheme {
    fn default() -> Self {
        Self {
            primary: Color::Cyan,
            warning: Color::Yellow,
            text: Color::White,
            muted: Color::DarkGray,
            border: Color::Gray,
        }
    }
}

impl ColorTheme {
    /// Get the style for a header.
    #[must_use]
    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.primary)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the style for normal text.
    #[must_use]
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Get the style for muted text.
    #[must_use]
    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Get the style for key hints.
    #[must_use]
    pub fn key_style(&self) -> Style {
        Style::default().fg(self.warning)
    }

    #[must_use]
    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }
}

/// Styles for the sequence area, derived from a position's colour scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceStyle {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
}

impl From<&ColorScheme> for SequenceStyle {
    fn from(scheme: &ColorScheme) -> Self {
        Self {
            background: to_terminal(scheme.background, scheme.background),
            foreground: to_terminal(scheme.foreground, scheme.background),
            accent: to_terminal(scheme.accent, scheme.background),
        }
    }
}

impl SequenceStyle {
    /// Fill style for the whole area.
    #[must_use]
    pub fn base(&self) -> Style {
        Style::default().bg(self.background).fg(self.foreground)
    }

    /// Emphasis for a term by its distance from the centre.
    #[must_use]
    pub fn role(&self, role: Role) -> Style {
        let base = self.base();
        match role {
            Role::Center => base
                .bg(self.accent)
                .add_modifier(Modifier::BOLD),
            Role::Adjacent => base.add_modifier(Modifier::BOLD),
            Role::Further => base,
            Role::Distant => base.add_modifier(Modifier::DIM),
            Role::VeryDistant => base.add_modifier(Modifier::DIM | Modifier::ITALIC),
        }
    }

    /// Style for `+` and `=` markers.
    #[must_use]
    pub fn marker(&self) -> Style {
        self.base().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}
