//! Position-dependent colour schemes.
//!
//! Non-negative positions get a blue ramp that depends only on the
//! position. Negative positions are hue-cycled from the term value, with
//! foreground and accent on the complementary hue. Pinned overrides take
//! precedence over both formulas.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::evaluator::{Index, Sequence, Term};

const BLUE_STEP: u64 = 5;
const BLUE_CAP: u64 = 200;
const BLUE_LIFT: u8 = 55;

const HUE_SATURATION: u8 = 70;
const BACKGROUND_LIGHTNESS: u8 = 80;
const FOREGROUND_LIGHTNESS: u8 = 20;
const ACCENT_LIGHTNESS: u8 = 40;
const ACCENT_ALPHA: f32 = 0.8;

const WHITE: Color = Color::Rgb {
    r: 255,
    g: 255,
    b: 255,
};
const POSITIVE_ACCENT: Color = Color::Rgba {
    r: 0,
    g: 100,
    b: 212,
    a: ACCENT_ALPHA,
};

/// A colour in one of the notations the viewer produces.
///
/// `Display` renders CSS-style functional notation, e.g. `rgb(0, 25, 80)`
/// or `hsl(181, 70%, 20%)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    Hsl { h: u16, s: u8, l: u8 },
    Hsla { h: u16, s: u8, l: u8, a: f32 },
}

impl Color {
    /// Convert to 8-bit RGB, ignoring alpha.
    #[must_use]
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Rgb { r, g, b } | Self::Rgba { r, g, b, .. } => (r, g, b),
            Self::Hsl { h, s, l } | Self::Hsla { h, s, l, .. } => hsl_to_rgb(h, s, l),
        }
    }

    /// Opacity in `[0, 1]`.
    #[must_use]
    pub fn alpha(self) -> f32 {
        match self {
            Self::Rgb { .. } | Self::Hsl { .. } => 1.0,
            Self::Rgba { a, .. } | Self::Hsla { a, .. } => a,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgb { r, g, b } => write!(f, "rgb({r}, {g}, {b})"),
            Self::Rgba { r, g, b, a } => write!(f, "rgba({r}, {g}, {b}, {a})"),
            Self::Hsl { h, s, l } => write!(f, "hsl({h}, {s}%, {l}%)"),
            Self::Hsla { h, s, l, a } => write!(f, "hsla({h}, {s}%, {l}%, {a})"),
        }
    }
}

/// Background, foreground, and accent colours for one cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
}

/// A fixed scheme for one position, overriding the formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PinnedColor {
    pub position: Index,
    pub scheme: ColorScheme,
}

/// Derives colour schemes from cursor positions.
#[derive(Debug, Clone, Default)]
pub struct ColorMapper {
    pinned: BTreeMap<Index, ColorScheme>,
}

impl ColorMapper {
    /// Create a mapper with no pinned overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with the given pinned overrides. Later entries for
    /// the same position win.
    #[must_use]
    pub fn with_pinned<I>(pins: I) -> Self
    where
        I: IntoIterator<Item = PinnedColor>,
    {
        let mut mapper = Self::new();
        for pin in pins {
            mapper.pin(pin.position, pin.scheme);
        }
        mapper
    }

    /// Pin `scheme` to `position`.
    pub fn pin(&mut self, position: Index, scheme: ColorScheme) {
        self.pinned.insert(position, scheme);
    }

    /// Pinned scheme for `position`, if any.
    #[must_use]
    pub fn pinned(&self, position: Index) -> Option<&ColorScheme> {
        self.pinned.get(&position)
    }

    /// Colour scheme for `position`.
    ///
    /// Only negative positions consult `sequence`.
    pub fn colors_for<S: Sequence + ?Sized>(&self, position: Index, sequence: &mut S) -> ColorScheme {
        if let Some(scheme) = self.pinned.get(&position) {
            return *scheme;
        }
        if position >= 0 {
            blue_ramp(position)
        } else {
            hue_cycle(sequence.term(position))
        }
    }
}

fn blue_ramp(position: Index) -> ColorScheme {
    let intensity = position.unsigned_abs().saturating_mul(BLUE_STEP).min(BLUE_CAP);
    let intensity = u8::try_from(intensity).unwrap_or(u8::MAX);
    ColorScheme {
        background: Color::Rgb {
            r: 0,
            g: intensity,
            b: intensity + BLUE_LIFT,
        },
        foreground: WHITE,
        accent: POSITIVE_ACCENT,
    }
}

fn hue_cycle(value: Term) -> ColorScheme {
    let hue = hue_for(value);
    let complement = (hue + 180) % 360;
    ColorScheme {
        background: Color::Hsl {
            h: hue,
            s: HUE_SATURATION,
            l: BACKGROUND_LIGHTNESS,
        },
        foreground: Color::Hsl {
            h: complement,
            s: HUE_SATURATION,
            l: FOREGROUND_LIGHTNESS,
        },
        accent: Color::Hsla {
            h: complement,
            s: HUE_SATURATION,
            l: ACCENT_LIGHTNESS,
            a: ACCENT_ALPHA,
        },
    }
}

/// Hue in `[0, 360)` for a term, using a mathematical (never negative) modulo.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hue_for(value: Term) -> u16 {
    if !value.is_finite() {
        return 0;
    }
    (value.rem_euclid(360.0).floor() as u16) % 360
}

/// Standard HSL to RGB conversion with saturation and lightness in percent.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> (u8, u8, u8) {
    let h = f64::from(h % 360);
    let s = f64::from(s.min(100)) / 100.0;
    let l = f64::from(l.min(100)) / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let sector = h / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = l - chroma / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    (channel(r), channel(g), channel(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::SequenceEvaluator;

    #[test]
    fn positive_blue_ramp() {
        let mut fib = SequenceEvaluator::new();
        let scheme = ColorMapper::new().colors_for(5, &mut fib);
        assert_eq!(scheme.background, Color::Rgb { r: 0, g: 25, b: 80 });
        assert_eq!(scheme.background.to_string(), "rgb(0, 25, 80)");
        assert_eq!(scheme.foreground, WHITE);
        assert_eq!(scheme.accent.to_string(), "rgba(0, 100, 212, 0.8)");
    }

    #[test]
    fn blue_ramp_caps_at_200() {
        let mut fib = SequenceEvaluator::new();
        let scheme = ColorMapper::new().colors_for(1_000_000, &mut fib);
        assert_eq!(scheme.background.to_string(), "rgb(0, 200, 255)");
    }

    #[test]
    fn positive_branch_ignores_sequence() {
        let mut fib = SequenceEvaluator::new();
        ColorMapper::new().colors_for(90, &mut fib);
        assert_eq!(fib.computations(), 0);
    }

    #[test]
    fn negative_hue_cycle() {
        let mut fib = SequenceEvaluator::new();
        let scheme = ColorMapper::new().colors_for(-1, &mut fib);
        assert_eq!(scheme.background.to_string(), "hsl(1, 70%, 80%)");
        assert_eq!(scheme.foreground.to_string(), "hsl(181, 70%, 20%)");
        assert_eq!(scheme.accent.to_string(), "hsla(181, 70%, 40%, 0.8)");
    }

    #[test]
    fn negative_values_wrap_into_range() {
        let mut fib = SequenceEvaluator::new();
        // F(-2) = -1 -> hue 359.
        let scheme = ColorMapper::new().colors_for(-2, &mut fib);
        assert_eq!(scheme.background.to_string(), "hsl(359, 70%, 80%)");
        assert_eq!(scheme.foreground.to_string(), "hsl(179, 70%, 20%)");
    }

    #[test]
    fn hue_for_values() {
        assert_eq!(hue_for(0.0), 0);
        assert_eq!(hue_for(360.0), 0);
        assert_eq!(hue_for(610.0), 250);
        assert_eq!(hue_for(-144.0), 216);
        assert_eq!(hue_for(f64::INFINITY), 0);
        assert_eq!(hue_for(f64::NAN), 0);
        assert!(hue_for(-4.346_655_768_693_743e208) < 360);
    }

    #[test]
    fn pinned_override_wins() {
        let deep_red = ColorScheme {
            background: Color::Rgb { r: 139, g: 0, b: 0 },
            foreground: WHITE,
            accent: Color::Rgb {
                r: 0,
                g: 123,
                b: 255,
            },
        };
        let mapper = ColorMapper::with_pinned([PinnedColor {
            position: 2,
            scheme: deep_red,
        }]);
        let mut fib = SequenceEvaluator::new();
        assert_eq!(mapper.colors_for(2, &mut fib), deep_red);
        assert_ne!(mapper.colors_for(3, &mut fib), deep_red);
        assert!(mapper.pinned(2).is_some());
    }

    #[test]
    fn hsl_conversion() {
        assert_eq!(hsl_to_rgb(0, 100, 50), (255, 0, 0));
        assert_eq!(hsl_to_rgb(120, 100, 50), (0, 255, 0));
        assert_eq!(hsl_to_rgb(240, 100, 50), (0, 0, 255));
        assert_eq!(hsl_to_rgb(0, 0, 100), (255, 255, 255));
        assert_eq!(hsl_to_rgb(359, 0, 0), (0, 0, 0));
    }

    #[test]
    fn alpha_values() {
        assert!((POSITIVE_ACCENT.alpha() - 0.8).abs() < f32::EPSILON);
        assert!((WHITE.alpha() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn scheme_serde_round_trip() {
        let mut fib = SequenceEvaluator::new();
        let scheme = ColorMapper::new().colors_for(-7, &mut fib);
        let json = serde_json::to_string(&scheme).unwrap();
        assert!(json.contains("\"kind\":\"hsl\""));
        let back: ColorScheme = serde_json::from_str(&json).unwrap();
        assert_eq!(back, scheme);
    }
}
