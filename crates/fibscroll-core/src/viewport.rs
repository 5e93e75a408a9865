//! Viewport building: the window of terms centred on the cursor.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::constants::{MAX_WINDOW_SIZE, PLACEHOLDER_TEXT};
use crate::error::ConfigError;
use crate::evaluator::{Index, Sequence, Term};
use crate::format::format_term;

/// Number of terms in a window. Always odd so there is a single centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize(usize);

impl WindowSize {
    /// Validate a window size.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        if size == 0 || size > MAX_WINDOW_SIZE {
            return Err(ConfigError::WindowOutOfRange {
                got: size,
                max: MAX_WINDOW_SIZE,
            });
        }
        if size % 2 == 0 {
            return Err(ConfigError::EvenWindow(size));
        }
        Ok(Self(size))
    }

    #[must_use]
    pub fn get(self) -> usize {
        self.0
    }

    /// Terms on each side of the centre.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn half(self) -> i64 {
        (self.0 / 2) as i64
    }

    /// Cursor positions whose whole window lies inside the index range.
    #[must_use]
    pub fn cursor_range(self) -> RangeInclusive<Index> {
        Index::MIN + self.half()..=Index::MAX - self.half()
    }
}

impl TryFrom<usize> for WindowSize {
    type Error = ConfigError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

/// Emphasis tier of a term, by distance from the centre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Center,
    Adjacent,
    Further,
    Distant,
    VeryDistant,
}

impl Role {
    #[must_use]
    pub fn from_offset(offset: i64) -> Self {
        match offset.unsigned_abs() {
            0 => Self::Center,
            1 => Self::Adjacent,
            2 => Self::Further,
            3 => Self::Distant,
            _ => Self::VeryDistant,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Center => "center",
            Self::Adjacent => "adjacent",
            Self::Further => "further",
            Self::Distant => "distant",
            Self::VeryDistant => "very-distant",
        }
    }
}

/// Arrangement of the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Terms only.
    Plain,
    /// `F(c-2) + F(c-1) = F(c)`: markers after offsets -2 and -1.
    #[default]
    Equation,
}

impl Layout {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Plain => Self::Equation,
            Self::Equation => Self::Plain,
        }
    }
}

/// Non-numeric separator shown in the equation layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Plus,
    Equals,
}

impl Marker {
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Equals => "=",
        }
    }
}

/// One displayed term.
#[derive(Debug, Clone, PartialEq)]
pub struct TermCell {
    /// Distance from the cursor.
    pub offset: i64,
    pub index: Index,
    /// `None` for placeholders below the floor.
    pub term: Option<Term>,
    pub role: Role,
    pub text: String,
}

/// One row of the viewport.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewportEntry {
    Term(TermCell),
    Marker(Marker),
}

impl ViewportEntry {
    #[must_use]
    pub fn as_term(&self) -> Option<&TermCell> {
        match self {
            Self::Term(cell) => Some(cell),
            Self::Marker(_) => None,
        }
    }
}

/// How a viewport is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportOptions {
    pub window: WindowSize,
    pub layout: Layout,
    /// Indices below this render as a placeholder without evaluation.
    pub placeholder_floor: Option<Index>,
}

impl ViewportOptions {
    #[must_use]
    pub fn plain(window: WindowSize) -> Self {
        Self {
            window,
            layout: Layout::Plain,
            placeholder_floor: None,
        }
    }
}

/// Build the window of terms centred on `cursor`, in ascending offset order.
///
/// Indices are consecutive as long as `cursor` lies in
/// [`WindowSize::cursor_range`].
pub fn build_viewport<S: Sequence + ?Sized>(
    cursor: Index,
    options: &ViewportOptions,
    sequence: &mut S,
) -> Vec<ViewportEntry> {
    let half = options.window.half();
    let mut entries = Vec::with_capacity(options.window.get() + 2);

    for offset in -half..=half {
        let index = cursor.saturating_add(offset);
        entries.push(ViewportEntry::Term(build_cell(
            offset,
            index,
            options.placeholder_floor,
            sequence,
        )));

        if options.layout == Layout::Equation {
            match offset {
                -2 => entries.push(ViewportEntry::Marker(Marker::Plus)),
                -1 => entries.push(ViewportEntry::Marker(Marker::Equals)),
                _ => {}
            }
        }
    }
    entries
}

fn build_cell<S: Sequence + ?Sized>(
    offset: i64,
    index: Index,
    floor: Option<Index>,
    sequence: &mut S,
) -> TermCell {
    if floor.is_some_and(|floor| index < floor) {
        return TermCell {
            offset,
            index,
            term: None,
            role: Role::VeryDistant,
            text: PLACEHOLDER_TEXT.to_string(),
        };
    }
    let term = sequence.term(index);
    TermCell {
        offset,
        index,
        term: Some(term),
        role: Role::from_offset(offset),
        text: format_term(index, term),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluator::SequenceEvaluator;

    fn window(size: usize) -> WindowSize {
        WindowSize::new(size).unwrap()
    }

    fn terms(entries: &[ViewportEntry]) -> Vec<&TermCell> {
        entries.iter().filter_map(ViewportEntry::as_term).collect()
    }

    #[test]
    fn cursor_range_keeps_window_in_bounds() {
        let range = window(7).cursor_range();
        assert_eq!(*range.start(), i64::MIN + 3);
        assert_eq!(*range.end(), i64::MAX - 3);
        assert_eq!(window(1).cursor_range(), i64::MIN..=i64::MAX);
    }

    #[test]
    fn window_at_range_edges_is_consecutive() {
        let window = window(7);
        let mut fib = SequenceEvaluator::new();
        for cursor in [*window.cursor_range().start(), *window.cursor_range().end()] {
            let entries = build_viewport(cursor, &ViewportOptions::plain(window), &mut fib);
            let indices: Vec<Index> = terms(&entries).iter().map(|c| c.index).collect();
            assert_eq!(indices.len(), 7);
            assert!(indices.windows(2).all(|pair| pair[1] == pair[0] + 1), "{indices:?}");
            assert_eq!(indices[3], cursor);
        }
    }

    #[test]
    fn window_size_validation() {
        assert!(WindowSize::new(7).is_ok());
        assert!(WindowSize::new(1).is_ok());
        assert!(matches!(WindowSize::new(8), Err(ConfigError::EvenWindow(8))));
        assert!(matches!(
            WindowSize::new(0),
            Err(ConfigError::WindowOutOfRange { .. })
        ));
        assert!(WindowSize::try_from(MAX_WINDOW_SIZE + 2).is_err());
        assert_eq!(window(9).half(), 4);
    }

    #[test]
    fn seven_items_centred_on_zero() {
        let mut fib = SequenceEvaluator::new();
        let entries = build_viewport(0, &ViewportOptions::plain(window(7)), &mut fib);
        assert_eq!(entries.len(), 7);

        let cells = terms(&entries);
        let offsets: Vec<i64> = cells.iter().map(|c| c.offset).collect();
        assert_eq!(offsets, [-3, -2, -1, 0, 1, 2, 3]);

        let center = cells.iter().find(|c| c.offset == 0).unwrap();
        assert_eq!(center.role, Role::Center);
        assert_eq!(center.index, 0);
        assert_eq!(center.text, "0");
    }

    #[test]
    fn values_and_text_around_negative_cursor() {
        let mut fib = SequenceEvaluator::new();
        let entries = build_viewport(-3, &ViewportOptions::plain(window(3)), &mut fib);
        let texts: Vec<&str> = terms(&entries).iter().map(|c| c.text.as_str()).collect();
        // F(-4), F(-3), F(-2)
        assert_eq!(texts, ["-3", "2", "-1"]);
    }

    #[test]
    fn roles_by_distance() {
        let mut fib = SequenceEvaluator::new();
        let entries = build_viewport(10, &ViewportOptions::plain(window(11)), &mut fib);
        let roles: Vec<Role> = terms(&entries).iter().map(|c| c.role).collect();
        assert_eq!(
            roles,
            [
                Role::VeryDistant,
                Role::VeryDistant,
                Role::Distant,
                Role::Further,
                Role::Adjacent,
                Role::Center,
                Role::Adjacent,
                Role::Further,
                Role::Distant,
                Role::VeryDistant,
                Role::VeryDistant,
            ]
        );
    }

    #[test]
    fn equation_layout_inserts_markers() {
        let mut fib = SequenceEvaluator::new();
        let options = ViewportOptions {
            window: window(7),
            layout: Layout::Equation,
            placeholder_floor: None,
        };
        let entries = build_viewport(5, &options, &mut fib);
        assert_eq!(entries.len(), 9);
        assert_eq!(entries[2], ViewportEntry::Marker(Marker::Plus));
        assert_eq!(entries[4], ViewportEntry::Marker(Marker::Equals));

        // F(3) + F(4) = F(5)
        let cells = terms(&entries);
        assert_eq!(cells[1].term, Some(2.0));
        assert_eq!(cells[2].term, Some(3.0));
        assert_eq!(cells[3].term, Some(5.0));
    }

    #[test]
    fn equation_layout_on_tiny_window() {
        let mut fib = SequenceEvaluator::new();
        let options = ViewportOptions {
            window: window(3),
            layout: Layout::Equation,
            placeholder_floor: None,
        };
        let entries = build_viewport(5, &options, &mut fib);
        // Only the `=` after offset -1 fits.
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[1], ViewportEntry::Marker(Marker::Equals));
    }

    #[test]
    fn placeholder_floor_skips_evaluation() {
        let mut fib = SequenceEvaluator::new();
        let options = ViewportOptions {
            window: window(9),
            layout: Layout::Plain,
            placeholder_floor: Some(0),
        };
        let entries = build_viewport(2, &options, &mut fib);
        let cells = terms(&entries);
        assert_eq!(cells[0].index, -2);
        assert_eq!(cells[0].term, None);
        assert_eq!(cells[0].text, PLACEHOLDER_TEXT);
        assert_eq!(cells[0].role, Role::VeryDistant);
        assert_eq!(cells[2].index, 0);
        assert_eq!(cells[2].term, Some(0.0));
        assert!(!fib.is_cached(-1));
    }

    #[test]
    fn overlapping_windows_hit_cache() {
        let mut fib = SequenceEvaluator::new();
        let options = ViewportOptions::plain(window(7));
        build_viewport(20, &options, &mut fib);
        let computed = fib.computations();
        build_viewport(19, &options, &mut fib);
        assert_eq!(fib.computations(), computed);
    }

    #[test]
    fn layout_toggle() {
        assert_eq!(Layout::Plain.toggled(), Layout::Equation);
        assert_eq!(Layout::Equation.toggled(), Layout::Plain);
    }
}
