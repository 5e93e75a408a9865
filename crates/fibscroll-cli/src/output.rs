//! CLI output formatting.

use fibscroll_core::{ColorScheme, Frame, Index, Role, ViewportEntry};

/// `F(index)` label for a term.
#[must_use]
pub fn term_label(index: Index) -> String {
    format!("F({index})")
}

/// One line per viewport entry, labels right-aligned, the centre term
/// marked with `>`.
#[must_use]
pub fn format_frame(frame: &Frame) -> Vec<String> {
    let width = frame
        .entries
        .iter()
        .filter_map(ViewportEntry::as_term)
        .map(|cell| term_label(cell.index).len())
        .max()
        .unwrap_or(0);
    frame
        .entries
        .iter()
        .map(|entry| format_entry(entry, width))
        .collect()
}

/// Format a single entry with its label padded to `width`.
#[must_use]
pub fn format_entry(entry: &ViewportEntry, width: usize) -> String {
    match entry {
        ViewportEntry::Term(cell) => {
            let pointer = if cell.role == Role::Center { '>' } else { ' ' };
            format!("{pointer} {:>width$}  {}", term_label(cell.index), cell.text)
        }
        ViewportEntry::Marker(marker) => format!("  {:>width$}  {}", "", marker.symbol()),
    }
}

/// Colour scheme as `name: value` lines.
#[must_use]
pub fn format_colors(scheme: &ColorScheme) -> [String; 3] {
    [
        format!("background: {}", scheme.background),
        format!("foreground: {}", scheme.foreground),
        format!("accent: {}", scheme.accent),
    ]
}

/// Text of the centre term.
#[must_use]
pub fn center_text(frame: &Frame) -> Option<&str> {
    frame
        .entries
        .iter()
        .filter_map(ViewportEntry::as_term)
        .find(|cell| cell.role == Role::Center)
        .map(|cell| cell.text.as_str())
}
