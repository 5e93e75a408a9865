//! The sequence panel: one row per viewport entry, vertically centred.

use fibscroll_core::ViewportEntry;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use crate::styles::SequenceStyle;

/// Rows needed to show every entry.
#[must_use]
pub fn required_rows(entries: &[ViewportEntry]) -> u16 {
    u16::try_from(entries.len()).unwrap_or(u16::MAX)
}

/// Render `entries` centred in `area` on the scheme's background.
pub fn render_sequence(
    frame: &mut Frame,
    area: Rect,
    entries: &[ViewportEntry],
    style: &SequenceStyle,
) {
    let padding = area.height.saturating_sub(required_rows(entries)) / 2;
    let mut lines: Vec<Line> = Vec::with_capacity(entries.len() + usize::from(padding));
    lines.extend((0..padding).map(|_| Line::default()));
    lines.extend(entries.iter().map(|entry| entry_line(entry, style)));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().style(style.base()));
    frame.render_widget(paragraph, area);
}

fn entry_line<'a>(entry: &'a ViewportEntry, style: &SequenceStyle) -> Line<'a> {
    match entry {
        ViewportEntry::Term(cell) => {
            Line::from(Span::styled(format!(" {} ", cell.text), style.role(cell.role)))
        }
        ViewportEntry::Marker(marker) => Line::from(Span::styled(marker.symbol(), style.marker())),
    }
}
