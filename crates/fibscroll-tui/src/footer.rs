//! TUI footer panel.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

const SHORTCUTS: [(&str, &str); 6] = [
    ("q", "quit"),
    ("↑/↓", "scroll"),
    ("r", "reset"),
    ("e", "equation"),
    ("i", "info"),
    ("drag", "swipe"),
];

/// Render the footer panel with keyboard shortcuts.
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let mut spans = Vec::with_capacity(SHORTCUTS.len() * 2);
    for (i, (key, label)) in SHORTCUTS.iter().enumerate() {
        spans.push(Span::styled(*key, theme.key_style()));
        let sep = if i + 1 == SHORTCUTS.len() { "" } else { " | " };
        spans.push(Span::styled(format!(": {label}{sep}"), theme.text_style()));
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(theme.border_style());
    let paragraph = Paragraph::new(vec![Line::from(spans)]).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn render_footer_contains_all_shortcuts() {
        let backend = TestBackend::new(100, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();

        // Row 1 (after the border) holds the key hints.
        let content: String = (0..buf.area.width)
            .map(|x| buf.buffer[(x, 1)].symbol().to_string())
            .collect();
        for (_, label) in SHORTCUTS {
            assert!(content.contains(label), "missing {label}");
        }
    }

    #[test]
    fn render_footer_small_area() {
        let backend = TestBackend::new(20, 2);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                render_footer(frame, area);
            })
            .unwrap();
    }
}
