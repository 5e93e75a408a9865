//! TUI header panel.

use fibscroll_core::{Index, Layout};
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Render the header panel with the position indicator.
pub fn render_header(frame: &mut Frame, area: Rect, cursor: Index, layout: Layout) {
    let theme = ColorTheme::default();
    let layout_name = match layout {
        Layout::Plain => "plain",
        Layout::Equation => "equation",
    };
    let text = vec![Line::from(vec![
        Span::styled(format!("Term: {cursor}"), theme.header_style()),
        Span::styled(format!(" | Layout: {layout_name}"), theme.muted_style()),
    ])];

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(theme.border_style())
        .title(" FibScroll ");

    let paragraph = Paragraph::new(text).block(block);
    frame.render_widget(paragraph, area);
}
