//! Side controls: ▲ and ▼ buttons that repeat while held.

use fibscroll_core::Direction;
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::styles::ColorTheme;

/// Width of the controls column, borders included.
pub const CONTROLS_WIDTH: u16 = 5;

const BUTTON_HEIGHT: u16 = 3;

/// Button rectangles within the controls column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Controls {
    pub up: Rect,
    pub down: Rect,
}

impl Controls {
    /// Place ▲ at the top of `column` and ▼ at the bottom.
    #[must_use]
    pub fn layout(column: Rect) -> Self {
        let height = BUTTON_HEIGHT.min(column.height / 2);
        Self {
            up: Rect::new(column.x, column.y, column.width, height),
            down: Rect::new(
                column.x,
                column.bottom().saturating_sub(height),
                column.width,
                height,
            ),
        }
    }

    /// Which button, if any, is under a terminal cell.
    #[must_use]
    pub fn hit(&self, column: u16, row: u16) -> Option<Direction> {
        let position = Position::new(column, row);
        if self.up.contains(position) {
            Some(Direction::Up)
        } else if self.down.contains(position) {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Render both buttons. `active` highlights the one being held; a button
/// is dimmed when the cursor sits on the bound it moves toward.
pub fn render_controls(
    frame: &mut Frame,
    controls: &Controls,
    active: Option<Direction>,
    at_lower_bound: bool,
    at_upper_bound: bool,
) {
    let theme = ColorTheme::default();
    for (rect, direction, symbol) in [
        (controls.up, Direction::Up, "▲"),
        (controls.down, Direction::Down, "▼"),
    ] {
        let blocked = match direction {
            Direction::Up => at_lower_bound,
            Direction::Down => at_upper_bound,
        };
        let style = if blocked {
            theme.muted_style()
        } else if active == Some(direction) {
            theme.header_style().add_modifier(Modifier::REVERSED)
        } else {
            theme.text_style()
        };
        let button = Paragraph::new(symbol)
            .alignment(Alignment::Center)
            .style(style)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border)),
            );
        frame.render_widget(button, rect);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    #[test]
    fn buttons_at_top_and_bottom() {
        let controls = Controls::layout(Rect::new(75, 3, CONTROLS_WIDTH, 18));
        assert_eq!(controls.up, Rect::new(75, 3, 5, 3));
        assert_eq!(controls.down, Rect::new(75, 18, 5, 3));
    }

    #[test]
    fn hit_testing() {
        let controls = Controls::layout(Rect::new(75, 3, CONTROLS_WIDTH, 18));
        assert_eq!(controls.hit(77, 4), Some(Direction::Up));
        assert_eq!(controls.hit(75, 20), Some(Direction::Down));
        assert_eq!(controls.hit(77, 10), None);
        assert_eq!(controls.hit(10, 4), None);
    }

    #[test]
    fn tiny_column_does_not_overlap() {
        let controls = Controls::layout(Rect::new(0, 0, CONTROLS_WIDTH, 4));
        assert_eq!(controls.up.height, 2);
        assert!(!controls.up.intersects(controls.down));
    }

    #[test]
    fn renders_arrows() {
        let backend = TestBackend::new(CONTROLS_WIDTH, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let completed = terminal
            .draw(|frame| {
                let controls = Controls::layout(frame.area());
                render_controls(frame, &controls, Some(Direction::Down), false, false);
            })
            .unwrap();
        assert_eq!(completed.buffer[(2, 1)].symbol(), "▲");
        assert_eq!(completed.buffer[(2, 8)].symbol(), "▼");
    }

    #[test]
    fn button_at_its_bound_is_muted() {
        let backend = TestBackend::new(CONTROLS_WIDTH, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let completed = terminal
            .draw(|frame| {
                let controls = Controls::layout(frame.area());
                render_controls(frame, &controls, None, false, true);
            })
            .unwrap();
        let muted = ColorTheme::default().muted;
        assert_eq!(completed.buffer[(2, 8)].fg, muted);
        assert_ne!(completed.buffer[(2, 1)].fg, muted);
    }
}
