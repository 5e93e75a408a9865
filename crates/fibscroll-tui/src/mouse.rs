//! Mouse input: wheel, control buttons, and drag swipes.
//!
//! Terminal rows stand in for pixels. A drag is measured in rows and
//! scaled by `pixels_per_row` so the swipe thresholds keep their meaning.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use fibscroll_core::InputSource;
use ratatui::layout::Position;

use crate::messages::TuiMessage;
use crate::model::ScreenLayout;

/// Translate a mouse event into a message.
#[must_use]
pub fn mouse_message(
    event: MouseEvent,
    layout: &ScreenLayout,
    pixels_per_row: f64,
) -> Option<TuiMessage> {
    let y = f64::from(event.row) * pixels_per_row;
    match event.kind {
        MouseEventKind::ScrollUp => Some(TuiMessage::Wheel(-1.0)),
        MouseEventKind::ScrollDown => Some(TuiMessage::Wheel(1.0)),
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(direction) = layout.controls.hit(event.column, event.row) {
                Some(TuiMessage::Press(InputSource::Pointer, direction))
            } else if layout
                .sequence
                .contains(Position::new(event.column, event.row))
            {
                Some(TuiMessage::GestureStart { y })
            } else {
                Some(TuiMessage::Dismiss)
            }
        }
        MouseEventKind::Up(MouseButton::Left) => Some(TuiMessage::PointerUp { y }),
        _ => None,
    }
}
