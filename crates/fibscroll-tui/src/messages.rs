//! TUI message types (Elm Messages).

use fibscroll_core::{Direction, InputSource};

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TuiMessage {
    /// One discrete step.
    Step(Direction),
    /// An input source started holding a direction.
    Press(InputSource, Direction),
    /// An input source stopped holding.
    Release(InputSource),
    /// Mouse wheel; negative scrolls up.
    Wheel(f64),
    /// Left button went down in the sequence area, `y` in pixels.
    GestureStart { y: f64 },
    /// Left button came up anywhere, `y` in pixels.
    PointerUp { y: f64 },
    /// Back to the initial position.
    Reset,
    /// Switch between plain and equation layouts.
    ToggleLayout,
    /// Show the informational overlay.
    ShowOverlay,
    /// Any other key or click; dismisses the overlay if it is open.
    Dismiss,
    /// Timer tick for periodic updates.
    Tick,
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Quit the application.
    Quit,
}

impl TuiMessage {
    /// Whether this message is user input that should close the overlay.
    #[must_use]
    pub fn dismisses_overlay(self) -> bool {
        !matches!(
            self,
            Self::Tick | Self::Resize { .. } | Self::ShowOverlay | Self::Release(_) | Self::PointerUp { .. }
        )
    }
}
