//! CLI frame presenter.

use std::io::{self, Write};

use console::style;
use fibscroll_core::{Frame, Role, ViewportEntry};
use tracing::debug;

use crate::output::{center_text, format_colors, format_frame};
use crate::ui::is_color_disabled;

/// Prints a viewport snapshot.
pub struct FramePresenter {
    quiet: bool,
}

impl FramePresenter {
    #[must_use]
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Write `frame` to `out`. Quiet mode prints only the centre term.
    pub fn present(&self, frame: &Frame, out: &mut dyn Write) -> io::Result<()> {
        debug!(cursor = frame.cursor, quiet = self.quiet, "presenting frame");
        if self.quiet {
            return writeln!(out, "{}", center_text(frame).unwrap_or_default());
        }

        let color = !is_color_disabled();
        writeln!(out, "Term: {}", frame.cursor)?;
        for (entry, line) in frame.entries.iter().zip(format_frame(frame)) {
            let is_center = entry
                .as_term()
                .is_some_and(|cell| cell.role == Role::Center);
            if color && is_center {
                writeln!(out, "{}", style(line).bold().cyan())?;
            } else if color && matches!(entry, ViewportEntry::Marker(_)) {
                writeln!(out, "{}", style(line).yellow())?;
            } else {
                writeln!(out, "{line}")?;
            }
        }
        writeln!(out)?;
        for line in format_colors(&frame.colors) {
            writeln!(out, "{line}")?;
        }
        Ok(())
    }
}
