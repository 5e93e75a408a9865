//! Informational overlay and its dismissal record.
//!
//! The overlay opens at startup unless it was dismissed within the last
//! [`DISMISSAL_TTL`]. It closes itself after [`AUTO_HIDE_MS`]. Closing it
//! either way stores the time in a small JSON file in the XDG config
//! directory, or in the working directory when no config directory is
//! known.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use fibscroll_core::Millis;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use serde::{Deserialize, Serialize};

use crate::styles::ColorTheme;

const OVERLAY_FILENAME: &str = "overlay.json";
const CONFIG_DIR_NAME: &str = "fibscroll";

/// How long a dismissal keeps the overlay closed at startup.
pub const DISMISSAL_TTL: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// How long the overlay stays open without input.
pub const AUTO_HIDE_MS: Millis = 25_000;

#[derive(Debug, Serialize, Deserialize)]
struct DismissalRecord {
    /// Seconds since the Unix epoch.
    dismissed_at: u64,
}

/// Where the dismissal time is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayStore {
    path: PathBuf,
}

impl OverlayStore {
    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the XDG config directory, or the working directory.
    #[must_use]
    pub fn default_location() -> Self {
        Self::at(xdg_overlay_path().unwrap_or_else(cwd_overlay_path))
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a dismissal recorded less than [`DISMISSAL_TTL`] before
    /// `now` exists. Missing or unreadable records count as no dismissal.
    #[must_use]
    pub fn dismissed_recently(&self, now: SystemTime) -> bool {
        let Some(record) = self.load() else {
            return false;
        };
        let dismissed = UNIX_EPOCH + Duration::from_secs(record.dismissed_at);
        match now.duration_since(dismissed) {
            Ok(age) => age < DISMISSAL_TTL,
            // Recorded in the future: clock moved backwards, still honour it.
            Err(_) => true,
        }
    }

    /// Persist a dismissal at `now`, creating the parent directory.
    pub fn record_dismissal(&self, now: SystemTime) -> io::Result<()> {
        let dismissed_at = now
            .duration_since(UNIX_EPOCH)
            .map_err(io::Error::other)?
            .as_secs();
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let content =
            serde_json::to_string_pretty(&DismissalRecord { dismissed_at }).map_err(io::Error::other)?;
        std::fs::write(&self.path, content)
    }

    fn load(&self) -> Option<DismissalRecord> {
        let content = std::fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }
}

/// Get the XDG config directory path for the dismissal record.
fn xdg_overlay_path() -> Option<PathBuf> {
    let config_dir = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))?;
    Some(config_dir.join(CONFIG_DIR_NAME).join(OVERLAY_FILENAME))
}

fn cwd_overlay_path() -> PathBuf {
    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(format!(".fibscroll_{OVERLAY_FILENAME}"))
}

/// Visibility of the overlay on the session timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    shown_at: Option<Millis>,
}

impl Overlay {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.shown_at.is_some()
    }

    pub fn show(&mut self, now: Millis) {
        self.shown_at = Some(now);
    }

    /// Close the overlay. Returns whether it was open.
    pub fn hide(&mut self) -> bool {
        self.shown_at.take().is_some()
    }

    /// Whether the overlay has been open for [`AUTO_HIDE_MS`].
    #[must_use]
    pub fn expired(&self, now: Millis) -> bool {
        self.shown_at
            .is_some_and(|at| now.saturating_sub(at) >= AUTO_HIDE_MS)
    }

    /// When the overlay will close itself.
    #[must_use]
    pub fn deadline(&self) -> Option<Millis> {
        self.shown_at.map(|at| at.saturating_add(AUTO_HIDE_MS))
    }
}

/// Render the overlay centred over `area`.
pub fn render_overlay(frame: &mut Frame, area: Rect) {
    let theme = ColorTheme::default();
    let [row] = Layout::vertical([Constraint::Length(10)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Max(56)])
        .flex(Flex::Center)
        .areas(row);

    let text = vec![
        Line::styled("The Fibonacci sequence, both ways", theme.header_style()),
        Line::default(),
        Line::from("Each term is the sum of the two before it."),
        Line::from("Going backwards, F(-n) = (-1)^(n+1) · F(n)."),
        Line::default(),
        Line::styled("Arrows, wheel, ▲/▼ or a mouse drag to move.", theme.text_style()),
        Line::styled("Press any key to close.", theme.muted_style()),
    ];
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style())
                .title(" About "),
        );
    frame.render_widget(Clear, popup);
    frame.render_widget(paragraph, popup);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn at_secs(secs: u64) -> SystemTime {
        UNIX_EPOCH + Duration::from_secs(secs)
    }

    #[test]
    fn no_record_means_not_dismissed() {
        let dir = tempfile::tempdir().unwrap();
        let store = OverlayStore::at(dir.path().join("overlay.json"));
        assert!(!store.dismissed_recently(SystemTime::now()));
    }

    #[test]
    fn dismissal_lasts_thirty_days() {
        let dir = tempfile::tempdir().unwrap();
        let store = OverlayStore::at(dir.path().join("nested").join("overlay.json"));
        let day = 24 * 60 * 60;
        store.record_dismissal(at_secs(1_000_000)).unwrap();

        assert!(store.dismissed_recently(at_secs(1_000_000 + day)));
        assert!(store.dismissed_recently(at_secs(1_000_000 + 29 * day)));
        assert!(!store.dismissed_recently(at_secs(1_000_000 + 30 * day)));
    }

    #[test]
    fn corrupt_record_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("overlay.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(!OverlayStore::at(path).dismissed_recently(SystemTime::now()));
    }

    #[test]
    fn overlay_auto_hides() {
        let mut overlay = Overlay::default();
        assert!(!overlay.is_visible());
        overlay.show(1_000);
        assert_eq!(overlay.deadline(), Some(26_000));
        assert!(!overlay.expired(25_999));
        assert!(overlay.expired(26_000));
        assert!(overlay.hide());
        assert!(!overlay.hide());
    }

    #[test]
    fn renders_popup() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let completed = terminal
            .draw(|frame| {
                let area = frame.area();
                render_overlay(frame, area);
            })
            .unwrap();
        let content: String = (0..24)
            .flat_map(|y| (0..80).map(move |x| (x, y)))
            .map(|(x, y)| completed.buffer[(x, y)].symbol().to_string())
            .collect();
        assert!(content.contains("About"));
        assert!(content.contains("any key"));
    }
}
