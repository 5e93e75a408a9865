//! TUI application model (Elm architecture).

use std::io;
use std::time::{Duration, SystemTime};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
    PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use fibscroll_core::{Clock, InputSource, Millis, Session};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Terminal;
use tracing::{debug, info, warn};

use crate::controls::{render_controls, Controls, CONTROLS_WIDTH};
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::key_message;
use crate::messages::TuiMessage;
use crate::mouse::mouse_message;
use crate::overlay::{render_overlay, Overlay, OverlayStore};
use crate::sequence::{render_sequence, required_rows};
use crate::styles::{ColorTheme, SequenceStyle};

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;
const MIN_SEQUENCE_WIDTH: u16 = 24;

/// Longest wait between redraws when nothing is scheduled.
const TICK_RATE: Duration = Duration::from_millis(250);

/// Default vertical size of a terminal row, in pixels.
pub const DEFAULT_PIXELS_PER_ROW: f64 = 16.0;

/// Screen regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenLayout {
    pub header: Rect,
    pub sequence: Rect,
    pub controls: Controls,
    pub footer: Rect,
}

impl ScreenLayout {
    /// Header on top, footer at the bottom, sequence with a controls
    /// column on its right in between.
    #[must_use]
    pub fn compute(area: Rect) -> Self {
        let [header, main, footer] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(1),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .areas(area);
        let [sequence, controls] =
            Layout::horizontal([Constraint::Min(1), Constraint::Length(CONTROLS_WIDTH)])
                .areas(main);
        Self {
            header,
            sequence,
            controls: Controls::layout(controls),
            footer,
        }
    }
}

/// Front-end settings that are not part of the widget configuration.
#[derive(Debug, Clone)]
pub struct TuiOptions {
    /// Pixel height of one terminal row for swipe measurement.
    pub pixels_per_row: f64,
    /// Whether the informational overlay may open at startup.
    pub show_overlay: bool,
    /// Where dismissals are remembered. `None` disables persistence.
    pub overlay_store: Option<OverlayStore>,
}

impl Default for TuiOptions {
    fn default() -> Self {
        Self {
            pixels_per_row: DEFAULT_PIXELS_PER_ROW,
            show_overlay: true,
            overlay_store: None,
        }
    }
}

/// TUI application state (Elm Model).
pub struct TuiApp {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Terminal width.
    pub terminal_width: u16,
    /// Terminal height.
    pub terminal_height: u16,
    session: Session,
    clock: Box<dyn Clock>,
    options: TuiOptions,
    overlay: Overlay,
    layout: ScreenLayout,
    /// Whether key releases are reported, enabling hold-to-repeat on keys.
    hold_mode: bool,
}

impl TuiApp {
    /// Create a new TUI app around `session`.
    #[must_use]
    pub fn new(session: Session, clock: Box<dyn Clock>, options: TuiOptions) -> Self {
        let now = clock.now_ms();
        let mut overlay = Overlay::default();
        let recently_dismissed = options
            .overlay_store
            .as_ref()
            .is_some_and(|store| store.dismissed_recently(SystemTime::now()));
        if options.show_overlay && !recently_dismissed {
            overlay.show(now);
        }
        let mut app = Self {
            should_quit: false,
            terminal_width: 80,
            terminal_height: 24,
            session,
            clock,
            options,
            overlay,
            layout: ScreenLayout::default(),
            hold_mode: false,
        };
        app.layout = ScreenLayout::compute(app.area());
        app
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn overlay_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    #[must_use]
    pub fn layout(&self) -> &ScreenLayout {
        &self.layout
    }

    /// Enable press/release key handling.
    pub fn set_hold_mode(&mut self, hold_mode: bool) {
        self.hold_mode = hold_mode;
    }

    fn area(&self) -> Rect {
        Rect::new(0, 0, self.terminal_width, self.terminal_height)
    }

    /// Smallest terminal that shows the whole window.
    #[must_use]
    pub fn min_size(&self) -> (u16, u16) {
        let rows = required_rows(&self.session.frame().entries);
        (
            MIN_SEQUENCE_WIDTH + CONTROLS_WIDTH,
            HEADER_HEIGHT
                .saturating_add(rows)
                .saturating_add(FOOTER_HEIGHT),
        )
    }

    #[must_use]
    pub fn too_small(&self, area: Rect) -> bool {
        let (width, height) = self.min_size();
        area.width < width || area.height < height
    }

    /// Translate a terminal event into a message.
    #[must_use]
    pub fn translate(&self, event: Event) -> Option<TuiMessage> {
        match event {
            Event::Key(key) => key_message(key, self.hold_mode),
            Event::Mouse(mouse) => mouse_message(mouse, &self.layout, self.options.pixels_per_row),
            Event::Resize(width, height) => Some(TuiMessage::Resize { width, height }),
            _ => None,
        }
    }

    /// Handle a single message (Elm Update).
    pub fn handle_message(&mut self, msg: TuiMessage) {
        let now = self.clock.now_ms();
        self.session.advance_to(now);

        if msg.dismisses_overlay() {
            self.dismiss_overlay();
        }

        match msg {
            TuiMessage::Step(direction) => {
                self.session.step(direction);
            }
            TuiMessage::Press(source, direction) => {
                self.session.press(source, direction);
            }
            TuiMessage::Release(source) => self.session.release(source),
            TuiMessage::Wheel(delta) => {
                self.session.wheel(delta);
            }
            TuiMessage::GestureStart { y } => self.session.begin_gesture(y, now),
            TuiMessage::PointerUp { y } => {
                self.session.release(InputSource::Pointer);
                if self.session.momentum().gesture_in_progress() {
                    let outcome = self.session.end_gesture(y, now);
                    debug!(?outcome, "swipe ended");
                }
            }
            TuiMessage::Reset => {
                self.session.reset();
            }
            TuiMessage::ToggleLayout => self.session.toggle_layout(),
            TuiMessage::ShowOverlay => self.overlay.show(now),
            TuiMessage::Tick => {
                if self.overlay.expired(now) {
                    self.dismiss_overlay();
                }
            }
            TuiMessage::Resize { width, height } => {
                self.terminal_width = width;
                self.terminal_height = height;
                self.layout = ScreenLayout::compute(self.area());
            }
            TuiMessage::Quit => self.should_quit = true,
            TuiMessage::Dismiss => {}
        }
    }

    fn dismiss_overlay(&mut self) {
        if !self.overlay.hide() {
            return;
        }
        if let Some(store) = &self.options.overlay_store {
            if let Err(err) = store.record_dismissal(SystemTime::now()) {
                warn!(path = %store.path().display(), %err, "could not save overlay dismissal");
            }
        }
    }

    /// How long the event loop may block before the next timer is due.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        let now = self.clock.now_ms();
        [self.session.next_deadline(), self.overlay.deadline()]
            .into_iter()
            .flatten()
            .min()
            .map_or(TICK_RATE, |deadline: Millis| {
                Duration::from_millis(deadline.saturating_sub(now)).min(TICK_RATE)
            })
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let area = frame.area();
        if self.too_small(area) {
            self.render_size_warning(frame, area);
            return;
        }

        let layout = ScreenLayout::compute(area);
        let current = self.session.frame();
        render_header(frame, layout.header, current.cursor, self.session.layout());
        render_sequence(
            frame,
            layout.sequence,
            &current.entries,
            &SequenceStyle::from(&current.colors),
        );
        render_controls(
            frame,
            &layout.controls,
            self.session.navigation().continuous_direction(),
            self.session.navigation().at_lower_bound(),
            self.session.navigation().at_upper_bound(),
        );
        render_footer(frame, layout.footer);

        if self.overlay.is_visible() {
            render_overlay(frame, area);
        }
    }

    fn render_size_warning(&self, frame: &mut ratatui::Frame, area: Rect) {
        let theme = ColorTheme::default();
        let (width, height) = self.min_size();
        let text = vec![
            Line::styled("Terminal too small", theme.header_style()),
            Line::styled(
                format!("Need {width}x{height}, have {}x{}", area.width, area.height),
                theme.text_style(),
            ),
            Line::styled("Resize to continue.", theme.muted_style()),
        ];
        let [row] = Layout::vertical([Constraint::Length(3)])
            .flex(Flex::Center)
            .areas(area);
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, row);
    }

    /// Set up the terminal for TUI mode.
    ///
    /// Returns a configured Terminal and whether key release events are
    /// reported.
    pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<io::Stdout>>, bool)> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let hold_mode = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if hold_mode {
            execute!(
                stdout,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        let backend = CrosstermBackend::new(stdout);
        Ok((Terminal::new(backend)?, hold_mode))
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        hold_mode: bool,
    ) -> io::Result<()> {
        if hold_mode {
            execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
        }
        terminal::disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// This sets up the terminal, runs the main loop (poll events, update,
    /// render), and tears down on exit, even when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let (mut terminal, hold_mode) = Self::setup_terminal()?;
        self.set_hold_mode(hold_mode);
        let size = terminal.size()?;
        self.handle_message(TuiMessage::Resize {
            width: size.width,
            height: size.height,
        });
        info!(hold_mode, width = size.width, height = size.height, "tui started");

        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal, hold_mode)?;
        info!(cursor = self.session.cursor(), "tui stopped");
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(self.poll_timeout())? {
                if let Some(msg) = self.translate(event::read()?) {
                    self.handle_message(msg);
                }
            }

            self.handle_message(TuiMessage::Tick);
        }
    }
}
