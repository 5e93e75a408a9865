//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::info;

use fibscroll_cli::presenter::FramePresenter;
use fibscroll_core::{MonotonicClock, Session};
use fibscroll_tui::{OverlayStore, TuiApp, TuiOptions};

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibscroll_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let widget = config.widget_config()?;
    let session = Session::new(&widget)?;

    if config.print {
        return run_print(config, &session);
    }

    run_tui(config, session)
}

fn run_print(config: &AppConfig, session: &Session) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    FramePresenter::new(config.quiet).present(session.frame(), &mut out)?;
    out.flush()?;
    Ok(())
}

fn run_tui(config: &AppConfig, session: Session) -> Result<()> {
    let options = TuiOptions {
        pixels_per_row: config.pixels_per_row,
        show_overlay: !config.no_overlay,
        overlay_store: Some(OverlayStore::default_location()),
    };
    info!(cursor = session.cursor(), "starting interactive viewer");
    let mut app = TuiApp::new(session, Box::new(MonotonicClock::new()), options);
    app.run().context("terminal UI failed")
}
