//! FibScroll: scroll through the Fibonacci sequence in both directions.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use fibscroll_lib::{app, config, errors};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn init_tracing(log_file: Option<&Path>) -> Result<()> {
    // WARN unless RUST_LOG says otherwise.
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}

fn main() {
    // Parse CLI args, initialize tracing, and run
    let config = config::AppConfig::parse();
    let result = init_tracing(config.log_file.as_deref()).and_then(|()| app::run(&config));
    if let Err(err) = result {
        fibscroll_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
