//! country-facts - interactive terminal browser for basic country data.

mod app;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use facts_infrastructure::{ConfigService, RestCountriesRepository};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing_subscriber::EnvFilter;

use crate::app::App;

#[derive(Parser, Debug)]
#[command(name = "country-facts", version, about = "Browse basic country facts in the terminal")]
struct Args {
    /// Override the country API base URL.
    #[arg(long)]
    base_url: Option<String>,

    /// Override the per-request timeout in seconds.
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Write logs to this file. Defaults to country-facts.log in the
    /// system temp directory.
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn init_tracing(log_file: Option<PathBuf>) -> anyhow::Result<()> {
    // The terminal belongs to ratatui, so logs go to a file.
    let path = log_file.unwrap_or_else(|| std::env::temp_dir().join("country-facts.log"));
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_file)?;

    let mut config = ConfigService::new()?.get_config();
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.api.timeout_secs = timeout_secs;
    }

    let repository = Arc::new(RestCountriesRepository::new(&config.api)?);
    let app = App::new(repository);

    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal).await;

    // Restore the terminal even when the loop failed.
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result.map_err(Into::into)
}
