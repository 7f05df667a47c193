use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use checkin::app::{r#loop::run_loop, state::AppState};
use checkin::config::Config;
use checkin::infrastructure::log_sink::LogSink;
use checkin::logging::{self, Verbosity};

/// Terminal check-in desk: pick an area, then sign people in and out.
#[derive(Debug, Parser)]
#[command(name = "checkin", version, about)]
struct Cli {
    /// Config file (default: ~/.config/checkin/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Name list, one per line; replaces the configured names
    #[arg(long, value_name = "FILE")]
    names: Option<PathBuf>,

    /// Where to write logs
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Start on the sign-in page for this area
    #[arg(long)]
    area: Option<String>,

    #[arg(short, long)]
    verbose: bool,

    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = cli.log_file.unwrap_or_else(logging::default_log_path);
    logging::init_subscriber(Verbosity::from_flags(cli.verbose, cli.quiet), &log_file)?;

    // Config problems are reported before the terminal is taken over
    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(names) = &cli.names {
        config = config.with_names_file(names)?;
    }
    tracing::info!(
        areas = config.areas.len(),
        names = config.directory.names().map_or(0, <[String]>::len),
        "Starting"
    );

    let mut app_state = AppState::new(&config);
    if let Some(area) = &cli.area {
        app_state.preselect_area(area);
    }

    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, Arc::new(LogSink::new())).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "Event loop failed");
        println!("{err:?}");
    }

    Ok(())
}
