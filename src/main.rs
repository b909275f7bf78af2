// Sortty: step-by-step sorting visualizer for the terminal

use std::fs::File;
use std::io;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;

use sortty::config::{Cli, Config};
use sortty::ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match Config::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    // stderr is hidden behind the alternate screen, so logs only go to a file
    if let Some(path) = &cli.log_file {
        let file = File::create(path)?;
        let level = if cli.verbose { "debug" } else { "info" };
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
            )
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        length = config.length,
        min = config.min,
        max = config.max,
        fps = config.fps,
        seed = ?config.seed,
        "starting sortty"
    );

    let mut app = App::new(config);

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Terminal is restored first so the error is printed on the normal screen
    if let Err(err) = res {
        tracing::error!(error = %err, "terminal loop failed");
        return Err(err.into());
    }

    tracing::info!("exiting");
    Ok(())
}
