use std::io;

use anyhow::{Context, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use encounter_tracker::config::AppConfig;
use encounter_tracker::core::logging;
use encounter_tracker::tui::app::AppState;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (config, config_source) = AppConfig::load();

    // Initialize logging
    let _log_guard = logging::init_tui(&config.log_dir());
    config_source.log();
    tracing::info!(
        version = encounter_tracker::VERSION,
        frame_rate = config.tui.frame_rate,
        "{} starting",
        encounter_tracker::NAME
    );

    // Setup terminal
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("failed to create terminal")?;

    // Run the app
    let mut app = AppState::new(&config);
    let result = app.run(&mut terminal, config.tui.frame_interval()).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        tracing::error!(error = %e, "event loop failed");
    }
    tracing::info!("{} shutting down", encounter_tracker::NAME);

    result.context("terminal event loop failed")
}
