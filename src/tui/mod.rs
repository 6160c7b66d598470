//! Terminal UI for Rewind Games.

mod app;
mod input;
mod ui;
mod view;

pub use app::{Action, App, Focus};
pub use input::{Arrow, Input};
pub use ui::AppLayout;
pub use view::{
    MoveListEntry, current_label, jump_label, move_list, sort_toggle_label, status_line,
};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument};

use crate::AppConfig;

/// Runs the TUI until the user quits.
pub fn run_tui(config: &AppConfig) -> Result<()> {
    init_tracing(config)?;

    info!("Starting Rewind Games TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let res = with_restore(
        || {
            execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)
                .context("Failed to enter alternate screen")?;
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            let mut app = App::new(*config.sort_order());
            run_app(&mut terminal, &mut app)
        },
        restore_terminal,
    );

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Rewind Games TUI stopped");

    res
}

/// Runs `body`, then `restore` whether or not `body` failed.
///
/// The error from `body` wins over one from `restore`.
fn with_restore<T>(
    body: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    let res = body();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    )?;
    Ok(())
}

/// Event loop: render, wait for one event, handle it, repeat.
///
/// Every event is handled to completion before the next frame is drawn.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| app.render(f))?;

        if *app.should_quit() {
            return Ok(());
        }

        let event = event::read()?;
        app.handle_event(&event);
    }
}

/// Sends logs to the configured file so they don't interfere with the TUI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file()).with_context(|| {
        format!("Failed to create log file {}", config.log_file().display())
    })?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_restore_runs_when_body_fails() {
        let restored = Cell::new(false);
        let res: Result<()> = with_restore(
            || anyhow::bail!("terminal unavailable"),
            || {
                restored.set(true);
                Ok(())
            },
        );
        assert!(res.is_err());
        assert!(restored.get());
    }

    #[test]
    fn test_body_error_wins_over_restore_error() {
        let res: Result<()> = with_restore(
            || anyhow::bail!("body failed"),
            || anyhow::bail!("restore failed"),
        );
        assert_eq!(res.unwrap_err().to_string(), "body failed");
    }

    #[test]
    fn test_restore_error_reported_after_success() {
        let res = with_restore(|| Ok(7), || anyhow::bail!("restore failed"));
        assert_eq!(res.unwrap_err().to_string(), "restore failed");
    }
}
