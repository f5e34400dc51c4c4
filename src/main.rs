mod config;
mod date;
mod form;
mod store;
mod task;
mod ui;
mod validation;

use anyhow::Context;
use config::Config;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs::OpenOptions, io, sync::Mutex};
use store::{TaskList, TaskStore};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use ui::{run_app, App};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();
    init_tracing(&config)?;

    let mut app = App::new(TaskList::new());
    {
        // Terminal setup; dropping the guard restores it on every exit path
        let guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = run_app(&mut terminal, &mut app);
        terminal.show_cursor()?;
        guard.restore()?;

        result.context("terminal event loop failed")?;
    }

    let tasks = app.store().tasks();
    tracing::info!(count = tasks.len(), "session ended");
    if !tasks.is_empty() {
        println!("{}", serde_json::to_string_pretty(tasks)?);
    }
    Ok(())
}

/// Raw mode plus alternate screen, undone when dropped.
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { active: true };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        Ok(guard)
    }

    /// Restores the terminal, reporting failures instead of swallowing them.
    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            if let Err(err) = disable_raw_mode()
                .and_then(|()| execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture))
            {
                tracing::error!(%err, "failed to restore terminal");
            }
        }
    }
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_file)
        .with_context(|| format!("failed to open log file {}", config.log_file.display()))?;

    tracing_subscriber::registry()
        .with(
            EnvFilter::try_new(&config.log_filter)
                .unwrap_or_else(|_| EnvFilter::new("task_dialog=info")),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .init();

    tracing::info!(log_filter = %config.log_filter, "logging initialised");
    Ok(())
}
