//! Terminal UI for Timeline Games.

mod app;
mod input;
mod ui;

pub use app::{App, Focus};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{error, info, instrument};

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Runs the interactive game until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(app), fields(sort = %app.sort()))]
pub fn run_tui(mut app: App) -> Result<()> {
    info!("Starting Timeline Games TUI");

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!(steps = app.game().history().len() - 1, "TUI exited");
    res
}

fn run_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            app.handle_key(key.code);
        }
    }
    Ok(())
}
