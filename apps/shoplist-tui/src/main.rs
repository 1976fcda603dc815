//! shoplist - terminal shopping list
//!
//! Usage: `shoplist [CONFIG.toml]`

mod app;
mod config;
mod keybindings;
mod logging;
mod mode;
mod views;
mod widgets;

use std::io;
use std::path::PathBuf;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use app::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let explicit_config = std::env::args_os().nth(1).map(PathBuf::from);
    let (config, config_warning) = config::resolve_config(explicit_config.as_deref())?;

    logging::init(&config)?;
    if let Some(err) = config_warning {
        tracing::warn!("Failed to load config: {}, using defaults", err);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new();
    app.show_help = config.show_help_on_start;
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("terminal error: {}", err);
        eprintln!("Error: {err:?}");
    }

    tracing::info!(items = app.list.len(), "session ended");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| app.render(f))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press && app.handle_key(key.code, key.modifiers) {
                return Ok(());
            }
        }
    }
}
