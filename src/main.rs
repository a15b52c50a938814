mod action;
mod config;
mod create_control;
mod error;
mod item_row;
mod logging;
mod todo;
mod todo_list;
mod ui;

use anyhow::Context;
use clap::Parser;
use config::Args;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use todo::NextId;
use tracing::{error, info};
use ui::App;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    if let Some(path) = &args.log_file {
        logging::init(path, &args.log_level).context("setting up logging")?;
    }
    info!(start_id = args.start_id, "starting");

    // Terminal setup
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(NextId::new(args.start_id));
    let result = ui::run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        error!(%err, "event loop failed");
        return Err(error::AppError::from(err)).context("running the todo list");
    }
    info!("exiting");
    Ok(())
}
