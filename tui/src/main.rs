use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::config::Args;
use crate::terminal::{TerminalSession, Tui};

mod app;
mod config;
mod lang;
mod terminal;
mod ui;

fn main() -> Result<()> {
    let args = Args::parse();
    if let Some(path) = args.log_file.as_deref() {
        init_logging(path)?;
    }
    info!(
        lang = ?args.lang,
        default_balance = args.default_balance,
        step = args.step,
        "starting roster"
    );

    let mut app = App::new(args.lang, args.default_balance, args.step);
    let (mut session, mut terminal) = TerminalSession::enter()?;
    let res = run(&mut terminal, &mut app);
    let restored = session.restore();
    if let (Err(_), Err(err)) = (&res, &restored) {
        warn!(error = %format!("{:#}", err), "failed to restore terminal after error");
    }
    res?;
    restored?;

    info!(
        players = app.roster.len(),
        total = app.roster.total(),
        "exiting roster"
    );
    Ok(())
}

/// The terminal is owned by the UI, so logs only go to a file.
fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

/// One event at a time: draw, block on the next key, apply it.
fn run(terminal: &mut Tui, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;
        if let Event::Key(key) = event::read().context("read terminal event")? {
            if app.handle_key(key) {
                return Ok(());
            }
        }
    }
}
