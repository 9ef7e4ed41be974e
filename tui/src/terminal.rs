use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::{cursor, terminal as term};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing::warn;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Raw mode plus the alternate screen. Every teardown step runs when this is
/// dropped, including on early returns and panics.
pub struct TerminalSession<W: Write> {
    out: W,
    active: bool,
}

impl TerminalSession<Stdout> {
    /// Put the terminal into UI mode and build the ratatui handle.
    pub fn enter() -> Result<(Self, Tui)> {
        enable_raw_mode().context("enable raw mode")?;
        let mut session = Self::new(io::stdout());
        crossterm::execute!(session.out, term::EnterAlternateScreen)
            .context("enter alternate screen")?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
            .context("create terminal")?;
        terminal.clear().context("clear terminal")?;
        Ok((session, terminal))
    }
}

impl<W: Write> TerminalSession<W> {
    /// Wrap an output whose raw mode has already been enabled.
    pub fn new(out: W) -> Self {
        Self { out, active: true }
    }

    /// Undo raw mode and the alternate screen. Both steps always run; the
    /// first failure is returned. Later calls do nothing.
    pub fn restore(&mut self) -> Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        let raw = disable_raw_mode().context("disable raw mode");
        let screen = crossterm::execute!(self.out, term::LeaveAlternateScreen, cursor::Show)
            .context("leave alternate screen");
        raw.and(screen)
    }
}

impl<W: Write> Drop for TerminalSession<W> {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            warn!(error = %format!("{:#}", err), "failed to restore terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{self, Write};

    use super::TerminalSession;

    const LEAVE_SCREEN: &str = "\x1b[?1049l";
    const SHOW_CURSOR: &str = "\x1b[?25h";

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn test_drop_restores_screen() {
        let mut out = Vec::new();
        {
            let _session = TerminalSession::new(&mut out);
        }
        let written = String::from_utf8(out).unwrap();
        assert!(written.contains(LEAVE_SCREEN));
        assert!(written.contains(SHOW_CURSOR));
    }

    #[test]
    fn test_restore_runs_once() {
        let mut out = Vec::new();
        {
            let mut session = TerminalSession::new(&mut out);
            session.restore().unwrap();
            session.restore().unwrap();
        }
        let written = String::from_utf8(out).unwrap();
        assert_eq!(written.matches(LEAVE_SCREEN).count(), 1);
    }

    #[test]
    fn test_restore_reports_write_failure() {
        let mut session = TerminalSession::new(BrokenPipe);
        let err = session.restore().unwrap_err();
        assert!(format!("{:#}", err).contains("leave alternate screen"));
        // Already torn down; dropping does not retry.
        assert!(session.restore().is_ok());
    }

    #[test]
    fn test_panic_still_restores() {
        let mut out = Vec::new();
        let res = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _session = TerminalSession::new(&mut out);
            panic!("event loop failed");
        }));
        assert!(res.is_err());
        assert!(String::from_utf8(out).unwrap().contains(LEAVE_SCREEN));
    }
}
