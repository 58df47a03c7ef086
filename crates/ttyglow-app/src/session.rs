use std::io::{self, Stdout};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use ttyglow_ui::surface::Surface;

use crate::run::Screen;

/// Fullscreen terminal owned by the dashboard.
///
/// Raw mode, the alternate screen and the hidden cursor are undone in `Drop`,
/// so every exit path (including a panic) hands back a usable terminal.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self> {
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend).context("failed to initialise terminal")?;
        // Built first so a failure below still restores through Drop.
        let mut session = Self { terminal };

        enable_raw_mode().context("failed to enable raw mode")?;
        execute!(session.terminal.backend_mut(), EnterAlternateScreen)
            .context("failed to enter alternate screen")?;
        session
            .terminal
            .hide_cursor()
            .context("failed to hide cursor")?;
        session
            .terminal
            .clear()
            .context("failed to clear terminal")?;

        Ok(session)
    }

    fn restore(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = self.restore() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

impl Screen for TerminalSession {
    fn draw(&mut self, paint: &mut dyn FnMut(&mut dyn Surface)) -> Result<()> {
        self.terminal
            .draw(|f| paint(f.buffer_mut()))
            .context("failed to draw frame")?;
        Ok(())
    }

    fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        while event::poll(timeout).context("failed to poll input")? {
            match event::read().context("failed to read input")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
                // Resizes need no handling: layout is recomputed every frame.
                _ => {}
            }
        }
        Ok(None)
    }
}
