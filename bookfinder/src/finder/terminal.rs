use crate::{error::Error, utils::any::Any};
use crossterm::{
    cursor::Show,
    terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
    QueueableCommand,
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal as RatatuiTerminal};
use std::io::{Stdout, Write};

pub struct Terminal {
    inner: RatatuiTerminal<CrosstermBackend<Stdout>>,
}

impl Terminal {
    pub fn new() -> Result<Self, Error> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let mut terminal = Self {
            inner: RatatuiTerminal::new(backend)?,
        };

        terminal.on_init()?;

        terminal.ok()
    }

    fn on_init(&mut self) -> Result<(), Error> {
        crossterm::terminal::enable_raw_mode()?;
        self.inner
            .backend_mut()
            .queue(EnterAlternateScreen)?
            .queue(Clear(ClearType::All))?
            .flush()?;
        self.inner.clear()?;

        ().ok()
    }

    fn on_drop(&mut self) -> Result<(), Error> {
        crossterm::terminal::disable_raw_mode()?;
        self.inner
            .backend_mut()
            .queue(LeaveAlternateScreen)?
            .queue(Show)?
            .flush()?;

        ().ok()
    }

    pub fn draw<F: FnOnce(&mut Frame)>(&mut self, render: F) -> Result<(), Error> {
        self.inner.draw(render)?.unit().ok()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        self.on_drop().error().unit();
    }
}
