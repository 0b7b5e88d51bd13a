use std::io::{stderr, BufWriter, Stderr};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, EventStream},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, style::Style, Terminal};
use squint_buffer::surface::{CellContent, CellGrid, Surface};
use squint_keymap::{conversion, message::ViewerEvent};

use crate::{error::AppError, screen::Screen};

pub struct TerminalScreen {
    grid: CellGrid,
    inner: Option<Terminal<CrosstermBackend<BufWriter<Stderr>>>>,
    reader: EventStream,
}

impl TerminalScreen {
    pub fn start(default_style: Style) -> Result<Self, AppError> {
        let (terminal, (width, height)) = init_or_restore(
            || {
                let term = init()?;
                let size = terminal::size()?;
                Ok((term, size))
            },
            stop,
        )?;

        let mut grid = CellGrid::new(width, height);
        grid.set_default_style(default_style);
        grid.clear();

        tracing::debug!("terminal started with {}x{}", width, height);

        Ok(Self {
            grid,
            inner: Some(terminal),
            reader: EventStream::new(),
        })
    }

    pub fn shutdown(&mut self) -> Result<(), AppError> {
        if self.inner.take().is_some() {
            stop()?;
        }

        Ok(())
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        if let Err(error) = self.shutdown() {
            tracing::error!("shutting down terminal failed: {:?}", error);
        }
    }
}

impl Surface for TerminalScreen {
    fn size(&self) -> (u16, u16) {
        self.grid.size()
    }

    fn set_content(&mut self, x: u16, y: u16, main: char, combining: &[char], style: Style) {
        self.grid.set_content(x, y, main, combining, style);
    }

    fn content(&self, x: u16, y: u16) -> Option<CellContent> {
        self.grid.content(x, y)
    }

    fn clear(&mut self) {
        self.grid.clear();
    }

    fn default_style(&self) -> Style {
        self.grid.default_style()
    }

    fn set_default_style(&mut self, style: Style) {
        self.grid.set_default_style(style);
    }
}

impl Screen for TerminalScreen {
    fn sync(&mut self) -> Result<(), AppError> {
        let Some(term) = &mut self.inner else {
            return Err(AppError::TerminalNotInitialized);
        };

        let (width, height) = terminal::size()?;
        self.grid.resize(width, height);
        term.clear()?;

        Ok(())
    }

    fn render(&mut self) -> Result<(), AppError> {
        let Some(term) = &mut self.inner else {
            return Err(AppError::TerminalNotInitialized);
        };

        let grid = &self.grid;
        term.draw(|frame| frame.render_widget(grid, frame.area()))?;

        Ok(())
    }

    async fn next_event(&mut self) -> Result<Option<ViewerEvent>, AppError> {
        while let Some(event) = self.reader.next().await {
            let Some(event) = conversion::to_event(&event?) else {
                continue;
            };

            if let ViewerEvent::Resize(width, height) = event {
                self.grid.resize(width, height);
            }

            return Ok(Some(event));
        }

        Ok(None)
    }
}

/// Runs `init` and calls `restore` if any step of it fails.
fn init_or_restore<T>(
    init: impl FnOnce() -> std::io::Result<T>,
    restore: impl FnOnce() -> std::io::Result<()>,
) -> Result<T, AppError> {
    match init() {
        Ok(it) => Ok(it),
        Err(error) => {
            if let Err(restore_error) = restore() {
                tracing::error!("restoring terminal failed: {:?}", restore_error);
            }
            Err(AppError::TerminalInitializationFailed(error))
        }
    }
}

fn init() -> std::io::Result<Terminal<CrosstermBackend<BufWriter<Stderr>>>> {
    stderr().execute(EnterAlternateScreen)?;
    stderr().execute(EnableMouseCapture)?;
    terminal::enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(BufWriter::new(stderr())))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    Ok(terminal)
}

fn stop() -> std::io::Result<()> {
    terminal::disable_raw_mode()?;
    stderr().execute(DisableMouseCapture)?;
    stderr().execute(LeaveAlternateScreen)?;
    stderr().execute(crossterm::cursor::Show)?;

    Ok(())
}
