//! Terminal session and event loop for rmtk.
//!
//! [TerminalSession] owns raw mode and the alternate screen and gives both back
//! when dropped, on every exit path. [run_terminal] drives the blocking
//! read → transition → redraw loop until the user quits or picks a document.

use crate::app::{AppState, KeypressResult};
use crate::core::error::{Error, TerminalInitError};
use crate::ui;

use crossterm::{
    cursor::{Hide, Show},
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::{Backend, CrosstermBackend};
use std::io::{self, Stdout};
use std::path::PathBuf;

/// How the event loop ended.
#[derive(Debug, Clone, PartialEq)]
pub enum LoopExit {
    Quit,
    /// The terminal has been released and this document should go to the viewer.
    Handoff(PathBuf),
}

/// Raw mode + alternate screen, restored on drop.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    pub fn enter() -> Result<Self, TerminalInitError> {
        enable_raw_mode().map_err(|source| TerminalInitError { source })?;

        let mut stdout = io::stdout();
        let setup = execute!(stdout, EnterAlternateScreen, Hide)
            .and_then(|_| Terminal::new(CrosstermBackend::new(stdout)));

        match setup {
            Ok(terminal) => Ok(Self { terminal }),
            Err(source) => {
                restore_terminal();
                Err(TerminalInitError { source })
            }
        }
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen, Show);
    }
}

/// Best effort terminal restore, used on failed setup and from the panic hook.
pub fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Sets up the terminal and runs the main event loop.
///
/// Blocks until quit or handoff. The terminal is restored before this returns,
/// whatever the outcome.
pub fn run_terminal(app: &mut AppState) -> Result<LoopExit, Error> {
    let mut session = TerminalSession::enter()?;
    let exit = event_loop(session.terminal_mut(), app);
    drop(session);
    exit.map_err(Error::from)
}

/// Draws, waits for one event, applies it. Resize and other events only redraw.
fn event_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<LoopExit>
where
    io::Error: From<<B as Backend>::Error>,
{
    loop {
        draw(terminal, app)?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.handle_keypress(key) {
                KeypressResult::Quit => return Ok(LoopExit::Quit),
                KeypressResult::Handoff(path) => return Ok(LoopExit::Handoff(path)),
                KeypressResult::Continue | KeypressResult::Consumed => {}
            }
        }
    }
}

/// Hands the current height to the navigator, then redraws from it.
pub fn draw<B: Backend>(terminal: &mut Terminal<B>, app: &mut AppState) -> io::Result<()>
where
    io::Error: From<<B as Backend>::Error>,
{
    let size = terminal.size()?;
    app.nav_mut()
        .set_viewport_height(ui::viewport_height(size.height));
    terminal.draw(|frame| ui::render(frame, app.nav(), app.status()))?;
    Ok(())
}
