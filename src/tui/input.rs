//! Keyboard input: key-to-command mapping and terminal mode guards.
//!
//! Mapping is pure so it can be tested without a terminal. The reader thread
//! owns the blocking crossterm calls and forwards events into the async loop.

use crate::site::page::Command;
use crate::tui::settings;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tokio::sync::mpsc;

/// Which key map applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Page navigation shortcuts.
    Browse,
    /// Typing into the contact form.
    Form,
}

/// Terminal events the page reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Key(KeyEvent),
    Resize { cols: u16, rows: u16 },
}

/// Translate one key press into a page command.
pub fn command_for_key(key: KeyEvent, mode: InputMode) -> Option<Command> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    let shared = match key.code {
        KeyCode::Esc => Some(Command::Escape),
        KeyCode::Enter => Some(Command::Enter),
        KeyCode::Up => Some(Command::ScrollBy(-1)),
        KeyCode::Down => Some(Command::ScrollBy(1)),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        _ => None,
    };
    if shared.is_some() {
        return shared;
    }

    match mode {
        InputMode::Form => match key.code {
            KeyCode::Tab => Some(Command::FormNextField),
            KeyCode::BackTab => Some(Command::FormPrevField),
            KeyCode::Backspace => Some(Command::FormBackspace),
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Command::FormChar(ch))
            }
            _ => None,
        },
        InputMode::Browse => match key.code {
            KeyCode::Char('q') => Some(Command::Quit),
            KeyCode::Char('j') => Some(Command::ScrollBy(1)),
            KeyCode::Char('k') => Some(Command::ScrollBy(-1)),
            KeyCode::Char('g') | KeyCode::Home => Some(Command::BackToTop),
            KeyCode::Char(digit @ '1'..='6') => {
                Some(Command::JumpTo(digit as usize - '1' as usize))
            }
            KeyCode::Char('m') => Some(Command::ToggleMenu),
            KeyCode::Tab => Some(Command::FocusMenuToggle),
            KeyCode::Char(' ') => Some(Command::Space),
            KeyCode::Char('t') => Some(Command::ToggleTheme),
            KeyCode::Char('f') => Some(Command::CycleFilter),
            KeyCode::Char('c') => Some(Command::OpenContact),
            KeyCode::Char('x') => Some(Command::CloseToast),
            _ => None,
        },
    }
}

/// Raw mode plus alternate screen for the lifetime of the guard, so the
/// terminal is restored on any return path.
pub struct TerminalGuard;

impl TerminalGuard {
    pub fn acquire() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = stdout
            .execute(EnterAlternateScreen)
            .and_then(|out| out.execute(Hide))
        {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut stdout = io::stdout();
        let _ = stdout.execute(Show);
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Handle for the blocking input reader thread.
pub struct InputReader {
    stop: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl InputReader {
    /// Start polling terminal events and forwarding them to `tx`.
    ///
    /// The thread exits when stopped, when the receiver is dropped, or when
    /// reading from the terminal fails.
    pub fn spawn(tx: mpsc::UnboundedSender<InputEvent>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = Arc::clone(&stop);
        let thread = thread::spawn(move || {
            while !stop_flag.load(Ordering::Relaxed) && !tx.is_closed() {
                match event::poll(Duration::from_millis(settings::INPUT_POLL_MS)) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal poll failed");
                        break;
                    }
                }
                let forwarded = match event::read() {
                    Ok(Event::Key(key)) => Some(InputEvent::Key(key)),
                    Ok(Event::Resize(cols, rows)) => Some(InputEvent::Resize { cols, rows }),
                    Ok(_) => None,
                    Err(err) => {
                        tracing::warn!(error = %err, "terminal read failed");
                        break;
                    }
                };
                if let Some(evt) = forwarded {
                    if tx.send(evt).is_err() {
                        break;
                    }
                }
            }
        });
        Self {
            stop,
            thread: Some(thread),
        }
    }

    pub fn finish(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.finish();
    }
}
