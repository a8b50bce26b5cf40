//! `folio init` and `folio phrases`.

use crate::app::startup::{init_result_message, print_error};
use crossterm::cursor::MoveToColumn;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use crossterm::QueueableCommand;
use folio::config::{initialize_default_config, Config};
use folio::error::AppError;
use folio::typewriter::{self, Boundary, Step, TextSink, Typewriter};
use std::io::{self, IsTerminal, Write};
use std::time::Duration;
use tokio::sync::mpsc;

/// Write the default config template. Returns the process exit code.
pub(crate) fn run_init(force: bool, color: bool) -> i32 {
    match initialize_default_config(force) {
        Ok(result) => {
            eprintln!("{}", init_result_message(&result));
            0
        }
        Err(err) => {
            print_error(color, &format!("init failed: {err}"));
            1
        }
    }
}

/// Forwards each step's text together with the boundary it crossed.
struct StepSink(mpsc::UnboundedSender<(String, Boundary)>);

impl TextSink for StepSink {
    fn set_text(&mut self, text: &str) {
        let _ = self.0.send((text.to_string(), Boundary::None));
    }

    fn apply_step(&mut self, step: &Step) {
        let _ = self.0.send((step.text.clone(), step.boundary));
    }
}

/// Type every phrase once on stdout, then exit.
///
/// On a terminal the line is rewritten in place at the configured speeds;
/// otherwise each fully typed phrase is printed on its own line.
pub(crate) async fn run_phrases(config: &Config) -> Result<(), AppError> {
    let engine = Typewriter::new(
        config.typewriter.phrases.iter().cloned(),
        config.typewriter.timing(),
    )?;
    let steps = engine.cycle_len();
    let live = io::stdout().is_terminal();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let handle = typewriter::spawn(engine, StepSink(tx), Duration::ZERO);

    let mut stdout = io::stdout();
    for _ in 0..steps {
        let Some((text, boundary)) = rx.recv().await else {
            break;
        };
        write_step(&mut stdout, &text, boundary, live)?;
    }
    if live {
        stdout.queue(MoveToColumn(0))?.queue(Clear(ClearType::CurrentLine))?;
        stdout.flush()?;
    }

    match handle.stop_and_join().await {
        Ok(engine) => tracing::debug!(state = ?engine.state(), "phrase cycle finished"),
        Err(err) => tracing::warn!(error = %err, "typewriter task failed"),
    }
    Ok(())
}

/// Rewrite the current line when live; when piped, emit only finished phrases.
fn write_step<W: Write>(
    out: &mut W,
    text: &str,
    boundary: Boundary,
    live: bool,
) -> io::Result<()> {
    if live {
        out.queue(MoveToColumn(0))?
            .queue(Clear(ClearType::CurrentLine))?
            .queue(Print(text))?;
        out.flush()
    } else if boundary == Boundary::FullyTyped {
        writeln!(out, "{text}")
    } else {
        Ok(())
    }
}
