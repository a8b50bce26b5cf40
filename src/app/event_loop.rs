//! Full-screen page loop.
//!
//! One task owns the [`Page`]. Terminal input, typewriter text and a fixed
//! tick all arrive as events; after each one the page is re-laid out and
//! redrawn.

use folio::config::{persist_display_theme, Config};
use folio::error::AppError;
use folio::site::notify::Severity;
use folio::site::{Effect, Page};
use folio::typewriter::{self, ChannelSink, Typewriter};
use folio::ui::terminal::{
    command_for_key, compose_frame, settings, InputEvent, InputMode, InputReader, Renderer,
    TerminalGuard,
};
use folio::ui::theme::{ThemeMode, ThemeSet};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

pub(crate) struct PageOptions {
    pub(crate) config: Config,
    pub(crate) themes: ThemeSet,
    pub(crate) theme: ThemeMode,
    pub(crate) splash: bool,
    /// Config file the theme preference is written back to.
    pub(crate) config_path: Option<PathBuf>,
}

pub(crate) async fn run_page(options: PageOptions) -> Result<(), AppError> {
    let PageOptions {
        config,
        themes,
        theme,
        splash,
        config_path,
    } = options;

    let engine = Typewriter::new(
        config.typewriter.phrases.iter().cloned(),
        config.typewriter.timing(),
    )?;
    let launched = Instant::now();
    let mut page = Page::new(&config, theme, splash, launched);
    let renderer = Renderer::new(config.display.color);

    let _guard = TerminalGuard::acquire()?;
    let (mut cols, mut rows) = crossterm::terminal::size()?;

    let (input_tx, mut input_rx) = mpsc::unbounded_channel();
    let mut reader = InputReader::spawn(input_tx);
    let (text_tx, mut text_rx) = mpsc::unbounded_channel::<String>();
    let typing = typewriter::spawn(
        engine,
        ChannelSink::new(text_tx, |text| text),
        page.typewriter_start_delay(),
    );

    let mut ticker = tokio::time::interval(Duration::from_millis(settings::TICK_MS));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut stdout = io::stdout();
    tracing::info!(theme = theme.as_str(), splash, "page started");

    let mut quit = false;
    while !quit {
        tokio::select! {
            _ = ticker.tick() => page.tick(Instant::now()),
            Some(text) = text_rx.recv() => page.set_typed_text(text),
            event = input_rx.recv() => match event {
                Some(InputEvent::Key(key)) => {
                    let mode = if page.contact_open() {
                        InputMode::Form
                    } else {
                        InputMode::Browse
                    };
                    if let Some(command) = command_for_key(key, mode) {
                        let now = Instant::now();
                        for effect in page.handle(command, now) {
                            quit |= apply_effect(&mut page, effect, config_path.as_deref(), now);
                        }
                    }
                }
                Some(InputEvent::Resize { cols: c, rows: r }) => {
                    cols = c;
                    rows = r;
                }
                None => quit = true,
            },
        }

        let now = Instant::now();
        let frame = compose_frame(&page, now, usize::from(cols), usize::from(rows));
        renderer.draw(&mut stdout, &frame, themes.get(page.theme))?;
        page.set_layout(frame.layout, now);
    }

    reader.finish();
    if let Err(err) = typing.stop_and_join().await {
        tracing::warn!(error = %err, "typewriter task failed");
    }
    tracing::info!("page closed");
    Ok(())
}

/// Carry out one page effect. Returns true when the loop should exit.
fn apply_effect(
    page: &mut Page,
    effect: Effect,
    config_path: Option<&std::path::Path>,
    now: Instant,
) -> bool {
    match effect {
        Effect::Quit => true,
        Effect::PersistTheme(mode) => {
            match persist_display_theme(config_path, mode) {
                Ok(path) => {
                    tracing::info!(theme = mode.as_str(), path = %path.display(), "theme saved");
                }
                Err(err) => {
                    tracing::warn!(error = %err, "theme persistence failed");
                    page.notify(
                        format!(
                            "Theme switched to {}, but saving failed: {err}",
                            mode.as_str()
                        ),
                        Severity::Error,
                        now,
                    );
                }
            }
            false
        }
    }
}
