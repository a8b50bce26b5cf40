//! CLI entry point for folio.

mod app;
mod cli;

use app::commands::{run_init, run_phrases};
use app::event_loop::{run_page, PageOptions};
use app::startup::{print_error, print_warnings, resolve_theme};
use clap::Parser;
use folio::config::{default_log_path, load_config_with_diagnostics};
use folio::ui::theme::ThemeSet;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();
    init_tracing();

    if let Some(cli::Command::Init { force }) = &args.command {
        std::process::exit(run_init(*force, !args.no_color));
    }

    let loaded = match load_config_with_diagnostics(args.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            print_error(!args.no_color, &e.to_string());
            std::process::exit(1);
        }
    };
    let mut config = loaded.config;
    if args.no_color {
        config.display.color = false;
    }
    let color = config.display.color;

    let (themes, theme_warnings) = ThemeSet::from_overrides(&config.themes);
    print_warnings(color, &loaded.diagnostics.warnings);
    print_warnings(color, &theme_warnings);

    let result = match args.command {
        Some(cli::Command::Phrases) => run_phrases(&config).await,
        Some(cli::Command::Init { .. }) => Ok(()),
        None => {
            let theme = resolve_theme(args.theme.map(Into::into), &config.display.theme);
            let splash = config.display.splash && !args.no_splash;
            run_page(PageOptions {
                config,
                themes,
                theme,
                splash,
                config_path: loaded.source_path,
            })
            .await
        }
    };

    if let Err(e) = result {
        tracing::error!(error = %e, "folio exited with an error");
        print_error(color, &e.to_string());
        std::process::exit(1);
    }
}

/// Log to `~/.config/folio/folio.log`; never to the terminal the page owns.
fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let log_file = default_log_path().and_then(|path| {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).ok()?;
        }
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .ok()
            .map(|file| (path, file))
    });

    match log_file {
        Some((path, file)) => {
            tracing_subscriber::registry()
                .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
                .with(env_filter)
                .init();
            tracing::debug!(path = %path.display(), "logging initialized");
        }
        None => tracing_subscriber::registry().with(env_filter).init(),
    }
}
