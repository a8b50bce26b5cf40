//! CLI argument parsing via clap.

use clap::{Parser, Subcommand, ValueEnum};
use folio::build_info;
use folio::ui::theme::ThemeMode;

/// A personal portfolio page for the terminal.
#[derive(Debug, Parser)]
#[command(name = "folio", version, after_help = build_info::HELP_BUILD_METADATA)]
pub struct Args {
    /// Path to config file (default: ./folio.toml or ~/.config/folio/folio.toml).
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<String>,

    /// Start in this theme instead of the saved preference.
    #[arg(long = "theme", value_enum)]
    pub theme: Option<ThemeArg>,

    /// Disable color output.
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Skip the loading splash.
    #[arg(long = "no-splash")]
    pub no_splash: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Type the phrase rotation once on stdout and exit.
    Phrases,
    /// Write the default config to ~/.config/folio/folio.toml.
    Init {
        /// Overwrite an existing config, keeping a timestamped backup.
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

impl From<ThemeArg> for ThemeMode {
    fn from(value: ThemeArg) -> Self {
        match value {
            ThemeArg::Dark => ThemeMode::Dark,
            ThemeArg::Light => ThemeMode::Light,
        }
    }
}
