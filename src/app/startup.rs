//! Startup messages and launch-time option resolution.

use crossterm::style::{Color, Stylize};
use folio::config::ConfigInitResult;
use folio::ui::terminal::settings;
use folio::ui::theme::ThemeMode;

/// CLI flag wins over the saved preference.
pub(crate) fn resolve_theme(cli: Option<ThemeMode>, saved: &str) -> ThemeMode {
    cli.unwrap_or_else(|| ThemeMode::from_saved(Some(saved)))
}

/// Print non-fatal config diagnostics to stderr before the page takes over.
pub(crate) fn print_warnings(color: bool, warnings: &[String]) {
    for warning in warnings {
        tracing::warn!("{warning}");
        if color {
            eprintln!("{} {warning}", settings::LABEL_WARNING.with(Color::Yellow));
        } else {
            eprintln!("{} {warning}", settings::LABEL_WARNING);
        }
    }
}

pub(crate) fn print_error(color: bool, message: &str) {
    if color {
        eprintln!("{} {message}", settings::LABEL_ERROR.with(Color::Red).bold());
    } else {
        eprintln!("{} {message}", settings::LABEL_ERROR);
    }
}

pub(crate) fn init_result_message(result: &ConfigInitResult) -> String {
    match result {
        ConfigInitResult::Created { path } => format!("wrote {}", path.display()),
        ConfigInitResult::AlreadyInitialized { path } => format!(
            "{} already exists (use --force to overwrite)",
            path.display()
        ),
        ConfigInitResult::Overwritten { path, backup_path } => format!(
            "rewrote {} (previous file saved as {})",
            path.display(),
            backup_path.display()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_theme_overrides_saved_preference() {
        assert_eq!(resolve_theme(Some(ThemeMode::Dark), "light"), ThemeMode::Dark);
        assert_eq!(resolve_theme(None, "light"), ThemeMode::Light);
        assert_eq!(resolve_theme(None, "solarized"), ThemeMode::Dark);
    }

    #[test]
    fn init_messages_name_the_paths() {
        let msg = init_result_message(&ConfigInitResult::Overwritten {
            path: PathBuf::from("/cfg/folio.toml"),
            backup_path: PathBuf::from("/cfg/folio.toml.bak"),
        });
        assert!(msg.contains("/cfg/folio.toml.bak"), "got: {msg}");
        let msg = init_result_message(&ConfigInitResult::AlreadyInitialized {
            path: PathBuf::from("/cfg/folio.toml"),
        });
        assert!(msg.contains("--force"));
    }
}
