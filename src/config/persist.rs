//! Theme preference persistence.
//!
//! Only `[display].theme` is ever rewritten; every other line of the file is
//! preserved as-is.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::ui::theme::ThemeMode;

use super::defaults::CONFIG_FILE_NAME;
use super::init::{default_config_path, ensure_default_config_at_path};

/// Persist `[display].theme` to the effective config file and return that path.
pub fn persist_display_theme(
    path_override: Option<&Path>,
    mode: ThemeMode,
) -> Result<PathBuf, ConfigError> {
    let path = resolve_persist_path(path_override)?;
    persist_display_theme_at_path(&path, mode)?;
    Ok(path)
}

pub(super) fn persist_display_theme_at_path(
    path: &Path,
    mode: ThemeMode,
) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    if !path.exists() {
        ensure_default_config_at_path(path)?;
    }
    let existing = std::fs::read_to_string(path).unwrap_or_default();
    let updated = upsert_display_theme(&existing, mode.as_str());
    std::fs::write(path, updated)?;
    Ok(())
}

/// Resolve the config file that receives theme updates.
fn resolve_persist_path(path_override: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path_override {
        return Ok(path.to_path_buf());
    }
    if Path::new(CONFIG_FILE_NAME).exists() {
        return Ok(PathBuf::from(CONFIG_FILE_NAME));
    }
    default_config_path().ok_or_else(|| {
        ConfigError::Invalid("unable to resolve config path for theme persistence".to_string())
    })
}

/// Upsert `display.theme` while preserving unrelated file contents.
fn upsert_display_theme(input: &str, theme: &str) -> String {
    let mut lines = if input.is_empty() {
        Vec::new()
    } else {
        input.lines().map(str::to_string).collect::<Vec<_>>()
    };
    let assignment = format!("theme = \"{theme}\"");

    let display_idx = lines
        .iter()
        .position(|line| line.trim().eq_ignore_ascii_case("[display]"));

    if let Some(start) = display_idx {
        let end = lines
            .iter()
            .enumerate()
            .skip(start + 1)
            .find(|(_, line)| is_table_header(line))
            .map(|(idx, _)| idx)
            .unwrap_or(lines.len());

        if let Some(idx) = (start + 1..end).find(|&idx| is_assignment_key(&lines[idx], "theme")) {
            lines[idx] = assignment;
        } else {
            lines.insert(start + 1, assignment);
        }
        return ensure_trailing_newline(lines.join("\n"));
    }

    if !lines.is_empty() {
        lines.push(String::new());
    }
    lines.push("[display]".to_string());
    lines.push(assignment);
    ensure_trailing_newline(lines.join("\n"))
}

fn is_table_header(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with('[') && trimmed.ends_with(']')
}

/// Return true when `line` assigns a value to `key` (e.g., `key = ...`).
fn is_assignment_key(line: &str, key: &str) -> bool {
    let trimmed = line.trim_start();
    let Some(rest) = trimmed.strip_prefix(key) else {
        return false;
    };
    rest.trim_start().starts_with('=')
}

fn ensure_trailing_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
