//! Config-path helpers and default config initialization.
//!
//! Writes use create-new semantics where possible so concurrent launches
//! never clobber a user file.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use crate::error::ConfigError;

use super::defaults::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_FOLIO_CONFIG_TEMPLATE};
use super::ConfigInitResult;

/// Return the default per-user config path (`~/.config/folio/folio.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Return the log file path (`~/.config/folio/folio.log`).
pub fn default_log_path() -> Option<PathBuf> {
    config_root_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join("folio.log"))
}

/// Write the default template to `~/.config/folio/folio.toml`.
///
/// - Without `force`, returns `AlreadyInitialized` if the file exists.
/// - With `force`, backs up the existing file next to it using a timestamped
///   name, then rewrites it from the compiled template.
pub fn initialize_default_config(force: bool) -> Result<ConfigInitResult, ConfigError> {
    let path = default_config_path().ok_or_else(|| {
        ConfigError::Invalid("unable to resolve default config path".to_string())
    })?;
    initialize_default_config_at_path(&path, force)
}

pub(super) fn ensure_default_config_at_path(path: &Path) -> Result<(), ConfigError> {
    if path.exists() {
        return Ok(());
    }
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_FOLIO_CONFIG_TEMPLATE.as_bytes())?;
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Ok(()),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

pub(super) fn initialize_default_config_at_path(
    path: &Path,
    force: bool,
) -> Result<ConfigInitResult, ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    if path.exists() {
        if !force {
            return Ok(ConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            });
        }
        let backup_path = timestamped_backup_path(path);
        std::fs::copy(path, &backup_path)?;
        std::fs::write(path, DEFAULT_FOLIO_CONFIG_TEMPLATE)?;
        return Ok(ConfigInitResult::Overwritten {
            path: path.to_path_buf(),
            backup_path,
        });
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_FOLIO_CONFIG_TEMPLATE.as_bytes())?;
            Ok(ConfigInitResult::Created {
                path: path.to_path_buf(),
            })
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
            Ok(ConfigInitResult::AlreadyInitialized {
                path: path.to_path_buf(),
            })
        }
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// Build a non-colliding backup path in the same directory as `path`.
fn timestamped_backup_path(path: &Path) -> PathBuf {
    let file_name = path
        .file_name()
        .map(|value| value.to_string_lossy().into_owned())
        .unwrap_or_else(|| CONFIG_FILE_NAME.to_string());
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();

    (0..1000usize)
        .map(|suffix| {
            if suffix == 0 {
                path.with_file_name(format!("{file_name}.{timestamp}.bak"))
            } else {
                path.with_file_name(format!("{file_name}.{timestamp}.{suffix}.bak"))
            }
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| {
            path.with_file_name(format!(
                "{file_name}.{timestamp}.{}.bak",
                std::process::id()
            ))
        })
}

/// Resolve the base config directory from env/home conventions.
pub fn config_root_dir() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("XDG_CONFIG_HOME") {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return Some(PathBuf::from(trimmed));
        }
    }
    dirs::home_dir()
        .map(|home| home.join(".config"))
        .or_else(dirs::config_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testsupport::TestTempDir;

    #[test]
    fn init_creates_then_reports_existing() {
        let tmp = TestTempDir::new("init");
        let path = tmp.child("folio/folio.toml");
        let first = initialize_default_config_at_path(&path, false).expect("create");
        assert_eq!(first, ConfigInitResult::Created { path: path.clone() });
        let second = initialize_default_config_at_path(&path, false).expect("exists");
        assert_eq!(second, ConfigInitResult::AlreadyInitialized { path: path.clone() });
        assert_eq!(
            std::fs::read_to_string(&path).expect("read"),
            DEFAULT_FOLIO_CONFIG_TEMPLATE
        );
    }

    #[test]
    fn forced_init_backs_up_previous_file() {
        let tmp = TestTempDir::new("init-force");
        let path = tmp.write_text("folio.toml", "[site]\nname = \"old\"\n");
        let result = initialize_default_config_at_path(&path, true).expect("overwrite");
        let ConfigInitResult::Overwritten { backup_path, .. } = result else {
            panic!("expected overwrite, got {result:?}");
        };
        assert_eq!(
            std::fs::read_to_string(backup_path).expect("backup"),
            "[site]\nname = \"old\"\n"
        );
    }
}
