//! Top-level config loading pipeline.

use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::ui::theme::ThemeMode;

use super::env::apply_runtime_env_overrides;
use super::init::config_root_dir;
use super::sources::read_config_text_with_sources;
use super::{Config, ConfigDiagnostics, LoadedConfig};

/// Load configuration from disk and environment.
///
/// `path_override` is an explicit config file path (from `--config`).
pub fn load_config(path_override: Option<&str>) -> Result<Config, ConfigError> {
    Ok(load_config_with_diagnostics(path_override)?.config)
}

/// Load configuration and return non-fatal diagnostics.
pub fn load_config_with_diagnostics(
    path_override: Option<&str>,
) -> Result<LoadedConfig, ConfigError> {
    load_config_with_diagnostics_from_sources(
        path_override,
        |path| std::fs::read_to_string(path),
        |name| std::env::var(name).ok(),
        config_root_dir,
    )
}

pub(super) fn load_config_with_diagnostics_from_sources<FRead, FEnv, FRoot>(
    path_override: Option<&str>,
    read_file: FRead,
    env_lookup: FEnv,
    config_root: FRoot,
) -> Result<LoadedConfig, ConfigError>
where
    FRead: Fn(&Path) -> Result<String, std::io::Error>,
    FEnv: Fn(&str) -> Option<String>,
    FRoot: Fn() -> Option<PathBuf>,
{
    let (config_text, source) =
        read_config_text_with_sources(path_override, &read_file, &config_root)?;
    let mut config: Config = toml::from_str(&config_text)?;
    apply_runtime_env_overrides(&mut config, &env_lookup)?;

    let mut diagnostics = ConfigDiagnostics::default();
    normalize(&mut config, &mut diagnostics)?;

    Ok(LoadedConfig {
        config,
        diagnostics,
        source_path: source.path().map(Path::to_path_buf),
    })
}

/// Reject unusable values and repair recoverable ones with a warning.
fn normalize(config: &mut Config, diagnostics: &mut ConfigDiagnostics) -> Result<(), ConfigError> {
    if config.typewriter.phrases.is_empty() {
        return Err(ConfigError::Invalid(
            "typewriter.phrases must list at least one phrase".to_string(),
        ));
    }

    let saved = ThemeMode::from_saved(Some(&config.display.theme));
    if saved.as_str() != config.display.theme {
        diagnostics.warnings.push(format!(
            "unknown display.theme `{}`; using dark",
            config.display.theme
        ));
        config.display.theme = saved.as_str().to_string();
    }

    for skill in &mut config.skills {
        if skill.percent > 100 {
            diagnostics.warnings.push(format!(
                "skill `{}` percent {} clamped to 100",
                skill.name, skill.percent
            ));
            skill.percent = 100;
        }
    }

    for name in config.themes.keys() {
        if ThemeMode::parse(name).is_none() {
            diagnostics
                .warnings
                .push(format!("[themes.{name}] ignored: only dark and light exist"));
        }
    }
    Ok(())
}
