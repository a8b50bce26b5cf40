//! Environment variable overrides.
//!
//! `FOLIO_*` variables win over file values. The conventional `NO_COLOR`
//! variable disables color when set to any non-empty value.

use crate::error::ConfigError;

use super::Config;

pub(super) fn apply_runtime_env_overrides<FEnv>(
    config: &mut Config,
    env_lookup: &FEnv,
) -> Result<(), ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(theme) = env_lookup("FOLIO_THEME") {
        config.display.theme = theme;
    }
    if let Some(value) = env_lookup("FOLIO_TYPE_SPEED_MS") {
        config.typewriter.type_speed_ms = parse_positive_ms("FOLIO_TYPE_SPEED_MS", &value)?;
    }
    if let Some(value) = env_lookup("FOLIO_DELETE_SPEED_MS") {
        config.typewriter.delete_speed_ms = parse_positive_ms("FOLIO_DELETE_SPEED_MS", &value)?;
    }
    if env_lookup("NO_COLOR").is_some_and(|value| !value.is_empty()) {
        config.display.color = false;
    }
    Ok(())
}

fn parse_positive_ms(name: &str, value: &str) -> Result<u64, ConfigError> {
    match value.trim().parse::<u64>() {
        Ok(parsed) if parsed > 0 => Ok(parsed),
        _ => Err(ConfigError::Invalid(format!(
            "invalid {name} value `{value}`: expected positive integer milliseconds"
        ))),
    }
}
