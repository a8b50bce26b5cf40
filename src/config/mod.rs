//! Configuration loading from TOML files and environment variables.
//!
//! Config is loaded in this order of precedence (highest wins):
//! 1. Environment variables (`FOLIO_THEME`, `FOLIO_TYPE_SPEED_MS`,
//!    `FOLIO_DELETE_SPEED_MS`, `NO_COLOR`)
//! 2. TOML file specified via `--config`
//! 3. `./folio.toml` in the current directory
//! 4. `$XDG_CONFIG_HOME/folio/folio.toml` (or `~/.config/folio/folio.toml`)
//! 5. Built-in defaults

mod defaults;
mod env;
mod init;
mod loader;
mod persist;
mod sources;
mod types;

pub use init::{config_root_dir, default_config_path, default_log_path, initialize_default_config};
pub use loader::{load_config, load_config_with_diagnostics};
pub use persist::persist_display_theme;
pub use types::{
    Config, ConfigDiagnostics, ConfigInitResult, DisplayConfig, LayoutConfig, LoadedConfig,
    ProjectEntry, SiteConfig, SkillEntry, StatEntry, TimelineEntry, TimingConfig,
    TypewriterConfig,
};
