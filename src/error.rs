//! Unified error types for the portfolio runtime.

use std::fmt;

// ---------------------------------------------------------------------------
// TypewriterError
// ---------------------------------------------------------------------------

/// Errors rejected when constructing a typewriter engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    /// The phrase rotation was empty.
    NoPhrases,
    /// A phrase in the rotation was the empty string.
    EmptyPhrase { index: usize },
    /// One of the step delays was zero.
    ZeroDuration(&'static str),
}

impl fmt::Display for TypewriterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPhrases => write!(f, "typewriter needs at least one phrase"),
            Self::EmptyPhrase { index } => write!(f, "phrase #{index} is empty"),
            Self::ZeroDuration(name) => write!(f, "{name} must be a positive duration"),
        }
    }
}

impl std::error::Error for TypewriterError {}

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors when loading, parsing, or persisting configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Toml(e) => write!(f, "toml: {e}"),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}

// ---------------------------------------------------------------------------
// AppError — top-level
// ---------------------------------------------------------------------------

/// Top-level error type surfaced by the binary.
#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Typewriter(TypewriterError),
    /// Terminal setup or drawing failed.
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Typewriter(e) => write!(f, "typewriter: {e}"),
            Self::Io(e) => write!(f, "terminal: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<ConfigError> for AppError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<TypewriterError> for AppError {
    fn from(e: TypewriterError) -> Self {
        Self::Typewriter(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typewriter_error_display() {
        assert_eq!(
            TypewriterError::NoPhrases.to_string(),
            "typewriter needs at least one phrase"
        );
        assert_eq!(
            TypewriterError::EmptyPhrase { index: 2 }.to_string(),
            "phrase #2 is empty"
        );
        assert_eq!(
            TypewriterError::ZeroDuration("type_speed").to_string(),
            "type_speed must be a positive duration"
        );
    }

    #[test]
    fn config_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let s = ConfigError::from(io_err).to_string();
        assert!(s.starts_with("io:"), "got: {s}");
        assert!(s.contains("file not found"));
    }

    #[test]
    fn config_error_from_toml() {
        let toml_err: toml::de::Error = toml::from_str::<toml::Value>("x = [unclosed").unwrap_err();
        assert!(ConfigError::from(toml_err).to_string().starts_with("toml:"));
    }

    #[test]
    fn app_error_wraps_sources() {
        let e = AppError::from(TypewriterError::NoPhrases);
        assert!(e.to_string().starts_with("typewriter:"), "got: {e}");
        let e = AppError::from(ConfigError::Invalid("bad".into()));
        assert_eq!(e.to_string(), "config: invalid config: bad");
    }
}
