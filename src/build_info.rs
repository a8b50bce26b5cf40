//! Compile-time build metadata exposed to CLI surfaces.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("FOLIO_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("FOLIO_BUILD_TIMESTAMP");

/// Help trailer that surfaces build metadata in `folio --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("FOLIO_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("FOLIO_BUILD_TIMESTAMP")
);

/// Footer line shown at the bottom of the rendered page.
pub fn footer_metadata_line() -> String {
    format!("folio v{VERSION} ({GIT_COMMIT})")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_line_carries_version_and_commit() {
        let text = footer_metadata_line();
        assert!(text.starts_with("folio v"));
        assert!(text.contains(VERSION));
        assert!(text.contains(GIT_COMMIT));
    }

    #[test]
    fn help_trailer_lists_commit_and_build_time() {
        assert!(HELP_BUILD_METADATA.contains("commit:"));
        assert!(HELP_BUILD_METADATA.contains("built:"));
    }
}
