//! Utilities for showing the version of the tool.

use std::{borrow::Cow, fmt};

/// The version identifier reported by `everest-cli version`.
///
/// The value is chosen once at startup and handed to the command tree, it is
/// never read from a global by the commands themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionInfo {
    version: Cow<'static, str>,
}

impl VersionInfo {
    pub fn new(version: impl Into<Cow<'static, str>>) -> Self {
        Self { version: version.into() }
    }

    /// The version this binary was built with: `EVEREST_CLI_VERSION` from the
    /// build environment if it was set, otherwise the package version.
    pub fn from_build() -> Self {
        Self::new(option_env!("EVEREST_CLI_VERSION").unwrap_or(env!("CARGO_PKG_VERSION")))
    }

    pub fn as_str(&self) -> &str {
        &self.version
    }
}

impl fmt::Display for VersionInfo {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.version)
    }
}
