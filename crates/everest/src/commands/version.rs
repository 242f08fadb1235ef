//! `version` command implementation for the CLI.

use std::io::Write;

use everest_utils::logging::ToolLogger;

use super::CommandDescriptor;
use crate::version::VersionInfo;

pub const NAME: &str = "version";

/// Build the `version` command, which prints `everest-cli version: <version>`.
///
/// The logger is accepted like every other command factory does, but this
/// command has nothing to log.
pub fn new_version_cmd(_logger: &ToolLogger, version: VersionInfo) -> CommandDescriptor {
    CommandDescriptor::new(NAME, move |out| {
        writeln!(out, "everest-cli version: {version}")?;
        Ok(())
    })
}
