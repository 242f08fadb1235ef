//! Library definition of the `everest-cli` crate.

pub mod cli;
pub mod commands;
pub mod version;

use std::{io::Write, process::ExitCode};

use anyhow::{anyhow, Result};
use everest_utils::{
    logging::{MessagingFormat, ToolLogger},
    stream::OutputStream,
};
use log::LevelFilter;
use once_cell::sync::OnceCell;
use version::VersionInfo;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command ran to completion.
    Success,
    /// The command failed, or the tool couldn't start it.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

pub static LOGGER: ToolLogger = ToolLogger::new();

static LOGGER_INSTALLED: OnceCell<()> = OnceCell::new();

/// Handler function which will delegate functionality to the appropriate
/// command.
pub fn run(cli: cli::Cli, version: VersionInfo) -> Result<ExitStatus> {
    run_with_output(cli, version, &mut OutputStream::stdout())
}

/// Same as [run], but command output is written to `out` instead of stdout.
pub fn run_with_output(
    cli::Cli { global, command }: cli::Cli,
    version: VersionInfo,
    out: &mut dyn Write,
) -> Result<ExitStatus> {
    init_logging(&global)?;

    let tree = commands::command_tree(&LOGGER, &version)?;

    tree.dispatch(command.name(), out)?;
    out.flush()?;

    Ok(ExitStatus::Success)
}

/// Configure [LOGGER] from the global flags, installing it as the `log`
/// backend on first use. Later calls only update the level and format.
fn init_logging(settings: &cli::GlobalSettings) -> Result<()> {
    let level = if settings.verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let format = if settings.json { MessagingFormat::Json } else { MessagingFormat::Normal };

    // stdout only carries command output.
    let _ = LOGGER.output_stream.set(OutputStream::stderr());
    let _ = LOGGER.error_stream.set(OutputStream::stderr());
    LOGGER.set_messaging_format(format);
    LOGGER.set_level(level);

    LOGGER_INSTALLED.get_or_try_init(|| {
        log::set_logger(&LOGGER).map_err(|e| anyhow!("couldn't initiate logger: {e}"))
    })?;
    log::set_max_level(level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Command, GlobalSettings};

    fn run_version(global: GlobalSettings, version: &str) -> String {
        let mut out = Vec::new();
        let cli = Cli { global, command: Command::Version };
        let status = run_with_output(cli, VersionInfo::new(version.to_owned()), &mut out).unwrap();

        assert_eq!(status, ExitStatus::Success);
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn run_can_be_called_again() {
        let first = run_version(GlobalSettings::default(), "1.2.3");
        assert_eq!(first, "everest-cli version: 1.2.3\n");
        assert_eq!(LOGGER.level(), LevelFilter::Info);

        let verbose = GlobalSettings { verbose: true, json: true };
        assert_eq!(run_version(verbose, "1.2.4"), "everest-cli version: 1.2.4\n");
        assert_eq!(LOGGER.level(), LevelFilter::Debug);
        assert_eq!(LOGGER.messaging_format(), MessagingFormat::Json);
        assert_eq!(log::max_level(), LevelFilter::Debug);
    }
}
