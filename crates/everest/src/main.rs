//! Entry point of everest-cli.

use std::process::ExitCode;

use clap::Parser;
use everest_cli::{cli::Cli, run, version::VersionInfo, ExitStatus};

pub fn main() -> ExitCode {
    // Enabled ANSI colours on Windows 10.
    #[cfg(windows)]
    let _ = colored::control::set_virtual_terminal(true);

    let args = wild::args_os();
    let args = match argfile::expand_args_from(args, argfile::parse_fromfile, argfile::PREFIX) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitStatus::Error.into();
        }
    };

    let args = Cli::parse_from(args);

    match run(args, VersionInfo::from_build()) {
        Ok(status) => status.into(),
        Err(e) => {
            eprintln!("error: {e}");
            ExitStatus::Error.into()
        }
    }
}
