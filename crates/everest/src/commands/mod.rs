//! The command tree of the CLI. Each command is built by a factory that
//! receives the same capabilities, and is registered into a [CommandTree]
//! which [crate::run] dispatches into.

pub mod version;

use std::{fmt, io::Write};

use anyhow::{anyhow, bail, Result};
use everest_utils::logging::ToolLogger;

use crate::version::VersionInfo;

type Action = Box<dyn Fn(&mut dyn Write) -> Result<()>>;

/// A named, invocable unit within the command tree.
pub struct CommandDescriptor {
    name: &'static str,
    action: Action,
}

impl CommandDescriptor {
    pub fn new(
        name: &'static str,
        action: impl Fn(&mut dyn Write) -> Result<()> + 'static,
    ) -> Self {
        Self { name, action: Box::new(action) }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Run the command, writing its output to `out`.
    pub fn execute(&self, out: &mut dyn Write) -> Result<()> {
        (self.action)(out)
    }
}

impl fmt::Debug for CommandDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandDescriptor").field("name", &self.name).finish_non_exhaustive()
    }
}

#[derive(Debug, Default)]
pub struct CommandTree {
    commands: Vec<CommandDescriptor>,
}

impl CommandTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Names must be unique within the tree.
    pub fn register(&mut self, command: CommandDescriptor) -> Result<()> {
        if self.get(command.name()).is_some() {
            bail!("command `{}` is already registered", command.name());
        }

        self.commands.push(command);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&CommandDescriptor> {
        self.commands.iter().find(|command| command.name() == name)
    }

    /// Names of all registered commands, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(CommandDescriptor::name)
    }

    pub fn dispatch(&self, name: &str, out: &mut dyn Write) -> Result<()> {
        let command = self.get(name).ok_or_else(|| anyhow!("unknown command `{name}`"))?;

        log::debug!(command = name; "running command");
        command.execute(out)
    }
}

/// Assemble the command tree of the CLI.
pub fn command_tree(logger: &ToolLogger, version: &VersionInfo) -> Result<CommandTree> {
    let mut tree = CommandTree::new();
    tree.register(version::new_version_cmd(logger, version.clone()))?;

    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn echo(name: &'static str, text: &'static str) -> CommandDescriptor {
        CommandDescriptor::new(name, move |out| {
            writeln!(out, "{text}")?;
            Ok(())
        })
    }

    #[test]
    fn dispatches_by_name() {
        let mut tree = CommandTree::new();
        tree.register(echo("first", "one")).unwrap();
        tree.register(echo("second", "two")).unwrap();

        let mut out = Vec::new();
        tree.dispatch("second", &mut out).unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), "two\n");
        assert_eq!(tree.names().collect::<Vec<_>>(), ["first", "second"]);
    }

    #[test]
    fn rejects_duplicate_names() {
        let mut tree = CommandTree::new();
        tree.register(echo("version", "a")).unwrap();

        let err = tree.register(echo("version", "b")).unwrap_err();
        assert_eq!(err.to_string(), "command `version` is already registered");
    }

    #[test]
    fn unknown_command_is_an_error() {
        let tree = CommandTree::new();
        let mut out = Vec::new();

        let err = tree.dispatch("install", &mut out).unwrap_err();
        assert_eq!(err.to_string(), "unknown command `install`");
        assert!(out.is_empty());
    }

    #[test]
    fn cli_tree_registers_version() {
        let logger = ToolLogger::new();
        let tree = command_tree(&logger, &VersionInfo::new("1.2.3")).unwrap();

        assert_eq!(tree.names().collect::<Vec<_>>(), ["version"]);
        assert_eq!(format!("{:?}", tree.get("version").unwrap()), "CommandDescriptor { name: \"version\", .. }");
    }
}
