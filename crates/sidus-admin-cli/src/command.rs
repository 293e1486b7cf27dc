//! Management command framework for sidus-admin.
//!
//! This module provides the [`ManagementCommand`] trait for defining CLI
//! commands and [`CommandRegistry`] for registering and dispatching them.
//! Commands run against a built [`AdminRegistry`] and write their report to
//! a caller-supplied writer.
//!
//! ## Defining a Custom Command
//!
//! ```rust
//! use std::io::Write;
//!
//! use sidus_admin::AdminRegistry;
//! use sidus_admin_cli::command::ManagementCommand;
//! use sidus_admin_core::AdminResult;
//!
//! struct CountCommand;
//!
//! impl ManagementCommand for CountCommand {
//!     fn name(&self) -> &str { "count" }
//!     fn help(&self) -> &str { "Print the number of admins" }
//!
//!     fn handle(
//!         &self,
//!         _matches: &clap::ArgMatches,
//!         registry: &AdminRegistry,
//!         out: &mut dyn Write,
//!     ) -> AdminResult<()> {
//!         writeln!(out, "{}", registry.len())?;
//!         Ok(())
//!     }
//! }
//! ```

use std::collections::HashMap;
use std::io::Write;

use sidus_admin::AdminRegistry;
use sidus_admin_core::{AdminError, AdminResult};

/// Name of the global option holding the configuration file path.
pub const CONFIG_ARG: &str = "config";

/// A management command that can be registered and invoked through the CLI.
pub trait ManagementCommand: Send + Sync {
    /// Returns the name of this command (used to invoke it from the CLI).
    fn name(&self) -> &str;

    /// Returns a short help description for this command.
    fn help(&self) -> &str;

    /// Adds custom arguments to the clap command.
    ///
    /// The default implementation returns the command unchanged.
    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd
    }

    /// Executes the command against the admin registry, writing its output
    /// to `out`.
    fn handle(
        &self,
        matches: &clap::ArgMatches,
        registry: &AdminRegistry,
        out: &mut dyn Write,
    ) -> AdminResult<()>;
}

/// A registry of management commands, keyed by name.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn ManagementCommand>>,
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandRegistry {
    /// Creates a new empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Registers a management command, replacing any command of the same name.
    pub fn register(&mut self, command: Box<dyn ManagementCommand>) {
        let name = command.name().to_string();
        self.commands.insert(name, command);
    }

    /// Returns the command with the given name, if registered.
    pub fn get(&self, name: &str) -> Option<&dyn ManagementCommand> {
        self.commands.get(name).map(AsRef::as_ref)
    }

    /// Returns a sorted list of all registered command names.
    pub fn list_commands(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the top-level clap `Command` with every registered subcommand
    /// and the global `--config` option.
    pub fn build_cli(&self) -> clap::Command {
        let mut app = clap::Command::new("sidus-admin")
            .about("sidus-admin management utility")
            .subcommand_required(true)
            .arg(
                clap::Arg::new(CONFIG_ARG)
                    .long("config")
                    .short('c')
                    .global(true)
                    .value_name("FILE")
                    .help("Settings file (.toml or .json); environment variables only when omitted"),
            );

        let mut entries: Vec<_> = self.commands.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));

        for (name, cmd) in entries {
            let subcmd = clap::Command::new(name.clone()).about(cmd.help().to_string());
            app = app.subcommand(cmd.add_arguments(subcmd));
        }

        app
    }

    /// Dispatches the subcommand selected in `matches`.
    pub fn execute(
        &self,
        matches: &clap::ArgMatches,
        registry: &AdminRegistry,
        out: &mut dyn Write,
    ) -> AdminResult<()> {
        let (name, sub_matches) = matches.subcommand().ok_or_else(|| {
            AdminError::ConfigurationError("No subcommand specified".to_string())
        })?;

        let cmd = self
            .get(name)
            .ok_or_else(|| AdminError::ConfigurationError(format!("Unknown command: {name}")))?;

        tracing::debug!(command = name, "running management command");
        cmd.handle(sub_matches, registry, out)
    }
}

impl std::fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.list_commands())
            .finish()
    }
}
