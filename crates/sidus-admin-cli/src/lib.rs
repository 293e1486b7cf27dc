//! # sidus-admin-cli
//!
//! Management commands for sidus-admin.
//!
//! - **Management commands** - a framework for defining and registering CLI
//!   commands, plus built-in commands (`routes`, `admins`, `check`)
//! - **Bootstrap** - [`load_settings`] and [`run`] load the settings, set up
//!   logging, build the admin registry and dispatch the selected command
//!
//! ## Quick Start
//!
//! ```rust
//! use sidus_admin_cli::command::CommandRegistry;
//! use sidus_admin_cli::commands::register_builtin_commands;
//!
//! let mut registry = CommandRegistry::new();
//! register_builtin_commands(&mut registry);
//!
//! assert_eq!(registry.list_commands(), vec!["admins", "check", "routes"]);
//! ```

pub mod command;
pub mod commands;

use std::io::Write;

use sidus_admin::{build_registry, ActionFactories};
use sidus_admin_core::logging::setup_logging;
use sidus_admin_core::settings_loader::{from_env, from_file_with_env};
use sidus_admin_core::{AdminResult, Settings};

pub use command::{CommandRegistry, ManagementCommand, CONFIG_ARG};

/// Loads the settings named by the global `--config` option, or from the
/// environment alone when it is absent.
pub fn load_settings(matches: &clap::ArgMatches) -> AdminResult<Settings> {
    match matches.get_one::<String>(CONFIG_ARG) {
        Some(path) => {
            tracing::debug!(path = %path, "loading settings file");
            from_file_with_env(path)
        }
        None => Ok(from_env()),
    }
}

/// Loads the settings, builds the admin registry and runs the selected
/// command, writing its output to `out`.
pub fn run(
    commands: &CommandRegistry,
    matches: &clap::ArgMatches,
    out: &mut dyn Write,
) -> AdminResult<()> {
    let settings = load_settings(matches)?;
    setup_logging(&settings);

    let registry = build_registry(&settings, &ActionFactories::new())?;
    commands.execute(matches, &registry, out)
}
