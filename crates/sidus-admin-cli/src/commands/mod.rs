//! Built-in management commands.
//!
//! Each command implements the
//! [`ManagementCommand`](crate::command::ManagementCommand) trait.

pub mod admins;
pub mod check;
pub mod routes;

pub use admins::AdminsCommand;
pub use check::CheckCommand;
pub use routes::RoutesCommand;

use crate::command::CommandRegistry;

/// Registers all built-in management commands into the given registry.
pub fn register_builtin_commands(registry: &mut CommandRegistry) {
    registry.register(Box::new(RoutesCommand));
    registry.register(Box::new(AdminsCommand));
    registry.register(Box::new(CheckCommand));
}
