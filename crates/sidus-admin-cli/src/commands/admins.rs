//! The `admins` management command.
//!
//! Without argument, lists every registered admin with its entity, prefix and
//! actions. With an admin code, details that admin's actions.

use std::io::Write;

use sidus_admin::{Admin, AdminRegistry};
use sidus_admin_core::AdminResult;

use crate::command::ManagementCommand;

/// Describes the registered admins.
pub struct AdminsCommand;

impl ManagementCommand for AdminsCommand {
    fn name(&self) -> &'static str {
        "admins"
    }

    fn help(&self) -> &'static str {
        "List the registered admins, or describe one of them"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("admin")
                .value_name("ADMIN")
                .help("Code of the admin to describe"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        registry: &AdminRegistry,
        out: &mut dyn Write,
    ) -> AdminResult<()> {
        if let Some(code) = matches.get_one::<String>("admin") {
            return describe_admin(registry.get_admin(code)?, out);
        }

        if registry.is_empty() {
            writeln!(out, "No admins.")?;
            return Ok(());
        }

        for admin in registry.admins().values() {
            writeln!(
                out,
                "{} (entity: {}, prefix: {}) [{}]",
                admin.code(),
                admin.entity().unwrap_or("-"),
                admin.prefix().unwrap_or("-"),
                admin.action_codes().join(", ")
            )?;
        }

        Ok(())
    }
}

fn describe_admin(admin: &Admin, out: &mut dyn Write) -> AdminResult<()> {
    writeln!(out, "Admin: {}", admin.code())?;
    writeln!(out, "  Entity: {}", admin.entity().unwrap_or("-"))?;
    writeln!(out, "  Prefix: {}", admin.prefix().unwrap_or("-"))?;
    writeln!(out, "  Form type: {}", admin.form_type().unwrap_or("-"))?;
    writeln!(out, "  Base template: {}", admin.base_template().unwrap_or("-"))?;
    writeln!(out, "  Actions:")?;
    for action in admin.actions().values() {
        writeln!(
            out,
            "    {} -> {} ({})",
            action.code(),
            action.route_name(),
            action.route().path()
        )?;
    }
    Ok(())
}
