//! The `check` management command.
//!
//! Runs the built-in admin checks and fails when a message reaches the
//! requested severity.

use std::io::Write;

use sidus_admin::checks::default_checks;
use sidus_admin::AdminRegistry;
use sidus_admin_core::checks::CheckLevel;
use sidus_admin_core::{AdminError, AdminResult};

use crate::command::ManagementCommand;

/// Runs system checks over the admin configuration.
pub struct CheckCommand;

impl ManagementCommand for CheckCommand {
    fn name(&self) -> &'static str {
        "check"
    }

    fn help(&self) -> &'static str {
        "Run system checks over the admin configuration"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("tag")
                .long("tag")
                .short('t')
                .action(clap::ArgAction::Append)
                .help("Only run checks with this tag (routing, admin, templates)"),
        )
        .arg(
            clap::Arg::new("fail-level")
                .long("fail-level")
                .default_value("ERROR")
                .help("Message level that makes the command fail"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        registry: &AdminRegistry,
        out: &mut dyn Write,
    ) -> AdminResult<()> {
        let fail_level: CheckLevel = matches
            .get_one::<String>("fail-level")
            .map_or(Ok(CheckLevel::Error), |level| level.parse())?;

        let tags: Option<Vec<&str>> = matches
            .get_many::<String>("tag")
            .map(|tags| tags.map(String::as_str).collect());

        let messages = default_checks().run_checks(tags.as_deref(), registry);

        if messages.is_empty() {
            writeln!(out, "System check identified no issues.")?;
            return Ok(());
        }

        for message in &messages {
            writeln!(out, "{message}")?;
        }
        writeln!(out, "System check identified {} issue(s).", messages.len())?;

        let failing = messages.iter().filter(|m| m.level >= fail_level).count();
        if failing > 0 {
            tracing::warn!(failing, %fail_level, "system check failed");
            return Err(AdminError::ConfigurationError(format!(
                "System check found {failing} issue(s) at or above {fail_level}"
            )));
        }

        Ok(())
    }
}
