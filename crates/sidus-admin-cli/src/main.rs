//! The `sidus-admin` management utility.
//!
//! ```bash
//! sidus-admin --config admin.toml routes --format json
//! sidus-admin --config admin.toml admins product
//! sidus-admin --config admin.toml check --fail-level warning
//! ```

use std::process::ExitCode;

use sidus_admin_cli::command::CommandRegistry;
use sidus_admin_cli::commands::register_builtin_commands;

fn main() -> ExitCode {
    let mut commands = CommandRegistry::new();
    register_builtin_commands(&mut commands);

    let matches = commands.build_cli().get_matches();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match sidus_admin_cli::run(&commands, &matches, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}
