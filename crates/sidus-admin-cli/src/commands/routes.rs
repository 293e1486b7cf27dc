//! The `routes` management command.
//!
//! Loads the admin routes the way the host router would and prints them,
//! either as an aligned table or as JSON.

use std::io::Write;

use sidus_admin::{AdminRegistry, AdminRouteLoader, Loader, RouteCollection, LOADER_TYPE};
use sidus_admin_core::{AdminError, AdminResult};

use crate::command::ManagementCommand;

/// Lists every route generated by the registered admins.
pub struct RoutesCommand;

impl ManagementCommand for RoutesCommand {
    fn name(&self) -> &'static str {
        "routes"
    }

    fn help(&self) -> &'static str {
        "List the routes generated by the admins"
    }

    fn add_arguments(&self, cmd: clap::Command) -> clap::Command {
        cmd.arg(
            clap::Arg::new("format")
                .long("format")
                .short('f')
                .value_parser(["text", "json"])
                .default_value("text")
                .help("Output format"),
        )
    }

    fn handle(
        &self,
        matches: &clap::ArgMatches,
        registry: &AdminRegistry,
        out: &mut dyn Write,
    ) -> AdminResult<()> {
        let routes = AdminRouteLoader::new(registry).load(".", Some(LOADER_TYPE))?;

        match matches.get_one::<String>("format").map(String::as_str) {
            Some("json") => {
                let json = serde_json::to_string_pretty(&routes).map_err(|e| {
                    AdminError::SerializationError(format!("Failed to serialize routes: {e}"))
                })?;
                writeln!(out, "{json}")?;
            }
            _ => write_table(&routes, out)?,
        }

        Ok(())
    }
}

fn write_table(routes: &RouteCollection, out: &mut dyn Write) -> AdminResult<()> {
    if routes.is_empty() {
        writeln!(out, "No routes.")?;
        return Ok(());
    }

    let rows: Vec<(&str, String, &str)> = routes
        .iter()
        .map(|(name, route)| {
            let methods = if route.get_methods().is_empty() {
                "ANY".to_string()
            } else {
                route.get_methods().join("|")
            };
            (name, methods, route.path())
        })
        .collect();

    let name_width = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0).max(4);
    let method_width = rows.iter().map(|(_, m, _)| m.len()).max().unwrap_or(0).max(6);

    writeln!(out, "{:<name_width$}  {:<method_width$}  Path", "Name", "Method")?;
    for (name, methods, path) in rows {
        writeln!(out, "{name:<name_width$}  {methods:<method_width$}  {path}")?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidus_admin::Admin;
    use sidus_admin_core::{ActionConfig, AdminConfig};

    fn registry() -> AdminRegistry {
        let mut registry = AdminRegistry::new();
        registry.add_admin(
            Admin::new(
                "product",
                AdminConfig::new()
                    .prefix("/products")
                    .controller_pattern(vec!["{{Admin}}Controller::{{action}}Action"])
                    .action("list", ActionConfig::new("/list"))
                    .action("edit", ActionConfig::new("/{id}/edit").methods(vec!["GET", "POST"])),
            )
            .unwrap(),
        );
        registry
    }

    fn run(args: &[&str], registry: &AdminRegistry) -> String {
        let cmd = RoutesCommand;
        let matches = cmd
            .add_arguments(clap::Command::new("routes"))
            .try_get_matches_from(args)
            .unwrap();
        let mut out = Vec::new();
        cmd.handle(&matches, registry, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_routes_text() {
        let output = run(&["routes"], &registry());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Name"));
        assert!(lines[1].starts_with("sidus_admin.product.list"));
        assert!(lines[1].contains("ANY"));
        assert!(lines[1].ends_with("/products/list"));
        assert!(lines[2].contains("GET|POST"));
        assert!(lines[2].ends_with("/products/{id}/edit"));
    }

    #[test]
    fn test_routes_json() {
        let output = run(&["routes", "--format", "json"], &registry());
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let names: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(names, vec!["sidus_admin.product.list", "sidus_admin.product.edit"]);
        assert_eq!(value["sidus_admin.product.edit"]["methods"], serde_json::json!(["GET", "POST"]));
    }

    #[test]
    fn test_routes_empty_registry() {
        let output = run(&["routes"], &AdminRegistry::new());
        assert_eq!(output, "No routes.\n");
    }

    #[test]
    fn test_routes_rejects_unknown_format() {
        let result = RoutesCommand
            .add_arguments(clap::Command::new("routes"))
            .try_get_matches_from(["routes", "--format", "yaml"]);
        assert!(result.is_err());
    }
}
