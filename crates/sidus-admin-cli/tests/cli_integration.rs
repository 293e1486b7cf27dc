//! Integration tests for the management CLI: settings file to command output.

use std::io::Write as _;

use sidus_admin_cli::commands::register_builtin_commands;
use sidus_admin_cli::{run, CommandRegistry};
use sidus_admin_core::AdminError;

const ADMIN_TOML: &str = r#"
    debug = true
    log_level = "warn"

    [configurations.product]
    prefix = "/products"
    controller_pattern = ["{{Admin}}Controller::{{action}}Action"]
    template_pattern = ["{{admin}}/{{action}}.{{format}}.twig"]

    [configurations.product.actions.list]
    path = "/list"

    [configurations.product.actions.edit]
    path = "/{id}/edit"
    methods = ["GET", "POST"]

    [configurations.category]
    prefix = "/categories"
    template_pattern = ["{{admin}}/{{action}}.{{format}}.twig"]

    [configurations.category.actions.list]
    path = "/list"
    defaults = { _controller = "CategoryController::list" }
"#;

// ── Helpers ─────────────────────────────────────────────────────────

fn commands() -> CommandRegistry {
    let mut commands = CommandRegistry::new();
    register_builtin_commands(&mut commands);
    commands
}

fn config_file(contents: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn invoke(file: &tempfile::NamedTempFile, args: &[&str]) -> (Result<(), AdminError>, String) {
    let commands = commands();
    let path = file.path().to_str().unwrap();
    let mut argv = vec!["sidus-admin", "--config", path];
    argv.extend_from_slice(args);
    let matches = commands.build_cli().try_get_matches_from(argv).unwrap();

    let mut out = Vec::new();
    let result = run(&commands, &matches, &mut out);
    (result, String::from_utf8(out).unwrap())
}

// ═════════════════════════════════════════════════════════════════════
// routes
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_routes_from_toml_file() {
    let file = config_file(ADMIN_TOML, ".toml");
    let (result, output) = invoke(&file, &["routes"]);
    result.unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("sidus_admin.product.list"));
    assert!(lines[2].starts_with("sidus_admin.product.edit"));
    assert!(lines[3].starts_with("sidus_admin.category.list"));
    assert!(lines[3].ends_with("/categories/list"));
}

#[test]
fn test_routes_json_from_json_file() {
    let json = r#"{
        "configurations": {
            "user": {
                "prefix": "/users",
                "controller_pattern": ["UserController::{{action}}"],
                "actions": { "list": { "path": "/" } }
            }
        }
    }"#;
    let file = config_file(json, ".json");
    let (result, output) = invoke(&file, &["routes", "--format", "json"]);
    result.unwrap();

    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["sidus_admin.user.list"]["path"], serde_json::json!("/users/"));
    assert_eq!(
        value["sidus_admin.user.list"]["defaults"]["_action"],
        serde_json::json!("list")
    );
}

// ═════════════════════════════════════════════════════════════════════
// admins
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_admins_listing() {
    let file = config_file(ADMIN_TOML, ".toml");
    let (result, output) = invoke(&file, &["admins"]);
    result.unwrap();
    assert!(output.starts_with("product (entity: -, prefix: /products) [list, edit]\n"));
    assert!(output.contains("category (entity: -, prefix: /categories) [list]\n"));
}

// ═════════════════════════════════════════════════════════════════════
// check
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_check_clean_configuration() {
    let file = config_file(ADMIN_TOML, ".toml");
    let (result, output) = invoke(&file, &["check"]);
    result.unwrap();
    assert_eq!(output, "System check identified no issues.\n");
}

// ═════════════════════════════════════════════════════════════════════
// Bootstrap errors
// ═════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_controller_fails_before_dispatch() {
    let file = config_file(
        r#"
        [configurations.user.actions.list]
        path = "/users"
        "#,
        ".toml",
    );
    let (result, output) = invoke(&file, &["routes"]);
    assert!(matches!(result, Err(AdminError::ConfigurationError(_))));
    assert!(output.is_empty());
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let file = config_file(
        r#"
        [configurations.user]
        prefixx = "/users"
        "#,
        ".toml",
    );
    let (result, _) = invoke(&file, &["admins"]);
    assert!(matches!(result, Err(AdminError::ConfigurationError(_))));
}

#[test]
fn test_misspelled_top_level_key_is_rejected() {
    let file = config_file(
        r#"
        [configuraitons.user.actions.list]
        path = "/users"
        "#,
        ".toml",
    );
    let (result, output) = invoke(&file, &["routes"]);
    assert!(matches!(result, Err(AdminError::ConfigurationError(_))));
    assert!(output.is_empty());
}

#[test]
fn test_missing_config_file() {
    let commands = commands();
    let matches = commands
        .build_cli()
        .try_get_matches_from(["sidus-admin", "--config", "/nonexistent/admin.toml", "admins"])
        .unwrap();
    let mut out = Vec::new();
    assert!(run(&commands, &matches, &mut out).is_err());
}
