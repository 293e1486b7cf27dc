//! Built-in checks over a built [`AdminRegistry`].
//!
//! These never fail construction; they report configurations that build fine
//! but will misbehave once routed.
//!
//! | Id | Level | Problem |
//! |---|---|---|
//! | `routing.E001` | Error | two actions generate the same route name |
//! | `routing.E002` | Error | a requirement is not a valid regular expression |
//! | `routing.W001` | Warning | two routes share path, host and methods |
//! | `routing.W002` | Warning | a path contains an empty segment (`//`) |
//! | `admin.I001` | Info | an admin declares no action |
//! | `templates.W001` | Warning | an action has no template and its admin no `template_pattern` |

use indexmap::IndexMap;
use regex::Regex;
use sidus_admin_core::checks::{CheckMessage, CheckRegistry};

use crate::registry::AdminRegistry;

/// Returns a check registry holding every built-in check, tagged `routing`,
/// `admin` or `templates`.
pub fn default_checks() -> CheckRegistry<AdminRegistry> {
    let mut checks = CheckRegistry::new();
    checks.register(check_duplicate_route_names, &["routing"]);
    checks.register(check_requirements, &["routing"]);
    checks.register(check_shadowed_routes, &["routing"]);
    checks.register(check_empty_path_segments, &["routing"]);
    checks.register(check_admins_without_actions, &["admin"]);
    checks.register(check_unresolvable_templates, &["templates"]);
    checks
}

/// Runs every built-in check.
pub fn run_checks(registry: &AdminRegistry) -> Vec<CheckMessage> {
    let messages = default_checks().run_checks(None, registry);
    tracing::debug!(messages = messages.len(), "ran admin checks");
    messages
}

/// Admin codes may contain dots, so `a.b` + `c` and `a` + `b.c` collide.
fn check_duplicate_route_names(registry: &AdminRegistry) -> Vec<CheckMessage> {
    let mut owners: IndexMap<String, Vec<String>> = IndexMap::new();
    for admin in registry.admins().values() {
        for action in admin.actions().values() {
            owners
                .entry(action.route_name())
                .or_default()
                .push(format!("{}.{}", admin.code(), action.code()));
        }
    }

    owners
        .into_iter()
        .filter(|(_, actions)| actions.len() > 1)
        .map(|(name, actions)| {
            CheckMessage::error(
                format!(
                    "Route name '{name}' is generated by several actions: {}",
                    actions.join(", ")
                ),
                Some("Avoid dots in admin and action codes."),
                Some(name.as_str()),
                Some("routing.E001"),
            )
        })
        .collect()
}

fn check_requirements(registry: &AdminRegistry) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    for admin in registry.admins().values() {
        for action in admin.actions().values() {
            for (key, requirement) in action.route().get_requirements() {
                if let Err(err) = Regex::new(&format!("^(?:{requirement})$")) {
                    messages.push(CheckMessage::error(
                        format!("Requirement '{key}' is not a valid regular expression: {err}"),
                        Some("Fix the requirement pattern."),
                        Some(action.route_name().as_str()),
                        Some("routing.E002"),
                    ));
                }
            }
        }
    }

    messages
}

/// Routes matching the same requests: only the first one is ever reached.
fn check_shadowed_routes(registry: &AdminRegistry) -> Vec<CheckMessage> {
    let mut seen: IndexMap<(String, String, Vec<String>), String> = IndexMap::new();
    let mut messages = Vec::new();

    for admin in registry.admins().values() {
        for action in admin.actions().values() {
            let route = action.route();
            let mut methods = route.get_methods().to_vec();
            methods.sort_unstable();
            let key = (route.path().to_string(), route.get_host().to_string(), methods);
            let route_name = action.route_name();

            match seen.get(&key) {
                Some(first) if *first != route_name => {
                    messages.push(CheckMessage::warning(
                        format!(
                            "Route '{route_name}' has the same path, host and methods as '{first}' ({})",
                            route.path()
                        ),
                        Some("Change the path or restrict the methods of one of the actions."),
                        Some(route_name.as_str()),
                        Some("routing.W001"),
                    ));
                }
                Some(_) => {}
                None => {
                    seen.insert(key, route_name);
                }
            }
        }
    }

    messages
}

fn check_empty_path_segments(registry: &AdminRegistry) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    for admin in registry.admins().values() {
        for action in admin.actions().values() {
            let path = action.route().path();
            if path.contains("//") {
                messages.push(CheckMessage::warning(
                    format!("Path '{path}' contains an empty segment"),
                    Some("Remove the trailing slash from the admin prefix."),
                    Some(action.route_name().as_str()),
                    Some("routing.W002"),
                ));
            }
        }
    }

    messages
}

fn check_admins_without_actions(registry: &AdminRegistry) -> Vec<CheckMessage> {
    registry
        .admins()
        .values()
        .filter(|admin| admin.actions().is_empty())
        .map(|admin| {
            CheckMessage::info(
                format!("Admin '{}' has no action", admin.code()),
                None,
                Some(admin.code()),
                Some("admin.I001"),
            )
        })
        .collect()
}

fn check_unresolvable_templates(registry: &AdminRegistry) -> Vec<CheckMessage> {
    let mut messages = Vec::new();

    for admin in registry.admins().values() {
        if !admin.template_pattern().is_empty() {
            continue;
        }
        for action in admin.actions().values() {
            if action.template().map_or(true, str::is_empty) {
                messages.push(CheckMessage::warning(
                    format!(
                        "Action '{}' of admin '{}' has no template and the admin has no template_pattern",
                        action.code(),
                        admin.code()
                    ),
                    Some("Set 'template' on the action or 'template_pattern' on the admin."),
                    Some(action.route_name().as_str()),
                    Some("templates.W001"),
                ));
            }
        }
    }

    messages
}
