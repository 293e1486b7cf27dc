//! Controller and template pattern resolution.
//!
//! Admins name their controllers and templates with patterns such as
//! `{{Admin}}Controller::{{action}}Action` or
//! `{{admin}}/{{action}}.{{format}}.twig`. Placeholders:
//!
//! | Placeholder | Replaced with |
//! |---|---|
//! | `{{admin}}` | the admin code |
//! | `{{Admin}}` | the admin code in UpperCamelCase |
//! | `{{action}}` | the action code |
//! | `{{Action}}` | the action code in UpperCamelCase |
//! | `{{format}}` | the requested format (`html` by default) |
//!
//! Resolution tries each pattern in order and keeps the first candidate the
//! caller-supplied `exists` predicate accepts; the host application decides
//! what "exists" means (a registered controller, a template on disk).

use serde_json::Value;
use sidus_admin_core::{AdminError, AdminResult};

use crate::action::{is_set, Action, CONTROLLER_KEY, CONTROLLER_PATTERN_KEY};
use crate::admin::Admin;

/// Format used when none is requested.
pub const DEFAULT_FORMAT: &str = "html";

/// Replaces the placeholders of `pattern`.
///
/// # Examples
///
/// ```
/// use sidus_admin::patterns::interpolate;
///
/// assert_eq!(
///     interpolate("{{Admin}}Controller::{{action}}Action", "blog_post", "edit", None),
///     "BlogPostController::editAction"
/// );
/// assert_eq!(
///     interpolate("{{admin}}/{{action}}.{{format}}.twig", "blog_post", "edit", Some("json")),
///     "blog_post/edit.json.twig"
/// );
/// ```
pub fn interpolate(pattern: &str, admin_code: &str, action_code: &str, format: Option<&str>) -> String {
    pattern
        .replace("{{admin}}", admin_code)
        .replace("{{Admin}}", &upper_camel(admin_code))
        .replace("{{action}}", action_code)
        .replace("{{Action}}", &upper_camel(action_code))
        .replace("{{format}}", format.unwrap_or(DEFAULT_FORMAT))
}

/// Converts a code to UpperCamelCase, splitting on `_`, `-` and `.`.
pub fn upper_camel(code: &str) -> String {
    code.split(['_', '-', '.'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            chars.next().map_or_else(String::new, |first| {
                first.to_uppercase().chain(chars).collect()
            })
        })
        .collect()
}

/// Returns the controller candidates of an action, in resolution order.
///
/// An explicit `_controller` default is the only candidate; otherwise every
/// `_controller_pattern` entry is interpolated.
pub fn controller_candidates(action: &Action) -> Vec<String> {
    if let Some(controller) = explicit_controller(action) {
        return vec![controller.to_string()];
    }

    let patterns: Vec<&str> = match action.route().default_param(CONTROLLER_PATTERN_KEY) {
        Some(Value::Array(entries)) => entries.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(pattern)) => vec![pattern.as_str()],
        _ => Vec::new(),
    };

    patterns
        .into_iter()
        .map(|pattern| interpolate(pattern, action.admin_code(), action.code(), None))
        .collect()
}

/// The `_controller` default of an action, unless it is unset or empty.
fn explicit_controller(action: &Action) -> Option<&str> {
    action
        .route()
        .default_param(CONTROLLER_KEY)
        .filter(|controller| is_set(controller))
        .and_then(Value::as_str)
}

/// Resolves the controller of an action.
///
/// An explicit `_controller` is returned as is. Otherwise the interpolated
/// `_controller_pattern` entries are tried in order and the first one accepted
/// by `exists` wins.
///
/// # Errors
///
/// Returns `NotFound` listing the tried candidates if none is accepted.
pub fn resolve_controller<F>(action: &Action, exists: F) -> AdminResult<String>
where
    F: Fn(&str) -> bool,
{
    if let Some(controller) = explicit_controller(action) {
        return Ok(controller.to_string());
    }

    first_accepted(controller_candidates(action), &exists).map_err(|tried| {
        AdminError::NotFound(format!(
            "Unable to resolve controller for action '{}' of admin '{}', tried: [{}]",
            action.code(),
            action.admin_code(),
            tried.join(", ")
        ))
    })
}

/// Resolves the template of an action for a format.
///
/// The action's own template wins. Otherwise the admin's `template_pattern`
/// entries are interpolated and the first one accepted by `exists` is
/// returned.
///
/// # Errors
///
/// Returns `NotFound` listing the tried candidates if none is accepted.
pub fn resolve_template<F>(admin: &Admin, action: &Action, format: Option<&str>, exists: F) -> AdminResult<String>
where
    F: Fn(&str) -> bool,
{
    if let Some(template) = action.template().filter(|template| !template.is_empty()) {
        return Ok(template.to_string());
    }

    let candidates = admin
        .template_pattern()
        .iter()
        .map(|pattern| interpolate(pattern, admin.code(), action.code(), format))
        .collect();

    first_accepted(candidates, &exists).map_err(|tried| {
        AdminError::NotFound(format!(
            "Unable to resolve template for action '{}' of admin '{}', tried: [{}]",
            action.code(),
            admin.code(),
            tried.join(", ")
        ))
    })
}

fn first_accepted<F>(mut candidates: Vec<String>, exists: &F) -> Result<String, Vec<String>>
where
    F: Fn(&str) -> bool,
{
    if let Some(index) = candidates.iter().position(|candidate| exists(candidate)) {
        return Ok(candidates.swap_remove(index));
    }
    tracing::debug!(candidates = ?candidates, "no candidate accepted");
    Err(candidates)
}
