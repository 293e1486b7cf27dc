//! Raw admin and action configuration records.
//!
//! These records are what configuration files deserialize into. They carry no
//! behavior beyond defaults and builder helpers; the `sidus-admin` crate turns
//! them into `Admin` and `Action` objects.
//!
//! # Examples
//!
//! ```
//! use sidus_admin_core::config::{ActionConfig, AdminConfig};
//!
//! let config = AdminConfig::new()
//!     .prefix("/products")
//!     .entity("App\\Entity\\Product")
//!     .controller_pattern(vec!["{{Admin}}Controller::{{action}}Action"])
//!     .action("list", ActionConfig::new("/list"))
//!     .action("edit", ActionConfig::new("/{id}/edit").methods(vec!["GET", "POST"]));
//!
//! assert_eq!(config.actions.len(), 2);
//! assert_eq!(config.actions.get_index(0).unwrap().0, "list");
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An open, ordered mapping of string keys to arbitrary values.
///
/// Used for admin options, action options, form options, route defaults and
/// route options.
pub type Parameters = serde_json::Map<String, serde_json::Value>;

/// Configuration of a single action inside an admin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActionConfig {
    /// The route path, appended to the admin prefix.
    pub path: String,
    /// Options queryable on the action itself.
    #[serde(default)]
    pub options: Parameters,
    /// Form type used by this action; falls back to the admin form type.
    #[serde(default)]
    pub form_type: Option<String>,
    /// Options passed to the form.
    #[serde(default)]
    pub form_options: Parameters,
    /// Explicit template for this action.
    #[serde(default)]
    pub template: Option<String>,
    /// Base template; defaults to the admin base template.
    #[serde(default)]
    pub base_template: Option<String>,
    /// Default route parameters (`_controller`, `_controller_pattern`, ...).
    #[serde(default)]
    pub defaults: Parameters,
    /// Regex requirements for route placeholders.
    #[serde(default)]
    pub requirements: IndexMap<String, String>,
    /// Options forwarded to the route, independent from [`Self::options`].
    #[serde(default)]
    pub route_options: Parameters,
    /// Host pattern the route is restricted to.
    #[serde(default)]
    pub host: String,
    /// URI schemes the route is restricted to.
    #[serde(default)]
    pub schemes: Vec<String>,
    /// HTTP methods the route is restricted to.
    #[serde(default)]
    pub methods: Vec<String>,
    /// Matching condition expression.
    #[serde(default)]
    pub condition: String,
}

impl ActionConfig {
    /// Creates an action configuration for the given route path.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Sets an action option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Sets the form type.
    #[must_use]
    pub fn form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = Some(form_type.into());
        self
    }

    /// Sets a form option.
    #[must_use]
    pub fn form_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.form_options.insert(key.into(), value);
        self
    }

    /// Sets the template.
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Sets the base template.
    #[must_use]
    pub fn base_template(mut self, template: impl Into<String>) -> Self {
        self.base_template = Some(template.into());
        self
    }

    /// Sets a default route parameter.
    #[must_use]
    pub fn default_param(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.defaults.insert(key.into(), value);
        self
    }

    /// Sets the explicit controller (`defaults._controller`).
    #[must_use]
    pub fn controller(self, controller: impl Into<String>) -> Self {
        self.default_param("_controller", serde_json::Value::String(controller.into()))
    }

    /// Sets a placeholder requirement.
    #[must_use]
    pub fn requirement(mut self, key: impl Into<String>, regex: impl Into<String>) -> Self {
        self.requirements.insert(key.into(), regex.into());
        self
    }

    /// Sets a route option.
    #[must_use]
    pub fn route_option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.route_options.insert(key.into(), value);
        self
    }

    /// Sets the host pattern.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the allowed schemes.
    #[must_use]
    pub fn schemes(mut self, schemes: Vec<&str>) -> Self {
        self.schemes = schemes.into_iter().map(String::from).collect();
        self
    }

    /// Sets the allowed HTTP methods.
    #[must_use]
    pub fn methods(mut self, methods: Vec<&str>) -> Self {
        self.methods = methods.into_iter().map(String::from).collect();
        self
    }

    /// Sets the matching condition.
    #[must_use]
    pub fn condition(mut self, condition: impl Into<String>) -> Self {
        self.condition = condition.into();
        self
    }
}

/// Configuration of one admin and its actions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdminConfig {
    /// Controller naming patterns tried in order.
    #[serde(default)]
    pub controller_pattern: Vec<String>,
    /// Base template inherited by actions.
    #[serde(default)]
    pub base_template: Option<String>,
    /// Template naming patterns tried in order.
    #[serde(default)]
    pub template_pattern: Vec<String>,
    /// Prefix prepended to every action path.
    #[serde(default)]
    pub prefix: Option<String>,
    /// The entity type managed by this admin.
    #[serde(default)]
    pub entity: Option<String>,
    /// Default form type for actions.
    #[serde(default)]
    pub form_type: Option<String>,
    /// Admin-level options.
    #[serde(default)]
    pub options: Parameters,
    /// Name of the action factory used to build actions.
    #[serde(default)]
    pub action_class: Option<String>,
    /// Action configurations, in declaration order.
    #[serde(default)]
    pub actions: IndexMap<String, ActionConfig>,
}

impl AdminConfig {
    /// Creates an empty admin configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the controller patterns.
    #[must_use]
    pub fn controller_pattern(mut self, patterns: Vec<&str>) -> Self {
        self.controller_pattern = patterns.into_iter().map(String::from).collect();
        self
    }

    /// Sets the base template.
    #[must_use]
    pub fn base_template(mut self, template: impl Into<String>) -> Self {
        self.base_template = Some(template.into());
        self
    }

    /// Sets the template patterns.
    #[must_use]
    pub fn template_pattern(mut self, patterns: Vec<&str>) -> Self {
        self.template_pattern = patterns.into_iter().map(String::from).collect();
        self
    }

    /// Sets the route prefix.
    #[must_use]
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Sets the managed entity.
    #[must_use]
    pub fn entity(mut self, entity: impl Into<String>) -> Self {
        self.entity = Some(entity.into());
        self
    }

    /// Sets the default form type.
    #[must_use]
    pub fn form_type(mut self, form_type: impl Into<String>) -> Self {
        self.form_type = Some(form_type.into());
        self
    }

    /// Sets an admin option.
    #[must_use]
    pub fn option(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.options.insert(key.into(), value);
        self
    }

    /// Sets the action factory name.
    #[must_use]
    pub fn action_class(mut self, name: impl Into<String>) -> Self {
        self.action_class = Some(name.into());
        self
    }

    /// Appends an action configuration. A repeated code replaces the earlier
    /// configuration in place.
    #[must_use]
    pub fn action(mut self, code: impl Into<String>, config: ActionConfig) -> Self {
        self.actions.insert(code.into(), config);
        self
    }
}
