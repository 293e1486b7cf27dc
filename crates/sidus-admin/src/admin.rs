//! Admin definitions.
//!
//! An [`Admin`] is the configuration bundle for one manageable entity type. It
//! owns its [`Action`]s in declaration order and is immutable once built.

use indexmap::IndexMap;
use serde_json::Value;
use sidus_admin_core::{AdminConfig, AdminError, AdminResult, Parameters};

use crate::action::Action;
use crate::factory::{ActionFactory, DefaultActionFactory};

/// Configuration bundle for one entity type, holding its actions.
///
/// # Examples
///
/// ```
/// use sidus_admin::Admin;
/// use sidus_admin_core::config::{ActionConfig, AdminConfig};
///
/// let admin = Admin::new(
///     "product",
///     AdminConfig::new()
///         .prefix("/products")
///         .base_template("admin/base.html.twig")
///         .controller_pattern(vec!["{{Admin}}Controller::{{action}}Action"])
///         .action("list", ActionConfig::new("/list"))
///         .action("edit", ActionConfig::new("/{id}/edit")),
/// )
/// .unwrap();
///
/// assert_eq!(admin.action_codes(), vec!["list", "edit"]);
/// assert!(admin.has_route("sidus_admin.product.edit"));
/// assert_eq!(
///     admin.get_action("list").unwrap().base_template(),
///     Some("admin/base.html.twig")
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Admin {
    code: String,
    controller_pattern: Vec<String>,
    base_template: Option<String>,
    template_pattern: Vec<String>,
    prefix: Option<String>,
    entity: Option<String>,
    form_type: Option<String>,
    options: Parameters,
    actions: IndexMap<String, Action>,
}

impl Admin {
    /// Builds an admin and its actions with the [`DefaultActionFactory`].
    ///
    /// # Errors
    ///
    /// Returns the first error raised while building an action.
    pub fn new(code: &str, config: AdminConfig) -> AdminResult<Self> {
        Self::with_factory(code, config, &DefaultActionFactory)
    }

    /// Builds an admin, creating every action through `factory`.
    ///
    /// Actions without a `base_template` inherit the admin's one before they
    /// are handed to the factory.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by the factory, or a
    /// `ConfigurationError` if the factory returns an action that does not
    /// belong to this admin under the configured code.
    pub fn with_factory(
        code: &str,
        config: AdminConfig,
        factory: &dyn ActionFactory,
    ) -> AdminResult<Self> {
        let AdminConfig {
            controller_pattern,
            base_template,
            template_pattern,
            prefix,
            entity,
            form_type,
            options,
            action_class: _,
            actions: action_configs,
        } = config;

        let mut admin = Self {
            code: code.to_string(),
            controller_pattern,
            base_template,
            template_pattern,
            prefix,
            entity,
            form_type,
            options,
            actions: IndexMap::new(),
        };

        let mut actions = IndexMap::with_capacity(action_configs.len());
        for (action_code, mut action_config) in action_configs {
            if action_config.base_template.is_none() {
                action_config.base_template.clone_from(&admin.base_template);
            }
            let action = factory.create(&action_code, &admin, action_config)?;
            if action.code() != action_code || action.admin_code() != admin.code {
                return Err(AdminError::ConfigurationError(format!(
                    "Action factory returned action '{}' of admin '{}' for action '{action_code}' of admin '{}'",
                    action.code(),
                    action.admin_code(),
                    admin.code
                )));
            }
            actions.insert(action_code, action);
        }
        admin.actions = actions;

        tracing::debug!(admin = %admin.code, actions = admin.actions.len(), "built admin");
        Ok(admin)
    }

    /// Returns the admin code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the controller naming patterns.
    pub fn controller_pattern(&self) -> &[String] {
        &self.controller_pattern
    }

    /// Returns the template naming patterns.
    pub fn template_pattern(&self) -> &[String] {
        &self.template_pattern
    }

    /// Returns the base template.
    pub fn base_template(&self) -> Option<&str> {
        self.base_template.as_deref()
    }

    /// Returns the route prefix.
    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    /// Returns the managed entity type.
    pub fn entity(&self) -> Option<&str> {
        self.entity.as_deref()
    }

    /// Returns the default form type.
    pub fn form_type(&self) -> Option<&str> {
        self.form_type.as_deref()
    }

    /// Returns the admin options.
    pub const fn options(&self) -> &Parameters {
        &self.options
    }

    /// Returns an option, or `default` when it is not set.
    pub fn option<'a>(&'a self, key: &str, default: Option<&'a Value>) -> Option<&'a Value> {
        self.options.get(key).or(default)
    }

    /// Returns whether an option is set (even to `null`).
    pub fn has_option(&self, key: &str) -> bool {
        self.options.contains_key(key)
    }

    /// Returns the actions keyed by code, in declaration order.
    pub const fn actions(&self) -> &IndexMap<String, Action> {
        &self.actions
    }

    /// Returns the action codes in declaration order.
    pub fn action_codes(&self) -> Vec<&str> {
        self.actions.keys().map(String::as_str).collect()
    }

    /// Returns the action with the given code.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the admin has no such action.
    pub fn get_action(&self, code: &str) -> AdminResult<&Action> {
        self.actions.get(code).ok_or_else(|| {
            AdminError::NotFound(format!(
                "No action with code: '{code}' for admin '{}'",
                self.code
            ))
        })
    }

    /// Returns whether the admin has an action with the given code.
    pub fn has_action(&self, code: &str) -> bool {
        self.actions.contains_key(code)
    }

    /// Returns whether one of the actions generates the given route name.
    pub fn has_route(&self, route_name: &str) -> bool {
        self.actions
            .values()
            .any(|action| action.route_name() == route_name)
    }
}
