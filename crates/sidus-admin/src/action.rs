//! Actions: the operations an admin exposes.
//!
//! An [`Action`] is built once from its [`ActionConfig`] and the owning
//! [`Admin`]. Construction resolves how the controller will be found, stamps
//! the route defaults with `_admin` and `_action`, and builds the immutable
//! [`Route`] under the admin prefix.

use serde_json::Value;
use sidus_admin_core::{ActionConfig, AdminError, AdminResult, Parameters};

use crate::admin::Admin;
use crate::route::Route;

/// Namespace prefixed to every generated route name.
pub const ROUTE_NAMESPACE: &str = "sidus_admin";

/// Route default holding an explicit controller reference.
pub const CONTROLLER_KEY: &str = "_controller";
/// Route default holding the controller naming patterns.
pub const CONTROLLER_PATTERN_KEY: &str = "_controller_pattern";
/// Route default holding the admin code.
pub const ADMIN_KEY: &str = "_admin";
/// Route default holding the action code.
pub const ACTION_KEY: &str = "_action";

/// One operation of an admin, with its own route, options and form setup.
///
/// The action keeps the code of its admin instead of a reference to it. Values
/// inherited from the admin (the form type fallback) are captured when the
/// action is built; admins are immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Action {
    code: String,
    admin_code: String,
    options: Parameters,
    form_type: Option<String>,
    admin_form_type: Option<String>,
    form_options: Parameters,
    template: Option<String>,
    base_template: Option<String>,
    route: Route,
}

impl Action {
    /// Builds an action for `admin` from its configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` when neither `defaults._controller` nor
    /// `defaults._controller_pattern` is set and the admin has no
    /// `controller_pattern`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sidus_admin::{Action, Admin};
    /// use sidus_admin_core::config::{ActionConfig, AdminConfig};
    ///
    /// let admin = Admin::new("product", AdminConfig::new().prefix("/products")).unwrap();
    /// let action = Action::new(
    ///     "list",
    ///     &admin,
    ///     ActionConfig::new("/list").controller("ProductController::list"),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(action.route_name(), "sidus_admin.product.list");
    /// assert_eq!(action.route().path(), "/products/list");
    /// ```
    pub fn new(code: &str, admin: &Admin, config: ActionConfig) -> AdminResult<Self> {
        let ActionConfig {
            path,
            options,
            form_type,
            form_options,
            template,
            base_template,
            mut defaults,
            requirements,
            route_options,
            host,
            schemes,
            methods,
            condition,
        } = config;

        let has_controller = defaults.get(CONTROLLER_PATTERN_KEY).is_some_and(is_set)
            || defaults.get(CONTROLLER_KEY).is_some_and(is_set);
        if !has_controller {
            if admin.controller_pattern().is_empty() {
                return Err(AdminError::ConfigurationError(format!(
                    "You must configure either the 'defaults._controller' option in the action \
                     '{code}' or the 'controller_pattern' option in the admin '{}'",
                    admin.code()
                )));
            }
            let patterns = admin
                .controller_pattern()
                .iter()
                .cloned()
                .map(Value::String)
                .collect();
            defaults.insert(CONTROLLER_PATTERN_KEY.to_string(), Value::Array(patterns));
        }

        defaults.insert(ADMIN_KEY.to_string(), Value::String(admin.code().to_string()));
        defaults.insert(ACTION_KEY.to_string(), Value::String(code.to_string()));

        let full_path = format!("{}{path}", admin.prefix().unwrap_or_default());
        let route = Route::new(&full_path)
            .defaults(defaults)
            .requirements(requirements)
            .options(route_options)
            .host(host)
            .schemes(schemes)
            .methods(methods)
            .condition(condition);

        tracing::trace!(admin = admin.code(), action = code, path = route.path(), "built action");

        Ok(Self {
            code: code.to_string(),
            admin_code: admin.code().to_string(),
            options,
            form_type,
            admin_form_type: admin.form_type().map(String::from),
            form_options,
            template,
            base_template,
            route,
        })
    }

    /// Returns the route name: `sidus_admin.<admin>.<action>`.
    pub fn route_name(&self) -> String {
        format!("{ROUTE_NAMESPACE}.{}.{}", self.admin_code, self.code)
    }

    /// Returns the action code.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the code of the owning admin.
    pub fn admin_code(&self) -> &str {
        &self.admin_code
    }

    /// Returns the route built for this action.
    pub const fn route(&self) -> &Route {
        &self.route
    }

    /// Returns the action's own options. These are not merged with the admin
    /// options.
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

    /// Returns the form type, falling back to the admin form type when this
    /// action has none (or an empty one).
    pub fn form_type(&self) -> Option<&str> {
        self.form_type
            .as_deref()
            .filter(|form_type| !form_type.is_empty())
            .or(self.admin_form_type.as_deref())
    }

    /// Returns the form options.
    pub const fn form_options(&self) -> &Parameters {
        &self.form_options
    }

    /// Returns the explicit template, if any.
    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Returns the base template (inherited from the admin when not set).
    pub fn base_template(&self) -> Option<&str> {
        self.base_template.as_deref()
    }
}

/// Returns whether a configured value counts as set. `null`, `false`, `0`,
/// empty strings, `"0"` and empty collections count as unset.
pub(crate) fn is_set(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty() && s != "0",
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidus_admin_core::AdminConfig;

    fn admin_with_pattern() -> Admin {
        Admin::new(
            "product",
            AdminConfig::new()
                .prefix("/products")
                .form_type("ProductType")
                .controller_pattern(vec!["{{Admin}}Controller::{{action}}Action"]),
        )
        .unwrap()
    }

    fn admin_without_pattern() -> Admin {
        Admin::new("product", AdminConfig::new().prefix("/products")).unwrap()
    }

    #[test]
    fn test_route_name() {
        let action = Action::new("list", &admin_with_pattern(), ActionConfig::new("/list")).unwrap();
        assert_eq!(action.route_name(), "sidus_admin.product.list");
        assert_eq!(action.code(), "list");
        assert_eq!(action.admin_code(), "product");
    }

    #[test]
    fn test_path_is_prefixed() {
        let action = Action::new("list", &admin_with_pattern(), ActionConfig::new("/list")).unwrap();
        assert_eq!(action.route().path(), "/products/list");
    }

    #[test]
    fn test_path_without_prefix() {
        let admin = Admin::new(
            "user",
            AdminConfig::new().controller_pattern(vec!["UserController::{{action}}"]),
        )
        .unwrap();
        let action = Action::new("list", &admin, ActionConfig::new("/users")).unwrap();
        assert_eq!(action.route().path(), "/users");
    }

    #[test]
    fn test_controller_pattern_injected() {
        let action = Action::new("list", &admin_with_pattern(), ActionConfig::new("/list")).unwrap();
        assert_eq!(
            action.route().default_param(CONTROLLER_PATTERN_KEY),
            Some(&serde_json::json!(["{{Admin}}Controller::{{action}}Action"]))
        );
        assert!(!action.route().has_default(CONTROLLER_KEY));
    }

    #[test]
    fn test_explicit_controller_kept() {
        let config = ActionConfig::new("/list").controller("Custom::list");
        let action = Action::new("list", &admin_with_pattern(), config).unwrap();
        assert_eq!(
            action.route().default_param(CONTROLLER_KEY),
            Some(&serde_json::json!("Custom::list"))
        );
        assert!(!action.route().has_default(CONTROLLER_PATTERN_KEY));
    }

    #[test]
    fn test_explicit_controller_without_admin_pattern() {
        let config = ActionConfig::new("/list").controller("Custom::list");
        let action = Action::new("list", &admin_without_pattern(), config).unwrap();
        assert_eq!(
            action.route().default_param(CONTROLLER_KEY),
            Some(&serde_json::json!("Custom::list"))
        );
    }

    #[test]
    fn test_explicit_controller_pattern_without_admin_pattern() {
        let config = ActionConfig::new("/list")
            .default_param(CONTROLLER_PATTERN_KEY, serde_json::json!(["Own::{{action}}"]));
        let action = Action::new("list", &admin_without_pattern(), config).unwrap();
        assert_eq!(
            action.route().default_param(CONTROLLER_PATTERN_KEY),
            Some(&serde_json::json!(["Own::{{action}}"]))
        );
    }

    #[test]
    fn test_missing_controller_is_configuration_error() {
        let result = Action::new("list", &admin_without_pattern(), ActionConfig::new("/list"));
        match result {
            Err(AdminError::ConfigurationError(msg)) => {
                assert!(msg.contains("defaults._controller"));
                assert!(msg.contains("controller_pattern"));
            }
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_controller_counts_as_missing() {
        let config = ActionConfig::new("/list").controller("");
        let result = Action::new("list", &admin_without_pattern(), config);
        assert!(matches!(result, Err(AdminError::ConfigurationError(_))));

        let config = ActionConfig::new("/list").controller("");
        let action = Action::new("list", &admin_with_pattern(), config).unwrap();
        assert!(action.route().has_default(CONTROLLER_PATTERN_KEY));
    }

    #[test]
    fn test_admin_and_action_defaults_overwritten() {
        let config = ActionConfig::new("/list")
            .default_param(ADMIN_KEY, serde_json::json!("spoofed"))
            .default_param(ACTION_KEY, serde_json::json!("other"))
            .default_param("page", serde_json::json!(1));
        let action = Action::new("list", &admin_with_pattern(), config).unwrap();
        let route = action.route();
        assert_eq!(route.default_param(ADMIN_KEY), Some(&serde_json::json!("product")));
        assert_eq!(route.default_param(ACTION_KEY), Some(&serde_json::json!("list")));
        assert_eq!(route.default_param("page"), Some(&serde_json::json!(1)));
    }

    #[test]
    fn test_route_fields_copied() {
        let config = ActionConfig::new("/{id}/edit")
            .requirement("id", "\\d+")
            .route_option("expose", serde_json::json!(true))
            .host("admin.example.com")
            .schemes(vec!["https"])
            .methods(vec!["GET", "POST"])
            .condition("request.isXmlHttpRequest()");
        let action = Action::new("edit", &admin_with_pattern(), config).unwrap();
        let route = action.route();
        assert_eq!(route.path(), "/products/{id}/edit");
        assert_eq!(route.requirement_for("id"), Some("\\d+"));
        assert_eq!(route.option("expose"), Some(&serde_json::json!(true)));
        assert_eq!(route.get_host(), "admin.example.com");
        assert_eq!(route.get_schemes(), ["https"]);
        assert_eq!(route.get_methods(), ["GET", "POST"]);
        assert_eq!(route.get_condition(), "request.isXmlHttpRequest()");
    }

    #[test]
    fn test_action_options_not_route_options() {
        let config = ActionConfig::new("/list")
            .option("limit", serde_json::json!(20))
            .route_option("expose", serde_json::json!(true));
        let action = Action::new("list", &admin_with_pattern(), config).unwrap();
        assert!(action.has_option("limit"));
        assert!(!action.has_option("expose"));
        assert!(action.route().option("limit").is_none());
    }

    #[test]
    fn test_option_with_default() {
        let config = ActionConfig::new("/list")
            .option("limit", serde_json::json!(20))
            .option("nullable", Value::Null);
        let action = Action::new("list", &admin_with_pattern(), config).unwrap();
        let fallback = serde_json::json!(50);
        assert_eq!(action.option("limit", Some(&fallback)), Some(&serde_json::json!(20)));
        assert_eq!(action.option("missing", Some(&fallback)), Some(&fallback));
        assert_eq!(action.option("missing", None), None);
        assert!(action.has_option("nullable"));
        assert_eq!(action.option("nullable", Some(&fallback)), Some(&Value::Null));
    }

    #[test]
    fn test_form_type_fallback() {
        let admin = admin_with_pattern();
        let inherited = Action::new("list", &admin, ActionConfig::new("/list")).unwrap();
        assert_eq!(inherited.form_type(), Some("ProductType"));

        let empty = Action::new("edit", &admin, ActionConfig::new("/edit").form_type("")).unwrap();
        assert_eq!(empty.form_type(), Some("ProductType"));

        let own = Action::new("create", &admin, ActionConfig::new("/new").form_type("CreateType"))
            .unwrap();
        assert_eq!(own.form_type(), Some("CreateType"));
    }

    #[test]
    fn test_form_type_absent_everywhere() {
        let admin = Admin::new(
            "user",
            AdminConfig::new().controller_pattern(vec!["UserController::{{action}}"]),
        )
        .unwrap();
        let action = Action::new("list", &admin, ActionConfig::new("/list")).unwrap();
        assert_eq!(action.form_type(), None);
    }

    #[test]
    fn test_templates_and_form_options() {
        let config = ActionConfig::new("/list")
            .template("product/list.html.twig")
            .base_template("product/base.html.twig")
            .form_option("validation_groups", serde_json::json!(["Default"]));
        let action = Action::new("list", &admin_with_pattern(), config).unwrap();
        assert_eq!(action.template(), Some("product/list.html.twig"));
        assert_eq!(action.base_template(), Some("product/base.html.twig"));
        assert_eq!(
            action.form_options().get("validation_groups"),
            Some(&serde_json::json!(["Default"]))
        );
    }

    #[test]
    fn test_is_set() {
        assert!(!is_set(&Value::Null));
        assert!(!is_set(&serde_json::json!("")));
        assert!(!is_set(&serde_json::json!("0")));
        assert!(!is_set(&serde_json::json!([])));
        assert!(!is_set(&serde_json::json!({})));
        assert!(!is_set(&serde_json::json!(0)));
        assert!(!is_set(&serde_json::json!(false)));
        assert!(is_set(&serde_json::json!("Controller::list")));
        assert!(is_set(&serde_json::json!(["a"])));
    }
}
