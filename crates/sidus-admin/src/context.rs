//! Request-scoped admin context.
//!
//! The registry is shared and read-only once built. Which admin and action a
//! request is working on is tracked by a [`RequestContext`] created for that
//! request and dropped with it.

use serde_json::Value;
use sidus_admin_core::logging::admin_span;
use sidus_admin_core::{AdminError, AdminResult, Parameters};

use crate::action::{Action, ACTION_KEY, ADMIN_KEY};
use crate::admin::Admin;
use crate::registry::AdminRegistry;

/// An action given either directly or by code.
///
/// A code only needs to live as long as the lookup; an action reference must
/// live as long as the registry borrow.
#[derive(Debug, Clone, Copy)]
pub enum ActionRef<'r, 'c> {
    /// The action itself.
    Action(&'r Action),
    /// An action code, resolved against the current admin.
    Code(&'c str),
}

impl<'r, 'c> From<&'r Action> for ActionRef<'r, 'c> {
    fn from(action: &'r Action) -> Self {
        Self::Action(action)
    }
}

impl<'r, 'c> From<&'c str> for ActionRef<'r, 'c> {
    fn from(code: &'c str) -> Self {
        Self::Code(code)
    }
}

impl<'r, 'c> From<&'c String> for ActionRef<'r, 'c> {
    fn from(code: &'c String) -> Self {
        Self::Code(code)
    }
}

/// The current admin and action of one request.
///
/// # Examples
///
/// ```
/// use sidus_admin::{Admin, AdminRegistry, RequestContext};
/// use sidus_admin_core::config::{ActionConfig, AdminConfig};
///
/// let mut registry = AdminRegistry::new();
/// registry.add_admin(
///     Admin::new(
///         "product",
///         AdminConfig::new()
///             .controller_pattern(vec!["ProductController::{{action}}"])
///             .action("list", ActionConfig::new("/products")),
///     )
///     .unwrap(),
/// );
///
/// let mut context = RequestContext::new(&registry);
/// context.select_admin("product").unwrap();
/// context.set_current_action("list").unwrap();
/// assert_eq!(context.current_action().unwrap().route_name(), "sidus_admin.product.list");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequestContext<'r> {
    registry: &'r AdminRegistry,
    current_admin: Option<&'r Admin>,
    current_action: Option<&'r Action>,
}

impl<'r> RequestContext<'r> {
    /// Creates a context with no current admin or action.
    pub const fn new(registry: &'r AdminRegistry) -> Self {
        Self {
            registry,
            current_admin: None,
            current_action: None,
        }
    }

    /// Creates a context from the defaults of a matched route.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the defaults do not carry `_admin`/`_action`
    /// strings, or if they name an unknown admin or action.
    pub fn from_route_defaults(registry: &'r AdminRegistry, defaults: &Parameters) -> AdminResult<Self> {
        let admin_code = string_default(defaults, ADMIN_KEY)?;
        let action_code = string_default(defaults, ACTION_KEY)?;

        let mut context = Self::new(registry);
        context.select_admin(admin_code)?;
        context.set_current_action(action_code)?;
        Ok(context)
    }

    /// Returns the shared registry.
    pub const fn registry(&self) -> &'r AdminRegistry {
        self.registry
    }

    /// Returns the current admin.
    pub const fn current_admin(&self) -> Option<&'r Admin> {
        self.current_admin
    }

    /// Sets the current admin. The admin is not checked against the registry.
    ///
    /// Switching to an admin with a different code clears the current action.
    pub fn set_current_admin(&mut self, admin: &'r Admin) {
        if self
            .current_admin
            .is_some_and(|current| current.code() != admin.code())
        {
            self.current_action = None;
        }
        self.current_admin = Some(admin);
    }

    /// Looks up an admin in the registry and makes it current.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no admin has that code.
    pub fn select_admin(&mut self, code: &str) -> AdminResult<&'r Admin> {
        let admin = self.registry.get_admin(code)?;
        self.set_current_admin(admin);
        Ok(admin)
    }

    /// Returns the current action.
    pub const fn current_action(&self) -> Option<&'r Action> {
        self.current_action
    }

    /// Sets the current action, given directly or by code.
    ///
    /// A code is resolved through the current admin. An action owned by
    /// another admin, or given while no admin is current, makes its own admin
    /// current first, so the current action always belongs to the current
    /// admin.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if a code is given while no admin is current, if
    /// the current admin has no action with that code, or if the admin of a
    /// given action is not registered.
    pub fn set_current_action<'c, A>(&mut self, action: A) -> AdminResult<&'r Action>
    where
        A: Into<ActionRef<'r, 'c>>,
    {
        let action = match action.into() {
            ActionRef::Action(action) => {
                if !self
                    .current_admin
                    .is_some_and(|admin| admin.code() == action.admin_code())
                {
                    self.select_admin(action.admin_code())?;
                }
                action
            }
            ActionRef::Code(code) => {
                let admin = self.current_admin.ok_or_else(|| {
                    AdminError::NotFound(format!(
                        "No current admin to resolve action '{code}' against"
                    ))
                })?;
                admin.get_action(code)?
            }
        };
        self.current_action = Some(action);
        Ok(action)
    }

    /// Clears the current admin and action.
    pub fn clear(&mut self) {
        self.current_admin = None;
        self.current_action = None;
    }

    /// Returns a span tagged with the current admin and action codes.
    pub fn span(&self) -> tracing::Span {
        admin_span(
            self.current_admin.map(Admin::code),
            self.current_action.map(Action::code),
        )
    }
}

fn string_default<'a>(defaults: &'a Parameters, key: &str) -> AdminResult<&'a str> {
    defaults
        .get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| AdminError::NotFound(format!("Route defaults do not carry '{key}'")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use sidus_admin_core::{ActionConfig, AdminConfig};

    fn registry() -> AdminRegistry {
        let mut registry = AdminRegistry::new();
        for code in ["product", "category"] {
            registry.add_admin(
                Admin::new(
                    code,
                    AdminConfig::new()
                        .prefix(format!("/{code}"))
                        .controller_pattern(vec!["{{Admin}}Controller::{{action}}Action"])
                        .action("list", ActionConfig::new("/list"))
                        .action("edit", ActionConfig::new("/{id}/edit")),
                )
                .unwrap(),
            );
        }
        registry
    }

    #[test]
    fn test_new_context_is_empty() {
        let registry = registry();
        let context = RequestContext::new(&registry);
        assert!(context.current_admin().is_none());
        assert!(context.current_action().is_none());
        assert_eq!(context.registry().len(), 2);
    }

    #[test]
    fn test_set_current_admin_without_validation() {
        let registry = registry();
        let outsider = Admin::new("outsider", AdminConfig::new()).unwrap();
        let mut context = RequestContext::new(&registry);
        context.set_current_admin(&outsider);
        assert_eq!(context.current_admin().unwrap().code(), "outsider");
    }

    #[test]
    fn test_select_admin_unknown() {
        let registry = registry();
        let mut context = RequestContext::new(&registry);
        assert!(matches!(context.select_admin("user"), Err(AdminError::NotFound(_))));
        assert!(context.current_admin().is_none());
    }

    #[test]
    fn test_set_current_action_by_code() {
        let registry = registry();
        let mut context = RequestContext::new(&registry);
        context.select_admin("product").unwrap();
        let action = context.set_current_action("edit").unwrap();
        assert_eq!(action.route_name(), "sidus_admin.product.edit");
        assert_eq!(context.current_action().unwrap().code(), "edit");
    }

    #[test]
    fn test_set_current_action_by_instance() {
        let registry = registry();
        let action = registry
            .get_admin("category")
            .unwrap()
            .get_action("list")
            .unwrap();
        let mut context = RequestContext::new(&registry);
        context.set_current_action(action).unwrap();
        assert_eq!(context.current_action().unwrap().admin_code(), "category");
        assert_eq!(context.current_admin().unwrap().code(), "category");
    }

    #[test]
    fn test_set_current_action_of_other_admin_switches_admin() {
        let registry = registry();
        let mut context = RequestContext::new(&registry);
        context.select_admin("product").unwrap();
        context.set_current_action("edit").unwrap();

        let list = registry
            .get_admin("category")
            .unwrap()
            .get_action("list")
            .unwrap();
        context.set_current_action(list).unwrap();
        assert_eq!(context.current_admin().unwrap().code(), "category");
        assert_eq!(context.current_action().unwrap().admin_code(), "category");

        // Re-selecting the former admin drops the category action.
        context.select_admin("product").unwrap();
        assert!(context.current_action().is_none());
    }

    #[test]
    fn test_set_current_action_of_unregistered_admin() {
        let registry = registry();
        let outsider = Admin::new(
            "outsider",
            AdminConfig::new()
                .controller_pattern(vec!["OutsiderController::{{action}}"])
                .action("list", ActionConfig::new("/outsider")),
        )
        .unwrap();
        let mut context = RequestContext::new(&registry);
        context.select_admin("product").unwrap();
        context.set_current_action("list").unwrap();

        let result = context.set_current_action(outsider.get_action("list").unwrap());
        assert!(matches!(result, Err(AdminError::NotFound(_))));
        assert_eq!(context.current_admin().unwrap().code(), "product");
        assert_eq!(context.current_action().unwrap().admin_code(), "product");
    }

    #[test]
    fn test_set_current_action_unknown_code() {
        let registry = registry();
        let mut context = RequestContext::new(&registry);
        context.select_admin("product").unwrap();
        context.set_current_action("list").unwrap();
        let result = context.set_current_action("delete");
        assert!(matches!(result, Err(AdminError::NotFound(_))));
        // The previous action is kept.
        assert_eq!(context.current_action().unwrap().code(), "list");
    }

    #[test]
    fn test_set_current_action_without_admin() {
        let registry = registry();
        let mut context = RequestContext::new(&registry);
        assert!(matches!(
            context.set_current_action("list"),
            Err(AdminError::NotFound(_))
        ));
    }

    #[test]
    fn test_switching_admin_clears_action() {
        let registry = registry();
        let mut context = RequestContext::new(&registry);
        context.select_admin("product").unwrap();
        context.set_current_action("list").unwrap();

        context.select_admin("product").unwrap();
        assert!(context.current_action().is_some());

        context.select_admin("category").unwrap();
        assert!(context.current_action().is_none());
    }

    #[test]
    fn test_from_route_defaults() {
        let registry = registry();
        let route = registry
            .get_admin("category")
            .unwrap()
            .get_action("edit")
            .unwrap()
            .route()
            .clone();
        let context = RequestContext::from_route_defaults(&registry, route.get_defaults()).unwrap();
        assert_eq!(context.current_admin().unwrap().code(), "category");
        assert_eq!(context.current_action().unwrap().code(), "edit");
    }

    #[test]
    fn test_from_route_defaults_missing_keys() {
        let registry = registry();
        let mut defaults = Parameters::new();
        defaults.insert("_admin".into(), json!("product"));
        let result = RequestContext::from_route_defaults(&registry, &defaults);
        assert!(matches!(result, Err(AdminError::NotFound(_))));
    }

    #[test]
    fn test_contexts_are_independent() {
        let registry = registry();
        let mut first = RequestContext::new(&registry);
        let mut second = RequestContext::new(&registry);
        first.select_admin("product").unwrap();
        second.select_admin("category").unwrap();
        assert_eq!(first.current_admin().unwrap().code(), "product");
        assert_eq!(second.current_admin().unwrap().code(), "category");
    }

    #[test]
    fn test_clear_and_span() {
        let registry = registry();
        let mut context = RequestContext::new(&registry);
        context.select_admin("product").unwrap();
        {
            let span = context.span();
            let _guard = span.enter();
            tracing::debug!("handling request");
        }
        context.clear();
        assert!(context.current_admin().is_none());
    }
}
