//! Action factories.
//!
//! An [`ActionFactory`] turns one action configuration into an [`Action`] for
//! a given admin. Factories are passed to
//! [`Admin::with_factory`](crate::admin::Admin::with_factory) explicitly, or
//! looked up by name in an [`ActionFactories`] registry when admins are built
//! from settings (the `action_class` key).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sidus_admin::{Action, ActionFactories, Admin};
//! use sidus_admin_core::config::ActionConfig;
//!
//! let mut factories = ActionFactories::new();
//! factories.register(
//!     "read_only",
//!     Arc::new(|code: &str, admin: &Admin, config: ActionConfig| {
//!         Action::new(code, admin, config.methods(vec!["GET"]))
//!     }),
//! );
//!
//! assert_eq!(factories.names(), vec!["default", "read_only"]);
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use sidus_admin_core::settings::DEFAULT_ACTION_CLASS;
use sidus_admin_core::{ActionConfig, AdminError, AdminResult};

use crate::action::Action;
use crate::admin::Admin;

/// Builds actions for an admin.
pub trait ActionFactory: Send + Sync {
    /// Creates the action `code` of `admin` from its configuration.
    ///
    /// `admin` is fully configured except for its actions.
    fn create(&self, code: &str, admin: &Admin, config: ActionConfig) -> AdminResult<Action>;
}

impl<F> ActionFactory for F
where
    F: Fn(&str, &Admin, ActionConfig) -> AdminResult<Action> + Send + Sync,
{
    fn create(&self, code: &str, admin: &Admin, config: ActionConfig) -> AdminResult<Action> {
        self(code, admin, config)
    }
}

/// Builds plain [`Action`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultActionFactory;

impl ActionFactory for DefaultActionFactory {
    fn create(&self, code: &str, admin: &Admin, config: ActionConfig) -> AdminResult<Action> {
        Action::new(code, admin, config)
    }
}

/// Named action factories, resolved before admins are built.
///
/// The [`DefaultActionFactory`] is registered as `"default"`. Registering a
/// factory under an existing name replaces it.
pub struct ActionFactories {
    factories: HashMap<String, Arc<dyn ActionFactory>>,
}

impl Default for ActionFactories {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionFactories {
    /// Creates a registry holding only the default factory.
    pub fn new() -> Self {
        let mut factories = Self::empty();
        factories.register(DEFAULT_ACTION_CLASS, Arc::new(DefaultActionFactory));
        factories
    }

    /// Creates a registry with no factory at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers a factory under a name.
    pub fn register(&mut self, name: impl Into<String>, factory: Arc<dyn ActionFactory>) {
        self.factories.insert(name.into(), factory);
    }

    /// Returns the factory registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no factory has that name.
    pub fn get(&self, name: &str) -> AdminResult<&dyn ActionFactory> {
        self.factories
            .get(name)
            .map(AsRef::as_ref)
            .ok_or_else(|| AdminError::NotFound(format!("No action factory named: '{name}'")))
    }

    /// Returns whether a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl std::fmt::Debug for ActionFactories {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionFactories")
            .field("factories", &self.names())
            .finish()
    }
}
