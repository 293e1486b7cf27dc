//! The admin registry.
//!
//! [`AdminRegistry`] maps admin codes to [`Admin`]s. It is populated once at
//! startup (usually through [`build_registry`]) and only read afterwards; the
//! current admin of a request lives in a
//! [`RequestContext`](crate::context::RequestContext) instead.

use indexmap::IndexMap;
use sidus_admin_core::{AdminError, AdminResult, Settings};

use crate::admin::Admin;
use crate::factory::ActionFactories;

/// Lookup table from admin code to admin, in registration order.
///
/// # Examples
///
/// ```
/// use sidus_admin::{Admin, AdminRegistry};
/// use sidus_admin_core::config::AdminConfig;
///
/// let mut registry = AdminRegistry::new();
/// registry.add_admin(Admin::new("product", AdminConfig::new()).unwrap());
///
/// assert!(registry.has_admin("product"));
/// assert!(registry.get_admin("category").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdminRegistry {
    admins: IndexMap<String, Admin>,
}

impl AdminRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an admin under its code.
    ///
    /// An admin already registered under the same code is replaced and the
    /// replacement keeps the original position.
    pub fn add_admin(&mut self, admin: Admin) {
        let code = admin.code().to_string();
        if self.admins.insert(code.clone(), admin).is_some() {
            tracing::debug!(admin = %code, "replaced previously registered admin");
        } else {
            tracing::debug!(admin = %code, "registered admin");
        }
    }

    /// Returns every admin keyed by code, in registration order.
    pub const fn admins(&self) -> &IndexMap<String, Admin> {
        &self.admins
    }

    /// Returns the admin with the given code.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no admin has that code.
    pub fn get_admin(&self, code: &str) -> AdminResult<&Admin> {
        self.admins
            .get(code)
            .ok_or_else(|| AdminError::NotFound(format!("No admin with code: '{code}'")))
    }

    /// Returns whether an admin is registered under `code`.
    pub fn has_admin(&self, code: &str) -> bool {
        self.admins.contains_key(code)
    }

    /// Returns the registered codes in order.
    pub fn codes(&self) -> Vec<&str> {
        self.admins.keys().map(String::as_str).collect()
    }

    /// Returns the number of registered admins.
    pub fn len(&self) -> usize {
        self.admins.len()
    }

    /// Returns `true` if no admin is registered.
    pub fn is_empty(&self) -> bool {
        self.admins.is_empty()
    }
}

/// Builds every admin configured in `settings`, in declaration order.
///
/// Each admin uses the factory named by its `action_class`, or the settings'
/// default `action_class`. Admins without a base template inherit the
/// settings' one.
///
/// # Errors
///
/// Returns `ConfigurationError` for an unknown factory name, and any error
/// raised while building an admin.
pub fn build_registry(settings: &Settings, factories: &ActionFactories) -> AdminResult<AdminRegistry> {
    let mut registry = AdminRegistry::new();

    for (code, config) in &settings.configurations {
        let factory_name = settings.action_class_for(config);
        let factory = factories.get(factory_name).map_err(|_| {
            AdminError::ConfigurationError(format!(
                "Unknown action_class '{factory_name}' for admin '{code}'"
            ))
        })?;
        let admin = Admin::with_factory(code, settings.resolve_admin_config(config), factory)?;
        registry.add_admin(admin);
    }

    tracing::info!(admins = registry.len(), "admin registry built");
    Ok(registry)
}
