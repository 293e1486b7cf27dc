//! Bundle-level settings.
//!
//! [`Settings`] holds the logging configuration, the defaults applied to every
//! admin, and the ordered map of admin configurations. It is usually loaded
//! through [`settings_loader`](crate::settings_loader).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::config::AdminConfig;

/// The name of the action factory used when nothing else is configured.
pub const DEFAULT_ACTION_CLASS: &str = "default";

/// The complete set of bundle settings.
///
/// # Examples
///
/// ```
/// use sidus_admin_core::settings::Settings;
///
/// let settings = Settings::default();
/// assert!(settings.debug);
/// assert_eq!(settings.action_class, "default");
/// assert!(settings.configurations.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    // ── Logging ──────────────────────────────────────────────────────

    /// Whether debug mode is enabled (pretty logs instead of JSON).
    pub debug: bool,
    /// The log filter directive (e.g. "info", "sidus_admin=debug").
    pub log_level: String,

    // ── Admin defaults ───────────────────────────────────────────────

    /// Action factory used by admins that do not set `action_class`.
    pub action_class: String,
    /// Base template used by admins that do not set `base_template`.
    pub base_template: Option<String>,

    // ── Admins ───────────────────────────────────────────────────────

    /// Admin configurations keyed by admin code, in declaration order.
    pub configurations: IndexMap<String, AdminConfig>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug: true,
            log_level: "info".to_string(),
            action_class: DEFAULT_ACTION_CLASS.to_string(),
            base_template: None,
            configurations: IndexMap::new(),
        }
    }
}

impl Settings {
    /// Returns the factory name for an admin configuration, falling back to
    /// [`Self::action_class`].
    pub fn action_class_for<'a>(&'a self, config: &'a AdminConfig) -> &'a str {
        config
            .action_class
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.action_class)
    }

    /// Returns a copy of an admin configuration with the bundle-level base
    /// template applied when the admin does not set one.
    pub fn resolve_admin_config(&self, config: &AdminConfig) -> AdminConfig {
        let mut resolved = config.clone();
        if resolved.base_template.is_none() {
            resolved.base_template.clone_from(&self.base_template);
        }
        resolved
    }
}
