//! Settings loading from configuration files.
//!
//! This module loads [`Settings`] from TOML or JSON files and applies
//! environment variable overrides.
//!
//! ## Loading Order
//!
//! 1. Start with default settings.
//! 2. Load from a TOML or JSON file (deep-merged over the defaults).
//! 3. Apply environment variable overrides (highest priority).
//!
//! Key order is preserved, so admins and actions keep the order in which they
//! are declared in the file.
//!
//! ## Environment Variable Mapping
//!
//! | Env Var | Setting |
//! |---|---|
//! | `SIDUS_ADMIN_DEBUG` | `debug` |
//! | `SIDUS_ADMIN_LOG_LEVEL` | `log_level` |
//! | `SIDUS_ADMIN_ACTION_CLASS` | `action_class` |
//! | `SIDUS_ADMIN_BASE_TEMPLATE` | `base_template` |
//!
//! ## Examples
//!
//! ```
//! use sidus_admin_core::settings_loader;
//!
//! let settings = settings_loader::from_toml_str(r#"
//!     [configurations.product]
//!     prefix = "/products"
//!     controller_pattern = ["{{Admin}}Controller::{{action}}Action"]
//!
//!     [configurations.product.actions.list]
//!     path = "/list"
//! "#).unwrap();
//!
//! let product = settings.configurations.get("product").unwrap();
//! assert_eq!(product.prefix.as_deref(), Some("/products"));
//! ```

use std::path::Path;

use crate::error::AdminError;
use crate::settings::Settings;

/// Loads settings from a TOML string.
///
/// # Errors
///
/// Returns a `ConfigurationError` if the TOML is malformed or does not match
/// the settings schema.
pub fn from_toml_str(toml_str: &str) -> Result<Settings, AdminError> {
    let toml_value: toml::Value = toml::from_str(toml_str)
        .map_err(|e| AdminError::ConfigurationError(format!("Failed to parse TOML: {e}")))?;

    merge_into_defaults(toml_to_json(toml_value), "TOML")
}

/// Loads settings from a TOML file.
pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Settings, AdminError> {
    from_toml_str(&read_config_file(path.as_ref(), "TOML")?)
}

/// Loads settings from a TOML file and then applies environment variable overrides.
pub fn from_toml_file_with_env(path: impl AsRef<Path>) -> Result<Settings, AdminError> {
    let mut settings = from_toml_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a JSON string.
///
/// # Errors
///
/// Returns a `ConfigurationError` if the JSON is malformed or does not match
/// the settings schema.
pub fn from_json_str(json_str: &str) -> Result<Settings, AdminError> {
    let json_value: serde_json::Value = serde_json::from_str(json_str)
        .map_err(|e| AdminError::ConfigurationError(format!("Failed to parse JSON: {e}")))?;

    merge_into_defaults(json_value, "JSON")
}

/// Loads settings from a JSON file.
pub fn from_json_file(path: impl AsRef<Path>) -> Result<Settings, AdminError> {
    from_json_str(&read_config_file(path.as_ref(), "JSON")?)
}

/// Loads settings from a JSON file and then applies environment variable overrides.
pub fn from_json_file_with_env(path: impl AsRef<Path>) -> Result<Settings, AdminError> {
    let mut settings = from_json_file(path)?;
    apply_env_overrides(&mut settings);
    Ok(settings)
}

/// Loads settings from a file, picking the format from its extension.
///
/// `.json` files are read as JSON, everything else as TOML. Environment
/// overrides are applied afterwards.
pub fn from_file_with_env(path: impl AsRef<Path>) -> Result<Settings, AdminError> {
    let path = path.as_ref();
    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        from_json_file_with_env(path)
    } else {
        from_toml_file_with_env(path)
    }
}

/// Loads settings from just environment variables (starting from defaults).
pub fn from_env() -> Settings {
    let mut settings = Settings::default();
    apply_env_overrides(&mut settings);
    settings
}

/// Applies environment variable overrides to a settings struct.
///
/// - `SIDUS_ADMIN_DEBUG` -> `debug` ("true"/"1"/"yes" => true, anything else => false)
/// - `SIDUS_ADMIN_LOG_LEVEL` -> `log_level`
/// - `SIDUS_ADMIN_ACTION_CLASS` -> `action_class`
/// - `SIDUS_ADMIN_BASE_TEMPLATE` -> `base_template` (empty => unset)
pub fn apply_env_overrides(settings: &mut Settings) {
    if let Ok(val) = std::env::var("SIDUS_ADMIN_DEBUG") {
        settings.debug = matches!(val.to_lowercase().as_str(), "true" | "1" | "yes");
    }

    if let Ok(val) = std::env::var("SIDUS_ADMIN_LOG_LEVEL") {
        settings.log_level = val;
    }

    if let Ok(val) = std::env::var("SIDUS_ADMIN_ACTION_CLASS") {
        settings.action_class = val;
    }

    if let Ok(val) = std::env::var("SIDUS_ADMIN_BASE_TEMPLATE") {
        settings.base_template = if val.is_empty() { None } else { Some(val) };
    }
}

// ============================================================
// Helpers
// ============================================================

fn read_config_file(path: &Path, format: &str) -> Result<String, AdminError> {
    std::fs::read_to_string(path).map_err(|e| {
        AdminError::ConfigurationError(format!(
            "Failed to read {format} file '{}': {e}",
            path.display()
        ))
    })
}

/// Deep-merges a parsed document over the default settings and deserializes
/// the result.
fn merge_into_defaults(value: serde_json::Value, format: &str) -> Result<Settings, AdminError> {
    let default_json = serde_json::to_value(Settings::default()).map_err(|e| {
        AdminError::SerializationError(format!("Failed to serialize default settings: {e}"))
    })?;

    let merged = merge_json(default_json, value);
    serde_json::from_value(merged).map_err(|e| {
        AdminError::ConfigurationError(format!("Failed to deserialize settings from {format}: {e}"))
    })
}

/// Converts a TOML value to a `serde_json::Value`.
fn toml_to_json(value: toml::Value) -> serde_json::Value {
    match value {
        toml::Value::String(s) => serde_json::Value::String(s),
        toml::Value::Integer(i) => serde_json::json!(i),
        toml::Value::Float(f) => serde_json::json!(f),
        toml::Value::Boolean(b) => serde_json::Value::Bool(b),
        toml::Value::Datetime(dt) => serde_json::Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            serde_json::Value::Array(arr.into_iter().map(toml_to_json).collect())
        }
        toml::Value::Table(table) => {
            let map: serde_json::Map<String, serde_json::Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_json(v)))
                .collect();
            serde_json::Value::Object(map)
        }
    }
}

/// Deep-merges two JSON values. The `override_val` takes precedence.
fn merge_json(base: serde_json::Value, override_val: serde_json::Value) -> serde_json::Value {
    match (base, override_val) {
        (serde_json::Value::Object(mut base_map), serde_json::Value::Object(override_map)) => {
            for (key, override_v) in override_map {
                // Merge in place so existing keys keep their position.
                if let Some(base_v) = base_map.get_mut(&key) {
                    let previous = std::mem::take(base_v);
                    *base_v = merge_json(previous, override_v);
                } else {
                    base_map.insert(key, override_v);
                }
            }
            serde_json::Value::Object(base_map)
        }
        (_, override_val) => override_val,
    }
}
