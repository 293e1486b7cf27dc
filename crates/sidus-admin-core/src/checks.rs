//! Configuration check framework.
//!
//! Checks inspect a fully built configuration and report problems that do not
//! prevent construction but are likely mistakes (duplicate route names,
//! unreachable routes, invalid requirements).
//!
//! - [`CheckMessage`]: A diagnostic message (level, message, hint, object, id).
//! - [`CheckLevel`]: Severity level (Debug, Info, Warning, Error, Critical).
//! - [`CheckRegistry`]: Registry of check functions with tag-based filtering,
//!   generic over the value being checked.
//!
//! ## Examples
//!
//! ```
//! use sidus_admin_core::checks::{CheckMessage, CheckRegistry};
//! use sidus_admin_core::settings::Settings;
//!
//! let mut registry: CheckRegistry<Settings> = CheckRegistry::new();
//! registry.register(
//!     |settings| {
//!         if settings.configurations.is_empty() {
//!             vec![CheckMessage::info("No admin configured", None, None, Some("admin.I000"))]
//!         } else {
//!             Vec::new()
//!         }
//!     },
//!     &["admin"],
//! );
//!
//! let messages = registry.run_checks(None, &Settings::default());
//! assert_eq!(messages.len(), 1);
//! ```

use std::str::FromStr;

use crate::error::AdminError;

/// Severity level for a check message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CheckLevel {
    /// Debugging information.
    Debug = 0,
    /// Informational message.
    Info = 1,
    /// A potential problem.
    Warning = 2,
    /// A definite problem that should be fixed.
    Error = 3,
    /// A problem that prevents the admin from working at all.
    Critical = 4,
}

impl std::fmt::Display for CheckLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Debug => write!(f, "DEBUG"),
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

impl FromStr for CheckLevel {
    type Err = AdminError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "critical" => Ok(Self::Critical),
            other => Err(AdminError::ConfigurationError(format!(
                "Unknown check level: '{other}'"
            ))),
        }
    }
}

/// A diagnostic message produced by a check.
#[derive(Debug, Clone)]
pub struct CheckMessage {
    /// The severity level.
    pub level: CheckLevel,
    /// The human-readable message describing the issue.
    pub msg: String,
    /// An optional hint on how to fix the issue.
    pub hint: Option<String>,
    /// The object (admin, action, route) that has the issue.
    pub obj: Option<String>,
    /// A unique identifier for this check message (e.g. "routing.E001").
    pub id: Option<String>,
}

impl CheckMessage {
    /// Creates a new `CheckMessage` with the given level and details.
    pub fn new(
        level: CheckLevel,
        msg: impl Into<String>,
        hint: Option<&str>,
        obj: Option<&str>,
        id: Option<&str>,
    ) -> Self {
        Self {
            level,
            msg: msg.into(),
            hint: hint.map(String::from),
            obj: obj.map(String::from),
            id: id.map(String::from),
        }
    }

    /// Creates an info-level message.
    pub fn info(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Info, msg, hint, obj, id)
    }

    /// Creates a warning-level message.
    pub fn warning(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Warning, msg, hint, obj, id)
    }

    /// Creates an error-level message.
    pub fn error(msg: impl Into<String>, hint: Option<&str>, obj: Option<&str>, id: Option<&str>) -> Self {
        Self::new(CheckLevel::Error, msg, hint, obj, id)
    }

    /// Returns `true` if this is a warning or higher severity.
    pub fn is_serious(&self) -> bool {
        self.level >= CheckLevel::Warning
    }
}

impl std::fmt::Display for CheckMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref id) = self.id {
            write!(f, "({id}) ")?;
        }
        write!(f, "{}: {}", self.level, self.msg)?;
        if let Some(ref hint) = self.hint {
            write!(f, "\n\tHINT: {hint}")?;
        }
        if let Some(ref obj) = self.obj {
            write!(f, "\n\tObject: {obj}")?;
        }
        Ok(())
    }
}

/// A check function inspecting a value of type `T`.
pub type CheckFn<T> = fn(&T) -> Vec<CheckMessage>;

struct RegisteredCheck<T> {
    func: CheckFn<T>,
    tags: Vec<String>,
}

/// Registry of check functions over values of type `T`.
pub struct CheckRegistry<T> {
    checks: Vec<RegisteredCheck<T>>,
}

impl<T> CheckRegistry<T> {
    /// Creates a new empty check registry.
    pub const fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Registers a check function with the given tags.
    pub fn register(&mut self, func: CheckFn<T>, tags: &[&str]) {
        self.checks.push(RegisteredCheck {
            func,
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
        });
    }

    /// Runs all registered checks (or only those matching one of `tags`) and
    /// collects every resulting message in registration order.
    pub fn run_checks(&self, tags: Option<&[&str]>, target: &T) -> Vec<CheckMessage> {
        let mut messages = Vec::new();

        for check in &self.checks {
            let should_run = tags.map_or(true, |filter_tags| {
                filter_tags.iter().any(|t| check.tags.iter().any(|own| own == t))
            });

            if should_run {
                messages.extend((check.func)(target));
            }
        }

        messages
    }

    /// Returns the number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Returns `true` if no checks are registered.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl<T> Default for CheckRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}
