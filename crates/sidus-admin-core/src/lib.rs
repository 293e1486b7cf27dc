//! # sidus-admin-core
//!
//! Core types shared by the sidus-admin crates. This crate knows nothing about
//! admins or routes as runtime objects; it only provides the foundation they are
//! built on.
//!
//! ## Modules
//!
//! - [`error`] - Error type and result alias
//! - [`config`] - Raw admin and action configuration records
//! - [`settings`] - Bundle-level settings holding every admin configuration
//! - [`settings_loader`] - Loading settings from TOML/JSON files and the environment
//! - [`logging`] - Tracing-based logging integration
//! - [`checks`] - Diagnostic messages produced by configuration checks

pub mod checks;
pub mod config;
pub mod error;
pub mod logging;
pub mod settings;
pub mod settings_loader;

// Re-export the most commonly used types at the crate root.
pub use config::{ActionConfig, AdminConfig, Parameters};
pub use error::{AdminError, AdminResult};
pub use settings::Settings;
