//! Logging integration for sidus-admin.
//!
//! Provides helpers for configuring [`tracing`]-based logging from
//! [`Settings`](crate::settings::Settings) and for creating spans that tag log
//! entries with the admin and action being served.

use crate::settings::Settings;

/// Sets up the global tracing subscriber based on the given settings.
///
/// The filter is read from `settings.log_level` (e.g. "debug", "info",
/// "sidus_admin=trace"). In debug mode a pretty, human-readable format is used;
/// otherwise a structured JSON format is used. Installing a second subscriber is
/// a no-op.
pub fn setup_logging(settings: &Settings) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(&settings.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.debug {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for work done on behalf of an admin action.
///
/// Either side may be unknown yet, in which case the field is recorded as
/// empty.
///
/// # Examples
///
/// ```
/// use sidus_admin_core::logging::admin_span;
///
/// let span = admin_span(Some("product"), Some("list"));
/// let _guard = span.enter();
/// tracing::info!("rendering list");
/// ```
pub fn admin_span(admin: Option<&str>, action: Option<&str>) -> tracing::Span {
    tracing::info_span!(
        "admin_request",
        admin = admin.unwrap_or_default(),
        action = action.unwrap_or_default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_twice_does_not_panic() {
        let settings = Settings::default();
        setup_logging(&settings);
        setup_logging(&settings);
    }

    #[test]
    fn test_admin_span_enter() {
        let span = admin_span(Some("product"), None);
        let _guard = span.enter();
        tracing::debug!("inside span");
    }
}
