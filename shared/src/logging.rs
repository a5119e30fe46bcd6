//! Shared logging utilities for consistent tracing setup

use tracing_subscriber::{fmt, EnvFilter};

/// Initialize the tracing subscriber for a component.
///
/// `RUST_LOG` takes precedence when set; otherwise the component and the
/// shared crate log at `log_level` (default "info") and the HTTP stack is
/// kept quiet at `warn`.
pub fn init_tracing(component: &str, log_level: Option<&str>) {
    let base_level = log_level.unwrap_or("info");

    let default_filter =
        format!("{component}={base_level},shared={base_level},tower=warn,hyper=warn,axum={base_level}");

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();
}
