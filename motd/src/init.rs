//! Tracing setup for the binary
//!
//! stdout carries the report, so every log line goes to stderr.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Build the event filter from a `RUST_LOG` value
///
/// Without directives only warnings from `crate_name` pass, so a normal
/// login prints nothing but the report. Any non-blank value replaces that
/// default entirely; invalid directives in it are skipped.
pub fn env_filter(crate_name: &str, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => EnvFilter::new(format!("{crate_name}=warn")),
    }
}

/// Install a stderr subscriber filtered by `RUST_LOG`
///
/// Output is plain text without ANSI colors; `LOG_FORMAT=json` switches to
/// JSON lines.
pub fn init_tracing(crate_name: &str) -> anyhow::Result<()> {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = env_filter(crate_name, rust_log.as_deref());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}
