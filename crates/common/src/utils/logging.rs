use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,axum=info";

/// Output flavour for the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Json,
}

impl LogFormat {
    /// Read `LOG_FORMAT` (`json` selects JSON, anything else compact text).
    pub fn from_env() -> Self {
        Self::parse(std::env::var("LOG_FORMAT").ok().as_deref())
    }

    fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize tracing subscriber with sensible defaults and stdout writer.
/// - Respects `RUST_LOG` if set
/// - Falls back to `info,tower_http=info,axum=info`
/// - Writes to stdout to improve visibility in environments that hide stderr
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// Initialize tracing subscriber with JSON structured output.
/// Same filter rules as [`init_logging_default`].
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// Pick the subscriber flavour from `LOG_FORMAT`.
/// Calling this more than once is harmless; later calls are no-ops.
pub fn init_logging_from_env() {
    match LogFormat::from_env() {
        LogFormat::Json => init_logging_json(),
        LogFormat::Compact => init_logging_default(),
    }
}
