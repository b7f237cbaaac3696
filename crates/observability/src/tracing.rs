//! Tracing/logging initialization.

use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LogFormat {
    /// One JSON object per line (server default).
    Json,
    /// Human-readable lines (interactive clients).
    Pretty,
}

impl LogFormat {
    /// Read `DCCLINK_LOG_FORMAT` (`json` or `pretty`), falling back to `default`.
    pub fn from_env_or(default: LogFormat) -> LogFormat {
        Self::parse_or(std::env::var("DCCLINK_LOG_FORMAT").ok().as_deref(), default)
    }

    /// Unknown or missing values fall back to `default`.
    pub fn parse_or(value: Option<&str>, default: LogFormat) -> LogFormat {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            Some(v) if v.eq_ignore_ascii_case("pretty") => LogFormat::Pretty,
            _ => default,
        }
    }
}

/// Initialize tracing/logging for the process.
///
/// Filter comes from `RUST_LOG` (default `info`). Logs go to stderr so that
/// interactive front ends keep stdout for their own output.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = match format {
        LogFormat::Json => builder
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .try_init(),
        LogFormat::Pretty => builder.compact().try_init(),
    };
}
