//! Tracing and logging setup shared by the server and the clients.

/// Initialize process-wide logging; JSON unless `DCCLINK_LOG_FORMAT=pretty`.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    self::tracing::init(LogFormat::from_env_or(LogFormat::Json));
}

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::LogFormat;
