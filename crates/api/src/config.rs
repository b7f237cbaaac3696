//! Server configuration loaded from environment variables.
//!
//! | variable | default |
//! |---|---|
//! | `DCCLINK_BIND` | `127.0.0.1:8000` |
//! | `DATABASE_URL` | `sqlite://database.db` |
//! | `DCCLINK_SIMULATED_LATENCY_MS` | `10000` |
//! | `DCCLINK_PROJECT_PATH` | `.` |
//! | `DCCLINK_PROJECT_FILE` | `<project path>/my_project.blend` |
//!
//! Logging is configured separately by `dcclink-observability`: `RUST_LOG`
//! (default `info`) and `DCCLINK_LOG_FORMAT` (`json` or `pretty`).

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use dcclink_infra::store::sqlite::DEFAULT_DATABASE_URL;

pub const DEFAULT_BIND: &str = "127.0.0.1:8000";
pub const DEFAULT_SIMULATED_LATENCY: Duration = Duration::from_secs(10);
pub const DEFAULT_PROJECT_FILE_NAME: &str = "my_project.blend";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}={value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub database_url: String,
    /// How long each transform endpoint waits before answering.
    pub simulated_latency: Duration,
    /// Returned by `GET /file-path?projectpath=true`.
    pub project_path: PathBuf,
    /// Returned by `GET /file-path`.
    pub project_file: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        let project_path = PathBuf::from(".");
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8000)),
            database_url: DEFAULT_DATABASE_URL.to_string(),
            simulated_latency: DEFAULT_SIMULATED_LATENCY,
            project_file: project_path.join(DEFAULT_PROJECT_FILE_NAME),
            project_path,
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup; unset keys take defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup("DCCLINK_BIND") {
            config.bind_addr = value.parse().map_err(|e: std::net::AddrParseError| {
                ConfigError::Invalid {
                    key: "DCCLINK_BIND",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
        }

        if let Some(value) = lookup("DATABASE_URL") {
            config.database_url = value;
        }

        if let Some(value) = lookup("DCCLINK_SIMULATED_LATENCY_MS") {
            let millis: u64 = value.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::Invalid {
                    key: "DCCLINK_SIMULATED_LATENCY_MS",
                    value: value.clone(),
                    reason: e.to_string(),
                }
            })?;
            config.simulated_latency = Duration::from_millis(millis);
        }

        if let Some(value) = lookup("DCCLINK_PROJECT_PATH") {
            config.project_path = PathBuf::from(value);
            config.project_file = config.project_path.join(DEFAULT_PROJECT_FILE_NAME);
        }

        if let Some(value) = lookup("DCCLINK_PROJECT_FILE") {
            config.project_file = PathBuf::from(value);
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ServerConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.bind_addr.to_string(), DEFAULT_BIND);
        assert_eq!(config.simulated_latency, Duration::from_secs(10));
        assert_eq!(config.database_url, "sqlite://database.db");
    }

    #[test]
    fn overrides_are_applied() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DCCLINK_BIND", "0.0.0.0:9000"),
            ("DATABASE_URL", "sqlite::memory:"),
            ("DCCLINK_SIMULATED_LATENCY_MS", "250"),
            ("DCCLINK_PROJECT_PATH", "/work/scene"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.port(), 9000);
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.simulated_latency, Duration::from_millis(250));
        assert_eq!(config.project_file, PathBuf::from("/work/scene/my_project.blend"));
    }

    #[test]
    fn explicit_project_file_wins() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("DCCLINK_PROJECT_PATH", "/work/scene"),
            ("DCCLINK_PROJECT_FILE", "/elsewhere/shot.blend"),
        ]))
        .unwrap();

        assert_eq!(config.project_path, PathBuf::from("/work/scene"));
        assert_eq!(config.project_file, PathBuf::from("/elsewhere/shot.blend"));
    }

    #[test]
    fn malformed_values_are_reported() {
        let err = ServerConfig::from_lookup(lookup(&[("DCCLINK_SIMULATED_LATENCY_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid { key: "DCCLINK_SIMULATED_LATENCY_MS", .. }
        ));

        assert!(ServerConfig::from_lookup(lookup(&[("DCCLINK_BIND", "nowhere")])).is_err());
    }
}
