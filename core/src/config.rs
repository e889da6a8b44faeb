//! Client configuration, populated from environment variables.

use std::time::Duration;

/// Runtime configuration for the content API client.
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | `ARKONE_API_BASE` | `http://localhost:8080/api` | Base URL every resource path is appended to |
/// | `ARKONE_API_SUCCESS_CODE` | `200` | Envelope `code` that means success |
/// | `ARKONE_API_TIMEOUT_SECS` | `30` | Whole-request timeout used by `UreqTransport` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub success_code: i64,
    pub timeout: Duration,
}

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_SUCCESS_CODE: i64 = 200;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            success_code: DEFAULT_SUCCESS_CODE,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Populate config from environment variables, applying defaults where
    /// a variable is absent or unparsable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("ARKONE_API_BASE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let success_code = lookup("ARKONE_API_SUCCESS_CODE")
            .and_then(|v| v.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_SUCCESS_CODE);

        let timeout_secs = lookup("ARKONE_API_TIMEOUT_SECS")
            .and_then(|v| v.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            base_url,
            success_code,
            timeout: Duration::from_secs(timeout_secs),
        }
    }
}
