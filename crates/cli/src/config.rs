// SPDX-License-Identifier: MIT

//! Client configuration.
//!
//! The base URL of the summary service is resolved in order of
//! precedence: `--url` flag, `BRIEFS_URL` environment variable, then
//! the local development default.

/// Environment variable overriding the service base URL.
pub const URL_ENV: &str = "BRIEFS_URL";

/// Default base URL for a locally running service.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the summary service, without a trailing slash.
    pub base_url: String,
}

impl Config {
    /// Resolve the configuration from an optional `--url` flag value.
    pub fn resolve(url_flag: Option<&str>) -> Self {
        let raw = url_flag
            .map(str::to_string)
            .or_else(|| std::env::var(URL_ENV).ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Config {
            base_url: raw.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
