//! Run configuration supplied by the host environment
//!
//! The host hands the runner one JSON object per run; absent fields take
//! the documented defaults. Credentials stay optional here because each
//! login scenario carries its own defaults (see [`crate::scenario`]).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Scenario selected when the input omits one
pub const DEFAULT_SCENARIO: &str = "smoke-home";

/// Deployed application targeted when the input omits a base URL
pub const DEFAULT_BASE_URL: &str =
    "https://kurs-ing-web-portal-804574293440.europe-north1.run.app";

/// Configuration object for a single smoke run
///
/// Immutable for the duration of the run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunInput {
    /// Scenario name to execute
    #[serde(default = "default_scenario")]
    pub scenario: String,
    /// Base URL of the application under test
    #[serde(rename = "baseUrl", default = "default_base_url")]
    pub base_url: String,
    /// Login email; scenario default applies when absent
    #[serde(rename = "loginEmail", default)]
    pub login_email: Option<String>,
    /// Login password; scenario default applies when absent
    #[serde(rename = "loginPassword", default)]
    pub login_password: Option<String>,
}

fn default_scenario() -> String {
    DEFAULT_SCENARIO.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for RunInput {
    fn default() -> Self {
        Self {
            scenario: default_scenario(),
            base_url: default_base_url(),
            login_email: None,
            login_password: None,
        }
    }
}

impl RunInput {
    /// Parse an input object from JSON text
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load an input object from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let input = RunInput::default();
        assert_eq!(input.scenario, "smoke-home");
        assert_eq!(input.base_url, DEFAULT_BASE_URL);
        assert!(input.login_email.is_none());
        assert!(input.login_password.is_none());
    }

    #[test]
    fn test_empty_object_takes_defaults() {
        let input = RunInput::from_json("{}").unwrap();
        assert_eq!(input.scenario, "smoke-home");
        assert_eq!(input.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_full_object() {
        let input = RunInput::from_json(
            r#"{
                "scenario": "login-student",
                "baseUrl": "https://staging.example.test",
                "loginEmail": "qa@example.test",
                "loginPassword": "hunter2"
            }"#,
        )
        .unwrap();
        assert_eq!(input.scenario, "login-student");
        assert_eq!(input.base_url, "https://staging.example.test");
        assert_eq!(input.login_email.as_deref(), Some("qa@example.test"));
        assert_eq!(input.login_password.as_deref(), Some("hunter2"));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(RunInput::from_json("not json").is_err());
    }
}
