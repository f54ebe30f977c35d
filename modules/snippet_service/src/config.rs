//! Configuration for snippet service module

use serde::{Deserialize, Serialize};

/// Snippet service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Used in alert header names and messages
    #[serde(default = "default_application_name")]
    pub application_name: String,

    /// Path every REST route is mounted under; empty mounts at the root
    #[serde(default = "default_api_prefix")]
    pub api_prefix: String,

    /// Emit `X-{app}-alert` / `X-{app}-params` on successful writes
    #[serde(default = "default_true")]
    pub enable_alert_headers: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            application_name: default_application_name(),
            api_prefix: default_api_prefix(),
            enable_alert_headers: true,
        }
    }
}

fn default_application_name() -> String {
    "snippeterApp".to_string()
}

fn default_api_prefix() -> String {
    "/api".to_string()
}

fn default_true() -> bool {
    true
}
