//! Configuration types

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

/// Application settings (.jproc/config.toml)
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub ui: UiSettings,
}

/// Backend settings
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BackendSettings {
    /// Base URL the `/bfhl` path is appended to
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout; unset leaves it to the transport
    #[serde(default)]
    pub request_timeout_ms: Option<u64>,
}

/// UI settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Show key hints in the status bar
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_key_hints: true,
        }
    }
}

fn default_true() -> bool {
    true
}

/// The resolved backend: full endpoint URL plus optional timeout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub endpoint: Url,
    pub timeout: Option<Duration>,
}
