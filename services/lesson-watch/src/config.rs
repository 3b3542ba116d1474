//! Configuration for the lesson watch client

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Backend origin. Empty means same-origin relative paths.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_poll_interval")]
    pub poll_interval_seconds: u64,
    #[serde(default = "default_toast_duration")]
    pub toast_duration_ms: u64,
    /// Backend check interval sent with start requests
    #[serde(default = "default_check_interval")]
    pub default_check_interval_minutes: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            poll_interval_seconds: default_poll_interval(),
            toast_duration_ms: default_toast_duration(),
            default_check_interval_minutes: default_check_interval(),
        }
    }
}

impl ClientConfig {
    /// Config for a page served by the backend itself
    pub fn same_origin() -> Self {
        Self {
            base_url: String::new(),
            ..Self::default()
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_seconds)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_poll_interval() -> u64 {
    30
}

fn default_toast_duration() -> u64 {
    4000
}

fn default_check_interval() -> u32 {
    5
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<ClientConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::LessonWatchError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: ClientConfig = serde_json::from_str(&content)?;
    Ok(config)
}
