//! Service configuration
//!
//! Loaded from TOML at startup, falls back to defaults if no config file exists.
//! Environment variables override whatever the file provides.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_BASE_URL: &str = "https://api.clickup.com/api/v2";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Personal API token sent as the Authorization header.
    pub api_key: String,
    /// Workspace (team) id every name lookup is rooted at.
    pub team_id: String,
    pub base_url: String,
    pub request_timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            team_id: String::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: 30,
        }
    }
}

impl ServiceConfig {
    /// Load config from a TOML file, falling back to defaults.
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}, using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                tracing::info!("No config at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Apply `CLICKUP_API_KEY`, `CLICKUP_TEAM_ID` and `CLICKUP_BASE_URL`.
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup. Empty values are ignored.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = get("CLICKUP_API_KEY") {
            self.api_key = v;
        }
        if let Some(v) = get("CLICKUP_TEAM_ID") {
            self.team_id = v;
        }
        if let Some(v) = get("CLICKUP_BASE_URL") {
            self.base_url = v;
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(Error::Config("api_key is not set (CLICKUP_API_KEY)".into()));
        }
        if self.team_id.trim().is_empty() {
            return Err(Error::Config("team_id is not set (CLICKUP_TEAM_ID)".into()));
        }
        Ok(())
    }

    /// Browser URL of a list in this workspace.
    pub fn list_url(&self, list_id: &str) -> String {
        format!("https://app.clickup.com/{}/v/l/{}", self.team_id, list_id)
    }

    /// Current config as TOML with the api key redacted.
    pub fn to_redacted_toml(&self) -> String {
        let mut shown = self.clone();
        if !shown.api_key.is_empty() {
            shown.api_key = "<redacted>".into();
        }
        toml::to_string_pretty(&shown).unwrap_or_default()
    }
}
