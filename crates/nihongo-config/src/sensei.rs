use std::fmt;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "gemini-3-flash-preview".to_string()
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

#[derive(Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct SenseiConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    #[serde(default = "default_model")]
    pub model: String,
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Only ever read from the environment
    #[serde(skip)]
    pub api_key: String,
}

impl Default for SenseiConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            model: default_model(),
            api_url: default_api_url(),
            api_key: String::new(),
        }
    }
}

// Keeps the key out of `{:?}` output
impl fmt::Debug for SenseiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SenseiConfig")
            .field("enabled", &self.enabled)
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("api_key", &if self.api_key.is_empty() { "<unset>" } else { "<redacted>" })
            .finish()
    }
}
