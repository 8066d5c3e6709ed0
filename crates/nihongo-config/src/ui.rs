use serde::{Deserialize, Serialize};

fn default_window_title() -> String {
    "Nihongo Notes".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UiConfig {
    #[serde(default = "default_window_title")]
    pub window_title: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            window_title: default_window_title(),
        }
    }
}
