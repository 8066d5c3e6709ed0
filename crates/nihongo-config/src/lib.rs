use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use self::sensei::SenseiConfig;
use self::sheet::SheetConfig;
use self::ui::UiConfig;

pub mod sensei;
pub mod sheet;
pub mod ui;

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sheet: SheetConfig,
    pub sensei: SenseiConfig,
    pub ui: UiConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl Config {
    /// Defaults with process environment overrides
    pub fn new() -> Self {
        let mut config = Config::default();
        config.apply_env(|key| env::var(key).ok());
        config
    }

    /// Read a JSON config file, then apply environment overrides.
    /// Sections missing from the file take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::info!("Loading config from {}", path.display());

        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        let mut config: Config =
            serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
                path: path.display().to_string(),
                source,
            })?;

        config.apply_env(|key| env::var(key).ok());
        Ok(config)
    }

    /// Overlay values from an environment-like lookup.
    /// The API key can only come from here.
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(sheet_id) = non_empty("SHEET_ID") {
            self.sheet.sheet_id = sheet_id;
        }
        if let Some(url) = non_empty("SHEET_URL") {
            self.sheet.url = Some(url);
        }

        if let Some(model) = non_empty("SENSEI_MODEL") {
            self.sensei.model = model;
        }
        if let Some(api_url) = non_empty("SENSEI_API_URL") {
            self.sensei.api_url = api_url;
        }
        if let Some(api_key) = non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")) {
            self.sensei.api_key = api_key;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn env_overrides_defaults() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[
            ("SHEET_URL", "http://localhost/words.csv"),
            ("SENSEI_MODEL", "gemini-test"),
            ("GEMINI_API_KEY", "key-1"),
        ]));

        assert_eq!(config.sheet.export_url(), "http://localhost/words.csv");
        assert_eq!(config.sensei.model, "gemini-test");
        assert_eq!(config.sensei.api_key, "key-1");
    }

    #[test]
    fn api_key_falls_back_to_generic_name() {
        let mut config = Config::default();
        config.apply_env(lookup_from(&[("API_KEY", "key-2")]));
        assert_eq!(config.sensei.api_key, "key-2");

        let mut config = Config::default();
        config.apply_env(lookup_from(&[("GEMINI_API_KEY", " "), ("API_KEY", "key-3")]));
        assert_eq!(config.sensei.api_key, "key-3");
    }

    #[test]
    fn partial_json_takes_defaults() {
        let config: Config = serde_json::from_str(r#"{ "sheet": { "sheet_id": "xyz" } }"#).unwrap();
        assert_eq!(config.sheet.sheet_id, "xyz");
        assert!(config.sensei.enabled);
        assert_eq!(config.sensei.model, "gemini-3-flash-preview");
        assert_eq!(config.ui.window_title, "Nihongo Notes");
    }

    #[test]
    fn load_reports_missing_file() {
        let err = Config::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
