use std::path::PathBuf;
use std::sync::Arc;

use nihongo_config::Config;
use nihongo_lang_japanese::JapaneseSensei;
use nihongo_sensei::Sensei;
use nihongo_sheet::{RecordSource, SheetClient};

pub struct AppState {
    pub config: Config,
    pub source: RecordSource,
    /// `None` when the Sensei is disabled in config
    pub sensei: Option<Arc<dyn Sensei>>,
}

impl AppState {
    /// `csv` replaces the configured sheet with a local file
    pub fn new(config: Config, csv: Option<PathBuf>) -> Self {
        let source = match csv {
            Some(path) => RecordSource::File(path),
            None => RecordSource::Remote(SheetClient::new(config.sheet.export_url())),
        };

        let sensei: Option<Arc<dyn Sensei>> = if config.sensei.enabled {
            Some(Arc::new(JapaneseSensei::new(
                config.sensei.api_key.clone(),
                config.sensei.api_url.clone(),
                config.sensei.model.clone(),
            )))
        } else {
            tracing::warn!("Sensei disabled in config");
            None
        };

        if let Some(sensei) = &sensei
            && missing_api_key(sensei.as_ref(), &config.sensei.api_key)
        {
            tracing::warn!(
                "No API key for {} (GEMINI_API_KEY / API_KEY), chat will be unavailable",
                sensei.metadata().name
            );
        }

        Self::with_parts(config, source, sensei)
    }

    pub fn with_parts(
        config: Config,
        source: RecordSource,
        sensei: Option<Arc<dyn Sensei>>,
    ) -> Self {
        Self {
            config,
            source,
            sensei,
        }
    }
}

fn missing_api_key(sensei: &dyn Sensei, api_key: &str) -> bool {
    sensei.metadata().requires_api_key && api_key.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sensei() -> JapaneseSensei {
        JapaneseSensei::new(
            String::new(),
            "http://127.0.0.1:9".to_string(),
            "gemini-x".to_string(),
        )
    }

    #[test]
    fn blank_key_is_missing_for_keyed_provider() {
        assert!(missing_api_key(&sensei(), ""));
        assert!(missing_api_key(&sensei(), "  "));
        assert!(!missing_api_key(&sensei(), "abc"));
    }

    #[test]
    fn csv_flag_selects_file_source() {
        let state = AppState::new(Config::default(), Some(PathBuf::from("words.csv")));
        match &state.source {
            RecordSource::File(path) => assert!(path.ends_with("words.csv")),
            RecordSource::Remote(_) => panic!("expected a file source"),
        }
        assert!(state.sensei.is_some());
    }

    #[test]
    fn disabled_sensei_is_absent() {
        let mut config = Config::default();
        config.sensei.enabled = false;
        let state = AppState::new(config, None);
        assert!(state.sensei.is_none());
        assert!(matches!(state.source, RecordSource::Remote(_)));
    }
}
