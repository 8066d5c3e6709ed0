mod client;
mod parse;

use std::path::{Path, PathBuf};

pub use client::SheetClient;
pub use parse::parse_records;

use nihongo_types::VocabularyRecord;

#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Where the word list is read from
#[derive(Clone)]
pub enum RecordSource {
    Remote(SheetClient),
    File(PathBuf),
}

impl RecordSource {
    pub fn describe(&self) -> String {
        match self {
            RecordSource::Remote(client) => client.url().to_string(),
            RecordSource::File(path) => path.display().to_string(),
        }
    }

    /// One best-effort load. Failures are logged and give an empty list.
    pub async fn load(&self) -> Vec<VocabularyRecord> {
        match self {
            RecordSource::Remote(client) => load_records(client).await,
            RecordSource::File(path) => load_records_from_file(path).await,
        }
    }
}

/// Fetch and parse the sheet, an empty list on any failure
pub async fn load_records(client: &SheetClient) -> Vec<VocabularyRecord> {
    match client.fetch_text().await {
        Ok(text) => {
            let records = parse_records(&text);
            tracing::info!("Loaded {} words from {}", records.len(), client.url());
            records
        }
        Err(e) => {
            tracing::error!("Failed to fetch sheet data: {}", e);
            Vec::new()
        }
    }
}

/// Same as [`load_records`] for a CSV file on disk
pub async fn load_records_from_file(path: &Path) -> Vec<VocabularyRecord> {
    match tokio::fs::read_to_string(path).await {
        Ok(text) => {
            let records = parse_records(&text);
            tracing::info!("Loaded {} words from {}", records.len(), path.display());
            records
        }
        Err(e) => {
            tracing::error!("Failed to read {}: {}", path.display(), SheetError::from(e));
            Vec::new()
        }
    }
}
