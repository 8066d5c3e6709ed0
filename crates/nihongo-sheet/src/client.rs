use crate::SheetError;

/// Fetches the published CSV export of the word list
#[derive(Clone)]
pub struct SheetClient {
    url: String,
    client: reqwest::Client,
}

impl SheetClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One GET of the export URL, body returned as text
    pub async fn fetch_text(&self) -> Result<String, SheetError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SheetError::Status(status.as_u16()));
        }

        Ok(response.text().await?)
    }
}
