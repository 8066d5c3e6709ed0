use async_trait::async_trait;
use nihongo_sensei::{ProviderMetadata, Sensei, SenseiError, SenseiReply};
use serde::{Deserialize, Serialize};

pub const SYSTEM_INSTRUCTION: &str = "You are a Japanese Sensei. Explain grammar points, \
vocabulary, or culture concisely. Use a mix of English and Japanese. Be polite and encouraging.";

/// Japanese teaching assistant backed by Gemini `generateContent`
#[derive(Clone)]
pub struct JapaneseSensei {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl JapaneseSensei {
    pub fn new(api_key: String, api_url: String, model: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            api_url,
            model,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl Sensei for JapaneseSensei {
    async fn ask(&self, text: &str) -> Result<SenseiReply, SenseiError> {
        if self.api_key.is_empty() {
            return Err(SenseiError::AuthenticationError);
        }

        tracing::debug!("Asking {} ({} chars)", self.model, text.len());

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&GenerateContentRequest::new(text))
            .send()
            .await?;

        let status = response.status();
        if status == 429 {
            return Err(SenseiError::RateLimitExceeded);
        }

        if status == 401 || status == 403 {
            return Err(SenseiError::AuthenticationError);
        }

        if !status.is_success() {
            return Err(SenseiError::ApiError(format!("HTTP {}", status)));
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| SenseiError::MalformedResponse(e.to_string()))?;

        Ok(SenseiReply {
            text: body.reply_text(),
        })
    }

    fn metadata(&self) -> ProviderMetadata {
        ProviderMetadata {
            name: "Gemini".to_string(),
            model: self.model.clone(),
            requires_api_key: true,
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    system_instruction: Content<'a>,
    contents: Vec<Content<'a>>,
}

impl<'a> GenerateContentRequest<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            system_instruction: Content {
                role: None,
                parts: vec![Part {
                    text: SYSTEM_INSTRUCTION,
                }],
            },
            contents: vec![Content {
                role: Some("user"),
                parts: vec![Part { text }],
            }],
        }
    }
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Text parts of the first candidate joined together
    fn reply_text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|part| part.text.as_deref())
            .collect();

        if text.is_empty() { None } else { Some(text) }
    }
}
