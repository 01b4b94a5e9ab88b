use log::debug;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

/// Which prompt template a summary request uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummaryStyle {
    Concise,
    Detailed,
    KeyPoints,
    /// Anything unrecognised; gets the generic prompt.
    Generic,
}

impl SummaryStyle {
    /// `None` means the caller did not ask for a style and gets `Concise`.
    pub fn from_request(value: Option<&str>) -> Self {
        match value {
            None | Some("concise") => Self::Concise,
            Some("detailed") => Self::Detailed,
            Some("key_points") => Self::KeyPoints,
            Some(_) => Self::Generic,
        }
    }

    /// Style from the raw JSON `type` field. A missing key means `Concise`;
    /// `null` or any non-string value gets the generic prompt.
    pub fn from_json(value: Option<&Value>) -> Self {
        match value {
            None => Self::Concise,
            Some(Value::String(s)) => Self::from_request(Some(s)),
            Some(_) => Self::Generic,
        }
    }

    pub fn build_prompt(&self, text: &str) -> String {
        match self {
            Self::Concise => format!("Summarize this text in 3-5 sentences:\n\n{text}\n\nSummary:"),
            Self::Detailed => format!(
                "Give a detailed bullet point summary of this text:\n\n{text}\n\nBullet Summary:"
            ),
            Self::KeyPoints => format!("Extract key points from this text:\n\n{text}\n\nKey Points:"),
            Self::Generic => format!("Summarize this text:\n\n{text}"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Gemini API returned {status}: {body}")]
    Api { status: u16, body: String },
    #[error("unexpected Gemini API response format")]
    EmptyResponse,
}

#[derive(Debug, thiserror::Error)]
#[error("Gemini summarization error: {0}")]
pub struct SummarizeError(#[from] pub GenerationError);

#[rocket::async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Gemini `generateContent` client bound to a single model.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            base_url: crate::config::DEFAULT_GEMINI_BASE_URL.to_string(),
            model: model.into(),
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}

fn extract_candidate_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    Ok(text)
}

#[rocket::async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!(
            "Gemini request to model {} ({} prompt chars)",
            self.model,
            prompt.chars().count()
        );

        let body = json!({
            "contents": [
                {
                    "parts": [{ "text": prompt }]
                }
            ]
        });

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api { status, body });
        }

        let parsed: GenerateContentResponse = response.json().await?;
        extract_candidate_text(parsed)
    }
}

/// Build the prompt for `style` and return the model output verbatim.
pub async fn summarize_text(
    generator: &dyn TextGenerator,
    text: &str,
    style: &SummaryStyle,
) -> Result<String, SummarizeError> {
    let prompt = style.build_prompt(text);
    Ok(generator.generate(&prompt).await?)
}
