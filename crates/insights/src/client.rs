use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatRequest};
use thiserror::Error;

/// Gemini model used for stock analysis.
const ANALYSIS_MODEL: &str = "gemini-3-flash-preview";

/// Failure contacting or reading from the text-generation service.
///
/// Never crosses the requester boundary; see
/// [`crate::requester::InsightRequester`].
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("text-generation request failed: {0}")]
    Service(String),

    #[error("model returned no text content")]
    EmptyResponse,
}

/// Boundary to the external text-generation service.
///
/// The production implementation is [`GeminiClient`]; tests inject scripted
/// implementations.
#[async_trait]
pub trait InsightClient: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError>;
}

#[async_trait]
impl<T: InsightClient + ?Sized> InsightClient for Box<T> {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        (**self).generate(prompt).await
    }
}

/// Gemini client via `genai`.
///
/// The API key is resolved by `genai` from its standard environment variable
/// (`GEMINI_API_KEY`).
pub struct GeminiClient {
    inner: Client,
    model: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self::with_model(ANALYSIS_MODEL)
    }

    pub fn with_model(model: impl Into<String>) -> Self {
        Self {
            inner: Client::default(),
            model: model.into(),
        }
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl InsightClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, InsightError> {
        let request = ChatRequest::default().append_message(ChatMessage::user(prompt.to_string()));

        let response = self
            .inner
            .exec_chat(&self.model, request, None)
            .await
            .map_err(|e| InsightError::Service(e.to_string()))?;

        response
            .content_text_as_str()
            .map(str::to_string)
            .filter(|text| !text.trim().is_empty())
            .ok_or(InsightError::EmptyResponse)
    }
}
