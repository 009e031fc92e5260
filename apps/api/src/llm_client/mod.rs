/// LLM Client: the single point of entry for all Gemini API calls in Aptora.
///
/// ARCHITECTURAL RULE: No other module may call the Generative Language API
/// directly. All model interactions MUST go through this module.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model for all generation calls, overridable via GEMINI_MODEL.
/// The flash tier is chosen for latency over creative diversity.
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("model returned no text content")]
    EmptyContent,
}

/// Sampling parameters sent with every request. Fixed process-wide:
/// low temperature and narrow top-k/top-p favor fast, repeatable output.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationParams {
    pub max_output_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_output_tokens: 1024,
            temperature: 0.5,
            top_k: 20,
            top_p: 0.8,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: &'a GenerationParams,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'a str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
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
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenates the text parts of the first candidate.
    /// Returns None when the response carries no text at all.
    pub fn text(&self) -> Option<String> {
        let candidate = self.candidates.first()?;
        let parts = &candidate.content.as_ref()?.parts;

        let mut text = String::new();
        for part in parts {
            if let Some(t) = &part.text {
                text.push_str(t);
            }
        }

        if text.is_empty() {
            None
        } else {
            Some(text)
        }
    }
}

#[derive(Debug, Deserialize)]
struct GeminiApiError {
    error: GeminiApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiApiErrorBody {
    message: String,
}

/// The seam between the generation pipeline and the hosted model.
///
/// Carried in `AppState` as `Arc<dyn TextGenerator>` so handlers and the
/// orchestrator can be exercised against mocks.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends a fully rendered prompt and returns the raw text completion,
    /// with no post-processing applied.
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Gemini-backed text generator. One outbound request per call: no retry,
/// no backoff, no local timeout. Callers needing bounded latency must
/// impose their own.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
    model: String,
    params: GenerationParams,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            model,
            params: GenerationParams::default(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, LlmError> {
        // Checked lazily, per call. A keyless process boots fine and only
        // generation attempts fail.
        let api_key = match self.api_key.as_deref() {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(LlmError::MissingApiKey),
        };

        let request_body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: &self.params,
        };

        let url = format!(
            "{GEMINI_API_URL}/models/{}:generateContent?key={api_key}",
            self.model
        );

        let response = self
            .client
            .post(&url)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: extract_api_error(&body),
            });
        }

        let completion: GenerateContentResponse = response.json().await?;

        let text = completion.text().ok_or(LlmError::EmptyContent)?;

        debug!(
            model = %self.model,
            output_len = text.len(),
            "Gemini call succeeded"
        );

        Ok(text)
    }
}

/// Pulls the human-readable message out of a Gemini error body,
/// falling back to the raw body when it is not the expected JSON.
fn extract_api_error(body: &str) -> String {
    serde_json::from_str::<GeminiApiError>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_concatenates_parts_of_first_candidate() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "Hello, "}, {"text": "world"}], "role": "model"}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_text_is_none_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_text_is_none_for_empty_parts() {
        let json = r#"{"candidates": [{"content": {"parts": []}}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_extract_api_error_reads_gemini_error_body() {
        let body = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        assert_eq!(extract_api_error(body), "API key not valid");
    }

    #[test]
    fn test_extract_api_error_falls_back_to_raw_body() {
        assert_eq!(extract_api_error("upstream exploded"), "upstream exploded");
    }

    #[test]
    fn test_generation_params_serialize_as_camel_case() {
        let params = GenerationParams::default();
        let value = serde_json::to_value(&params).unwrap();
        assert_eq!(value["maxOutputTokens"], 1024);
        assert_eq!(value["topK"], 20);
        assert!((value["temperature"].as_f64().unwrap() - 0.5).abs() < 1e-6);
        assert!((value["topP"].as_f64().unwrap() - 0.8).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_any_request() {
        let client = GeminiClient::new(None, DEFAULT_MODEL.to_string());
        let err = client.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_blank_api_key_is_treated_as_missing() {
        let client = GeminiClient::new(Some("   ".to_string()), DEFAULT_MODEL.to_string());
        let err = client.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, LlmError::MissingApiKey));
    }
}
