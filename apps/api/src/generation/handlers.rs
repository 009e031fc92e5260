//! Axum route handlers for the Generation API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::generation::features::FeatureKind;
use crate::generation::generator::generate;
use crate::state::AppState;

/// Request body for a generation call. `feature` arrives as a raw string
/// and is parsed against the closed enumeration here, at the boundary, so
/// out-of-set values surface as an invalid-feature error rather than a
/// generic body-deserialization failure.
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub feature: String,
    pub prompt: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub feature: FeatureKind,
    pub output: String,
}

/// POST /api/v1/generate
///
/// Renders the feature's template around the user prompt, makes one model
/// call, and returns the plain-text completion.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    if request.prompt.trim().is_empty() {
        return Err(AppError::Validation("prompt cannot be empty".to_string()));
    }

    let feature: FeatureKind = request.feature.parse()?;

    let output = generate(state.llm.as_ref(), feature, &request.prompt).await?;

    Ok(Json(GenerateResponse { feature, output }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::{LlmError, TextGenerator};

    use std::sync::Arc;

    use async_trait::async_trait;

    struct FixedModel(&'static str);

    #[async_trait]
    impl TextGenerator for FixedModel {
        async fn generate_text(&self, _prompt: &str) -> Result<String, LlmError> {
            Ok(self.0.to_string())
        }
    }

    fn test_state(model: &'static str) -> AppState {
        AppState {
            llm: Arc::new(FixedModel(model)),
            config: Config {
                gemini_api_key: Some("test-key".to_string()),
                gemini_model: "gemini-1.5-flash".to_string(),
                port: 8080,
                rust_log: "info".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn test_handle_generate_returns_model_output() {
        let state = test_state("1. What is a cell?");
        let response = handle_generate(
            State(state),
            Json(GenerateRequest {
                feature: "quiz".to_string(),
                prompt: "Cell biology".to_string(),
            }),
        )
        .await
        .unwrap();

        assert_eq!(response.0.feature, FeatureKind::Quiz);
        assert_eq!(response.0.output, "1. What is a cell?");
    }

    #[tokio::test]
    async fn test_empty_prompt_is_rejected() {
        let state = test_state("unused");
        let err = handle_generate(
            State(state),
            Json(GenerateRequest {
                feature: "notes".to_string(),
                prompt: "   ".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_unknown_feature_is_rejected_at_the_boundary() {
        let state = test_state("unused");
        let err = handle_generate(
            State(state),
            Json(GenerateRequest {
                feature: "nonexistent".to_string(),
                prompt: "x".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidFeature(_)));
    }
}
