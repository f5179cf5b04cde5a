//! Workflow assistant server-side handler
//!
//! Proxies suggestion requests to Gemini so the API key stays on the server:
//! - POST /api/workflow/suggest - `{prompt}` in, `{nodes, description, complexity}` out

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use std::sync::Arc;

use crate::core::config::Config;
use crate::core::workflow::gemini::{GenerateContentResponse, build_generate_request, upstream_message};
use crate::core::workflow::{
    ApiErrorBody, ApiErrorDetail, PromptError, SUGGEST_PATH, SuggestError, SuggestRequest,
    WorkflowSuggestion, validate_prompt,
};

/// Shared state of the workflow API
pub struct WorkflowApiState {
    config: Config,
    client: reqwest::Client,
}

impl WorkflowApiState {
    pub fn new(config: Config) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build AI HTTP client, using defaults: {}", e);
                reqwest::Client::new()
            });
        Self { config, client }
    }
}

/// Create the workflow API router
pub fn workflow_api_router(config: Config) -> Router {
    let state = Arc::new(WorkflowApiState::new(config));

    Router::new()
        .route(SUGGEST_PATH, post(suggest_handler))
        .with_state(state)
}

impl IntoResponse for SuggestError {
    fn into_response(self) -> Response {
        let status = match &self {
            SuggestError::InvalidPrompt(_) => StatusCode::BAD_REQUEST,
            SuggestError::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            SuggestError::Upstream { status: 429, .. } => StatusCode::TOO_MANY_REQUESTS,
            SuggestError::Upstream { .. }
            | SuggestError::Transport(_)
            | SuggestError::EmptyResponse
            | SuggestError::Unparsable(_) => StatusCode::BAD_GATEWAY,
        };

        let body = ApiErrorBody {
            error: ApiErrorDetail {
                message: self.to_string(),
                code: self.code().to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

async fn suggest_handler(
    State(state): State<Arc<WorkflowApiState>>,
    payload: Result<Json<SuggestRequest>, JsonRejection>,
) -> Result<Json<WorkflowSuggestion>, SuggestError> {
    let Json(request) = payload.map_err(|e| {
        tracing::debug!("Rejected suggestion body: {}", e);
        SuggestError::InvalidPrompt(PromptError::Malformed)
    })?;

    match request_suggestion(&state, &request.prompt).await {
        Ok(suggestion) => {
            tracing::info!(
                "Workflow suggestion ready: nodes={}, complexity={}",
                suggestion.nodes.len(),
                suggestion.complexity
            );
            Ok(Json(suggestion))
        }
        Err(e) => {
            match &e {
                SuggestError::InvalidPrompt(_) => tracing::debug!("Workflow suggestion refused: {}", e),
                _ => tracing::warn!("Workflow suggestion failed: {}", e),
            }
            Err(e)
        }
    }
}

/// One round trip to Gemini for `prompt`
pub async fn request_suggestion(
    state: &WorkflowApiState,
    prompt: &str,
) -> Result<WorkflowSuggestion, SuggestError> {
    let prompt = validate_prompt(prompt)?;
    let api_key = state
        .config
        .api_key
        .as_deref()
        .ok_or(SuggestError::NotConfigured)?;

    tracing::info!(
        "Workflow suggestion request: model={}, prompt_chars={}",
        state.config.model,
        prompt.chars().count()
    );

    let response = state
        .client
        .post(state.config.generate_content_url())
        .header("x-goog-api-key", api_key)
        .json(&build_generate_request(&prompt))
        .send()
        .await
        .map_err(|e| SuggestError::Transport(e.to_string()))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| SuggestError::Transport(e.to_string()))?;

    // Log response for debugging (truncate if too long)
    if body.len() > 500 {
        let head: String = body.chars().take(500).collect();
        tracing::debug!("Gemini response body: {}... (truncated, total {} bytes)", head, body.len());
    } else {
        tracing::debug!("Gemini response body: {}", body);
    }

    if !status.is_success() {
        return Err(SuggestError::Upstream {
            status: status.as_u16(),
            message: upstream_message(&body),
        });
    }

    let parsed: GenerateContentResponse =
        serde_json::from_str(&body).map_err(|e| SuggestError::Unparsable(e.to_string()))?;
    parsed.into_suggestion()
}
