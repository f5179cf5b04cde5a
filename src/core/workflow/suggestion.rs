//! Workflow suggestion types shared by the server proxy and the browser

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest prompt accepted, in characters
pub const MAX_PROMPT_CHARS: usize = 1000;

/// How hard a workflow is to build
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Complexity {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Complexity {
    pub const ALL: [Complexity; 4] = [
        Complexity::Beginner,
        Complexity::Intermediate,
        Complexity::Advanced,
        Complexity::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Beginner => "Beginner",
            Complexity::Intermediate => "Intermediate",
            Complexity::Advanced => "Advanced",
            Complexity::Expert => "Expert",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Complexity::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown complexity: {s:?}"))
    }
}

impl TryFrom<String> for Complexity {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Structured answer from the assistant
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkflowSuggestion {
    /// n8n node names in execution order
    pub nodes: Vec<String>,
    pub description: String,
    pub complexity: Complexity,
}

/// Route of the suggestion endpoint
pub const SUGGEST_PATH: &str = "/api/workflow/suggest";

/// Body of `POST /api/workflow/suggest`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestRequest {
    pub prompt: String,
}

/// Error body returned by the API
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
    pub code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PromptError {
    #[error("Describe the workflow you need")]
    Empty,

    #[error("Prompt is too long ({len} characters, max {max})")]
    TooLong { len: usize, max: usize },

    #[error("Request body must be JSON with a string \"prompt\" field")]
    Malformed,
}

/// Trim the prompt and check it is worth sending
pub fn validate_prompt(prompt: &str) -> Result<String, PromptError> {
    let trimmed = prompt.trim();
    if trimmed.is_empty() {
        return Err(PromptError::Empty);
    }
    let len = trimmed.chars().count();
    if len > MAX_PROMPT_CHARS {
        return Err(PromptError::TooLong {
            len,
            max: MAX_PROMPT_CHARS,
        });
    }
    Ok(trimmed.to_string())
}

/// Everything that can go wrong between the prompt box and the model
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SuggestError {
    #[error("Invalid prompt: {0}")]
    InvalidPrompt(#[from] PromptError),

    #[error("AI assistant is not configured")]
    NotConfigured,

    #[error("AI service returned {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Request failed: {0}")]
    Transport(String),

    #[error("AI service returned no content")]
    EmptyResponse,

    #[error("AI response could not be read: {0}")]
    Unparsable(String),
}

impl SuggestError {
    /// Stable machine-readable code used in API error bodies
    pub fn code(&self) -> &'static str {
        match self {
            SuggestError::InvalidPrompt(_) => "INVALID_PROMPT",
            SuggestError::NotConfigured => "AI_NOT_CONFIGURED",
            SuggestError::Upstream { .. } => "UPSTREAM_ERROR",
            SuggestError::Transport(_) => "UPSTREAM_UNREACHABLE",
            SuggestError::EmptyResponse => "EMPTY_RESPONSE",
            SuggestError::Unparsable(_) => "UNPARSABLE_RESPONSE",
        }
    }

    /// Rebuild an error from an API error body
    pub fn from_api(status: u16, body: &ApiErrorDetail) -> Self {
        match body.code.as_str() {
            "AI_NOT_CONFIGURED" => SuggestError::NotConfigured,
            "EMPTY_RESPONSE" => SuggestError::EmptyResponse,
            "UNPARSABLE_RESPONSE" => SuggestError::Unparsable(body.message.clone()),
            _ => SuggestError::Upstream {
                status,
                message: body.message.clone(),
            },
        }
    }

    /// Short sentence for the notice under the prompt box
    pub fn user_message(&self) -> &'static str {
        match self {
            SuggestError::InvalidPrompt(PromptError::Empty) => "Describe the workflow you need first.",
            SuggestError::InvalidPrompt(PromptError::TooLong { .. }) => {
                "That prompt is a bit long. Try a shorter description."
            }
            SuggestError::InvalidPrompt(PromptError::Malformed) => {
                "Couldn't read that request. Please try again."
            }
            SuggestError::NotConfigured => "The workflow assistant is offline right now.",
            _ => "Couldn't get a suggestion. Please try again.",
        }
    }
}

/// Parse the model's JSON text into a suggestion.
///
/// Tolerates a surrounding Markdown code fence, trims node names and drops
/// blank ones.
pub fn parse_suggestion(text: &str) -> Result<WorkflowSuggestion, SuggestError> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(SuggestError::EmptyResponse);
    }
    let mut suggestion: WorkflowSuggestion =
        serde_json::from_str(body).map_err(|e| SuggestError::Unparsable(e.to_string()))?;
    suggestion.nodes = suggestion
        .nodes
        .into_iter()
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .collect();
    suggestion.description = suggestion.description.trim().to_string();
    Ok(suggestion)
}

fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    // Drop an optional language tag on the opening line
    let rest = rest.split_once('\n').map_or("", |(_, body)| body);
    rest.trim_end().strip_suffix("```").unwrap_or(rest).trim()
}
