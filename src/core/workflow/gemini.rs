//! Gemini `generateContent` wire types
//!
//! Only the parts of the API the assistant uses: a single user turn and a
//! JSON response constrained by a schema.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::suggestion::{Complexity, SuggestError, WorkflowSuggestion, parse_suggestion};

/// Wrap the user's idea in the instruction sent to the model
pub fn build_prompt(prompt: &str) -> String {
    format!("Act as an n8n expert. Suggest an n8n workflow for: {prompt}")
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
    pub generation_config: GenerationConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: String,
    pub response_schema: Value,
}

/// Schema the model's JSON answer has to follow
pub fn suggestion_schema() -> Value {
    let levels: Vec<&str> = Complexity::ALL.iter().map(|c| c.as_str()).collect();
    json!({
        "type": "OBJECT",
        "properties": {
            "nodes": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": "List of n8n node names needed."
            },
            "description": {
                "type": "STRING",
                "description": "Brief explanation of how the workflow works."
            },
            "complexity": {
                "type": "STRING",
                "format": "enum",
                "enum": levels,
                "description": "Beginner, Intermediate, Advanced, or Expert."
            }
        },
        "required": ["nodes", "description", "complexity"]
    })
}

/// Request body for one suggestion
pub fn build_generate_request(prompt: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(build_prompt(prompt)),
            }],
        }],
        generation_config: GenerationConfig {
            response_mime_type: "application/json".to_string(),
            response_schema: suggestion_schema(),
        },
    }
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate, if it has any
    pub fn text(&self) -> Option<String> {
        let content = self.candidates.first()?.content.as_ref()?;
        let text: String = content
            .parts
            .iter()
            .filter_map(|p| p.text.as_deref())
            .collect();
        (!text.trim().is_empty()).then_some(text)
    }

    /// Turn the raw response into a suggestion
    pub fn into_suggestion(self) -> Result<WorkflowSuggestion, SuggestError> {
        if let Some(reason) = self
            .prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
        {
            return Err(SuggestError::Upstream {
                status: 200,
                message: format!("prompt blocked: {reason}"),
            });
        }
        let text = self.text().ok_or(SuggestError::EmptyResponse)?;
        parse_suggestion(&text)
    }
}

/// Error envelope the API uses for non-2xx responses
#[derive(Clone, Debug, Deserialize)]
pub struct GeminiErrorBody {
    pub error: GeminiErrorDetail,
}

#[derive(Clone, Debug, Deserialize)]
pub struct GeminiErrorDetail {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Best-effort message from an error body; falls back to the raw text
pub fn upstream_message(body: &str) -> String {
    match serde_json::from_str::<GeminiErrorBody>(body) {
        Ok(parsed) if !parsed.error.message.is_empty() => match parsed.error.status {
            Some(status) => format!("{status}: {}", parsed.error.message),
            None => parsed.error.message,
        },
        _ => body.chars().take(200).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let req = build_generate_request("sync leads to Discord");
        let json = serde_json::to_value(&req).unwrap();

        assert_eq!(
            json["contents"][0]["parts"][0]["text"],
            "Act as an n8n expert. Suggest an n8n workflow for: sync leads to Discord"
        );
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["responseMimeType"], "application/json");

        let schema = &json["generationConfig"]["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["nodes"]["items"]["type"], "STRING");
        assert_eq!(
            schema["required"],
            json!(["nodes", "description", "complexity"])
        );
        assert_eq!(
            schema["properties"]["complexity"]["enum"],
            json!(["Beginner", "Intermediate", "Advanced", "Expert"])
        );
    }

    #[test]
    fn test_response_to_suggestion() {
        let raw = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [
                        { "text": "{\"nodes\":[\"Webhook\",\"Filter\"," },
                        { "text": "\"Discord\"],\"description\":\"d\",\"complexity\":\"Intermediate\"}" }
                    ]
                },
                "finishReason": "STOP"
            }]
        });
        let resp: GenerateContentResponse = serde_json::from_value(raw).unwrap();
        assert_eq!(resp.candidates[0].finish_reason.as_deref(), Some("STOP"));

        let s = resp.into_suggestion().unwrap();
        assert_eq!(s.nodes, ["Webhook", "Filter", "Discord"]);
        assert_eq!(s.complexity, Complexity::Intermediate);
    }

    #[test]
    fn test_empty_and_blocked_responses() {
        let empty: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(empty.into_suggestion(), Err(SuggestError::EmptyResponse));

        let blocked: GenerateContentResponse =
            serde_json::from_str(r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#).unwrap();
        assert!(matches!(
            blocked.into_suggestion(),
            Err(SuggestError::Upstream { message, .. }) if message.contains("SAFETY")
        ));
    }

    #[test]
    fn test_upstream_message() {
        let body = r#"{"error":{"code":429,"message":"Quota exceeded","status":"RESOURCE_EXHAUSTED"}}"#;
        assert_eq!(upstream_message(body), "RESOURCE_EXHAUSTED: Quota exceeded");
        assert_eq!(upstream_message("<html>bad gateway</html>"), "<html>bad gateway</html>");
    }
}
