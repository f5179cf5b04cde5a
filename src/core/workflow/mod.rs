//! AI workflow assistant: prompt validation, Gemini wire format and the
//! request lifecycle of the assistant panel.

pub mod assistant;
pub mod gemini;
pub mod suggestion;

pub use assistant::AssistantState;
pub use suggestion::{
    ApiErrorBody, ApiErrorDetail, Complexity, MAX_PROMPT_CHARS, PromptError, SUGGEST_PATH,
    SuggestError, SuggestRequest, WorkflowSuggestion, parse_suggestion, validate_prompt,
};
