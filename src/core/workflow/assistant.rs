//! Request lifecycle of the workflow assistant panel

use super::suggestion::{SuggestError, WorkflowSuggestion, validate_prompt};

/// What the assistant panel shows. At most one request is in flight.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AssistantState {
    loading: bool,
    result: Option<WorkflowSuggestion>,
    notice: Option<&'static str>,
}

impl AssistantState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn result(&self) -> Option<&WorkflowSuggestion> {
        self.result.as_ref()
    }

    /// Inline notice left by the last failed request
    pub fn notice(&self) -> Option<&'static str> {
        self.notice
    }

    /// Whether the submit button is enabled for `prompt`
    pub fn can_submit(&self, prompt: &str) -> bool {
        !self.loading && validate_prompt(prompt).is_ok()
    }

    /// Start a request. Returns the prompt to send, or `None` if a request is
    /// already running or the prompt is not sendable.
    pub fn begin(&mut self, prompt: &str) -> Option<String> {
        if self.loading {
            return None;
        }
        let prompt = validate_prompt(prompt).ok()?;
        self.loading = true;
        self.notice = None;
        Some(prompt)
    }

    /// Record the outcome of the request started by [`begin`](Self::begin)
    pub fn finish(&mut self, outcome: Result<WorkflowSuggestion, SuggestError>) {
        self.loading = false;
        match outcome {
            Ok(suggestion) => {
                self.result = Some(suggestion);
                self.notice = None;
            }
            Err(err) => {
                self.result = None;
                self.notice = Some(err.user_message());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::workflow::suggestion::{Complexity, PromptError};

    fn discord() -> WorkflowSuggestion {
        WorkflowSuggestion {
            nodes: vec!["Webhook".into(), "Filter".into(), "Discord".into()],
            description: "Posts hot leads to Discord.".into(),
            complexity: Complexity::Intermediate,
        }
    }

    #[test]
    fn test_successful_request() {
        let mut state = AssistantState::new();
        assert_eq!(state.begin("sync leads to Discord").as_deref(), Some("sync leads to Discord"));
        assert!(state.is_loading());

        state.finish(Ok(discord()));
        assert!(!state.is_loading());
        let result = state.result().unwrap();
        assert_eq!(result.nodes, ["Webhook", "Filter", "Discord"]);
        assert_eq!(result.complexity.as_str(), "Intermediate");
        assert_eq!(state.notice(), None);
    }

    #[test]
    fn test_second_submit_is_ignored_while_loading() {
        let mut state = AssistantState::new();
        assert!(state.begin("first").is_some());
        assert!(!state.can_submit("second"));
        assert_eq!(state.begin("second"), None);
    }

    #[test]
    fn test_rejected_request_clears_loading_and_result() {
        let mut state = AssistantState::new();
        state.begin("one");
        state.finish(Ok(discord()));

        state.begin("two");
        state.finish(Err(SuggestError::Transport("connection reset".into())));
        assert!(!state.is_loading());
        assert!(state.result().is_none());
        assert!(state.notice().is_some());

        // A later success clears the notice
        state.begin("three");
        assert_eq!(state.notice(), None);
        state.finish(Ok(discord()));
        assert!(state.result().is_some());
    }

    #[test]
    fn test_blank_prompt_never_starts() {
        let mut state = AssistantState::new();
        assert!(!state.can_submit("   "));
        assert_eq!(state.begin("   "), None);
        assert!(!state.is_loading());
        assert_eq!(
            SuggestError::from(PromptError::Empty).user_message(),
            "Describe the workflow you need first."
        );
    }
}
