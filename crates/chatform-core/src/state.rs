//! Page state and its transitions
//!
//! `PageState` is the single owner of everything the view renders. All
//! mutation happens through the handler methods below; async work reports
//! back through [`PageState::finish_health`] and [`PageState::apply`].

use tracing::{debug, info, warn};

use crate::constants;
use crate::error::ChatError;
use crate::form::{ChatModel, ChatRequest, FormData};
use crate::status::ApiStatus;
use crate::submit::SubmitEvent;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageState {
    pub form: FormData,
    pub api_status: ApiStatus,
    /// Streamed response text, reset at the start of every submission
    pub response: String,
    pub error: Option<String>,
    pub is_loading: bool,
}

impl PageState {
    pub fn new(model: ChatModel) -> Self {
        Self {
            form: FormData::with_model(model),
            ..Self::default()
        }
    }

    /// Submission is allowed only when idle and the API is online
    pub fn can_submit(&self) -> bool {
        !self.is_loading && self.api_status.is_online && !self.api_status.checking
    }

    /// Mark a health probe as in flight
    pub fn begin_health(&mut self) {
        self.api_status = ApiStatus::checking();
    }

    /// Record a finished health probe
    pub fn finish_health(&mut self, status: ApiStatus) {
        info!("API status: {}", status.label());
        self.api_status = status;
    }

    /// Start a submission
    ///
    /// Returns the request to send, or `None` when nothing should be sent:
    /// either the gate is closed or validation failed (which sets the error).
    pub fn begin_submit(&mut self) -> Option<ChatRequest> {
        if !self.can_submit() {
            debug!(
                "Submit ignored (loading: {}, online: {})",
                self.is_loading, self.api_status.is_online
            );
            return None;
        }

        match self.form.to_request() {
            Ok(request) => {
                self.error = None;
                self.response.clear();
                self.is_loading = true;
                Some(request)
            }
            Err(e) => {
                self.fail(&e);
                None
            }
        }
    }

    /// Apply one event from the running submission
    pub fn apply(&mut self, event: SubmitEvent) {
        match event {
            SubmitEvent::Chunk(text) => self.response.push_str(&text),
            SubmitEvent::Completed => {
                debug!("Response complete: {} bytes", self.response.len());
                self.is_loading = false;
            }
            SubmitEvent::Failed(message) => {
                self.error = Some(if message.trim().is_empty() {
                    constants::chat::GENERIC_FAILURE_MESSAGE.to_string()
                } else {
                    message
                });
                self.is_loading = false;
            }
        }
    }

    /// Record an error that happened before any event stream existed
    pub fn fail(&mut self, error: &ChatError) {
        if error.is_validation() {
            debug!("Form incomplete, nothing sent");
        } else {
            warn!("Submission failed: {}", error);
        }
        self.error = Some(error.to_string());
        self.is_loading = false;
    }

    /// Reset response, error and both messages; model and API key stay
    pub fn clear(&mut self) {
        self.response.clear();
        self.error = None;
        self.form.clear_messages();
    }

    /// Stop tracking the running submission without an error
    pub fn abandon_submit(&mut self) {
        self.is_loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready() -> PageState {
        let mut state = PageState::new(ChatModel::Gpt4);
        state.finish_health(ApiStatus::online());
        state.form.developer_message = "Be terse.".to_string();
        state.form.user_message = "Hi".to_string();
        state.form.api_key = "sk-abc".to_string();
        state
    }

    #[test]
    fn test_initial_state() {
        let state = PageState::new(ChatModel::Gpt35Turbo);
        assert!(state.api_status.checking);
        assert!(!state.is_loading);
        assert!(state.response.is_empty());
        assert_eq!(state.error, None);
        assert_eq!(state.form.model, ChatModel::Gpt35Turbo);
        assert!(!state.can_submit());
    }

    #[test]
    fn test_health_cycle() {
        let mut state = PageState::default();
        state.finish_health(ApiStatus::online());
        assert!(state.api_status.is_online);

        state.begin_health();
        assert_eq!(state.api_status, ApiStatus::checking());
        assert!(!state.can_submit());

        state.finish_health(ApiStatus::offline());
        assert!(!state.api_status.checking);
        assert!(!state.api_status.is_online);
    }

    #[test]
    fn test_empty_field_sets_validation_error() {
        let mut state = ready();
        state.form.api_key.clear();
        assert!(state.begin_submit().is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("Please fill in all required fields")
        );
        assert!(!state.is_loading);
    }

    #[test]
    fn test_chunks_accumulate() {
        let mut state = ready();
        state.response = "stale".to_string();
        state.error = Some("old".to_string());

        let request = state.begin_submit().unwrap();
        assert_eq!(request.model, "gpt-4");
        assert!(state.is_loading);
        assert!(state.response.is_empty());
        assert_eq!(state.error, None);

        let mut seen = Vec::new();
        for chunk in ["Hel", "lo ", "world"] {
            state.apply(SubmitEvent::Chunk(chunk.to_string()));
            seen.push(state.response.clone());
        }
        assert_eq!(seen, ["Hel", "Hello ", "Hello world"]);

        state.apply(SubmitEvent::Completed);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_second_submit_while_loading_is_ignored() {
        let mut state = ready();
        assert!(state.begin_submit().is_some());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_offline_blocks_submit() {
        let mut state = ready();
        state.finish_health(ApiStatus::offline());
        assert!(state.begin_submit().is_none());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_http_failure_leaves_buffer_empty() {
        let mut state = ready();
        state.begin_submit().unwrap();
        state.apply(SubmitEvent::Failed(
            ChatError::Http { status: 500 }.to_string(),
        ));
        assert!(state.response.is_empty());
        assert!(state.error.as_deref().is_some_and(|e| e.contains("500")));
        assert!(!state.is_loading);
    }

    #[test]
    fn test_mid_stream_failure_keeps_partial_text() {
        let mut state = ready();
        state.begin_submit().unwrap();
        state.apply(SubmitEvent::Chunk("partial".to_string()));
        state.apply(SubmitEvent::Failed("stream interrupted: reset".to_string()));
        assert_eq!(state.response, "partial");
        assert!(state.error.is_some());
    }

    #[test]
    fn test_blank_failure_uses_generic_message() {
        let mut state = ready();
        state.begin_submit().unwrap();
        state.apply(SubmitEvent::Failed(String::new()));
        assert_eq!(state.error.as_deref(), Some("An error occurred"));
    }

    #[test]
    fn test_clear_keeps_model_and_key() {
        let mut state = ready();
        state.begin_submit().unwrap();
        state.apply(SubmitEvent::Chunk("answer".to_string()));
        state.apply(SubmitEvent::Completed);
        state.error = Some("leftover".to_string());

        state.clear();
        assert!(state.response.is_empty());
        assert_eq!(state.error, None);
        assert!(state.form.developer_message.is_empty());
        assert!(state.form.user_message.is_empty());
        assert_eq!(state.form.model, ChatModel::Gpt4);
        assert_eq!(state.form.api_key, "sk-abc");
    }
}
