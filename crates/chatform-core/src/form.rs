//! Chat form data and request payload

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// Models offered by the form's selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChatModel {
    #[default]
    #[serde(rename = "gpt-4.1-mini")]
    Gpt41Mini,
    #[serde(rename = "gpt-4")]
    Gpt4,
    #[serde(rename = "gpt-3.5-turbo")]
    Gpt35Turbo,
    #[serde(rename = "gpt-4-turbo")]
    Gpt4Turbo,
}

impl ChatModel {
    /// All selectable models in display order
    pub fn all() -> &'static [ChatModel] {
        &[
            ChatModel::Gpt41Mini,
            ChatModel::Gpt4,
            ChatModel::Gpt35Turbo,
            ChatModel::Gpt4Turbo,
        ]
    }

    /// Model identifier sent to the backend
    pub fn id(&self) -> &'static str {
        match self {
            ChatModel::Gpt41Mini => "gpt-4.1-mini",
            ChatModel::Gpt4 => "gpt-4",
            ChatModel::Gpt35Turbo => "gpt-3.5-turbo",
            ChatModel::Gpt4Turbo => "gpt-4-turbo",
        }
    }

    /// Human-readable label for the selector
    pub fn label(&self) -> &'static str {
        match self {
            ChatModel::Gpt41Mini => "GPT-4.1 Mini",
            ChatModel::Gpt4 => "GPT-4",
            ChatModel::Gpt35Turbo => "GPT-3.5 Turbo",
            ChatModel::Gpt4Turbo => "GPT-4 Turbo",
        }
    }

    fn position(&self) -> usize {
        Self::all().iter().position(|m| m == self).unwrap_or(0)
    }

    /// Next model in the selector, wrapping around
    pub fn next(&self) -> Self {
        let all = Self::all();
        all[(self.position() + 1) % all.len()]
    }

    /// Previous model in the selector, wrapping around
    pub fn prev(&self) -> Self {
        let all = Self::all();
        all[(self.position() + all.len() - 1) % all.len()]
    }
}

impl fmt::Display for ChatModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ChatModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .find(|m| m.id() == s)
            .copied()
            .ok_or_else(|| {
                let known: Vec<&str> = Self::all().iter().map(|m| m.id()).collect();
                format!("unknown model '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Current values of the four form inputs
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormData {
    pub developer_message: String,
    pub user_message: String,
    pub model: ChatModel,
    pub api_key: String,
}

// The API key must never reach logs.
impl fmt::Debug for FormData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormData")
            .field("developer_message", &self.developer_message)
            .field("user_message", &self.user_message)
            .field("model", &self.model)
            .field(
                "api_key",
                &if self.api_key.is_empty() {
                    ""
                } else {
                    "<redacted>"
                },
            )
            .finish()
    }
}

impl FormData {
    /// Create an empty form with the given model selected
    pub fn with_model(model: ChatModel) -> Self {
        Self {
            model,
            ..Self::default()
        }
    }

    /// True when every required field has content
    ///
    /// Whitespace-only input counts as empty.
    pub fn is_complete(&self) -> bool {
        [&self.developer_message, &self.user_message, &self.api_key]
            .iter()
            .all(|field| !field.trim().is_empty())
    }

    /// Validate and build the request payload
    pub fn to_request(&self) -> Result<ChatRequest, ChatError> {
        if !self.is_complete() {
            return Err(ChatError::Validation);
        }
        Ok(ChatRequest {
            developer_message: self.developer_message.clone(),
            user_message: self.user_message.clone(),
            model: self.model.id().to_string(),
            api_key: self.api_key.clone(),
        })
    }

    /// Reset the two message fields, keeping model and API key
    pub fn clear_messages(&mut self) {
        self.developer_message.clear();
        self.user_message.clear();
    }
}

/// JSON body of `POST /api/chat`
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub developer_message: String,
    pub user_message: String,
    pub model: String,
    pub api_key: String,
}

impl fmt::Debug for ChatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatRequest")
            .field("developer_message_len", &self.developer_message.len())
            .field("user_message_len", &self.user_message.len())
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormData {
        FormData {
            developer_message: "You are terse.".to_string(),
            user_message: "Say hi".to_string(),
            model: ChatModel::Gpt4,
            api_key: "sk-test".to_string(),
        }
    }

    #[test]
    fn test_default_model_is_gpt_41_mini() {
        assert_eq!(FormData::default().model, ChatModel::Gpt41Mini);
        assert_eq!(ChatModel::default().id(), "gpt-4.1-mini");
    }

    #[test]
    fn test_model_cycle_wraps() {
        assert_eq!(ChatModel::Gpt4Turbo.next(), ChatModel::Gpt41Mini);
        assert_eq!(ChatModel::Gpt41Mini.prev(), ChatModel::Gpt4Turbo);
        assert_eq!(ChatModel::Gpt4.next(), ChatModel::Gpt35Turbo);
    }

    #[test]
    fn test_model_from_str() {
        assert_eq!("gpt-3.5-turbo".parse::<ChatModel>(), Ok(ChatModel::Gpt35Turbo));
        let err = "gpt-5".parse::<ChatModel>().unwrap_err();
        assert!(err.contains("gpt-4.1-mini"));
    }

    #[test]
    fn test_missing_fields_fail_validation() {
        let clears: [fn(&mut FormData); 3] = [
            |f| f.developer_message.clear(),
            |f| f.user_message.clear(),
            |f| f.api_key = "   ".to_string(),
        ];
        for clear in clears {
            let mut form = filled();
            clear(&mut form);
            assert!(!form.is_complete());
            assert!(matches!(form.to_request(), Err(ChatError::Validation)));
        }
    }

    #[test]
    fn test_request_json_shape() {
        let request = filled().to_request().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "developer_message": "You are terse.",
                "user_message": "Say hi",
                "model": "gpt-4",
                "api_key": "sk-test",
            })
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let form = filled();
        let printed = format!("{:?}", form);
        assert!(!printed.contains("sk-test"));
        assert!(printed.contains("<redacted>"));

        let request = form.to_request().unwrap();
        assert!(!format!("{:?}", request).contains("sk-test"));
    }

    #[test]
    fn test_clear_messages_keeps_model_and_key() {
        let mut form = filled();
        form.clear_messages();
        assert!(form.developer_message.is_empty());
        assert!(form.user_message.is_empty());
        assert_eq!(form.model, ChatModel::Gpt4);
        assert_eq!(form.api_key, "sk-test");
    }
}
