//! View-only state
//!
//! Everything here is presentation: focus, cursors and scroll. The form data
//! itself lives in `chatform_core::PageState`.

mod focus;

pub use focus::Focus;

use chatform_core::FormData;

use crate::tui::input::FieldEditor;

/// Cursor editors for the three text fields
#[derive(Debug, Clone)]
pub struct FieldEditors {
    pub developer_message: FieldEditor,
    pub user_message: FieldEditor,
    pub api_key: FieldEditor,
}

impl Default for FieldEditors {
    fn default() -> Self {
        Self {
            developer_message: FieldEditor::multi_line(),
            user_message: FieldEditor::multi_line(),
            api_key: FieldEditor::masked(),
        }
    }
}

impl FieldEditors {
    /// Editor and text for a focused text field
    pub fn field_mut<'a>(
        &'a mut self,
        focus: Focus,
        form: &'a mut FormData,
    ) -> Option<(&'a mut FieldEditor, &'a mut String)> {
        match focus {
            Focus::DeveloperMessage => {
                Some((&mut self.developer_message, &mut form.developer_message))
            }
            Focus::UserMessage => Some((&mut self.user_message, &mut form.user_message)),
            Focus::ApiKey => Some((&mut self.api_key, &mut form.api_key)),
            _ => None,
        }
    }

    /// Re-sync cursors after the form was changed outside the editors
    pub fn clamp_all(&mut self, form: &FormData) {
        self.developer_message.clamp(&form.developer_message);
        self.user_message.clamp(&form.user_message);
        self.api_key.clamp(&form.api_key);
    }
}

/// Presentation state owned by the app
#[derive(Debug, Clone, Default)]
pub struct UiState {
    pub focus: Focus,
    pub editors: FieldEditors,
    /// Lines scrolled back from the bottom of the response; 0 follows the tail
    pub response_scroll_back: usize,
}
