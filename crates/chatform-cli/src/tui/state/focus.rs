//! Keyboard focus across the form

/// Focusable form elements in tab order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Focus {
    #[default]
    DeveloperMessage,
    UserMessage,
    Model,
    ApiKey,
    Send,
    Clear,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::DeveloperMessage,
        Focus::UserMessage,
        Focus::Model,
        Focus::ApiKey,
        Focus::Send,
        Focus::Clear,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}
