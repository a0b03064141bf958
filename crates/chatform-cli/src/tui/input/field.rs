//! Cursor editing over a `String` owned elsewhere
//!
//! The form text lives in `PageState`; a `FieldEditor` only tracks where the
//! cursor is and applies key presses to the borrowed string.

use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::style::Style;
use ratatui::text::{Line, Span};

/// Result of handling a key in a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Text changed
    Changed,
    /// Only the cursor moved
    Moved,
    /// Enter without a newline modifier
    Confirm,
    /// Key not handled by the field
    Ignored,
}

/// Cursor state for one text field
///
/// The default is a plain single-line field.
#[derive(Debug, Clone, Default)]
pub struct FieldEditor {
    /// Byte offset into the text, always on a char boundary
    cursor: usize,
    multiline: bool,
    masked: bool,
}

impl FieldEditor {
    pub fn multi_line() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Single-line field rendered as bullets
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Pull the cursor back inside `text` after an outside change
    pub fn clamp(&mut self, text: &str) {
        let mut cursor = self.cursor.min(text.len());
        while !text.is_char_boundary(cursor) {
            cursor -= 1;
        }
        self.cursor = cursor;
    }

    pub fn handle_key(
        &mut self,
        text: &mut String,
        code: KeyCode,
        modifiers: KeyModifiers,
    ) -> InputAction {
        self.clamp(text);

        match code {
            KeyCode::Enter => {
                if self.multiline
                    && (modifiers.contains(KeyModifiers::SHIFT)
                        || modifiers.contains(KeyModifiers::ALT))
                {
                    self.insert_str(text, "\n");
                    InputAction::Changed
                } else {
                    InputAction::Confirm
                }
            }
            KeyCode::Char(c)
                if !modifiers.contains(KeyModifiers::CONTROL)
                    && !modifiers.contains(KeyModifiers::ALT) =>
            {
                text.insert(self.cursor, c);
                self.cursor += c.len_utf8();
                InputAction::Changed
            }
            KeyCode::Backspace => match prev_boundary(text, self.cursor) {
                Some(prev) => {
                    text.replace_range(prev..self.cursor, "");
                    self.cursor = prev;
                    InputAction::Changed
                }
                None => InputAction::Ignored,
            },
            KeyCode::Delete => match next_boundary(text, self.cursor) {
                Some(next) => {
                    text.replace_range(self.cursor..next, "");
                    InputAction::Changed
                }
                None => InputAction::Ignored,
            },
            KeyCode::Left => self.move_to(prev_boundary(text, self.cursor)),
            KeyCode::Right => self.move_to(next_boundary(text, self.cursor)),
            KeyCode::Home => {
                let start = text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
                self.move_to(Some(start))
            }
            KeyCode::End => {
                let end = text[self.cursor..]
                    .find('\n')
                    .map_or(text.len(), |i| self.cursor + i);
                self.move_to(Some(end))
            }
            _ => InputAction::Ignored,
        }
    }

    /// Insert pasted text at the cursor
    ///
    /// Line breaks are kept in multi-line fields and dropped elsewhere.
    pub fn insert_str(&mut self, text: &mut String, s: &str) {
        self.clamp(text);
        let cleaned = if self.multiline {
            s.replace("\r\n", "\n").replace('\r', "\n")
        } else {
            s.chars().filter(|c| *c != '\n' && *c != '\r').collect()
        };
        text.insert_str(self.cursor, &cleaned);
        self.cursor += cleaned.len();
    }

    fn move_to(&mut self, position: Option<usize>) -> InputAction {
        match position {
            Some(p) if p != self.cursor => {
                self.cursor = p;
                InputAction::Moved
            }
            _ => InputAction::Ignored,
        }
    }

    /// Build display lines, drawing a block cursor when `cursor_style` is set
    pub fn lines(
        &self,
        text: &str,
        style: Style,
        cursor_style: Option<Style>,
    ) -> Vec<Line<'static>> {
        let display: String = if self.masked {
            "•".repeat(text.chars().count())
        } else {
            text.to_string()
        };
        // Byte offset of the cursor within `display`
        let cursor = if self.masked {
            text[..self.cursor.min(text.len())].chars().count() * '•'.len_utf8()
        } else {
            self.cursor.min(text.len())
        };

        let mut lines = Vec::new();
        let mut offset = 0;
        for raw in display.split('\n') {
            let end = offset + raw.len();
            let line = match cursor_style {
                Some(cursor_style) if cursor >= offset && cursor <= end => {
                    let at = cursor - offset;
                    let (before, rest) = raw.split_at(at);
                    let mut chars = rest.chars();
                    let under = chars.next().map_or(" ".to_string(), String::from);
                    let after = chars.as_str().to_string();
                    Line::from(vec![
                        Span::styled(before.to_string(), style),
                        Span::styled(under, cursor_style),
                        Span::styled(after, style),
                    ])
                }
                _ => Line::from(Span::styled(raw.to_string(), style)),
            };
            lines.push(line);
            offset = end + 1;
        }
        lines
    }
}

fn prev_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[..cursor].char_indices().next_back().map(|(i, _)| i)
}

fn next_boundary(text: &str, cursor: usize) -> Option<usize> {
    text[cursor..].chars().next().map(|c| cursor + c.len_utf8())
}
