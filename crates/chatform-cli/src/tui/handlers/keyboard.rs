//! Keyboard event handlers

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::App;
use crate::tui::input::InputAction;
use crate::tui::state::Focus;

/// Lines moved per PageUp/PageDown in the response pane
const PAGE_SCROLL_LINES: usize = 5;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        let is_press =
            key_event.kind == KeyEventKind::Press || key_event.kind == KeyEventKind::Repeat;
        if !is_press {
            return;
        }
        let code = key_event.code;
        let modifiers = key_event.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL) {
            match code {
                KeyCode::Char('q') | KeyCode::Char('c') => {
                    self.should_quit = true;
                    return;
                }
                KeyCode::Char('s') => {
                    self.start_submit();
                    return;
                }
                KeyCode::Char('l') => {
                    self.clear_form();
                    return;
                }
                KeyCode::Char('r') => {
                    self.start_health_check();
                    return;
                }
                _ => {}
            }
        }

        match code {
            KeyCode::Tab => {
                self.ui.focus = self.ui.focus.next();
                return;
            }
            KeyCode::BackTab => {
                self.ui.focus = self.ui.focus.prev();
                return;
            }
            KeyCode::Esc => {
                self.stop_submit();
                return;
            }
            KeyCode::PageUp => {
                self.ui.response_scroll_back = (self.ui.response_scroll_back + PAGE_SCROLL_LINES)
                    .min(self.response_metrics.max_scroll_back());
                return;
            }
            KeyCode::PageDown => {
                self.ui.response_scroll_back =
                    self.ui.response_scroll_back.saturating_sub(PAGE_SCROLL_LINES);
                return;
            }
            _ => {}
        }

        match self.ui.focus {
            Focus::Model => self.handle_model_key(code),
            Focus::Send => {
                if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.start_submit();
                }
            }
            Focus::Clear => {
                if matches!(code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.clear_form();
                }
            }
            focus => {
                if let Some((editor, text)) = self.ui.editors.field_mut(focus, &mut self.page.form)
                {
                    if editor.handle_key(text, code, modifiers) == InputAction::Confirm {
                        self.ui.focus = focus.next();
                    }
                }
            }
        }
    }

    fn handle_model_key(&mut self, code: KeyCode) {
        let model = &mut self.page.form.model;
        match code {
            KeyCode::Left | KeyCode::Up => *model = model.prev(),
            KeyCode::Right | KeyCode::Down | KeyCode::Char(' ') => *model = model.next(),
            KeyCode::Enter => self.ui.focus = self.ui.focus.next(),
            _ => {}
        }
    }

    /// Insert pasted text into the focused field
    pub fn handle_paste(&mut self, text: &str) {
        if let Some((editor, field)) = self.ui.editors.field_mut(self.ui.focus, &mut self.page.form)
        {
            editor.insert_str(field, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chatform_core::ChatModel;

    use super::*;
    use crate::tui::app::test_support::*;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[tokio::test]
    async fn test_fill_form_by_keyboard_and_submit() {
        let backend = Arc::new(FakeBackend::streaming(vec!["Hi ", "there"]));
        let mut app = online_app(backend.clone()).await;

        type_str(&mut app, "Be brief.");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.ui.focus, Focus::UserMessage);
        type_str(&mut app, "Hello");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.page.form.model, ChatModel::Gpt4);
        press(&mut app, KeyCode::Tab);
        app.handle_paste("sk-pasted\n");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.ui.focus, Focus::Send);

        press(&mut app, KeyCode::Enter);
        assert!(app.page.is_loading);
        settle(&mut app, |a| !a.page.is_loading).await;

        assert_eq!(app.page.response, "Hi there");
        let requests = backend.requests.lock().unwrap();
        assert_eq!(requests[0].developer_message, "Be brief.");
        assert_eq!(requests[0].user_message, "Hello");
        assert_eq!(requests[0].model, "gpt-4");
        assert_eq!(requests[0].api_key, "sk-pasted");
    }

    #[tokio::test]
    async fn test_shift_enter_adds_newline() {
        let mut app = app_with(Arc::new(FakeBackend::streaming(vec![])));
        type_str(&mut app, "a");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::SHIFT));
        type_str(&mut app, "b");
        assert_eq!(app.page.form.developer_message, "a\nb");
        assert_eq!(app.ui.focus, Focus::DeveloperMessage);
    }

    #[tokio::test]
    async fn test_ctrl_shortcuts() {
        let mut app = online_app(Arc::new(FakeBackend::streaming(vec![]))).await;
        type_str(&mut app, "dev");
        ctrl(&mut app, 's');
        assert_eq!(
            app.page.error.as_deref(),
            Some("Please fill in all required fields")
        );

        ctrl(&mut app, 'l');
        assert_eq!(app.page.error, None);
        assert!(app.page.form.developer_message.is_empty());

        ctrl(&mut app, 'r');
        assert!(app.page.api_status.checking);

        ctrl(&mut app, 'q');
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_model_selector_wraps() {
        let mut app = app_with(Arc::new(FakeBackend::streaming(vec![])));
        app.ui.focus = Focus::Model;
        press(&mut app, KeyCode::Left);
        assert_eq!(app.page.form.model, ChatModel::Gpt4Turbo);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.page.form.model, ChatModel::Gpt41Mini);
    }

    #[tokio::test]
    async fn test_release_events_are_ignored() {
        let mut app = app_with(Arc::new(FakeBackend::streaming(vec![])));
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.handle_key(release);
        assert!(app.page.form.developer_message.is_empty());
    }

    #[tokio::test]
    async fn test_page_scroll_is_clamped() {
        let mut app = app_with(Arc::new(FakeBackend::streaming(vec![])));
        app.page.response = (0..100).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        render(&mut app, 120, 32);

        for _ in 0..100 {
            press(&mut app, KeyCode::PageUp);
        }
        assert_eq!(
            app.ui.response_scroll_back,
            app.response_metrics.max_scroll_back()
        );
        press(&mut app, KeyCode::PageDown);
        assert_eq!(
            app.ui.response_scroll_back,
            app.response_metrics.max_scroll_back() - 5
        );
    }
}
