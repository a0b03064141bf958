//! Form pane - the four inputs and the two buttons

use chatform_core::{ChatModel, PageState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use super::common::{field_block, pane_block};
use crate::tui::input::FieldEditor;
use crate::tui::state::{Focus, UiState};
use crate::tui::themes::Theme;

pub const FORM_TITLE: &str = "Chat Configuration";
pub const API_KEY_NOTE: &str = "Your API key is not stored and only used for this request";

/// Form pane height when stacked above the response
pub const STACKED_FORM_HEIGHT: u16 = 20;

pub fn render_form(f: &mut Frame, area: Rect, theme: &Theme, page: &PageState, ui: &UiState) {
    let block = pane_block(FORM_TITLE, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // developer message
            Constraint::Min(3),    // user message
            Constraint::Length(3), // model
            Constraint::Length(3), // api key
            Constraint::Length(1), // note
            Constraint::Length(1), // buttons
        ])
        .split(inner);

    render_text_field(
        f,
        rows[0],
        theme,
        "Developer Message*",
        "Enter the system/developer message...",
        &page.form.developer_message,
        &ui.editors.developer_message,
        ui.focus == Focus::DeveloperMessage,
    );
    render_text_field(
        f,
        rows[1],
        theme,
        "User Message*",
        "Enter the user message...",
        &page.form.user_message,
        &ui.editors.user_message,
        ui.focus == Focus::UserMessage,
    );
    render_model_selector(f, rows[2], theme, page.form.model, ui.focus == Focus::Model);
    render_text_field(
        f,
        rows[3],
        theme,
        "OpenAI API Key*",
        "sk-...",
        &page.form.api_key,
        &ui.editors.api_key,
        ui.focus == Focus::ApiKey,
    );

    f.render_widget(
        Paragraph::new(Span::styled(
            API_KEY_NOTE,
            Style::default()
                .fg(theme.dim_color)
                .add_modifier(Modifier::ITALIC),
        )),
        rows[4],
    );

    render_buttons(f, rows[5], theme, page, ui.focus);
}

#[allow(clippy::too_many_arguments)]
fn render_text_field(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    label: &str,
    placeholder: &str,
    text: &str,
    editor: &FieldEditor,
    focused: bool,
) {
    let block = field_block(label, theme, focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text_style = Style::default().fg(theme.text_color);
    let lines = if text.is_empty() && !focused {
        vec![Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(theme.dim_color),
        ))]
    } else {
        let cursor_style = focused.then(|| text_style.add_modifier(Modifier::REVERSED));
        editor.lines(text, text_style, cursor_style)
    };

    // Keep the cursor line in view once the text outgrows the box
    let cursor_line = text[..editor.cursor().min(text.len())].matches('\n').count();
    let scroll = (cursor_line as u16).saturating_sub(inner.height.saturating_sub(1));

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        inner,
    );
}

fn render_model_selector(f: &mut Frame, area: Rect, theme: &Theme, model: ChatModel, focused: bool) {
    let block = field_block("Model", theme, focused);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let arrow_style = Style::default().fg(if focused {
        theme.focus_color
    } else {
        theme.dim_color
    });
    let line = Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(
            model.label(),
            Style::default()
                .fg(theme.accent_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!(" ({})", model.id()), Style::default().fg(theme.dim_color)),
        Span::styled(" ▶", arrow_style),
    ]);
    f.render_widget(Paragraph::new(line), inner);
}

fn render_buttons(f: &mut Frame, area: Rect, theme: &Theme, page: &PageState, focus: Focus) {
    let send_label = if page.is_loading {
        "Sending..."
    } else {
        "Send Message"
    };
    let send_enabled = page.can_submit();

    let button = |label: &str, focused: bool, enabled: bool| {
        let mut style = if enabled {
            Style::default().fg(theme.text_color).bg(theme.border_color)
        } else {
            Style::default().fg(theme.dim_color)
        };
        if focused {
            style = style
                .fg(theme.bg_color)
                .bg(theme.focus_color)
                .add_modifier(Modifier::BOLD);
        }
        Span::styled(format!(" {} ", label), style)
    };

    let line = Line::from(vec![
        button(send_label, focus == Focus::Send, send_enabled),
        Span::raw("  "),
        button("Clear", focus == Focus::Clear, true),
    ]);
    f.render_widget(Paragraph::new(line), area);
}
