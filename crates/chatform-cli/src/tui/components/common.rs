//! Shared block styling

use ratatui::{
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use crate::tui::themes::Theme;

/// Rounded pane with a bold title
pub fn pane_block(title: &str, theme: &Theme) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border_color))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(theme.bg_color))
}

/// Bordered input box, highlighted when focused
pub fn field_block(label: &str, theme: &Theme, focused: bool) -> Block<'static> {
    let border = if focused {
        theme.focus_color
    } else {
        theme.border_color
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
        .title(Span::styled(
            format!(" {} ", label),
            Style::default().fg(if focused {
                theme.focus_color
            } else {
                theme.text_color
            }),
        ))
}
