//! Status bar component - bottom bar with model, endpoint, shortcuts

use chatform_core::ChatModel;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

/// Render the status bar at the bottom of the screen
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    model: ChatModel,
    endpoint: &str,
    is_loading: bool,
) {
    // Background
    let bg = Paragraph::new("").style(Style::default().bg(theme.status_bar_bg_color));
    f.render_widget(bg, area);

    let endpoint_display = shorten(endpoint, 32);
    let mut left_spans = vec![
        Span::raw(" "),
        Span::styled(endpoint_display.clone(), Style::default().fg(theme.dim_color)),
        Span::styled(" │ ", Style::default().fg(theme.dim_color)),
        Span::styled(model.label(), Style::default().fg(theme.dim_color)),
    ];
    let mut left_width = 1 + endpoint_display.width() + 3 + model.label().width();

    if is_loading {
        let text = "● streaming";
        left_width += 3 + text.width();
        left_spans.push(Span::styled(" │ ", Style::default().fg(theme.dim_color)));
        left_spans.push(Span::styled(text, Style::default().fg(theme.warning_color)));
    }

    // Split into left (fixed) and right (fill)
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(left_width as u16), Constraint::Fill(1)])
        .split(area);

    f.render_widget(Paragraph::new(Line::from(left_spans)), chunks[0]);

    // Render commands based on available width (right-aligned)
    let commands = build_commands_for_width(chunks[1].width as usize, theme, is_loading);
    f.render_widget(
        Paragraph::new(Line::from(commands)).alignment(Alignment::Right),
        chunks[1],
    );
}

/// Build command spans based on available width
/// Priority (highest to lowest): quit, send, clear, refresh, stop, focus
fn build_commands_for_width<'a>(
    width: usize,
    theme: &'a Theme,
    is_loading: bool,
) -> Vec<Span<'a>> {
    // Format: (key_text, desc_text, total_width including spaces)
    let commands: [(&str, &str, usize); 6] = [
        (" ^Q ", "quit ", 9), // highest priority
        (" ^S ", "send ", 9),
        (" ^L ", "clear ", 10),
        (" ^R ", "refresh ", 12),
        (" Esc ", "stop ", 10),
        (" Tab ", "next field ", 16), // lowest priority
    ];

    let mut spans = Vec::new();
    let mut used_width = 0;

    for (key, desc, cmd_width) in commands {
        if key == " Esc " && !is_loading {
            continue;
        }
        if used_width + cmd_width <= width {
            spans.push(Span::styled(
                key,
                Style::default().bg(theme.border_color).fg(theme.text_color),
            ));
            spans.push(Span::styled(desc, Style::default().fg(theme.dim_color)));
            used_width += cmd_width;
        }
    }

    spans
}

/// Truncate from the left, keeping the tail visible
fn shorten(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let target = max_width.saturating_sub(3);
    let mut kept: Vec<char> = Vec::new();
    let mut width = 0;
    for c in text.chars().rev() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w > target {
            break;
        }
        width += w;
        kept.push(c);
    }
    kept.reverse();
    format!("...{}", kept.into_iter().collect::<String>())
}
