//! Header component - title, subtitle and API status indicator

use chatform_core::{ApiStatus, Health};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::tui::themes::Theme;

pub const TITLE: &str = "OpenAI Chat Interface";
pub const SUBTITLE: &str = "Interactive chat interface with streaming responses";

pub fn render_header(f: &mut Frame, area: Rect, theme: &Theme, status: &ApiStatus) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(theme.border_color));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let indicator = status_spans(status, theme);
    let indicator_width: usize = indicator.iter().map(|s| s.content.width()).sum();

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(indicator_width as u16 + 1),
        ])
        .split(inner);

    let title = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", TITLE),
            Style::default()
                .fg(theme.title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", SUBTITLE),
            Style::default().fg(theme.dim_color),
        )),
    ]);
    f.render_widget(title, chunks[0]);

    let right = Paragraph::new(vec![
        Line::from(indicator),
        Line::from(Span::styled(
            "^R refresh ",
            Style::default().fg(theme.dim_color),
        )),
    ])
    .alignment(Alignment::Right);
    f.render_widget(right, chunks[1]);
}

/// Colored dot plus label for the current health state
fn status_spans(status: &ApiStatus, theme: &Theme) -> Vec<Span<'static>> {
    let color = match status.health() {
        Health::Checking => theme.warning_color,
        Health::Online => theme.success_color,
        Health::Offline => theme.error_color,
    };
    vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::styled(
            format!("{} ", status.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]
}
