//! Response pane - error box, streamed text or placeholder

use chatform_core::PageState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::common::pane_block;
use crate::tui::themes::Theme;

pub const RESPONSE_TITLE: &str = "AI Response";
pub const WAITING_PLACEHOLDER: &str = "Waiting for response...";
pub const EMPTY_PLACEHOLDER: &str = "Response will appear here...";

/// Wrapped size of the response text at the last render
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResponseMetrics {
    pub total_lines: usize,
    pub visible_lines: usize,
    /// Wrap width the line count was measured at
    pub width: u16,
}

impl ResponseMetrics {
    /// Furthest the view can scroll back from the tail
    pub fn max_scroll_back(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }
}

pub fn render_response(
    f: &mut Frame,
    area: Rect,
    theme: &Theme,
    page: &PageState,
    scroll_back: &mut usize,
    previous: ResponseMetrics,
) -> ResponseMetrics {
    let block = pane_block(RESPONSE_TITLE, theme);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let body = match &page.error {
        Some(error) => {
            let error_lines = wrap(&format!("Error: {}", error), inner.width.saturating_sub(2));
            let height = (error_lines.len() as u16 + 2).min(inner.height);
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(height), Constraint::Fill(1)])
                .split(inner);
            render_error(f, chunks[0], theme, error);
            chunks[1]
        }
        None => inner,
    };

    if page.response.is_empty() {
        let placeholder = if page.is_loading {
            WAITING_PLACEHOLDER
        } else {
            EMPTY_PLACEHOLDER
        };
        f.render_widget(
            Paragraph::new(Span::styled(
                placeholder,
                Style::default()
                    .fg(theme.dim_color)
                    .add_modifier(Modifier::ITALIC),
            )),
            body,
        );
        return ResponseMetrics::default();
    }

    let lines = wrap(&page.response, body.width);
    let metrics = ResponseMetrics {
        total_lines: lines.len(),
        visible_lines: body.height as usize,
        width: body.width,
    };

    // Follow the tail unless scrolled back; a scrolled-back view stays on
    // the same lines while new ones arrive below it
    if *scroll_back > 0
        && previous.width == metrics.width
        && metrics.total_lines > previous.total_lines
    {
        *scroll_back += metrics.total_lines - previous.total_lines;
    }
    *scroll_back = (*scroll_back).min(metrics.max_scroll_back());
    let top = metrics.max_scroll_back() - *scroll_back;

    let text: Vec<Line> = lines
        .into_iter()
        .skip(top)
        .take(metrics.visible_lines)
        .map(|l| Line::from(Span::styled(l, Style::default().fg(theme.text_color))))
        .collect();
    f.render_widget(Paragraph::new(text), body);

    metrics
}

fn render_error(f: &mut Frame, area: Rect, theme: &Theme, error: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.error_color));
    let text = Line::from(vec![
        Span::styled(
            "Error: ",
            Style::default()
                .fg(theme.error_color)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(error.to_string(), Style::default().fg(theme.error_color)),
    ]);
    f.render_widget(
        Paragraph::new(text)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

/// Wrap text to `width` columns, keeping blank lines
///
/// `\r\n` and lone `\r` count as line breaks.
fn wrap(text: &str, width: u16) -> Vec<String> {
    let width = (width as usize).max(1);
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .flat_map(|line| {
            if line.is_empty() {
                vec![String::new()]
            } else {
                textwrap::wrap(line, width)
                    .into_iter()
                    .map(|l| l.into_owned())
                    .collect()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_blank_lines() {
        assert_eq!(wrap("ab\n\ncd", 10), vec!["ab", "", "cd"]);
    }

    #[test]
    fn test_wrap_treats_carriage_returns_as_breaks() {
        assert_eq!(wrap("ab\r\ncd\ref", 10), vec!["ab", "cd", "ef"]);
        assert!(wrap("x\r\n", 10).iter().all(|l| !l.contains('\r')));
    }

    #[test]
    fn test_wrap_splits_long_lines() {
        let lines = wrap("hello brave new world", 11);
        assert_eq!(lines, vec!["hello brave", "new world"]);
    }

    #[test]
    fn test_max_scroll_back() {
        let metrics = ResponseMetrics {
            total_lines: 30,
            visible_lines: 10,
            ..ResponseMetrics::default()
        };
        assert_eq!(metrics.max_scroll_back(), 20);
        assert_eq!(ResponseMetrics::default().max_scroll_back(), 0);
    }
}
