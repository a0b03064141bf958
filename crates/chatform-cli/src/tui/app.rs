//! Main application
//!
//! `App` owns the page state and is its only writer. Background work (health
//! probe, chat submission) runs in spawned tasks and reports through the
//! channels in [`AsyncChannels`], which the main loop polls every frame.

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use chatform_core::{AppConfig, ChatBackend, PageState};
use crossterm::{
    event::{DisableBracketedPaste, EnableBracketedPaste, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame, Terminal,
};
use tokio_util::sync::CancellationToken;

use crate::tui::channels::AsyncChannels;
use crate::tui::components::{
    render_form, render_header, render_response, render_status_bar, ResponseMetrics,
    STACKED_FORM_HEIGHT,
};
use crate::tui::state::UiState;
use crate::tui::themes::{Theme, THEME_REGISTRY};

/// Terminal width at which form and response sit side by side
const WIDE_LAYOUT_MIN_WIDTH: u16 = 100;

/// Frame interval of the main loop
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct App {
    pub(crate) page: PageState,
    pub(crate) ui: UiState,
    pub(crate) channels: AsyncChannels,
    pub(crate) backend: Arc<dyn ChatBackend>,
    /// Root token; every background task runs under a child of it
    pub(crate) cancel: CancellationToken,
    pub(crate) theme: &'static Theme,
    /// Base URL shown in the status bar
    pub(crate) endpoint: String,
    pub(crate) response_metrics: ResponseMetrics,
    pub(crate) should_quit: bool,
    needs_redraw: bool,
}

impl App {
    pub fn new(config: &AppConfig, backend: Arc<dyn ChatBackend>) -> Self {
        let theme = THEME_REGISTRY.get_or_default(config.theme());
        tracing::info!("Using theme: {} ({})", theme.display_name, theme.name);

        Self {
            page: PageState::new(config.model()),
            ui: UiState::default(),
            channels: AsyncChannels::default(),
            backend,
            cancel: CancellationToken::new(),
            theme,
            endpoint: config.base_url().to_string(),
            response_metrics: ResponseMetrics::default(),
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Poll background work; returns true when state changed
    pub fn tick(&mut self) -> bool {
        let health = self.poll_health();
        let submit = self.poll_submit();
        health || submit
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        // Probe once on start
        self.start_health_check();

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        // Stop background work before the terminal goes away
        self.cancel.cancel();

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableBracketedPaste
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            if self.tick() {
                self.needs_redraw = true;
            }

            // Only render if something changed
            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            tokio::select! {
                biased; // Prefer events over timeout when both are ready

                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Paste(text) => {
                                self.handle_paste(&text);
                                self.needs_redraw = true;
                            }
                            Event::Resize(_, _) => {
                                self.needs_redraw = true;
                            }
                            _ => {}
                        },
                        Some(Err(e)) => {
                            tracing::warn!("Terminal event error: {}", e);
                        }
                        None => {
                            tracing::info!("Terminal event stream closed");
                            self.should_quit = true;
                        }
                    }
                }
                _ = tokio::time::sleep(FRAME_INTERVAL) => {
                    // Timeout - continue loop to poll background work
                }
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }

    /// Draw one frame
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        f.render_widget(
            Block::default().style(Style::default().bg(self.theme.bg_color)),
            area,
        );

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Fill(1),
                Constraint::Length(1),
            ])
            .split(area);

        render_header(f, rows[0], self.theme, &self.page.api_status);

        let body = if area.width >= WIDE_LAYOUT_MIN_WIDTH {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(rows[1])
        } else {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(STACKED_FORM_HEIGHT),
                    Constraint::Fill(1),
                ])
                .split(rows[1])
        };

        render_form(f, body[0], self.theme, &self.page, &self.ui);
        self.response_metrics = render_response(
            f,
            body[1],
            self.theme,
            &self.page,
            &mut self.ui.response_scroll_back,
            self.response_metrics,
        );

        render_status_bar(
            f,
            rows[2],
            self.theme,
            self.page.form.model,
            &self.endpoint,
            self.page.is_loading,
        );
    }
}

impl Drop for App {
    fn drop(&mut self) {
        // Ends any stream still bound to this view
        self.cancel.cancel();
    }
}
