//! chatform - terminal chat form with streaming responses
//!
//! Collects a developer message, a user message, a model and an API key,
//! posts them to a chat backend and renders the streamed reply as it arrives.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use chatform_core::{paths, AppConfig, ChatClient, ChatModel};

mod tui;

/// chatform - Chat Form Client
#[derive(Parser)]
#[command(name = "chatform")]
#[command(about = "Terminal chat form with streaming responses", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Backend base URL (overrides config and CHATFORM_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Preselected model
    #[arg(short, long, global = true)]
    model: Option<ChatModel>,

    /// Theme name
    #[arg(short, long, global = true)]
    theme: Option<String>,

    /// Config file (defaults to ~/.chatform/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the chat form
    Chat,

    /// Probe the backend health endpoint once
    Health,

    /// List available themes
    Themes,
}

/// Restore terminal state - called on panic or unexpected exit
fn restore_terminal() {
    use crossterm::{
        event::DisableBracketedPaste,
        execute,
        terminal::{disable_raw_mode, LeaveAlternateScreen},
    };
    let _ = disable_raw_mode();
    let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableBracketedPaste);
}

/// Log to a file so the TUI is never written over
fn init_logging() {
    let log_dir = paths::logs_dir();
    std::fs::create_dir_all(&log_dir).ok();

    #[cfg(unix)]
    let null_device = "/dev/null";
    #[cfg(windows)]
    let null_device = "NUL";

    let Some(log_file) = std::fs::File::create(log_dir.join("chatform.log"))
        .or_else(|_| std::fs::File::create(null_device))
        .ok()
    else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Set up panic hook to restore terminal state
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    init_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    config.merge_flags(cli.base_url, cli.model, cli.theme);
    let client = ChatClient::new(config.client_config()?);
    tracing::info!("Backend: {}", config.base_url());

    match cli.command {
        Some(Commands::Themes) => {
            println!("Available themes ({}):", tui::THEME_REGISTRY.count());
            for (name, theme) in tui::THEME_REGISTRY.list() {
                println!("  {} - {}", name, theme.display_name);
            }
        }
        Some(Commands::Health) => {
            let status = client.check_health().await;
            println!("{}", status.label());
            if !status.is_online {
                return Ok(ExitCode::FAILURE);
            }
        }
        Some(Commands::Chat) | None => {
            if tui::THEME_REGISTRY.get(config.theme()).is_none() {
                tracing::warn!("Unknown theme '{}', using default", config.theme());
            }
            let mut app = tui::App::new(&config, Arc::new(client));
            app.run().await?;
        }
    }

    Ok(ExitCode::SUCCESS)
}
