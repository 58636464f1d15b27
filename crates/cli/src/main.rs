//! paperchat CLI
//!
//! Main entry point for the paperchat command-line tool.
//! Search arXiv for papers and chat with them through a RAG pipeline.

mod commands;

use clap::{Parser, Subcommand};
use commands::{AskCommand, ChatCommand, SearchCommand};
use paperchat_core::{config::AppConfig, logging, AppResult};
use std::path::PathBuf;

/// paperchat - ask questions about arXiv papers from your terminal
#[derive(Parser, Debug)]
#[command(name = "paperchat")]
#[command(about = "Ask questions about arXiv papers from your terminal", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, env = "PAPERCHAT_CONFIG")]
    config: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "RUST_LOG")]
    log_level: Option<String>,

    /// Enable verbose output (sets log level to debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// LLM provider (huggingface, openai-compatible)
    #[arg(short, long, global = true, env = "PAPERCHAT_PROVIDER")]
    provider: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "PAPERCHAT_MODEL")]
    model: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Search arXiv for papers on a topic
    Search(SearchCommand),

    /// Ask a single question about a paper
    Ask(AskCommand),

    /// Start an interactive QA session with a paper
    Chat(ChatCommand),
}

#[tokio::main]
async fn main() -> AppResult<()> {
    // Parse command-line arguments first (needed for logging config)
    let cli = Cli::parse();

    // Load base configuration from environment
    let config = AppConfig::load()?;

    // Apply CLI overrides
    let config = config.with_overrides(
        cli.config,
        cli.provider,
        cli.model,
        cli.log_level,
        cli.verbose,
        cli.no_color,
    );

    // Initialize logging with final configuration
    logging::init_logging(config.log_level.as_deref(), config.no_color)?;

    tracing::info!("paperchat starting");
    tracing::debug!("Provider: {}", config.provider);
    tracing::debug!("Model: {}", config.model);

    config.validate()?;

    let command_name = match &cli.command {
        Commands::Search(_) => "search",
        Commands::Ask(_) => "ask",
        Commands::Chat(_) => "chat",
    };
    let _span = tracing::info_span!("command", name = command_name).entered();

    // Route to command handlers
    let result = match cli.command {
        Commands::Search(cmd) => cmd.execute(&config).await,
        Commands::Ask(cmd) => cmd.execute(&config).await,
        Commands::Chat(cmd) => cmd.execute(&config).await,
    };

    match &result {
        Ok(_) => tracing::info!("Command completed successfully"),
        Err(e) => tracing::error!("Command failed: {}", e),
    }

    result
}
