use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod context;
mod notifier;

use context::AppContext;

#[derive(Parser)]
#[command(name = "cimreader")]
#[command(about = "CIM Reader - upload PDFs, generate AI summaries, chat about them", long_about = None)]
struct Cli {
    /// Target the local development backend instead of production
    #[arg(long, global = true)]
    dev: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the signed-in session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Upload a PDF and generate an AI summary
    Convert {
        /// Path of the PDF to convert
        file: PathBuf,
        /// Start a chat about the document after conversion
        #[arg(long)]
        chat: bool,
    },
    /// Chat about a previously converted document
    Chat {
        /// Document id returned by a conversion
        document_id: String,
        /// Document title shown in the welcome message
        #[arg(long)]
        title: Option<String>,
    },
    /// Manage previously generated summaries
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Store a session token issued by the auth provider
    Login {
        /// Bearer token for the backend API
        #[arg(long)]
        token: String,
        /// Email of the signed-in user
        #[arg(long)]
        email: Option<String>,
    },
    /// Show the current session
    Status,
    /// Sign out and clear the stored session
    Logout,
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List your generated summaries
    List,
    /// Delete one summary
    Delete {
        /// Id of the summary to delete
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::new(cli.dev)?;

    match cli.command {
        Commands::Auth { action } => commands::auth::run(&ctx, action)?,
        Commands::Convert { file, chat } => commands::convert::run(&ctx, &file, chat).await?,
        Commands::Chat {
            document_id,
            title,
        } => commands::chat::run(&ctx, document_id, title).await?,
        Commands::History { action } => match action {
            HistoryAction::List => commands::history::list(&ctx).await?,
            HistoryAction::Delete { id } => commands::history::delete(&ctx, &id).await?,
        },
    }

    Ok(())
}
