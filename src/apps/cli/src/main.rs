//! FinVerse terminal chat client.
//!
//! One concrete render layer for the FinVerse core: subscribes to the store,
//! prints messages and agent progress as they stream in, and feeds stdin
//! lines to the session controller.

mod render;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use finverse_core::{ApiClient, AppStore, ChatClient, ClientConfig};
use finverse_core_types::MessageDraft;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const WELCOME: &str = "Welcome to **FinVerse AI**\n\n\
I'm your intelligent financial operating system. I can:\n\n\
• Analyze your spending patterns\n\
• Check your budget health\n\
• Validate compliance\n\
• Search for the best deals\n\
• Look up financial policies\n\n\
Commands: /transactions, /summary, /cancel, /quit";

/// FinVerse AI terminal chat client.
#[derive(Debug, Parser)]
#[command(name = "finverse-cli", version, about = "FinVerse AI terminal chat client")]
struct Args {
    /// Backend base URL. Falls back to FINVERSE_API_URL, then localhost:8000.
    #[arg(long)]
    api_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config = config.with_base_url(url);
    }

    let store = Arc::new(AppStore::new());
    let api = ApiClient::new(config.clone());
    let chat = Arc::new(ChatClient::new(config, store.clone()));

    match api.health().await {
        Ok(health) => println!(
            "backend online at {} ({} transactions loaded)",
            api.base_url(),
            health.transactions_loaded
        ),
        Err(e) => eprintln!("warning: backend not reachable at {}: {e}", api.base_url()),
    }
    if let Err(e) = api.refresh_dashboard(&store).await {
        eprintln!("warning: could not load dashboard data: {e}");
    }

    let renderer = tokio::spawn(render::run(store.clone()));
    store.push_message(MessageDraft::assistant(WELCOME));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let input = line.trim();
        match input {
            "" => {}
            "/quit" | "/exit" => break,
            "/cancel" => chat.cancel().await,
            "/transactions" => render::print_transactions(&store),
            "/summary" => render::print_summary(&store),
            _ => {
                // Detached so /cancel stays responsive while the session
                // streams. A submit during a running session is dropped.
                let chat = chat.clone();
                let query = input.to_string();
                tokio::spawn(async move { chat.submit(&query).await });
            }
        }
    }

    renderer.abort();
    Ok(())
}
