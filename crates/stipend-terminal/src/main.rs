//! Stipend operator console.
//!
//! Terminal console for the Stipend rewards platform. All persistent state
//! lives in the platform's document store; this binary opens the local
//! JSON-backed store adapter and runs the TUI shell over it.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use stipend_store::{AdminService, JsonFileStore};
use stipend_terminal::ConsoleApp;

#[derive(Parser)]
#[command(name = "stipend-admin")]
#[command(about = "Stipend - rewards platform operator console", long_about = None)]
struct Cli {
    /// JSON snapshot file backing the store
    #[arg(short, long, default_value = "stipend-data.json")]
    data: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let store = JsonFileStore::open(&cli.data).await?;
    let service = AdminService::new(Arc::new(store));

    let mut app = ConsoleApp::new(service);
    app.run().await?;
    Ok(())
}
