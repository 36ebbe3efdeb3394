//! CLI administration tool for posts-service.
//!
//! Provides store diagnostics and direct post inspection without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check store connection
//! cargo run --bin admin -- db check
//!
//! # Server version and document counts
//! cargo run --bin admin -- db info
//!
//! # Print a post
//! cargo run --bin admin -- posts show 0f8c6a1e-3b8e-4d7c-9a55-5c2f8e4b1a90
//!
//! # Delete a post without prompting
//! cargo run --bin admin -- posts delete 0f8c6a1e-3b8e-4d7c-9a55-5c2f8e4b1a90 -y
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`posts_service::config`].

use posts_service::config;
use posts_service::domain::repositories::PostRepository;
use posts_service::infrastructure::persistence::PgPostRepository;
use posts_service::infrastructure::store::DocumentStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing posts-service.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect and remove posts
    Posts {
        #[command(subcommand)]
        action: PostAction,
    },
}

/// Store diagnostic subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check store connection
    Check,

    /// Show server version and document counts
    Info,
}

/// Post subcommands.
#[derive(Subcommand)]
enum PostAction {
    /// Print a post as JSON
    Show {
        /// Post id
        id: String,
    },

    /// Delete a post
    Delete {
        /// Post id
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    config::load_dotenv();

    let cli = Cli::parse();

    let config = config::load_from_env().context("Invalid configuration")?;
    let store = DocumentStore::connect_lazy(&config.store_options())
        .map_err(|e| anyhow::anyhow!("Failed to configure store: {}", e))?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &store).await?,
        Commands::Posts { action } => handle_post_action(action, &store).await?,
    }

    Ok(())
}

/// Handles store diagnostic commands.
async fn handle_db_action(action: DbAction, store: &DocumentStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking store connection...".bright_blue());

            store
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Store check failed: {}", e))?;

            println!("{}", "✅ Store connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Store Information".bright_blue().bold());
            println!();

            let version = store
                .server_version()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
            let counts = store
                .collection_counts()
                .await
                .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Database:   {}", store.database().cyan());
            println!();

            if counts.is_empty() {
                println!("{}", "  No documents stored".yellow());
            } else {
                println!(
                    "  {:<20} {:>10}",
                    "Collection".bright_white().bold(),
                    "Documents".bright_white().bold()
                );
                println!("  {}", "─".repeat(31).bright_black());

                for (collection, count) in &counts {
                    println!(
                        "  {:<20} {:>10}",
                        collection.cyan(),
                        count.to_string().bright_green()
                    );
                }
            }
            println!();
        }
    }

    Ok(())
}

/// Dispatches post commands.
async fn handle_post_action(action: PostAction, store: &DocumentStore) -> Result<()> {
    let repo = PgPostRepository::new(store);

    match action {
        PostAction::Show { id } => show_post(&repo, &id).await?,
        PostAction::Delete { id, yes } => delete_post(&repo, &id, yes).await?,
    }

    Ok(())
}

/// Prints a post as pretty JSON.
async fn show_post(repo: &PgPostRepository, id: &str) -> Result<()> {
    let post = repo
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Post not found")?;

    println!("{}", serde_json::to_string_pretty(&post)?);

    Ok(())
}

/// Deletes a post after confirmation (default: No).
async fn delete_post(repo: &PgPostRepository, id: &str, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑️  Delete Post".bright_blue().bold());
    println!();

    let post = repo
        .get(id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Post not found")?;

    println!("  ID:    {}", post.id.bright_black());
    println!("  Title: {}", post.title().unwrap_or("-").cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this post?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let ack = repo
        .delete(id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete post: {}", e))?;

    if ack.deleted == 0 {
        println!("{}", "⚠️  Post was already gone".yellow());
    } else {
        println!("{}", "✅ Post deleted".green().bold());
    }
    println!();

    Ok(())
}
