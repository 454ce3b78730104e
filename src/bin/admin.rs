//! CLI administration tool for short-redirect.
//!
//! Operates directly on the configured Redis store, without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check the store connection
//! cargo run --bin admin -- ping
//!
//! # Show a mapping without consuming it
//! cargo run --bin admin -- get aB3dE9x
//!
//! # Create a mapping
//! cargo run --bin admin -- create https://example.com --duration day
//!
//! # Delete a mapping
//! cargo run --bin admin -- delete aB3dE9x
//! ```
//!
//! # Environment Variables
//!
//! - `REDIS_URL` or `REDIS_ADDR` (+ `REDIS_PW`, `REDIS_DB`): store location
//! - `STORE_TIMEOUT_MS`, `STORE_KEY_PREFIX`: as for the server

use short_redirect::application::services::{MappingAllocator, MappingError, MappingResolver};
use short_redirect::config::{self, Config, mask_connection_string};
use short_redirect::domain::DurationPolicy;
use short_redirect::domain::repositories::ExpiringStore;
use short_redirect::server::connect_store;
use short_redirect::utils::code_generator::{RandomIdGenerator, is_valid_id};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing short-redirect mappings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check the store connection
    Ping,

    /// Show the mapping stored under an identifier (does not consume single-use links)
    Get {
        /// Short identifier
        id: String,
    },

    /// Create a mapping
    Create {
        /// Destination URL
        url: String,

        /// Expiry policy: single, day or hour
        #[arg(short, long, default_value = "day")]
        duration: String,
    },

    /// Delete a mapping
    Delete {
        /// Short identifier
        id: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = connect(&config).await?;

    match cli.command {
        Commands::Ping => ping(store.as_ref()).await,
        Commands::Get { id } => show_mapping(store, &id).await,
        Commands::Create { url, duration } => create_mapping(store, &url, &duration).await,
        Commands::Delete { id, yes } => delete_mapping(store, &id, yes).await,
    }
}

/// Connects to Redis; the in-memory store is useless from a separate process.
async fn connect(config: &Config) -> Result<Arc<dyn ExpiringStore>> {
    let redis_url = config
        .redis_url
        .as_deref()
        .context("REDIS_URL or REDIS_ADDR must be set")?;

    println!(
        "{} {}",
        "Store:".bright_black(),
        mask_connection_string(redis_url)
    );

    connect_store(config).await
}

async fn ping(store: &dyn ExpiringStore) -> Result<()> {
    if store.health_check().await {
        println!("{}", "✓ Store reachable".green().bold());
        Ok(())
    } else {
        anyhow::bail!("Store did not answer PING")
    }
}

async fn show_mapping(store: Arc<dyn ExpiringStore>, id: &str) -> Result<()> {
    if !is_valid_id(id) {
        println!(
            "{}",
            "⚠ Identifier does not look generated (7 alphanumeric characters)".yellow()
        );
    }

    let resolver = MappingResolver::new(store);

    match resolver.inspect(id).await {
        Ok(entry) => {
            println!("{} {}", "Id:".bold(), id.cyan());
            println!("{} {}", "Destination:".bold(), entry.url);
            println!(
                "{} {}",
                "Single use:".bold(),
                if entry.single {
                    "yes".yellow()
                } else {
                    "no".normal()
                }
            );
            Ok(())
        }
        Err(MappingError::NotFound) => {
            println!("{}", format!("✗ No mapping for '{}'", id).red());
            Ok(())
        }
        Err(e) => Err(e).context("Failed to read mapping"),
    }
}

async fn create_mapping(store: Arc<dyn ExpiringStore>, url: &str, duration: &str) -> Result<()> {
    let policy: DurationPolicy = duration.parse()?;
    let allocator = MappingAllocator::new(store, Arc::new(RandomIdGenerator));

    let id = allocator
        .allocate_with_policy(url, policy)
        .await
        .context("Failed to create mapping")?;

    println!("{}", "✨ Mapping created".green().bold());
    println!("{} {}", "Id:".bold(), id.cyan());
    println!("{} {}", "Duration:".bold(), policy);
    Ok(())
}

async fn delete_mapping(store: Arc<dyn ExpiringStore>, id: &str, skip_confirm: bool) -> Result<()> {
    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete mapping '{}'?", id))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".yellow());
            return Ok(());
        }
    }

    if store.delete(id).await.context("Failed to delete mapping")? {
        println!("{}", format!("✓ Deleted '{}'", id).green());
    } else {
        println!("{}", format!("✗ No mapping for '{}'", id).red());
    }

    Ok(())
}
