//! CLI administration tool for expiring-shortener.
//!
//! Talks to the configured mapping store directly, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Show a mapping and whether it still resolves
//! cargo run --bin admin -- inspect abc12
//!
//! # Create a mapping (prompts before replacing a live one)
//! cargo run --bin admin -- create https://example.com/page --suffix abc12
//!
//! # Check store connectivity
//! cargo run --bin admin -- check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `MAPPING_TABLE`, `STORE_BACKEND` and the matching
//! connection settings. Note that the `memory` backend only lives as long as
//! this process.

use expiring_shortener::application::services::LinkCreator;
use expiring_shortener::config;
use expiring_shortener::domain::clock::{Clock, SystemClock};
use expiring_shortener::domain::entities::Mapping;
use expiring_shortener::domain::repositories::MappingStore;
use expiring_shortener::infrastructure::persistence::connect_store;
use expiring_shortener::utils::request_context::RequestContext;

use anyhow::Result;
use chrono::DateTime;
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::sync::Arc;

/// CLI tool for managing expiring-shortener mappings.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the mapping stored for a suffix
    Inspect {
        /// Suffix to look up
        suffix: String,
    },

    /// Create or replace a mapping
    Create {
        /// Destination URL
        url: String,

        /// Custom suffix (random 5 characters if omitted)
        #[arg(short, long)]
        suffix: Option<String>,

        /// Base URL used to print the short link
        #[arg(short, long, default_value = "http://localhost:3000")]
        base_url: String,

        /// Replace a live mapping without asking
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = connect_store(&config).await?;
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    match cli.command {
        Commands::Inspect { suffix } => inspect(store.as_ref(), clock.as_ref(), &suffix).await?,
        Commands::Create {
            url,
            suffix,
            base_url,
            yes,
        } => create(store, clock, url, suffix, base_url, yes).await?,
        Commands::Check => check(store.as_ref()).await?,
    }

    Ok(())
}

/// Prints a mapping with its remaining lifetime.
///
/// # Output Format
///
/// ```text
/// Mapping abc12
///
///   Long URL:  https://example.com/page
///   Expiry:    2024-01-15 10:40:00 UTC (1705315200)
///   Status:    LIVE (412s left)
/// ```
async fn inspect(store: &dyn MappingStore, clock: &dyn Clock, suffix: &str) -> Result<()> {
    let Some(mapping) = store.get(suffix).await? else {
        println!("{} {}", "No mapping for".yellow(), suffix.cyan());
        return Ok(());
    };

    println!("{} {}", "Mapping".bright_blue().bold(), suffix.cyan().bold());
    println!();
    print_mapping(&mapping, clock.now());
    println!();

    Ok(())
}

fn print_mapping(mapping: &Mapping, now: i64) {
    let expiry_text = DateTime::from_timestamp(mapping.expiry, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| "out of range".to_string());

    let status = if mapping.is_expired_at(now) {
        format!("EXPIRED ({}s ago)", now - mapping.expiry).red()
    } else {
        format!("LIVE ({}s left)", mapping.expiry - now).green()
    };

    println!("  Long URL:  {}", mapping.long_url.bright_white());
    println!(
        "  Expiry:    {} ({})",
        expiry_text,
        mapping.expiry.to_string().bright_black()
    );
    println!("  Status:    {}", status);
}

/// Creates a mapping through the same service the HTTP handler uses.
///
/// Asks for confirmation before replacing a live mapping unless `--yes`.
async fn create(
    store: Arc<dyn MappingStore>,
    clock: Arc<dyn Clock>,
    url: String,
    suffix: Option<String>,
    base_url: String,
    skip_confirm: bool,
) -> Result<()> {
    if let Some(ref suffix) = suffix
        && !skip_confirm
        && let Some(existing) = store.get(suffix).await?
        && !existing.is_expired_at(clock.now())
    {
        println!("{}", "A live mapping already uses this suffix:".yellow());
        print_mapping(&existing, clock.now());
        println!();

        let confirmed = Confirm::new()
            .with_prompt("Replace it?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let creator = LinkCreator::new(store, clock);
    let context = RequestContext::from_base_url(base_url);

    let created = creator
        .create(url, suffix, &context)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create mapping: {}", e))?;

    println!("{}", "Mapping created".green().bold());
    println!();
    println!("  Short URL: {}", created.short_url.bright_yellow().bold());
    println!("  Suffix:    {}", created.suffix.cyan());
    println!("  Expiry:    {}", created.expiry.to_string().bright_black());
    println!();

    Ok(())
}

async fn check(store: &dyn MappingStore) -> Result<()> {
    print!("Checking {} store... ", store.backend());

    if store.health_check().await {
        println!("{}", "OK".green().bold());
        Ok(())
    } else {
        println!("{}", "FAILED".red().bold());
        anyhow::bail!("{} store is unreachable", store.backend())
    }
}
