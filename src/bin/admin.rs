//! CLI administration tool for linkcount.
//!
//! Creates short codes and reads statistics straight from the database, so
//! it works whether or not the redirect server is running. Both processes
//! share nothing but the SQLite file.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL (prompts when the URL is omitted)
//! cargo run --bin admin -- shorten https://example.com/very/long/path
//!
//! # Show clicks for a code
//! cargo run --bin admin -- stats Xy9z0Q
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default `sqlite://urls.db`): SQLite database
//! - `BASE_URL` (default `http://127.0.0.1:8000`): prefix for printed short URLs

use linkcount::application::services::LinkService;
use linkcount::config::{self, Config};
use linkcount::error::AppError;
use linkcount::infrastructure::persistence::{self, PoolSettings, SqliteMappingRepository};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Input;
use std::sync::Arc;

/// CLI tool for managing linkcount.
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
    /// Create a short code for a URL
    Shorten {
        /// URL to shorten (prompted for when omitted)
        url: Option<String>,
    },

    /// Show click statistics for a short code
    Stats {
        /// Six character short code
        code: String,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection and schema
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let service = connect(&config).await?;

    match cli.command {
        Commands::Shorten { url } => shorten(&service, url).await?,
        Commands::Stats { code } => show_stats(&service, &code).await?,
        Commands::Db { action } => match action {
            DbAction::Check => check_db(&service, &config).await?,
        },
    }

    Ok(())
}

/// Opens the database, applies migrations and wires the link service.
async fn connect(config: &Config) -> Result<LinkService<SqliteMappingRepository>> {
    let pool = persistence::connect(&config.database_url, &PoolSettings::from(config))
        .await
        .context("Failed to connect to database")?;

    persistence::run_migrations(&pool)
        .await
        .context("Failed to migrate")?;

    let repository = Arc::new(SqliteMappingRepository::new(Arc::new(pool)));
    Ok(LinkService::new(repository, config.base_url.clone()))
}

/// Creates a short code and prints the short and stats URLs.
///
/// A blank URL prints the validation message and exits with status 1.
async fn shorten(service: &LinkService<SqliteMappingRepository>, url: Option<String>) -> Result<()> {
    let url = match url {
        Some(u) => u,
        None => Input::<String>::new()
            .with_prompt("URL to shorten")
            .allow_empty(true)
            .interact_text()?,
    };

    match service.create_short_code(&url).await {
        Ok(code) => {
            let short_url = service.short_url(&code);
            println!("Shortened URL: {}", short_url.bright_green().bold());
            println!("Stats: {}", service.stats_url(&code).cyan());
            Ok(())
        }
        Err(AppError::Validation { message, .. }) => {
            eprintln!("{} {}", "Error:".red().bold(), message);
            std::process::exit(1);
        }
        Err(e) => Err(anyhow::anyhow!("Failed to shorten URL: {}", e)),
    }
}

/// Prints URL, clicks and short URL for a code without counting a click.
async fn show_stats(service: &LinkService<SqliteMappingRepository>, code: &str) -> Result<()> {
    match service.get_stats(code).await {
        Ok(mapping) => {
            println!("{}", "URL Stats".bright_blue().bold());
            println!();
            println!("  Original URL: {}", mapping.original_url.cyan());
            println!(
                "  Clicks:       {}",
                mapping.clicks.to_string().bright_white().bold()
            );
            println!(
                "  Short URL:    {}",
                service.short_url(&mapping.short_code).bright_green()
            );
            Ok(())
        }
        Err(AppError::NotFound { .. }) => {
            eprintln!("{} URL not found.", "Error:".red().bold());
            std::process::exit(1);
        }
        Err(e) => Err(anyhow::anyhow!("Failed to read stats: {}", e)),
    }
}

/// Reports database location and the number of stored mappings.
async fn check_db(service: &LinkService<SqliteMappingRepository>, config: &Config) -> Result<()> {
    let count = service
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!("{}", "Database OK".green().bold());
    println!("  Location: {}", config.database_url.cyan());
    println!("  Mappings: {}", count.to_string().bright_white().bold());

    Ok(())
}
