//! CLI administration tool for news-api.
//!
//! Provides database diagnostics, migrations, content statistics and a
//! catalog check without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # Validate the endpoint catalog
//! cargo run --bin admin -- catalog --file endpoints.json
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required for `db` and `stats`): PostgreSQL connection string

use news_api::infrastructure::EndpointCatalog;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;

/// CLI tool for managing news-api.
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
    /// Show row counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Validate the endpoint catalog and list its entries
    Catalog {
        /// Path to the catalog file
        #[arg(short, long, default_value = "endpoints.json")]
        file: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Catalog { file } => handle_catalog(&file).await?,
        Commands::Stats => handle_stats(&connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

/// Displays row counts for every table the API reads.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for (label, table) in [
        ("Topics", "topics"),
        ("Users", "users"),
        ("Articles", "articles"),
        ("Comments", "comments"),
    ] {
        // Table names come from the fixed list above, never from input.
        let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
            .fetch_one(pool)
            .await
            .with_context(|| format!("Failed to count {table}"))?;

        println!(
            "  {:<10} {}",
            format!("{label}:"),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🚚 Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}

/// Loads the catalog the same way the server does and lists its endpoints.
async fn handle_catalog(file: &str) -> Result<()> {
    println!("{}", "📖 Endpoint Catalog".bright_blue().bold());
    println!();

    let catalog = EndpointCatalog::new(file)
        .load()
        .await
        .with_context(|| format!("Failed to load catalog {file}"))?;

    let Some(entries) = catalog.as_object() else {
        anyhow::bail!("Catalog {file} must be a JSON object keyed by endpoint");
    };

    for (endpoint, description) in entries {
        let summary = description
            .get("description")
            .and_then(|d| d.as_str())
            .unwrap_or("");
        println!("  {:<45} {}", endpoint.cyan(), summary.bright_black());
    }

    println!();
    println!(
        "  Total: {}",
        entries.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}
