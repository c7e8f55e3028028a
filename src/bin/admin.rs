//! CLI administration tool for zoo-registry.
//!
//! Issues and revokes keeper tokens, prints the animal census, and checks
//! the database without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Issue a keeper token
//! cargo run --bin admin -- keeper create --name "Ana"
//!
//! # List keepers
//! cargo run --bin admin -- keeper list
//!
//! # Revoke a keeper token
//! cargo run --bin admin -- keeper revoke "Ana"
//!
//! # Animals per species
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (or `DB_*` components): PostgreSQL connection
//! - `TOKEN_SIGNING_SECRET`: must match the server, tokens are stored as HMAC digests
//! - `IMAGE_DIR`: photo directory shared with the server (default: `images`)

use zoo_registry::application::services::AnimalService;
use zoo_registry::application::services::session_service::token_digest;
use zoo_registry::config::{Config, mask_connection_string};
use zoo_registry::domain::repositories::KeeperRepository;
use zoo_registry::infrastructure::persistence::{PgAnimalRepository, PgKeeperRepository};
use zoo_registry::infrastructure::storage::LocalImageStore;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing zoo-registry.
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
    /// Manage keeper tokens
    Keeper {
        #[command(subcommand)]
        action: KeeperAction,
    },

    /// Show animal counts per species
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Keeper token subcommands.
#[derive(Subcommand)]
enum KeeperAction {
    /// Issue a new keeper token
    Create {
        /// Keeper name (e.g., "Ana", "Night shift")
        #[arg(short, long)]
        name: Option<String>,

        /// Custom token value (optional, auto-generated if not provided)
        #[arg(short, long)]
        token: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all keepers
    List,

    /// Revoke a keeper token
    Revoke {
        /// Keeper name or ID to revoke
        name_or_id: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| format!("Failed to connect to {}", mask_connection_string(&database_url)))?;

    match cli.command {
        Commands::Keeper { action } => handle_keeper_action(action, &pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches keeper management commands.
async fn handle_keeper_action(action: KeeperAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgKeeperRepository::new(Arc::new(pool.clone())));

    match action {
        KeeperAction::Create { name, token, yes } => {
            let secret = std::env::var("TOKEN_SIGNING_SECRET")
                .context("TOKEN_SIGNING_SECRET must be set to issue tokens")?;
            create_keeper(repo, &secret, name, token, yes).await?;
        }
        KeeperAction::List => {
            list_keepers(repo).await?;
        }
        KeeperAction::Revoke { name_or_id } => {
            revoke_keeper(repo, name_or_id).await?;
        }
    }

    Ok(())
}

/// Issues a keeper token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for keeper name (or use provided)
/// 2. Generate random token or use provided value
/// 3. Display token once with a warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Store the HMAC digest
async fn create_keeper(
    repo: Arc<PgKeeperRepository>,
    secret: &str,
    name: Option<String>,
    token: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔑 Issue Keeper Token".bright_blue().bold());
    println!();

    let raw_name = match name {
        Some(n) => n,
        None => Input::<String>::new()
            .with_prompt("Keeper name")
            .interact_text()?,
    };
    let keeper_name = normalize_keeper_name(&raw_name)?;

    let token_value = match token {
        Some(t) => {
            println!("{}", "⚠️  Using provided token value".yellow());
            t
        }
        None => {
            let generated = generate_token();
            println!("{}", "✨ Generated new token".green());
            generated
        }
    };

    println!();
    println!("{}", "Keeper details:".bright_white().bold());
    println!("  Name:  {}", keeper_name.cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! It cannot be shown again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Issue this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = token_digest(secret, &token_value);

    let keeper = repo
        .create(&keeper_name, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create keeper: {}", e))?;

    println!();
    println!(
        "{} (id {})",
        "✅ Keeper created successfully!".green().bold(),
        keeper.id
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/api/session",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all keepers with status indicators.
async fn list_keepers(repo: Arc<PgKeeperRepository>) -> Result<()> {
    println!("{}", "📋 Keepers".bright_blue().bold());
    println!();

    let keepers = repo
        .list()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list keepers: {}", e))?;

    if keepers.is_empty() {
        println!("{}", "  No keepers found".yellow());
        println!();
        println!(
            "  Create one with: {} admin keeper create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<30} {:<17} {:<17} {:<8}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(80).bright_black());

    for keeper in &keepers {
        let status = if keeper.is_revoked() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = keeper
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<30} {:<17} {:<17} {}",
            keeper.id.to_string().bright_black(),
            keeper.name.cyan(),
            keeper
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        keepers.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Revokes a keeper token by name or ID with confirmation prompt.
///
/// Numeric input is looked up by ID, anything else by exact name.
async fn revoke_keeper(repo: Arc<PgKeeperRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke Keeper Token".bright_blue().bold());
    println!();

    let keeper = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let keeper = keeper.context("Keeper not found")?;

    if keeper.is_revoked() {
        println!("{}", "⚠️  This keeper is already revoked".yellow());
        return Ok(());
    }

    println!("  Keeper: {}", keeper.name.cyan());
    println!("  ID:     {}", keeper.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this keeper's token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke(keeper.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke keeper: {}", e))?;

    println!();
    println!("{}", "✅ Keeper revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Displays the animal census and active keeper count.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Census".bright_blue().bold());
    println!();

    let image_dir = std::env::var("IMAGE_DIR").unwrap_or_else(|_| "images".to_string());
    let image_store = LocalImageStore::open(&image_dir)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to open image store: {}", e))?;

    let service = AnimalService::new(
        Arc::new(PgAnimalRepository::new(Arc::new(pool.clone()))),
        Arc::new(image_store),
    );
    let census = service
        .census()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count animals: {}", e))?;

    let mut total = 0;
    for (species, count) in &census {
        total += count;
        println!(
            "  {:<8} {:>6}   {}",
            species.label().cyan(),
            count.to_string().bright_green().bold(),
            species.sound().bright_black()
        );
    }
    println!("  {}", "─".repeat(30).bright_black());
    println!("  {:<8} {:>6}", "Total", total.to_string().bright_white().bold());
    println!();

    let keepers_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM keepers WHERE revoked_at IS NULL")
            .fetch_one(pool)
            .await?;

    println!(
        "  Active keepers: {}",
        keepers_count.to_string().bright_green().bold()
    );
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
    }

    Ok(())
}

/// Trims a keeper name and rejects blank ones.
fn normalize_keeper_name(raw: &str) -> Result<String> {
    let name = raw.trim();
    if name.is_empty() {
        anyhow::bail!("Keeper name must not be empty");
    }
    Ok(name.to_string())
}

/// Generates a cryptographically random token.
///
/// 48 characters from A-Z, a-z, 0-9 (~286 bits of entropy).
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
