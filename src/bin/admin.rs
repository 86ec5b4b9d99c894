//! CLI administration tool for shortmap.
//!
//! Manages the mapping file directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create an empty mapping file (the server never creates it)
//! cargo run --bin admin -- store init
//!
//! # Check that the file loads
//! cargo run --bin admin -- store check
//!
//! # Drop every mapping
//! cargo run --bin admin -- store clear
//!
//! # Show stored mappings
//! cargo run --bin admin -- mappings list
//!
//! # Show the code a URL would get
//! cargo run --bin admin -- encode https://www.wikipedia.org
//! ```
//!
//! # Environment Variables
//!
//! - `MAPPING_FILE` (optional): mapping file path, overridden by `--file`

use shortmap::config::DEFAULT_MAPPING_FILE;
use shortmap::domain::repositories::{MappingRepository, StoreError};
use shortmap::infrastructure::persistence::FileMappingRepository;
use shortmap::utils::encoder::encode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::io::ErrorKind;
use std::path::PathBuf;

/// CLI tool for managing shortmap.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Mapping file (defaults to $MAPPING_FILE, then urlmapping.json)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Mapping file operations
    Store {
        #[command(subcommand)]
        action: StoreAction,
    },

    /// Inspect stored mappings
    Mappings {
        #[command(subcommand)]
        action: MappingsAction,
    },

    /// Print the short code for a URL without storing it
    Encode {
        /// URL to encode
        url: String,
    },
}

/// Mapping file subcommands.
#[derive(Subcommand)]
enum StoreAction {
    /// Create an empty mapping file if it does not exist
    Init,

    /// Load the mapping file and report its state
    Check,

    /// Remove every mapping
    Clear {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Mapping inspection subcommands.
#[derive(Subcommand)]
enum MappingsAction {
    /// List all mappings
    List,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let path = cli
        .file
        .or_else(|| std::env::var("MAPPING_FILE").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MAPPING_FILE));

    match cli.command {
        Commands::Store { action } => handle_store_action(action, path).await?,
        Commands::Mappings { action } => handle_mappings_action(action, path).await?,
        Commands::Encode { url } => {
            println!("{}", encode(url.as_bytes()).as_str().bright_yellow().bold());
        }
    }

    Ok(())
}

/// Dispatches mapping file commands.
async fn handle_store_action(action: StoreAction, path: PathBuf) -> Result<()> {
    match action {
        StoreAction::Init => init_store(path).await?,
        StoreAction::Check => {
            check_store(&FileMappingRepository::new(path)).await?;
        }
        StoreAction::Clear { yes } => {
            clear_store(&FileMappingRepository::new(path), yes).await?;
        }
    }

    Ok(())
}

/// Dispatches mapping inspection commands.
async fn handle_mappings_action(action: MappingsAction, path: PathBuf) -> Result<()> {
    let repo = FileMappingRepository::new(path);

    match action {
        MappingsAction::List => list_mappings(&repo).await?,
    }

    Ok(())
}

/// Creates an empty mapping file, leaving an existing one untouched.
async fn init_store(path: PathBuf) -> Result<()> {
    let created = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .await;

    match created {
        Ok(_) => {
            println!(
                "{} {}",
                "Created empty mapping file".green().bold(),
                path.display().to_string().cyan()
            );
        }
        Err(e) if e.kind() == ErrorKind::AlreadyExists => {
            println!(
                "{} {}",
                "Mapping file already exists:".yellow(),
                path.display().to_string().cyan()
            );
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to create {}", path.display()));
        }
    }

    Ok(())
}

/// Loads the mapping file and prints its health.
async fn check_store(repo: &FileMappingRepository) -> Result<()> {
    println!("{}", "Checking mapping file...".bright_blue());

    match repo.health().await {
        Ok(count) => {
            println!("{}", "Mapping file OK".green().bold());
            println!("  Path:     {}", repo.path().display().to_string().cyan());
            println!("  Mappings: {}", count.to_string().bright_yellow());
            Ok(())
        }
        Err(StoreError::NotFound { path }) => {
            println!("{}", "Mapping file is missing".red().bold());
            println!(
                "  Create it with: {} admin -- store init",
                "cargo run --bin".bright_cyan()
            );
            Err(anyhow::anyhow!("{} does not exist", path.display()))
        }
        Err(e) => {
            println!("{}", "Mapping file is unusable".red().bold());
            Err(anyhow::anyhow!("{}", e))
        }
    }
}

/// Truncates the mapping file after confirmation.
async fn clear_store(repo: &FileMappingRepository, skip_confirm: bool) -> Result<()> {
    let count = repo
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load mappings: {}", e))?
        .len();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete all {} mappings?", count))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    repo.clear()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to clear mappings: {}", e))?;

    println!(
        "{}",
        format!("Removed {} mappings", count).green().bold()
    );
    Ok(())
}

/// Prints every stored mapping, sorted by code.
///
/// # Output Format
///
/// ```text
/// Mappings (1)
///
///   Code        URL
///   ----------------------------------------------------------------
///   aHR0cHM6Ly  https://www.wikipedia.org
/// ```
async fn list_mappings(repo: &FileMappingRepository) -> Result<()> {
    let mapping = repo
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load mappings: {}", e))?;

    println!(
        "{}",
        format!("Mappings ({})", mapping.len()).bright_blue().bold()
    );
    println!();

    if mapping.is_empty() {
        println!("{}", "  No mappings stored".yellow());
        return Ok(());
    }

    println!(
        "  {:<11} {}",
        "Code".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "-".repeat(64).bright_black());

    let mut entries: Vec<_> = mapping.iter().collect();
    entries.sort_unstable();

    for (code, url) in entries {
        println!("  {:<11} {}", code.bright_yellow(), url);
    }

    Ok(())
}
