use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use premium_store::{Config, PremiumStore};

/// Premium users list maintenance CLI
#[derive(Parser, Debug)]
#[command(name = "premium-store", version, about = "Manage the premium users list")]
struct Cli {
    /// Backing file path (overrides PREMIUM_FILE)
    #[arg(short, long)]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all premium users
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check whether a user has premium access
    Check { user_id: u64 },
    /// Grant premium access to a user
    Add {
        user_id: u64,
        username: Option<String>,
    },
    /// Revoke premium access from a user
    Remove { user_id: u64 },
}

fn main() -> anyhow::Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "premium_store=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    // Load configuration
    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    let path = cli.file.unwrap_or(config.premium_file);

    let mut store = PremiumStore::open(&path)?;

    match cli.command {
        Command::List { json } => {
            let records = store.records()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                for record in &records {
                    println!(
                        "{} | {} | {}",
                        record.user_id,
                        record.username.as_deref().unwrap_or(""),
                        record.activated_date.as_deref().unwrap_or("")
                    );
                }
                println!("{} premium users", store.len());
            }
        }
        Command::Check { user_id } => {
            if store.is_premium(user_id) {
                println!("{user_id}: premium");
            } else {
                println!("{user_id}: not premium");
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Add { user_id, username } => {
            let (ok, message) =
                store.add_premium_user(user_id, username.as_deref().unwrap_or(""))?;
            if config.log_premium_ops {
                tracing::info!("add {}: {}", user_id, message);
            }
            println!("{message}");
            if !ok {
                return Ok(ExitCode::FAILURE);
            }
        }
        Command::Remove { user_id } => {
            let (ok, message) = store.remove_premium_user(user_id)?;
            if config.log_premium_ops {
                tracing::info!("remove {}: {}", user_id, message);
            }
            println!("{message}");
            if !ok {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
