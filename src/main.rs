use clap::{Parser, Subcommand};
use pessoas_api::config::{DEFAULT_CONFIG_FILE, load_config};
use pessoas_api::orchestrator::run_all;
use pessoas_api::seeder::{log_report, run_seed};
use pessoas_api::server::{self, SharedStore};
use pessoas_api::storage::MongoStorage;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pessoas", about = "Read-only API over the pessoas collection")]
struct Cli {
    /// JSON config file; environment variables override it.
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve GET /api/pessoas (default).
    Serve,
    /// Replace the collection with freshly generated people.
    Seed,
    /// Start local mongod, seed it, launch the frontend and serve the API.
    Up,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;
    info!(
        "Using collection {}.{}",
        config.mongodb_db, config.mongodb_collection
    );

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => {
            let store: SharedStore = Arc::new(MongoStorage::new(&config));
            server::serve(&config, store, server::shutdown_signal()).await?;
        }
        Command::Seed => {
            info!("Starting seed...");
            let store = MongoStorage::new(&config);
            // Seed failures are reported, not turned into an exit code.
            match run_seed(&store, config.seed_count).await {
                Ok(report) => {
                    log_report(&report);
                    info!("Seed finished");
                }
                Err(e) => error!("Seed failed: {}", e),
            }
        }
        Command::Up => run_all(&config).await?,
    }

    Ok(())
}
