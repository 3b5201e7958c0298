//! senha-api - Application entry point
//!
//! CLI-based entry point that dispatches to various commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use senha_api::{
    cli::{Cli, Commands},
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    // Load .env before reading RUST_LOG
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Verbose mode sets debug level
    init_tracing(cli.verbose);

    // Configuration is read once and passed down by reference
    let loaded = match &cli.command {
        Commands::Serve(args) => Config::from_env_with_server(args.host.clone(), args.port),
        Commands::Migrate(_) => Config::from_env(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(1);
        }
    };
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Serve(_) => commands::serve::execute(&config).await,
        Commands::Migrate(args) => commands::migrate::execute(args, &config).await,
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
