#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
// easier to use when using the functions as callback of foreign functions
#![allow(clippy::needless_pass_by_value)]

use std::net::SocketAddr;
use std::path::Path;
use std::path::PathBuf;

use anyhow::Result;
use axum::Extension;
use axum::Router;
use clap::Parser;
use clap::Subcommand;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::prelude::*;

use crate::database::Database;
use crate::database::DatabaseConfig;
use crate::pages::router;
use crate::utils::env_var_or_else;

mod cruises;
mod database;
mod destinations;
mod graceful_shutdown;
mod info_requests;
mod pages;
mod seeder;
#[cfg(test)]
mod tests;
mod utils;

const DEFAULT_RUST_LOG: &str = "relecloud=debug,tower_http=debug";
const DEFAULT_ADDRESS: &str = "0.0.0.0:8000";

/// ReleCloud, a cruise marketing and booking website
#[derive(Debug, Parser)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the website
    Serve,

    /// Seed the database with destinations and cruises
    Seed {
        /// Path of the seed data file
        #[arg(long, default_value = "seed_data.json")]
        filename: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_environment();
    setup_tracing();

    let cli = Cli::parse();

    match cli.command {
        None | Some(Command::Serve) => serve().await,
        Some(Command::Seed { filename }) => seed(&filename).await,
    }
}

/// Serve the website until a terminate signal arrives
async fn serve() -> Result<()> {
    let app = setup_app(DatabaseConfig::DetectConfig).await?;

    let address = setup_address()?;
    tracing::info!("Listening on {}", address);

    let listener = TcpListener::bind(address).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(graceful_shutdown::handler())
        .await?;

    Ok(())
}

/// Seed the database from a JSON file
///
/// Runs once and exits, a missing destination reference aborts the whole
/// run
async fn seed(filename: &Path) -> Result<()> {
    let database = Database::from_config(DatabaseConfig::DetectConfig).await;

    seeder::seed_from_file(&database, filename).await?;

    tracing::info!("Database seeded");

    Ok(())
}

/// Create and setup the app with its dependencies
///
/// # Errors
///
/// Will return `Err` if any of its dependencies fail to load:
/// - Database connection
pub async fn setup_app(database_config: DatabaseConfig) -> Result<Router> {
    let database = Database::from_config(database_config).await;

    Ok(create_router(database))
}

/// Create the router for ReleCloud
///
/// The database handle is injected as an extension, handlers never reach
/// for global state
fn create_router(database: Database) -> Router {
    router()
        .layer(TraceLayer::new_for_http())
        .layer(Extension(database))
}

fn setup_environment() {
    dotenvy::dotenv().ok();
}

fn setup_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::fmt;
    use tracing_subscriber::registry;

    registry()
        .with(EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_RUST_LOG.into()),
        ))
        .with(fmt::layer())
        .init();
}

fn setup_address() -> Result<SocketAddr> {
    let mut address =
        env_var_or_else("ADDRESS", || String::from(DEFAULT_ADDRESS)).parse::<SocketAddr>()?;

    // optional override of just the port
    if let Ok(port) = std::env::var("PORT") {
        // only check non-empty strings
        if !port.is_empty() {
            let port = port.parse::<u16>()?;

            address.set_port(port);
        }
    }

    Ok(address)
}
