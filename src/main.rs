//! Bootstrap binary: initializes logging, loads the environment, and brings
//! the database schema up to date. The HTTP routing and authentication
//! layers are separate services that consume the library crate.

use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;
use travel_planner::config;
use travel_planner::errors::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenv().ok(); // Non-fatal, env vars can be set externally
    info!("Attempted to load .env file.");

    // 3. Connect and bring the schema up to date
    let db = config::database::create_connection().await?;
    info!(url = %config::database::get_database_url(), "Database connection established.");

    config::database::create_tables(&db).await?;
    info!("Database schema is ready.");

    Ok(())
}
