use anyhow::Result;
use tracing::{debug, info, trace};

use crate::config::connect_and_migrate;

/// Create or upgrade the schema without starting the server.
pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    connect_and_migrate(database_url).await?;

    info!("Database initialization completed successfully!");
    Ok(())
}
