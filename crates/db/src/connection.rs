use std::time::Duration;

use kanvas_config::DatabaseSettings;
use mongodb::{Client, Database, options::ClientOptions};
use tracing::{error, info, warn};

use crate::indexes::ensure_schema;

/// Outcome of resolving the store at startup. Once `Unavailable`, the
/// process stays in degraded mode until restart.
#[derive(Debug, Clone)]
pub enum StoreHandle {
    Connected(Database),
    Unavailable(UnavailableReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnavailableReason {
    NotConfigured,
    ConnectFailed(String),
}

impl StoreHandle {
    pub fn is_connected(&self) -> bool {
        matches!(self, StoreHandle::Connected(_))
    }
}

pub async fn connect(
    url: &str,
    settings: &DatabaseSettings,
) -> Result<Database, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(url).await?;

    if let Some(max_pool) = settings.max_pool_size {
        client_options.max_pool_size = Some(max_pool);
    }
    if let Some(min_pool) = settings.min_pool_size {
        client_options.min_pool_size = Some(min_pool);
    }
    client_options.server_selection_timeout =
        Some(Duration::from_secs(settings.server_selection_timeout_secs));

    let client = Client::with_options(client_options)?;

    // Verify connection
    client
        .database("admin")
        .run_command(bson::doc! { "ping": 1 })
        .await?;

    info!(db = %settings.name, "Connected to MongoDB");

    Ok(client.database(&settings.name))
}

/// Connects and initializes the schema. Never fails: any problem is logged
/// and reported as `Unavailable`.
pub async fn resolve_store(settings: &DatabaseSettings) -> StoreHandle {
    let Some(url) = settings.connection_url() else {
        warn!("No database url configured, serving sample data");
        return StoreHandle::Unavailable(UnavailableReason::NotConfigured);
    };

    let db = match connect(url, settings).await {
        Ok(db) => db,
        Err(e) => {
            error!(error = %e, "Failed to connect to MongoDB, serving sample data");
            return StoreHandle::Unavailable(UnavailableReason::ConnectFailed(e.to_string()));
        }
    };

    if let Err(e) = ensure_schema(&db).await {
        error!(error = %e, "Failed to initialize store, serving sample data");
        return StoreHandle::Unavailable(UnavailableReason::ConnectFailed(e.to_string()));
    }

    StoreHandle::Connected(db)
}
