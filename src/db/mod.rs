// [rust] Module declarations - organize database-related functionality
pub mod models; // Row types, validated submissions and response bodies
pub mod queries; // Participant and winner repository operations
pub mod schema; // Idempotent table creation at startup

// [rust] Re-export for a flat db:: namespace
pub use models::*;
pub use queries::*;
pub use schema::ensure_schema;

// [library] SQLx MySQL pool and connection option builders
use sqlx::mysql::{MySqlConnectOptions, MySqlPoolOptions};
use sqlx::MySqlPool;
use std::{sync::Arc, time::Duration};

use crate::config::Config;

// [rust] Type alias - the pool shared by every handler through router state
pub type Database = Arc<MySqlPool>;

// [business] Translate Config into driver connection options
// Empty user/password/database fall back to the driver defaults
pub fn connect_options(config: &Config) -> MySqlConnectOptions {
    let mut options = MySqlConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port);

    if !config.db_user.is_empty() {
        options = options.username(&config.db_user);
    }
    if !config.db_password().is_empty() {
        options = options.password(config.db_password());
    }
    if !config.db_name.is_empty() {
        options = options.database(&config.db_name);
    }

    options
}

// [business] Bounded pool; waiting for a connection fails after the configured timeout
pub fn pool_options(config: &Config) -> MySqlPoolOptions {
    MySqlPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout_secs))
}

// [business] Database connection factory - connects eagerly and ensures the schema
// Any error here aborts startup
pub async fn create_pool(config: &Config) -> Result<Database, sqlx::Error> {
    let pool = pool_options(config)
        .connect_with(connect_options(config))
        .await?;

    ensure_schema(&pool).await?;

    Ok(Arc::new(pool))
}

// [business] Pool that opens connections on first use - never touches the network up front
pub fn create_lazy_pool(config: &Config) -> Database {
    Arc::new(pool_options(config).connect_lazy_with(connect_options(config)))
}
