// [business] Diagnostics - database reachability and plain liveness
use crate::db::{queries, Database};

// [library] Axum state extraction and status codes for the plain-text failure
use axum::{extract::State, http::StatusCode};

use tracing::error;

/// GET /api/test-db - round-trips `SELECT 1`; failures return the driver text as plain text
pub async fn test_db_handler(
    State(db): State<Database>,
) -> Result<&'static str, (StatusCode, String)> {
    queries::ping(&db).await.map_err(|e| {
        error!("Database check failed: {}", e);
        (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok("DB ok")
}

/// GET /api/ping - liveness only, never touches the database
pub async fn ping_handler() -> &'static str {
    "pong"
}
