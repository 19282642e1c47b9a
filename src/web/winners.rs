// [business] Winner endpoints - append-only records with collapsed raffle numbers
use crate::{
    db::{models::*, queries, Database},
    error::ApiError,
    web::submission::SubmissionPayload,
};

// [library] Axum extractors - JSON rejections are turned into ApiError
use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use tracing::{debug, info};

/// GET /ganadores - newest first
pub async fn list_winners_handler(
    State(db): State<Database>,
) -> Result<Json<Vec<Winner>>, ApiError> {
    let winners = queries::list_winners(&db)
        .await
        .map_err(ApiError::database("Error al obtener ganadores"))?;

    debug!(count = winners.len(), "Winners listed");
    Ok(Json(winners))
}

/// POST /ganadores - raffle number lists are stored as one comma-joined string
pub async fn create_winner_handler(
    State(db): State<Database>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(payload) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let winner = payload.into_winner()?;

    let id = queries::insert_winner(&db, &winner)
        .await
        .map_err(ApiError::database("Error al guardar ganador"))?;

    info!(
        id,
        name = %winner.name,
        raffle_numbers = %winner.raffle_numbers,
        "Winner saved"
    );
    Ok(Json(MessageResponse::new("Ganador guardado")))
}
