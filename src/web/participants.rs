// [business] Participant endpoints - list, batched create, delete by row id, JSON export
use crate::{
    db::{models::*, queries, Database},
    error::ApiError,
    web::submission::SubmissionPayload,
};

// [library] Axum extractors and response helpers
use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::header,
    response::{IntoResponse, Json},
};

// [library] Structured logging for write operations
use tracing::{debug, info};

pub const EXPORT_FILENAME: &str = "participantes.json";

/// GET /participantes - every stored row, oldest first
pub async fn list_participants_handler(
    State(db): State<Database>,
) -> Result<Json<Vec<Participant>>, ApiError> {
    let participants = queries::list_participants(&db)
        .await
        .map_err(ApiError::database("Error al obtener participantes"))?;

    debug!(count = participants.len(), "Participants listed");
    Ok(Json(participants))
}

/// POST /participantes - one row per raffle number in the submission
pub async fn create_participants_handler(
    State(db): State<Database>,
    payload: Result<Json<SubmissionPayload>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    // [business] Malformed JSON is reported like any other missing field
    let Json(payload) = payload.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let submission = payload.into_participants()?;

    let inserted = queries::insert_participants(&db, &submission)
        .await
        .map_err(ApiError::database("Error al agregar participantes"))?;

    info!(
        name = %submission.name,
        source_channel = %submission.source_channel,
        rows = inserted,
        "Participants added"
    );
    Ok(Json(MessageResponse::new("Participantes agregados")))
}

/// DELETE /participantes/:id - succeeds whether or not the row existed
pub async fn delete_participant_handler(
    State(db): State<Database>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(id) = id.map_err(|e| ApiError::InvalidBody(e.body_text()))?;

    let removed = queries::delete_participant(&db, id)
        .await
        .map_err(ApiError::database("Error al eliminar participante"))?;

    info!(id, removed, "Participant delete processed");
    Ok(Json(MessageResponse::new("Participante eliminado")))
}

/// GET /api/datos - same rows as the listing, served as a pretty-printed download
pub async fn export_participants_handler(
    State(db): State<Database>,
) -> Result<impl IntoResponse, ApiError> {
    let participants = queries::list_participants(&db)
        .await
        .map_err(ApiError::database("Error al obtener datos"))?;

    let body = serde_json::to_string_pretty(&participants)?;

    info!(count = participants.len(), "Participants exported");
    Ok((
        [
            (header::CONTENT_TYPE, "application/json".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename={}", EXPORT_FILENAME),
            ),
        ],
        body,
    ))
}
