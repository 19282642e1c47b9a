// [business] Error taxonomy for the HTTP surface
// Every handler returns Result<_, ApiError>; IntoResponse maps each variant
// to a status code and the {"error": "..."} body shape

// [library] Axum response types for rendering errors
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

// [library] Serde for the JSON error body
use serde::Serialize;

// [library] Structured error handling with automatic trait derivation
use thiserror::Error;

/// JSON body returned for every failed request
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or malformed request fields
    #[error("{0}")]
    Validation(String),

    /// Body or path could not be extracted at all
    #[error("invalid request: {0}")]
    InvalidBody(String),

    /// Connection or query failure. `context` is what the client sees.
    #[error("{context}")]
    Database {
        context: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ApiError {
    /// Builds a `map_err` adapter that tags a driver error with a client-facing message.
    pub fn database(context: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| Self::Database { context, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::Database { .. } | Self::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::Database { .. } => "DATABASE_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Log the error with severity matching its status code
    pub fn log(&self) {
        let status = self.status_code();
        if status.is_server_error() {
            let detail = match self {
                Self::Database { source, .. } => source.to_string(),
                other => other.to_string(),
            };
            tracing::error!(
                error = %self,
                detail = %detail,
                code = self.error_code(),
                status = status.as_u16(),
                "Server error occurred"
            );
        } else {
            tracing::debug!(
                error = %self,
                code = self.error_code(),
                status = status.as_u16(),
                "Client error"
            );
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        self.log();
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::Validation("Faltan campos obligatorios".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "Faltan campos obligatorios");
    }

    #[test]
    fn test_database_error_hides_driver_detail() {
        let err = ApiError::database("Error al obtener ganadores")(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "DATABASE_ERROR");
        assert_eq!(err.to_string(), "Error al obtener ganadores");
    }

    #[test]
    fn test_into_response_status() {
        let response = ApiError::InvalidBody("bad json".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
