use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use index::IndexError;
use ingest::IngestError;
use matcher::MatchError;
use serde::{Deserialize, Serialize};
use serde_json::json;

pub type ServerResult<T> = Result<T, ServerError>;

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid report: {0}")]
    Ingest(#[from] IngestError),

    #[error("{0}")]
    Index(#[from] IndexError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Chat assistant unavailable: {0}")]
    Chat(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

fn ingest_status(err: &IngestError) -> StatusCode {
    StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::BAD_REQUEST)
}

impl ServerError {
    /// Get HTTP status code for this error
    fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Ingest(err) => ingest_status(err),
            ServerError::Index(err) | ServerError::Match(MatchError::Index(err)) => match err {
                IndexError::NotFound { .. } => StatusCode::NOT_FOUND,
                IndexError::DuplicateId { .. } => StatusCode::CONFLICT,
                IndexError::Ingest(inner) => ingest_status(inner),
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            },
            ServerError::Match(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::Chat(_) => StatusCode::BAD_GATEWAY,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ServerError::NotFound => StatusCode::NOT_FOUND,
        }
    }

    /// Get error code string
    fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::Ingest(_) => "INVALID_REPORT",
            ServerError::Index(err) | ServerError::Match(MatchError::Index(err)) => match err {
                IndexError::NotFound { .. } => "NOT_FOUND",
                IndexError::DuplicateId { .. } => "DUPLICATE_ID",
                IndexError::Ingest(_) => "INVALID_REPORT",
                _ => "INDEX_ERROR",
            },
            ServerError::Match(_) => "MATCH_ERROR",
            ServerError::Chat(_) => "CHAT_ERROR",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code().to_string();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(code = %error_code, error = %message, "request_failed");
        }

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl From<serde_json::Error> for ServerError {
    fn from(err: serde_json::Error) -> Self {
        ServerError::BadRequest(format!("JSON parse error: {err}"))
    }
}
