use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum QuestboardError {
    /// Request body could not be decoded into the expected record.
    #[error("{0}")]
    Decode(String),

    #[error("{0} parameter is required")]
    MissingParameter(&'static str),

    #[error("{0}")]
    Storage(#[from] sqlx::Error),

    /// Failure inside the completion transaction; nothing it wrote persists.
    #[error("{stage}: {source}")]
    Transaction {
        stage: &'static str,
        #[source]
        source: sqlx::Error,
    },
}

impl QuestboardError {
    pub(crate) fn transaction(stage: &'static str) -> impl FnOnce(sqlx::Error) -> Self {
        move |source| QuestboardError::Transaction { stage, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            QuestboardError::Decode(_) | QuestboardError::MissingParameter(_) => {
                StatusCode::BAD_REQUEST
            }
            QuestboardError::Storage(_) | QuestboardError::Transaction { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Text sent as the body `message`: the underlying error alone, without the stage prefix.
    fn message(&self) -> String {
        match self {
            QuestboardError::Transaction { source, .. } => source.to_string(),
            other => other.to_string(),
        }
    }

    fn stage(&self) -> Option<&'static str> {
        match self {
            QuestboardError::Transaction { stage, .. } => Some(*stage),
            _ => None,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            QuestboardError::Decode(_) => "INVALID_REQUEST",
            QuestboardError::MissingParameter(_) => "MISSING_PARAMETER",
            QuestboardError::Storage(_) => "STORAGE_ERROR",
            QuestboardError::Transaction { .. } => "TRANSACTION_ERROR",
        }
    }
}

impl IntoResponse for QuestboardError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let body = ApiErrorObject {
            code: self.code().to_string(),
            message: self.message(),
            stage: self.stage(),
        };
        (status, Json(ApiErrorBody { inner: body })).into_response()
    }
}

/// Standardized API error response payload.
#[derive(Serialize)]
pub struct ApiErrorObject {
    pub code: String,
    pub message: String,
    /// Completion transaction step that failed; the transaction was rolled back.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<&'static str>,
}

#[derive(Serialize)]
pub struct ApiErrorBody {
    #[serde(rename = "error")]
    pub inner: ApiErrorObject,
}
