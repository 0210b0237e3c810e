use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use super::dto::ErrorBody;

pub const INTERNAL_ERROR_DETAIL: &str = "An error occurred during sentiment analysis";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request was well-routed but its body is unusable.
    #[error("{0}")]
    Validation(String),

    /// Anything else. Details stay in the server log.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match &self {
            ApiError::Validation(message) => {
                tracing::debug!(%message, "rejected request");
                message.clone()
            }
            ApiError::Internal(err) => {
                tracing::error!("Error analyzing sentiment: {err:?}");
                INTERNAL_ERROR_DETAIL.to_string()
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
