use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::auth::AuthenticationError;
use crate::forum::store::StoreError;

/// Structural validation failures raised before a payload reaches
/// persistence.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("missing required property `{0}`")]
    MissingProperty(String),

    #[error("property `{0}` does not meet the expected data type")]
    WrongType(String),

    #[error("{0}")]
    Invalid(String),
}

impl ValidationError {
    pub fn missing(field: impl Into<String>) -> Self {
        Self::MissingProperty(field.into())
    }

    pub fn wrong_type(field: impl Into<String>) -> Self {
        Self::WrongType(field.into())
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Authentication(#[from] AuthenticationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("{0}")]
    Unhandled(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    code: &'static str,
    msg: String,
}

impl AppError {
    fn code_and_status(&self) -> (&'static str, StatusCode) {
        match self {
            AppError::Validation(_) => ("VALIDATION_ERR", StatusCode::BAD_REQUEST),
            AppError::Authentication(_) => ("UNAUTHORIZED", StatusCode::UNAUTHORIZED),
            AppError::Store(StoreError::NotFound(_)) => ("NOT_FOUND", StatusCode::NOT_FOUND),
            AppError::Store(StoreError::Forbidden(_)) => ("FORBIDDEN", StatusCode::FORBIDDEN),
            AppError::Store(_) | AppError::Unhandled(_) => {
                ("SERVER_ERR", StatusCode::INTERNAL_SERVER_ERROR)
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (code, status) = self.code_and_status();

        // Unexpected failures keep their internals out of the response body.
        let msg = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self, "request failed");
            "Internal server error".into()
        } else {
            self.to_string()
        };

        (status, Json(ErrorResponse { code, msg })).into_response()
    }
}

impl From<&'static str> for AppError {
    fn from(e: &'static str) -> Self {
        AppError::Unhandled(e.into())
    }
}
