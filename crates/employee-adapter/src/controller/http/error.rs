//! HTTP error mapping

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use employee_domain::{EmployeeId, RepositoryError};
use employee_usecase::EmployeeError;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404 with an empty body
    #[error("Employee not exist with id: {0}")]
    NotFound(EmployeeId),

    #[error("Missing required field '{0}'")]
    MissingField(&'static str),

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error(transparent)]
    Repository(RepositoryError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Repository(RepositoryError::NotFound { .. }) => StatusCode::NOT_FOUND,
            ApiError::MissingField(_) | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn category(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "not_found",
            ApiError::MissingField(_) | ApiError::InvalidBody(_) => "validation",
            ApiError::Repository(_) => "storage",
        }
    }
}

impl From<EmployeeError> for ApiError {
    fn from(err: EmployeeError) -> Self {
        match err {
            EmployeeError::NotFound { id } => ApiError::NotFound(id),
            EmployeeError::MissingField(field) => ApiError::MissingField(field),
            EmployeeError::Repository(e) => ApiError::Repository(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status == StatusCode::NOT_FOUND {
            return status.into_response();
        }
        if status.is_server_error() {
            error!("Request failed: {self}");
        }

        let body = serde_json::json!({
            "error": {
                "category": self.category(),
                "message": self.to_string(),
            }
        });

        (
            status,
            [(header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
