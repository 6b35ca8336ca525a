//! API error taxonomy and response mapping.
//!
//! Every error the handlers surface renders as the same body shape,
//! `{"message": "<text>"}`, with the status code carried by the variant.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::store::StoreError;

/// Errors a handler can return to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Required fields missing or empty.
    #[error("Title and description are required.")]
    MissingFields,

    /// No task with the requested id.
    #[error("Requested task not found.")]
    TaskNotFound,

    /// Record store failure (snapshot I/O).
    #[error("Task storage failed.")]
    Store(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingFields => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::TaskNotFound => StatusCode::NOT_FOUND,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Store(err) = &self {
            tracing::error!(error = %err, "Store operation failed");
        }
        let body = ErrorBody {
            message: self.to_string(),
        };
        (self.status(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_match_the_contract() {
        assert_eq!(ApiError::MissingFields.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(ApiError::TaskNotFound.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn messages_are_the_exact_contract_strings() {
        assert_eq!(
            ApiError::MissingFields.to_string(),
            "Title and description are required."
        );
        assert_eq!(ApiError::TaskNotFound.to_string(), "Requested task not found.");
    }
}
