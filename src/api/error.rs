//! HTTP mapping for the service error taxonomy.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::domain::ServiceError;

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub message: String,
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ServiceError::Validation(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            ServiceError::NotFound { .. } => (StatusCode::NOT_FOUND, self.to_string()),
            ServiceError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            // The cause stays in the server log; clients get a generic body.
            ServiceError::External { message, source } => {
                error!(cause = %source, "external service failure: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { message })).into_response()
    }
}
