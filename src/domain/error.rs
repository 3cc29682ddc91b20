use thiserror::Error;

/// Result alias used across the service layer.
pub type ServiceResult<T> = Result<T, ServiceError>;

/// Error taxonomy surfaced by the business layer.
///
/// `Validation` and `NotFound` are caller-correctable; `Unauthorized` comes
/// out of the authentication paths; `External` wraps any lower-layer failure
/// and keeps the cause for server-side logging only.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Validation: {0}")]
    Validation(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("External service: {message}")]
    External {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ServiceError {
    /// Not-found by primary key.
    pub fn not_found(entity: &'static str, id: i32) -> Self {
        Self::NotFound {
            entity,
            field: "id",
            value: id.to_string(),
        }
    }

    pub fn external(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::External {
            message: message.into(),
            source: Box::new(source),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self {
        ServiceError::external("storage operation failed", e)
    }
}
