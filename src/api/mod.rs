//! HTTP REST API
//!
//! - `handlers`: Request handlers for all resources
//! - `router`: API router with Swagger documentation
//! - `error`: HTTP mapping for the service error taxonomy

pub mod error;
pub mod handlers;
pub mod router;

use std::sync::Arc;

use crate::application::ServiceRegistry;
use crate::auth::AuthState;

pub use error::ErrorBody;
pub use router::create_api_router;

/// Shared state for all API routes.
#[derive(Clone)]
pub struct AppState {
    pub services: Arc<ServiceRegistry>,
    pub auth: AuthState,
}
