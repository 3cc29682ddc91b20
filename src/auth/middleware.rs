//! Authentication middleware for Axum

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use super::jwt::{verify_token, Claims, JwtConfig};

/// Authentication state carried by the middleware
#[derive(Clone)]
pub struct AuthState {
    pub jwt_config: JwtConfig,
}

/// Authenticated user information extracted from a verified token
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: i32,
    pub username: String,
    pub roles: Vec<String>,
}

impl AuthenticatedUser {
    pub fn from_claims(claims: Claims) -> Option<Self> {
        Some(Self {
            user_id: claims.user_id()?,
            username: claims.username,
            roles: claims.roles,
        })
    }
}

/// Extract token from Authorization header
fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header.strip_prefix("Bearer ")
}

/// JWT authentication middleware - requires valid token
pub async fn auth_middleware(
    State(auth_state): State<AuthState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(String::from);
    let Some(auth_header) = auth_header else {
        return auth_error_response("Missing authentication token");
    };

    let Some(token) = extract_token(&auth_header) else {
        return auth_error_response("Invalid authentication token");
    };

    match verify_token(token, &auth_state.jwt_config) {
        Ok(claims) => {
            if claims.is_expired() {
                return auth_error_response("Token has expired");
            }

            let Some(user) = AuthenticatedUser::from_claims(claims) else {
                return auth_error_response("Invalid authentication token");
            };
            request.extensions_mut().insert(user);

            next.run(request).await
        }
        Err(_) => auth_error_response("Invalid authentication token"),
    }
}

/// Create an authentication error response
fn auth_error_response(message: &str) -> Response {
    let body = Json(json!({ "message": message }));
    (StatusCode::UNAUTHORIZED, body).into_response()
}
