//! Authentication handlers

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::{AppState, ErrorBody};
use crate::application::resources::UserDto;
use crate::application::resource::check;
use crate::domain::ServiceError;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Username or email
    #[validate(length(min = 1))]
    pub username: String,
    #[validate(length(min = 1))]
    pub password: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserDto,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TokenInfo {
    pub user_id: i32,
    pub username: String,
    pub roles: Vec<String>,
    pub expires_at: i64,
}

fn bearer_token(headers: &HeaderMap) -> Result<&str, ServiceError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .ok_or_else(|| ServiceError::Unauthorized("Missing authentication token".into()))
}

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Successful login", body = LoginResponse),
        (status = 401, description = "Invalid credentials", body = ErrorBody)
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, ServiceError> {
    check(&request)?;

    let result = state
        .services
        .auth()
        .login(&request.username, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        token: result.token,
        token_type: result.token_type,
        expires_in: result.expires_in,
        user: result.user,
    }))
}

#[utoipa::path(
    get,
    path = "/api/auth/validate",
    tag = "Authentication",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Token is valid", body = TokenInfo),
        (status = 401, description = "Missing or invalid token", body = ErrorBody)
    )
)]
pub async fn validate(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<TokenInfo>, ServiceError> {
    let token = bearer_token(&headers)?;
    let claims = state.services.auth().validate(token)?;

    let user_id = claims
        .user_id()
        .ok_or_else(|| ServiceError::Unauthorized("Invalid authentication token".into()))?;

    Ok(Json(TokenInfo {
        user_id,
        username: claims.username,
        roles: claims.roles,
        expires_at: claims.exp,
    }))
}

#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "Authentication",
    responses(
        (status = 204, description = "Logged out; tokens are stateless, the client discards its copy")
    )
)]
pub async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
