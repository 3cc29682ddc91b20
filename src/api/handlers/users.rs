//! User management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreateUserRequest, PatchUserRequest, RolDto, UpdateUserRequest, UserDto,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/user",
    tag = "Users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "User list", body = Vec<UserDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> Result<Json<Vec<UserDto>>, ServiceError> {
    Ok(Json(state.services.users().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserDto>, ServiceError> {
    Ok(Json(state.services.users().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/user",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserDto>), ServiceError> {
    let dto = state.services.users().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<Json<UserDto>, ServiceError> {
    Ok(Json(state.services.users().update(id, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    request_body = PatchUserRequest,
    responses(
        (status = 200, description = "User patched; a password-only body changes just the password", body = UserDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchUserRequest>,
) -> Result<Json<UserDto>, ServiceError> {
    Ok(Json(state.services.users().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/user/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Dependent rows exist", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.users().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/user/{id}/soft",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.users().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/user/{id}/activate",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 204, description = "User activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.users().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/user/{id}/roles",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "User ID")),
    responses(
        (status = 200, description = "Rols assigned to the user", body = Vec<RolDto>),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn list_user_roles(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<RolDto>>, ServiceError> {
    Ok(Json(state.services.queries().rols_for_user(id).await?))
}
