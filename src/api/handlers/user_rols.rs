//! UserRol assignment handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreateUserRolRequest, PatchUserRolRequest, UpdateUserRolRequest, UserRolDto,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/userrol",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Assignment list", body = Vec<UserRolDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_user_rols(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserRolDto>>, ServiceError> {
    Ok(Json(state.services.user_rols().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/userrol/{id}",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 200, description = "Assignment details", body = UserRolDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_user_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<UserRolDto>, ServiceError> {
    Ok(Json(state.services.user_rols().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/userrol",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    request_body = CreateUserRolRequest,
    responses(
        (status = 201, description = "Assignment created", body = UserRolDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_user_rol(
    State(state): State<AppState>,
    Json(request): Json<CreateUserRolRequest>,
) -> Result<(StatusCode, Json<UserRolDto>), ServiceError> {
    let dto = state.services.user_rols().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/userrol/{id}",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Assignment ID")),
    request_body = UpdateUserRolRequest,
    responses(
        (status = 200, description = "Assignment updated", body = UserRolDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_user_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUserRolRequest>,
) -> Result<Json<UserRolDto>, ServiceError> {
    Ok(Json(state.services.user_rols().update(id, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/userrol/{id}",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Assignment ID")),
    request_body = PatchUserRolRequest,
    responses(
        (status = 200, description = "Current assignment state; both columns are relational so PATCH never writes", body = UserRolDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_user_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchUserRolRequest>,
) -> Result<Json<UserRolDto>, ServiceError> {
    Ok(Json(state.services.user_rols().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/userrol/{id}",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 204, description = "Assignment deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_user_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.user_rols().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/userrol/{id}/soft",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 204, description = "Assignment deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_user_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.user_rols().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/userrol/{id}/activate",
    tag = "UserRols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Assignment ID")),
    responses(
        (status = 204, description = "Assignment activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_user_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.user_rols().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
