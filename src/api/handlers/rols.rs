//! Rol management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreateRolRequest, FormDto, PatchRolRequest, RolDto, UpdateRolRequest,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/rol",
    tag = "Rols",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Rol list", body = Vec<RolDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_rols(State(state): State<AppState>) -> Result<Json<Vec<RolDto>>, ServiceError> {
    Ok(Json(state.services.rols().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/rol/{id}",
    tag = "Rols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rol ID")),
    responses(
        (status = 200, description = "Rol details", body = RolDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RolDto>, ServiceError> {
    Ok(Json(state.services.rols().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/rol",
    tag = "Rols",
    security(("bearer_auth" = [])),
    request_body = CreateRolRequest,
    responses(
        (status = 201, description = "Rol created", body = RolDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_rol(
    State(state): State<AppState>,
    Json(request): Json<CreateRolRequest>,
) -> Result<(StatusCode, Json<RolDto>), ServiceError> {
    let dto = state.services.rols().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/rol/{id}",
    tag = "Rols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rol ID")),
    request_body = UpdateRolRequest,
    responses(
        (status = 200, description = "Rol updated", body = RolDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRolRequest>,
) -> Result<Json<RolDto>, ServiceError> {
    Ok(Json(state.services.rols().update(id, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/rol/{id}",
    tag = "Rols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rol ID")),
    request_body = PatchRolRequest,
    responses(
        (status = 200, description = "Rol patched", body = RolDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchRolRequest>,
) -> Result<Json<RolDto>, ServiceError> {
    Ok(Json(state.services.rols().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/rol/{id}",
    tag = "Rols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rol ID")),
    responses(
        (status = 204, description = "Rol deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Dependent rows exist", body = ErrorBody)
    )
)]
pub async fn delete_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.rols().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/rol/{id}/soft",
    tag = "Rols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rol ID")),
    responses(
        (status = 204, description = "Rol deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.rols().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/rol/{id}/activate",
    tag = "Rols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rol ID")),
    responses(
        (status = 204, description = "Rol activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.rols().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/rol/{id}/forms",
    tag = "Rols",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Rol ID")),
    responses(
        (status = 200, description = "Forms granted to the rol", body = Vec<FormDto>),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn list_forms_for_rol(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<FormDto>>, ServiceError> {
    Ok(Json(state.services.queries().forms_for_rol(id).await?))
}
