//! Module management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreateModuleRequest, FormDto, ModuleDto, PatchModuleRequest, UpdateModuleRequest,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/module",
    tag = "Modules",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Module list", body = Vec<ModuleDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_modules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ModuleDto>>, ServiceError> {
    Ok(Json(state.services.modules().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/module/{id}",
    tag = "Modules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Module ID")),
    responses(
        (status = 200, description = "Module details", body = ModuleDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ModuleDto>, ServiceError> {
    Ok(Json(state.services.modules().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/module",
    tag = "Modules",
    security(("bearer_auth" = [])),
    request_body = CreateModuleRequest,
    responses(
        (status = 201, description = "Module created", body = ModuleDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_module(
    State(state): State<AppState>,
    Json(request): Json<CreateModuleRequest>,
) -> Result<(StatusCode, Json<ModuleDto>), ServiceError> {
    let dto = state.services.modules().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/module/{id}",
    tag = "Modules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Module ID")),
    request_body = UpdateModuleRequest,
    responses(
        (status = 200, description = "Module updated", body = ModuleDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateModuleRequest>,
) -> Result<Json<ModuleDto>, ServiceError> {
    Ok(Json(state.services.modules().update(id, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/module/{id}",
    tag = "Modules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Module ID")),
    request_body = PatchModuleRequest,
    responses(
        (status = 200, description = "Module patched", body = ModuleDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchModuleRequest>,
) -> Result<Json<ModuleDto>, ServiceError> {
    Ok(Json(state.services.modules().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/module/{id}",
    tag = "Modules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Module ID")),
    responses(
        (status = 204, description = "Module deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Dependent rows exist", body = ErrorBody)
    )
)]
pub async fn delete_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.modules().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/module/{id}/soft",
    tag = "Modules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Module ID")),
    responses(
        (status = 204, description = "Module deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.modules().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/module/{id}/activate",
    tag = "Modules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Module ID")),
    responses(
        (status = 204, description = "Module activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.modules().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/module/{id}/forms",
    tag = "Modules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Module ID")),
    responses(
        (status = 200, description = "Forms placed in the module", body = Vec<FormDto>),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn list_module_forms(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Vec<FormDto>>, ServiceError> {
    Ok(Json(state.services.queries().forms_for_module(id).await?))
}
