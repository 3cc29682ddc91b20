//! FormModule placement handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreateFormModuleRequest, FormModuleDto, PatchFormModuleRequest, UpdateFormModuleRequest,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/formmodule",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Placement list", body = Vec<FormModuleDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_form_modules(
    State(state): State<AppState>,
) -> Result<Json<Vec<FormModuleDto>>, ServiceError> {
    Ok(Json(state.services.form_modules().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/formmodule/{id}",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Placement ID")),
    responses(
        (status = 200, description = "Placement details", body = FormModuleDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<FormModuleDto>, ServiceError> {
    Ok(Json(state.services.form_modules().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/formmodule",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    request_body = CreateFormModuleRequest,
    responses(
        (status = 201, description = "Placement created", body = FormModuleDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_form_module(
    State(state): State<AppState>,
    Json(request): Json<CreateFormModuleRequest>,
) -> Result<(StatusCode, Json<FormModuleDto>), ServiceError> {
    let dto = state.services.form_modules().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/formmodule/{id}",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Placement ID")),
    request_body = UpdateFormModuleRequest,
    responses(
        (status = 200, description = "Placement updated", body = FormModuleDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFormModuleRequest>,
) -> Result<Json<FormModuleDto>, ServiceError> {
    Ok(Json(
        state.services.form_modules().update(id, request).await?,
    ))
}

#[utoipa::path(
    patch,
    path = "/api/formmodule/{id}",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Placement ID")),
    request_body = PatchFormModuleRequest,
    responses(
        (status = 200, description = "Placement patched; only the status text is patchable", body = FormModuleDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchFormModuleRequest>,
) -> Result<Json<FormModuleDto>, ServiceError> {
    Ok(Json(state.services.form_modules().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/formmodule/{id}",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Placement ID")),
    responses(
        (status = 204, description = "Placement deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.form_modules().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/formmodule/{id}/soft",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Placement ID")),
    responses(
        (status = 204, description = "Placement deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.form_modules().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/formmodule/{id}/activate",
    tag = "FormModules",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Placement ID")),
    responses(
        (status = 204, description = "Placement activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_form_module(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.form_modules().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
