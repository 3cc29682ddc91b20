//! RolForm grant handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreateRolFormRequest, PatchRolFormRequest, RolFormDto, UpdateRolFormRequest,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/rolform",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Grant list", body = Vec<RolFormDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_rol_forms(
    State(state): State<AppState>,
) -> Result<Json<Vec<RolFormDto>>, ServiceError> {
    Ok(Json(state.services.rol_forms().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/rolform/{id}",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Grant ID")),
    responses(
        (status = 200, description = "Grant details", body = RolFormDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_rol_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RolFormDto>, ServiceError> {
    Ok(Json(state.services.rol_forms().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/rolform",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    request_body = CreateRolFormRequest,
    responses(
        (status = 201, description = "Grant created", body = RolFormDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_rol_form(
    State(state): State<AppState>,
    Json(request): Json<CreateRolFormRequest>,
) -> Result<(StatusCode, Json<RolFormDto>), ServiceError> {
    let dto = state.services.rol_forms().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/rolform/{id}",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Grant ID")),
    request_body = UpdateRolFormRequest,
    responses(
        (status = 200, description = "Grant updated", body = RolFormDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_rol_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateRolFormRequest>,
) -> Result<Json<RolFormDto>, ServiceError> {
    Ok(Json(state.services.rol_forms().update(id, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/rolform/{id}",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Grant ID")),
    request_body = PatchRolFormRequest,
    responses(
        (status = 200, description = "Grant patched; only the permission text is patchable", body = RolFormDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_rol_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchRolFormRequest>,
) -> Result<Json<RolFormDto>, ServiceError> {
    Ok(Json(state.services.rol_forms().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/rolform/{id}",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Grant ID")),
    responses(
        (status = 204, description = "Grant deleted"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn delete_rol_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.rol_forms().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/rolform/{id}/soft",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Grant ID")),
    responses(
        (status = 204, description = "Grant deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_rol_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.rol_forms().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/rolform/{id}/activate",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Grant ID")),
    responses(
        (status = 204, description = "Grant activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_rol_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.rol_forms().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    get,
    path = "/api/rolform/byRol/{rol_id}",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("rol_id" = i32, Path, description = "Rol ID")),
    responses(
        (status = 200, description = "Grants for the rol", body = Vec<RolFormDto>),
        (status = 404, description = "Rol not found", body = ErrorBody)
    )
)]
pub async fn list_rol_forms_by_rol(
    State(state): State<AppState>,
    Path(rol_id): Path<i32>,
) -> Result<Json<Vec<RolFormDto>>, ServiceError> {
    Ok(Json(state.services.queries().rol_forms_by_rol(rol_id).await?))
}

#[utoipa::path(
    get,
    path = "/api/rolform/byForm/{form_id}",
    tag = "RolForms",
    security(("bearer_auth" = [])),
    params(("form_id" = i32, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Grants for the form", body = Vec<RolFormDto>),
        (status = 404, description = "Form not found", body = ErrorBody)
    )
)]
pub async fn list_rol_forms_by_form(
    State(state): State<AppState>,
    Path(form_id): Path<i32>,
) -> Result<Json<Vec<RolFormDto>>, ServiceError> {
    Ok(Json(
        state.services.queries().rol_forms_by_form(form_id).await?,
    ))
}
