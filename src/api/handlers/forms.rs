//! Form management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreateFormRequest, FormDto, PatchFormRequest, UpdateFormRequest,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/form",
    tag = "Forms",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Form list", body = Vec<FormDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_forms(State(state): State<AppState>) -> Result<Json<Vec<FormDto>>, ServiceError> {
    Ok(Json(state.services.forms().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/form/{id}",
    tag = "Forms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 200, description = "Form details", body = FormDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<FormDto>, ServiceError> {
    Ok(Json(state.services.forms().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/form",
    tag = "Forms",
    security(("bearer_auth" = [])),
    request_body = CreateFormRequest,
    responses(
        (status = 201, description = "Form created", body = FormDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_form(
    State(state): State<AppState>,
    Json(request): Json<CreateFormRequest>,
) -> Result<(StatusCode, Json<FormDto>), ServiceError> {
    let dto = state.services.forms().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/form/{id}",
    tag = "Forms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Form ID")),
    request_body = UpdateFormRequest,
    responses(
        (status = 200, description = "Form updated", body = FormDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdateFormRequest>,
) -> Result<Json<FormDto>, ServiceError> {
    Ok(Json(state.services.forms().update(id, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/form/{id}",
    tag = "Forms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Form ID")),
    request_body = PatchFormRequest,
    responses(
        (status = 200, description = "Form patched", body = FormDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchFormRequest>,
) -> Result<Json<FormDto>, ServiceError> {
    Ok(Json(state.services.forms().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/form/{id}",
    tag = "Forms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 204, description = "Form deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Dependent rows exist", body = ErrorBody)
    )
)]
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.forms().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/form/{id}/soft",
    tag = "Forms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 204, description = "Form deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.forms().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/form/{id}/activate",
    tag = "Forms",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Form ID")),
    responses(
        (status = 204, description = "Form activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_form(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.forms().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
