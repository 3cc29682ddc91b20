//! Person management handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::api::{AppState, ErrorBody};
use crate::application::resources::{
    CreatePersonRequest, PatchPersonRequest, PersonDto, UpdatePersonRequest,
};
use crate::domain::ServiceError;

#[utoipa::path(
    get,
    path = "/api/person",
    tag = "Persons",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Person list", body = Vec<PersonDto>),
        (status = 401, description = "Unauthorized", body = ErrorBody)
    )
)]
pub async fn list_persons(
    State(state): State<AppState>,
) -> Result<Json<Vec<PersonDto>>, ServiceError> {
    Ok(Json(state.services.persons().get_all().await?))
}

#[utoipa::path(
    get,
    path = "/api/person/{id}",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 200, description = "Person details", body = PersonDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<PersonDto>, ServiceError> {
    Ok(Json(state.services.persons().get_by_id(id).await?))
}

#[utoipa::path(
    post,
    path = "/api/person",
    tag = "Persons",
    security(("bearer_auth" = [])),
    request_body = CreatePersonRequest,
    responses(
        (status = 201, description = "Person created", body = PersonDto),
        (status = 400, description = "Validation error", body = ErrorBody)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(request): Json<CreatePersonRequest>,
) -> Result<(StatusCode, Json<PersonDto>), ServiceError> {
    let dto = state.services.persons().create(request).await?;
    Ok((StatusCode::CREATED, Json(dto)))
}

#[utoipa::path(
    put,
    path = "/api/person/{id}",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person ID")),
    request_body = UpdatePersonRequest,
    responses(
        (status = 200, description = "Person updated", body = PersonDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<UpdatePersonRequest>,
) -> Result<Json<PersonDto>, ServiceError> {
    Ok(Json(state.services.persons().update(id, request).await?))
}

#[utoipa::path(
    patch,
    path = "/api/person/{id}",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person ID")),
    request_body = PatchPersonRequest,
    responses(
        (status = 200, description = "Person patched", body = PersonDto),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn patch_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<PatchPersonRequest>,
) -> Result<Json<PersonDto>, ServiceError> {
    Ok(Json(state.services.persons().patch(id, request).await?))
}

#[utoipa::path(
    delete,
    path = "/api/person/{id}",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Person deleted"),
        (status = 404, description = "Not found", body = ErrorBody),
        (status = 500, description = "Dependent rows exist", body = ErrorBody)
    )
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.persons().delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/person/{id}/soft",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Person deactivated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn soft_delete_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.persons().soft_delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/person/{id}/activate",
    tag = "Persons",
    security(("bearer_auth" = [])),
    params(("id" = i32, Path, description = "Person ID")),
    responses(
        (status = 204, description = "Person activated"),
        (status = 404, description = "Not found", body = ErrorBody)
    )
)]
pub async fn activate_person(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ServiceError> {
    state.services.persons().activate(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
