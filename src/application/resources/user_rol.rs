//! UserRol resource.
//!
//! Both columns are relational, so PATCH has nothing to merge: the shape is
//! accepted for surface uniformity and always reports no change. Moving an
//! assignment is a PUT.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::domain::ServiceResult;
use crate::infrastructure::database::entities::user_rol;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserRolDto {
    pub id: i32,
    pub user_id: i32,
    pub rol_id: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<user_rol::Model> for UserRolDto {
    fn from(m: user_rol::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            rol_id: m.rol_id,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRolRequest {
    #[validate(range(min = 1, message = "must be positive"))]
    pub user_id: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub rol_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRolRequest {
    #[validate(range(min = 1, message = "must be positive"))]
    pub user_id: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub rol_id: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchUserRolRequest {}

pub struct UserRolResource;

impl Resource for UserRolResource {
    type Entity = user_rol::Entity;
    type ActiveModel = user_rol::ActiveModel;
    type Dto = UserRolDto;
    type CreateDto = CreateUserRolRequest;
    type UpdateDto = UpdateUserRolRequest;
    type PatchDto = PatchUserRolRequest;

    const NAME: &'static str = "UserRol";

    fn validate_create(dto: &CreateUserRolRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdateUserRolRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: user_rol::Model) -> UserRolDto {
        UserRolDto::from(model)
    }

    fn create_model(dto: CreateUserRolRequest) -> ServiceResult<user_rol::ActiveModel> {
        Ok(user_rol::ActiveModel {
            user_id: Set(dto.user_id),
            rol_id: Set(dto.rol_id),
            ..Default::default()
        })
    }

    fn apply_update(dto: UpdateUserRolRequest, target: &mut user_rol::ActiveModel) -> ServiceResult<()> {
        target.user_id = Set(dto.user_id);
        target.rol_id = Set(dto.rol_id);
        Ok(())
    }

    fn apply_patch(
        _dto: PatchUserRolRequest,
        _current: &user_rol::Model,
        _target: &mut user_rol::ActiveModel,
    ) -> ServiceResult<bool> {
        Ok(false)
    }
}
