//! Rol resource: DTOs, validation and merge rules.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::domain::ServiceResult;
use crate::infrastructure::database::entities::rol;

#[derive(Debug, Serialize, ToSchema)]
pub struct RolDto {
    pub id: i32,
    pub rol_type: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<rol::Model> for RolDto {
    fn from(m: rol::Model) -> Self {
        Self {
            id: m.id,
            rol_type: m.rol_type,
            description: m.description,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRolRequest {
    #[validate(length(min = 1, max = 50))]
    pub rol_type: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRolRequest {
    #[validate(length(min = 1, max = 50))]
    pub rol_type: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

/// The active flag is deliberately absent: activation state changes go
/// through the dedicated soft-delete/activate endpoints.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchRolRequest {
    pub rol_type: Option<String>,
    pub description: Option<String>,
}

pub struct RolResource;

impl Resource for RolResource {
    type Entity = rol::Entity;
    type ActiveModel = rol::ActiveModel;
    type Dto = RolDto;
    type CreateDto = CreateRolRequest;
    type UpdateDto = UpdateRolRequest;
    type PatchDto = PatchRolRequest;

    const NAME: &'static str = "Rol";

    fn validate_create(dto: &CreateRolRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdateRolRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: rol::Model) -> RolDto {
        RolDto::from(model)
    }

    fn create_model(dto: CreateRolRequest) -> ServiceResult<rol::ActiveModel> {
        Ok(rol::ActiveModel {
            rol_type: Set(dto.rol_type),
            description: Set(dto.description),
            ..Default::default()
        })
    }

    fn apply_update(dto: UpdateRolRequest, target: &mut rol::ActiveModel) -> ServiceResult<()> {
        target.rol_type = Set(dto.rol_type);
        target.description = Set(dto.description);
        Ok(())
    }

    fn apply_patch(
        dto: PatchRolRequest,
        current: &rol::Model,
        target: &mut rol::ActiveModel,
    ) -> ServiceResult<bool> {
        let mut changed = false;
        if let Some(v) = dto.rol_type {
            if !v.is_empty() && v != current.rol_type {
                target.rol_type = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.description {
            if !v.is_empty() && v != current.description {
                target.description = Set(v);
                changed = true;
            }
        }
        Ok(changed)
    }
}
