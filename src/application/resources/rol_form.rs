//! RolForm resource.
//!
//! PATCH only touches `permission`; the rol/form references are PUT-only.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::domain::ServiceResult;
use crate::infrastructure::database::entities::rol_form;

#[derive(Debug, Serialize, ToSchema)]
pub struct RolFormDto {
    pub id: i32,
    pub rol_id: i32,
    pub form_id: i32,
    pub permission: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<rol_form::Model> for RolFormDto {
    fn from(m: rol_form::Model) -> Self {
        Self {
            id: m.id,
            rol_id: m.rol_id,
            form_id: m.form_id,
            permission: m.permission,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateRolFormRequest {
    #[validate(range(min = 1, message = "must be positive"))]
    pub rol_id: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub form_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub permission: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateRolFormRequest {
    #[validate(range(min = 1, message = "must be positive"))]
    pub rol_id: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub form_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub permission: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchRolFormRequest {
    pub permission: Option<String>,
}

pub struct RolFormResource;

impl Resource for RolFormResource {
    type Entity = rol_form::Entity;
    type ActiveModel = rol_form::ActiveModel;
    type Dto = RolFormDto;
    type CreateDto = CreateRolFormRequest;
    type UpdateDto = UpdateRolFormRequest;
    type PatchDto = PatchRolFormRequest;

    const NAME: &'static str = "RolForm";

    fn validate_create(dto: &CreateRolFormRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdateRolFormRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: rol_form::Model) -> RolFormDto {
        RolFormDto::from(model)
    }

    fn create_model(dto: CreateRolFormRequest) -> ServiceResult<rol_form::ActiveModel> {
        Ok(rol_form::ActiveModel {
            rol_id: Set(dto.rol_id),
            form_id: Set(dto.form_id),
            permission: Set(dto.permission),
            ..Default::default()
        })
    }

    fn apply_update(dto: UpdateRolFormRequest, target: &mut rol_form::ActiveModel) -> ServiceResult<()> {
        target.rol_id = Set(dto.rol_id);
        target.form_id = Set(dto.form_id);
        target.permission = Set(dto.permission);
        Ok(())
    }

    fn apply_patch(
        dto: PatchRolFormRequest,
        current: &rol_form::Model,
        target: &mut rol_form::ActiveModel,
    ) -> ServiceResult<bool> {
        let mut changed = false;
        if let Some(v) = dto.permission {
            if !v.is_empty() && v != current.permission {
                target.permission = Set(v);
                changed = true;
            }
        }
        Ok(changed)
    }
}
