//! FormModule resource.
//!
//! PATCH only touches `status_procedure`; the form/module references are
//! PUT-only.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::domain::ServiceResult;
use crate::infrastructure::database::entities::form_module;

#[derive(Debug, Serialize, ToSchema)]
pub struct FormModuleDto {
    pub id: i32,
    pub form_id: i32,
    pub module_id: i32,
    pub status_procedure: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<form_module::Model> for FormModuleDto {
    fn from(m: form_module::Model) -> Self {
        Self {
            id: m.id,
            form_id: m.form_id,
            module_id: m.module_id,
            status_procedure: m.status_procedure,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFormModuleRequest {
    #[validate(range(min = 1, message = "must be positive"))]
    pub form_id: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub module_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub status_procedure: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFormModuleRequest {
    #[validate(range(min = 1, message = "must be positive"))]
    pub form_id: i32,
    #[validate(range(min = 1, message = "must be positive"))]
    pub module_id: i32,
    #[validate(length(min = 1, max = 100))]
    pub status_procedure: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchFormModuleRequest {
    pub status_procedure: Option<String>,
}

pub struct FormModuleResource;

impl Resource for FormModuleResource {
    type Entity = form_module::Entity;
    type ActiveModel = form_module::ActiveModel;
    type Dto = FormModuleDto;
    type CreateDto = CreateFormModuleRequest;
    type UpdateDto = UpdateFormModuleRequest;
    type PatchDto = PatchFormModuleRequest;

    const NAME: &'static str = "FormModule";

    fn validate_create(dto: &CreateFormModuleRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdateFormModuleRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: form_module::Model) -> FormModuleDto {
        FormModuleDto::from(model)
    }

    fn create_model(dto: CreateFormModuleRequest) -> ServiceResult<form_module::ActiveModel> {
        Ok(form_module::ActiveModel {
            form_id: Set(dto.form_id),
            module_id: Set(dto.module_id),
            status_procedure: Set(dto.status_procedure),
            ..Default::default()
        })
    }

    fn apply_update(
        dto: UpdateFormModuleRequest,
        target: &mut form_module::ActiveModel,
    ) -> ServiceResult<()> {
        target.form_id = Set(dto.form_id);
        target.module_id = Set(dto.module_id);
        target.status_procedure = Set(dto.status_procedure);
        Ok(())
    }

    fn apply_patch(
        dto: PatchFormModuleRequest,
        current: &form_module::Model,
        target: &mut form_module::ActiveModel,
    ) -> ServiceResult<bool> {
        let mut changed = false;
        if let Some(v) = dto.status_procedure {
            if !v.is_empty() && v != current.status_procedure {
                target.status_procedure = Set(v);
                changed = true;
            }
        }
        Ok(changed)
    }
}
