//! Module resource.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::domain::ServiceResult;
use crate::infrastructure::database::entities::module;

#[derive(Debug, Serialize, ToSchema)]
pub struct ModuleDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<module::Model> for ModuleDto {
    fn from(m: module::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateModuleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateModuleRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchModuleRequest {
    pub name: Option<String>,
    pub description: Option<String>,
}

pub struct ModuleResource;

impl Resource for ModuleResource {
    type Entity = module::Entity;
    type ActiveModel = module::ActiveModel;
    type Dto = ModuleDto;
    type CreateDto = CreateModuleRequest;
    type UpdateDto = UpdateModuleRequest;
    type PatchDto = PatchModuleRequest;

    const NAME: &'static str = "Module";

    fn validate_create(dto: &CreateModuleRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdateModuleRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: module::Model) -> ModuleDto {
        ModuleDto::from(model)
    }

    fn create_model(dto: CreateModuleRequest) -> ServiceResult<module::ActiveModel> {
        Ok(module::ActiveModel {
            name: Set(dto.name),
            description: Set(dto.description),
            ..Default::default()
        })
    }

    fn apply_update(dto: UpdateModuleRequest, target: &mut module::ActiveModel) -> ServiceResult<()> {
        target.name = Set(dto.name);
        target.description = Set(dto.description);
        Ok(())
    }

    fn apply_patch(
        dto: PatchModuleRequest,
        current: &module::Model,
        target: &mut module::ActiveModel,
    ) -> ServiceResult<bool> {
        let mut changed = false;
        if let Some(v) = dto.name {
            if !v.is_empty() && v != current.name {
                target.name = Set(v);
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
