//! Per-entity adapter trait for the generic CRUD service.
//!
//! A `Resource` ties an entity to its transfer shapes and encodes the three
//! per-entity concerns the generic service delegates: input validation,
//! entity/DTO mapping, and partial-update merge rules. Audit columns and the
//! active flag are owned by the service and repository layers; the mapping
//! methods never receive a way to touch them.

use sea_orm::{ActiveModelBehavior, ActiveModelTrait, EntityTrait, IntoActiveModel, PrimaryKeyTrait};
use serde::Serialize;
use validator::Validate;

use crate::domain::{ServiceError, ServiceResult};

pub trait Resource: Send + Sync + 'static
where
    <Self::Entity as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    <Self::Entity as EntityTrait>::Model: IntoActiveModel<Self::ActiveModel> + Clone + Send + Sync,
{
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity> + ActiveModelBehavior + Send + 'static;
    type Dto: Serialize + Send + Sync;
    type CreateDto: Send + Sync;
    type UpdateDto: Send + Sync;
    type PatchDto: Send + Sync;

    /// Entity name as it appears in error messages and logs.
    const NAME: &'static str;

    fn validate_id(id: i32) -> ServiceResult<()> {
        if id <= 0 {
            return Err(ServiceError::Validation(format!(
                "{} id must be positive, got {}",
                Self::NAME,
                id
            )));
        }
        Ok(())
    }

    fn validate_create(dto: &Self::CreateDto) -> ServiceResult<()>;
    fn validate_update(dto: &Self::UpdateDto) -> ServiceResult<()>;

    fn to_dto(model: <Self::Entity as EntityTrait>::Model) -> Self::Dto;

    fn to_dto_list(models: Vec<<Self::Entity as EntityTrait>::Model>) -> Vec<Self::Dto> {
        models.into_iter().map(Self::to_dto).collect()
    }

    /// Build a fresh active model from the create shape. Only entity fields;
    /// the service stamps audit columns and the active flag afterwards.
    fn create_model(dto: Self::CreateDto) -> ServiceResult<Self::ActiveModel>;

    /// Full overwrite of the mapped fields (PUT semantics).
    fn apply_update(dto: Self::UpdateDto, target: &mut Self::ActiveModel) -> ServiceResult<()>;

    /// Partial merge (PATCH semantics): apply only fields that are present,
    /// non-empty/non-default and differ from the loaded row. Reports whether
    /// anything was applied.
    fn apply_patch(
        dto: Self::PatchDto,
        current: &<Self::Entity as EntityTrait>::Model,
        target: &mut Self::ActiveModel,
    ) -> ServiceResult<bool>;
}

/// Run `validator` rules and fold violations into one Validation error,
/// listed per field.
pub fn check(dto: &impl Validate) -> ServiceResult<()> {
    dto.validate().map_err(|errors| {
        let details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let msg = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{:?}", e.code));
                    format!("{}: {}", field, msg)
                })
            })
            .collect();

        let message = if details.is_empty() {
            "validation failed".to_string()
        } else {
            details.join("; ")
        };

        ServiceError::Validation(message)
    })
}
