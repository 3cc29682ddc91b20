//! Person resource.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::domain::ServiceResult;
use crate::infrastructure::database::entities::person;

#[derive(Debug, Serialize, ToSchema)]
pub struct PersonDto {
    pub id: i32,
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub identification_type: String,
    pub identification_number: i64,
    pub signing: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<person::Model> for PersonDto {
    fn from(m: person::Model) -> Self {
        Self {
            id: m.id,
            first_name: m.first_name,
            middle_name: m.middle_name,
            last_name: m.last_name,
            email: m.email,
            phone: m.phone,
            identification_type: m.identification_type,
            identification_number: m.identification_number,
            signing: m.signing,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreatePersonRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    pub middle_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub identification_type: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub identification_number: i64,
    pub signing: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdatePersonRequest {
    #[validate(length(min = 1, max = 50))]
    pub first_name: String,
    pub middle_name: Option<String>,
    #[validate(length(min = 1, max = 50))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub identification_type: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub identification_number: i64,
    pub signing: Option<String>,
}

/// Optional fields (middle name, phone, signing) may be cleared to an empty
/// string via PATCH; required fields only accept non-empty replacements.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchPersonRequest {
    pub first_name: Option<String>,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub identification_type: Option<String>,
    pub identification_number: Option<i64>,
    pub signing: Option<String>,
}

pub struct PersonResource;

impl Resource for PersonResource {
    type Entity = person::Entity;
    type ActiveModel = person::ActiveModel;
    type Dto = PersonDto;
    type CreateDto = CreatePersonRequest;
    type UpdateDto = UpdatePersonRequest;
    type PatchDto = PatchPersonRequest;

    const NAME: &'static str = "Person";

    fn validate_create(dto: &CreatePersonRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdatePersonRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: person::Model) -> PersonDto {
        PersonDto::from(model)
    }

    fn create_model(dto: CreatePersonRequest) -> ServiceResult<person::ActiveModel> {
        Ok(person::ActiveModel {
            first_name: Set(dto.first_name),
            middle_name: Set(dto.middle_name),
            last_name: Set(dto.last_name),
            email: Set(dto.email),
            phone: Set(dto.phone),
            identification_type: Set(dto.identification_type),
            identification_number: Set(dto.identification_number),
            signing: Set(dto.signing),
            ..Default::default()
        })
    }

    fn apply_update(dto: UpdatePersonRequest, target: &mut person::ActiveModel) -> ServiceResult<()> {
        target.first_name = Set(dto.first_name);
        target.middle_name = Set(dto.middle_name);
        target.last_name = Set(dto.last_name);
        target.email = Set(dto.email);
        target.phone = Set(dto.phone);
        target.identification_type = Set(dto.identification_type);
        target.identification_number = Set(dto.identification_number);
        target.signing = Set(dto.signing);
        Ok(())
    }

    fn apply_patch(
        dto: PatchPersonRequest,
        current: &person::Model,
        target: &mut person::ActiveModel,
    ) -> ServiceResult<bool> {
        let mut changed = false;
        if let Some(v) = dto.first_name {
            if !v.is_empty() && v != current.first_name {
                target.first_name = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.middle_name {
            if current.middle_name.as_deref() != Some(v.as_str()) {
                target.middle_name = Set(Some(v));
                changed = true;
            }
        }
        if let Some(v) = dto.last_name {
            if !v.is_empty() && v != current.last_name {
                target.last_name = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.email {
            if !v.is_empty() && v != current.email {
                target.email = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.phone {
            if current.phone.as_deref() != Some(v.as_str()) {
                target.phone = Set(Some(v));
                changed = true;
            }
        }
        if let Some(v) = dto.identification_type {
            if !v.is_empty() && v != current.identification_type {
                target.identification_type = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.identification_number {
            if v > 0 && v != current.identification_number {
                target.identification_number = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.signing {
            if current.signing.as_deref() != Some(v.as_str()) {
                target.signing = Set(Some(v));
                changed = true;
            }
        }
        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create() -> CreatePersonRequest {
        CreatePersonRequest {
            first_name: "Ada".into(),
            middle_name: None,
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: Some("555-0100".into()),
            identification_type: "CC".into(),
            identification_number: 1012345678,
            signing: None,
        }
    }

    #[test]
    fn accepts_valid_person() {
        assert!(PersonResource::validate_create(&valid_create()).is_ok());
    }

    #[test]
    fn rejects_malformed_email() {
        let mut dto = valid_create();
        dto.email = "not-an-email".into();

        let err = PersonResource::validate_create(&dto).unwrap_err();
        assert!(err.to_string().contains("email"), "got: {}", err);
    }

    #[test]
    fn rejects_non_positive_identification_number() {
        let mut dto = valid_create();
        dto.identification_number = 0;
        assert!(PersonResource::validate_create(&dto).is_err());

        dto.identification_number = -5;
        assert!(PersonResource::validate_create(&dto).is_err());
    }

    #[test]
    fn patch_skips_empty_required_fields() {
        let current = person::Model {
            id: 1,
            first_name: "Ada".into(),
            middle_name: Some("King".into()),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            identification_type: "CC".into(),
            identification_number: 1012345678,
            signing: None,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            deleted_at: None,
        };
        let mut target = person::ActiveModel::default();

        let dto = PatchPersonRequest {
            first_name: Some(String::new()),
            ..Default::default()
        };
        let changed = PersonResource::apply_patch(dto, &current, &mut target).unwrap();
        assert!(!changed);
    }

    #[test]
    fn patch_clears_optional_field_to_empty() {
        let current = person::Model {
            id: 1,
            first_name: "Ada".into(),
            middle_name: Some("King".into()),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            phone: None,
            identification_type: "CC".into(),
            identification_number: 1012345678,
            signing: None,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            deleted_at: None,
        };
        let mut target = person::ActiveModel::default();

        let dto = PatchPersonRequest {
            middle_name: Some(String::new()),
            ..Default::default()
        };
        let changed = PersonResource::apply_patch(dto, &current, &mut target).unwrap();
        assert!(changed);
    }
}
