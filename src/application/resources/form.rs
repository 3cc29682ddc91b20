//! Form resource.
//!
//! The question/answer/type_question triple is carried verbatim from the
//! administration UI; the backend stores it without interpretation.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::domain::ServiceResult;
use crate::infrastructure::database::entities::form;

#[derive(Debug, Serialize, ToSchema)]
pub struct FormDto {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub route: String,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub type_question: Option<String>,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<form::Model> for FormDto {
    fn from(m: form::Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            description: m.description,
            route: m.route,
            question: m.question,
            answer: m.answer,
            type_question: m.type_question,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateFormRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub route: String,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub type_question: Option<String>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateFormRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 255))]
    pub description: String,
    #[validate(length(min = 1, max = 255))]
    pub route: String,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub type_question: Option<String>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchFormRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub route: Option<String>,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub type_question: Option<String>,
}

pub struct FormResource;

impl Resource for FormResource {
    type Entity = form::Entity;
    type ActiveModel = form::ActiveModel;
    type Dto = FormDto;
    type CreateDto = CreateFormRequest;
    type UpdateDto = UpdateFormRequest;
    type PatchDto = PatchFormRequest;

    const NAME: &'static str = "Form";

    fn validate_create(dto: &CreateFormRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdateFormRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: form::Model) -> FormDto {
        FormDto::from(model)
    }

    fn create_model(dto: CreateFormRequest) -> ServiceResult<form::ActiveModel> {
        Ok(form::ActiveModel {
            name: Set(dto.name),
            description: Set(dto.description),
            route: Set(dto.route),
            question: Set(dto.question),
            answer: Set(dto.answer),
            type_question: Set(dto.type_question),
            ..Default::default()
        })
    }

    fn apply_update(dto: UpdateFormRequest, target: &mut form::ActiveModel) -> ServiceResult<()> {
        target.name = Set(dto.name);
        target.description = Set(dto.description);
        target.route = Set(dto.route);
        target.question = Set(dto.question);
        target.answer = Set(dto.answer);
        target.type_question = Set(dto.type_question);
        Ok(())
    }

    fn apply_patch(
        dto: PatchFormRequest,
        current: &form::Model,
        target: &mut form::ActiveModel,
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
        if let Some(v) = dto.route {
            if !v.is_empty() && v != current.route {
                target.route = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.question {
            if current.question.as_deref() != Some(v.as_str()) {
                target.question = Set(Some(v));
                changed = true;
            }
        }
        if let Some(v) = dto.answer {
            if current.answer.as_deref() != Some(v.as_str()) {
                target.answer = Set(Some(v));
                changed = true;
            }
        }
        if let Some(v) = dto.type_question {
            if current.type_question.as_deref() != Some(v.as_str()) {
                target.type_question = Set(Some(v));
                changed = true;
            }
        }
        Ok(changed)
    }
}
