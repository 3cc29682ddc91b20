//! User resource.
//!
//! Passwords are bcrypt-hashed before they reach the repository; the DTO
//! never exposes the stored hash. A PATCH carrying only a password is a
//! password-change, applied without touching the profile fields.

use chrono::{DateTime, Utc};
use sea_orm::Set;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::super::resource::{check, Resource};
use crate::auth::password::hash_password;
use crate::domain::{ServiceError, ServiceResult};
use crate::infrastructure::database::entities::user;

#[derive(Debug, Serialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub person_id: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl From<user::Model> for UserDto {
    fn from(m: user::Model) -> Self {
        Self {
            id: m.id,
            username: m.username,
            email: m.email,
            person_id: m.person_id,
            active: m.active,
            created_at: m.created_at,
            updated_at: m.updated_at,
            deleted_at: m.deleted_at,
        }
    }
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 8, message = "must be at least 8 characters"))]
    pub password: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub person_id: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateUserRequest {
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[validate(range(min = 1, message = "must be positive"))]
    pub person_id: i32,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct PatchUserRequest {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub person_id: Option<i32>,
}

pub struct UserResource;

impl Resource for UserResource {
    type Entity = user::Entity;
    type ActiveModel = user::ActiveModel;
    type Dto = UserDto;
    type CreateDto = CreateUserRequest;
    type UpdateDto = UpdateUserRequest;
    type PatchDto = PatchUserRequest;

    const NAME: &'static str = "User";

    fn validate_create(dto: &CreateUserRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn validate_update(dto: &UpdateUserRequest) -> ServiceResult<()> {
        check(dto)
    }

    fn to_dto(model: user::Model) -> UserDto {
        UserDto::from(model)
    }

    fn create_model(dto: CreateUserRequest) -> ServiceResult<user::ActiveModel> {
        let password_hash = hash_password(&dto.password)
            .map_err(|e| ServiceError::external("failed to hash password", e))?;

        Ok(user::ActiveModel {
            username: Set(dto.username),
            email: Set(dto.email),
            password_hash: Set(password_hash),
            person_id: Set(dto.person_id),
            ..Default::default()
        })
    }

    fn apply_update(dto: UpdateUserRequest, target: &mut user::ActiveModel) -> ServiceResult<()> {
        target.username = Set(dto.username);
        target.email = Set(dto.email);
        target.person_id = Set(dto.person_id);
        Ok(())
    }

    fn apply_patch(
        dto: PatchUserRequest,
        current: &user::Model,
        target: &mut user::ActiveModel,
    ) -> ServiceResult<bool> {
        let mut changed = false;

        if let Some(v) = dto.password {
            if !v.is_empty() {
                if v.len() < 8 {
                    return Err(ServiceError::Validation(
                        "password: must be at least 8 characters".into(),
                    ));
                }
                let hash = hash_password(&v)
                    .map_err(|e| ServiceError::external("failed to hash password", e))?;
                target.password_hash = Set(hash);
                changed = true;
            }
        }

        if let Some(v) = dto.username {
            if !v.is_empty() && v != current.username {
                target.username = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.email {
            if !v.is_empty() && v != current.email {
                target.email = Set(v);
                changed = true;
            }
        }
        if let Some(v) = dto.person_id {
            if v > 0 && v != current.person_id {
                target.person_id = Set(v);
                changed = true;
            }
        }

        Ok(changed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::password::verify_password;
    use sea_orm::ActiveValue;

    fn existing_user() -> user::Model {
        user::Model {
            id: 7,
            username: "ada".into(),
            email: "ada@example.com".into(),
            password_hash: "$2b$12$existinghash".into(),
            person_id: 1,
            active: true,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
            deleted_at: None,
        }
    }

    #[test]
    fn password_only_patch_leaves_profile_untouched() {
        let current = existing_user();
        let mut target = user::ActiveModel::default();

        let dto = PatchUserRequest {
            password: Some("new-secret-pass".into()),
            ..Default::default()
        };
        let changed = UserResource::apply_patch(dto, &current, &mut target).unwrap();
        assert!(changed);

        assert!(matches!(target.username, ActiveValue::NotSet));
        assert!(matches!(target.email, ActiveValue::NotSet));
        assert!(matches!(target.person_id, ActiveValue::NotSet));

        let ActiveValue::Set(hash) = target.password_hash else {
            panic!("password hash was not set");
        };
        assert!(verify_password("new-secret-pass", &hash).unwrap());
    }

    #[test]
    fn short_patch_password_is_rejected() {
        let current = existing_user();
        let mut target = user::ActiveModel::default();

        let dto = PatchUserRequest {
            password: Some("short".into()),
            ..Default::default()
        };
        let err = UserResource::apply_patch(dto, &current, &mut target).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn create_hashes_password() {
        let dto = CreateUserRequest {
            username: "grace".into(),
            email: "grace@example.com".into(),
            password: "correct-horse".into(),
            person_id: 2,
        };
        let model = UserResource::create_model(dto).unwrap();

        let ActiveValue::Set(hash) = model.password_hash else {
            panic!("password hash was not set");
        };
        assert_ne!(hash, "correct-horse");
        assert!(verify_password("correct-horse", &hash).unwrap());
    }
}
