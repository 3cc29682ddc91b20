//! Authentication use-cases: login and token validation.
//!
//! HTTP handlers stay thin wrappers around this service.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};
use tracing::info;

use super::resources::UserDto;
use crate::auth::jwt::{create_token, verify_token, Claims, JwtConfig};
use crate::auth::password::verify_password;
use crate::domain::{ServiceError, ServiceResult};
use crate::infrastructure::database::entities::{rol, user, user_rol};

/// Result of a successful login
#[derive(Debug)]
pub struct AuthResult {
    pub token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: UserDto,
}

#[derive(Clone)]
pub struct AuthService {
    db: DatabaseConnection,
    jwt_config: JwtConfig,
}

impl AuthService {
    pub fn new(db: DatabaseConnection, jwt_config: JwtConfig) -> Self {
        Self { db, jwt_config }
    }

    /// Authenticate by username or email + password and issue a JWT carrying
    /// the user's active rol labels.
    pub async fn login(&self, username_or_email: &str, password: &str) -> ServiceResult<AuthResult> {
        let user = user::Entity::find()
            .filter(
                user::Column::Username
                    .eq(username_or_email)
                    .or(user::Column::Email.eq(username_or_email)),
            )
            .one(&self.db)
            .await?;

        let Some(user) = user else {
            return Err(ServiceError::Unauthorized("Invalid credentials".into()));
        };

        if !user.active {
            return Err(ServiceError::Unauthorized("Account is disabled".into()));
        }

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(ServiceError::Unauthorized("Invalid credentials".into()));
        }

        let roles: Vec<String> = user
            .find_related(rol::Entity)
            .filter(user_rol::Column::Active.eq(true))
            .all(&self.db)
            .await?
            .into_iter()
            .map(|r| r.rol_type)
            .collect();

        let token = create_token(user.id, &user.username, roles, &self.jwt_config)
            .map_err(|e| ServiceError::external("failed to create token", e))?;

        info!(user_id = user.id, username = %user.username, "user logged in");

        Ok(AuthResult {
            token,
            token_type: "Bearer".into(),
            expires_in: self.jwt_config.expiration_hours * 3600,
            user: UserDto::from(user),
        })
    }

    /// Verify a bearer token and return its claims.
    pub fn validate(&self, token: &str) -> ServiceResult<Claims> {
        verify_token(token, &self.jwt_config)
            .map_err(|_| ServiceError::Unauthorized("Invalid authentication token".into()))
    }
}
