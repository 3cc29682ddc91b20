//! Repository factory over a single connection pool.
//!
//! ```ignore
//! let repos = RepositoryProvider::new(db.clone());
//! let rol = repos.rols().find_by_id(1).await?;
//! ```

use sea_orm::DatabaseConnection;

use super::generic::Repository;
use crate::infrastructure::database::entities::{
    form, form_module, module, person, rol, rol_form, user, user_rol,
};

pub type PersonRepository = Repository<person::Entity, person::ActiveModel>;
pub type UserRepository = Repository<user::Entity, user::ActiveModel>;
pub type RolRepository = Repository<rol::Entity, rol::ActiveModel>;
pub type FormRepository = Repository<form::Entity, form::ActiveModel>;
pub type ModuleRepository = Repository<module::Entity, module::ActiveModel>;
pub type UserRolRepository = Repository<user_rol::Entity, user_rol::ActiveModel>;
pub type RolFormRepository = Repository<rol_form::Entity, rol_form::ActiveModel>;
pub type FormModuleRepository = Repository<form_module::Entity, form_module::ActiveModel>;

/// Builds the per-entity repositories. Each accessor returns a fresh handle
/// over the shared pool; handles are cheap to clone.
pub struct RepositoryProvider {
    db: DatabaseConnection,
}

impl RepositoryProvider {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn persons(&self) -> PersonRepository {
        Repository::new(self.db.clone())
    }

    pub fn users(&self) -> UserRepository {
        Repository::new(self.db.clone())
    }

    pub fn rols(&self) -> RolRepository {
        Repository::new(self.db.clone())
    }

    pub fn forms(&self) -> FormRepository {
        Repository::new(self.db.clone())
    }

    pub fn modules(&self) -> ModuleRepository {
        Repository::new(self.db.clone())
    }

    pub fn user_rols(&self) -> UserRolRepository {
        Repository::new(self.db.clone())
    }

    pub fn rol_forms(&self) -> RolFormRepository {
        Repository::new(self.db.clone())
    }

    pub fn form_modules(&self) -> FormModuleRepository {
        Repository::new(self.db.clone())
    }
}
