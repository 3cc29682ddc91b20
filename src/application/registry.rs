//! Typed service registry built once at startup.
//!
//! One field per service: a missing registration is a compile error, not a
//! runtime lookup failure.

use sea_orm::DatabaseConnection;

use super::auth::AuthService;
use super::crud::CrudService;
use super::queries::RelationQueries;
use super::resources::{
    FormModuleResource, FormResource, ModuleResource, PersonResource, RolFormResource,
    RolResource, UserResource, UserRolResource,
};
use crate::auth::jwt::JwtConfig;
use crate::infrastructure::database::repositories::RepositoryProvider;

pub struct ServiceRegistry {
    persons: CrudService<PersonResource>,
    users: CrudService<UserResource>,
    rols: CrudService<RolResource>,
    forms: CrudService<FormResource>,
    modules: CrudService<ModuleResource>,
    user_rols: CrudService<UserRolResource>,
    rol_forms: CrudService<RolFormResource>,
    form_modules: CrudService<FormModuleResource>,
    queries: RelationQueries,
    auth: AuthService,
}

impl ServiceRegistry {
    pub fn new(db: DatabaseConnection, jwt_config: JwtConfig) -> Self {
        let repos = RepositoryProvider::new(db.clone());
        Self {
            persons: CrudService::new(repos.persons()),
            users: CrudService::new(repos.users()),
            rols: CrudService::new(repos.rols()),
            forms: CrudService::new(repos.forms()),
            modules: CrudService::new(repos.modules()),
            user_rols: CrudService::new(repos.user_rols()),
            rol_forms: CrudService::new(repos.rol_forms()),
            form_modules: CrudService::new(repos.form_modules()),
            queries: RelationQueries::new(db.clone()),
            auth: AuthService::new(db, jwt_config),
        }
    }

    pub fn persons(&self) -> &CrudService<PersonResource> {
        &self.persons
    }

    pub fn users(&self) -> &CrudService<UserResource> {
        &self.users
    }

    pub fn rols(&self) -> &CrudService<RolResource> {
        &self.rols
    }

    pub fn forms(&self) -> &CrudService<FormResource> {
        &self.forms
    }

    pub fn modules(&self) -> &CrudService<ModuleResource> {
        &self.modules
    }

    pub fn user_rols(&self) -> &CrudService<UserRolResource> {
        &self.user_rols
    }

    pub fn rol_forms(&self) -> &CrudService<RolFormResource> {
        &self.rol_forms
    }

    pub fn form_modules(&self) -> &CrudService<FormModuleResource> {
        &self.form_modules
    }

    pub fn queries(&self) -> &RelationQueries {
        &self.queries
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }
}
