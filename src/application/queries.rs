//! Relationship queries across the join tables.
//!
//! These go beyond the per-entity CRUD surface: given one side of a
//! relationship, list the other side. Traversals follow active join rows
//! only; a soft-deleted assignment confers nothing.

use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter};

use super::resource::Resource;
use super::resources::{
    FormDto, FormResource, ModuleResource, RolDto, RolFormDto, RolResource, UserResource,
};
use crate::domain::{ServiceError, ServiceResult};
use crate::infrastructure::database::entities::{form, form_module, module, rol, rol_form, user, user_rol};

#[derive(Clone)]
pub struct RelationQueries {
    db: DatabaseConnection,
}

impl RelationQueries {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Forms granted to a rol (through active grants).
    pub async fn forms_for_rol(&self, rol_id: i32) -> ServiceResult<Vec<FormDto>> {
        RolResource::validate_id(rol_id)?;
        let rol = rol::Entity::find_by_id(rol_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Rol", rol_id))?;

        let forms = rol
            .find_related(form::Entity)
            .filter(rol_form::Column::Active.eq(true))
            .all(&self.db)
            .await?;
        Ok(forms.into_iter().map(FormDto::from).collect())
    }

    /// Forms placed inside a module (through active placements).
    pub async fn forms_for_module(&self, module_id: i32) -> ServiceResult<Vec<FormDto>> {
        ModuleResource::validate_id(module_id)?;
        let module = module::Entity::find_by_id(module_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("Module", module_id))?;

        let forms = module
            .find_related(form::Entity)
            .filter(form_module::Column::Active.eq(true))
            .all(&self.db)
            .await?;
        Ok(forms.into_iter().map(FormDto::from).collect())
    }

    /// Rols assigned to a user (through active assignments).
    pub async fn rols_for_user(&self, user_id: i32) -> ServiceResult<Vec<RolDto>> {
        UserResource::validate_id(user_id)?;
        let user = user::Entity::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id))?;

        let rols = user
            .find_related(rol::Entity)
            .filter(user_rol::Column::Active.eq(true))
            .all(&self.db)
            .await?;
        Ok(rols.into_iter().map(RolDto::from).collect())
    }

    /// All grant rows for a rol, regardless of activation state.
    pub async fn rol_forms_by_rol(&self, rol_id: i32) -> ServiceResult<Vec<RolFormDto>> {
        RolResource::validate_id(rol_id)?;
        if rol::Entity::find_by_id(rol_id).one(&self.db).await?.is_none() {
            return Err(ServiceError::not_found("Rol", rol_id));
        }

        let grants = rol_form::Entity::find()
            .filter(rol_form::Column::RolId.eq(rol_id))
            .all(&self.db)
            .await?;
        Ok(grants.into_iter().map(RolFormDto::from).collect())
    }

    /// All grant rows for a form, regardless of activation state.
    pub async fn rol_forms_by_form(&self, form_id: i32) -> ServiceResult<Vec<RolFormDto>> {
        FormResource::validate_id(form_id)?;
        if form::Entity::find_by_id(form_id).one(&self.db).await?.is_none() {
            return Err(ServiceError::not_found("Form", form_id));
        }

        let grants = rol_form::Entity::find()
            .filter(rol_form::Column::FormId.eq(form_id))
            .all(&self.db)
            .await?;
        Ok(grants.into_iter().map(RolFormDto::from).collect())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::application::resources::{
        CreateFormRequest, CreatePersonRequest, CreateRolFormRequest, CreateRolRequest,
        CreateUserRequest, CreateUserRolRequest,
    };
    use crate::application::ServiceRegistry;
    use crate::auth::jwt::JwtConfig;
    use crate::infrastructure::database::migrator::Migrator;

    async fn setup() -> (DatabaseConnection, ServiceRegistry) {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let registry = ServiceRegistry::new(db.clone(), JwtConfig::default());
        (db, registry)
    }

    fn form_request(name: &str, route: &str) -> CreateFormRequest {
        CreateFormRequest {
            name: name.into(),
            description: format!("{} form", name),
            route: route.into(),
            question: None,
            answer: None,
            type_question: None,
        }
    }

    #[tokio::test]
    async fn forms_for_rol_follows_active_grants_only() {
        let (db, registry) = setup().await;
        let queries = RelationQueries::new(db);

        let rol = registry
            .rols()
            .create(CreateRolRequest {
                rol_type: "Admin".into(),
                description: "Full access".into(),
            })
            .await
            .unwrap();
        let granted = registry.forms().create(form_request("Users", "/users")).await.unwrap();
        let ungranted = registry.forms().create(form_request("Audit", "/audit")).await.unwrap();

        let grant = registry
            .rol_forms()
            .create(CreateRolFormRequest {
                rol_id: rol.id,
                form_id: granted.id,
                permission: "read-write".into(),
            })
            .await
            .unwrap();

        let forms = queries.forms_for_rol(rol.id).await.unwrap();
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].id, granted.id);
        assert_ne!(forms[0].id, ungranted.id);

        // A soft-deleted grant confers nothing; the grant row stays listable.
        registry.rol_forms().soft_delete(grant.id).await.unwrap();
        assert!(queries.forms_for_rol(rol.id).await.unwrap().is_empty());
        assert_eq!(queries.rol_forms_by_rol(rol.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn rols_for_user_follows_active_assignments_only() {
        let (db, registry) = setup().await;
        let queries = RelationQueries::new(db);

        let person = registry
            .persons()
            .create(CreatePersonRequest {
                first_name: "Grace".into(),
                middle_name: None,
                last_name: "Hopper".into(),
                email: "grace@example.com".into(),
                phone: None,
                identification_type: "CC".into(),
                identification_number: 42,
                signing: None,
            })
            .await
            .unwrap();
        let user = registry
            .users()
            .create(CreateUserRequest {
                username: "grace".into(),
                email: "grace@example.com".into(),
                password: "password-123".into(),
                person_id: person.id,
            })
            .await
            .unwrap();
        let rol = registry
            .rols()
            .create(CreateRolRequest {
                rol_type: "Operator".into(),
                description: "Operates".into(),
            })
            .await
            .unwrap();
        let assignment = registry
            .user_rols()
            .create(CreateUserRolRequest {
                user_id: user.id,
                rol_id: rol.id,
            })
            .await
            .unwrap();

        let rols = queries.rols_for_user(user.id).await.unwrap();
        assert_eq!(rols.len(), 1);
        assert_eq!(rols[0].rol_type, "Operator");

        registry.user_rols().soft_delete(assignment.id).await.unwrap();
        assert!(queries.rols_for_user(user.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_parents_are_not_found() {
        let (db, _registry) = setup().await;
        let queries = RelationQueries::new(db);

        assert!(matches!(
            queries.forms_for_rol(99).await.unwrap_err(),
            ServiceError::NotFound { .. }
        ));
        assert!(matches!(
            queries.rol_forms_by_rol(99).await.unwrap_err(),
            ServiceError::NotFound { .. }
        ));
        assert!(matches!(
            queries.rol_forms_by_form(99).await.unwrap_err(),
            ServiceError::NotFound { .. }
        ));
        assert!(matches!(
            queries.forms_for_rol(0).await.unwrap_err(),
            ServiceError::Validation(_)
        ));
    }
}
