//! Generic CRUD orchestration over a [`Resource`].
//!
//! One service implementation covers every entity: it validates input via
//! the resource hooks, delegates persistence to the generic repository,
//! stamps audit columns, and translates storage failures into the service
//! error taxonomy. Soft-delete and activation are only compiled in for
//! resources whose entity carries the corresponding capabilities.

use chrono::Utc;
use sea_orm::{EntityTrait, IntoActiveModel};
use tracing::{debug, info};

use super::activation::ActivationService;
use super::resource::Resource;
use crate::domain::{Activatable, ActiveFlag, Auditable, ServiceError, ServiceResult};
use crate::infrastructure::database::repositories::Repository;

pub struct CrudService<R: Resource>
where
    <R::Entity as EntityTrait>::PrimaryKey: sea_orm::PrimaryKeyTrait<ValueType = i32>,
    <R::Entity as EntityTrait>::Model: IntoActiveModel<R::ActiveModel> + Clone + Send + Sync,
{
    repo: Repository<R::Entity, R::ActiveModel>,
}

impl<R: Resource> CrudService<R>
where
    <R::Entity as EntityTrait>::PrimaryKey: sea_orm::PrimaryKeyTrait<ValueType = i32>,
    <R::Entity as EntityTrait>::Model: IntoActiveModel<R::ActiveModel> + Clone + Send + Sync,
{
    pub fn new(repo: Repository<R::Entity, R::ActiveModel>) -> Self {
        Self { repo }
    }

    pub async fn get_all(&self) -> ServiceResult<Vec<R::Dto>> {
        let models = self.repo.find_all().await?;
        Ok(R::to_dto_list(models))
    }

    pub async fn get_by_id(&self, id: i32) -> ServiceResult<R::Dto> {
        R::validate_id(id)?;
        let model = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))?;
        Ok(R::to_dto(model))
    }

    /// Physical removal. Dependent rows make the storage layer refuse, which
    /// surfaces as an external error.
    pub async fn delete(&self, id: i32) -> ServiceResult<()> {
        R::validate_id(id)?;
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(ServiceError::not_found(R::NAME, id));
        }
        let removed = self.repo.delete_by_id(id).await?;
        if !removed {
            return Err(ServiceError::not_found(R::NAME, id));
        }
        info!(entity = R::NAME, id, "deleted");
        Ok(())
    }
}

impl<R: Resource> CrudService<R>
where
    R::Entity: Activatable + Auditable,
    <R::Entity as EntityTrait>::PrimaryKey: sea_orm::PrimaryKeyTrait<ValueType = i32>,
    <R::Entity as EntityTrait>::Model:
        IntoActiveModel<R::ActiveModel> + ActiveFlag + Clone + Send + Sync,
{
    fn activation(&self) -> ActivationService<R::Entity, R::ActiveModel> {
        ActivationService::new(self.repo.clone())
    }

    pub async fn create(&self, dto: R::CreateDto) -> ServiceResult<R::Dto> {
        use sea_orm::ActiveModelTrait;

        R::validate_create(&dto)?;

        let now = Utc::now();
        let mut model = R::create_model(dto)?;
        model.set(<R::Entity as Auditable>::created_at_col(), now.into());
        model.set(<R::Entity as Auditable>::updated_at_col(), now.into());
        model.set(<R::Entity as Activatable>::active_col(), true.into());

        let created = self.repo.insert(model).await?;
        info!(entity = R::NAME, "created");
        Ok(R::to_dto(created))
    }

    pub async fn update(&self, id: i32, dto: R::UpdateDto) -> ServiceResult<R::Dto> {
        use sea_orm::ActiveModelTrait;

        R::validate_id(id)?;
        R::validate_update(&dto)?;

        let model = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))?;

        let mut target = model.into_active_model();
        R::apply_update(dto, &mut target)?;
        target.set(<R::Entity as Auditable>::updated_at_col(), Utc::now().into());

        let updated = self.repo.update(target).await?;
        info!(entity = R::NAME, id, "updated");
        Ok(R::to_dto(updated))
    }

    /// Partial update. When the merge hook reports no effective change,
    /// nothing is written and the current state is returned as-is.
    pub async fn patch(&self, id: i32, dto: R::PatchDto) -> ServiceResult<R::Dto> {
        use sea_orm::ActiveModelTrait;

        R::validate_id(id)?;

        let model = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))?;

        let mut target = model.clone().into_active_model();
        let changed = R::apply_patch(dto, &model, &mut target)?;
        if !changed {
            debug!(entity = R::NAME, id, "patch contained no effective change");
            return Ok(R::to_dto(model));
        }

        target.set(<R::Entity as Auditable>::updated_at_col(), Utc::now().into());
        let updated = self.repo.update(target).await?;
        info!(entity = R::NAME, id, "patched");
        Ok(R::to_dto(updated))
    }

    /// Logical removal: flips the active flag and stamps the deletion time.
    /// Re-running it on an inactive row is a no-op.
    pub async fn soft_delete(&self, id: i32) -> ServiceResult<()> {
        R::validate_id(id)?;

        let model = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))?;

        if !model.is_active() {
            info!(entity = R::NAME, id, "already inactive, soft delete skipped");
            return Ok(());
        }

        let toggled = self.activation().deactivate(id).await?;
        if !toggled {
            return Err(ServiceError::not_found(R::NAME, id));
        }
        info!(entity = R::NAME, id, "soft deleted");
        Ok(())
    }

    /// Re-enable a soft-deleted row. Idempotent on active rows.
    pub async fn activate(&self, id: i32) -> ServiceResult<()> {
        R::validate_id(id)?;

        let model = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found(R::NAME, id))?;

        if model.is_active() {
            info!(entity = R::NAME, id, "already active, activation skipped");
            return Ok(());
        }

        let toggled = self.activation().activate(id).await?;
        if !toggled {
            return Err(ServiceError::not_found(R::NAME, id));
        }
        info!(entity = R::NAME, id, "activated");
        Ok(())
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use sea_orm::{ConnectOptions, Database, DatabaseConnection};
    use sea_orm_migration::MigratorTrait;

    use super::*;
    use crate::application::resources::{
        CreatePersonRequest, CreateRolFormRequest, CreateRolRequest, CreateUserRequest,
        PatchRolRequest, PatchUserRequest, PersonResource, RolResource,
    };
    use crate::application::ServiceRegistry;
    use crate::auth::jwt::JwtConfig;
    use crate::auth::password::verify_password;
    use crate::infrastructure::database::entities::user;
    use crate::infrastructure::database::migrator::Migrator;
    use crate::infrastructure::database::repositories::RepositoryProvider;

    async fn setup_db() -> DatabaseConnection {
        let mut opts = ConnectOptions::new("sqlite::memory:");
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        db
    }

    fn rol_service(db: &DatabaseConnection) -> CrudService<RolResource> {
        CrudService::new(RepositoryProvider::new(db.clone()).rols())
    }

    fn rol_request(rol_type: &str, description: &str) -> CreateRolRequest {
        CreateRolRequest {
            rol_type: rol_type.into(),
            description: description.into(),
        }
    }

    #[tokio::test]
    async fn create_then_get_roundtrips_all_fields() {
        let db = setup_db().await;
        let service = rol_service(&db);

        let created = service
            .create(rol_request("Admin", "Full access"))
            .await
            .unwrap();
        assert!(created.id > 0);
        assert!(created.active);
        assert!(created.deleted_at.is_none());

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert_eq!(fetched.rol_type, "Admin");
        assert_eq!(fetched.description, "Full access");
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn soft_delete_keeps_row_and_is_idempotent() {
        let db = setup_db().await;
        let service = rol_service(&db);
        let created = service
            .create(rol_request("Auditor", "Read-only"))
            .await
            .unwrap();

        service.soft_delete(created.id).await.unwrap();

        let fetched = service.get_by_id(created.id).await.unwrap();
        assert!(!fetched.active);
        assert!(fetched.deleted_at.is_some());

        // Second soft delete: no error, state unchanged.
        service.soft_delete(created.id).await.unwrap();
        let again = service.get_by_id(created.id).await.unwrap();
        assert_eq!(again.deleted_at, fetched.deleted_at);
    }

    #[tokio::test]
    async fn activate_flips_flag_and_clears_deletion_stamp() {
        let db = setup_db().await;
        let service = rol_service(&db);
        let created = service.create(rol_request("Editor", "Writes")).await.unwrap();

        // Activation of an active row is a no-op.
        service.activate(created.id).await.unwrap();
        let unchanged = service.get_by_id(created.id).await.unwrap();
        assert!(unchanged.active);

        service.soft_delete(created.id).await.unwrap();
        service.activate(created.id).await.unwrap();

        let restored = service.get_by_id(created.id).await.unwrap();
        assert!(restored.active);
        assert!(restored.deleted_at.is_none());
    }

    #[tokio::test]
    async fn empty_patch_writes_nothing() {
        let db = setup_db().await;
        let service = rol_service(&db);
        let created = service.create(rol_request("Viewer", "Reads")).await.unwrap();

        let patched = service
            .patch(created.id, PatchRolRequest::default())
            .await
            .unwrap();

        assert_eq!(patched.rol_type, "Viewer");
        assert_eq!(patched.updated_at, created.updated_at);
    }

    #[tokio::test]
    async fn patch_changes_only_provided_fields() {
        let db = setup_db().await;
        let service = rol_service(&db);
        let created = service
            .create(rol_request("Admin", "Full access"))
            .await
            .unwrap();

        let patched = service
            .patch(
                created.id,
                PatchRolRequest {
                    description: Some("Updated".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.rol_type, "Admin");
        assert_eq!(patched.description, "Updated");
        assert!(patched.updated_at > created.updated_at);
    }

    #[tokio::test]
    async fn non_positive_ids_fail_before_touching_the_store() {
        let db = setup_db().await;
        let service = rol_service(&db);

        for id in [0, -1] {
            assert!(matches!(
                service.get_by_id(id).await.unwrap_err(),
                ServiceError::Validation(_)
            ));
            assert!(matches!(
                service
                    .update(id, crate::application::resources::UpdateRolRequest {
                        rol_type: "X".into(),
                        description: "Y".into(),
                    })
                    .await
                    .unwrap_err(),
                ServiceError::Validation(_)
            ));
            assert!(matches!(
                service.patch(id, PatchRolRequest::default()).await.unwrap_err(),
                ServiceError::Validation(_)
            ));
            assert!(matches!(
                service.delete(id).await.unwrap_err(),
                ServiceError::Validation(_)
            ));
            assert!(matches!(
                service.soft_delete(id).await.unwrap_err(),
                ServiceError::Validation(_)
            ));
            assert!(matches!(
                service.activate(id).await.unwrap_err(),
                ServiceError::Validation(_)
            ));
        }
    }

    #[tokio::test]
    async fn missing_positive_id_is_not_found() {
        let db = setup_db().await;
        let service = rol_service(&db);

        assert!(matches!(
            service.get_by_id(9999).await.unwrap_err(),
            ServiceError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn delete_with_dependent_rows_is_an_external_failure() {
        let db = setup_db().await;
        let registry = ServiceRegistry::new(db.clone(), JwtConfig::default());

        let rol = registry
            .rols()
            .create(rol_request("Admin", "Full access"))
            .await
            .unwrap();
        let form = registry
            .forms()
            .create(crate::application::resources::CreateFormRequest {
                name: "Users".into(),
                description: "User administration".into(),
                route: "/admin/users".into(),
                question: None,
                answer: None,
                type_question: None,
            })
            .await
            .unwrap();
        registry
            .rol_forms()
            .create(CreateRolFormRequest {
                rol_id: rol.id,
                form_id: form.id,
                permission: "read-write".into(),
            })
            .await
            .unwrap();

        let err = registry.rols().delete(rol.id).await.unwrap_err();
        assert!(matches!(err, ServiceError::External { .. }));

        // The rol is still there.
        assert!(registry.rols().get_by_id(rol.id).await.is_ok());
    }

    #[tokio::test]
    async fn password_only_patch_updates_just_the_hash() {
        let db = setup_db().await;
        let registry = ServiceRegistry::new(db.clone(), JwtConfig::default());

        let person = registry
            .persons()
            .create(CreatePersonRequest {
                first_name: "Ada".into(),
                middle_name: None,
                last_name: "Lovelace".into(),
                email: "ada@example.com".into(),
                phone: None,
                identification_type: "CC".into(),
                identification_number: 1012345678,
                signing: None,
            })
            .await
            .unwrap();

        let created = registry
            .users()
            .create(CreateUserRequest {
                username: "ada".into(),
                email: "ada@example.com".into(),
                password: "first-password".into(),
                person_id: person.id,
            })
            .await
            .unwrap();

        let patched = registry
            .users()
            .patch(
                created.id,
                PatchUserRequest {
                    password: Some("second-password".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(patched.username, "ada");
        assert_eq!(patched.email, "ada@example.com");
        assert_eq!(patched.person_id, person.id);

        let stored = user::Entity::find_by_id(created.id)
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert!(verify_password("second-password", &stored.password_hash).unwrap());
        assert!(!verify_password("first-password", &stored.password_hash).unwrap());
    }

    #[tokio::test]
    async fn person_with_bad_email_is_rejected() {
        let db = setup_db().await;
        let service: CrudService<PersonResource> =
            CrudService::new(RepositoryProvider::new(db.clone()).persons());

        let err = service
            .create(CreatePersonRequest {
                first_name: "Ada".into(),
                middle_name: None,
                last_name: "Lovelace".into(),
                email: "not-an-email".into(),
                phone: None,
                identification_type: "CC".into(),
                identification_number: 1,
                signing: None,
            })
            .await
            .unwrap_err();

        match err {
            ServiceError::Validation(message) => {
                assert!(message.contains("email"), "got: {}", message)
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn update_of_missing_row_is_not_found() {
        let db = setup_db().await;
        let registry = ServiceRegistry::new(db.clone(), JwtConfig::default());

        let err = registry
            .rol_forms()
            .patch(
                123,
                crate::application::resources::PatchRolFormRequest {
                    permission: Some("read".into()),
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }
}
