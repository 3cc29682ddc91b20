//! Generic repository over a SeaORM entity.
//!
//! One implementation serves every table in the schema. The type is
//! parameterized by the entity and its active model; the id type is fixed to
//! `i32` (every table uses an integer auto-increment key). Soft-delete and
//! activation are only available where the entity opts into the
//! [`Activatable`] and [`Auditable`] capabilities.

use std::marker::PhantomData;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait,
};

use crate::domain::{Activatable, Auditable};

pub struct Repository<E, A> {
    db: DatabaseConnection,
    _marker: PhantomData<(E, A)>,
}

// Manual impl: cloning is a pool-handle clone, no bounds on E/A needed.
impl<E, A> Clone for Repository<E, A> {
    fn clone(&self) -> Self {
        Self {
            db: self.db.clone(),
            _marker: PhantomData,
        }
    }
}

impl<E, A> Repository<E, A>
where
    E: EntityTrait,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<A> + Send + Sync,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _marker: PhantomData,
        }
    }

    /// All rows. Models come back detached; mutations go through the
    /// active-model methods below.
    pub async fn find_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(&self.db).await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<E::Model>, DbErr> {
        E::find_by_id(id).one(&self.db).await
    }

    pub async fn insert(&self, model: A) -> Result<E::Model, DbErr> {
        model.insert(&self.db).await
    }

    pub async fn update(&self, model: A) -> Result<E::Model, DbErr> {
        model.update(&self.db).await
    }

    /// Physical row removal. `false` when no row matched. A foreign-key
    /// violation from dependent rows surfaces as `DbErr`.
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, DbErr> {
        let result = E::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }
}

impl<E, A> Repository<E, A>
where
    E: EntityTrait + Activatable + Auditable,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<A> + Send + Sync,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    /// Flip the active flag. Deactivation stamps `deleted_at`; activation
    /// clears it. Returns `false` when the row does not exist.
    pub async fn set_active(&self, id: i32, desired: bool) -> Result<bool, DbErr> {
        let Some(model) = E::find_by_id(id).one(&self.db).await? else {
            return Ok(false);
        };

        let mut target: A = model.into_active_model();
        target.set(E::active_col(), desired.into());
        let deleted_at: Option<DateTime<Utc>> = if desired { None } else { Some(Utc::now()) };
        target.set(E::deleted_at_col(), deleted_at.into());
        target.update(&self.db).await?;

        Ok(true)
    }
}
