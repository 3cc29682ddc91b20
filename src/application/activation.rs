//! Narrow activation component.
//!
//! For callers that only need toggle semantics: each method delegates to the
//! repository's flag flip and reports success as a boolean instead of
//! raising on absence, leaving the caller to decide how a missing row is
//! reported. `CrudService` routes its soft-delete/activate through this
//! after applying its own richer contract.

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, EntityTrait, IntoActiveModel, PrimaryKeyTrait,
};

use crate::domain::{Activatable, Auditable, ServiceResult};
use crate::infrastructure::database::repositories::Repository;

pub struct ActivationService<E, A> {
    repo: Repository<E, A>,
}

impl<E, A> ActivationService<E, A>
where
    E: EntityTrait + Activatable + Auditable,
    E::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
    E::Model: IntoActiveModel<A> + Send + Sync,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'static,
{
    pub fn new(repo: Repository<E, A>) -> Self {
        Self { repo }
    }

    /// `true` when the row existed and is now active.
    pub async fn activate(&self, id: i32) -> ServiceResult<bool> {
        self.change_state(id, true).await
    }

    /// `true` when the row existed and is now inactive.
    pub async fn deactivate(&self, id: i32) -> ServiceResult<bool> {
        self.change_state(id, false).await
    }

    pub async fn change_state(&self, id: i32, desired: bool) -> ServiceResult<bool> {
        Ok(self.repo.set_active(id, desired).await?)
    }
}
