//! Entity capabilities
//!
//! Capabilities are opted into per entity at compile time. An entity that
//! implements [`Activatable`] carries a boolean `active` column; one that
//! implements [`Auditable`] carries create/update/delete timestamps. The
//! generic repository and service layers gate soft-delete and activation
//! behind these bounds, so an entity without the capability simply has no
//! such operation.

use sea_orm::EntityTrait;

/// Entity with a boolean active/inactive state.
pub trait Activatable: EntityTrait {
    fn active_col() -> Self::Column;
}

/// Entity carrying audit timestamps.
pub trait Auditable: EntityTrait {
    fn created_at_col() -> Self::Column;
    fn updated_at_col() -> Self::Column;
    fn deleted_at_col() -> Self::Column;
}

/// Read access to the active flag on a loaded row.
pub trait ActiveFlag {
    fn is_active(&self) -> bool;
}
