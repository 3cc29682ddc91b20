//! Rol entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{Activatable, ActiveFlag, Auditable};

/// Rol model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "rols")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub rol_type: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_rol::Entity")]
    UserRols,
    #[sea_orm(has_many = "super::rol_form::Entity")]
    RolForms,
}

impl Related<super::user_rol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRols.def()
    }
}

impl Related<super::rol_form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RolForms.def()
    }
}

// Rol -> Form through the rol_forms join table.
impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef {
        super::rol_form::Relation::Form.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::rol_form::Relation::Rol.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Activatable for Entity {
    fn active_col() -> Column {
        Column::Active
    }
}

impl Auditable for Entity {
    fn created_at_col() -> Column {
        Column::CreatedAt
    }
    fn updated_at_col() -> Column {
        Column::UpdatedAt
    }
    fn deleted_at_col() -> Column {
        Column::DeletedAt
    }
}

impl ActiveFlag for Model {
    fn is_active(&self) -> bool {
        self.active
    }
}
