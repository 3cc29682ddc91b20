//! Module entity for database

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{Activatable, ActiveFlag, Auditable};

/// Module model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::form_module::Entity")]
    FormModules,
}

impl Related<super::form_module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FormModules.def()
    }
}

// Module -> Form through the form_modules join table.
impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef {
        super::form_module::Relation::Form.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::form_module::Relation::Module.def().rev())
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
