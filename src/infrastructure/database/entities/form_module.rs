//! FormModule join entity: placement of a Form inside a Module.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{Activatable, ActiveFlag, Auditable};

/// FormModule model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "form_modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub form_id: i32,
    pub module_id: i32,
    pub status_procedure: String,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::form::Entity",
        from = "Column::FormId",
        to = "super::form::Column::Id"
    )]
    Form,
    #[sea_orm(
        belongs_to = "super::module::Entity",
        from = "Column::ModuleId",
        to = "super::module::Column::Id"
    )]
    Module,
}

impl Related<super::form::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Form.def()
    }
}

impl Related<super::module::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
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
