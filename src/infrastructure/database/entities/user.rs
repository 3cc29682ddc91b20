//! User entity for database
//!
//! Passwords are stored as bcrypt hashes only; the hash never crosses the
//! API boundary.

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::domain::{Activatable, ActiveFlag, Auditable};

/// User model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub username: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
    #[sea_orm(unique)]
    pub person_id: i32,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::person::Entity",
        from = "Column::PersonId",
        to = "super::person::Column::Id"
    )]
    Person,
    #[sea_orm(has_many = "super::user_rol::Entity")]
    UserRols,
}

impl Related<super::person::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Person.def()
    }
}

impl Related<super::user_rol::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::UserRols.def()
    }
}

// User -> Rol through the user_rols join table.
impl Related<super::rol::Entity> for Entity {
    fn to() -> RelationDef {
        super::user_rol::Relation::Rol.def()
    }
    fn via() -> Option<RelationDef> {
        Some(super::user_rol::Relation::User.def().rev())
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
