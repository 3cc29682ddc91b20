//! Database migrations module

pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_persons;
mod m20250301_000002_create_users;
mod m20250301_000003_create_rols;
mod m20250301_000004_create_forms;
mod m20250301_000005_create_modules;
mod m20250301_000006_create_user_rols;
mod m20250301_000007_create_rol_forms;
mod m20250301_000008_create_form_modules;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_persons::Migration),
            Box::new(m20250301_000002_create_users::Migration),
            Box::new(m20250301_000003_create_rols::Migration),
            Box::new(m20250301_000004_create_forms::Migration),
            Box::new(m20250301_000005_create_modules::Migration),
            Box::new(m20250301_000006_create_user_rols::Migration),
            Box::new(m20250301_000007_create_rol_forms::Migration),
            Box::new(m20250301_000008_create_form_modules::Migration),
        ]
    }
}
