//! Migration to create rol_forms join table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RolForms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RolForms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RolForms::RolId).integer().not_null())
                    .col(ColumnDef::new(RolForms::FormId).integer().not_null())
                    .col(
                        ColumnDef::new(RolForms::Permission)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RolForms::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(RolForms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RolForms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(RolForms::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rol_forms_rol")
                            .from(RolForms::Table, RolForms::RolId)
                            .to(Rols::Table, Rols::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_rol_forms_form")
                            .from(RolForms::Table, RolForms::FormId)
                            .to(Forms::Table, Forms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rol_forms_rol_id")
                    .table(RolForms::Table)
                    .col(RolForms::RolId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rol_forms_form_id")
                    .table(RolForms::Table)
                    .col(RolForms::FormId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RolForms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum RolForms {
    Table,
    Id,
    RolId,
    FormId,
    Permission,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Rols {
    Table,
    Id,
}

#[derive(Iden)]
enum Forms {
    Table,
    Id,
}
