//! Migration to create form_modules join table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FormModules::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FormModules::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FormModules::FormId).integer().not_null())
                    .col(ColumnDef::new(FormModules::ModuleId).integer().not_null())
                    .col(
                        ColumnDef::new(FormModules::StatusProcedure)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormModules::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(FormModules::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormModules::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(FormModules::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_modules_form")
                            .from(FormModules::Table, FormModules::FormId)
                            .to(Forms::Table, Forms::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_form_modules_module")
                            .from(FormModules::Table, FormModules::ModuleId)
                            .to(Modules::Table, Modules::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_form_modules_form_id")
                    .table(FormModules::Table)
                    .col(FormModules::FormId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_form_modules_module_id")
                    .table(FormModules::Table)
                    .col(FormModules::ModuleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FormModules::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum FormModules {
    Table,
    Id,
    FormId,
    ModuleId,
    StatusProcedure,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Forms {
    Table,
    Id,
}

#[derive(Iden)]
enum Modules {
    Table,
    Id,
}
