//! Migration to create rols table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Rols::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rols::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rols::RolType).string_len(50).not_null())
                    .col(ColumnDef::new(Rols::Description).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Rols::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Rols::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rols::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Rols::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Rols::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Rols {
    Table,
    Id,
    RolType,
    Description,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
