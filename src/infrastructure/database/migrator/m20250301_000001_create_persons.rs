//! Migration to create persons table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Persons::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Persons::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Persons::FirstName).string_len(50).not_null())
                    .col(ColumnDef::new(Persons::MiddleName).string_len(50).null())
                    .col(ColumnDef::new(Persons::LastName).string_len(50).not_null())
                    .col(ColumnDef::new(Persons::Email).string_len(255).not_null())
                    .col(ColumnDef::new(Persons::Phone).string_len(20).null())
                    .col(
                        ColumnDef::new(Persons::IdentificationType)
                            .string_len(20)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Persons::IdentificationNumber)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Persons::Signing).string_len(255).null())
                    .col(
                        ColumnDef::new(Persons::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Persons::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Persons::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Persons::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_persons_email")
                    .table(Persons::Table)
                    .col(Persons::Email)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Persons::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Persons {
    Table,
    Id,
    FirstName,
    MiddleName,
    LastName,
    Email,
    Phone,
    IdentificationType,
    IdentificationNumber,
    Signing,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
