//! Migration to create forms table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Forms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Forms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Forms::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Forms::Description).string_len(255).not_null())
                    .col(ColumnDef::new(Forms::Route).string_len(255).not_null())
                    .col(ColumnDef::new(Forms::Question).string_len(255).null())
                    .col(ColumnDef::new(Forms::Answer).string_len(255).null())
                    .col(ColumnDef::new(Forms::TypeQuestion).string_len(50).null())
                    .col(
                        ColumnDef::new(Forms::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Forms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Forms::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Forms::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Forms::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Forms {
    Table,
    Id,
    Name,
    Description,
    Route,
    Question,
    Answer,
    TypeQuestion,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
