//! Migration to create user_rols join table

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserRols::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserRols::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserRols::UserId).integer().not_null())
                    .col(ColumnDef::new(UserRols::RolId).integer().not_null())
                    .col(
                        ColumnDef::new(UserRols::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(UserRols::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserRols::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(UserRols::DeletedAt)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_rols_user")
                            .from(UserRols::Table, UserRols::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_rols_rol")
                            .from(UserRols::Table, UserRols::RolId)
                            .to(Rols::Table, Rols::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // One assignment per (user, rol); re-assignment reactivates the row.
        manager
            .create_index(
                Index::create()
                    .name("idx_user_rols_user_rol")
                    .table(UserRols::Table)
                    .col(UserRols::UserId)
                    .col(UserRols::RolId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserRols::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserRols {
    Table,
    Id,
    UserId,
    RolId,
    Active,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}

#[derive(Iden)]
enum Rols {
    Table,
    Id,
}
