//! Create `todo` table.
//! One row per todo; `id` is generated by the application on insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Todo::Table)
                    .if_not_exists()
                    .col(uuid(Todo::Id).primary_key())
                    .col(text(Todo::Owner).not_null())
                    .col(boolean(Todo::Status).not_null())
                    .col(text(Todo::Category).not_null())
                    .col(text(Todo::Body).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Todo::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
pub enum Todo {
    Table,
    Id,
    Owner,
    Status,
    Category,
    Body,
}
