//! Secondary indexes for the list endpoint's common sort keys.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_todo::Todo;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_todo_owner")
                    .table(Todo::Table)
                    .col(Todo::Owner)
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_todo_category")
                    .table(Todo::Table)
                    .col(Todo::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().if_exists().name("idx_todo_category").table(Todo::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().if_exists().name("idx_todo_owner").table(Todo::Table).to_owned())
            .await
    }
}
