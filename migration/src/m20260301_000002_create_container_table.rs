use sea_orm_migration::{prelude::*, schema::*};

use super::m20260301_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Container::Table)
                    .if_not_exists()
                    .col(pk_auto(Container::Id))
                    .col(string(Container::Name))
                    .col(integer(Container::Capacity))
                    .col(string(Container::Status).default("available"))
                    .col(integer_null(Container::BookedBy))
                    .col(timestamp_null(Container::BookedAt))
                    .col(integer(Container::CreatedBy))
                    .col(
                        timestamp(Container::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_container_created_by")
                            .from(Container::Table, Container::CreatedBy)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Sweeps filter on status plus one of the two timestamps
        manager
            .create_index(
                Index::create()
                    .name("idx_container_status_booked_at")
                    .table(Container::Table)
                    .col(Container::Status)
                    .col(Container::BookedAt)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_container_created_by")
                    .table(Container::Table)
                    .col(Container::CreatedBy)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Container::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Container {
    Table,
    Id,
    Name,
    Capacity,
    Status,
    BookedBy,
    BookedAt,
    CreatedBy,
    CreatedAt,
}
