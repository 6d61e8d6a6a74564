use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Gallery::Table)
                    .if_not_exists()
                    .col(pk_auto(Gallery::Id))
                    .col(string(Gallery::Image))
                    .col(
                        timestamp(Gallery::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Gallery::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Gallery::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Gallery {
    Table,
    Id,
    Image,
    CreatedAt,
    UpdatedAt,
}
