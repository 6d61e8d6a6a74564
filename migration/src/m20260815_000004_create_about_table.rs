use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(About::Table)
                    .if_not_exists()
                    .col(pk_auto(About::Id))
                    .col(string(About::Title))
                    .col(text(About::Description).default(""))
                    .col(
                        timestamp(About::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(About::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(About::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum About {
    Table,
    Id,
    Title,
    Description,
    CreatedAt,
    UpdatedAt,
}
