use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string(Order::FullName))
                    .col(string(Order::Mobile))
                    .col(string(Order::Email))
                    .col(string(Order::Pincode))
                    .col(string(Order::City))
                    .col(text(Order::Address))
                    .col(double(Order::TotalPrice))
                    .col(string(Order::Status).default("pending"))
                    .col(
                        timestamp(Order::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Order::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    FullName,
    Mobile,
    Email,
    Pincode,
    City,
    Address,
    TotalPrice,
    Status,
    CreatedAt,
    UpdatedAt,
}
