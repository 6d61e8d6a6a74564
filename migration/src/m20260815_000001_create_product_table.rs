use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Product::Table)
                    .if_not_exists()
                    .col(pk_auto(Product::Id))
                    .col(string(Product::ProductName))
                    .col(string(Product::Unit))
                    .col(string(Product::Quantity))
                    .col(text(Product::Description).default(""))
                    .col(string(Product::Image).default(""))
                    .col(double(Product::Mrp))
                    .col(double(Product::SellingPrice))
                    .col(string_uniq(Product::Slug))
                    .col(
                        timestamp(Product::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp(Product::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Product::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Product {
    Table,
    Id,
    ProductName,
    Unit,
    Quantity,
    Description,
    Image,
    Mrp,
    SellingPrice,
    Slug,
    CreatedAt,
    UpdatedAt,
}
