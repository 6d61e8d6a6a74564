pub use sea_orm_migration::prelude::*;

mod m20260815_000001_create_product_table;
mod m20260815_000002_create_gallery_table;
mod m20260815_000003_create_review_table;
mod m20260815_000004_create_about_table;
mod m20260815_000005_create_contact_table;
mod m20260815_000006_create_order_table;
mod m20260815_000007_create_order_item_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260815_000001_create_product_table::Migration),
            Box::new(m20260815_000002_create_gallery_table::Migration),
            Box::new(m20260815_000003_create_review_table::Migration),
            Box::new(m20260815_000004_create_about_table::Migration),
            Box::new(m20260815_000005_create_contact_table::Migration),
            Box::new(m20260815_000006_create_order_table::Migration),
            Box::new(m20260815_000007_create_order_item_table::Migration),
        ]
    }
}
