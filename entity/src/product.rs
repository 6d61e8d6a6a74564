use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_name: String,
    /// Unit of sale, either "kg" or "liter".
    pub unit: String,
    pub quantity: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Store-relative path of the uploaded image ("/uploads/<file>"), or empty.
    pub image: String,
    pub mrp: f64,
    pub selling_price: f64,
    #[sea_orm(unique)]
    pub slug: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
