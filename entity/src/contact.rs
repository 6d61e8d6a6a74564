use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contact")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub fullname: String,
    pub phone: String,
    #[sea_orm(column_type = "Text")]
    pub address: String,
    pub feedback: Option<String>,
    /// Rating between 0 and 5, defaults to 0.
    pub rating: i32,
    pub submitted_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
