use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::product::{Product, ProductDraft};

pub struct ProductRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProductRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all products, newest first
    pub async fn get_all(&self) -> Result<Vec<Product>, DbErr> {
        entity::prelude::Product::find()
            .order_by_desc(entity::product::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(Product::from_entity)
            .collect()
    }

    /// Gets a product by ID
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Product>, DbErr> {
        entity::prelude::Product::find_by_id(id)
            .one(self.db)
            .await?
            .map(Product::from_entity)
            .transpose()
    }

    /// Creates a new product from validated fields
    pub async fn create(&self, draft: ProductDraft) -> Result<Product, DbErr> {
        let now = Utc::now();

        let model = entity::product::ActiveModel {
            product_name: ActiveValue::Set(draft.product_name),
            unit: ActiveValue::Set(draft.unit.as_str().to_string()),
            quantity: ActiveValue::Set(draft.quantity),
            description: ActiveValue::Set(draft.description),
            image: ActiveValue::Set(draft.image),
            mrp: ActiveValue::Set(draft.mrp),
            selling_price: ActiveValue::Set(draft.selling_price),
            slug: ActiveValue::Set(draft.slug),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Product::from_entity(model)
    }

    /// Replaces a product's stored fields, preserving its creation time
    ///
    /// # Returns
    /// - `Ok(Some(Product))` - Updated product
    /// - `Ok(None)` - No product with the given ID
    pub async fn update(&self, id: i32, draft: ProductDraft) -> Result<Option<Product>, DbErr> {
        let Some(existing) = entity::prelude::Product::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::product::ActiveModel = existing.into();
        active_model.product_name = ActiveValue::Set(draft.product_name);
        active_model.unit = ActiveValue::Set(draft.unit.as_str().to_string());
        active_model.quantity = ActiveValue::Set(draft.quantity);
        active_model.description = ActiveValue::Set(draft.description);
        active_model.image = ActiveValue::Set(draft.image);
        active_model.mrp = ActiveValue::Set(draft.mrp);
        active_model.selling_price = ActiveValue::Set(draft.selling_price);
        active_model.slug = ActiveValue::Set(draft.slug);
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let model = active_model.update(self.db).await?;

        Product::from_entity(model).map(Some)
    }

    /// Deletes a product
    ///
    /// # Returns
    /// - `Ok(true)` - Product was deleted
    /// - `Ok(false)` - No product with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Product::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Checks if a product exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::Product::find()
            .filter(entity::product::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }
}
