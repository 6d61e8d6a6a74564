//! Product factory for creating test product records.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;

/// Factory for creating test products with customizable fields.
///
/// Defaults come from the product fixture with a unique name and slug per
/// instance, so multiple products can be created in one test.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::product::ProductFactory;
///
/// let product = ProductFactory::new(&db)
///     .product_name("Milk")
///     .unit("liter")
///     .mrp(60.0)
///     .selling_price(50.0)
///     .build()
///     .await?;
/// ```
pub struct ProductFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::product::Model,
}

impl<'a> ProductFactory<'a> {
    /// Creates a new factory with fixture defaults and a unique name/slug.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let mut entity = fixture::product::entity();
        entity.product_name = format!("Product {}", id);
        entity.slug = format!("product-{}-{}", id, Utc::now().timestamp_millis());

        Self { db, entity }
    }

    /// Sets the product name.
    pub fn product_name(mut self, name: impl Into<String>) -> Self {
        self.entity.product_name = name.into();
        self
    }

    /// Sets the unit of sale ("kg" or "liter").
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.entity.unit = unit.into();
        self
    }

    /// Sets the free-form quantity text.
    pub fn quantity(mut self, quantity: impl Into<String>) -> Self {
        self.entity.quantity = quantity.into();
        self
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Sets the stored image path.
    pub fn image(mut self, image: impl Into<String>) -> Self {
        self.entity.image = image.into();
        self
    }

    /// Sets the maximum retail price.
    pub fn mrp(mut self, mrp: f64) -> Self {
        self.entity.mrp = mrp;
        self
    }

    /// Sets the selling price.
    pub fn selling_price(mut self, selling_price: f64) -> Self {
        self.entity.selling_price = selling_price;
        self
    }

    /// Sets the slug.
    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.entity.slug = slug.into();
        self
    }

    /// Builds and inserts the product into the database.
    ///
    /// # Returns
    /// - `Ok(entity::product::Model)` - Created product entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::product::Model, DbErr> {
        let now = Utc::now();

        entity::product::ActiveModel {
            id: ActiveValue::NotSet,
            product_name: ActiveValue::Set(self.entity.product_name),
            unit: ActiveValue::Set(self.entity.unit),
            quantity: ActiveValue::Set(self.entity.quantity),
            description: ActiveValue::Set(self.entity.description),
            image: ActiveValue::Set(self.entity.image),
            mrp: ActiveValue::Set(self.entity.mrp),
            selling_price: ActiveValue::Set(self.entity.selling_price),
            slug: ActiveValue::Set(self.entity.slug),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a product with default values.
///
/// Shorthand for `ProductFactory::new(db).build().await`.
pub async fn create_product(db: &DatabaseConnection) -> Result<entity::product::Model, DbErr> {
    ProductFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::Product;

    #[tokio::test]
    async fn creates_product_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Product).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let product = create_product(db).await?;

        assert!(!product.product_name.is_empty());
        assert_eq!(product.unit, "kg");
        assert_eq!(product.mrp, 100.0);
        assert_eq!(product.selling_price, 80.0);
        assert!(product.image.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_products() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Product).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_product(db).await?;
        let second = create_product(db).await?;

        assert_ne!(first.id, second.id);
        assert_ne!(first.slug, second.slug);

        Ok(())
    }

    #[tokio::test]
    async fn creates_product_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_table(Product).build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let product = ProductFactory::new(db)
            .product_name("Milk")
            .unit("liter")
            .quantity("1")
            .mrp(60.0)
            .selling_price(50.0)
            .image("/uploads/milk.jpg")
            .build()
            .await?;

        assert_eq!(product.product_name, "Milk");
        assert_eq!(product.unit, "liter");
        assert_eq!(product.image, "/uploads/milk.jpg");

        Ok(())
    }
}
