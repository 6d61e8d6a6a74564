//! Order factory for creating test orders and their line items.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;
use crate::fixture;

/// Factory for creating test orders with customizable fields.
pub struct OrderFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::order::Model,
}

impl<'a> OrderFactory<'a> {
    /// Creates a new factory with fixture defaults.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: fixture::order::entity(),
        }
    }

    /// Sets the customer name.
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.entity.full_name = full_name.into();
        self
    }

    /// Sets the order status.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Sets the order total.
    pub fn total_price(mut self, total_price: f64) -> Self {
        self.entity.total_price = total_price;
        self
    }

    /// Builds and inserts the order into the database.
    pub async fn build(self) -> Result<entity::order::Model, DbErr> {
        let now = Utc::now();

        entity::order::ActiveModel {
            id: ActiveValue::NotSet,
            full_name: ActiveValue::Set(self.entity.full_name),
            mobile: ActiveValue::Set(self.entity.mobile),
            email: ActiveValue::Set(self.entity.email),
            pincode: ActiveValue::Set(self.entity.pincode),
            city: ActiveValue::Set(self.entity.city),
            address: ActiveValue::Set(self.entity.address),
            total_price: ActiveValue::Set(self.entity.total_price),
            status: ActiveValue::Set(self.entity.status),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an order with default values and no line items.
pub async fn create_order(db: &DatabaseConnection) -> Result<entity::order::Model, DbErr> {
    OrderFactory::new(db).build().await
}

/// Creates an order item attached to the given order.
///
/// # Arguments
/// - `db` - Database connection
/// - `order_id` - Order the item belongs to
pub async fn create_order_item(
    db: &DatabaseConnection,
    order_id: i32,
) -> Result<entity::order_item::Model, DbErr> {
    let id = next_id();

    entity::order_item::ActiveModel {
        id: ActiveValue::NotSet,
        order_id: ActiveValue::Set(order_id),
        product_id: ActiveValue::Set(id),
        product_name: ActiveValue::Set(format!("Item {}", id)),
        quantity: ActiveValue::Set(2),
        price: ActiveValue::Set(60.0),
    }
    .insert(db)
    .await
}

/// Creates an order with the given number of default line items.
///
/// # Returns
/// - `Ok((order, items))` - Created order and its items
pub async fn create_order_with_items(
    db: &DatabaseConnection,
    item_count: usize,
) -> Result<(entity::order::Model, Vec<entity::order_item::Model>), DbErr> {
    let order = create_order(db).await?;

    let mut items = Vec::with_capacity(item_count);
    for _ in 0..item_count {
        items.push(create_order_item(db, order.id).await?);
    }

    Ok((order, items))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_order_with_items() -> Result<(), DbErr> {
        let test = TestBuilder::new().with_order_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();

        let (order, items) = create_order_with_items(db, 3).await?;

        assert_eq!(order.status, "pending");
        assert_eq!(items.len(), 3);
        assert!(items.iter().all(|item| item.order_id == order.id));

        Ok(())
    }
}
