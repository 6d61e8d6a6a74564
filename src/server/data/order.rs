use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionError, TransactionTrait,
};

use crate::server::model::order::{CreateOrderParams, Order, UpdateOrderParams};

pub struct OrderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders with their line items, newest first
    pub async fn get_all(&self) -> Result<Vec<Order>, DbErr> {
        entity::prelude::Order::find()
            .find_with_related(entity::prelude::OrderItem)
            .order_by_desc(entity::order::Column::CreatedAt)
            .all(self.db)
            .await?
            .into_iter()
            .map(|(order, items)| Order::from_entities(order, items))
            .collect()
    }

    /// Gets an order by ID with its line items
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, DbErr> {
        let Some(order) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .all(self.db)
            .await?;

        Order::from_entities(order, items).map(Some)
    }

    /// Creates a new order and its line items in a single transaction
    ///
    /// A failed item insert rolls back the order row, so a create either
    /// persists the whole order or nothing.
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, DbErr> {
        let now = Utc::now();

        let (order, items) = self
            .db
            .transaction::<_, (entity::order::Model, Vec<entity::order_item::Model>), DbErr>(
                |txn| {
                    Box::pin(async move {
                        let order = entity::order::ActiveModel {
                            full_name: ActiveValue::Set(params.customer.full_name),
                            mobile: ActiveValue::Set(params.customer.mobile),
                            email: ActiveValue::Set(params.customer.email),
                            pincode: ActiveValue::Set(params.customer.pincode),
                            city: ActiveValue::Set(params.customer.city),
                            address: ActiveValue::Set(params.customer.address),
                            total_price: ActiveValue::Set(params.total_price),
                            status: ActiveValue::Set(params.status.as_str().to_string()),
                            created_at: ActiveValue::Set(now),
                            updated_at: ActiveValue::Set(now),
                            ..Default::default()
                        }
                        .insert(txn)
                        .await?;

                        let mut items = Vec::with_capacity(params.items.len());
                        for item in params.items {
                            items.push(
                                entity::order_item::ActiveModel {
                                    order_id: ActiveValue::Set(order.id),
                                    product_id: ActiveValue::Set(item.product_id),
                                    product_name: ActiveValue::Set(item.product_name),
                                    quantity: ActiveValue::Set(item.quantity),
                                    price: ActiveValue::Set(item.price),
                                    ..Default::default()
                                }
                                .insert(txn)
                                .await?,
                            );
                        }

                        Ok((order, items))
                    })
                },
            )
            .await
            .map_err(|err| match err {
                TransactionError::Connection(err) => err,
                TransactionError::Transaction(err) => err,
            })?;

        Order::from_entities(order, items)
    }

    /// Updates an order's customer, total, or status; line items are untouched
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order with its line items
    /// - `Ok(None)` - No order with the given ID
    pub async fn update(&self, id: i32, params: UpdateOrderParams) -> Result<Option<Order>, DbErr> {
        let Some(existing) = entity::prelude::Order::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active_model: entity::order::ActiveModel = existing.into();
        if let Some(customer) = params.customer {
            active_model.full_name = ActiveValue::Set(customer.full_name);
            active_model.mobile = ActiveValue::Set(customer.mobile);
            active_model.email = ActiveValue::Set(customer.email);
            active_model.pincode = ActiveValue::Set(customer.pincode);
            active_model.city = ActiveValue::Set(customer.city);
            active_model.address = ActiveValue::Set(customer.address);
        }
        if let Some(total_price) = params.total_price {
            active_model.total_price = ActiveValue::Set(total_price);
        }
        if let Some(status) = params.status {
            active_model.status = ActiveValue::Set(status.as_str().to_string());
        }
        active_model.updated_at = ActiveValue::Set(Utc::now());

        let order = active_model.update(self.db).await?;

        let items = entity::prelude::OrderItem::find()
            .filter(entity::order_item::Column::OrderId.eq(id))
            .all(self.db)
            .await?;

        Order::from_entities(order, items).map(Some)
    }

    /// Deletes an order; line items go with it via the foreign key
    ///
    /// # Returns
    /// - `Ok(true)` - Order was deleted
    /// - `Ok(false)` - No order with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Order::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
