use sea_orm::DatabaseConnection;

use crate::server::{
    data::order::OrderRepository,
    error::AppError,
    model::order::{CreateOrderParams, Order, UpdateOrderParams},
};

pub struct OrderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> OrderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets all orders with their line items, newest first
    pub async fn get_all(&self) -> Result<Vec<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_all().await?)
    }

    /// Gets an order by ID with its line items
    pub async fn get_by_id(&self, id: i32) -> Result<Option<Order>, AppError> {
        Ok(OrderRepository::new(self.db).get_by_id(id).await?)
    }

    /// Creates an order from validated parameters
    pub async fn create(&self, params: CreateOrderParams) -> Result<Order, AppError> {
        Ok(OrderRepository::new(self.db).create(params).await?)
    }

    /// Updates an order's customer, total, or status
    ///
    /// # Returns
    /// - `Ok(Some(Order))` - Updated order
    /// - `Ok(None)` - No order with the given ID
    pub async fn update(
        &self,
        id: i32,
        params: UpdateOrderParams,
    ) -> Result<Option<Order>, AppError> {
        Ok(OrderRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes an order and its line items
    ///
    /// # Returns
    /// - `Ok(true)` - Order was deleted
    /// - `Ok(false)` - No order with the given ID
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(OrderRepository::new(self.db).delete(id).await?)
    }
}
