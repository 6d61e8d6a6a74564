use crate::server::{
    data::order::OrderRepository,
    model::order::{
        CreateOrderParams, Customer, OrderItem, OrderStatus, UpdateOrderParams,
    },
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod get_by_id;
mod update;

/// Helper producing validated create parameters with one line item.
fn create_params() -> CreateOrderParams {
    CreateOrderParams {
        customer: Customer {
            full_name: "Asha Patel".to_string(),
            mobile: "9876543210".to_string(),
            email: "asha@example.com".to_string(),
            pincode: "560001".to_string(),
            city: "Bengaluru".to_string(),
            address: "12 MG Road".to_string(),
        },
        items: vec![OrderItem {
            product_id: 1,
            product_name: "Fresh Milk".to_string(),
            quantity: 2,
            price: 50.0,
        }],
        total_price: 100.0,
        status: OrderStatus::Pending,
    }
}
