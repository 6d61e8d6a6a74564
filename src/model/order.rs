use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer block of a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderCustomerDto {
    pub full_name: String,
    pub mobile: String,
    pub email: String,
    pub pincode: String,
    pub city: String,
    pub address: String,
}

/// Line item of a stored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemDto {
    pub product_id: i32,
    pub product_name: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: i32,
    pub customer: OrderCustomerDto,
    pub items: Vec<OrderItemDto>,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Customer block as submitted by clients.
///
/// Every field is optional so that missing values surface as validation
/// messages rather than deserialization failures.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderCustomerDto {
    pub full_name: Option<String>,
    pub mobile: Option<String>,
    pub email: Option<String>,
    pub pincode: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
}

/// Line item as submitted by clients.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderItemDto {
    pub product_id: Option<i32>,
    pub product_name: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    pub customer: Option<CreateOrderCustomerDto>,
    pub items: Option<Vec<CreateOrderItemDto>>,
    pub total_price: Option<f64>,
    pub status: Option<String>,
}

/// Partial-update fields for an order; omitted fields are retained.
/// Line items are fixed once the order is created.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderDto {
    pub customer: Option<CreateOrderCustomerDto>,
    pub total_price: Option<f64>,
    pub status: Option<String>,
}

/// Response body for a successful order creation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponseDto {
    pub message: String,
    pub order: OrderDto,
}
