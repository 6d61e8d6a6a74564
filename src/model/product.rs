use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product as returned by every read and write response.
///
/// `discount_percentage` is derived from `mrp` and `selling_price` on each
/// response and is never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: i32,
    pub product_name: String,
    pub unit: String,
    pub quantity: String,
    pub description: String,
    pub image: String,
    pub mrp: f64,
    pub selling_price: f64,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub discount_percentage: i64,
}
