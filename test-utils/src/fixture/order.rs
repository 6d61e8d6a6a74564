//! Order fixtures for creating in-memory test data.

use chrono::Utc;
use entity::{order, order_item};

/// Default customer name.
pub const DEFAULT_FULL_NAME: &str = "Asha Patel";

/// Default customer mobile number (valid Indian format).
pub const DEFAULT_MOBILE: &str = "9876543210";

/// Default customer email.
pub const DEFAULT_EMAIL: &str = "asha@example.com";

/// Default customer pincode.
pub const DEFAULT_PINCODE: &str = "560001";

/// Default customer city.
pub const DEFAULT_CITY: &str = "Bengaluru";

/// Default customer address.
pub const DEFAULT_ADDRESS: &str = "12 Market Street";

/// Default order total.
pub const DEFAULT_TOTAL_PRICE: f64 = 120.0;

/// Creates an order entity model with default values.
///
/// # Returns
/// - `order::Model` - In-memory order entity with a "pending" status
pub fn entity() -> order::Model {
    let now = Utc::now();

    order::Model {
        id: 1,
        full_name: DEFAULT_FULL_NAME.to_string(),
        mobile: DEFAULT_MOBILE.to_string(),
        email: DEFAULT_EMAIL.to_string(),
        pincode: DEFAULT_PINCODE.to_string(),
        city: DEFAULT_CITY.to_string(),
        address: DEFAULT_ADDRESS.to_string(),
        total_price: DEFAULT_TOTAL_PRICE,
        status: "pending".to_string(),
        created_at: now,
        updated_at: now,
    }
}

/// Creates an order item entity model with default values for the given order.
///
/// # Arguments
/// - `order_id` - Order the item belongs to
///
/// # Returns
/// - `order_item::Model` - In-memory order item entity
pub fn item_entity(order_id: i32) -> order_item::Model {
    order_item::Model {
        id: 1,
        order_id,
        product_id: 1,
        product_name: "Milk".to_string(),
        quantity: 2,
        price: 60.0,
    }
}
