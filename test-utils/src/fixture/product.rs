//! Product fixtures for creating in-memory test data.

use chrono::Utc;
use entity::product;

/// Default test product name.
pub const DEFAULT_PRODUCT_NAME: &str = "Test Product";

/// Default unit of sale.
pub const DEFAULT_UNIT: &str = "kg";

/// Default free-form quantity.
pub const DEFAULT_QUANTITY: &str = "500";

/// Default maximum retail price.
pub const DEFAULT_MRP: f64 = 100.0;

/// Default selling price.
pub const DEFAULT_SELLING_PRICE: f64 = 80.0;

/// Creates a product entity model with default values.
///
/// The model is not inserted into any database; use it for unit tests and
/// for seeding factories.
///
/// # Returns
/// - `product::Model` - In-memory product entity
pub fn entity() -> product::Model {
    let now = Utc::now();

    product::Model {
        id: 1,
        product_name: DEFAULT_PRODUCT_NAME.to_string(),
        unit: DEFAULT_UNIT.to_string(),
        quantity: DEFAULT_QUANTITY.to_string(),
        description: String::new(),
        image: String::new(),
        mrp: DEFAULT_MRP,
        selling_price: DEFAULT_SELLING_PRICE,
        slug: "test-product-1".to_string(),
        created_at: now,
        updated_at: now,
    }
}
