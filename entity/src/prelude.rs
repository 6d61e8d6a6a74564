pub use super::about::Entity as About;
pub use super::contact::Entity as Contact;
pub use super::gallery::Entity as Gallery;
pub use super::order::Entity as Order;
pub use super::order_item::Entity as OrderItem;
pub use super::product::Entity as Product;
pub use super::review::Entity as Review;
