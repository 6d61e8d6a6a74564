//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with a `Factory` struct for
//! customization and a `create_*` convenience function for quick default
//! creation. Factories insert records through the usual entity layer so
//! tests stay concise.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let product = factory::product::create_product(&db).await?;
//!     let order = factory::order::create_order_with_items(&db, 2).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod about;
pub mod contact;
pub mod gallery;
pub mod helpers;
pub mod order;
pub mod product;
pub mod review;

// Re-export commonly used factory functions for concise usage
pub use about::create_about;
pub use contact::create_contact;
pub use gallery::create_gallery;
pub use order::{create_order, create_order_with_items};
pub use product::create_product;
pub use review::create_review;
