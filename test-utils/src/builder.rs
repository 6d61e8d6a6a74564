use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring in-memory SQLite test
/// environments. Add entity tables with `with_table()` (or one of the
/// convenience methods), then call `build()` to create the configured context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Product, Review};
///
/// let test = TestBuilder::new()
///     .with_table(Product)
///     .with_table(Review)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, generated
    /// from entity models and executed in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE statement from the provided SeaORM entity
    /// using SQLite syntax. Tables should be added in dependency order
    /// (tables with foreign keys after their referenced tables).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the product catalog tables (Product and Gallery).
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_catalog_tables(self) -> Self {
        self.with_table(Product).with_table(Gallery)
    }

    /// Adds the order tables (Order and OrderItem) in dependency order.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_order_tables(self) -> Self {
        self.with_table(Order).with_table(OrderItem)
    }

    /// Adds every table in the store schema.
    ///
    /// Convenience for tests that touch several unrelated surfaces.
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_store_tables(self) -> Self {
        self.with_catalog_tables()
            .with_table(Review)
            .with_table(About)
            .with_table(Contact)
            .with_order_tables()
    }

    /// Builds and initializes the test context with the configured tables.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized context with database and tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
