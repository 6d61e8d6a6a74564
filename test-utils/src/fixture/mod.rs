//! Fixtures for creating in-memory entity models without database insertion.
//!
//! Useful for unit tests that exercise pure logic (validation, rendering)
//! and for providing consistent default values to the factories.

pub mod order;
pub mod product;
