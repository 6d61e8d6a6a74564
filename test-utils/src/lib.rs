//! Shared testing infrastructure for the storefront workspace.
//!
//! Provides an in-memory SQLite test context, a schema builder for creating
//! entity tables on demand, factories for inserting test records with sensible
//! defaults, and fixtures for building in-memory entity models without a
//! database.

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
