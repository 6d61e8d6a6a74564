//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls and external services
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **File Lifecycle**: Keeping stored images consistent with catalog records

pub mod about;
pub mod contact;
pub mod gallery;
pub mod notification;
pub mod order;
pub mod product;
pub mod review;
pub mod upload;

#[cfg(test)]
mod test;
