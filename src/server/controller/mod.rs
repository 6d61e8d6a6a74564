//! HTTP API endpoint handlers.
//!
//! Controllers translate between the HTTP surface (DTOs, status codes,
//! multipart streams) and the service layer. Validation messages surface as
//! 400 responses; missing resources as 404.

pub mod about;
pub mod contact;
pub mod gallery;
pub mod order;
pub mod product;
pub mod review;
