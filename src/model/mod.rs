//! Wire-format DTOs shared by every API surface.
//!
//! All DTOs serialize with camelCase field names to match the JSON contract
//! of the storefront clients.

pub mod about;
pub mod api;
pub mod contact;
pub mod gallery;
pub mod order;
pub mod product;
pub mod review;
