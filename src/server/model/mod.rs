//! Domain models and operation parameters.
//!
//! Domain types sit between the entity models produced by the repositories
//! and the DTOs returned by the controllers. Conversion happens at the
//! repository boundary (`from_entity`) and the controller boundary
//! (`into_dto`).

pub mod about;
pub mod contact;
pub mod gallery;
pub mod order;
pub mod product;
pub mod review;
