//! HTTP server internals.
//!
//! Layered as controller -> service -> data, with domain models in
//! [`model`] and shared infrastructure in the remaining modules.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
