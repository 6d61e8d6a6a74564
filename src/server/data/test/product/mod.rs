use crate::server::{
    data::product::ProductRepository,
    model::product::{ProductDraft, Unit},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
mod get_all;
mod get_by_id;
mod update;

/// Helper producing a validated draft with the given slug.
fn draft_with_slug(slug: &str) -> ProductDraft {
    ProductDraft {
        product_name: "Fresh Milk".to_string(),
        unit: Unit::Liter,
        quantity: "1".to_string(),
        description: "Farm fresh".to_string(),
        image: "/uploads/milk.jpg".to_string(),
        mrp: 60.0,
        selling_price: 50.0,
        slug: slug.to_string(),
    }
}
