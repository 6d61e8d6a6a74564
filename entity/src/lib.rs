pub mod prelude;

pub mod about;
pub mod contact;
pub mod gallery;
pub mod order;
pub mod order_item;
pub mod product;
pub mod review;
