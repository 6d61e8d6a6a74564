mod order;
mod product;
