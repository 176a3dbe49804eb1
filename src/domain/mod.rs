pub mod cart;
pub mod category;
pub mod combo;
pub mod order;
pub mod product;
pub mod schedule;
