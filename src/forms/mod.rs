pub mod cart;
pub mod schedule;
