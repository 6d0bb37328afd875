pub mod catalog;
pub mod center;
pub mod center_demands;
pub mod distance;
pub mod order;
pub mod product;
pub mod weight;
