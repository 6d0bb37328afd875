pub mod calculate_cost_handler;
pub mod catalog_handler;
pub mod routes;
