pub mod cost_engine;
pub mod cost_engine_params;
pub mod cost_error;
pub mod leg_accounting;
pub mod route;
pub mod weight_tiers;
