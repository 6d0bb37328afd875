use thiserror::Error;

use crate::problem::{center::CenterIdx, order::ValidationError, product::ProductIdx};

/// Failures while enumerating or costing routes of an already validated order.
#[derive(Debug, Error, PartialEq)]
pub enum ComputationError {
    #[error("Product index {0} is not part of the catalog")]
    UnknownProduct(ProductIdx),

    #[error("Center index {0} is not part of the catalog")]
    UnknownCenter(CenterIdx),

    #[error("Route cost is not finite at center {center}")]
    NonFiniteCost { center: String },

    #[error("No route was evaluated")]
    NoRouteEvaluated,
}

#[derive(Debug, Error, PartialEq)]
pub enum CostError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Computation(#[from] ComputationError),
}

impl CostError {
    pub fn is_validation(&self) -> bool {
        matches!(self, CostError::Validation(_))
    }
}
