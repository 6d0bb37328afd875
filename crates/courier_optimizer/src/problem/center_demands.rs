use smallvec::SmallVec;

use crate::{
    problem::{catalog::Catalog, center::CenterIdx, order::Order, weight::Weight},
    solver::cost_error::ComputationError,
};

pub type ActiveCenters = SmallVec<[CenterIdx; 4]>;

/// Weight demanded from each center by an order, indexed by [`CenterIdx`].
#[derive(Debug, Clone, PartialEq)]
pub struct CenterDemands {
    weights: Vec<Weight>,
}

impl CenterDemands {
    /// Sums `unit_weight * quantity` per center. Fails if the order refers to products
    /// that are not part of `catalog`.
    pub fn aggregate(catalog: &Catalog, order: &Order) -> Result<Self, ComputationError> {
        let mut weights = vec![Weight::ZERO; catalog.num_centers()];

        for line in order.lines() {
            let product = catalog
                .get_product(line.product_id)
                .ok_or(ComputationError::UnknownProduct(line.product_id))?;
            let weight = weights
                .get_mut(product.center_id().get())
                .ok_or(ComputationError::UnknownCenter(product.center_id()))?;

            *weight += product.unit_weight() * line.quantity;
        }

        Ok(Self { weights })
    }

    pub fn weight(&self, center_id: CenterIdx) -> Weight {
        self.weights
            .get(center_id.get())
            .copied()
            .unwrap_or(Weight::ZERO)
    }

    /// Centers with a strictly positive demand, in catalog order.
    pub fn active_centers(&self) -> ActiveCenters {
        self.iter()
            .filter(|(_, weight)| weight.is_positive())
            .map(|(center_id, _)| center_id)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (CenterIdx, Weight)> {
        CenterIdx::enumerate(&self.weights).map(|(center_id, weight)| (center_id, *weight))
    }

    pub fn total(&self) -> Weight {
        self.weights.iter().copied().sum()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
