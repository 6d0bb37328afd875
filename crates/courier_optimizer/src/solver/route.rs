use smallvec::SmallVec;

use crate::problem::{center::CenterIdx, distance::Distance, weight::Weight};

pub type Cost = f64;

/// Visiting order of the centers, starting from the first center and ending at the hub.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Route(SmallVec<[CenterIdx; 4]>);

impl Route {
    pub fn centers(&self) -> &[CenterIdx] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = CenterIdx> {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<SmallVec<[CenterIdx; 4]>> for Route {
    fn from(centers: SmallVec<[CenterIdx; 4]>) -> Self {
        Route(centers)
    }
}

impl FromIterator<CenterIdx> for Route {
    fn from_iter<T: IntoIterator<Item = CenterIdx>>(iter: T) -> Self {
        Route(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegCost {
    pub center_id: CenterIdx,
    pub carried_weight: Weight,
    pub distance: Distance,
    pub rate: f64,
    pub cost: Cost,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteEvaluation {
    route: Route,
    legs: SmallVec<[LegCost; 4]>,
    total_cost: Cost,
}

impl RouteEvaluation {
    pub fn new(route: Route, legs: SmallVec<[LegCost; 4]>) -> Self {
        let total_cost = legs.iter().map(|leg| leg.cost).sum();
        Self {
            route,
            legs,
            total_cost,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn legs(&self) -> &[LegCost] {
        &self.legs
    }

    pub fn total_cost(&self) -> Cost {
        self.total_cost
    }
}
