use std::sync::Arc;

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::{
    problem::{
        catalog::Catalog, center_demands::CenterDemands, order::Order, weight::Weight,
    },
    solver::{
        cost_engine_params::CostEngineParams,
        cost_error::{ComputationError, CostError},
        leg_accounting::LegAccounting,
        route::{Cost, LegCost, Route, RouteEvaluation},
    },
    utils::permutations::Permutations,
};

/// Finds the cheapest order in which to visit the centers an order needs.
///
/// Every permutation of the active centers is costed, so the work grows as `k!` with the
/// number of centers that have demand. Centers without demand never appear in a route.
pub struct CostEngine {
    catalog: Arc<Catalog>,
    params: CostEngineParams,
}

impl CostEngine {
    pub fn new(catalog: Arc<Catalog>, params: CostEngineParams) -> Self {
        Self { catalog, params }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn demands(&self, order: &Order) -> Result<CenterDemands, ComputationError> {
        CenterDemands::aggregate(&self.catalog, order)
    }

    /// Validates raw quantities against the catalog, then computes the minimum cost.
    pub fn compute_minimum_cost_for_quantities<I, K>(
        &self,
        quantities: I,
    ) -> Result<Cost, CostError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let order = Order::from_quantities(&self.catalog, quantities)?;
        self.compute_minimum_cost(&order)
    }

    /// Minimum route cost for `order`, `0` when no center has demand.
    #[instrument(skip_all, level = "debug", fields(lines = order.len()))]
    pub fn compute_minimum_cost(&self, order: &Order) -> Result<Cost, CostError> {
        let best = self.best_route(order)?;
        Ok(best.map_or(0.0, |evaluation| evaluation.total_cost()))
    }

    pub fn best_route(&self, order: &Order) -> Result<Option<RouteEvaluation>, CostError> {
        let demands = self.demands(order)?;
        let active_centers = demands.active_centers();

        if active_centers.is_empty() {
            debug!("No center has demand");
            return Ok(None);
        }

        let mut best: Option<RouteEvaluation> = None;
        for centers in Permutations::new(active_centers) {
            let evaluation = self.evaluate_route(Route::from(centers), &demands)?;

            if best
                .as_ref()
                .is_none_or(|current| evaluation.total_cost() < current.total_cost())
            {
                best = Some(evaluation);
            }
        }

        let best = best.ok_or(ComputationError::NoRouteEvaluated)?;
        debug!(cost = best.total_cost(), "Best route found");

        Ok(Some(best))
    }

    /// Every enumerated route of `order` with its cost breakdown, in enumeration order.
    pub fn evaluate_routes(&self, order: &Order) -> Result<Vec<RouteEvaluation>, CostError> {
        let demands = self.demands(order)?;
        let active_centers = demands.active_centers();

        if active_centers.is_empty() {
            return Ok(Vec::new());
        }

        let evaluations = Permutations::new(active_centers)
            .map(|centers| self.evaluate_route(Route::from(centers), &demands))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(evaluations)
    }

    pub fn route_cost(
        &self,
        route: &Route,
        demands: &CenterDemands,
    ) -> Result<Cost, ComputationError> {
        self.evaluate_route(route.clone(), demands)
            .map(|evaluation| evaluation.total_cost())
    }

    pub fn evaluate_route(
        &self,
        route: Route,
        demands: &CenterDemands,
    ) -> Result<RouteEvaluation, ComputationError> {
        let tiers = &self.params.weight_tiers;
        let mut legs: SmallVec<[LegCost; 4]> = SmallVec::with_capacity(route.len());
        let mut carried_weight = Weight::ZERO;
        let mut running_cost: Cost = 0.0;

        for center_id in route.iter() {
            let center = self
                .catalog
                .get_center(center_id)
                .ok_or(ComputationError::UnknownCenter(center_id))?;
            let demand = demands.weight(center_id);

            let (leg_weight, distance) = match self.params.leg_accounting {
                LegAccounting::Cumulative => {
                    carried_weight += demand;
                    (carried_weight, center.distance())
                }
                LegAccounting::RoundTrip => (demand, center.distance() * 2.0),
            };

            let rate = tiers.rate(leg_weight);
            let cost = rate * distance.value();
            running_cost += cost;

            // Finite legs can still overflow once summed.
            if !cost.is_finite() || !running_cost.is_finite() {
                return Err(ComputationError::NonFiniteCost {
                    center: center.external_id().to_owned(),
                });
            }

            legs.push(LegCost {
                center_id,
                carried_weight: leg_weight,
                distance,
                rate,
                cost,
            });
        }

        let evaluation = RouteEvaluation::new(route, legs);
        debug!(
            route = ?evaluation.route().centers(),
            cost = evaluation.total_cost(),
            "Evaluated route"
        );

        Ok(evaluation)
    }
}
