use courier_optimizer::solver::cost_engine::CostEngine;

pub struct AppState {
    pub engine: CostEngine,
}
