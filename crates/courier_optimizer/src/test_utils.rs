use std::sync::Arc;

use crate::{
    problem::{
        catalog::{Catalog, CatalogBuilder},
        order::Order,
    },
    solver::{
        cost_engine::CostEngine, cost_engine_params::CostEngineParams,
        leg_accounting::LegAccounting,
    },
};

pub fn reference_order(catalog: &Catalog, quantities: &[(&str, i64)]) -> Order {
    Order::from_quantities(catalog, quantities.iter().copied()).unwrap()
}

pub fn reference_engine(leg_accounting: LegAccounting) -> CostEngine {
    CostEngine::new(
        Arc::new(Catalog::reference()),
        CostEngineParams {
            leg_accounting,
            ..CostEngineParams::default()
        },
    )
}

pub const FOUR_CENTER_DISTANCES: [f64; 4] = [3.0, 4.0, 2.0, 5.5];

/// Four centers `W1..W4` at [`FOUR_CENTER_DISTANCES`], each stocking a light (`l`), a
/// medium (`m`) and a heavy (`h`) product, e.g. `W2m`.
pub fn four_center_catalog() -> Catalog {
    let mut builder = CatalogBuilder::default();

    for (index, distance) in FOUR_CENTER_DISTANCES.iter().enumerate() {
        let center = format!("W{}", index + 1);
        builder
            .add_center(center.clone(), *distance)
            .add_product(format!("{center}l"), center.clone(), 0.5 + index as f64)
            .add_product(format!("{center}m"), center.clone(), 2.5)
            .add_product(format!("{center}h"), center.clone(), 7.0 + 2.0 * index as f64);
    }

    builder.build().unwrap()
}
