use std::{path::PathBuf, sync::Arc};

use clap::Args;
use courier_optimizer::{
    json::types::JsonMinimumCost,
    problem::catalog::Catalog,
    solver::{
        cost_engine::CostEngine, cost_engine_params::CostEngineParams,
        leg_accounting::LegAccounting,
    },
};
use tracing::info;

use crate::{file_utils::read_order, parsers};

#[derive(Args)]
pub struct CostArgs {
    /// Order file, a JSON object of product to quantity
    #[arg(short = 'i', long)]
    pub input: PathBuf,

    /// How route legs are charged: cumulative or round_trip
    #[arg(
        long,
        env = "COURIER_LEG_ACCOUNTING",
        value_parser = parsers::parse_leg_accounting,
        default_value = "cumulative"
    )]
    pub policy: LegAccounting,
}

pub fn build_engine(catalog: Catalog, leg_accounting: LegAccounting) -> CostEngine {
    CostEngine::new(
        Arc::new(catalog),
        CostEngineParams {
            leg_accounting,
            ..CostEngineParams::default()
        },
    )
}

pub fn run(args: CostArgs, catalog: Catalog) -> anyhow::Result<()> {
    let order = read_order(&args.input)?.build_order(&catalog)?;
    let engine = build_engine(catalog, args.policy);

    let minimum_cost = engine.compute_minimum_cost(&order)?;
    info!(
        "Finished: lines = {}, policy = {}, minimum cost = {}",
        order.len(),
        args.policy,
        minimum_cost
    );

    println!(
        "{}",
        serde_json::to_string_pretty(&JsonMinimumCost { minimum_cost })?
    );

    Ok(())
}
