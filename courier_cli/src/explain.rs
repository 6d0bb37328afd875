use clap::Args;
use comfy_table::Table;
use courier_optimizer::{
    json::types::{FromCatalog, JsonRouteEvaluation},
    problem::catalog::Catalog,
};
use tracing::info;

use crate::{
    cost::{CostArgs, build_engine},
    file_utils::read_order,
};

#[derive(Args)]
pub struct ExplainArgs {
    #[command(flatten)]
    pub cost: CostArgs,

    /// Print the evaluated routes as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ExplainArgs, catalog: Catalog) -> anyhow::Result<()> {
    let order = read_order(&args.cost.input)?.build_order(&catalog)?;
    let engine = build_engine(catalog, args.cost.policy);

    let mut evaluations: Vec<JsonRouteEvaluation> = engine
        .evaluate_routes(&order)?
        .iter()
        .map(|evaluation| JsonRouteEvaluation::from_catalog(evaluation, engine.catalog()))
        .collect();
    evaluations.sort_by(|a, b| a.total_cost.total_cmp(&b.total_cost));

    if args.json {
        println!("{}", serde_json::to_string_pretty(&evaluations)?);
        return Ok(());
    }

    if evaluations.is_empty() {
        info!("No center has demand, minimum cost is 0");
        return Ok(());
    }

    let minimum_cost = evaluations[0].total_cost;
    let mut table = Table::new();
    table.set_header(vec!["", "Route", "Legs", "Cost"]);

    for evaluation in &evaluations {
        let legs = evaluation
            .legs
            .iter()
            .map(|leg| {
                format!(
                    "{}: {} × {} × {} = {}",
                    leg.center, leg.carried_weight, leg.rate, leg.distance, leg.cost
                )
            })
            .collect::<Vec<_>>()
            .join("\n");

        table.add_row(vec![
            if evaluation.total_cost == minimum_cost {
                String::from("*")
            } else {
                String::new()
            },
            evaluation.route.join(" → "),
            legs,
            evaluation.total_cost.to_string(),
        ]);
    }

    println!("{table}");
    info!(
        "Evaluated {} routes with policy {}, minimum cost = {}",
        evaluations.len(),
        args.cost.policy,
        minimum_cost
    );

    Ok(())
}
