mod app;
mod config;
mod cost;
mod docs;
mod error;
mod state;

use std::sync::Arc;

use axum::serve;
use courier_optimizer::solver::{cost_engine::CostEngine, cost_engine_params::CostEngineParams};
use tracing::{Level, info};

use crate::app::app;
use crate::config::ApiConfig;
use crate::state::AppState;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::from_filename("./.env.local").ok();
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();
    aide::generate::on_error(|error| tracing::error!("{}", error));
    aide::generate::extract_schemas(true);

    let config = ApiConfig::from_env()?;
    let catalog = config.load_catalog()?;
    info!(
        centers = catalog.num_centers(),
        products = catalog.num_products(),
        leg_accounting = %config.leg_accounting,
        "Catalog loaded"
    );

    let engine = CostEngine::new(
        Arc::new(catalog),
        CostEngineParams {
            leg_accounting: config.leg_accounting,
            ..CostEngineParams::default()
        },
    );
    let (app, api) = app(Arc::new(AppState { engine }));

    if std::env::args().any(|a| a == "--generate-openapi") {
        std::fs::create_dir_all("schemas")?;
        std::fs::write("schemas/openapi.json", serde_json::to_string_pretty(&*api)?)?;
        info!("OpenAPI specification has been written to schemas/openapi.json");
        return Ok(());
    }

    let listener = tokio::net::TcpListener::bind(&config.addr).await?;
    info!("Listening on {}", config.addr);

    serve(listener, app).await?;

    Ok(())
}
