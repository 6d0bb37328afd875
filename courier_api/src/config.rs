use std::{env, path::PathBuf};

use anyhow::Context;
use courier_optimizer::{
    json::types::JsonCatalog, problem::catalog::Catalog,
    solver::leg_accounting::LegAccounting,
};

const DEFAULT_ADDR: &str = "127.0.0.1:8080";

pub struct ApiConfig {
    pub addr: String,
    /// Catalog file, the compiled-in reference catalog is used when absent
    pub catalog_path: Option<PathBuf>,
    pub leg_accounting: LegAccounting,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let addr = env::var("COURIER_API_ADDR").unwrap_or_else(|_| String::from(DEFAULT_ADDR));
        let catalog_path = env::var_os("COURIER_CATALOG").map(PathBuf::from);
        let leg_accounting = match env::var("COURIER_LEG_ACCOUNTING") {
            Ok(value) => value
                .parse::<LegAccounting>()
                .map_err(anyhow::Error::msg)
                .context("Invalid COURIER_LEG_ACCOUNTING")?,
            Err(_) => LegAccounting::default(),
        };

        Ok(Self {
            addr,
            catalog_path,
            leg_accounting,
        })
    }

    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        let Some(path) = &self.catalog_path else {
            return Ok(Catalog::reference());
        };

        JsonCatalog::load(path)
            .with_context(|| format!("Failed to load catalog {}", path.display()))
    }
}
