use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    problem::{
        catalog::{Catalog, CatalogBuilder, CatalogError},
        center::CenterIdx,
        order::{Order, ValidationError},
    },
    solver::route::{LegCost, RouteEvaluation},
};

pub trait FromCatalog<T> {
    fn from_catalog(value: T, catalog: &Catalog) -> Self;
}

/// Product identifier → requested quantity.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct JsonOrder(pub BTreeMap<String, i64>);

impl JsonOrder {
    pub fn from_value(value: serde_json::Value) -> Result<Self, ValidationError> {
        if value.is_null() {
            return Err(ValidationError::Malformed(String::from("order is missing")));
        }

        serde_json::from_value(value)
            .map_err(|error| ValidationError::Malformed(error.to_string()))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, ValidationError> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(ValidationError::Malformed(String::from("order is missing")));
        }

        let value: serde_json::Value = serde_json::from_slice(bytes)
            .map_err(|error| ValidationError::Malformed(error.to_string()))?;

        JsonOrder::from_value(value)
    }

    pub fn build_order(&self, catalog: &Catalog) -> Result<Order, ValidationError> {
        Order::from_quantities(
            catalog,
            self.0
                .iter()
                .map(|(product, quantity)| (product.as_str(), *quantity)),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "MinimumCost")]
pub struct JsonMinimumCost {
    pub minimum_cost: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Catalog")]
pub struct JsonCatalog {
    pub centers: Vec<JsonCenter>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Center")]
pub struct JsonCenter {
    pub id: String,
    /// Distance from the center to the hub
    pub distance: f64,
    pub products: Vec<JsonProduct>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields, rename = "Product")]
pub struct JsonProduct {
    pub id: String,
    /// Weight of one unit
    pub weight: f64,
}

#[derive(Debug, Error)]
pub enum CatalogFileError {
    #[error("Failed to read catalog: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

impl JsonCatalog {
    /// Parses a JSON catalog and builds it.
    pub fn from_reader(reader: impl Read) -> Result<Catalog, CatalogFileError> {
        let json: JsonCatalog = serde_json::from_reader(reader)?;
        Ok(json.build_catalog()?)
    }

    pub fn load(path: &Path) -> Result<Catalog, CatalogFileError> {
        let file = File::open(path)?;
        JsonCatalog::from_reader(BufReader::new(file))
    }

    pub fn build_catalog(self) -> Result<Catalog, CatalogError> {
        let mut builder = CatalogBuilder::default();

        for center in self.centers {
            builder.add_center(center.id.clone(), center.distance);
            for product in center.products {
                builder.add_product(product.id, center.id.clone(), product.weight);
            }
        }

        builder.build()
    }
}

impl From<&Catalog> for JsonCatalog {
    fn from(catalog: &Catalog) -> Self {
        JsonCatalog {
            centers: catalog
                .centers_iter()
                .map(|(center_id, center)| JsonCenter {
                    id: center.external_id().to_owned(),
                    distance: center.distance().value(),
                    products: catalog
                        .products_of(center_id)
                        .map(|product| JsonProduct {
                            id: product.external_id().to_owned(),
                            weight: product.unit_weight().value(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "RouteEvaluation")]
pub struct JsonRouteEvaluation {
    pub route: Vec<String>,
    pub total_cost: f64,
    pub legs: Vec<JsonLegCost>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename = "LegCost")]
pub struct JsonLegCost {
    pub center: String,
    pub carried_weight: f64,
    pub distance: f64,
    pub rate: f64,
    pub cost: f64,
}

fn center_external_id(catalog: &Catalog, center_id: CenterIdx) -> String {
    catalog
        .get_center(center_id)
        .map_or_else(|| center_id.to_string(), |center| center.external_id().to_owned())
}

impl FromCatalog<&LegCost> for JsonLegCost {
    fn from_catalog(value: &LegCost, catalog: &Catalog) -> Self {
        JsonLegCost {
            center: center_external_id(catalog, value.center_id),
            carried_weight: value.carried_weight.value(),
            distance: value.distance.value(),
            rate: value.rate,
            cost: value.cost,
        }
    }
}

impl FromCatalog<&RouteEvaluation> for JsonRouteEvaluation {
    fn from_catalog(value: &RouteEvaluation, catalog: &Catalog) -> Self {
        JsonRouteEvaluation {
            route: value
                .route()
                .iter()
                .map(|center_id| center_external_id(catalog, center_id))
                .collect(),
            total_cost: value.total_cost(),
            legs: value
                .legs()
                .iter()
                .map(|leg| JsonLegCost::from_catalog(leg, catalog))
                .collect(),
        }
    }
}
