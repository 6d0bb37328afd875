use schemars::schema_for;

use crate::json::types;

pub fn generate_order_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonOrder))
}

pub fn generate_catalog_schema() -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&schema_for!(types::JsonCatalog))
}
