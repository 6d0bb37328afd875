use comfy_table::Table;
use courier_optimizer::{json::types::JsonCatalog, problem::catalog::Catalog};

pub fn run(catalog: &Catalog, json: bool) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonCatalog::from(catalog))?
        );
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Center", "Distance", "Product", "Unit weight"]);

    for (center_id, center) in catalog.centers_iter() {
        for product in catalog.products_of(center_id) {
            table.add_row(vec![
                center.external_id().to_owned(),
                center.distance().to_string(),
                product.external_id().to_owned(),
                product.unit_weight().to_string(),
            ]);
        }
    }

    println!("{table}");

    Ok(())
}
