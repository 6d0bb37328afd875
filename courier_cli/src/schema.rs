use clap::ValueEnum;
use courier_optimizer::json::schema::{generate_catalog_schema, generate_order_schema};

#[derive(Clone, Copy, ValueEnum)]
pub enum SchemaKind {
    Order,
    Catalog,
}

pub fn run(kind: SchemaKind) -> anyhow::Result<()> {
    let schema = match kind {
        SchemaKind::Order => generate_order_schema()?,
        SchemaKind::Catalog => generate_catalog_schema()?,
    };

    println!("{schema}");

    Ok(())
}
