use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;

use crate::{cost::CostArgs, explain::ExplainArgs, schema::SchemaKind};

mod catalog;
mod cost;
mod explain;
mod file_utils;
mod parsers;
mod schema;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Catalog file, the reference catalog is used when omitted
    #[arg(long, global = true, env = "COURIER_CATALOG")]
    catalog: Option<PathBuf>,

    #[arg(short, long, global = true)]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the minimum delivery cost of an order
    Cost {
        #[command(flatten)]
        args: CostArgs,
    },
    /// Show every enumerated route of an order with its cost breakdown
    #[command(visible_alias = "x")]
    Explain {
        #[command(flatten)]
        args: ExplainArgs,
    },
    /// Print the active catalog
    Catalog {
        #[arg(long)]
        json: bool,
    },
    /// Print the JSON schema of an input file
    Schema {
        #[arg(value_enum)]
        kind: SchemaKind,
    },
}

fn main() -> Result<(), anyhow::Error> {
    dotenvy::from_filename("./.env.local").ok();

    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let catalog_path = cli.catalog.as_deref();
    match cli.command {
        Commands::Cost { args } => cost::run(args, file_utils::read_catalog(catalog_path)?)?,
        Commands::Explain { args } => explain::run(args, file_utils::read_catalog(catalog_path)?)?,
        Commands::Catalog { json } => catalog::run(&file_utils::read_catalog(catalog_path)?, json)?,
        Commands::Schema { kind } => schema::run(kind)?,
    }

    Ok(())
}
