use std::{fs::File, io::Read, path::Path};

use anyhow::Context;
use courier_optimizer::{
    json::types::{JsonCatalog, JsonOrder},
    problem::catalog::Catalog,
};

pub fn read_order(path: &Path) -> anyhow::Result<JsonOrder> {
    let mut bytes = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut bytes))
        .with_context(|| format!("Failed to read order {}", path.display()))?;

    Ok(JsonOrder::from_slice(&bytes)?)
}

/// Reads a catalog file, falling back to the reference catalog when no path is given.
pub fn read_catalog(path: Option<&Path>) -> anyhow::Result<Catalog> {
    let Some(path) = path else {
        return Ok(Catalog::reference());
    };

    JsonCatalog::load(path).with_context(|| format!("Failed to load catalog {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::{env, path::PathBuf};

    use super::*;

    fn fixture(name: &str) -> PathBuf {
        env::current_dir()
            .unwrap()
            .join("tests/fixtures")
            .join(name)
    }

    #[test]
    fn test_read_order() {
        let order = read_order(&fixture("order.json")).unwrap();

        assert_eq!(order.0.len(), 3);
        assert_eq!(order.0["D"], 1);
    }

    #[test]
    fn test_read_garbled_order() {
        let error = read_order(&fixture("garbled_order.json")).unwrap_err();

        assert!(error.to_string().starts_with("Order is not a valid mapping"));
    }

    #[test]
    fn test_read_missing_order() {
        assert!(read_order(&fixture("missing.json")).is_err());
    }

    #[test]
    fn test_read_catalog() {
        let catalog = read_catalog(Some(&fixture("catalog.json"))).unwrap();

        assert_eq!(catalog.num_centers(), 2);
        assert_eq!(catalog.num_products(), 3);
        assert_eq!(catalog.center_of("pallet"), Ok(catalog.center_idx("south").unwrap()));
    }

    #[test]
    fn test_reference_catalog_by_default() {
        let catalog = read_catalog(None).unwrap();

        assert_eq!(catalog.num_centers(), 3);
    }
}
