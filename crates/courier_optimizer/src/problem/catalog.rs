use fxhash::{FxHashMap, FxHashSet};
use thiserror::Error;

use crate::problem::{
    center::{Center, CenterIdx},
    distance::Distance,
    product::{Product, ProductIdx},
    weight::Weight,
};

/// Centers of the reference deployment: identifier, distance to the hub, stocked
/// products with their unit weight.
const REFERENCE_CENTERS: &[(&str, f64, &[(&str, f64)])] = &[
    ("C1", 3.0, &[("A", 3.0), ("B", 2.0), ("C", 8.0)]),
    ("C2", 4.0, &[("D", 12.0), ("E", 25.0), ("F", 15.0)]),
    ("C3", 2.0, &[("G", 0.5), ("H", 1.0), ("I", 2.0)]),
];

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("Unknown product: {0}")]
    UnknownProduct(String),

    #[error("Product {product} references unknown center {center}")]
    UnknownCenter { product: String, center: String },

    #[error("Duplicate center: {0}")]
    DuplicateCenter(String),

    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),

    #[error("Center {center} must have a positive distance, got {distance}")]
    InvalidDistance { center: String, distance: f64 },

    #[error("Product {product} must have a positive unit weight, got {weight}")]
    InvalidWeight { product: String, weight: f64 },

    #[error("Catalog has no centers")]
    NoCenters,
}

/// Immutable lookup table of centers and the products they stock.
///
/// Built once at startup and shared read-only (usually behind an `Arc`). Every product
/// belongs to exactly one center and every center has a positive distance to the hub.
pub struct Catalog {
    centers: Vec<Center>,
    products: Vec<Product>,
    center_ids: FxHashMap<String, CenterIdx>,
    product_ids: FxHashMap<String, ProductIdx>,
}

impl Catalog {
    /// The compiled-in catalog of the reference deployment.
    pub fn reference() -> Self {
        let mut centers = Vec::with_capacity(REFERENCE_CENTERS.len());
        let mut products = Vec::new();

        for (center_id, (external_id, distance, stock)) in CenterIdx::enumerate(REFERENCE_CENTERS) {
            centers.push(Center::new(
                external_id.to_string(),
                Distance::new(*distance),
            ));
            products.extend(stock.iter().map(|(product_id, weight)| {
                Product::new(product_id.to_string(), center_id, Weight::new(*weight))
            }));
        }

        Catalog::from_parts(centers, products)
    }

    fn from_parts(centers: Vec<Center>, products: Vec<Product>) -> Self {
        let center_ids = CenterIdx::enumerate(&centers)
            .map(|(index, center)| (center.external_id().to_owned(), index))
            .collect();
        let product_ids = ProductIdx::enumerate(&products)
            .map(|(index, product)| (product.external_id().to_owned(), index))
            .collect();

        Self {
            centers,
            products,
            center_ids,
            product_ids,
        }
    }

    pub fn center_of(&self, product_id: &str) -> Result<CenterIdx, CatalogError> {
        self.lookup_product(product_id)
            .map(|product| product.center_id())
    }

    pub fn unit_weight(&self, product_id: &str) -> Result<Weight, CatalogError> {
        self.lookup_product(product_id)
            .map(|product| product.unit_weight())
    }

    #[inline]
    pub fn distance(&self, center_id: CenterIdx) -> Distance {
        self.centers[center_id].distance()
    }

    fn lookup_product(&self, product_id: &str) -> Result<&Product, CatalogError> {
        self.product_idx(product_id)
            .map(|index| &self.products[index])
            .ok_or_else(|| CatalogError::UnknownProduct(product_id.to_owned()))
    }

    pub fn product_idx(&self, product_id: &str) -> Option<ProductIdx> {
        self.product_ids.get(product_id).copied()
    }

    pub fn center_idx(&self, center_id: &str) -> Option<CenterIdx> {
        self.center_ids.get(center_id).copied()
    }

    pub fn get_center(&self, center_id: CenterIdx) -> Option<&Center> {
        self.centers.get(center_id.get())
    }

    pub fn get_product(&self, product_id: ProductIdx) -> Option<&Product> {
        self.products.get(product_id.get())
    }

    pub fn centers_iter(&self) -> impl Iterator<Item = (CenterIdx, &Center)> {
        CenterIdx::enumerate(&self.centers)
    }

    pub fn products_of(&self, center_id: CenterIdx) -> impl Iterator<Item = &Product> {
        self.products
            .iter()
            .filter(move |product| product.center_id() == center_id)
    }

    pub fn num_centers(&self) -> usize {
        self.centers.len()
    }

    pub fn num_products(&self) -> usize {
        self.products.len()
    }
}

#[derive(Default)]
pub struct CatalogBuilder {
    centers: Vec<(String, f64)>,
    products: Vec<(String, String, f64)>,
}

impl CatalogBuilder {
    pub fn add_center(&mut self, external_id: impl Into<String>, distance: f64) -> &mut Self {
        self.centers.push((external_id.into(), distance));
        self
    }

    pub fn add_product(
        &mut self,
        external_id: impl Into<String>,
        center_id: impl Into<String>,
        unit_weight: f64,
    ) -> &mut Self {
        self.products
            .push((external_id.into(), center_id.into(), unit_weight));
        self
    }

    pub fn build(self) -> Result<Catalog, CatalogError> {
        if self.centers.is_empty() {
            return Err(CatalogError::NoCenters);
        }

        let mut center_ids: FxHashMap<String, CenterIdx> = FxHashMap::default();
        let mut centers = Vec::with_capacity(self.centers.len());
        for (index, (external_id, distance)) in CenterIdx::enumerate(self.centers) {
            if !(distance.is_finite() && distance > 0.0) {
                return Err(CatalogError::InvalidDistance {
                    center: external_id,
                    distance,
                });
            }

            if center_ids.insert(external_id.clone(), index).is_some() {
                return Err(CatalogError::DuplicateCenter(external_id));
            }

            centers.push(Center::new(external_id, Distance::new(distance)));
        }

        let mut seen_products: FxHashSet<&str> = FxHashSet::default();
        let mut products = Vec::with_capacity(self.products.len());
        for (external_id, center, weight) in &self.products {
            let Some(&center_id) = center_ids.get(center) else {
                return Err(CatalogError::UnknownCenter {
                    product: external_id.clone(),
                    center: center.clone(),
                });
            };

            if !(weight.is_finite() && *weight > 0.0) {
                return Err(CatalogError::InvalidWeight {
                    product: external_id.clone(),
                    weight: *weight,
                });
            }

            if !seen_products.insert(external_id.as_str()) {
                return Err(CatalogError::DuplicateProduct(external_id.clone()));
            }

            products.push(Product::new(
                external_id.clone(),
                center_id,
                Weight::new(*weight),
            ));
        }

        Ok(Catalog::from_parts(centers, products))
    }
}
