use thiserror::Error;

use crate::problem::{catalog::Catalog, product::ProductIdx};

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid product: {0}")]
    InvalidProduct(String),

    #[error("Order is empty")]
    EmptyOrder,

    #[error("Order is not a valid mapping of product to quantity: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderLine {
    pub product_id: ProductIdx,
    pub quantity: u64,
}

/// A validated order: every line refers to a catalog product and has a strictly positive
/// quantity. Lines for the same product are merged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates raw `(product, quantity)` pairs against the catalog.
    ///
    /// An empty input is rejected, as is any product absent from the catalog, whatever its
    /// quantity. Zero and negative quantities are dropped.
    pub fn from_quantities<I, K>(catalog: &Catalog, quantities: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (K, i64)>,
        K: AsRef<str>,
    {
        let mut order = Order::new();
        let mut is_empty = true;

        for (product, quantity) in quantities {
            is_empty = false;

            let product = product.as_ref();
            let product_id = catalog
                .product_idx(product)
                .ok_or_else(|| ValidationError::InvalidProduct(product.to_owned()))?;

            if quantity > 0 {
                order.add_line(product_id, quantity as u64);
            }
        }

        if is_empty {
            return Err(ValidationError::EmptyOrder);
        }

        Ok(order)
    }

    pub fn add_line(&mut self, product_id: ProductIdx, quantity: u64) -> &mut Self {
        if quantity == 0 {
            return self;
        }

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            line.quantity = line.quantity.saturating_add(quantity);
        } else {
            self.lines.push(OrderLine {
                product_id,
                quantity,
            });
        }

        self
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn quantity(&self, product_id: ProductIdx) -> u64 {
        self.lines
            .iter()
            .find(|line| line.product_id == product_id)
            .map_or(0, |line| line.quantity)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
