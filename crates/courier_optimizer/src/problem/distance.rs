use std::{
    cmp::Ordering,
    ops::Mul,
};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Distance between a center and the hub, in the catalog's distance unit.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct Distance(f64);

impl Distance {
    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }
}

impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl From<f64> for Distance {
    fn from(value: f64) -> Self {
        Distance::new(value)
    }
}

impl Mul<f64> for Distance {
    type Output = Distance;

    fn mul(self, factor: f64) -> Distance {
        Distance(self.0 * factor)
    }
}

impl std::fmt::Display for Distance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
