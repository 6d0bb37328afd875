use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::problem::weight::Weight;

/// Step function from carried weight to cost per unit of distance.
///
/// Up to `base_weight` the rate is `base_rate`. Every started block of `step_weight`
/// above it adds `step_surcharge`, a partially filled block is charged in full.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeightTiers {
    pub base_weight: f64,
    pub base_rate: f64,
    pub step_weight: f64,
    pub step_surcharge: f64,
}

impl Default for WeightTiers {
    fn default() -> Self {
        Self {
            base_weight: 5.0,
            base_rate: 10.0,
            step_weight: 5.0,
            step_surcharge: 8.0,
        }
    }
}

impl WeightTiers {
    #[inline]
    pub fn rate(&self, weight: Weight) -> f64 {
        let weight = weight.value();
        if weight <= self.base_weight {
            return self.base_rate;
        }

        let blocks = ((weight - self.base_weight) / self.step_weight).ceil();
        self.base_rate + self.step_surcharge * blocks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rate(weight: f64) -> f64 {
        WeightTiers::default().rate(Weight::new(weight))
    }

    #[test]
    fn test_base_tier() {
        assert_eq!(rate(0.5), 10.0);
        assert_eq!(rate(1.0), 10.0);
        assert_eq!(rate(5.0), 10.0);
    }

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(rate(5.0001), 18.0);
        assert_eq!(rate(6.0), 18.0);
        assert_eq!(rate(10.0), 18.0);
        assert_eq!(rate(10.0001), 26.0);
        assert_eq!(rate(11.0), 26.0);
        assert_eq!(rate(15.0), 26.0);
        assert_eq!(rate(16.0), 34.0);
    }

    #[test]
    fn test_heavy_loads() {
        // 25 + 12 + 15 = 52 → 10 blocks above the base
        assert_eq!(rate(52.0), 10.0 + 8.0 * 10.0);
        assert_eq!(rate(55.0), 10.0 + 8.0 * 10.0);
        assert_eq!(rate(55.5), 10.0 + 8.0 * 11.0);
    }

    #[test]
    fn test_custom_tiers() {
        let tiers = WeightTiers {
            base_weight: 10.0,
            base_rate: 1.0,
            step_weight: 2.0,
            step_surcharge: 0.5,
        };

        assert_eq!(tiers.rate(Weight::new(10.0)), 1.0);
        assert_eq!(tiers.rate(Weight::new(11.0)), 1.5);
        assert_eq!(tiers.rate(Weight::new(14.5)), 2.5);
    }
}
