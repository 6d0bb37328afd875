use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::solver::{leg_accounting::LegAccounting, weight_tiers::WeightTiers};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CostEngineParams {
    #[serde(default)]
    pub weight_tiers: WeightTiers,
    #[serde(default)]
    pub leg_accounting: LegAccounting,
}
