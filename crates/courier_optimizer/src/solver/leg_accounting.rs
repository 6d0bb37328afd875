use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// How a route is broken into charged legs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LegAccounting {
    /// One leg per visited center, charged at the center's hub distance. The vehicle keeps
    /// everything it picked up, so the carried weight only grows along the route.
    #[default]
    Cumulative,

    /// Every center is served by its own hub → center → hub trip carrying only that
    /// center's weight. The visiting order has no effect on the cost.
    RoundTrip,
}

impl LegAccounting {
    pub const ALL: [LegAccounting; 2] = [LegAccounting::Cumulative, LegAccounting::RoundTrip];

    pub fn as_str(&self) -> &'static str {
        match self {
            LegAccounting::Cumulative => "cumulative",
            LegAccounting::RoundTrip => "round_trip",
        }
    }
}

impl Display for LegAccounting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for LegAccounting {
    type Err = String;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "cumulative" => Ok(LegAccounting::Cumulative),
            "round_trip" => Ok(LegAccounting::RoundTrip),
            other => Err(format!(
                "Unknown leg accounting '{other}', expected one of: cumulative, round_trip"
            )),
        }
    }
}
