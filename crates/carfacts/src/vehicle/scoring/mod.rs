mod eco;
mod negotiation;

pub use eco::{calculate_eco_score, EcoFactor, EcoGrade, EcoInputs, EcoScore};
pub use negotiation::{
    estimate_negotiation, Confidence, DiscountRange, NegotiationEstimate, NegotiationInputs,
};

use serde::{Deserialize, Serialize};

/// Traffic-light readiness tier derived from a vehicle's MOT history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MotReadiness {
    Green,
    Amber,
    Red,
}

impl MotReadiness {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Green => "Green",
            Self::Amber => "Amber",
            Self::Red => "Red",
        }
    }
}

/// Estimated cost bracket for outstanding repairs, in pounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepairEstimate {
    pub low: u32,
    pub high: u32,
}

impl RepairEstimate {
    pub(crate) fn midpoint(self) -> f64 {
        (self.low as f64 + self.high as f64) / 2.0
    }
}
