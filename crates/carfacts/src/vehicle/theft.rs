use crate::datasets::{self, TheftRecord};
use serde::Serialize;

/// National average theft rate per 1,000 registered vehicles.
pub const NATIONAL_THEFTS_PER_1000: f64 = 5.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TheftRiskBand {
    VeryLow,
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl TheftRiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    fn from_multiplier(multiplier: f64) -> Self {
        if multiplier > 3.0 {
            Self::VeryHigh
        } else if multiplier > 2.0 {
            Self::High
        } else if multiplier > 1.0 {
            Self::Moderate
        } else if multiplier >= 0.5 {
            Self::Low
        } else {
            Self::VeryLow
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TheftRisk {
    pub thefts_per_1000: f64,
    pub rate_multiplier: f64,
    pub band: TheftRiskBand,
}

pub fn lookup(make: &str, model: &str) -> Option<TheftRisk> {
    datasets::shared().theft.resolve(make, model).map(assess)
}

fn assess(record: &TheftRecord) -> TheftRisk {
    // Rate is computed per 10,000 then scaled down, which fixes the
    // precision at one decimal place of the per-1,000 figure.
    let per_10_000 = record.thefts as f64 / record.registered as f64 * 10_000.0;
    let thefts_per_1000 = per_10_000.round() / 10.0;
    let rate_multiplier = (thefts_per_1000 / NATIONAL_THEFTS_PER_1000 * 100.0).round() / 100.0;

    TheftRisk {
        thefts_per_1000,
        rate_multiplier,
        band: TheftRiskBand::from_multiplier(rate_multiplier),
    }
}
