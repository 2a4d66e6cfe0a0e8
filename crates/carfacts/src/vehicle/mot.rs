use crate::datasets::{self, PassRateRecord};
use serde::Serialize;

/// National average MOT pass rate across all makes and models.
pub const NATIONAL_AVERAGE_PASS_RATE: f64 = 72.0;

#[derive(Debug, Clone, Serialize)]
pub struct MotPassRate {
    pub pass_rate: f64,
    pub national_average: f64,
    pub above_average: bool,
}

pub fn lookup(make: &str, model: &str) -> Option<MotPassRate> {
    datasets::shared()
        .mot_pass_rates
        .resolve(make, model)
        .map(assess)
}

fn assess(record: &PassRateRecord) -> MotPassRate {
    MotPassRate {
        pass_rate: record.pass_rate,
        national_average: NATIONAL_AVERAGE_PASS_RATE,
        above_average: record.pass_rate >= NATIONAL_AVERAGE_PASS_RATE,
    }
}
