use crate::datasets::{self, EvSpecRecord};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct EvSpecs {
    pub battery_kwh: f64,
    pub range_miles: u32,
    pub max_charge_kw: u32,
}

/// Battery and range figures, consulted only for electrified drivetrains.
/// A combustion fuel type returns nothing without touching the table.
pub fn lookup(make: &str, model: &str, fuel_type: &str) -> Option<EvSpecs> {
    if !is_electrified(fuel_type) {
        return None;
    }
    datasets::shared().ev_specs.resolve(make, model).map(shape)
}

fn is_electrified(fuel_type: &str) -> bool {
    let fuel = fuel_type.to_ascii_lowercase();
    fuel.contains("electric") || fuel == "electricity" || fuel.contains("hybrid")
}

fn shape(record: &EvSpecRecord) -> EvSpecs {
    EvSpecs {
        battery_kwh: record.battery_kwh,
        range_miles: record.range_miles,
        max_charge_kw: record.max_charge_kw,
    }
}
