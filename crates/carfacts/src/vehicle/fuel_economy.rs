use crate::datasets::{self, FuelEconomyEntry};
use crate::lookup::{canonical_make, normalize};
use serde::Serialize;

/// Annual mileage assumed when estimating running costs.
pub const ASSUMED_ANNUAL_MILES: f64 = 8_000.0;
/// Litres in an imperial gallon.
const LITRES_PER_GALLON: f64 = 4.546;
/// Pump prices in pence per litre.
const DIESEL_PENCE_PER_LITRE: f64 = 150.0;
const PETROL_PENCE_PER_LITRE: f64 = 143.0;
const DEFAULT_PENCE_PER_LITRE: f64 = 145.0;

/// Which tier of the economy match produced the figure. Engine-exact is
/// the most trustworthy; model-only means the fuel type was unknown and
/// the first engine variant for the model was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum EconomyMatch {
    EngineExact,
    ModelFuel,
    ModelOnly,
}

#[derive(Debug, Clone, Serialize)]
pub struct FuelEconomy {
    pub combined_mpg: f64,
    pub fuel_type: String,
    pub engine_cc: u32,
    pub estimated_annual_cost: u32,
    pub match_type: EconomyMatch,
}

/// Resolves an economy figure through three tiers of decreasing
/// specificity: exact make/model/engine/fuel, then make plus fuzzy model
/// plus fuel, then make plus fuzzy model alone. The economy dataset
/// carries one row per engine variant, so the shared keyed matcher does
/// not fit here.
pub fn lookup(
    make: &str,
    model: &str,
    engine_cc: Option<u32>,
    fuel_type: Option<&str>,
) -> Option<FuelEconomy> {
    select(&datasets::shared().fuel_economy, make, model, engine_cc, fuel_type)
}

fn select(
    entries: &[FuelEconomyEntry],
    make: &str,
    model: &str,
    engine_cc: Option<u32>,
    fuel_type: Option<&str>,
) -> Option<FuelEconomy> {
    let make = normalize(make);
    let model = normalize(model);
    if make.is_empty() || model.is_empty() {
        return None;
    }

    let alias = canonical_make(&make);
    let candidates: Vec<&str> = std::iter::once(make.as_str()).chain(alias).collect();
    let fuel = fuel_type.map(normalize).filter(|value| !value.is_empty());

    if let (Some(cc), Some(fuel)) = (engine_cc, fuel.as_deref()) {
        for candidate in &candidates {
            if let Some(entry) = entries.iter().find(|entry| {
                entry.make == *candidate
                    && entry.model == model
                    && entry.engine_cc == cc
                    && entry.fuel_type == fuel
            }) {
                return Some(shape(entry, EconomyMatch::EngineExact));
            }
        }
    }

    if let Some(fuel) = fuel.as_deref() {
        for candidate in &candidates {
            if let Some(entry) = entries.iter().find(|entry| {
                entry.make == *candidate
                    && models_overlap(&entry.model, &model)
                    && entry.fuel_type == fuel
            }) {
                return Some(shape(entry, EconomyMatch::ModelFuel));
            }
        }
    }

    for candidate in &candidates {
        if let Some(entry) = entries
            .iter()
            .find(|entry| entry.make == *candidate && models_overlap(&entry.model, &model))
        {
            return Some(shape(entry, EconomyMatch::ModelOnly));
        }
    }

    None
}

fn models_overlap(entry_model: &str, query_model: &str) -> bool {
    entry_model.contains(query_model) || query_model.contains(entry_model)
}

fn shape(entry: &FuelEconomyEntry, match_type: EconomyMatch) -> FuelEconomy {
    FuelEconomy {
        combined_mpg: entry.combined_mpg,
        fuel_type: entry.fuel_type.clone(),
        engine_cc: entry.engine_cc,
        estimated_annual_cost: annual_cost(entry.combined_mpg, &entry.fuel_type),
        match_type,
    }
}

fn annual_cost(combined_mpg: f64, fuel_type: &str) -> u32 {
    if combined_mpg <= 0.0 {
        return 0;
    }
    let litres = ASSUMED_ANNUAL_MILES / combined_mpg * LITRES_PER_GALLON;
    let pence_per_litre = if fuel_type.contains("DIESEL") {
        DIESEL_PENCE_PER_LITRE
    } else if fuel_type.contains("PETROL") {
        PETROL_PENCE_PER_LITRE
    } else {
        DEFAULT_PENCE_PER_LITRE
    };
    (litres * pence_per_litre / 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fifty_mpg_of_petrol_costs_1040_a_year() {
        assert_eq!(annual_cost(50.0, "PETROL"), 1_040);
    }

    #[test]
    fn diesel_and_unpriced_fuels_use_their_own_rates() {
        // 8000/50 * 4.546 = 727.36 litres.
        assert_eq!(annual_cost(50.0, "DIESEL"), 1_091);
        assert_eq!(annual_cost(50.0, "HYBRID"), 1_055);
    }

    #[test]
    fn engine_and_fuel_pin_the_exact_variant() {
        let golf = lookup("Volkswagen", "Golf", Some(1968), Some("Diesel"))
            .expect("diesel golf in dataset");
        assert_eq!(golf.match_type, EconomyMatch::EngineExact);
        assert_eq!(golf.combined_mpg, 62.8);
    }

    #[test]
    fn fuel_without_engine_takes_the_first_variant_for_that_fuel() {
        let golf = lookup("VW", "Golf", None, Some("Petrol")).expect("petrol golf in dataset");
        assert_eq!(golf.match_type, EconomyMatch::ModelFuel);
        assert_eq!(golf.combined_mpg, 49.6);
    }

    #[test]
    fn model_only_matches_fuzzily_in_insertion_order() {
        let fiesta = lookup("Ford", "Fiesta ST", None, None).expect("fiesta in dataset");
        assert_eq!(fiesta.match_type, EconomyMatch::ModelOnly);
        assert_eq!(fiesta.combined_mpg, 54.3);
    }

    #[test]
    fn unknown_engine_falls_through_to_the_fuel_tier() {
        let golf = lookup("Volkswagen", "Golf", Some(2500), Some("Diesel"))
            .expect("diesel golf still matches by fuel");
        assert_eq!(golf.match_type, EconomyMatch::ModelFuel);
    }

    #[test]
    fn blank_components_return_nothing() {
        assert!(lookup("", "Golf", None, None).is_none());
        assert!(lookup("Volkswagen", "", None, None).is_none());
    }
}
