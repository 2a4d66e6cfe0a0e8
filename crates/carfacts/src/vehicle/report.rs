use super::body;
use super::colours::{self, ColourPopularity};
use super::dimensions::{self, Dimensions};
use super::ev::{self, EvSpecs};
use super::fuel_economy::{self, FuelEconomy};
use super::mot::{self, MotPassRate};
use super::rarity::{self, Rarity};
use super::recalls::{self, RecallNotice};
use super::scoring::{
    calculate_eco_score, estimate_negotiation, EcoInputs, EcoScore, MotReadiness,
    NegotiationEstimate, NegotiationInputs, RepairEstimate,
};
use super::theft::{self, TheftRisk};
use super::tyres::{self, TyreSizes};
use serde::{Deserialize, Serialize};

/// One registration lookup: the make/model pair plus whatever facts the
/// upstream registry produced for this vehicle.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct VehicleQuery {
    pub make: String,
    pub model: String,
    pub manufacture_year: Option<i32>,
    pub engine_cc: Option<u32>,
    pub fuel_type: Option<String>,
    pub co2_g_km: Option<u32>,
    pub euro_status: Option<String>,
    pub combined_mpg: Option<f64>,
    pub ulez_compliant: Option<bool>,
    pub estimated_value: Option<u32>,
    pub advisory_count: Option<u32>,
    pub repair_estimate: Option<RepairEstimate>,
    pub mot_readiness: Option<MotReadiness>,
    pub avg_miles_per_year: Option<u32>,
    pub vehicle_age: Option<u32>,
}

/// Every fact the reference datasets and scorers can produce for one
/// vehicle. Any section can be absent; absence means "no data", never an
/// error.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub theft_risk: Option<TheftRisk>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mot_pass_rate: Option<MotPassRate>,
    pub recalls: Vec<RecallNotice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<ColourPopularity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ev_specs: Option<EvSpecs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tyres: Option<TyreSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<Dimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuel_economy: Option<FuelEconomy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eco_score: Option<EcoScore>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub negotiation: Option<NegotiationEstimate>,
}

/// Joins every adapter and both scorers for a single query. When the
/// caller has no combined MPG figure, the fuel economy match (if any)
/// feeds the eco score instead.
pub fn build(query: &VehicleQuery) -> VehicleReport {
    let make = query.make.as_str();
    let model = query.model.as_str();

    let fuel_economy = fuel_economy::lookup(make, model, query.engine_cc, query.fuel_type.as_deref());

    let eco_inputs = EcoInputs {
        co2_g_km: query.co2_g_km,
        euro_status: query.euro_status.clone(),
        fuel_type: query.fuel_type.clone(),
        combined_mpg: query
            .combined_mpg
            .or_else(|| fuel_economy.as_ref().map(|economy| economy.combined_mpg)),
        ulez_compliant: query.ulez_compliant,
    };

    let negotiation_inputs = NegotiationInputs {
        estimated_value: query.estimated_value.unwrap_or(0),
        advisory_count: query.advisory_count.unwrap_or(0),
        repair_estimate: query.repair_estimate,
        mot_readiness: query.mot_readiness,
        avg_miles_per_year: query.avg_miles_per_year,
        vehicle_age: query.vehicle_age,
    };

    VehicleReport {
        rarity: rarity::lookup(make, model),
        theft_risk: theft::lookup(make, model),
        mot_pass_rate: mot::lookup(make, model),
        recalls: recalls::lookup(make, model, query.manufacture_year),
        body_type: body::lookup(make, model),
        colour: colours::lookup(make, model),
        ev_specs: query
            .fuel_type
            .as_deref()
            .and_then(|fuel| ev::lookup(make, model, fuel)),
        tyres: tyres::lookup(make, model),
        dimensions: dimensions::lookup(make, model),
        eco_score: calculate_eco_score(&eco_inputs),
        negotiation: estimate_negotiation(&negotiation_inputs),
        fuel_economy,
    }
}
