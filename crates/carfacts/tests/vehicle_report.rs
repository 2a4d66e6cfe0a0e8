use carfacts::vehicle::fuel_economy::EconomyMatch;
use carfacts::vehicle::rarity::RarityBand;
use carfacts::vehicle::scoring::{MotReadiness, RepairEstimate};
use carfacts::vehicle::{build_report, VehicleQuery};

fn diesel_golf_query() -> VehicleQuery {
    VehicleQuery {
        make: "VW".to_string(),
        model: "Golf".to_string(),
        manufacture_year: Some(2020),
        engine_cc: Some(1968),
        fuel_type: Some("Diesel".to_string()),
        co2_g_km: Some(118),
        euro_status: Some("EURO 6".to_string()),
        ulez_compliant: Some(true),
        estimated_value: Some(14_500),
        advisory_count: Some(3),
        repair_estimate: Some(RepairEstimate {
            low: 250,
            high: 450,
        }),
        mot_readiness: Some(MotReadiness::Amber),
        avg_miles_per_year: Some(9_000),
        vehicle_age: Some(6),
        ..VehicleQuery::default()
    }
}

#[test]
fn full_report_joins_every_reference_domain() {
    let report = build_report(&diesel_golf_query());

    let rarity = report.rarity.expect("golf rarity present");
    assert_eq!(rarity.band, RarityBand::VeryCommon);

    assert!(report.theft_risk.is_some());
    assert!(report.mot_pass_rate.expect("pass rate present").above_average);
    assert_eq!(report.body_type.as_deref(), Some("Hatchback"));
    assert!(report.colour.expect("colour present").top_five);
    assert!(report.tyres.is_some());
    assert!(report.dimensions.is_some());

    // Diesel drivetrain: EV specs must not be consulted.
    assert!(report.ev_specs.is_none());

    let economy = report.fuel_economy.expect("economy present");
    assert_eq!(economy.match_type, EconomyMatch::EngineExact);
    assert_eq!(economy.combined_mpg, 62.8);

    // Built in 2020, inside the Golf campaign's 2019-2020 window.
    assert_eq!(report.recalls.len(), 1);
}

#[test]
fn eco_and_negotiation_sections_ride_on_the_same_query() {
    let report = build_report(&diesel_golf_query());

    let eco = report.eco_score.expect("eco score present");
    // CO2 75, Euro 80, Diesel 40, economy 100 (62.8 mpg), ULEZ 100:
    // (75*30 + 80*25 + 40*20 + 100*15 + 100*10) / 100 = 75.5 -> 76.
    assert_eq!(eco.score, 76);

    let negotiation = report.negotiation.expect("negotiation present");
    // Repair midpoint 350 on 14500 is 2.4%; age 6 adds 1/2.
    assert!(negotiation.suggested_discount_percent.low > 0.0);
    assert_eq!(negotiation.reasons.len(), 2);
}

#[test]
fn manufacture_year_outside_the_build_window_drops_the_recall() {
    let mut query = diesel_golf_query();
    query.manufacture_year = Some(2022);
    let report = build_report(&query);
    assert!(report.recalls.is_empty());
}

#[test]
fn electric_query_surfaces_ev_specs_instead_of_fuel_costs() {
    let query = VehicleQuery {
        make: "Tesla".to_string(),
        model: "Model 3".to_string(),
        fuel_type: Some("Electric".to_string()),
        co2_g_km: Some(0),
        ..VehicleQuery::default()
    };
    let report = build_report(&query);

    let ev = report.ev_specs.expect("model 3 specs present");
    assert_eq!(ev.range_miles, 305);
    assert!(report.fuel_economy.is_none());

    let eco = report.eco_score.expect("eco score present");
    assert_eq!(eco.grade.label(), "Very Clean");
}
