use carfacts::datasets;
use carfacts::error::AppError;
use carfacts::vehicle::scoring::{MotReadiness, RepairEstimate};
use carfacts::vehicle::{build_report, VehicleQuery, VehicleReport};
use clap::Args;

#[derive(Args, Debug)]
pub(crate) struct VehicleReportArgs {
    /// Vehicle make as reported by the registry (e.g. "VW")
    #[arg(long)]
    pub(crate) make: String,
    /// Vehicle model as reported by the registry (e.g. "Golf GTI")
    #[arg(long)]
    pub(crate) model: String,
    /// Year of manufacture, used to filter recall build windows
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Engine capacity in cc
    #[arg(long)]
    pub(crate) engine_cc: Option<u32>,
    /// Fuel type string (e.g. "Petrol", "Diesel", "Electric")
    #[arg(long)]
    pub(crate) fuel_type: Option<String>,
    /// CO2 emissions in g/km
    #[arg(long)]
    pub(crate) co2: Option<u32>,
    /// Euro emissions status string (e.g. "EURO 6D")
    #[arg(long)]
    pub(crate) euro_status: Option<String>,
    /// Combined fuel economy in MPG, overriding the dataset figure
    #[arg(long)]
    pub(crate) mpg: Option<f64>,
    /// Whether the vehicle is ULEZ compliant
    #[arg(long)]
    pub(crate) ulez: Option<bool>,
    /// Estimated market value in pounds
    #[arg(long)]
    pub(crate) value: Option<u32>,
    /// Number of advisories on the latest MOT
    #[arg(long)]
    pub(crate) advisories: Option<u32>,
    /// Low end of the outstanding repair estimate in pounds
    #[arg(long)]
    pub(crate) repair_low: Option<u32>,
    /// High end of the outstanding repair estimate in pounds
    #[arg(long)]
    pub(crate) repair_high: Option<u32>,
    /// MOT readiness tier: green, amber, or red
    #[arg(long, value_parser = parse_readiness)]
    pub(crate) readiness: Option<MotReadiness>,
    /// Average miles driven per year
    #[arg(long)]
    pub(crate) miles_per_year: Option<u32>,
    /// Vehicle age in years
    #[arg(long)]
    pub(crate) age: Option<u32>,
}

fn parse_readiness(raw: &str) -> Result<MotReadiness, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "green" => Ok(MotReadiness::Green),
        "amber" => Ok(MotReadiness::Amber),
        "red" => Ok(MotReadiness::Red),
        other => Err(format!("'{other}' is not green, amber, or red")),
    }
}

pub(crate) fn run_vehicle_report(args: VehicleReportArgs) -> Result<(), AppError> {
    datasets::init()?;

    let repair_estimate = match (args.repair_low, args.repair_high) {
        (Some(low), Some(high)) => Some(RepairEstimate { low, high }),
        (Some(only), None) | (None, Some(only)) => Some(RepairEstimate {
            low: only,
            high: only,
        }),
        (None, None) => None,
    };

    let query = VehicleQuery {
        make: args.make.clone(),
        model: args.model.clone(),
        manufacture_year: args.year,
        engine_cc: args.engine_cc,
        fuel_type: args.fuel_type,
        co2_g_km: args.co2,
        euro_status: args.euro_status,
        combined_mpg: args.mpg,
        ulez_compliant: args.ulez,
        estimated_value: args.value,
        advisory_count: args.advisories,
        repair_estimate,
        mot_readiness: args.readiness,
        avg_miles_per_year: args.miles_per_year,
        vehicle_age: args.age,
    };

    let report = build_report(&query);
    render_report(&args.make, &args.model, &report);
    Ok(())
}

fn render_report(make: &str, model: &str, report: &VehicleReport) {
    println!("Vehicle report for {make} {model}");

    match &report.rarity {
        Some(rarity) => println!(
            "\nRarity: {} ({} licensed, {} SORN, {} total)",
            rarity.band.label(),
            rarity.licensed,
            rarity.sorn,
            rarity.total
        ),
        None => println!("\nRarity: no data"),
    }

    match &report.theft_risk {
        Some(risk) => println!(
            "Theft risk: {} ({:.1} thefts per 1,000, {:.2}x the national average)",
            risk.band.label(),
            risk.thefts_per_1000,
            risk.rate_multiplier
        ),
        None => println!("Theft risk: no data"),
    }

    match &report.mot_pass_rate {
        Some(rate) => println!(
            "MOT pass rate: {:.1}% ({} the {:.0}% national average)",
            rate.pass_rate,
            if rate.above_average { "at or above" } else { "below" },
            rate.national_average
        ),
        None => println!("MOT pass rate: no data"),
    }

    match report.body_type.as_deref() {
        Some(body) => println!("Body type: {body}"),
        None => println!("Body type: no data"),
    }

    if let Some(colour) = &report.colour {
        println!(
            "Most popular colour: {} (rank {}{})",
            colour.colour,
            colour.rank,
            if colour.top_five { ", top five" } else { "" }
        );
    }

    if let Some(tyres) = &report.tyres {
        println!("Tyres: front {} | rear {}", tyres.front, tyres.rear);
    }

    if let Some(dimensions) = &report.dimensions {
        println!(
            "Dimensions: {}mm long, {}mm wide, {}mm tall",
            dimensions.length_mm, dimensions.width_mm, dimensions.height_mm
        );
    }

    if let Some(ev) = &report.ev_specs {
        println!(
            "EV: {:.1} kWh battery, {} mile range, {} kW max charge",
            ev.battery_kwh, ev.range_miles, ev.max_charge_kw
        );
    }

    if let Some(economy) = &report.fuel_economy {
        println!(
            "Fuel economy: {:.1} mpg combined, about {} pounds per year",
            economy.combined_mpg, economy.estimated_annual_cost
        );
    }

    if report.recalls.is_empty() {
        println!("\nRecalls: none on record");
    } else {
        println!("\nRecalls ({})", report.recalls.len());
        for recall in &report.recalls {
            println!("- [{}] {}", recall.launch_date, recall.concern);
            println!("  Remedy: {}", recall.remedy);
        }
    }

    if let Some(eco) = &report.eco_score {
        println!(
            "\nEco score: {:?} ({}) - {} out of 100",
            eco.grade, eco.label, eco.score
        );
        for factor in &eco.factors {
            println!("  - {}: {} (weight {})", factor.name, factor.score, factor.weight);
        }
    }

    if let Some(negotiation) = &report.negotiation {
        println!(
            "\nNegotiation guide: {:.1}% to {:.1}% ({} to {} pounds), confidence {}",
            negotiation.suggested_discount_percent.low,
            negotiation.suggested_discount_percent.high,
            negotiation.estimated_saving_low,
            negotiation.estimated_saving_high,
            negotiation.confidence.label()
        );
        for reason in &negotiation.reasons {
            println!("  - {reason}");
        }
    }
}
