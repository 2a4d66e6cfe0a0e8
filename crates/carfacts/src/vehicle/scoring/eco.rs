use serde::{Deserialize, Serialize};

const CO2_WEIGHT: u32 = 30;
const EURO_WEIGHT: u32 = 25;
const FUEL_TYPE_WEIGHT: u32 = 20;
const ECONOMY_WEIGHT: u32 = 15;
const ULEZ_WEIGHT: u32 = 10;

/// Signals feeding the eco score. Every field is optional; the score is
/// a weighted average over whichever signals are present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EcoInputs {
    pub co2_g_km: Option<u32>,
    pub euro_status: Option<String>,
    pub fuel_type: Option<String>,
    pub combined_mpg: Option<f64>,
    pub ulez_compliant: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EcoGrade {
    A,
    B,
    C,
    D,
    E,
    F,
}

impl EcoGrade {
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "Very Clean",
            Self::B => "Clean",
            Self::C => "Moderate Emissions",
            Self::D => "Above Average Emissions",
            Self::E => "High Emissions",
            Self::F => "Very High Emissions",
        }
    }

    fn from_score(score: u8) -> Self {
        match score {
            85..=u8::MAX => Self::A,
            70..=84 => Self::B,
            55..=69 => Self::C,
            40..=54 => Self::D,
            25..=39 => Self::E,
            _ => Self::F,
        }
    }
}

/// Discrete contribution to the eco score, kept so callers can show how
/// the grade was reached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EcoFactor {
    pub name: &'static str,
    pub score: u8,
    pub weight: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct EcoScore {
    pub grade: EcoGrade,
    pub score: u8,
    pub label: &'static str,
    pub factors: Vec<EcoFactor>,
}

/// Weighted-average emissions grade. At least one of CO2, Euro status,
/// or fuel type must be supplied; factors that are absent (or supplied
/// but unusable, like a Euro string with no numeral) drop out of both
/// the numerator and the denominator.
pub fn calculate_eco_score(inputs: &EcoInputs) -> Option<EcoScore> {
    if inputs.co2_g_km.is_none() && inputs.euro_status.is_none() && inputs.fuel_type.is_none() {
        return None;
    }

    let mut factors = Vec::new();

    if let Some(co2) = inputs.co2_g_km {
        factors.push(EcoFactor {
            name: "CO2 emissions",
            score: co2_sub_score(co2),
            weight: CO2_WEIGHT,
        });
    }

    if let Some(score) = inputs.euro_status.as_deref().and_then(euro_sub_score) {
        factors.push(EcoFactor {
            name: "Euro standard",
            score,
            weight: EURO_WEIGHT,
        });
    }

    if let Some(fuel) = inputs.fuel_type.as_deref() {
        factors.push(EcoFactor {
            name: "Fuel type",
            score: fuel_sub_score(fuel),
            weight: FUEL_TYPE_WEIGHT,
        });
    }

    if let Some(mpg) = inputs.combined_mpg.filter(|&mpg| mpg > 0.0) {
        factors.push(EcoFactor {
            name: "Fuel economy",
            score: economy_sub_score(mpg),
            weight: ECONOMY_WEIGHT,
        });
    }

    if let Some(compliant) = inputs.ulez_compliant {
        factors.push(EcoFactor {
            name: "ULEZ compliance",
            score: if compliant { 100 } else { 0 },
            weight: ULEZ_WEIGHT,
        });
    }

    let total_weight: u32 = factors.iter().map(|factor| factor.weight).sum();
    if total_weight == 0 {
        return None;
    }

    let weighted_sum: f64 = factors
        .iter()
        .map(|factor| factor.score as f64 * factor.weight as f64)
        .sum();
    let score = (weighted_sum / total_weight as f64).round() as u8;
    let grade = EcoGrade::from_score(score);

    Some(EcoScore {
        grade,
        score,
        label: grade.label(),
        factors,
    })
}

fn co2_sub_score(co2_g_km: u32) -> u8 {
    match co2_g_km {
        0..=99 => 100,
        100..=150 => 75,
        151..=200 => 50,
        _ => 25,
    }
}

/// Numeral following "EURO" in the status string, if any.
fn euro_numeral(status: &str) -> Option<u32> {
    let upper = status.to_ascii_uppercase();
    let rest = &upper[upper.find("EURO")? + 4..];
    let digits: String = rest
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

fn euro_sub_score(status: &str) -> Option<u8> {
    let numeral = euro_numeral(status)?;
    let upper = status.to_ascii_uppercase();
    // "6D" also covers the 6DG spelling.
    let score = if upper.contains("6D") {
        100
    } else if numeral >= 6 {
        80
    } else if numeral == 5 {
        50
    } else if numeral == 4 {
        25
    } else {
        10
    };
    Some(score)
}

fn fuel_sub_score(fuel_type: &str) -> u8 {
    let fuel = fuel_type.to_ascii_lowercase();
    if fuel.contains("electric") {
        100
    } else if fuel.contains("hybrid") {
        80
    } else if fuel.contains("petrol") || fuel.contains("gas") {
        50
    } else if fuel.contains("diesel") {
        40
    } else {
        // Unrecognized fuels score as petrol equivalents.
        50
    }
}

fn economy_sub_score(combined_mpg: f64) -> u8 {
    if combined_mpg >= 60.0 {
        100
    } else if combined_mpg >= 45.0 {
        75
    } else if combined_mpg >= 35.0 {
        50
    } else {
        25
    }
}
