use super::{MotReadiness, RepairEstimate};
use serde::{Deserialize, Serialize};

/// Discount percentages never exceed this many points.
const MAX_DISCOUNT_PERCENT: f64 = 25.0;
/// Repair costs above this share of the asking price stop adding leverage.
const REPAIR_PERCENT_CAP: f64 = 15.0;
/// Annual mileage above this is treated as heavy use.
const HIGH_MILEAGE_PER_YEAR: u32 = 12_000;

/// Everything the estimator considers. A valuation and at least one
/// advisory are mandatory; the rest widen or narrow the range.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NegotiationInputs {
    pub estimated_value: u32,
    pub advisory_count: u32,
    pub repair_estimate: Option<RepairEstimate>,
    pub mot_readiness: Option<MotReadiness>,
    pub avg_miles_per_year: Option<u32>,
    pub vehicle_age: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountRange {
    pub low: f64,
    pub high: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    Low,
    Medium,
    High,
}

impl Confidence {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NegotiationEstimate {
    pub suggested_discount_percent: DiscountRange,
    pub estimated_saving_low: u32,
    pub estimated_saving_high: u32,
    pub reasons: Vec<String>,
    pub confidence: Confidence,
}

/// Additive discount heuristic. Each applicable rule widens the range by
/// a fixed low/high contribution and records a reason; the rules are
/// independent and evaluated in a fixed order so the reason list is
/// stable.
pub fn estimate_negotiation(inputs: &NegotiationInputs) -> Option<NegotiationEstimate> {
    if inputs.estimated_value == 0 || inputs.advisory_count == 0 {
        return None;
    }

    let mut low = 0.0_f64;
    let mut high = 0.0_f64;
    let mut reasons = Vec::new();

    if let Some(repair) = inputs.repair_estimate {
        let repair_percent =
            (repair.midpoint() / inputs.estimated_value as f64 * 100.0).min(REPAIR_PERCENT_CAP);
        if repair_percent > 0.5 {
            low += (repair_percent * 0.6).max(1.0);
            high += repair_percent;
            reasons.push(format!(
                "Outstanding repairs estimated at {repair_percent:.1}% of the asking price"
            ));
        }
    }

    if let Some(miles) = inputs.avg_miles_per_year {
        if miles > HIGH_MILEAGE_PER_YEAR {
            low += 2.0;
            high += 3.0;
            reasons.push(format!(
                "Annual mileage of {miles} is above the typical {HIGH_MILEAGE_PER_YEAR}"
            ));
        }
    }

    if let Some(age) = inputs.vehicle_age {
        if age >= 5 {
            low += 1.0;
            high += 2.0;
            reasons.push(format!("Vehicle is {age} years old"));
        }
    }

    if inputs.mot_readiness == Some(MotReadiness::Red) {
        low += 2.0;
        high += 3.0;
        reasons.push("MOT readiness is flagged red".to_string());
    }

    let mut low = round_tenth(low.clamp(0.0, MAX_DISCOUNT_PERCENT));
    let mut high = round_tenth(high.clamp(0.0, MAX_DISCOUNT_PERCENT));
    if low > high {
        std::mem::swap(&mut low, &mut high);
    }
    if high == 0.0 {
        return None;
    }

    Some(NegotiationEstimate {
        suggested_discount_percent: DiscountRange { low, high },
        estimated_saving_low: saving(inputs.estimated_value, low),
        estimated_saving_high: saving(inputs.estimated_value, high),
        reasons,
        confidence: confidence(inputs),
    })
}

fn confidence(inputs: &NegotiationInputs) -> Confidence {
    let signals = [
        inputs.repair_estimate.is_some(),
        inputs.avg_miles_per_year.is_some(),
        inputs.vehicle_age.is_some_and(|age| age >= 3),
    ]
    .iter()
    .filter(|&&present| present)
    .count();

    match signals {
        3.. => Confidence::High,
        2 => Confidence::Medium,
        _ => Confidence::Low,
    }
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn saving(estimated_value: u32, percent: f64) -> u32 {
    (estimated_value as f64 * percent / 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rule_firing_stacks_into_the_worked_range() {
        let inputs = NegotiationInputs {
            estimated_value: 10_000,
            advisory_count: 2,
            repair_estimate: Some(RepairEstimate {
                low: 200,
                high: 400,
            }),
            mot_readiness: Some(MotReadiness::Red),
            avg_miles_per_year: Some(15_000),
            vehicle_age: Some(6),
        };
        let estimate = estimate_negotiation(&inputs).expect("estimate produced");

        // Repair 3% -> 1.8/3, mileage +2/+3, age +1/+2, red +2/+3.
        assert_eq!(estimate.suggested_discount_percent.low, 6.8);
        assert_eq!(estimate.suggested_discount_percent.high, 11.0);
        assert_eq!(estimate.estimated_saving_low, 680);
        assert_eq!(estimate.estimated_saving_high, 1_100);
        assert_eq!(estimate.reasons.len(), 4);
        assert_eq!(estimate.confidence, Confidence::High);
    }

    #[test]
    fn valuation_and_advisories_are_both_mandatory() {
        let mut inputs = NegotiationInputs {
            estimated_value: 0,
            advisory_count: 2,
            ..NegotiationInputs::default()
        };
        assert!(estimate_negotiation(&inputs).is_none());

        inputs.estimated_value = 10_000;
        inputs.advisory_count = 0;
        assert!(estimate_negotiation(&inputs).is_none());
    }

    #[test]
    fn negligible_repair_share_leaves_nothing_to_negotiate() {
        // 40/10000 = 0.4% which is under the 0.5 threshold; no other rule
        // fires, so the high bound stays at zero.
        let inputs = NegotiationInputs {
            estimated_value: 10_000,
            advisory_count: 1,
            repair_estimate: Some(RepairEstimate { low: 30, high: 50 }),
            ..NegotiationInputs::default()
        };
        assert!(estimate_negotiation(&inputs).is_none());
    }

    #[test]
    fn repair_share_is_capped_before_the_rule_applies() {
        let inputs = NegotiationInputs {
            estimated_value: 1_000,
            advisory_count: 1,
            repair_estimate: Some(RepairEstimate {
                low: 400,
                high: 600,
            }),
            ..NegotiationInputs::default()
        };
        let estimate = estimate_negotiation(&inputs).expect("estimate produced");
        // Midpoint 500 is 50% of the price, capped to 15%.
        assert_eq!(estimate.suggested_discount_percent.high, 15.0);
        assert_eq!(estimate.suggested_discount_percent.low, 9.0);
    }

    #[test]
    fn small_repair_share_still_moves_the_low_bound_by_a_point() {
        let inputs = NegotiationInputs {
            estimated_value: 10_000,
            advisory_count: 1,
            repair_estimate: Some(RepairEstimate {
                low: 60,
                high: 80,
            }),
            ..NegotiationInputs::default()
        };
        let estimate = estimate_negotiation(&inputs).expect("estimate produced");
        // 0.7% * 0.6 = 0.42, lifted to the 1 point minimum. That pushes
        // the low bound past the high bound, so the two swap.
        assert_eq!(estimate.suggested_discount_percent.low, 0.7);
        assert_eq!(estimate.suggested_discount_percent.high, 1.0);
    }

    #[test]
    fn confidence_tracks_how_many_signals_are_present() {
        let two_signals = NegotiationInputs {
            estimated_value: 8_000,
            advisory_count: 1,
            avg_miles_per_year: Some(14_000),
            vehicle_age: Some(4),
            ..NegotiationInputs::default()
        };
        let estimate = estimate_negotiation(&two_signals).expect("estimate produced");
        assert_eq!(estimate.confidence, Confidence::Medium);

        let one_signal = NegotiationInputs {
            estimated_value: 8_000,
            advisory_count: 1,
            avg_miles_per_year: Some(14_000),
            ..NegotiationInputs::default()
        };
        let estimate = estimate_negotiation(&one_signal).expect("estimate produced");
        assert_eq!(estimate.confidence, Confidence::Low);
    }

    #[test]
    fn young_age_counts_toward_confidence_but_not_the_discount() {
        let inputs = NegotiationInputs {
            estimated_value: 8_000,
            advisory_count: 1,
            avg_miles_per_year: Some(14_000),
            vehicle_age: Some(3),
            repair_estimate: Some(RepairEstimate {
                low: 100,
                high: 300,
            }),
            ..NegotiationInputs::default()
        };
        let estimate = estimate_negotiation(&inputs).expect("estimate produced");
        assert_eq!(estimate.confidence, Confidence::High);
        assert!(!estimate
            .reasons
            .iter()
            .any(|reason| reason.contains("years old")));
    }
}
