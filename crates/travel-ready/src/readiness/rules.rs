use super::config::ReadinessConfig;
use super::domain::{InvalidDateError, TravelProfile};
use super::views::RiskFactors;
use chrono::NaiveDate;

const HIGH_COMPLEXITY_VISAS: [&str; 3] = ["Student", "Work", "Business"];

/// Day and month distances from the evaluation date, shared by both scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TripHorizon {
    pub days_until_departure: i64,
    pub months_until_passport_expiry: i64,
}

impl TripHorizon {
    pub(crate) fn measure(
        profile: &TravelProfile,
        today: NaiveDate,
    ) -> Result<Self, InvalidDateError> {
        let passport_expiry = profile.passport_expiration_date()?;
        let departure = profile.departure()?;

        Ok(Self {
            days_until_departure: (departure - today).num_days(),
            months_until_passport_expiry: ceil_months((passport_expiry - today).num_days()),
        })
    }
}

/// Whole 30-day months, rounded up.
fn ceil_months(days: i64) -> i64 {
    (days + 29).div_euclid(30)
}

/// Starts from 100 and deducts for passport, departure and visa urgency.
pub(crate) fn deduction_score(horizon: TripHorizon, visa_type: &str) -> u8 {
    let mut score: i32 = 100;

    let months = horizon.months_until_passport_expiry;
    if months < 6 {
        score -= 40;
    } else if months < 12 {
        score -= 20;
    }

    let days = horizon.days_until_departure;
    if days < 7 {
        score -= 30;
    } else if days < 30 {
        score -= 15;
    } else if days < 60 {
        score -= 5;
    }

    let complex_visa = HIGH_COMPLEXITY_VISAS
        .iter()
        .any(|label| visa_type.contains(label));
    if complex_visa {
        if days < 60 {
            score -= 20;
        } else if days < 90 {
            score -= 10;
        }
    }

    score.clamp(0, 100) as u8
}

pub(crate) fn risk_factors(
    horizon: TripHorizon,
    visa_type: &str,
    config: &ReadinessConfig,
) -> RiskFactors {
    let months = horizon.months_until_passport_expiry as f64;
    let passport_validity = if months >= 6.0 {
        100.0
    } else {
        (months / 6.0) * 100.0
    };

    let time_until_departure = (horizon.days_until_departure as f64 / 90.0) * 100.0;

    RiskFactors {
        passport_validity: clamp_factor(passport_validity),
        time_until_departure: clamp_factor(time_until_departure),
        visa_complexity: clamp_factor(config.visa_complexity_for(visa_type)),
        destination_risk: clamp_factor(config.destination_risk),
        document_completeness: clamp_factor(config.document_completeness),
    }
}

// Expired passports and past departures would otherwise go negative.
fn clamp_factor(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

pub(crate) fn success_probability(factors: &RiskFactors, config: &ReadinessConfig) -> u8 {
    let w = &config.weights;
    let weighted = factors.passport_validity * w.passport_validity
        + factors.time_until_departure * w.time_until_departure
        + factors.visa_complexity * w.visa_complexity
        + factors.destination_risk * w.destination_risk
        + factors.document_completeness * w.document_completeness;

    weighted.round().clamp(0.0, 100.0) as u8
}

/// Checks run in a fixed order and are independent of one another.
pub(crate) fn recommended_actions(
    factors: &RiskFactors,
    success_probability: u8,
    config: &ReadinessConfig,
) -> Vec<String> {
    let thresholds = &config.action_thresholds;
    let mut actions = Vec::new();

    if factors.passport_validity < thresholds.passport_validity {
        actions.push(
            "Renew your passport immediately - many countries require 6 months validity"
                .to_string(),
        );
    }

    if factors.time_until_departure < thresholds.time_until_departure {
        actions.push("Expedite visa processing if possible - time is limited".to_string());
    }

    if factors.visa_complexity < thresholds.visa_complexity {
        actions.push(
            "Consider hiring an immigration consultant for complex visa types".to_string(),
        );
    }

    if success_probability < thresholds.success_probability {
        actions.push("Consider travel insurance with trip cancellation coverage".to_string());
    }

    actions
}

pub(crate) fn preparation_days(factors: &RiskFactors, config: &ReadinessConfig) -> u32 {
    let tiers = &config.preparation;

    let renewal_days = if factors.passport_validity < tiers.passport_renewal_below {
        tiers.passport_renewal_days
    } else {
        0
    };

    tiers.base_days
        + tiers.visa_days(factors.visa_complexity)
        + renewal_days
        + tiers.document_buffer_days
}

#[cfg(test)]
mod tests {
    use super::*;

    fn horizon(days_until_departure: i64, months_until_passport_expiry: i64) -> TripHorizon {
        TripHorizon {
            days_until_departure,
            months_until_passport_expiry,
        }
    }

    #[test]
    fn months_round_up_partial_periods() {
        assert_eq!(ceil_months(0), 0);
        assert_eq!(ceil_months(1), 1);
        assert_eq!(ceil_months(30), 1);
        assert_eq!(ceil_months(31), 2);
        assert_eq!(ceil_months(-1), 0);
        assert_eq!(ceil_months(-30), -1);
        assert_eq!(ceil_months(-31), -1);
    }

    #[test]
    fn deduction_score_stacks_every_penalty() {
        assert_eq!(deduction_score(horizon(120, 24), "Tourist"), 100);
        assert_eq!(deduction_score(horizon(5, 3), "Work"), 10);
        assert_eq!(deduction_score(horizon(-10, -4), "Student Visa"), 10);
        assert_eq!(deduction_score(horizon(75, 10), "Business Visa"), 70);
    }

    #[test]
    fn visa_substring_match_is_case_sensitive() {
        assert_eq!(deduction_score(horizon(45, 24), "business"), 95);
        assert_eq!(deduction_score(horizon(45, 24), "Business"), 75);
    }

    #[test]
    fn factors_clamp_for_expired_documents() {
        let config = ReadinessConfig::default();
        let factors = risk_factors(horizon(-30, -5), "Tourist", &config);
        assert_eq!(factors.passport_validity, 0.0);
        assert_eq!(factors.time_until_departure, 0.0);

        let factors = risk_factors(horizon(400, 3), "Tourist", &config);
        assert_eq!(factors.passport_validity, 50.0);
        assert_eq!(factors.time_until_departure, 100.0);
    }

    #[test]
    fn preparation_days_follow_visa_tiers() {
        let config = ReadinessConfig::default();
        let calm = risk_factors(horizon(200, 24), "No Visa Required", &config);
        assert_eq!(preparation_days(&calm, &config), 14);

        let tourist = risk_factors(horizon(200, 24), "Tourist", &config);
        assert_eq!(preparation_days(&tourist, &config), 28);

        let business = risk_factors(horizon(200, 24), "Business", &config);
        assert_eq!(preparation_days(&business, &config), 44);

        let student_renewal = risk_factors(horizon(200, 2), "Student", &config);
        assert_eq!(preparation_days(&student_renewal, &config), 119);
    }

    #[test]
    fn preparation_estimate_ignores_action_thresholds() {
        let mut config = ReadinessConfig::default();
        config.action_thresholds.passport_validity = 10.0;
        let factors = risk_factors(horizon(200, 2), "Student", &config);

        assert_eq!(preparation_days(&factors, &config), 119);
        let actions = recommended_actions(&factors, 100, &config);
        assert!(!actions.iter().any(|action| action.contains("passport")));

        config.preparation.passport_renewal_below = 10.0;
        config.preparation.visa_tiers = vec![(50.0, 20)];
        assert_eq!(preparation_days(&factors, &config), 34);
    }

    #[test]
    fn all_actions_fire_for_a_rushed_work_trip() {
        let config = ReadinessConfig::default();
        let factors = risk_factors(horizon(10, 1), "Work", &config);
        let probability = success_probability(&factors, &config);
        let actions = recommended_actions(&factors, probability, &config);

        assert_eq!(actions.len(), 4);
        assert!(actions[0].contains("passport"));
        assert!(actions[1].contains("Expedite"));
        assert!(actions[2].contains("consultant"));
        assert!(actions[3].contains("insurance"));
    }
}
