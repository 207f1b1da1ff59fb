use super::domain::VisaCategory;

/// Parameter object for the readiness engine. `Default` carries the
/// production weights and thresholds.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadinessConfig {
    pub weights: FactorWeights,
    /// Stand-in until live country risk data is wired up.
    pub destination_risk: f64,
    /// Stand-in until uploaded documents are inspected.
    pub document_completeness: f64,
    /// Stand-in for travel pattern compliance history.
    pub compliance_history: u8,
    pub visa_complexity: Vec<(VisaCategory, f64)>,
    pub default_visa_complexity: f64,
    pub action_thresholds: ActionThresholds,
    pub preparation: PreparationTiers,
}

impl ReadinessConfig {
    pub fn visa_complexity_for(&self, visa_type: &str) -> f64 {
        VisaCategory::from_label(visa_type)
            .and_then(|category| {
                self.visa_complexity
                    .iter()
                    .find(|(candidate, _)| *candidate == category)
                    .map(|(_, score)| *score)
            })
            .unwrap_or(self.default_visa_complexity)
    }
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            destination_risk: 75.0,
            document_completeness: 85.0,
            compliance_history: 85,
            visa_complexity: vec![
                (VisaCategory::NoVisaRequired, 100.0),
                (VisaCategory::Transit, 85.0),
                (VisaCategory::Tourist, 80.0),
                (VisaCategory::Other, 70.0),
                (VisaCategory::Business, 60.0),
                (VisaCategory::Student, 40.0),
                (VisaCategory::Work, 35.0),
            ],
            default_visa_complexity: 70.0,
            action_thresholds: ActionThresholds::default(),
            preparation: PreparationTiers::default(),
        }
    }
}

/// Weights applied to each risk factor; they sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorWeights {
    pub passport_validity: f64,
    pub time_until_departure: f64,
    pub visa_complexity: f64,
    pub destination_risk: f64,
    pub document_completeness: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            passport_validity: 0.25,
            time_until_departure: 0.25,
            visa_complexity: 0.20,
            destination_risk: 0.15,
            document_completeness: 0.15,
        }
    }
}

/// Factor levels below which a recommended action is emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionThresholds {
    pub passport_validity: f64,
    pub time_until_departure: f64,
    pub visa_complexity: f64,
    pub success_probability: u8,
}

impl Default for ActionThresholds {
    fn default() -> Self {
        Self {
            passport_validity: 60.0,
            time_until_departure: 50.0,
            visa_complexity: 60.0,
            success_probability: 70,
        }
    }
}

/// Day allowances summed into the estimated preparation time.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparationTiers {
    pub base_days: u32,
    pub document_buffer_days: u32,
    /// `(complexity below, days)` pairs checked in order; the first match wins.
    pub visa_tiers: Vec<(f64, u32)>,
    pub passport_renewal_days: u32,
    /// Passport validity factor below which renewal time is added.
    pub passport_renewal_below: f64,
}

impl PreparationTiers {
    pub fn visa_days(&self, visa_complexity: f64) -> u32 {
        self.visa_tiers
            .iter()
            .find(|(below, _)| visa_complexity < *below)
            .map(|(_, days)| *days)
            .unwrap_or(0)
    }
}

impl Default for PreparationTiers {
    fn default() -> Self {
        Self {
            base_days: 7,
            document_buffer_days: 7,
            visa_tiers: vec![(50.0, 60), (70.0, 30), (90.0, 14)],
            passport_renewal_days: 45,
            passport_renewal_below: 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_to_one() {
        let w = FactorWeights::default();
        let total = w.passport_validity
            + w.time_until_departure
            + w.visa_complexity
            + w.destination_risk
            + w.document_completeness;
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn complexity_lookup_uses_exact_labels() {
        let config = ReadinessConfig::default();
        assert_eq!(config.visa_complexity_for("Work"), 35.0);
        assert_eq!(config.visa_complexity_for("Transit"), 85.0);
        assert_eq!(config.visa_complexity_for("Work Permit"), 70.0);
        assert_eq!(config.visa_complexity_for(""), 70.0);
    }

    #[test]
    fn visa_days_pick_the_first_matching_tier() {
        let tiers = PreparationTiers::default();
        assert_eq!(tiers.visa_days(35.0), 60);
        assert_eq!(tiers.visa_days(50.0), 30);
        assert_eq!(tiers.visa_days(80.0), 14);
        assert_eq!(tiers.visa_days(90.0), 0);
    }
}
