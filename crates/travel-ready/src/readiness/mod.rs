mod config;
pub mod domain;
mod rules;
mod timeline;
pub mod views;

pub use config::{ActionThresholds, FactorWeights, PreparationTiers, ReadinessConfig};
pub use domain::{DateField, InvalidDateError, ProfileError, TravelProfile, VisaCategory};
pub use timeline::visa_processing_days;
pub use views::{
    OptimalTimeline, PredictiveAnalysis, ReadinessAssessment, ReadinessLevel, RiskFactors,
};

use chrono::{DateTime, NaiveDate, Utc};
use rules::TripHorizon;

/// Stateless evaluator that scores one trip against the configured weights.
///
/// The deduction-based risk score and the weighted success probability are
/// separate formulas and may disagree for the same trip.
#[derive(Debug, Clone, Default)]
pub struct ReadinessEngine {
    config: ReadinessConfig,
}

impl ReadinessEngine {
    pub fn new(config: ReadinessConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReadinessConfig {
        &self.config
    }

    pub fn risk_score(
        &self,
        profile: &TravelProfile,
        today: NaiveDate,
    ) -> Result<u8, InvalidDateError> {
        let horizon = TripHorizon::measure(profile, today)?;
        Ok(rules::deduction_score(horizon, &profile.visa_type))
    }

    pub fn predictive_analysis(
        &self,
        profile: &TravelProfile,
        today: NaiveDate,
    ) -> Result<PredictiveAnalysis, InvalidDateError> {
        let horizon = TripHorizon::measure(profile, today)?;
        let risk_factors = rules::risk_factors(horizon, &profile.visa_type, &self.config);
        let success_probability = rules::success_probability(&risk_factors, &self.config);
        let recommended_actions =
            rules::recommended_actions(&risk_factors, success_probability, &self.config);
        let estimated_preparation_days = rules::preparation_days(&risk_factors, &self.config);

        Ok(PredictiveAnalysis {
            success_probability,
            recommended_actions,
            risk_factors,
            estimated_preparation_days,
        })
    }

    pub fn optimal_timeline(
        &self,
        departure_date: &str,
        visa_type: &str,
    ) -> Result<OptimalTimeline, InvalidDateError> {
        timeline::build_timeline(departure_date, visa_type)
    }

    /// Runs all three computations against the same evaluation instant.
    pub fn assess(
        &self,
        profile: &TravelProfile,
        now: DateTime<Utc>,
    ) -> Result<ReadinessAssessment, InvalidDateError> {
        let today = now.date_naive();

        Ok(ReadinessAssessment {
            risk_score: self.risk_score(profile, today)?,
            predictive_analysis: self.predictive_analysis(profile, today)?,
            optimal_timeline: self.optimal_timeline(&profile.departure_date, &profile.visa_type)?,
            generated_at: now,
        })
    }
}
