use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

/// Per-factor sub-scores on a 0-100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskFactors {
    pub passport_validity: f64,
    pub time_until_departure: f64,
    pub visa_complexity: f64,
    pub destination_risk: f64,
    pub document_completeness: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveAnalysis {
    pub success_probability: u8,
    pub recommended_actions: Vec<String>,
    pub risk_factors: RiskFactors,
    #[serde(rename = "estimatedPreparationTime")]
    pub estimated_preparation_days: u32,
}

/// Milestones counted back from the departure date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimalTimeline {
    pub start_preparation: NaiveDate,
    pub apply_for_visa: NaiveDate,
    pub book_flight: NaiveDate,
    #[serde(rename = "finalChecklist")]
    pub final_checklist_review: NaiveDate,
}

/// Combined response for one trip.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessAssessment {
    pub risk_score: u8,
    pub predictive_analysis: PredictiveAnalysis,
    pub optimal_timeline: OptimalTimeline,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessLevel {
    Excellent,
    Good,
    NeedsAttention,
}

impl ReadinessLevel {
    pub const fn from_score(score: u8) -> Self {
        if score >= 80 {
            Self::Excellent
        } else if score >= 60 {
            Self::Good
        } else {
            Self::NeedsAttention
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent - you're well prepared",
            Self::Good => "Good - a few things to address",
            Self::NeedsAttention => "Needs attention - act now",
        }
    }
}
