//! Aggregate view over a traveler's previous trips.

use crate::readiness::{InvalidDateError, ReadinessConfig, TravelProfile};
use chrono::NaiveDate;
use serde::Serialize;

const UNSPECIFIED_PURPOSE: &str = "Unspecified";
const FREQUENT_DESTINATION_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelPattern {
    pub frequent_destinations: Vec<String>,
    /// Mean days between `today` and each departure; negative for past trips.
    pub average_lead_time: i64,
    pub preferred_travel_purpose: String,
    pub compliance_history: u8,
}

/// Returns `None` when there is no history to summarize.
pub fn analyze_travel_patterns(
    trips: &[TravelProfile],
    today: NaiveDate,
    config: &ReadinessConfig,
) -> Result<Option<TravelPattern>, InvalidDateError> {
    if trips.is_empty() {
        return Ok(None);
    }

    let mut destinations: Vec<(&str, usize)> = Vec::new();
    let mut purposes: Vec<(&str, usize)> = Vec::new();
    let mut total_lead_days: i64 = 0;

    for trip in trips {
        tally(&mut destinations, trip.going_to.as_str());
        tally(
            &mut purposes,
            trip.purpose_of_travel
                .as_deref()
                .unwrap_or(UNSPECIFIED_PURPOSE),
        );
        total_lead_days += (trip.departure()? - today).num_days();
    }

    // Stable sort keeps first-seen order among ties.
    destinations.sort_by(|a, b| b.1.cmp(&a.1));
    purposes.sort_by(|a, b| b.1.cmp(&a.1));

    let frequent_destinations = destinations
        .iter()
        .take(FREQUENT_DESTINATION_LIMIT)
        .map(|(name, _)| name.to_string())
        .collect();

    let preferred_travel_purpose = purposes
        .first()
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| UNSPECIFIED_PURPOSE.to_string());

    let average_lead_time = round_half_up(total_lead_days, trips.len() as i64);

    Ok(Some(TravelPattern {
        frequent_destinations,
        average_lead_time,
        preferred_travel_purpose,
        compliance_history: config.compliance_history,
    }))
}

/// Integer mean with ties rounded toward positive infinity, so -7.5 becomes -7.
fn round_half_up(total: i64, count: i64) -> i64 {
    (2 * total + count).div_euclid(2 * count)
}

fn tally<'a>(counts: &mut Vec<(&'a str, usize)>, key: &'a str) {
    match counts.iter_mut().find(|(name, _)| *name == key) {
        Some((_, count)) => *count += 1,
        None => counts.push((key, 1)),
    }
}
