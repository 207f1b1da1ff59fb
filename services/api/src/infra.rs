use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Deserialize;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use travel_ready::readiness::ReadinessEngine;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) engine: Arc<ReadinessEngine>,
}

/// Pins the evaluation instant to midnight UTC of `today` when one is given.
pub(crate) fn evaluation_instant(today: Option<NaiveDate>) -> DateTime<Utc> {
    match today {
        Some(date) => date.and_time(NaiveTime::MIN).and_utc(),
        None => Utc::now(),
    }
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|err| format!("failed to parse '{raw}' as YYYY-MM-DD ({err})"))
}

pub(crate) fn deserialize_optional_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDate>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    opt.map(|value| parse_date(&value).map_err(serde::de::Error::custom))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinned_instant_is_midnight_utc() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 4).expect("valid date");
        let instant = evaluation_instant(Some(date));
        assert_eq!(instant.date_naive(), date);
        assert_eq!(instant.to_rfc3339(), "2026-03-04T00:00:00+00:00");
    }

    #[test]
    fn parse_date_reports_bad_input() {
        let err = parse_date("04/03/2026").expect_err("slashes rejected");
        assert!(err.contains("YYYY-MM-DD"));
    }
}
