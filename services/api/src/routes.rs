use crate::infra::{deserialize_optional_date, evaluation_instant, AppState};
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::atomic::Ordering;
use travel_ready::error::AppError;
use travel_ready::history::TripHistoryImporter;
use travel_ready::patterns::{analyze_travel_patterns, TravelPattern};
use travel_ready::readiness::{OptimalTimeline, ReadinessAssessment, TravelProfile};
use tracing::{info, warn};

#[derive(Debug, Deserialize)]
pub(crate) struct AnalyzeRequest {
    #[serde(flatten)]
    pub(crate) profile: TravelProfile,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct TimelineRequest {
    pub(crate) departure_date: String,
    pub(crate) visa_type: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PatternsRequest {
    #[serde(default)]
    pub(crate) trips: Vec<TravelProfile>,
    #[serde(default)]
    pub(crate) trips_csv: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct PatternsResponse {
    pub(crate) data_source: TripDataSource,
    pub(crate) trip_count: usize,
    pub(crate) pattern: Option<TravelPattern>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub(crate) enum TripDataSource {
    Csv,
    Inline,
}

pub(crate) fn readiness_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/travel/analyze", post(analyze_endpoint))
        .route("/api/v1/travel/timeline", post(timeline_endpoint))
        .route("/api/v1/travel/patterns", post(patterns_endpoint))
        .with_state(state)
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn analyze_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<AnalyzeRequest>,
) -> Result<Json<ReadinessAssessment>, AppError> {
    let AnalyzeRequest { profile, today } = payload;

    if let Err(err) = profile.validate() {
        warn!(error = %err, "rejected travel profile");
        return Err(err.into());
    }

    let assessment = state
        .engine
        .assess(&profile, evaluation_instant(today))
        .inspect_err(|err| warn!(error = %err, "travel profile carried an invalid date"))?;

    info!(
        destination = %profile.going_to,
        visa_type = %profile.visa_type,
        risk_score = assessment.risk_score,
        success_probability = assessment.predictive_analysis.success_probability,
        "readiness assessment generated"
    );

    Ok(Json(assessment))
}

pub(crate) async fn timeline_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<TimelineRequest>,
) -> Result<Json<OptimalTimeline>, AppError> {
    let timeline = state
        .engine
        .optimal_timeline(&payload.departure_date, &payload.visa_type)?;
    Ok(Json(timeline))
}

/// Summarizes trip history sent either inline as `trips` or as a `tripsCsv`
/// export; a request carrying both is rejected.
pub(crate) async fn patterns_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<PatternsRequest>,
) -> Result<Json<PatternsResponse>, AppError> {
    let PatternsRequest {
        trips,
        trips_csv,
        today,
    } = payload;

    if trips_csv.is_some() && !trips.is_empty() {
        warn!(inline_trips = trips.len(), "patterns request carried two trip sources");
        return Err(AppError::InvalidRequest(
            "send either trips or tripsCsv, not both".to_string(),
        ));
    }

    let (trips, data_source) = match trips_csv {
        Some(csv) => {
            let reader = Cursor::new(csv.into_bytes());
            (TripHistoryImporter::from_reader(reader)?, TripDataSource::Csv)
        }
        None => (trips, TripDataSource::Inline),
    };

    let today = evaluation_instant(today).date_naive();
    let pattern = analyze_travel_patterns(&trips, today, state.engine.config())?;

    Ok(Json(PatternsResponse {
        data_source,
        trip_count: trips.len(),
        pattern,
    }))
}
