use crate::infra::evaluation_instant;
use chrono::NaiveDate;
use clap::Args;
use std::path::PathBuf;
use travel_ready::config::AppConfig;
use travel_ready::error::AppError;
use travel_ready::history::TripHistoryImporter;
use travel_ready::patterns::{analyze_travel_patterns, TravelPattern};
use travel_ready::readiness::{
    visa_processing_days, OptimalTimeline, ReadinessAssessment, ReadinessEngine, ReadinessLevel,
    TravelProfile,
};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Traveler nationality
    #[arg(long)]
    pub(crate) nationality: String,
    /// Passport expiration date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) passport_expiration: String,
    /// Departure city or airport
    #[arg(long)]
    pub(crate) leaving_from: String,
    /// Destination city or country
    #[arg(long)]
    pub(crate) going_to: String,
    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) departure_date: String,
    /// Visa category, e.g. Tourist, Student, Work, Business, Transit, "No Visa Required"
    #[arg(long)]
    pub(crate) visa_type: String,
    /// Purpose of travel
    #[arg(long)]
    pub(crate) purpose: Option<String>,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Print the assessment as JSON instead of a text report
    #[arg(long)]
    pub(crate) json: bool,
}

impl AssessArgs {
    fn to_profile(&self) -> TravelProfile {
        TravelProfile {
            nationality: self.nationality.clone(),
            passport_expiration: self.passport_expiration.clone(),
            leaving_from: self.leaving_from.clone(),
            going_to: self.going_to.clone(),
            departure_date: self.departure_date.clone(),
            visa_type: self.visa_type.clone(),
            email: None,
            purpose_of_travel: self.purpose.clone(),
            phone_number: None,
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct TimelineArgs {
    /// Departure date (YYYY-MM-DD)
    #[arg(long)]
    pub(crate) departure_date: String,
    /// Visa category used to size the processing window
    #[arg(long)]
    pub(crate) visa_type: String,
}

#[derive(Args, Debug)]
pub(crate) struct PatternsArgs {
    /// CSV export of previous trips
    #[arg(long)]
    pub(crate) trips_csv: PathBuf,
    /// Evaluation date (defaults to today)
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
}

fn configured_engine() -> Result<ReadinessEngine, AppError> {
    let config = AppConfig::load()?;
    Ok(ReadinessEngine::new(config.readiness))
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let profile = args.to_profile();
    profile.validate()?;

    let engine = configured_engine()?;
    let assessment = engine.assess(&profile, evaluation_instant(args.today))?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&assessment)
            .map_err(|err| AppError::Io(err.into()))?;
        println!("{rendered}");
    } else {
        render_assessment(&profile, &assessment);
    }

    Ok(())
}

pub(crate) fn run_timeline(args: TimelineArgs) -> Result<(), AppError> {
    let engine = configured_engine()?;
    let timeline = engine.optimal_timeline(&args.departure_date, &args.visa_type)?;

    println!(
        "Preparation timeline for {} departing {}",
        args.visa_type, args.departure_date
    );
    render_timeline(&timeline, visa_processing_days(&args.visa_type));
    Ok(())
}

pub(crate) fn run_patterns(args: PatternsArgs) -> Result<(), AppError> {
    let engine = configured_engine()?;
    let trips = TripHistoryImporter::from_path(&args.trips_csv)?;
    let today = evaluation_instant(args.today).date_naive();

    match analyze_travel_patterns(&trips, today, engine.config())? {
        Some(pattern) => render_pattern(trips.len(), &pattern),
        None => println!("No previous trips found in {}", args.trips_csv.display()),
    }

    Ok(())
}

fn render_assessment(profile: &TravelProfile, assessment: &ReadinessAssessment) {
    let analysis = &assessment.predictive_analysis;

    println!("Travel readiness report");
    println!(
        "{} -> {} ({} visa), departing {}",
        profile.leaving_from, profile.going_to, profile.visa_type, profile.departure_date
    );
    println!(
        "Evaluated {}",
        assessment.generated_at.format("%Y-%m-%d %H:%M UTC")
    );

    println!(
        "\nRisk score: {}/100 ({})",
        assessment.risk_score,
        ReadinessLevel::from_score(assessment.risk_score).label()
    );
    println!(
        "Success probability: {}% ({})",
        analysis.success_probability,
        ReadinessLevel::from_score(analysis.success_probability).label()
    );
    println!(
        "Estimated preparation time: {} days",
        analysis.estimated_preparation_days
    );

    let factors = &analysis.risk_factors;
    println!("\nRisk factors");
    println!("- Passport validity: {:.0}", factors.passport_validity);
    println!("- Time until departure: {:.0}", factors.time_until_departure);
    println!("- Visa complexity: {:.0}", factors.visa_complexity);
    println!("- Destination risk: {:.0}", factors.destination_risk);
    println!("- Document completeness: {:.0}", factors.document_completeness);

    if analysis.recommended_actions.is_empty() {
        println!("\nRecommended actions: none");
    } else {
        println!("\nRecommended actions");
        for action in &analysis.recommended_actions {
            println!("- {action}");
        }
    }

    println!("\nOptimal timeline");
    render_timeline(
        &assessment.optimal_timeline,
        visa_processing_days(&profile.visa_type),
    );
}

fn render_timeline(timeline: &OptimalTimeline, processing_days: i64) {
    println!("- Start preparation: {}", timeline.start_preparation);
    println!(
        "- Apply for visa: {} ({} day processing window)",
        timeline.apply_for_visa, processing_days
    );
    println!("- Book flight: {}", timeline.book_flight);
    println!("- Final checklist review: {}", timeline.final_checklist_review);
}

fn render_pattern(trip_count: usize, pattern: &TravelPattern) {
    println!("Travel patterns across {trip_count} trip(s)");
    println!(
        "- Frequent destinations: {}",
        pattern.frequent_destinations.join(", ")
    );
    println!(
        "- Average lead time: {} day(s)",
        pattern.average_lead_time
    );
    println!(
        "- Preferred purpose: {}",
        pattern.preferred_travel_purpose
    );
    println!("- Compliance history: {}%", pattern.compliance_history);
}
