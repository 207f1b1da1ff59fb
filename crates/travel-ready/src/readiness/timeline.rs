use super::domain::{parse_travel_date, DateField, InvalidDateError};
use super::views::OptimalTimeline;
use chrono::{Duration, NaiveDate};

const VISA_APPLICATION_BUFFER_DAYS: i64 = 14;
const FLIGHT_BOOKING_LEAD_DAYS: i64 = 45;
const PREPARATION_LEAD_DAYS: i64 = 30;
const FINAL_REVIEW_LEAD_DAYS: i64 = 3;

/// Expected consular processing time for a visa label.
///
/// Student and work visas match on substring, as does business; only the
/// exact "No Visa Required" label skips processing.
pub fn visa_processing_days(visa_type: &str) -> i64 {
    if visa_type.contains("Student") || visa_type.contains("Work") {
        90
    } else if visa_type.contains("Business") {
        60
    } else if visa_type == "No Visa Required" {
        0
    } else {
        30
    }
}

pub(crate) fn build_timeline(
    departure_date: &str,
    visa_type: &str,
) -> Result<OptimalTimeline, InvalidDateError> {
    let departure = parse_travel_date(DateField::DepartureDate, departure_date)?;
    let processing = visa_processing_days(visa_type);

    Ok(OptimalTimeline {
        start_preparation: days_before(departure, processing + PREPARATION_LEAD_DAYS)?,
        apply_for_visa: days_before(departure, processing + VISA_APPLICATION_BUFFER_DAYS)?,
        book_flight: days_before(departure, FLIGHT_BOOKING_LEAD_DAYS)?,
        final_checklist_review: days_before(departure, FINAL_REVIEW_LEAD_DAYS)?,
    })
}

fn days_before(departure: NaiveDate, days: i64) -> Result<NaiveDate, InvalidDateError> {
    departure
        .checked_sub_signed(Duration::days(days))
        .ok_or(InvalidDateError::OutOfRange {
            field: DateField::DepartureDate,
            date: departure,
            days,
        })
}
