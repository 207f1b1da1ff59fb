use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trip details captured by the travel form.
///
/// Dates are kept as submitted; the engine parses them on use so that a
/// malformed value surfaces as [`InvalidDateError`] instead of a bogus score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TravelProfile {
    pub nationality: String,
    #[serde(alias = "passportExpirationDate")]
    pub passport_expiration: String,
    #[serde(alias = "originLocation")]
    pub leaving_from: String,
    #[serde(alias = "destinationLocation")]
    pub going_to: String,
    pub departure_date: String,
    pub visa_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose_of_travel: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
}

impl TravelProfile {
    pub fn passport_expiration_date(&self) -> Result<NaiveDate, InvalidDateError> {
        parse_travel_date(DateField::PassportExpiration, &self.passport_expiration)
    }

    pub fn departure(&self) -> Result<NaiveDate, InvalidDateError> {
        parse_travel_date(DateField::DepartureDate, &self.departure_date)
    }

    /// Applies the intake form rules. Date contents are checked later by the
    /// engine; here they only need to be present.
    pub fn validate(&self) -> Result<(), ProfileError> {
        require_min_len("nationality", &self.nationality, 2)?;
        require_min_len("passportExpiration", &self.passport_expiration, 1)?;
        require_min_len("leavingFrom", &self.leaving_from, 2)?;
        require_min_len("goingTo", &self.going_to, 2)?;
        require_min_len("departureDate", &self.departure_date, 1)?;
        require_min_len("visaType", &self.visa_type, 1)?;

        if let Some(purpose) = &self.purpose_of_travel {
            require_min_len("purposeOfTravel", purpose, 2)?;
        }

        if let Some(email) = &self.email {
            if !looks_like_email(email) {
                return Err(ProfileError::InvalidEmail(email.clone()));
            }
        }

        Ok(())
    }
}

fn require_min_len(field: &'static str, value: &str, min: usize) -> Result<(), ProfileError> {
    if value.trim().chars().count() < min {
        if min == 1 {
            return Err(ProfileError::Missing(field));
        }
        return Err(ProfileError::TooShort { field, min });
    }
    Ok(())
}

fn looks_like_email(value: &str) -> bool {
    match value.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },
    #[error("invalid email address '{0}'")]
    InvalidEmail(String),
}

/// The visa labels offered by the travel form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisaCategory {
    Tourist,
    Student,
    Work,
    Business,
    Transit,
    NoVisaRequired,
    Other,
}

impl VisaCategory {
    pub const fn ordered() -> [Self; 7] {
        [
            Self::Tourist,
            Self::Student,
            Self::Work,
            Self::Business,
            Self::Transit,
            Self::NoVisaRequired,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Tourist => "Tourist",
            Self::Student => "Student",
            Self::Work => "Work",
            Self::Business => "Business",
            Self::Transit => "Transit",
            Self::NoVisaRequired => "No Visa Required",
            Self::Other => "Other",
        }
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(value: &str) -> Option<Self> {
        Self::ordered()
            .into_iter()
            .find(|category| category.label() == value)
    }
}

impl fmt::Display for VisaCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateField {
    PassportExpiration,
    DepartureDate,
}

impl DateField {
    pub const fn label(self) -> &'static str {
        match self {
            Self::PassportExpiration => "passport expiration",
            Self::DepartureDate => "departure date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateError {
    #[error("{} '{value}' is not a valid calendar date", .field.label())]
    Unparseable { field: DateField, value: String },
    #[error("{} {date} minus {days} day(s) falls outside the supported calendar", .field.label())]
    OutOfRange {
        field: DateField,
        date: NaiveDate,
        days: i64,
    },
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (reduced to its UTC date).
pub fn parse_travel_date(field: DateField, raw: &str) -> Result<NaiveDate, InvalidDateError> {
    let trimmed = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.naive_utc().date());
    }

    Err(InvalidDateError::Unparseable {
        field,
        value: raw.to_string(),
    })
}
