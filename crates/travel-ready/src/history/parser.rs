use crate::readiness::TravelProfile;
use serde::{Deserialize, Deserializer};
use std::io::Read;

pub(crate) fn parse_trips<R: Read>(reader: R) -> Result<Vec<TravelProfile>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut trips = Vec::new();

    for record in csv_reader.deserialize::<TripRow>() {
        trips.push(record?.into_profile());
    }

    Ok(trips)
}

#[derive(Debug, Deserialize)]
struct TripRow {
    #[serde(rename = "Nationality")]
    nationality: String,
    #[serde(rename = "Passport Expiration")]
    passport_expiration: String,
    #[serde(rename = "Leaving From")]
    leaving_from: String,
    #[serde(rename = "Going To")]
    going_to: String,
    #[serde(rename = "Departure Date")]
    departure_date: String,
    #[serde(rename = "Visa Type")]
    visa_type: String,
    #[serde(
        rename = "Purpose Of Travel",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    purpose_of_travel: Option<String>,
}

impl TripRow {
    fn into_profile(self) -> TravelProfile {
        TravelProfile {
            nationality: self.nationality,
            passport_expiration: self.passport_expiration,
            leaving_from: self.leaving_from,
            going_to: self.going_to,
            departure_date: self.departure_date,
            visa_type: self.visa_type,
            email: None,
            purpose_of_travel: self.purpose_of_travel,
            phone_number: None,
        }
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
