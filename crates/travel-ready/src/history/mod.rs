mod parser;

use crate::readiness::TravelProfile;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum TripImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for TripImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TripImportError::Io(err) => write!(f, "failed to read trip history: {}", err),
            TripImportError::Csv(err) => write!(f, "invalid trip history CSV data: {}", err),
        }
    }
}

impl std::error::Error for TripImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TripImportError::Io(err) => Some(err),
            TripImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TripImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TripImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Loads previous trips exported from the travel form as CSV.
pub struct TripHistoryImporter;

impl TripHistoryImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<TravelProfile>, TripImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<TravelProfile>, TripImportError> {
        Ok(parser::parse_trips(reader)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const HEADER: &str = "Nationality,Passport Expiration,Leaving From,Going To,Departure Date,Visa Type,Purpose Of Travel\n";

    #[test]
    fn reads_rows_and_trims_cells() {
        let data = format!(
            "{HEADER}India , 2030-01-01,Delhi,London, 2026-05-01 ,Student, Study\nIndia,2030-01-01,Delhi,Paris,2026-07-01,Tourist,\n"
        );

        let trips = TripHistoryImporter::from_reader(Cursor::new(data)).expect("imports");

        assert_eq!(trips.len(), 2);
        assert_eq!(trips[0].nationality, "India");
        assert_eq!(trips[0].departure_date, "2026-05-01");
        assert_eq!(trips[0].purpose_of_travel.as_deref(), Some("Study"));
        assert_eq!(trips[1].going_to, "Paris");
        assert!(trips[1].purpose_of_travel.is_none());
    }

    #[test]
    fn missing_columns_are_reported() {
        let data = "Nationality,Going To\nIndia,London\n";
        let err = TripHistoryImporter::from_reader(Cursor::new(data)).expect_err("rejects");
        assert!(matches!(err, TripImportError::Csv(_)));
        assert!(err.to_string().contains("invalid trip history CSV"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = TripHistoryImporter::from_path("/nonexistent/trips.csv").expect_err("no file");
        assert!(matches!(err, TripImportError::Io(_)));
    }
}
