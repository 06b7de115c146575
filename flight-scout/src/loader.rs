use airport_index::record::AirportRecord;
use airport_index::AirportIndex;
use csv::ReaderBuilder;
use std::fmt::{self, Display};
use std::path::Path;

/// Outcome of one load pass over an airport source file.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct LoadSummary {
    /// Records accepted by the index.
    pub inserted: usize,
    /// Rows skipped for a bad code length or unparsable coordinates.
    pub skipped: usize,
    /// Records rejected by the index's head-duplicate check.
    pub rejected_duplicates: usize,
}

/// Reads a comma-separated airport source file into the index.
///
/// The file has no header row. Field 1 is the ICAO code — rows whose first
/// field is not exactly 4 characters never reach the index. Fields 2-5 are
/// ignored; fields 6 and 7 are latitude and longitude in degrees, converted
/// to radians before the record is built. Malformed rows are skipped, not
/// fatal; only a failure to open or read the file aborts the load.
///
/// # Parameters
/// - `path`: Path of the source CSV file.
/// - `index`: The index to populate.
///
/// # Returns
/// * `Result<LoadSummary, LoaderError>` - Per-row accounting of the load.
///
/// # Errors
/// - `LoaderError::Csv` - The file could not be opened or read.
pub fn load_airports(path: &Path, index: &mut AirportIndex) -> Result<LoadSummary, LoaderError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut summary = LoadSummary::default();

    for row in reader.records() {
        let row = row?;

        let code = match row.get(0) {
            Some(field) if field.len() == 4 => field,
            _ => {
                summary.skipped += 1;
                continue;
            }
        };

        let latitude = row.get(5).and_then(|v| v.trim().parse::<f64>().ok());
        let longitude = row.get(6).and_then(|v| v.trim().parse::<f64>().ok());
        let (latitude, longitude) = match (latitude, longitude) {
            (Some(lat), Some(lon)) => (lat, lon),
            _ => {
                summary.skipped += 1;
                continue;
            }
        };

        let record = AirportRecord::from_degrees(code.to_string(), latitude, longitude);
        if index.insert(record) {
            summary.inserted += 1;
        } else {
            summary.rejected_duplicates += 1;
        }
    }

    Ok(summary)
}

/// Errors that abort a load; per-row problems are skipped instead.
#[derive(Debug)]
pub enum LoaderError {
    Csv(csv::Error),
}

impl Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Csv(e) => write!(f, "Could not read airport source: {}", e),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Csv(e) => Some(e),
        }
    }
}

impl From<csv::Error> for LoaderError {
    fn from(err: csv::Error) -> Self {
        LoaderError::Csv(err)
    }
}
