/// Represents an airport with its ICAO code and geographical position.
///
/// Coordinates are stored in radians; use [`AirportRecord::from_degrees`]
/// when building records from a source that provides degrees.
#[derive(Clone, Debug, PartialEq)]
pub struct AirportRecord {
    pub icao: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl AirportRecord {
    /// Creates a record from coordinates already expressed in radians.
    pub fn new(icao: String, latitude: f64, longitude: f64) -> Self {
        AirportRecord {
            icao,
            latitude,
            longitude,
        }
    }

    /// Creates a record from coordinates in degrees, converting to radians.
    pub fn from_degrees(icao: String, latitude_deg: f64, longitude_deg: f64) -> Self {
        AirportRecord {
            icao,
            latitude: latitude_deg.to_radians(),
            longitude: longitude_deg.to_radians(),
        }
    }
}
