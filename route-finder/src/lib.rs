use airport_index::catalog::AirportCatalog;
use airport_index::AirportIndex;
use errors::FinderError;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub mod errors;
pub mod geo;

/// Cruising speed used to convert distance into flight duration, in m/s.
pub const CRUISE_SPEED_M_S: f64 = 252.22;

/// Relative error allowed between the computed and the expected duration.
pub const DURATION_TOLERANCE: f64 = 0.10;

/// A destination accepted by the search, with its computed flight duration.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteMatch {
    pub destination: String,
    pub duration_hours: f64,
}

/// Searches the catalog for an airport reachable from a departure in
/// approximately a requested number of flying hours.
///
/// The finder borrows a fully built [`AirportIndex`] and [`AirportCatalog`]
/// and answers one query per call; both structures stay read-only.
pub struct DestinationFinder<'a> {
    index: &'a AirportIndex,
    catalog: &'a AirportCatalog,
    rng: StdRng,
}

impl<'a> DestinationFinder<'a> {
    /// Creates a finder whose scan start is seeded from OS entropy.
    pub fn new(index: &'a AirportIndex, catalog: &'a AirportCatalog) -> Self {
        DestinationFinder {
            index,
            catalog,
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a finder with a fixed RNG seed, for reproducible runs.
    ///
    /// # Parameters
    /// - `seed`: Seed for the scan's random starting position.
    pub fn with_seed(index: &'a AirportIndex, catalog: &'a AirportCatalog, seed: u64) -> Self {
        DestinationFinder {
            index,
            catalog,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Finds a destination whose flight duration from `departure_code` falls
    /// within the tolerance band around `expected_hours`.
    ///
    /// The scan starts at a random catalog position and walks at most one
    /// full cyclic pass; candidates and the departure are both resolved
    /// through bucket-head lookup, and a candidate is accepted when
    /// `|duration - expected| / expected < DURATION_TOLERANCE` (strict).
    /// The departure itself has duration 0 and can never satisfy a positive
    /// target, so self-matches need no explicit filtering.
    ///
    /// # Parameters
    /// - `departure_code`: 4-character code of the departure airport.
    /// - `expected_hours`: Desired flight duration, in hours (> 0).
    ///
    /// # Returns
    /// * `Result<RouteMatch, FinderError>` - The resolved destination code
    ///   and its duration in hours.
    ///
    /// # Errors
    /// - `FinderError::UnknownDeparture` - The departure does not resolve.
    /// - `FinderError::NoMatchWithinTolerance` - One full pass over the
    ///   catalog (or an empty catalog) produced no acceptable candidate.
    pub fn find_destination(
        &mut self,
        departure_code: &str,
        expected_hours: f64,
    ) -> Result<RouteMatch, FinderError> {
        let departure = self
            .index
            .lookup(departure_code)
            .ok_or_else(|| FinderError::UnknownDeparture(departure_code.to_string()))?;

        if self.catalog.is_empty() {
            return Err(FinderError::NoMatchWithinTolerance { expected_hours });
        }

        let expected_seconds = expected_hours * 3600.0;
        let start = self.rng.gen_range(0..self.catalog.len());

        for offset in 0..self.catalog.len() {
            let code = self.catalog.at(start + offset);
            let candidate = match self.index.lookup(code) {
                Some(record) => record,
                None => continue,
            };

            let duration_seconds = geo::distance(
                departure.latitude,
                candidate.latitude,
                departure.longitude,
                candidate.longitude,
            ) / CRUISE_SPEED_M_S;

            if ((duration_seconds - expected_seconds) / expected_seconds).abs()
                < DURATION_TOLERANCE
            {
                return Ok(RouteMatch {
                    destination: candidate.icao.clone(),
                    duration_hours: duration_seconds / 3600.0,
                });
            }
        }

        Err(FinderError::NoMatchWithinTolerance { expected_hours })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airport_index::record::AirportRecord;

    fn equator_fixture(codes_and_lon_deg: &[(&str, f64)]) -> (AirportIndex, AirportCatalog) {
        let mut index = AirportIndex::new();
        for (code, lon_deg) in codes_and_lon_deg {
            let accepted =
                index.insert(AirportRecord::from_degrees(code.to_string(), 0.0, *lon_deg));
            assert!(accepted, "fixture codes must not collide as heads");
        }
        let catalog = AirportCatalog::build(&index, index.len());
        (index, catalog)
    }

    // 1 degree of longitude at the equator is ~111.19 km, i.e. ~441 s at
    // cruise speed: within 10% of a 0.12 h target.
    const ONE_DEGREE_HOURS: f64 = 0.12;

    #[test]
    fn test_finds_the_only_airport_in_range() {
        let (index, catalog) = equator_fixture(&[("AAAA", 0.0), ("BBBB", 1.0)]);
        let mut finder = DestinationFinder::with_seed(&index, &catalog, 7);

        let found = finder
            .find_destination("AAAA", ONE_DEGREE_HOURS)
            .expect("BBBB should be within tolerance");
        assert_eq!(found.destination, "BBBB");
        assert!(
            (found.duration_hours - 0.1225).abs() < 0.001,
            "expected ~0.1225 hours, got {}",
            found.duration_hours
        );
    }

    #[test]
    fn test_absurd_duration_exhausts_the_bounded_scan() {
        let (index, catalog) = equator_fixture(&[("AAAA", 0.0), ("BBBB", 1.0)]);
        let mut finder = DestinationFinder::with_seed(&index, &catalog, 7);

        let result = finder.find_destination("AAAA", 10_000.0);
        assert_eq!(
            result,
            Err(FinderError::NoMatchWithinTolerance {
                expected_hours: 10_000.0
            }),
            "no airport is 10000 flying hours away; the scan must stop"
        );
    }

    #[test]
    fn test_unknown_departure_short_circuits() {
        let (index, catalog) = equator_fixture(&[("AAAA", 0.0), ("BBBB", 1.0)]);
        let mut finder = DestinationFinder::new(&index, &catalog);

        let result = finder.find_destination("XXXX", 1.0);
        assert_eq!(
            result,
            Err(FinderError::UnknownDeparture("XXXX".to_string()))
        );
    }

    #[test]
    fn test_empty_catalog_reports_no_match() {
        let (index, _) = equator_fixture(&[("AAAA", 0.0)]);
        let empty = AirportCatalog::build(&index, 0);
        let mut finder = DestinationFinder::new(&index, &empty);

        let result = finder.find_destination("AAAA", 1.0);
        assert_eq!(
            result,
            Err(FinderError::NoMatchWithinTolerance { expected_hours: 1.0 })
        );
    }

    #[test]
    fn test_departure_never_matches_itself() {
        let (index, catalog) = equator_fixture(&[("AAAA", 0.0)]);
        let mut finder = DestinationFinder::with_seed(&index, &catalog, 0);

        let result = finder.find_destination("AAAA", 1.0);
        assert!(
            result.is_err(),
            "a zero-duration self-flight can never sit within a positive band"
        );
    }

    #[test]
    fn test_seeded_search_is_deterministic() {
        // CCCC and DDDD are both ~1 degree from AAAA, so both are acceptable;
        // the same seed must keep picking the same one.
        let (index, catalog) =
            equator_fixture(&[("AAAA", 0.0), ("CCCC", 1.0), ("DDDD", -1.0)]);

        let first = DestinationFinder::with_seed(&index, &catalog, 42)
            .find_destination("AAAA", ONE_DEGREE_HOURS)
            .expect("some airport should match");
        let second = DestinationFinder::with_seed(&index, &catalog, 42)
            .find_destination("AAAA", ONE_DEGREE_HOURS)
            .expect("some airport should match");

        assert_eq!(first, second, "a fixed seed must reproduce the result");
    }
}
