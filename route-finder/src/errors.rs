use std::fmt::{self, Display};

/// Enum representing the ways a destination search can come back empty.
///
/// The possible errors are:
///
/// - `UnknownDeparture`: the departure code does not resolve in the index.
/// - `NoMatchWithinTolerance`: one full cyclic pass over the catalog found no
///   airport whose flight duration falls inside the tolerance band.
///
/// Both are reported as values, never as panics; an exhausted search is an
/// answer, not a failure.
#[derive(Debug, PartialEq)]
pub enum FinderError {
    UnknownDeparture(String),
    NoMatchWithinTolerance { expected_hours: f64 },
}

impl Display for FinderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FinderError::UnknownDeparture(code) => {
                write!(f, "[UnknownDeparture]: No airport known as '{}'", code)
            }
            FinderError::NoMatchWithinTolerance { expected_hours } => write!(
                f,
                "[NoMatchWithinTolerance]: No airport within +/-10% of {:.1} flying hours",
                expected_hours
            ),
        }
    }
}

impl std::error::Error for FinderError {}
