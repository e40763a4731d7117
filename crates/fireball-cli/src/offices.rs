//! Built-in query defaults and the reference office locations.

use fireball_core::{Candidate, Coordinate, QueryParams};

pub const DEFAULT_DATE_MIN: &str = "2017-01-01";
pub const DEFAULT_ENERGY_MIN: &str = "0.3";

/// Parameters sent with every lookup. `sort=-energy` asks the API for
/// brightest-first rows; `req_alt=true` keeps only events with a known
/// altitude.
pub fn base_params() -> QueryParams {
    QueryParams::new()
        .with("date_min", DEFAULT_DATE_MIN)
        .with("req_alt", "true")
        .with("energy_min", DEFAULT_ENERGY_MIN)
        .with("sort", "-energy")
}

pub fn reference_offices() -> Vec<Candidate> {
    vec![
        Candidate::new("Boston", Coordinate::new(42.354_558, -71.054_254)),
        Candidate::new("NCR", Coordinate::new(28.574_389, 77.312_638)),
        Candidate::new("San Francisco", Coordinate::new(37.793_700, -122.403_906)),
    ]
}
