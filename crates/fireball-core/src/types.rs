//! Domain types shared by the API client, the locator and the CLI.
//!
//! All coordinates are in signed degrees: negative latitude is south of the
//! equator, negative longitude is west of Greenwich.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::CoreError;

/// Half-width of the search box when the caller does not pick one.
pub const DEFAULT_BUFFER_DEGREES: f64 = 15.0;

/// A latitude/longitude pair in signed degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lon"` (whitespace around either number is ignored).
///
/// Latitude must lie in `[-90, 90]` and longitude in `[-180, 180]`.
impl FromStr for Coordinate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidCoordinate {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (lat, lon) = s
            .split_once(',')
            .ok_or_else(|| invalid("expected \"latitude,longitude\""))?;
        let latitude = lat
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(&format!("latitude: {e}")))?;
        let longitude = lon
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(&format!("longitude: {e}")))?;

        if !(-90.0..=90.0).contains(&latitude) {
            return Err(invalid("latitude must be within [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(invalid("longitude must be within [-180, 180]"));
        }

        Ok(Self::new(latitude, longitude))
    }
}

/// A location the caller wants a fireball for, optionally named.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candidate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub coordinate: Coordinate,
}

impl Candidate {
    #[must_use]
    pub fn new(label: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            label: Some(label.into()),
            coordinate,
        }
    }

    #[must_use]
    pub fn unlabelled(coordinate: Coordinate) -> Self {
        Self {
            label: None,
            coordinate,
        }
    }
}

impl fmt::Display for Candidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label} {}", self.coordinate),
            None => write!(f, "{}", self.coordinate),
        }
    }
}

/// A fireball observation with its location already in signed degrees.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FireballRecord {
    /// Peak-brightness time as reported by the API (`"YYYY-MM-DD hh:mm:ss"`).
    /// Kept verbatim.
    pub timestamp: String,
    /// Total radiated energy; higher means brighter.
    pub energy: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl FireballRecord {
    #[must_use]
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

/// Inclusive latitude/longitude rectangle centered on a candidate.
///
/// Bounds are plain arithmetic: a box near the antimeridian or a pole is not
/// wrapped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    #[must_use]
    pub fn around(center: Coordinate, buffer: f64) -> Self {
        Self {
            min_lat: center.latitude - buffer,
            max_lat: center.latitude + buffer,
            min_lon: center.longitude - buffer,
            max_lon: center.longitude + buffer,
        }
    }

    #[must_use]
    pub fn contains(&self, point: Coordinate) -> bool {
        point.latitude >= self.min_lat
            && point.latitude <= self.max_lat
            && point.longitude >= self.min_lon
            && point.longitude <= self.max_lon
    }
}
